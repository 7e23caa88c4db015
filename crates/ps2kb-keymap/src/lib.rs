//! Scancode to logical key tables for PS/2 keyboards.
//!
//! A [`ScancodeTable`] maps the make code of a key to a [`KeyCode`], which
//! is either a printable ASCII character, a modifier or a named key
//! carrying its HID usage. Tables are built at compile time and never
//! change afterwards, so they can be read from any context without
//! synchronization.
#![no_std]

mod keycode;
pub mod set2;
mod table;

pub use keycode::*;
pub use table::*;
