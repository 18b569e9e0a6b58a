//! Pure domain logic for the comic collection tracker.
//!
//! No I/O lives here: the modules in this crate take plain values (owned
//! volume numbers, recognized text, calendar months) and return plain values.
//! The `api` crate wires them to the database and HTTP layers.

pub mod account;
pub mod catalog;
pub mod error;
pub mod gaps;
pub mod isbn;
pub mod releases;
pub mod types;
