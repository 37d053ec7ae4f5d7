//! Command implementations.

pub mod verify;

pub use self::verify::execute_verify;
