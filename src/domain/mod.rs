//! Domain Layer
//!
//! Core business entity definitions

pub mod employee;
pub mod org;

pub use employee::*;
pub use org::*;
