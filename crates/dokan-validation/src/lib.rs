//! Dokan Validation Core
//!
//! Pure validation functions shared by live (debounced) and submit-time
//! validation of the shop registration form. Nothing in this crate performs
//! I/O or holds state.

pub mod password;
pub mod phone;
pub mod string;

// Re-export all validators
pub use password::*;
pub use phone::*;
pub use string::*;
