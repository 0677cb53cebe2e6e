//! Common types shared across database implementations

pub mod error;

pub use error::{DatabaseError, DatabaseResult};
