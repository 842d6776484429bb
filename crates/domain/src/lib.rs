//! Domain layer for CityLore
//!
//! Contains the records assembled for a city overview, the value objects
//! they are built from, and the validation rules that turn untrusted model
//! output into typed data. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
