//! Application layer - Use cases and orchestration
//!
//! Contains the providers that turn a city name into history, weather and
//! imagery, the fan-out join that runs them concurrently, and the port
//! definitions implemented by infrastructure adapters.

pub mod error;
pub mod fan_out;
pub mod json_extract;
pub mod ports;
pub mod services;
pub mod urlencoding;

pub use error::ApplicationError;
pub use fan_out::{FanOut, Joined, Necessity};
pub use json_extract::extract_json_object;
pub use ports::*;
pub use services::*;
