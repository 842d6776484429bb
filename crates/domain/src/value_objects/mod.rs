//! Value Objects - Immutable, identity-less domain primitives

mod city_name;
mod coordinates;
mod hex_color;

pub use city_name::CityName;
pub use coordinates::{Coordinates, InvalidCoordinates};
pub use hex_color::HexColor;
