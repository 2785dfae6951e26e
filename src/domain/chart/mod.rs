//! Chart aggregate: the line chart configuration and the single-instance slot.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
