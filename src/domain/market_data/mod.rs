//! Market data aggregate: spot rate, price history and their value objects.

pub mod entities;
pub mod rate_state;
pub mod repositories;
pub mod value_objects;

pub use entities::*;
pub use rate_state::*;
pub use repositories::*;
pub use value_objects::*;
