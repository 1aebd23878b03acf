//! Contact lookup and find-or-create resolution

pub mod ports;
pub mod query;
pub mod resolver;

pub use ports::*;
pub use query::{ContactFilter, FilterValue};
pub use resolver::ContactResolver;
