//! Invoice creation, booking and orchestration

pub mod ports;
pub mod service;

pub use ports::*;
pub use service::InvoiceService;
