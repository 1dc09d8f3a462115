#![warn(clippy::uninlined_format_args)]

pub mod repository;

pub use repository::InMemoryPurchaseRepository;
