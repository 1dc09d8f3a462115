#![warn(clippy::uninlined_format_args)]

pub mod balance_presenter;
pub mod error_presenter;

pub use balance_presenter::BalancePresenter;
pub use error_presenter::{format_amount_error, format_split_error, format_validation_errors};
