#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod form;
pub mod model;
pub mod ports;
pub mod purchase_service;

pub use error::{FormError, RepositoryError, ServiceError};
pub use form::PurchaseForm;
pub use model::{PurchaseDetails, PurchaseDraft};
pub use ports::PurchaseRepository;
pub use purchase_service::PurchaseService;
