pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::bank_service::{BankService, ServiceError};
pub use domain::country::CountryRegistry;
pub use domain::model::{Bank, BankBranch, BankPayload, CountryBanks};
pub use domain::validation::{BankValidator, ValidationError};
pub use infra::config::Config;
pub use storage::{BankStore, PostgresBankStore, StorageError};
