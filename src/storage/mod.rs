//! Persistence boundary for bank records.

use crate::domain::model::{Bank, CountryBanks};
use async_trait::async_trait;

pub mod postgres;

pub use postgres::PostgresBankStore;

/// Storage failures. Display text of the non-database variants is part of the API.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Given Swift Code not found")]
    SwiftCodeNotFound,
    #[error("Country with given ISO2 Code does not have any swift codes")]
    CountryNotFound,
    #[error("Given Swift Code already exists")]
    SwiftCodeExists,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// The four operations the service needs from a bank store.
///
/// Implementations must enforce uniqueness of `swift_code`: of two concurrent
/// inserts of the same code exactly one succeeds.
#[async_trait]
pub trait BankStore: Send + Sync {
    /// Looks up a bank by exact code. Headquarters records come back with their branches.
    async fn get_bank(&self, swift_code: &str) -> Result<Bank>;

    /// Lists every bank stored for a country; `CountryNotFound` if there are none.
    async fn get_country_banks(&self, country_iso2: &str) -> Result<CountryBanks>;

    /// Inserts a validated bank; `SwiftCodeExists` if the code is taken.
    async fn add_bank(&self, bank: &Bank) -> Result<()>;

    /// Deletes a bank by code; `SwiftCodeNotFound` if it did not exist.
    async fn delete_bank(&self, swift_code: &str) -> Result<()>;

    /// Round-trips the backing store.
    async fn ping(&self) -> Result<()>;
}
