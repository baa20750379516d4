//! The bank directory service.
//!
//! Sits between the transport layer and storage:
//! 1.  Validates inbound payloads before anything is written.
//! 2.  Forwards lookups, inserts and deletes to the configured [`BankStore`].

use crate::domain::country::CountryRegistry;
use crate::domain::model::{Bank, BankPayload, CountryBanks};
use crate::domain::validation::{swift, BankValidator, ValidationError};
use crate::storage::{BankStore, StorageError};
use std::sync::Arc;

/// Failure of a service operation.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Composes the validator and the store.
#[derive(Clone)]
pub struct BankService {
    store: Arc<dyn BankStore>,
    validator: Arc<BankValidator>,
}

impl BankService {
    pub fn new(store: Arc<dyn BankStore>, validator: BankValidator) -> Self {
        Self {
            store,
            validator: Arc::new(validator),
        }
    }

    pub fn store(&self) -> &Arc<dyn BankStore> {
        &self.store
    }

    pub fn registry(&self) -> &CountryRegistry {
        self.validator.registry()
    }

    /// True if `code` has the structural shape of a SWIFT code.
    pub fn is_valid_swift_code(&self, code: &str) -> bool {
        swift::is_well_formed(code)
    }

    /// True if `code` is two uppercase letters known to the registry.
    pub fn is_valid_country_code(&self, code: &str) -> bool {
        code.len() == 2
            && code.chars().all(|c| c.is_ascii_uppercase())
            && self.registry().contains(code)
    }

    pub async fn get_bank(&self, swift_code: &str) -> Result<Bank, StorageError> {
        self.store.get_bank(swift_code).await
    }

    pub async fn get_country_banks(&self, country_iso2: &str) -> Result<CountryBanks, StorageError> {
        self.store.get_country_banks(country_iso2).await
    }

    /// Validates `payload` and stores it. Returns the stored record.
    pub async fn add_bank(&self, payload: BankPayload) -> Result<Bank, ServiceError> {
        let bank = self.validator.validate(payload)?;
        self.store.add_bank(&bank).await?;
        tracing::info!(swift_code = %bank.swift_code, "bank added");
        Ok(bank)
    }

    pub async fn delete_bank(&self, swift_code: &str) -> Result<(), StorageError> {
        self.store.delete_bank(swift_code).await?;
        tracing::info!(swift_code, "bank deleted");
        Ok(())
    }
}
