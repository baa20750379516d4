//! Shared fixtures: an in-memory `BankStore` and sample payloads.

#![allow(dead_code)]

use async_trait::async_trait;
use bic_directory::domain::validation::swift;
use bic_directory::storage::Result;
use bic_directory::{Bank, BankPayload, BankStore, CountryBanks, StorageError};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Keeps rows ordered by code, mirroring the relational adapter's output order.
#[derive(Default)]
pub struct MemoryBankStore {
    rows: Mutex<BTreeMap<String, Bank>>,
}

impl MemoryBankStore {
    pub fn with_banks(banks: impl IntoIterator<Item = Bank>) -> Self {
        let store = Self::default();
        {
            let mut rows = store.rows.lock().unwrap();
            for bank in banks {
                rows.insert(bank.swift_code.clone(), bank);
            }
        }
        store
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn get(&self, swift_code: &str) -> Option<Bank> {
        self.rows.lock().unwrap().get(swift_code).cloned()
    }
}

#[async_trait]
impl BankStore for MemoryBankStore {
    async fn get_bank(&self, swift_code: &str) -> Result<Bank> {
        let rows = self.rows.lock().unwrap();
        let mut bank = rows
            .get(swift_code)
            .cloned()
            .ok_or(StorageError::SwiftCodeNotFound)?;
        if bank.is_headquarter {
            if let Some(prefix) = swift::branch_prefix(&bank.swift_code) {
                bank.branches = rows
                    .values()
                    .filter(|b| b.swift_code.starts_with(prefix) && !b.is_headquarter)
                    .map(Bank::summary)
                    .collect();
            }
        }
        Ok(bank)
    }

    async fn get_country_banks(&self, country_iso2: &str) -> Result<CountryBanks> {
        let rows = self.rows.lock().unwrap();
        let banks: Vec<&Bank> = rows
            .values()
            .filter(|b| b.country_iso2 == country_iso2)
            .collect();
        let first = banks.first().ok_or(StorageError::CountryNotFound)?;
        Ok(CountryBanks {
            country_iso2: first.country_iso2.clone(),
            country_name: first.country_name.clone(),
            swift_codes: banks.iter().map(|b| b.summary()).collect(),
        })
    }

    async fn add_bank(&self, bank: &Bank) -> Result<()> {
        let mut rows = self.rows.lock().unwrap();
        if rows.contains_key(&bank.swift_code) {
            return Err(StorageError::SwiftCodeExists);
        }
        rows.insert(bank.swift_code.clone(), bank.clone());
        Ok(())
    }

    async fn delete_bank(&self, swift_code: &str) -> Result<()> {
        self.rows
            .lock()
            .unwrap()
            .remove(swift_code)
            .map(|_| ())
            .ok_or(StorageError::SwiftCodeNotFound)
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

/// Store whose every operation fails as if the database were unreachable.
pub struct UnavailableStore;

#[async_trait]
impl BankStore for UnavailableStore {
    async fn get_bank(&self, _swift_code: &str) -> Result<Bank> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn get_country_banks(&self, _country_iso2: &str) -> Result<CountryBanks> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn add_bank(&self, _bank: &Bank) -> Result<()> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn delete_bank(&self, _swift_code: &str) -> Result<()> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn ping(&self) -> Result<()> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}

pub fn bank(swift_code: &str, country_iso2: &str, country_name: &str) -> Bank {
    Bank {
        address: format!("{} Test Street", swift_code),
        bank_name: format!("Bank {}", swift_code),
        country_iso2: country_iso2.to_string(),
        country_name: country_name.to_string(),
        is_headquarter: swift::is_headquarters_code(swift_code),
        swift_code: swift_code.to_string(),
        branches: Vec::new(),
    }
}

pub fn payload(swift_code: &str, country_iso2: &str, country_name: &str) -> BankPayload {
    BankPayload {
        address: Some("123 Test St".to_string()),
        bank_name: Some("Test Bank".to_string()),
        country_iso2: Some(country_iso2.to_string()),
        country_name: Some(country_name.to_string()),
        is_headquarter: Some(swift::is_headquarters_code(swift_code)),
        swift_code: Some(swift_code.to_string()),
    }
}
