//! Bank store backed by a single PostgreSQL table keyed by `swift_code`.

use crate::domain::model::{Bank, BankBranch, CountryBanks};
use crate::domain::validation::swift;
use crate::storage::{BankStore, Result, StorageError};
use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

pub const BANKS_TABLE: &str = "banks_data";

/// Relational adapter for the [`BankStore`] operations.
#[derive(Clone)]
pub struct PostgresBankStore {
    pool: PgPool,
}

impl PostgresBankStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn bank_from_row(row: &PgRow) -> std::result::Result<Bank, sqlx::Error> {
    Ok(Bank {
        address: row.try_get("address")?,
        bank_name: row.try_get("bank_name")?,
        country_iso2: row.try_get("country_iso2")?,
        country_name: row.try_get("country_name")?,
        is_headquarter: row.try_get("is_headquarter")?,
        swift_code: row.try_get("swift_code")?,
        branches: Vec::new(),
    })
}

fn branch_from_row(row: &PgRow) -> std::result::Result<BankBranch, sqlx::Error> {
    Ok(BankBranch {
        address: row.try_get("address")?,
        bank_name: row.try_get("bank_name")?,
        country_iso2: row.try_get("country_iso2")?,
        is_headquarter: row.try_get("is_headquarter")?,
        swift_code: row.try_get("swift_code")?,
    })
}

#[async_trait]
impl BankStore for PostgresBankStore {
    async fn get_bank(&self, swift_code: &str) -> Result<Bank> {
        let row = sqlx::query(
            "SELECT address, bank_name, country_iso2, country_name, is_headquarter, swift_code
             FROM banks_data
             WHERE swift_code = $1",
        )
        .bind(swift_code)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StorageError::SwiftCodeNotFound)?;

        let mut bank = bank_from_row(&row)?;
        if !bank.is_headquarter {
            return Ok(bank);
        }

        // Branches are derived by prefix match, not stored as a relation.
        let Some(prefix) = swift::branch_prefix(&bank.swift_code) else {
            return Ok(bank);
        };
        let rows = sqlx::query(
            "SELECT address, bank_name, country_iso2, is_headquarter, swift_code
             FROM banks_data
             WHERE swift_code LIKE $1
             ORDER BY swift_code",
        )
        .bind(format!("{}%", prefix))
        .fetch_all(&self.pool)
        .await?;

        for row in rows {
            let branch = branch_from_row(&row)?;
            if branch.is_headquarter {
                continue;
            }
            bank.branches.push(branch);
        }

        tracing::debug!(swift_code, branches = bank.branches.len(), "fetched headquarters");
        Ok(bank)
    }

    async fn get_country_banks(&self, country_iso2: &str) -> Result<CountryBanks> {
        let rows = sqlx::query(
            "SELECT address, bank_name, country_iso2, country_name, is_headquarter, swift_code
             FROM banks_data
             WHERE country_iso2 = $1
             ORDER BY swift_code",
        )
        .bind(country_iso2)
        .fetch_all(&self.pool)
        .await?;

        let Some(first) = rows.first() else {
            return Err(StorageError::CountryNotFound);
        };

        let mut country = CountryBanks {
            country_iso2: first.try_get("country_iso2")?,
            country_name: first.try_get("country_name")?,
            swift_codes: Vec::with_capacity(rows.len()),
        };
        for row in &rows {
            country.swift_codes.push(branch_from_row(row)?);
        }
        Ok(country)
    }

    async fn add_bank(&self, bank: &Bank) -> Result<()> {
        let res = sqlx::query(
            "INSERT INTO banks_data
                (address, bank_name, country_iso2, country_name, is_headquarter, swift_code)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(&bank.address)
        .bind(&bank.bank_name)
        .bind(&bank.country_iso2)
        .bind(&bank.country_name)
        .bind(bank.is_headquarter)
        .bind(&bank.swift_code)
        .execute(&self.pool)
        .await;

        match res {
            Ok(_) => {
                tracing::debug!(swift_code = %bank.swift_code, "inserted bank");
                Ok(())
            }
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(StorageError::SwiftCodeExists)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn delete_bank(&self, swift_code: &str) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM banks_data WHERE swift_code = $1)")
                .bind(swift_code)
                .fetch_one(&mut *tx)
                .await?;
        if !exists {
            tx.rollback().await?;
            return Err(StorageError::SwiftCodeNotFound);
        }

        // A concurrent delete may have removed the row since the check above.
        let deleted = sqlx::query("DELETE FROM banks_data WHERE swift_code = $1")
            .bind(swift_code)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        if deleted == 0 {
            tx.rollback().await?;
            return Err(StorageError::SwiftCodeNotFound);
        }
        tx.commit().await?;

        tracing::debug!(swift_code, "deleted bank");
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
