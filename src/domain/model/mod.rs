//! Record shapes shared by validation, storage and the HTTP layer.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A bank headquarters or branch, as stored and as returned by lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Bank {
    pub address: String,
    #[serde(rename = "bankName")]
    pub bank_name: String,
    #[serde(rename = "countryISO2")]
    pub country_iso2: String,
    #[serde(rename = "countryName")]
    pub country_name: String,
    #[serde(rename = "isHeadquarter")]
    pub is_headquarter: bool,
    #[serde(rename = "swiftCode")]
    pub swift_code: String,
    /// Branches sharing this headquarters' 8-character prefix.
    /// Always empty for branch records.
    #[serde(default)]
    pub branches: Vec<BankBranch>,
}

impl Bank {
    /// Projects this record to the reduced shape used in branch and country listings.
    pub fn summary(&self) -> BankBranch {
        BankBranch {
            address: self.address.clone(),
            bank_name: self.bank_name.clone(),
            country_iso2: self.country_iso2.clone(),
            is_headquarter: self.is_headquarter,
            swift_code: self.swift_code.clone(),
        }
    }
}

/// Reduced projection of [`Bank`] without `countryName`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BankBranch {
    pub address: String,
    #[serde(rename = "bankName")]
    pub bank_name: String,
    #[serde(rename = "countryISO2")]
    pub country_iso2: String,
    #[serde(rename = "isHeadquarter")]
    pub is_headquarter: bool,
    #[serde(rename = "swiftCode")]
    pub swift_code: String,
}

/// Every bank (headquarters and branches) stored for one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CountryBanks {
    #[serde(rename = "countryISO2")]
    pub country_iso2: String,
    #[serde(rename = "countryName")]
    pub country_name: String,
    #[serde(rename = "swiftCodes")]
    pub swift_codes: Vec<BankBranch>,
}

/// Inbound create payload.
///
/// Every field is optional so that a missing field can be told apart from an
/// empty one; the validator turns it into a [`Bank`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BankPayload {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, rename = "bankName")]
    pub bank_name: Option<String>,
    #[serde(default, rename = "countryISO2")]
    pub country_iso2: Option<String>,
    #[serde(default, rename = "countryName")]
    pub country_name: Option<String>,
    #[serde(default, rename = "isHeadquarter")]
    pub is_headquarter: Option<bool>,
    #[serde(default, rename = "swiftCode")]
    pub swift_code: Option<String>,
}
