//! Country registry: static reference data mapping ISO2 codes to country names.

mod table;

use std::collections::HashMap;

/// A read-only lookup table from two-letter country codes to country names.
///
/// The registry is built once at startup and handed to the validator; it is
/// never mutated while the service runs.
#[derive(Debug, Clone)]
pub struct CountryRegistry {
    countries: HashMap<&'static str, &'static str>,
}

impl CountryRegistry {
    /// Creates a new empty CountryRegistry.
    pub fn new() -> Self {
        Self {
            countries: HashMap::new(),
        }
    }

    /// Creates a registry holding every ISO 3166-1 alpha-2 code.
    pub fn iso3166() -> Self {
        let mut reg = Self::new();
        for &(code, name) in table::COUNTRIES {
            reg.register(code, name);
        }
        reg
    }

    /// Registers a country name under the given code.
    pub fn register(&mut self, code: &'static str, name: &'static str) {
        self.countries.insert(code, name);
    }

    /// Retrieves the registered name for `code`.
    /// Returns None if the code is not recognized. Lookup is case-sensitive.
    pub fn by_country_code(&self, code: &str) -> Option<&'static str> {
        self.countries.get(code).copied()
    }

    /// Returns true if `code` is a recognized country code.
    pub fn contains(&self, code: &str) -> bool {
        self.countries.contains_key(code)
    }

    /// Returns the canonical (uppercased) name used when validating `countryName`.
    pub fn canonical_name(&self, code: &str) -> Option<String> {
        self.by_country_code(code).map(str::to_uppercase)
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl Default for CountryRegistry {
    fn default() -> Self {
        Self::iso3166()
    }
}
