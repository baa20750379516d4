//! Record validation engine: decides whether a candidate bank may be stored.

use crate::domain::country::CountryRegistry;
use crate::domain::model::{Bank, BankPayload};
use crate::domain::validation::swift;

/// Reasons a payload is rejected. The display text is returned verbatim to API clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("address is required")]
    AddressRequired,
    #[error("bankName is required")]
    BankNameRequired,
    #[error("countryISO2 is required")]
    CountryIso2Required,
    #[error("countryName is required")]
    CountryNameRequired,
    #[error("isHeadquarter is required")]
    IsHeadquarterRequired,
    #[error("swiftCode is required")]
    SwiftCodeRequired,
    #[error("countryISO2 is invalid")]
    CountryIso2Invalid,
    #[error("countryName does not match ISO2 code")]
    CountryNameMismatch,
    #[error("swiftCode is invalid")]
    SwiftCodeInvalid,
    #[error("swiftCode indicates bank's headquarter")]
    SwiftCodeIndicatesHeadquarter,
    #[error("swiftCode indicates bank's branch")]
    SwiftCodeIndicatesBranch,
}

/// Validates bank payloads against code format rules and the country registry.
#[derive(Debug, Clone)]
pub struct BankValidator {
    registry: CountryRegistry,
}

impl BankValidator {
    pub fn new(registry: CountryRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &CountryRegistry {
        &self.registry
    }

    /// Runs the checks in a fixed order and stops at the first failure.
    ///
    /// On success the admitted [`Bank`] carries `countryName` normalized to
    /// uppercase and an empty branch list.
    pub fn validate(&self, payload: BankPayload) -> Result<Bank, ValidationError> {
        let address = payload
            .address
            .filter(|s| !s.trim().is_empty())
            .ok_or(ValidationError::AddressRequired)?;
        let bank_name = payload
            .bank_name
            .filter(|s| !s.trim().is_empty())
            .ok_or(ValidationError::BankNameRequired)?;
        let country_iso2 = payload
            .country_iso2
            .ok_or(ValidationError::CountryIso2Required)?;
        let country_name = payload
            .country_name
            .ok_or(ValidationError::CountryNameRequired)?;
        let is_headquarter = payload
            .is_headquarter
            .ok_or(ValidationError::IsHeadquarterRequired)?;
        let swift_code = payload
            .swift_code
            .ok_or(ValidationError::SwiftCodeRequired)?;

        let canonical = self
            .registry
            .canonical_name(&country_iso2)
            .ok_or(ValidationError::CountryIso2Invalid)?;

        let country_name = country_name.to_uppercase();
        if country_name != canonical {
            return Err(ValidationError::CountryNameMismatch);
        }

        if !swift::is_consistent_with_country(&swift_code, &country_iso2)
            || !swift::is_well_formed(&swift_code)
        {
            return Err(ValidationError::SwiftCodeInvalid);
        }

        let hq_code = swift::is_headquarters_code(&swift_code);
        if hq_code && !is_headquarter {
            return Err(ValidationError::SwiftCodeIndicatesHeadquarter);
        }
        if is_headquarter && !hq_code {
            return Err(ValidationError::SwiftCodeIndicatesBranch);
        }

        Ok(Bank {
            address,
            bank_name,
            country_iso2,
            country_name,
            is_headquarter,
            swift_code,
            branches: Vec::new(),
        })
    }
}

impl Default for BankValidator {
    fn default() -> Self {
        Self::new(CountryRegistry::iso3166())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> BankPayload {
        BankPayload {
            address: Some("123 Test St".to_string()),
            bank_name: Some("Test Bank".to_string()),
            country_iso2: Some("PL".to_string()),
            country_name: Some("POLAND".to_string()),
            is_headquarter: Some(true),
            swift_code: Some("TESTPL33XXX".to_string()),
        }
    }

    fn check(payload: BankPayload) -> Result<Bank, ValidationError> {
        BankValidator::default().validate(payload)
    }

    #[test]
    fn accepts_valid_headquarters() {
        let bank = check(valid_payload()).unwrap();
        assert_eq!(bank.swift_code, "TESTPL33XXX");
        assert!(bank.is_headquarter);
        assert!(bank.branches.is_empty());
    }

    #[test]
    fn accepts_valid_branch() {
        let bank = check(BankPayload {
            is_headquarter: Some(false),
            swift_code: Some("TESTPL33ABC".to_string()),
            ..valid_payload()
        })
        .unwrap();
        assert!(!bank.is_headquarter);
    }

    #[test]
    fn normalizes_country_name_to_uppercase() {
        let bank = check(BankPayload {
            country_name: Some("poLand".to_string()),
            ..valid_payload()
        })
        .unwrap();
        assert_eq!(bank.country_name, "POLAND");
    }

    #[test]
    fn missing_fields_are_reported_in_order() {
        let cases = [
            (BankPayload::default(), "address is required"),
            (
                BankPayload {
                    address: Some("   ".to_string()),
                    ..valid_payload()
                },
                "address is required",
            ),
            (
                BankPayload {
                    bank_name: None,
                    ..valid_payload()
                },
                "bankName is required",
            ),
            (
                BankPayload {
                    bank_name: Some(" \t".to_string()),
                    ..valid_payload()
                },
                "bankName is required",
            ),
            (
                BankPayload {
                    country_iso2: None,
                    country_name: None,
                    ..valid_payload()
                },
                "countryISO2 is required",
            ),
            (
                BankPayload {
                    country_name: None,
                    ..valid_payload()
                },
                "countryName is required",
            ),
            (
                BankPayload {
                    is_headquarter: None,
                    swift_code: None,
                    ..valid_payload()
                },
                "isHeadquarter is required",
            ),
            (
                BankPayload {
                    swift_code: None,
                    ..valid_payload()
                },
                "swiftCode is required",
            ),
        ];
        for (payload, expected) in cases {
            assert_eq!(check(payload).unwrap_err().to_string(), expected);
        }
    }

    #[test]
    fn rejects_unknown_country_code() {
        let err = check(BankPayload {
            country_iso2: Some("XX".to_string()),
            swift_code: Some("TESTXX33XXX".to_string()),
            ..valid_payload()
        })
        .unwrap_err();
        assert_eq!(err, ValidationError::CountryIso2Invalid);
        assert_eq!(err.to_string(), "countryISO2 is invalid");
    }

    #[test]
    fn rejects_country_name_mismatch() {
        let err = check(BankPayload {
            country_name: Some("GERMANY".to_string()),
            ..valid_payload()
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "countryName does not match ISO2 code");
    }

    #[test]
    fn rejects_code_for_another_country_or_malformed() {
        for code in ["TESTDE33XXX", "TESTPL3", "testPL33XXX", "", "TESTPL33XX"] {
            let err = check(BankPayload {
                swift_code: Some(code.to_string()),
                ..valid_payload()
            })
            .unwrap_err();
            assert_eq!(err, ValidationError::SwiftCodeInvalid, "code {code:?}");
        }
    }

    #[test]
    fn headquarters_flag_must_match_suffix() {
        let err = check(BankPayload {
            is_headquarter: Some(false),
            ..valid_payload()
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "swiftCode indicates bank's headquarter");

        let err = check(BankPayload {
            swift_code: Some("TESTPL33ABC".to_string()),
            ..valid_payload()
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "swiftCode indicates bank's branch");
    }

    #[test]
    fn eight_character_code_is_a_branch() {
        let err = check(BankPayload {
            swift_code: Some("TESTPL33".to_string()),
            ..valid_payload()
        })
        .unwrap_err();
        assert_eq!(err, ValidationError::SwiftCodeIndicatesBranch);

        assert!(check(BankPayload {
            swift_code: Some("TESTPL33".to_string()),
            is_headquarter: Some(false),
            ..valid_payload()
        })
        .is_ok());
    }

    #[test]
    fn accepts_official_country_names() {
        let cases = [
            ("US", "UNITED STATES OF AMERICA (THE)", "USNBUS33XXX"),
            ("NL", "Netherlands (the)", "ABNANL2AXXX"),
            (
                "GB",
                "UNITED KINGDOM OF GREAT BRITAIN AND NORTHERN IRELAND (THE)",
                "BARCGB22XXX",
            ),
        ];
        for (iso2, name, code) in cases {
            let bank = check(BankPayload {
                country_iso2: Some(iso2.to_string()),
                country_name: Some(name.to_string()),
                swift_code: Some(code.to_string()),
                ..valid_payload()
            })
            .unwrap();
            assert_eq!(bank.country_name, name.to_uppercase());
        }

        let err = check(BankPayload {
            country_iso2: Some("US".to_string()),
            country_name: Some("UNITED STATES OF AMERICA".to_string()),
            swift_code: Some("USNBUS33XXX".to_string()),
            ..valid_payload()
        })
        .unwrap_err();
        assert_eq!(err, ValidationError::CountryNameMismatch);
    }

    #[test]
    fn injected_registry_limits_recognized_countries() {
        let mut registry = CountryRegistry::new();
        registry.register("DE", "Germany");
        let validator = BankValidator::new(registry);
        assert_eq!(
            validator.validate(valid_payload()).unwrap_err(),
            ValidationError::CountryIso2Invalid
        );
    }
}
