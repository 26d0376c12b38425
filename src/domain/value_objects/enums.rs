//! # Domain Enums
//!
//! Enumeration types for domain concepts.
//!
//! - [`Currency`] - Currency a price is quoted in
//! - [`PriceUnit`] - Unit a price refers to (per piece, per kilogram, ...)
//! - [`OptimizationReason`] - Why an alternative was selected
//!
//! All enums implement `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
//! `Display`, `FromStr`, and Serde traits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Currency a price is quoted in.
///
/// # Examples
///
/// ```
/// use deazl_optimizer::domain::value_objects::enums::Currency;
///
/// let eur: Currency = "eur".parse().unwrap();
/// assert_eq!(eur, Currency::Eur);
/// assert_eq!(eur.to_string(), "EUR");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Euro.
    #[default]
    Eur,
    /// US dollar.
    Usd,
    /// Pound sterling.
    Gbp,
    /// Swiss franc.
    Chf,
}

impl Currency {
    /// Returns the ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Eur => "EUR",
            Self::Usd => "USD",
            Self::Gbp => "GBP",
            Self::Chf => "CHF",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EUR" => Ok(Self::Eur),
            "USD" => Ok(Self::Usd),
            "GBP" => Ok(Self::Gbp),
            "CHF" => Ok(Self::Chf),
            _ => Err(ParseEnumError::new("Currency", s)),
        }
    }
}

/// Unit a price refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PriceUnit {
    /// Price per piece or package.
    #[default]
    #[serde(rename = "unit")]
    Unit,
    /// Price per kilogram.
    #[serde(rename = "kg")]
    Kilogram,
    /// Price per 100 grams.
    #[serde(rename = "100g")]
    HundredGrams,
    /// Price per liter.
    #[serde(rename = "l")]
    Liter,
}

impl PriceUnit {
    /// Returns the short label used on price tags.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Kilogram => "kg",
            Self::HundredGrams => "100g",
            Self::Liter => "l",
        }
    }
}

impl fmt::Display for PriceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PriceUnit {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unit" | "piece" | "pc" => Ok(Self::Unit),
            "kg" | "kilogram" => Ok(Self::Kilogram),
            "100g" => Ok(Self::HundredGrams),
            "l" | "liter" | "litre" => Ok(Self::Liter),
            _ => Err(ParseEnumError::new("PriceUnit", s)),
        }
    }
}

/// Categorical reason attached to an optimization result.
///
/// Serialized as the kebab-case codes persisted next to the selected price.
///
/// # Examples
///
/// ```
/// use deazl_optimizer::domain::value_objects::enums::OptimizationReason;
///
/// assert_eq!(OptimizationReason::BestPrice.code(), "best-price");
/// assert_eq!(
///     "preferred-brand".parse::<OptimizationReason>().unwrap(),
///     OptimizationReason::PreferredStore
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptimizationReason {
    /// Strictly the cheapest alternative and price dominated the score.
    #[serde(rename = "best-price")]
    BestPrice,
    /// The quality component dominated the score.
    #[serde(rename = "best-quality")]
    BestQuality,
    /// The selected store is strictly the nearest known one.
    #[serde(rename = "closest")]
    Closest,
    /// The favorite-store boost decided the selection.
    #[serde(rename = "preferred-brand")]
    PreferredStore,
    /// No single factor dominated.
    #[serde(rename = "best-balance")]
    BestBalance,
    /// Zero or one alternative was available.
    #[serde(rename = "only-option")]
    OnlyOption,
}

impl OptimizationReason {
    /// Returns the persisted reason code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::BestPrice => "best-price",
            Self::BestQuality => "best-quality",
            Self::Closest => "closest",
            Self::PreferredStore => "preferred-brand",
            Self::BestBalance => "best-balance",
            Self::OnlyOption => "only-option",
        }
    }
}

impl fmt::Display for OptimizationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for OptimizationReason {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "best-price" => Ok(Self::BestPrice),
            "best-quality" => Ok(Self::BestQuality),
            "closest" => Ok(Self::Closest),
            "preferred-brand" => Ok(Self::PreferredStore),
            "best-balance" => Ok(Self::BestBalance),
            "only-option" => Ok(Self::OnlyOption),
            _ => Err(ParseEnumError::new("OptimizationReason", s)),
        }
    }
}

/// Error returned when parsing an enum from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {type_name}: {value}")]
pub struct ParseEnumError {
    type_name: &'static str,
    value: String,
}

impl ParseEnumError {
    fn new(type_name: &'static str, value: &str) -> Self {
        Self {
            type_name,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod currency {
        use super::*;

        #[test]
        fn parse_is_case_insensitive() {
            assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
            assert_eq!(" CHF ".parse::<Currency>().unwrap(), Currency::Chf);
        }

        #[test]
        fn parse_rejects_unknown() {
            let err = "XYZ".parse::<Currency>().unwrap_err();
            assert_eq!(err.to_string(), "invalid Currency: XYZ");
        }

        #[test]
        fn serde_uses_iso_code() {
            assert_eq!(serde_json::to_string(&Currency::Gbp).unwrap(), "\"GBP\"");
        }
    }

    mod price_unit {
        use super::*;

        #[test]
        fn parse_aliases() {
            assert_eq!("litre".parse::<PriceUnit>().unwrap(), PriceUnit::Liter);
            assert_eq!("piece".parse::<PriceUnit>().unwrap(), PriceUnit::Unit);
        }

        #[test]
        fn serde_uses_label() {
            let json = serde_json::to_string(&PriceUnit::Kilogram).unwrap();
            assert_eq!(json, "\"kg\"");
            let back: PriceUnit = serde_json::from_str("\"100g\"").unwrap();
            assert_eq!(back, PriceUnit::HundredGrams);
        }
    }

    mod reason {
        use super::*;

        #[test]
        fn codes_roundtrip_through_from_str() {
            for reason in [
                OptimizationReason::BestPrice,
                OptimizationReason::BestQuality,
                OptimizationReason::Closest,
                OptimizationReason::PreferredStore,
                OptimizationReason::BestBalance,
                OptimizationReason::OnlyOption,
            ] {
                assert_eq!(reason.code().parse::<OptimizationReason>().unwrap(), reason);
            }
        }

        #[test]
        fn serde_matches_code() {
            let json = serde_json::to_string(&OptimizationReason::OnlyOption).unwrap();
            assert_eq!(json, "\"only-option\"");
        }
    }
}
