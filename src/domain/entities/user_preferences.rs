//! # User Preferences
//!
//! Weights and filters that steer the price optimizer.
//!
//! Preferences are resolved once per request from three layers, each
//! overriding the previous one field by field:
//!
//! ```text
//! built-in defaults → stored profile → request override
//! ```
//!
//! The merged value is validated before any scoring happens.
//!
//! # Examples
//!
//! ```
//! use deazl_optimizer::domain::entities::user_preferences::{
//!     PreferencesOverride, UserPreferences,
//! };
//!
//! let overrides = PreferencesOverride {
//!     price_weight: Some(0.9),
//!     ..Default::default()
//! };
//! let prefs = UserPreferences::resolve(None, Some(&overrides)).unwrap();
//!
//! assert_eq!(prefs.price_weight().get(), 0.9);
//! assert_eq!(prefs.max_radius_km(), 10.0);
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{PriceWeight, StoreId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Default maximum distance to a store, in km.
pub const DEFAULT_MAX_RADIUS_KM: f64 = 10.0;

/// Validated optimizer preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPreferences")]
pub struct UserPreferences {
    price_weight: PriceWeight,
    max_radius_km: f64,
    favorite_store_ids: BTreeSet<StoreId>,
    show_saving_suggestions: bool,
}

#[derive(Deserialize)]
struct RawPreferences {
    price_weight: PriceWeight,
    max_radius_km: f64,
    #[serde(default)]
    favorite_store_ids: BTreeSet<StoreId>,
    #[serde(default = "default_true")]
    show_saving_suggestions: bool,
}

fn default_true() -> bool {
    true
}

impl TryFrom<RawPreferences> for UserPreferences {
    type Error = DomainError;

    fn try_from(raw: RawPreferences) -> Result<Self, Self::Error> {
        let prefs = Self {
            price_weight: raw.price_weight,
            max_radius_km: raw.max_radius_km,
            favorite_store_ids: raw.favorite_store_ids,
            show_saving_suggestions: raw.show_saving_suggestions,
        };
        prefs.validate()?;
        Ok(prefs)
    }
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            price_weight: PriceWeight::DEFAULT,
            max_radius_km: DEFAULT_MAX_RADIUS_KM,
            favorite_store_ids: BTreeSet::new(),
            show_saving_suggestions: true,
        }
    }
}

impl UserPreferences {
    /// Creates validated preferences.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidWeight` or `DomainError::InvalidRadius`
    /// for out-of-range values.
    pub fn new(
        price_weight: f64,
        max_radius_km: f64,
        favorite_store_ids: impl IntoIterator<Item = StoreId>,
        show_saving_suggestions: bool,
    ) -> DomainResult<Self> {
        let prefs = Self {
            price_weight: PriceWeight::new(price_weight)?,
            max_radius_km,
            favorite_store_ids: favorite_store_ids.into_iter().collect(),
            show_saving_suggestions,
        };
        prefs.validate()?;
        Ok(prefs)
    }

    /// Merges stored preferences and a request override over the defaults.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the merged result is invalid. Values
    /// are never clamped.
    pub fn resolve(
        stored: Option<&UserPreferences>,
        overrides: Option<&PreferencesOverride>,
    ) -> DomainResult<Self> {
        let base = stored.cloned().unwrap_or_default();
        match overrides {
            Some(overrides) => base.apply(overrides),
            None => {
                base.validate()?;
                Ok(base)
            }
        }
    }

    /// Applies an override on top of these preferences.
    ///
    /// Every field present in `overrides` replaces the current value,
    /// including the favorite store set.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the result is invalid.
    pub fn apply(&self, overrides: &PreferencesOverride) -> DomainResult<Self> {
        let price_weight = match overrides.price_weight {
            Some(weight) => PriceWeight::new(weight)?,
            None => self.price_weight,
        };
        let merged = Self {
            price_weight,
            max_radius_km: overrides.max_radius_km.unwrap_or(self.max_radius_km),
            favorite_store_ids: overrides
                .favorite_store_ids
                .clone()
                .unwrap_or_else(|| self.favorite_store_ids.clone()),
            show_saving_suggestions: overrides
                .show_saving_suggestions
                .unwrap_or(self.show_saving_suggestions),
        };
        merged.validate()?;
        Ok(merged)
    }

    /// Checks that every field is within range.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRadius` if the radius is not a positive
    /// finite number.
    pub fn validate(&self) -> DomainResult<()> {
        if !self.max_radius_km.is_finite() || self.max_radius_km <= 0.0 {
            return Err(DomainError::invalid_radius(self.max_radius_km));
        }
        Ok(())
    }

    /// Returns the price weight.
    #[inline]
    #[must_use]
    pub fn price_weight(&self) -> PriceWeight {
        self.price_weight
    }

    /// Returns the maximum store distance in km.
    #[inline]
    #[must_use]
    pub fn max_radius_km(&self) -> f64 {
        self.max_radius_km
    }

    /// Returns the favorite store identifiers.
    #[must_use]
    pub fn favorite_store_ids(&self) -> &BTreeSet<StoreId> {
        &self.favorite_store_ids
    }

    /// Returns true if `store_id` is a favorite store.
    #[must_use]
    pub fn is_favorite(&self, store_id: &StoreId) -> bool {
        self.favorite_store_ids.contains(store_id)
    }

    /// Returns true if saving suggestions should be reported.
    #[inline]
    #[must_use]
    pub fn show_saving_suggestions(&self) -> bool {
        self.show_saving_suggestions
    }
}

/// Request-scoped preference override. Absent fields keep the lower layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferencesOverride {
    /// Price weight within `[0, 1]`.
    pub price_weight: Option<f64>,
    /// Maximum store distance in km.
    pub max_radius_km: Option<f64>,
    /// Replacement favorite store set.
    pub favorite_store_ids: Option<BTreeSet<StoreId>>,
    /// Whether to report saving suggestions.
    pub show_saving_suggestions: Option<bool>,
}

impl PreferencesOverride {
    /// Returns true if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn stored() -> UserPreferences {
        UserPreferences::new(0.5, 5.0, [StoreId::new("s1")], false).unwrap()
    }

    mod defaults {
        use super::*;

        #[test]
        fn default_matches_documented_baseline() {
            let prefs = UserPreferences::default();
            assert_eq!(prefs.price_weight().get(), 0.7);
            assert_eq!(prefs.max_radius_km(), 10.0);
            assert!(prefs.favorite_store_ids().is_empty());
            assert!(prefs.show_saving_suggestions());
        }
    }

    mod merge {
        use super::*;

        #[test]
        fn stored_profile_overrides_defaults() {
            let prefs = UserPreferences::resolve(Some(&stored()), None).unwrap();
            assert_eq!(prefs, stored());
        }

        #[test]
        fn request_override_wins_per_field() {
            let overrides = PreferencesOverride {
                max_radius_km: Some(3.0),
                ..Default::default()
            };
            let prefs = UserPreferences::resolve(Some(&stored()), Some(&overrides)).unwrap();

            assert_eq!(prefs.max_radius_km(), 3.0);
            assert_eq!(prefs.price_weight().get(), 0.5);
            assert!(prefs.is_favorite(&StoreId::new("s1")));
            assert!(!prefs.show_saving_suggestions());
        }

        #[test]
        fn favorite_set_is_replaced_not_unioned() {
            let overrides = PreferencesOverride {
                favorite_store_ids: Some([StoreId::new("s2")].into_iter().collect()),
                ..Default::default()
            };
            let prefs = stored().apply(&overrides).unwrap();

            assert!(!prefs.is_favorite(&StoreId::new("s1")));
            assert!(prefs.is_favorite(&StoreId::new("s2")));
        }

        #[test]
        fn out_of_range_override_is_rejected() {
            let overrides = PreferencesOverride {
                price_weight: Some(1.5),
                ..Default::default()
            };
            let err = UserPreferences::resolve(None, Some(&overrides)).unwrap_err();
            assert_eq!(err, DomainError::InvalidWeight(1.5));
        }

        #[test]
        fn zero_radius_is_rejected() {
            let overrides = PreferencesOverride {
                max_radius_km: Some(0.0),
                ..Default::default()
            };
            let err = stored().apply(&overrides).unwrap_err();
            assert!(err.is_configuration());
        }

        #[test]
        fn empty_override_detected() {
            assert!(PreferencesOverride::default().is_empty());
        }
    }

    mod serde {
        use super::*;

        #[test]
        fn deserialize_validates_radius() {
            let json = r#"{"price_weight":0.7,"max_radius_km":-2}"#;
            assert!(serde_json::from_str::<UserPreferences>(json).is_err());
        }

        #[test]
        fn deserialize_fills_optional_fields() {
            let json = r#"{"price_weight":0.6,"max_radius_km":4}"#;
            let prefs: UserPreferences = serde_json::from_str(json).unwrap();
            assert!(prefs.show_saving_suggestions());
            assert!(prefs.favorite_store_ids().is_empty());
        }
    }
}
