//! # Price Alternative Entity
//!
//! One observed price for a product at a store.
//!
//! Alternatives are immutable snapshots loaded fresh from the price store
//! for every optimization run.
//!
//! # Examples
//!
//! ```
//! use deazl_optimizer::domain::entities::price_alternative::PriceAlternative;
//! use deazl_optimizer::domain::value_objects::{Currency, Money, PriceId, ProductId, StoreId};
//! use rust_decimal::Decimal;
//!
//! let alternative = PriceAlternative::builder(
//!     PriceId::new("p1"),
//!     ProductId::new("nutella-400g"),
//!     StoreId::new("s1"),
//!     Money::new(Decimal::new(350, 2), Currency::Eur).unwrap(),
//! )
//! .store_name("Carrefour Market")
//! .quality_score(95.0)
//! .try_build()
//! .unwrap();
//!
//! assert_eq!(alternative.store_id().as_str(), "s1");
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{
    Money, PriceId, ProductId, QualityScore, StoreId, Timestamp,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store a price was observed at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoreRef {
    /// Store identifier.
    pub id: StoreId,
    /// Display name, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-form location label (city, address), if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl StoreRef {
    /// Creates a store reference with only an identifier.
    #[must_use]
    pub fn new(id: StoreId) -> Self {
        Self {
            id,
            name: None,
            location: None,
        }
    }

    /// Returns the display name, falling back to the identifier.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.id.as_str())
    }
}

/// A candidate price for a shopping-list item.
///
/// # Invariants
///
/// - Identifiers are not blank
/// - Amount is not negative (enforced by [`Money`])
/// - Distance, when present, is finite and not negative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceAlternative {
    id: PriceId,
    product_id: ProductId,
    store: StoreRef,
    price: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    observed_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    quality_score: Option<QualityScore>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    in_stock: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    distance_km: Option<f64>,
}

impl PriceAlternative {
    /// Returns a builder for constructing an alternative.
    #[must_use]
    pub fn builder(
        id: PriceId,
        product_id: ProductId,
        store_id: StoreId,
        price: Money,
    ) -> PriceAlternativeBuilder {
        PriceAlternativeBuilder::new(id, product_id, store_id, price)
    }

    /// Checks the entity invariants.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidIdentifier` for blank identifiers and
    /// `DomainError::InvalidAmount` for a negative or non-finite distance.
    pub fn validate(&self) -> DomainResult<()> {
        if self.id.is_blank() {
            return Err(DomainError::invalid_identifier("price id is blank"));
        }
        if self.product_id.is_blank() {
            return Err(DomainError::invalid_identifier(format!(
                "product id is blank for price {}",
                self.id
            )));
        }
        if self.store.id.is_blank() {
            return Err(DomainError::invalid_identifier(format!(
                "store id is blank for price {}",
                self.id
            )));
        }
        if let Some(distance) = self.distance_km {
            if !distance.is_finite() || distance < 0.0 {
                return Err(DomainError::invalid_amount(format!(
                    "distance must be a non-negative number of km, got {distance} for price {}",
                    self.id
                )));
            }
        }
        Ok(())
    }

    /// Returns the price identifier.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &PriceId {
        &self.id
    }

    /// Returns the product identifier.
    #[inline]
    #[must_use]
    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// Returns the store reference.
    #[inline]
    #[must_use]
    pub fn store(&self) -> &StoreRef {
        &self.store
    }

    /// Returns the store identifier.
    #[inline]
    #[must_use]
    pub fn store_id(&self) -> &StoreId {
        &self.store.id
    }

    /// Returns the observed price.
    #[inline]
    #[must_use]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Returns when the price was observed, if known.
    #[inline]
    #[must_use]
    pub fn observed_at(&self) -> Option<Timestamp> {
        self.observed_at
    }

    /// Returns the quality score, if any.
    #[inline]
    #[must_use]
    pub fn quality_score(&self) -> Option<QualityScore> {
        self.quality_score
    }

    /// Returns the brand name, if any.
    #[must_use]
    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    /// Returns the stock signal, if any.
    #[inline]
    #[must_use]
    pub fn in_stock(&self) -> Option<bool> {
        self.in_stock
    }

    /// Returns the distance to the store in km, if known.
    #[inline]
    #[must_use]
    pub fn distance_km(&self) -> Option<f64> {
        self.distance_km
    }

    /// Returns true if the store is known to be farther than `radius_km`.
    #[must_use]
    pub fn is_beyond(&self, radius_km: f64) -> bool {
        self.distance_km.is_some_and(|d| d > radius_km)
    }

    /// Returns true if the store is known to be out of stock.
    #[must_use]
    pub fn is_out_of_stock(&self) -> bool {
        self.in_stock == Some(false)
    }
}

impl fmt::Display for PriceAlternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Price({} @ {} [{}])",
            self.price,
            self.store.display_name(),
            self.id
        )
    }
}

/// Builder for [`PriceAlternative`].
#[derive(Debug, Clone)]
pub struct PriceAlternativeBuilder {
    id: PriceId,
    product_id: ProductId,
    store: StoreRef,
    price: Money,
    observed_at: Option<Timestamp>,
    quality_score: Option<f64>,
    brand: Option<String>,
    in_stock: Option<bool>,
    distance_km: Option<f64>,
}

impl PriceAlternativeBuilder {
    /// Creates a new builder with required fields.
    #[must_use]
    pub fn new(id: PriceId, product_id: ProductId, store_id: StoreId, price: Money) -> Self {
        Self {
            id,
            product_id,
            store: StoreRef::new(store_id),
            price,
            observed_at: None,
            quality_score: None,
            brand: None,
            in_stock: None,
            distance_km: None,
        }
    }

    /// Sets the store display name.
    #[must_use]
    pub fn store_name(mut self, name: impl Into<String>) -> Self {
        self.store.name = Some(name.into());
        self
    }

    /// Sets the store location label.
    #[must_use]
    pub fn store_location(mut self, location: impl Into<String>) -> Self {
        self.store.location = Some(location.into());
        self
    }

    /// Sets the observation time. Unknown by default.
    #[must_use]
    pub fn observed_at(mut self, observed_at: Timestamp) -> Self {
        self.observed_at = Some(observed_at);
        self
    }

    /// Sets the quality score (validated on build).
    #[must_use]
    pub fn quality_score(mut self, score: f64) -> Self {
        self.quality_score = Some(score);
        self
    }

    /// Sets the brand name.
    #[must_use]
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Sets the stock signal.
    #[must_use]
    pub fn in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = Some(in_stock);
        self
    }

    /// Sets the distance to the store in km.
    #[must_use]
    pub fn distance_km(mut self, distance_km: f64) -> Self {
        self.distance_km = Some(distance_km);
        self
    }

    /// Builds the alternative with validation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError` if the quality score is out of range or
    /// [`PriceAlternative::validate`] fails.
    pub fn try_build(self) -> DomainResult<PriceAlternative> {
        let quality_score = self.quality_score.map(QualityScore::new).transpose()?;
        let alternative = PriceAlternative {
            id: self.id,
            product_id: self.product_id,
            store: self.store,
            price: self.price,
            observed_at: self.observed_at,
            quality_score,
            brand: self.brand,
            in_stock: self.in_stock,
            distance_km: self.distance_km,
        };
        alternative.validate()?;
        Ok(alternative)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Currency;
    use rust_decimal::Decimal;

    fn builder(id: &str) -> PriceAlternativeBuilder {
        PriceAlternative::builder(
            PriceId::new(id),
            ProductId::new("prod-1"),
            StoreId::new("s1"),
            Money::new(Decimal::new(200, 2), Currency::Eur).unwrap(),
        )
    }

    mod construction {
        use super::*;

        #[test]
        fn builds_with_optional_signals() {
            let alt = builder("p1")
                .store_name("Lidl")
                .store_location("Lyon")
                .brand("Bonne Maman")
                .quality_score(72.0)
                .distance_km(2.5)
                .in_stock(true)
                .try_build()
                .unwrap();

            assert_eq!(alt.store().display_name(), "Lidl");
            assert_eq!(alt.brand(), Some("Bonne Maman"));
            assert_eq!(alt.quality_score().unwrap().get(), 72.0);
            assert_eq!(alt.distance_km(), Some(2.5));
            assert!(!alt.is_out_of_stock());
        }

        #[test]
        fn rejects_blank_id() {
            let result = builder(" ").try_build();
            assert!(matches!(result, Err(DomainError::InvalidIdentifier(_))));
        }

        #[test]
        fn rejects_bad_quality_score() {
            let result = builder("p1").quality_score(140.0).try_build();
            assert!(matches!(result, Err(DomainError::InvalidQualityScore(_))));
        }

        #[test]
        fn rejects_negative_distance() {
            let result = builder("p1").distance_km(-3.0).try_build();
            assert!(matches!(result, Err(DomainError::InvalidAmount(_))));
        }
    }

    mod signals {
        use super::*;

        #[test]
        fn unknown_distance_is_never_beyond_radius() {
            let alt = builder("p1").try_build().unwrap();
            assert!(!alt.is_beyond(0.1));
        }

        #[test]
        fn known_distance_compared_to_radius() {
            let alt = builder("p1").distance_km(12.0).try_build().unwrap();
            assert!(alt.is_beyond(10.0));
            assert!(!alt.is_beyond(12.0));
        }

        #[test]
        fn unknown_stock_is_not_out_of_stock() {
            let alt = builder("p1").try_build().unwrap();
            assert!(!alt.is_out_of_stock());
            let gone = builder("p2").in_stock(false).try_build().unwrap();
            assert!(gone.is_out_of_stock());
        }
    }

    #[test]
    fn display_uses_store_name_fallback() {
        let alt = builder("p9").try_build().unwrap();
        assert_eq!(alt.to_string(), "Price(2.00 EUR @ s1 [p9])");
    }

    #[test]
    fn serde_skips_absent_signals() {
        let alt = builder("p1").try_build().unwrap();
        let json = serde_json::to_value(&alt).unwrap();
        assert!(json.get("distance_km").is_none());
        let back: PriceAlternative = serde_json::from_value(json).unwrap();
        assert_eq!(back, alt);
    }

    #[test]
    fn missing_observation_time_stays_unknown() {
        let json = r#"{
            "id": "p1",
            "product_id": "prod-1",
            "store": {"id": "s1"},
            "price": {"amount": "2.00", "currency": "EUR"}
        }"#;
        let first: PriceAlternative = serde_json::from_str(json).unwrap();
        let second: PriceAlternative = serde_json::from_str(json).unwrap();

        assert_eq!(first.observed_at(), None);
        assert_eq!(first, second);
        assert_eq!(builder("p1").try_build().unwrap().observed_at(), None);
    }

    #[test]
    fn observation_time_is_kept() {
        let at = Timestamp::from_millis(1_700_000_000_000).unwrap();
        let alt = builder("p1").observed_at(at).try_build().unwrap();
        assert_eq!(alt.observed_at(), Some(at));

        let back: PriceAlternative =
            serde_json::from_value(serde_json::to_value(&alt).unwrap()).unwrap();
        assert_eq!(back.observed_at(), Some(at));
    }
}
