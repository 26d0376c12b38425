//! # Shopping List Item
//!
//! The optimizer reads an item's product and writes back the chosen price.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{ItemId, PriceId, ProductId, ShoppingListId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line of a shopping list.
///
/// # Invariants
///
/// - Quantity is strictly positive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawShoppingListItem")]
pub struct ShoppingListItem {
    id: ItemId,
    list_id: ShoppingListId,
    product_id: ProductId,
    quantity: Decimal,
    #[serde(default)]
    selected_price_id: Option<PriceId>,
}

#[derive(Deserialize)]
struct RawShoppingListItem {
    id: ItemId,
    list_id: ShoppingListId,
    product_id: ProductId,
    quantity: Decimal,
    #[serde(default)]
    selected_price_id: Option<PriceId>,
}

impl TryFrom<RawShoppingListItem> for ShoppingListItem {
    type Error = DomainError;

    fn try_from(raw: RawShoppingListItem) -> Result<Self, Self::Error> {
        let mut item =
            Self::new(raw.id, raw.list_id, raw.product_id).with_quantity(raw.quantity)?;
        item.selected_price_id = raw.selected_price_id;
        Ok(item)
    }
}

impl ShoppingListItem {
    /// Creates an item with quantity one and no selected price.
    #[must_use]
    pub fn new(id: ItemId, list_id: ShoppingListId, product_id: ProductId) -> Self {
        Self {
            id,
            list_id,
            product_id,
            quantity: Decimal::ONE,
            selected_price_id: None,
        }
    }

    /// Sets the quantity to buy.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidQuantity` if `quantity` is zero or
    /// negative.
    pub fn with_quantity(mut self, quantity: Decimal) -> DomainResult<Self> {
        if quantity <= Decimal::ZERO {
            return Err(DomainError::invalid_quantity(self.id.as_str(), quantity));
        }
        self.quantity = quantity;
        Ok(self)
    }

    /// Returns the item identifier.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Returns the owning list.
    #[inline]
    #[must_use]
    pub fn list_id(&self) -> &ShoppingListId {
        &self.list_id
    }

    /// Returns the product identifier.
    #[inline]
    #[must_use]
    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// Returns the quantity to buy.
    #[inline]
    #[must_use]
    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// Returns the currently selected price, if any.
    #[must_use]
    pub fn selected_price_id(&self) -> Option<&PriceId> {
        self.selected_price_id.as_ref()
    }

    /// Replaces the selected price.
    pub fn select_price(&mut self, price_id: Option<PriceId>) {
        self.selected_price_id = price_id;
    }
}
