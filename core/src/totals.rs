// basket/src/totals.rs

//! Derived cart pricing. Totals are recomputed from the line items on every
//! read and never stored independently, so they cannot diverge from the
//! collection they summarize.

use serde::Serialize;

use crate::model::CartLineItem;

/// Pricing knobs applied when deriving [`CartTotals`]. All amounts are
/// integer cents; the tax rate is in basis points (1/100th of a percent).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingRules {
  /// Shipping is free once the subtotal strictly exceeds this amount.
  pub free_shipping_over_cents: i64,
  /// Flat shipping surcharge below the free-shipping threshold.
  pub flat_shipping_cents: i64,
  pub tax_rate_basis_points: i64,
}

impl Default for PricingRules {
  fn default() -> Self {
    PricingRules {
      free_shipping_over_cents: 50_00,
      flat_shipping_cents: 9_99,
      tax_rate_basis_points: 800,
    }
  }
}

/// Aggregate totals derived from the current cart contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartTotals {
  pub subtotal_cents: i64,
  pub shipping_cents: i64,
  pub tax_cents: i64,
  pub total_cents: i64,
  pub item_count: i64,
}

impl CartTotals {
  /// Computes totals for `items` under `rules`.
  ///
  /// The free-shipping comparison is strict: a subtotal exactly at the
  /// threshold still pays the flat surcharge. Tax is rounded half-up to a
  /// whole cent.
  pub fn compute(items: &[CartLineItem], rules: &PricingRules) -> Self {
    let subtotal_cents: i64 = items.iter().map(CartLineItem::line_subtotal_cents).sum();
    let item_count: i64 = items.iter().map(|item| item.quantity).sum();

    let shipping_cents = if subtotal_cents > rules.free_shipping_over_cents {
      0
    } else {
      rules.flat_shipping_cents
    };
    let tax_cents = (subtotal_cents * rules.tax_rate_basis_points + 5_000) / 10_000;

    CartTotals {
      subtotal_cents,
      shipping_cents,
      tax_cents,
      total_cents: subtotal_cents + shipping_cents + tax_cents,
      item_count,
    }
  }
}
