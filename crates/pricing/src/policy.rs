use serde::{Deserialize, Serialize};

use modshop_core::Settings;

/// Fixed promotional discount applied by [`PricingPolicy::Promo`].
const PROMO_DISCOUNT: f64 = 0.20;

/// Fixed discount applied by [`PricingPolicy::Wholesale`].
const WHOLESALE_DISCOUNT: f64 = 0.35;

/// A named pricing rule applied per product when totalling an order.
///
/// Tax rate and base discount are read from [`Settings`] at apply time, never
/// captured at construction. `Dynamic` carries its multiplier, fixed when the
/// policy is built. No currency rounding happens here; two-decimal formatting
/// is a presentation concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PricingPolicy {
    /// Global tax plus the global base discount.
    Standard,
    /// Global tax with a fixed 20% promotional discount; ignores the base
    /// discount.
    Promo,
    /// Fixed 35% discount, tax exempt.
    Wholesale,
    /// Caller-supplied multiplier, then global tax.
    Dynamic(f64),
}

impl Default for PricingPolicy {
    fn default() -> Self {
        PricingPolicy::Standard
    }
}

impl PricingPolicy {
    /// Convert a base price into the final charged price.
    pub fn apply(&self, base_price: f64, settings: &Settings) -> f64 {
        match self {
            PricingPolicy::Standard => {
                base_price * (1.0 + settings.tax_rate) * (1.0 - settings.base_discount)
            }
            PricingPolicy::Promo => {
                base_price * (1.0 + settings.tax_rate) * (1.0 - PROMO_DISCOUNT)
            }
            PricingPolicy::Wholesale => base_price * (1.0 - WHOLESALE_DISCOUNT),
            PricingPolicy::Dynamic(factor) => base_price * factor * (1.0 + settings.tax_rate),
        }
    }

    /// Human label; includes the multiplier for dynamic pricing.
    pub fn name(&self) -> String {
        match self {
            PricingPolicy::Standard => "Standard (+ VAT)".to_string(),
            PricingPolicy::Promo => "Promo (-20%)".to_string(),
            PricingPolicy::Wholesale => "Wholesale (-35%, no VAT)".to_string(),
            PricingPolicy::Dynamic(factor) => format!("Dynamic (x{factor})"),
        }
    }
}
