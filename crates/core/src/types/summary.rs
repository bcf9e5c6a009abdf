//! Order summary and order confirmation types.
//!
//! The summary is static demo content, not computed from a cart. The
//! confirmation carries the synthetic order token plus the fixed total and
//! a delivery estimate.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::currency::{CurrencyCode, from_cents};
use super::token::OrderId;

/// Days between order completion and the estimated delivery date.
pub const DELIVERY_ESTIMATE_DAYS: i64 = 7;

/// One product line in the order summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

/// The order summary shown alongside the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
    pub currency: CurrencyCode,
    pub items: Vec<LineItem>,
}

impl OrderSummary {
    /// The fixed demo summary.
    ///
    /// Always the same content; callers may fetch it as often as they like.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            subtotal: from_cents(9999),
            tax: from_cents(1500),
            shipping: from_cents(1000),
            total: from_cents(12499),
            currency: CurrencyCode::USD,
            items: vec![
                LineItem {
                    id: "1".to_owned(),
                    name: "Headsets".to_owned(),
                    price: from_cents(9999),
                    quantity: 1,
                },
                LineItem {
                    id: "2".to_owned(),
                    name: "Audio Cable".to_owned(),
                    price: from_cents(1500),
                    quantity: 1,
                },
                LineItem {
                    id: "3".to_owned(),
                    name: "Protective Case".to_owned(),
                    price: from_cents(2500),
                    quantity: 1,
                },
            ],
        }
    }
}

/// Result of a successful order completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order_id: OrderId,
    pub total: Decimal,
    pub currency: CurrencyCode,
    pub estimated_delivery: DateTime<Utc>,
}

impl OrderConfirmation {
    /// Build a confirmation issued at `now`.
    ///
    /// The total matches the demo summary and the delivery estimate is a
    /// fixed offset from the issue time.
    #[must_use]
    pub fn issued_at(order_id: OrderId, now: DateTime<Utc>) -> Self {
        Self {
            order_id,
            total: from_cents(12499),
            currency: CurrencyCode::USD,
            estimated_delivery: now + Duration::days(DELIVERY_ESTIMATE_DAYS),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_summary_is_static() {
        let a = OrderSummary::demo();
        let b = OrderSummary::demo();
        assert_eq!(a, b);

        assert_eq!(a.items.len(), 3);
        assert_eq!(a.total.to_string(), "124.99");
        assert_eq!(a.tax.to_string(), "15.00");
        assert_eq!(a.shipping.to_string(), "10.00");
        assert_eq!(a.currency, CurrencyCode::USD);

        let names: Vec<&str> = a.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Headsets", "Audio Cable", "Protective Case"]);
    }

    #[test]
    fn test_confirmation_delivery_offset() {
        let now = Utc::now();
        let confirmation = OrderConfirmation::issued_at(OrderId::new("ORD-1"), now);

        assert_eq!(confirmation.total.to_string(), "124.99");
        assert_eq!(
            confirmation.estimated_delivery - now,
            Duration::days(DELIVERY_ESTIMATE_DAYS)
        );
    }

    #[test]
    fn test_confirmation_wire_names() {
        let confirmation =
            OrderConfirmation::issued_at(OrderId::new("ORD-1"), Utc::now());
        let json = serde_json::to_value(&confirmation).unwrap();
        assert_eq!(json["orderId"], "ORD-1");
        assert!(json.get("estimatedDelivery").is_some());
        // Decimal amounts serialize as strings on the wire
        assert_eq!(json["total"], "124.99");
    }
}
