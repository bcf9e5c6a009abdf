//! Field records submitted at each wizard step.
//!
//! These are the raw values a shopper typed into a step's form, kept as
//! plain strings so partially-filled or invalid input can be retained and
//! re-presented after a rejection or back-navigation. Validation lives in
//! [`crate::checkout::validate`]; nothing here is trusted.
//!
//! All records deserialize with `#[serde(default)]` so an absent field and
//! an empty field are indistinguishable at the boundary, which is exactly
//! how the presence checks treat them.

use serde::{Deserialize, Serialize};

/// Account step input: the shopper's credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccountFields {
    pub email: String,
    pub password: String,
}

/// Shipping step input: destination address and delivery speed.
///
/// `shipping_method` stays a raw string here; the validator parses it into
/// a [`ShippingMethod`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShippingFields {
    pub address_line1: String,
    pub street_name: String,
    pub postcode: String,
    pub shipping_method: String,
}

/// Payment step input: card details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaymentFields {
    pub name_on_card: String,
    pub card_number: String,
    pub expiration_month: String,
    pub expiration_year: String,
    pub cvc: String,
}

/// Error returned when a shipping method string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown shipping method: {0}")]
pub struct UnknownShippingMethod(pub String);

/// Delivery speeds offered at the shipping step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShippingMethod {
    Standard,
    Express,
    Overnight,
}

impl ShippingMethod {
    /// The wire name of the method.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Express => "express",
            Self::Overnight => "overnight",
        }
    }
}

impl core::fmt::Display for ShippingMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ShippingMethod {
    type Err = UnknownShippingMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "express" => Ok(Self::Express),
            "overnight" => Ok(Self::Overnight),
            other => Err(UnknownShippingMethod(other.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_shipping_method_parse() {
        assert_eq!(
            "standard".parse::<ShippingMethod>().unwrap(),
            ShippingMethod::Standard
        );
        assert_eq!(
            "express".parse::<ShippingMethod>().unwrap(),
            ShippingMethod::Express
        );
        assert_eq!(
            "overnight".parse::<ShippingMethod>().unwrap(),
            ShippingMethod::Overnight
        );
        assert!("teleport".parse::<ShippingMethod>().is_err());
        // Case-sensitive, matching the wire values exactly
        assert!("Standard".parse::<ShippingMethod>().is_err());
    }

    #[test]
    fn test_missing_fields_deserialize_empty() {
        let fields: AccountFields = serde_json::from_str("{}").unwrap();
        assert!(fields.email.is_empty());
        assert!(fields.password.is_empty());

        let fields: PaymentFields =
            serde_json::from_str(r#"{"nameOnCard":"A B","cvc":"123"}"#).unwrap();
        assert_eq!(fields.name_on_card, "A B");
        assert!(fields.card_number.is_empty());
    }

    #[test]
    fn test_camel_case_wire_names() {
        let fields = ShippingFields {
            address_line1: "1 Main St".into(),
            street_name: "Main St".into(),
            postcode: "12345".into(),
            shipping_method: "standard".into(),
        };
        let json = serde_json::to_value(&fields).unwrap();
        assert_eq!(json["addressLine1"], "1 Main St");
        assert_eq!(json["streetName"], "Main St");
        assert_eq!(json["shippingMethod"], "standard");
    }
}
