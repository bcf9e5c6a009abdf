//! Opaque step tokens for type-safe wizard references.
//!
//! Use the `define_token!` macro to create type-safe token wrappers that
//! prevent accidentally mixing identifiers returned by different steps
//! (e.g. passing a shipping token where the completion call expects the
//! account token).

/// Macro to define a type-safe opaque token wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - An associated `PREFIX` the issuing side stamps onto new tokens
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>` and `Display` implementations
///
/// Tokens are never interpreted beyond equality; the prefix exists so a
/// human reading logs can tell which step issued a value.
///
/// # Example
///
/// ```rust
/// # use wavecart_core::define_token;
/// define_token!(AccountId, "acc_");
/// define_token!(ShippingId, "ship_");
///
/// let account_id = AccountId::new("acc_1700000000000-1");
/// let shipping_id = ShippingId::new("ship_1700000000000-2");
///
/// // These are different types, so this won't compile:
/// // let _: AccountId = shipping_id;
/// ```
#[macro_export]
macro_rules! define_token {
    ($name:ident, $prefix:literal) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Prefix stamped onto tokens issued for this step.
            pub const PREFIX: &'static str = $prefix;

            /// Create a token from an already-issued value.
            pub fn new(token: impl Into<String>) -> Self {
                Self(token.into())
            }

            /// Get the token as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the token and return its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }

            /// Whether the token is empty (never true for issued tokens).
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(token: String) -> Self {
                Self(token)
            }
        }

        impl From<$name> for String {
            fn from(token: $name) -> Self {
                token.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Tokens issued by each step's acceptance
define_token!(AccountId, "acc_");
define_token!(ShippingId, "ship_");
define_token!(PaymentId, "pay_");
define_token!(OrderId, "ORD-");
