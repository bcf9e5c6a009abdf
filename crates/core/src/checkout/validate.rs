//! Per-step field validation.
//!
//! Each validator is a pure function of its input: fixed rules, no
//! external state, deterministic. The `Display` text of every error is the
//! exact user-facing message returned at the step boundary, so the three
//! error kinds (missing fields, bad format, business-rule rejection) all
//! travel the same way - as a rejection with a message.
//!
//! Presence is always checked first, then format, and the
//! [`StepPolicy`](super::policy::StepPolicy) hook runs last so a
//! business-rule rejection is only reachable with otherwise valid input.

use crate::types::{AccountFields, Email, PaymentFields, ShippingFields, ShippingMethod};

use super::policy::StepPolicy;

/// Minimum password length, in characters.
pub const MIN_PASSWORD_CHARS: usize = 8;

/// Card number length bounds (inclusive), in digits.
pub const CARD_NUMBER_DIGITS: core::ops::RangeInclusive<usize> = 13..=19;

/// Rejection reasons for the account step.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    #[error("Email and password are required")]
    MissingFields,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
    #[error("This email is already registered")]
    AlreadyRegistered,
}

/// Rejection reasons for the shipping step.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShippingError {
    #[error("All shipping fields are required")]
    MissingFields,
    #[error("Invalid shipping method")]
    UnknownMethod,
    #[error("Invalid postcode")]
    InvalidPostcode,
}

/// Rejection reasons for the payment step.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaymentError {
    #[error("All payment fields are required")]
    MissingFields,
    #[error("Invalid card number")]
    InvalidCardNumber,
    #[error("Invalid CVC")]
    InvalidCvc,
    #[error("Invalid month")]
    InvalidExpirationMonth,
    #[error("Invalid year")]
    InvalidExpirationYear,
    #[error("Card declined")]
    Declined,
}

/// Rejection reasons for the order completion call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompletionError {
    #[error("Missing required order information")]
    MissingInformation,
}

/// Validate the account step.
///
/// # Errors
///
/// Returns the first failing rule: presence, email format, password
/// length, then the policy hook.
pub fn validate_account(
    fields: &AccountFields,
    policy: &impl StepPolicy,
) -> Result<(), AccountError> {
    if fields.email.is_empty() || fields.password.is_empty() {
        return Err(AccountError::MissingFields);
    }

    Email::parse(&fields.email).map_err(|_| AccountError::InvalidEmail)?;

    if fields.password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(AccountError::PasswordTooShort);
    }

    policy.review_account(fields)
}

/// Validate the shipping step.
///
/// # Errors
///
/// Returns the first failing rule: presence, shipping method, then the
/// policy hook.
pub fn validate_shipping(
    fields: &ShippingFields,
    policy: &impl StepPolicy,
) -> Result<(), ShippingError> {
    if fields.address_line1.is_empty()
        || fields.street_name.is_empty()
        || fields.postcode.is_empty()
        || fields.shipping_method.is_empty()
    {
        return Err(ShippingError::MissingFields);
    }

    fields
        .shipping_method
        .parse::<ShippingMethod>()
        .map_err(|_| ShippingError::UnknownMethod)?;

    policy.review_shipping(fields)
}

/// Validate the payment step.
///
/// # Errors
///
/// Returns the first failing rule: presence, card number, CVC, expiration
/// month, expiration year, then the policy hook.
pub fn validate_payment(
    fields: &PaymentFields,
    policy: &impl StepPolicy,
) -> Result<(), PaymentError> {
    if fields.name_on_card.is_empty()
        || fields.card_number.is_empty()
        || fields.expiration_month.is_empty()
        || fields.expiration_year.is_empty()
        || fields.cvc.is_empty()
    {
        return Err(PaymentError::MissingFields);
    }

    if !all_digits(&fields.card_number) || !CARD_NUMBER_DIGITS.contains(&fields.card_number.len()) {
        return Err(PaymentError::InvalidCardNumber);
    }

    if !all_digits(&fields.cvc) || !(3..=4).contains(&fields.cvc.len()) {
        return Err(PaymentError::InvalidCvc);
    }

    if !is_valid_expiration_month(&fields.expiration_month) {
        return Err(PaymentError::InvalidExpirationMonth);
    }

    if !(fields.expiration_year.len() == 4 && all_digits(&fields.expiration_year)) {
        return Err(PaymentError::InvalidExpirationYear);
    }

    policy.review_payment(fields)
}

/// Validate the completion call's inputs.
///
/// The tokens from the three accepted steps must all be present.
///
/// # Errors
///
/// Returns `MissingInformation` if any token is absent or empty.
pub fn validate_completion(
    account_id: &str,
    shipping_id: &str,
    payment_id: &str,
) -> Result<(), CompletionError> {
    if account_id.is_empty() || shipping_id.is_empty() || payment_id.is_empty() {
        return Err(CompletionError::MissingInformation);
    }
    Ok(())
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Zero-padded two-digit month, `01` through `12`.
fn is_valid_expiration_month(s: &str) -> bool {
    s.len() == 2 && all_digits(s) && matches!(s.parse::<u8>(), Ok(1..=12))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::checkout::policy::{AllowAll, DemoPolicy};

    fn account(email: &str, password: &str) -> AccountFields {
        AccountFields {
            email: email.to_owned(),
            password: password.to_owned(),
        }
    }

    fn shipping(postcode: &str) -> ShippingFields {
        ShippingFields {
            address_line1: "1 Main St".to_owned(),
            street_name: "Main St".to_owned(),
            postcode: postcode.to_owned(),
            shipping_method: "standard".to_owned(),
        }
    }

    fn payment(card_number: &str) -> PaymentFields {
        PaymentFields {
            name_on_card: "A B".to_owned(),
            card_number: card_number.to_owned(),
            expiration_month: "12".to_owned(),
            expiration_year: "2030".to_owned(),
            cvc: "123".to_owned(),
        }
    }

    // Account

    #[test]
    fn test_account_missing_fields() {
        assert_eq!(
            validate_account(&account("", ""), &DemoPolicy),
            Err(AccountError::MissingFields)
        );
        assert_eq!(
            validate_account(&account("user@test.com", ""), &DemoPolicy),
            Err(AccountError::MissingFields)
        );
        // Presence wins regardless of other fields' validity
        assert_eq!(
            validate_account(&account("", "password123"), &DemoPolicy),
            Err(AccountError::MissingFields)
        );
    }

    #[test]
    fn test_account_invalid_email() {
        let err = validate_account(&account("not-an-email", "password123"), &DemoPolicy);
        assert_eq!(err, Err(AccountError::InvalidEmail));
        assert_eq!(
            err.unwrap_err().to_string(),
            "Invalid email format"
        );
    }

    #[test]
    fn test_account_password_length_boundary() {
        assert_eq!(
            validate_account(&account("a@b.co", "1234567"), &DemoPolicy),
            Err(AccountError::PasswordTooShort)
        );
        assert_eq!(
            validate_account(&account("a@b.co", "12345678"), &DemoPolicy),
            Ok(())
        );
    }

    #[test]
    fn test_account_registered_email_trigger() {
        assert_eq!(
            validate_account(&account("error@test.com", "password123"), &DemoPolicy),
            Err(AccountError::AlreadyRegistered)
        );
        // Format checks run before the policy hook
        assert_eq!(
            validate_account(&account("error@test.com", "short"), &DemoPolicy),
            Err(AccountError::PasswordTooShort)
        );
        // The trigger lives in the policy, not the validator
        assert_eq!(
            validate_account(&account("error@test.com", "password123"), &AllowAll),
            Ok(())
        );
    }

    #[test]
    fn test_account_messages() {
        assert_eq!(
            AccountError::MissingFields.to_string(),
            "Email and password are required"
        );
        assert_eq!(
            AccountError::PasswordTooShort.to_string(),
            "Password must be at least 8 characters"
        );
        assert_eq!(
            AccountError::AlreadyRegistered.to_string(),
            "This email is already registered"
        );
    }

    // Shipping

    #[test]
    fn test_shipping_missing_fields() {
        let mut fields = shipping("12345");
        fields.street_name.clear();
        assert_eq!(
            validate_shipping(&fields, &DemoPolicy),
            Err(ShippingError::MissingFields)
        );
        assert_eq!(
            ShippingError::MissingFields.to_string(),
            "All shipping fields are required"
        );
    }

    #[test]
    fn test_shipping_unknown_method() {
        let mut fields = shipping("12345");
        fields.shipping_method = "teleport".to_owned();
        assert_eq!(
            validate_shipping(&fields, &DemoPolicy),
            Err(ShippingError::UnknownMethod)
        );
    }

    #[test]
    fn test_shipping_postcode_trigger() {
        assert_eq!(
            validate_shipping(&shipping("00000"), &DemoPolicy),
            Err(ShippingError::InvalidPostcode)
        );
        assert_eq!(
            ShippingError::InvalidPostcode.to_string(),
            "Invalid postcode"
        );
        // Any other 5-digit value passes
        assert_eq!(validate_shipping(&shipping("00001"), &DemoPolicy), Ok(()));
        assert_eq!(validate_shipping(&shipping("12345"), &DemoPolicy), Ok(()));
    }

    // Payment

    #[test]
    fn test_payment_missing_fields() {
        let mut fields = payment("4242424242424242");
        fields.cvc.clear();
        assert_eq!(
            validate_payment(&fields, &DemoPolicy),
            Err(PaymentError::MissingFields)
        );
        assert_eq!(
            PaymentError::MissingFields.to_string(),
            "All payment fields are required"
        );
    }

    #[test]
    fn test_payment_card_number_rules() {
        // Non-digit
        assert_eq!(
            validate_payment(&payment("4242-4242-4242-4242"), &DemoPolicy),
            Err(PaymentError::InvalidCardNumber)
        );
        // Too short (12) and too long (20)
        assert_eq!(
            validate_payment(&payment("424242424242"), &DemoPolicy),
            Err(PaymentError::InvalidCardNumber)
        );
        assert_eq!(
            validate_payment(&payment("42424242424242424242"), &DemoPolicy),
            Err(PaymentError::InvalidCardNumber)
        );
        // Length bounds are inclusive
        assert_eq!(
            validate_payment(&payment("4242424242424"), &DemoPolicy),
            Ok(())
        );
        assert_eq!(
            validate_payment(&payment("4242424242424242424"), &DemoPolicy),
            Ok(())
        );
    }

    #[test]
    fn test_payment_cvc_rules() {
        let mut fields = payment("4242424242424242");
        fields.cvc = "12".to_owned();
        assert_eq!(
            validate_payment(&fields, &DemoPolicy),
            Err(PaymentError::InvalidCvc)
        );
        fields.cvc = "12345".to_owned();
        assert_eq!(
            validate_payment(&fields, &DemoPolicy),
            Err(PaymentError::InvalidCvc)
        );
        fields.cvc = "12a".to_owned();
        assert_eq!(
            validate_payment(&fields, &DemoPolicy),
            Err(PaymentError::InvalidCvc)
        );
        fields.cvc = "1234".to_owned();
        assert_eq!(validate_payment(&fields, &DemoPolicy), Ok(()));
    }

    #[test]
    fn test_payment_expiration_rules() {
        let mut fields = payment("4242424242424242");
        for bad in ["0", "1", "00", "13", "1a"] {
            fields.expiration_month = bad.to_owned();
            assert_eq!(
                validate_payment(&fields, &DemoPolicy),
                Err(PaymentError::InvalidExpirationMonth),
                "month {bad:?} should be rejected"
            );
        }
        for good in ["01", "09", "10", "12"] {
            fields.expiration_month = good.to_owned();
            assert_eq!(validate_payment(&fields, &DemoPolicy), Ok(()));
        }

        fields.expiration_month = "12".to_owned();
        for bad in ["30", "20300", "203a"] {
            fields.expiration_year = bad.to_owned();
            assert_eq!(
                validate_payment(&fields, &DemoPolicy),
                Err(PaymentError::InvalidExpirationYear),
                "year {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_payment_declined_card_trigger() {
        assert_eq!(
            validate_payment(&payment("4000000000000002"), &DemoPolicy),
            Err(PaymentError::Declined)
        );
        assert_eq!(PaymentError::Declined.to_string(), "Card declined");
        // Changing one digit passes
        assert_eq!(
            validate_payment(&payment("4000000000000003"), &DemoPolicy),
            Ok(())
        );
        // Without the demo policy the card is fine
        assert_eq!(
            validate_payment(&payment("4000000000000002"), &AllowAll),
            Ok(())
        );
    }

    // Completion

    #[test]
    fn test_completion_requires_all_tokens() {
        assert_eq!(validate_completion("acc_1", "ship_1", "pay_1"), Ok(()));
        assert_eq!(
            validate_completion("", "ship_1", "pay_1"),
            Err(CompletionError::MissingInformation)
        );
        assert_eq!(
            CompletionError::MissingInformation.to_string(),
            "Missing required order information"
        );
    }
}
