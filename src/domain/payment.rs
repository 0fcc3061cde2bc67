use crate::error::CheckoutError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of payment methods a checkout can target.
///
/// Modes are compared by identity and used only as registry keys; an
/// unsupported mode is represented by absence from the registry, not by an
/// extra variant.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMode {
    PayPal,
    GooglePay,
    CreditCard,
}

impl PaymentMode {
    /// The label used in confirmation messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMode::PayPal => "PayPal",
            PaymentMode::GooglePay => "GooglePay",
            PaymentMode::CreditCard => "Credit Card",
        }
    }
}

impl fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Represents a non-negative monetary amount.
///
/// This is a wrapper around `rust_decimal::Decimal` to enforce domain-specific
/// rules and provide type safety. Displayed with exactly two fractional
/// digits, rounding halves away from zero (150.759 renders as "150.76").
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, CheckoutError> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(CheckoutError::ValidationError(
                "Amount must not be negative".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = CheckoutError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{rounded:.2}")
    }
}

/// The observable outcome of a checkout call: a single human-readable line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt(String);

impl Receipt {
    /// Confirmation emitted by a handler after a successful dispatch.
    pub fn confirmation(mode: PaymentMode, amount: Amount) -> Self {
        Self(format!("Processing {mode} payment of ${amount}"))
    }

    /// Fallback for a mode with no registered handler. A mode that was never
    /// registered and one that was explicitly removed surface identically.
    pub fn unsupported() -> Self {
        Self("No strategy available for this payment mode!".to_string())
    }

    pub fn line(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
