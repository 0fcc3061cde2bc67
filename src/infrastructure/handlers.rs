use crate::domain::payment::{Amount, PaymentMode, Receipt};
use crate::domain::ports::PaymentHandler;
use crate::error::Result;
use async_trait::async_trait;

/// PayPal strategy. A real integration would call the gateway here.
#[derive(Debug, Default, Clone, Copy)]
pub struct PayPalHandler;

#[async_trait]
impl PaymentHandler for PayPalHandler {
    async fn pay(&self, amount: Amount) -> Result<Receipt> {
        Ok(Receipt::confirmation(PaymentMode::PayPal, amount))
    }
}

/// GooglePay strategy.
#[derive(Debug, Default, Clone, Copy)]
pub struct GooglePayHandler;

#[async_trait]
impl PaymentHandler for GooglePayHandler {
    async fn pay(&self, amount: Amount) -> Result<Receipt> {
        Ok(Receipt::confirmation(PaymentMode::GooglePay, amount))
    }
}

/// Credit card strategy.
#[derive(Debug, Default, Clone, Copy)]
pub struct CreditCardHandler;

#[async_trait]
impl PaymentHandler for CreditCardHandler {
    async fn pay(&self, amount: Amount) -> Result<Receipt> {
        Ok(Receipt::confirmation(PaymentMode::CreditCard, amount))
    }
}
