use miette::{IntoDiagnostic, Result};
use paymux::application::checkout::CheckoutEngine;
use paymux::domain::payment::{Amount, PaymentMode};
use paymux::domain::ports::HandlerRegistryBox;
use paymux::infrastructure::handlers::{CreditCardHandler, GooglePayHandler, PayPalHandler};
use paymux::infrastructure::in_memory::InMemoryHandlerRegistry;
use paymux::interfaces::console::ReceiptWriter;
use rust_decimal_macros::dec;
use std::io;

#[tokio::main]
async fn main() -> Result<()> {
    let registry: HandlerRegistryBox = Box::new(InMemoryHandlerRegistry::new());
    let engine = CheckoutEngine::new(registry);

    engine
        .register(PaymentMode::PayPal, Box::new(PayPalHandler))
        .await
        .into_diagnostic()?;
    engine
        .register(PaymentMode::GooglePay, Box::new(GooglePayHandler))
        .await
        .into_diagnostic()?;
    engine
        .register(PaymentMode::CreditCard, Box::new(CreditCardHandler))
        .await
        .into_diagnostic()?;

    let stdout = io::stdout();
    let mut writer = ReceiptWriter::new(stdout.lock());

    let amount = Amount::new(dec!(150.75)).into_diagnostic()?;
    for mode in [
        PaymentMode::PayPal,
        PaymentMode::GooglePay,
        PaymentMode::CreditCard,
    ] {
        let receipt = engine.checkout(mode, amount).await.into_diagnostic()?;
        writer.write_receipt(&receipt).into_diagnostic()?;
    }

    // A deregistered mode falls back to the no-strategy receipt.
    engine
        .unregister(PaymentMode::GooglePay)
        .await
        .into_diagnostic()?;
    let receipt = engine
        .checkout(PaymentMode::GooglePay, amount)
        .await
        .into_diagnostic()?;
    writer.write_receipt(&receipt).into_diagnostic()?;

    Ok(())
}
