use paymux::domain::payment::{Amount, PaymentMode};
use paymux::domain::ports::{HandlerRegistry, HandlerRegistryBox, PaymentHandler};
use paymux::infrastructure::handlers::{GooglePayHandler, PayPalHandler};
use paymux::infrastructure::in_memory::InMemoryHandlerRegistry;
use rust_decimal_macros::dec;

#[tokio::test]
async fn test_registry_as_trait_object() {
    let registry: HandlerRegistryBox = Box::new(InMemoryHandlerRegistry::new());

    // Verify Send + Sync by moving the boxed registry into a task
    let handle = tokio::spawn(async move {
        registry
            .register(PaymentMode::PayPal, Box::new(PayPalHandler))
            .await
            .unwrap();
        let handler = registry.lookup(PaymentMode::PayPal).await.unwrap().unwrap();
        handler.pay(Amount::new(dec!(150.75)).unwrap()).await.unwrap()
    });

    let receipt = handle.await.unwrap();
    assert_eq!(receipt.line(), "Processing PayPal payment of $150.75");
}

#[tokio::test]
async fn test_shared_registry_across_tasks() {
    let registry = InMemoryHandlerRegistry::new();
    registry
        .register(PaymentMode::PayPal, Box::new(PayPalHandler))
        .await
        .unwrap();
    registry
        .register(PaymentMode::GooglePay, Box::new(GooglePayHandler))
        .await
        .unwrap();

    let r1 = registry.clone();
    let h1 = tokio::spawn(async move {
        let handler = r1.lookup(PaymentMode::PayPal).await.unwrap().unwrap();
        handler.pay(Amount::new(dec!(1.0)).unwrap()).await.unwrap()
    });

    let r2 = registry.clone();
    let h2 = tokio::spawn(async move {
        let handler = r2.lookup(PaymentMode::GooglePay).await.unwrap().unwrap();
        handler.pay(Amount::new(dec!(2.0)).unwrap()).await.unwrap()
    });

    assert_eq!(
        h1.await.unwrap().line(),
        "Processing PayPal payment of $1.00"
    );
    assert_eq!(
        h2.await.unwrap().line(),
        "Processing GooglePay payment of $2.00"
    );
}
