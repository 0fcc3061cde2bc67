use crate::domain::payment::{Amount, PaymentMode, Receipt};
use crate::domain::ports::{HandlerRegistryBox, PaymentHandlerBox};
use crate::error::Result;

/// The single entry point callers use for checkout.
///
/// `CheckoutEngine` owns the handler registry and hides lookup and fallback
/// behavior: a mode with no registered handler yields the fallback receipt,
/// never an error. Dispatch itself is stateless; only the registry's mapping
/// persists between calls.
pub struct CheckoutEngine {
    registry: HandlerRegistryBox,
}

impl CheckoutEngine {
    /// Creates a new `CheckoutEngine` over the given registry.
    pub fn new(registry: HandlerRegistryBox) -> Self {
        Self { registry }
    }

    /// Inserts or replaces the handler dispatched for `mode`.
    pub async fn register(&self, mode: PaymentMode, handler: PaymentHandlerBox) -> Result<()> {
        self.registry.register(mode, handler).await
    }

    /// Removes the handler for `mode`. Removing an absent mode is a no-op.
    pub async fn unregister(&self, mode: PaymentMode) -> Result<()> {
        self.registry.unregister(mode).await
    }

    /// Dispatches a checkout to the handler registered for `mode`.
    ///
    /// A mode that was never registered and one that was explicitly removed
    /// both surface as the same fallback receipt; the distinction is not
    /// reported to the caller.
    pub async fn checkout(&self, mode: PaymentMode, amount: Amount) -> Result<Receipt> {
        match self.registry.lookup(mode).await? {
            Some(handler) => handler.pay(amount).await,
            None => Ok(Receipt::unsupported()),
        }
    }
}
