use super::payment::{Amount, PaymentMode, Receipt};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// An interchangeable payment strategy for one specific mode.
///
/// Implementations are stateless placeholders for real gateway integrations;
/// the dispatch machinery never needs to know which one it holds.
#[async_trait]
pub trait PaymentHandler: Send + Sync {
    async fn pay(&self, amount: Amount) -> Result<Receipt>;
}

pub type PaymentHandlerBox = Box<dyn PaymentHandler>;

/// The runtime mapping from payment mode to its currently active handler.
///
/// At most one handler per mode: registering again replaces, unregistering
/// removes the mapping entirely.
#[async_trait]
pub trait HandlerRegistry: Send + Sync {
    /// Inserts or replaces the handler for `mode`. Always succeeds.
    async fn register(&self, mode: PaymentMode, handler: PaymentHandlerBox) -> Result<()>;

    /// Removes the mapping for `mode`; no-op when absent.
    async fn unregister(&self, mode: PaymentMode) -> Result<()>;

    /// Returns the handler for `mode`. Absence is a normal outcome
    /// (unsupported or deregistered mode), not an error.
    async fn lookup(&self, mode: PaymentMode) -> Result<Option<Arc<dyn PaymentHandler>>>;
}

pub type HandlerRegistryBox = Box<dyn HandlerRegistry>;
