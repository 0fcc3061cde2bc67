use crate::domain::payment::PaymentMode;
use crate::domain::ports::{HandlerRegistry, PaymentHandler, PaymentHandlerBox};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory handler registry.
///
/// Uses `Arc<RwLock<HashMap<..>>>` so mutation and lookup stay serialized
/// when the registry is shared across tasks. Handlers live only for the
/// process lifetime; replacing or removing a mapping releases the prior
/// instance.
#[derive(Default, Clone)]
pub struct InMemoryHandlerRegistry {
    handlers: Arc<RwLock<HashMap<PaymentMode, Arc<dyn PaymentHandler>>>>,
}

impl InMemoryHandlerRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HandlerRegistry for InMemoryHandlerRegistry {
    async fn register(&self, mode: PaymentMode, handler: PaymentHandlerBox) -> Result<()> {
        let mut handlers = self.handlers.write().await;
        handlers.insert(mode, Arc::from(handler));
        Ok(())
    }

    async fn unregister(&self, mode: PaymentMode) -> Result<()> {
        let mut handlers = self.handlers.write().await;
        handlers.remove(&mode);
        Ok(())
    }

    async fn lookup(&self, mode: PaymentMode) -> Result<Option<Arc<dyn PaymentHandler>>> {
        let handlers = self.handlers.read().await;
        Ok(handlers.get(&mode).cloned())
    }
}
