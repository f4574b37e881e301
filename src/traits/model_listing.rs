//! Model listing and liveness capability trait

use crate::types::ModelDescriptor;
use async_trait::async_trait;

#[async_trait]
pub trait ModelListingCapability: Send + Sync {
    /// Static catalog known without asking the backend
    fn models(&self) -> &'static [ModelDescriptor];

    /// Backend model list, or a catalog-derived fallback
    async fn get_models(&self) -> serde_json::Value;

    async fn health_check(&self) -> bool;

    fn is_model_known(&self, model_id: &str) -> bool {
        self.models().iter().any(|m| m.id == model_id)
    }
}
