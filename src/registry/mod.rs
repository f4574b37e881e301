//! Provider registry
//!
//! Maps a provider name to a live provider instance. This is the surface a
//! host's plugin loader consumes: it looks providers up by name (`"bitnet"`)
//! and drives them through [`InferenceProvider`].

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::LlmError;
use crate::providers::bitnet::{BitNetClient, BitNetConfig};
use crate::traits::InferenceProvider;

/// Provider name → provider instance
#[derive(Default, Clone)]
pub struct ProviderRegistry {
    by_id: HashMap<String, Arc<dyn InferenceProvider>>,
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.provider_ids())
            .finish()
    }
}

impl ProviderRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding a single BitNet client under `"bitnet"`
    pub fn with_bitnet(config: BitNetConfig) -> Result<Self, LlmError> {
        let mut registry = Self::new();
        registry.register(Arc::new(BitNetClient::new(config)?));
        Ok(registry)
    }

    /// Register a provider under its own id.
    ///
    /// Returns the provider previously registered under that id, if any.
    pub fn register(
        &mut self,
        provider: Arc<dyn InferenceProvider>,
    ) -> Option<Arc<dyn InferenceProvider>> {
        let id = provider.id().to_string();
        tracing::debug!("registering provider '{}'", id);
        self.by_id.insert(id, provider)
    }

    pub fn get(&self, id: &str) -> Option<Arc<dyn InferenceProvider>> {
        self.by_id.get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Registered ids, sorted
    pub fn provider_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.by_id.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitnet_registry_has_one_entry() {
        let registry =
            ProviderRegistry::with_bitnet(BitNetConfig::new("http://127.0.0.1:1")).unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("bitnet"));
        assert_eq!(registry.provider_ids(), vec!["bitnet"]);

        let provider = registry.get("bitnet").unwrap();
        assert_eq!(provider.id(), "bitnet");
        assert_eq!(provider.display_name(), "BitNet 1-bit LLM");
        assert!(provider.is_model_known("bitnet-b1.58-large"));
        assert!(!provider.is_model_known("gpt-4o"));
    }

    #[test]
    fn register_replaces_same_id() {
        let mut registry = ProviderRegistry::new();
        assert!(registry.is_empty());

        let first = Arc::new(BitNetClient::new(BitNetConfig::new("http://a:1")).unwrap());
        let second = Arc::new(BitNetClient::new(BitNetConfig::new("http://b:2")).unwrap());
        assert!(registry.register(first).is_none());
        assert!(registry.register(second).is_some());
        assert_eq!(registry.len(), 1);
        assert!(registry.get("openai").is_none());
    }

    #[test]
    fn registered_provider_answers_health_check() {
        // Port 1 refuses connections; the probe must report unhealthy, not fail
        let registry =
            ProviderRegistry::with_bitnet(BitNetConfig::new("http://127.0.0.1:1")).unwrap();
        let provider = registry.get("bitnet").unwrap();
        let healthy = tokio_test::block_on(provider.health_check());
        assert!(!healthy);
    }
}
