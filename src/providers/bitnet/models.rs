//! Static model catalog.

use super::model_constants as ids;
use crate::defaults::provider;
use crate::types::{ModelCapability, ModelDescriptor, ModelList};

const TEXT: &[ModelCapability] = &[ModelCapability::Chat, ModelCapability::Completion];

static CATALOG: [ModelDescriptor; 4] = [
    ModelDescriptor {
        id: ids::BITNET_B1_58_2B,
        display_name: "BitNet b1.58 2B (Official)",
        description: "Official Microsoft BitNet 2B parameter model trained on 4T tokens",
        context_length: 4096,
        capabilities: TEXT,
    },
    ModelDescriptor {
        id: ids::BITNET_B1_58_LARGE,
        display_name: "BitNet b1.58 Large (0.7B)",
        description: "Smaller 0.7B model for faster inference",
        context_length: 2048,
        capabilities: TEXT,
    },
    ModelDescriptor {
        id: ids::BITNET_B1_58_3B,
        display_name: "BitNet b1.58 3B",
        description: "3.3B parameter model for improved quality",
        context_length: 4096,
        capabilities: TEXT,
    },
    ModelDescriptor {
        id: ids::LLAMA3_8B_1_58BIT,
        display_name: "Llama3 8B 1.58-bit",
        description: "Llama3 8B quantized to 1.58-bit weights",
        context_length: 8192,
        capabilities: TEXT,
    },
];

/// Every model in the catalog, in declaration order
pub fn all_models() -> &'static [ModelDescriptor] {
    &CATALOG
}

/// Look up a catalog entry by id
pub fn get_model(id: &str) -> Option<&'static ModelDescriptor> {
    CATALOG.iter().find(|m| m.id == id)
}

/// The list `get_models` answers with when the backend cannot
pub fn fallback_model_list() -> ModelList {
    ModelList::from_descriptors(CATALOG.iter(), provider::OWNED_BY)
}
