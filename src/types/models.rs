//! Model catalog and model list shapes.

use serde::{Deserialize, Serialize};

/// What a model can be used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelCapability {
    Chat,
    Completion,
}

impl ModelCapability {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Completion => "completion",
        }
    }
}

/// Static metadata for one selectable model variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    pub id: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub context_length: u32,
    pub capabilities: &'static [ModelCapability],
}

impl ModelDescriptor {
    pub fn supports(&self, capability: ModelCapability) -> bool {
        self.capabilities.contains(&capability)
    }
}

/// One entry of an OpenAI-style model list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelEntry {
    pub id: String,
    pub object: String,
    pub owned_by: String,
}

/// OpenAI-style `{ "object": "list", "data": [...] }` envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelList {
    pub object: String,
    pub data: Vec<ModelEntry>,
}

impl ModelList {
    /// Build a list from catalog descriptors, marking every entry as owned by `owned_by`
    pub fn from_descriptors<'a>(
        descriptors: impl IntoIterator<Item = &'a ModelDescriptor>,
        owned_by: &str,
    ) -> Self {
        Self {
            object: "list".to_string(),
            data: descriptors
                .into_iter()
                .map(|m| ModelEntry {
                    id: m.id.to_string(),
                    object: "model".to_string(),
                    owned_by: owned_by.to_string(),
                })
                .collect(),
        }
    }
}
