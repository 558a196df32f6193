// Configuration type definitions

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Suggestion server connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout; requests never time out when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            base_url: default_base_url(),
            timeout_ms: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// A text input on the form, optionally paired with a suggestion container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Identifier of the suggestion display area attached to this input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
}

impl FieldConfig {
    fn new(id: &str, label: &str, container: &str) -> Self {
        Self {
            id: id.to_string(),
            label: Some(label.to_string()),
            container: Some(container.to_string()),
        }
    }

    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }
}

/// Associates an input, its suggestion container and a backend endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingConfig {
    pub input_id: String,
    pub suggestion_container_id: String,
    pub endpoint: String,
    /// Field whose trimmed value is sent as the `context` parameter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_from: Option<String>,
}

impl BindingConfig {
    pub fn new(input_id: &str, suggestion_container_id: &str, endpoint: &str) -> Self {
        Self {
            input_id: input_id.to_string(),
            suggestion_container_id: suggestion_container_id.to_string(),
            endpoint: endpoint.to_string(),
            context_from: None,
        }
    }

    pub fn with_context_from(mut self, field_id: &str) -> Self {
        self.context_from = Some(field_id.to_string());
        self
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default = "default_fields")]
    pub fields: Vec<FieldConfig>,
    #[serde(default = "default_bindings")]
    pub bindings: Vec<BindingConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig::default(),
            fields: default_fields(),
            bindings: default_bindings(),
        }
    }
}

fn default_fields() -> Vec<FieldConfig> {
    vec![
        FieldConfig::new("title1", "First title", "suggestions1"),
        FieldConfig::new("title2", "Second title", "suggestions2"),
        FieldConfig::new("show", "Show", "suggestions-show"),
        FieldConfig::new("character", "Character", "suggestions-character"),
    ]
}

fn default_bindings() -> Vec<BindingConfig> {
    vec![
        BindingConfig::new("title1", "suggestions1", "shows"),
        BindingConfig::new("title2", "suggestions2", "shows"),
        BindingConfig::new("show", "suggestions-show", "shows"),
        BindingConfig::new("character", "suggestions-character", "characters")
            .with_context_from("show"),
    ]
}
