//! Registry Configuration

/// Registry configuration options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Prefix for generated element ids
    pub id_prefix: String,

    /// Inert rule used to fill unwritten slots. The default `#null {}`
    /// still matches an element whose id is `null`; its empty body leaves
    /// such an element unstyled.
    pub placeholder_rule: String,

    /// `!important` setting for newly created rule entries
    pub default_use_important: bool,
}

impl RegistryConfig {
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    pub fn with_placeholder_rule(mut self, rule: impl Into<String>) -> Self {
        self.placeholder_rule = rule.into();
        self
    }

    pub fn with_default_use_important(mut self, use_important: bool) -> Self {
        self.default_use_important = use_important;
        self
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            id_prefix: "pseudoCssId".to_string(),
            placeholder_rule: "#null {}".to_string(),
            default_use_important: true,
        }
    }
}
