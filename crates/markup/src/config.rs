use serde::Deserialize;

/// Switches for the normalization pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CleanupConfig {
    /// Run the full rewrite pipeline. When false the markup is only trimmed.
    pub cleanup: bool,
    /// Rewrite void elements (`br`, `hr`, `img`, `input`) to self-closing form.
    pub xhtml: bool,
    /// Rewrite ad hoc block structure into paragraphs and lists, and
    /// pretty-print the result.
    pub semantics: bool,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            cleanup: true,
            xhtml: true,
            semantics: true,
        }
    }
}

impl CleanupConfig {
    /// Every switch off except `cleanup`.
    pub fn minimal() -> Self {
        Self {
            cleanup: true,
            xhtml: false,
            semantics: false,
        }
    }
}
