use crate::action::ActionRegistry;
use crate::error::ConfigError;
use markup::CleanupConfig;
use serde::Deserialize;

pub const DEFAULT_ACTIONS: &str = "bold italic underline strikethrough | \
    insertunorderedlist insertorderedlist indent outdent | undo redo | \
    createlink unlink | urlimage | toggleview";

pub const DEFAULT_BASE_CSS: &str =
    "html{ height: 100%; cursor: text } body{ font-family: sans-serif; border: 0; }";

pub const DEFAULT_HTML: &str = "<html><head>\
    <meta http-equiv=\"Content-Type\" content=\"text/html; charset=UTF-8\">\
    <style>{BASECSS} {EXTRACSS}</style>{EXTERNALCSS}</head>\
    <body>{CONTENT}</body></html>";

/// Editor options. Every field is optional in TOML; cleanup switches sit at
/// the top level next to the rest.
///
/// ```
/// use editor::EditorConfig;
///
/// let config = EditorConfig::from_toml_str("xhtml = false\nactions = \"bold | italic\"").unwrap();
/// assert!(!config.cleanup.xhtml);
/// assert!(config.cleanup.semantics);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Render the toolbar and keep its states in sync.
    pub toolbar: bool,
    #[serde(flatten)]
    pub cleanup: CleanupConfig,
    /// On Enter outside any block element, start a new paragraph.
    pub paragraphise: bool,
    /// Toolbar layout: action names separated by spaces, `|` for a separator.
    pub actions: String,
    /// Flush content into the field when the enclosing form submits.
    pub handle_submit: bool,
    /// Focus the surface when the field's label is clicked.
    pub handle_label: bool,
    pub base_css: String,
    pub extra_css: String,
    /// Stylesheet URL linked into the surface document.
    pub external_css: String,
    /// Surface document template with `{BASECSS}`, `{EXTRACSS}`,
    /// `{EXTERNALCSS}` and `{CONTENT}` placeholders.
    pub html: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            toolbar: true,
            cleanup: CleanupConfig::default(),
            paragraphise: true,
            actions: DEFAULT_ACTIONS.to_string(),
            handle_submit: true,
            handle_label: true,
            base_css: DEFAULT_BASE_CSS.to_string(),
            extra_css: String::new(),
            external_css: String::new(),
            html: DEFAULT_HTML.to_string(),
        }
    }
}

/// One position in the toolbar layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionSlot {
    Action(String),
    Separator,
}

impl EditorConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn action_slots(&self) -> Vec<ActionSlot> {
        self.actions
            .split_whitespace()
            .map(|word| match word {
                "|" => ActionSlot::Separator,
                name => ActionSlot::Action(name.to_string()),
            })
            .collect()
    }

    /// Fail on the first action name `registry` does not know. The editor
    /// itself skips unknown names; this is for strict callers.
    pub fn validate(&self, registry: &ActionRegistry) -> Result<(), ConfigError> {
        for slot in self.action_slots() {
            if let ActionSlot::Action(name) = slot {
                if registry.get(&name).is_none() {
                    return Err(ConfigError::UnknownAction { name });
                }
            }
        }
        Ok(())
    }

    /// The surface document with `content` substituted into the template.
    /// Unknown placeholders are left as they are.
    pub fn document_html(&self, content: &str) -> String {
        let external = if self.external_css.is_empty() {
            String::new()
        } else {
            format!("<link rel=\"stylesheet\" href=\"{}\">", self.external_css)
        };

        let template = self.html.as_str();
        let mut out = String::with_capacity(template.len() + content.len());
        let mut rest = template;
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let Some(close) = after.find(['{', '}']).filter(|&i| after.as_bytes()[i] == b'}')
            else {
                out.push('{');
                rest = after;
                continue;
            };
            let value = match &after[..close] {
                "BASECSS" => Some(self.base_css.as_str()),
                "EXTRACSS" => Some(self.extra_css.as_str()),
                "EXTERNALCSS" => Some(external.as_str()),
                "CONTENT" => Some(content),
                _ => None,
            };
            match value {
                Some(value) => out.push_str(value),
                None => out.push_str(&rest[open..open + close + 2]),
            }
            rest = &after[close + 1..];
        }
        out.push_str(rest);
        out
    }
}
