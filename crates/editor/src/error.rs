/// Failure to load an [`EditorConfig`](crate::EditorConfig).
#[derive(Debug)]
pub enum ConfigError {
    Parse(toml::de::Error),
    UnknownAction { name: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(err) => write!(f, "invalid editor config: {err}"),
            ConfigError::UnknownAction { name } => write!(f, "unknown toolbar action: {name}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(err) => Some(err),
            ConfigError::UnknownAction { .. } => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}
