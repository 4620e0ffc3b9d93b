//! `richedit`: normalize editor markup from a file or stdin.
//!
//! ```text
//! richedit [--config FILE] [--no-cleanup] [INPUT]
//! ```
//!
//! The editor config is the same TOML the editor loads. Only its cleanup
//! switches matter here: a malformed file is an error, unknown toolbar
//! actions are only warned about.

use editor::{ActionRegistry, ConfigError, EditorConfig};
use markup::CleanupConfig;
use mimalloc::MiMalloc;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const USAGE: &str = "usage: richedit [--config FILE] [--no-cleanup] [INPUT]";

#[derive(Debug)]
enum CliError {
    Usage(String),
    Io { path: Option<PathBuf>, source: io::Error },
    Config(ConfigError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}\n{USAGE}"),
            CliError::Io { path: Some(path), source } => {
                write!(f, "{}: {source}", path.display())
            }
            CliError::Io { path: None, source } => write!(f, "stdio: {source}"),
            CliError::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Usage(_) => None,
            CliError::Io { source, .. } => Some(source),
            CliError::Config(err) => Some(err),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Config(err)
    }
}

#[derive(Debug, Default)]
struct Options {
    config: Option<PathBuf>,
    no_cleanup: bool,
    input: Option<PathBuf>,
}

impl Options {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, CliError> {
        let mut options = Options::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let path = args
                        .next()
                        .ok_or_else(|| CliError::Usage("--config needs a file".into()))?;
                    options.config = Some(path.into());
                }
                "--no-cleanup" => options.no_cleanup = true,
                flag if flag.starts_with("--") => {
                    return Err(CliError::Usage(format!("unknown option {flag}")));
                }
                _ if options.input.is_some() => {
                    return Err(CliError::Usage("more than one input".into()));
                }
                _ => options.input = Some(PathBuf::from(&arg)),
            }
        }
        Ok(options)
    }
}

fn read_file(path: &PathBuf) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: Some(path.clone()),
        source,
    })
}

/// Cleanup switches from the editor config text, if any.
fn cleanup_config(source: Option<&str>, no_cleanup: bool) -> Result<CleanupConfig, CliError> {
    let config = match source {
        Some(source) => EditorConfig::from_toml_str(source)?,
        None => EditorConfig::default(),
    };
    if let Err(err) = config.validate(&ActionRegistry::standard()) {
        log::warn!("{err} (ignored, the toolbar does not affect normalization)");
    }
    let mut cleanup = config.cleanup;
    if no_cleanup {
        cleanup.cleanup = false;
    }
    Ok(cleanup)
}

fn run(options: Options) -> Result<(), CliError> {
    let source = options.config.as_ref().map(read_file).transpose()?;
    let cleanup = cleanup_config(source.as_deref(), options.no_cleanup)?;

    let raw = match &options.input {
        Some(path) => read_file(path)?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| CliError::Io { path: None, source })?;
            buf
        }
    };

    let report = markup::normalize_with_report(&raw, &cleanup);
    log::info!(
        "normalized {} bytes into {} in {} passes",
        raw.len(),
        report.markup.len(),
        report.passes
    );

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", report.markup).map_err(|source| CliError::Io { path: None, source })
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let result = Options::parse(std::env::args().skip(1)).and_then(run);
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("richedit: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Options, CliError> {
        Options::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn parses_flags_and_input() {
        let options = parse(&["--config", "e.toml", "--no-cleanup", "in.html"]).unwrap();
        assert_eq!(options.config, Some(PathBuf::from("e.toml")));
        assert!(options.no_cleanup);
        assert_eq!(options.input, Some(PathBuf::from("in.html")));
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(matches!(parse(&["--config"]), Err(CliError::Usage(_))));
        assert!(matches!(parse(&["--fast"]), Err(CliError::Usage(_))));
        assert!(matches!(parse(&["a", "b"]), Err(CliError::Usage(_))));
    }

    #[test]
    fn unknown_toolbar_actions_do_not_block_normalization() {
        let source = "actions = \"bold sparkle\"\nxhtml = false";
        let cleanup = cleanup_config(Some(source), false).unwrap();
        assert!(!cleanup.xhtml);
        assert!(cleanup.cleanup);
    }

    #[test]
    fn malformed_config_is_an_error() {
        let err = cleanup_config(Some("xhtml = \"maybe\""), false).unwrap_err();
        assert!(matches!(err, CliError::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn no_cleanup_overrides_the_config() {
        let cleanup = cleanup_config(Some("cleanup = true"), true).unwrap();
        assert!(!cleanup.cleanup);
    }

    #[test]
    fn missing_input_file_is_an_io_error() {
        let options = parse(&["/nonexistent/richedit-input.html"]).unwrap();
        let err = run(options).unwrap_err();
        assert!(matches!(err, CliError::Io { path: Some(_), .. }));
    }
}
