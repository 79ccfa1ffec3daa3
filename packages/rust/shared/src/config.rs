//! Application configuration for SiteCrumbs.
//!
//! User config lives at `~/.sitecrumbs/sitecrumbs.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Result, SiteCrumbsError};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "sitecrumbs.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".sitecrumbs";

// ---------------------------------------------------------------------------
// Config structs (matching sitecrumbs.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Site identity.
    #[serde(default)]
    pub site: SiteConfig,

    /// Output defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// `[site]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site origin used to build absolute breadcrumb URLs.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Language code used when a command does not pass one.
    #[serde(default = "default_lang")]
    pub default_lang: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_lang: default_lang(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:4321".into()
}
fn default_lang() -> String {
    "en".into()
}

/// `[defaults]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Output format for printed trails.
    #[serde(default)]
    pub format: OutputFormat,
}

/// How a breadcrumb trail is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// `Home (url) > Blog (url) > Post`
    #[default]
    Text,
    /// The raw entry list as JSON.
    Json,
    /// A schema.org `BreadcrumbList` document.
    JsonLd,
    /// The JSON-LD document wrapped in a `<script>` tag.
    Script,
}

impl std::str::FromStr for OutputFormat {
    type Err = SiteCrumbsError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "json-ld" => Ok(Self::JsonLd),
            "script" => Ok(Self::Script),
            other => Err(SiteCrumbsError::validation(format!(
                "unknown output format '{other}': expected text, json, json-ld, or script"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.sitecrumbs/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| SiteCrumbsError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.sitecrumbs/sitecrumbs.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| SiteCrumbsError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        SiteCrumbsError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| SiteCrumbsError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| SiteCrumbsError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| SiteCrumbsError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

/// Check that a site origin is an absolute http(s) URL and normalize it.
///
/// The returned string has no trailing slash, so paths can be appended
/// with `format!("{base}/{segment}")`.
pub fn validate_base_url(raw: &str) -> Result<String> {
    let url = Url::parse(raw.trim())
        .map_err(|e| SiteCrumbsError::validation(format!("invalid base URL '{raw}': {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(SiteCrumbsError::validation(format!(
            "base URL '{raw}' must use http or https, got '{}'",
            url.scheme()
        )));
    }
    if url.host_str().is_none() {
        return Err(SiteCrumbsError::validation(format!(
            "base URL '{raw}' has no host"
        )));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(SiteCrumbsError::validation(format!(
            "base URL '{raw}' must not carry a query or fragment"
        )));
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("base_url"));
        assert!(toml_str.contains("default_lang = \"en\""));
        assert!(toml_str.contains("format = \"text\""));
    }

    #[test]
    fn config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.site.base_url, "http://localhost:4321");
        assert_eq!(parsed.defaults.format, OutputFormat::Text);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let toml_str = r#"
[site]
base_url = "https://max-dev.xyz"

[defaults]
format = "json-ld"
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.site.base_url, "https://max-dev.xyz");
        assert_eq!(config.site.default_lang, "en");
        assert_eq!(config.defaults.format, OutputFormat::JsonLd);
    }

    #[test]
    fn load_config_from_reports_parse_errors() {
        let dir = std::env::temp_dir().join(format!("sitecrumbs-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        let path = dir.join("broken.toml");
        std::fs::write(&path, "[site\nbase_url = 1").expect("write");

        let err = load_config_from(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn load_config_from_missing_file_is_io_error() {
        let err = load_config_from(Path::new("/nonexistent/sitecrumbs.toml")).unwrap_err();
        assert!(matches!(err, SiteCrumbsError::Io { .. }));
    }

    #[test]
    fn output_format_parses() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("json-ld".parse::<OutputFormat>().unwrap(), OutputFormat::JsonLd);
        assert_eq!("script".parse::<OutputFormat>().unwrap(), OutputFormat::Script);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn base_url_validation() {
        assert_eq!(
            validate_base_url("https://max-dev.xyz").unwrap(),
            "https://max-dev.xyz"
        );
        assert_eq!(
            validate_base_url("https://max-dev.xyz/").unwrap(),
            "https://max-dev.xyz"
        );
        assert_eq!(
            validate_base_url("http://localhost:4321/portfolio/").unwrap(),
            "http://localhost:4321/portfolio"
        );

        assert!(validate_base_url("max-dev.xyz").is_err());
        assert!(validate_base_url("ftp://max-dev.xyz").is_err());
        assert!(validate_base_url("https://max-dev.xyz/?ref=1").is_err());

        let err = validate_base_url("mailto:me@max-dev.xyz").unwrap_err();
        assert!(err.to_string().contains("http or https"));
    }
}
