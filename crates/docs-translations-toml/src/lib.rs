#![doc = include_str!("../README.md")]

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default name of the configuration file, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "translations.toml";

/// Sub-directory inside each language directory that holds the catalogs.
pub const MESSAGES_DIR: &str = "LC_MESSAGES";

/// File extension of message catalogs.
pub const CATALOG_EXTENSION: &str = "po";

#[derive(Debug, Error)]
pub enum TranslationsConfigError {
    /// Configuration file not found.
    #[error("translations.toml configuration file not found: {0}")]
    NotFound(PathBuf),
    /// Failed to read configuration file.
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse configuration file.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// External commands the tooling shells out to.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ToolsConfig {
    /// Translation platform client (`tx pull`).
    pub client: String,
    /// Catalog normalizer used to strip location comments.
    pub msgcat: String,
    /// Catalog compiler used for `--statistics`.
    pub msgfmt: String,
    /// Version control client used to read the current branch.
    pub git: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            client: "tx".to_string(),
            msgcat: "msgcat".to_string(),
            msgfmt: "msgfmt".to_string(),
            git: "git".to_string(),
        }
    }
}

/// The configuration for the documentation translations tooling.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct TranslationsConfig {
    /// Languages whose `intro` and `index` resources must be fully translated.
    ///
    /// Order matters: commands walk this list front to back.
    pub active_languages: Vec<String>,
    /// Documentation sections tracked as independent translation units.
    pub resources: Vec<String>,
    /// Root of the catalog tree.
    /// Expected structure: {translations_dir}/{language}/LC_MESSAGES/{resource}.po
    pub translations_dir: PathBuf,
    /// Minimum completeness a remote catalog needs before it is pulled.
    pub minimum_perc: u8,
    /// Resources below this completeness are excluded from crawling.
    pub threshold: u8,
    /// Branch names that publish the `dev` documentation.
    pub trunk_branches: Vec<String>,
    /// Local language codes that use a different identifier on the remote store.
    ///
    /// ```toml
    /// [remote_languages]
    /// zh_Hans = "zh-Hans"
    /// ```
    pub remote_languages: IndexMap<String, String>,
    /// External command names.
    pub tools: ToolsConfig,
}

impl Default for TranslationsConfig {
    fn default() -> Self {
        Self {
            active_languages: ["el", "es", "fr", "id", "ja", "pt_BR"]
                .map(String::from)
                .to_vec(),
            resources: [
                "contents",
                "faq",
                "glossary",
                "howto",
                "index",
                "internals",
                "intro",
                "misc",
                "ref",
                "releases",
                "topics",
            ]
            .map(String::from)
            .to_vec(),
            translations_dir: PathBuf::from("translations"),
            minimum_perc: 5,
            threshold: 90,
            trunk_branches: vec!["master".to_string(), "main".to_string()],
            remote_languages: IndexMap::new(),
            tools: ToolsConfig::default(),
        }
    }
}

impl TranslationsConfig {
    /// Reads the configuration from a path.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, TranslationsConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(TranslationsConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs_err::read_to_string(path)?;

        Self::from_toml_str(&content)
    }

    /// Parses the configuration from TOML source.
    pub fn from_toml_str(content: &str) -> Result<Self, TranslationsConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Reads `translations.toml` from `dir`, or returns the defaults when the file is absent.
    pub fn from_dir_or_default(dir: &Path) -> Result<Self, TranslationsConfigError> {
        match Self::read_from_path(dir.join(CONFIG_FILE_NAME)) {
            Err(TranslationsConfigError::NotFound(_)) => Ok(Self::default()),
            other => other,
        }
    }

    /// Directory holding the catalogs of `language`.
    pub fn catalog_dir(&self, language: &str) -> PathBuf {
        self.translations_dir.join(language).join(MESSAGES_DIR)
    }

    /// Path of the catalog for `(language, resource)`.
    pub fn catalog_path(&self, language: &str, resource: &str) -> PathBuf {
        self.catalog_dir(language)
            .join(format!("{}.{}", resource, CATALOG_EXTENSION))
    }

    /// Identifier `language` is known by on the remote store.
    pub fn remote_language<'a>(&'a self, language: &'a str) -> &'a str {
        self.remote_languages
            .get(language)
            .map(String::as_str)
            .unwrap_or(language)
    }
}
