use crate::core::CliError;
use crate::utils::resource_of;
use clap::{Args, ValueEnum};
use docs_translations_toml::TranslationsConfig;
use std::path::{Path, PathBuf};

/// Operations the tool can run, selected by name on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Operation {
    /// Pull translations from the platform and strip source locations
    Fetch,
    /// Print a robots.txt hiding insufficiently translated pages
    #[value(name = "robots_txt", alias = "robots-txt")]
    RobotsTxt,
}

/// Resource and language filters shared by every operation.
#[derive(Debug, Clone, Default, Args)]
pub struct SelectionArgs {
    /// Limit operation to the specified resources (can be specified multiple times).
    #[arg(short = 'r', long = "resources", value_name = "RESOURCE")]
    pub resources: Vec<String>,

    /// Limit operation to the specified languages (can be specified multiple times).
    #[arg(short = 'l', long = "languages", value_name = "LANGUAGE")]
    pub languages: Vec<String>,
}

impl SelectionArgs {
    /// Languages to process: the filter if given, otherwise every active language.
    pub fn languages<'a>(&'a self, config: &'a TranslationsConfig) -> &'a [String] {
        if self.languages.is_empty() {
            &config.active_languages
        } else {
            &self.languages
        }
    }

    /// Resources to process: the filter if given, otherwise every configured resource.
    pub fn resources<'a>(&'a self, config: &'a TranslationsConfig) -> &'a [String] {
        if self.resources.is_empty() {
            &config.resources
        } else {
            &self.resources
        }
    }

    /// Whether `resource` passes the resource filter.
    pub fn includes_resource(&self, resource: &str) -> bool {
        self.resources.is_empty() || self.resources.iter().any(|r| r == resource)
    }

    /// Whether the catalog at `path` passes the resource filter.
    ///
    /// Without a filter every catalog passes, including ones whose file name
    /// is not valid UTF-8.
    pub fn includes_catalog(&self, path: &Path) -> bool {
        self.resources.is_empty() || resource_of(path).is_some_and(|r| self.includes_resource(r))
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct ConfigArgs {
    /// Path to translations.toml (defaults to ./translations.toml when it exists).
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl ConfigArgs {
    /// Load the configuration, falling back to the defaults when no file is present.
    pub fn load(&self) -> Result<TranslationsConfig, CliError> {
        let config = match &self.config {
            Some(path) => TranslationsConfig::read_from_path(path)?,
            None => TranslationsConfig::from_dir_or_default(Path::new("."))?,
        };
        Ok(config)
    }
}
