//! CLI error types rendered through miette.

// Fields in these structs are read by miette's Diagnostic derive macro
#![allow(unused)]

use docs_translations_toml::TranslationsConfigError;
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Error when the translation platform client cannot be run.
#[derive(Debug, Diagnostic, Error)]
#[error("translation client `{command}` is not available: {reason}")]
#[diagnostic(
    code(docs_translations::fetch::client_missing),
    help(
        "Install the Transifex client (https://github.com/transifex/cli) or point \
         `tools.client` in translations.toml at it"
    )
)]
pub struct ClientToolMissingError {
    /// The command that was probed.
    pub command: String,
    /// Why the probe failed.
    pub reason: String,
}

/// Error when a branch name does not identify a documentation version.
#[derive(Debug, Diagnostic, Error)]
#[error("cannot derive a documentation version from branch '{branch}'")]
#[diagnostic(
    code(docs_translations::version::unparseable_branch),
    help(
        "Run from a trunk branch ({trunk}) or a release branch such as `stable/1.10.x`, \
         or pass --branch"
    )
)]
pub struct UnparseableBranchError {
    /// The branch name as reported by version control.
    pub branch: String,
    /// Comma-separated list of configured trunk branches.
    pub trunk: String,
}

/// Error when a catalog reports no messages at all.
#[derive(Debug, Diagnostic, Error)]
#[error("catalog {} reports no translated, untranslated or fuzzy messages", .path.display())]
#[diagnostic(
    code(docs_translations::robots::empty_catalog),
    help("Check that `msgfmt --statistics` can read this file, or delete it to treat it as untranslated")
)]
pub struct EmptyCatalogError {
    /// The catalog that was measured.
    pub path: PathBuf,
}

/// Main error type for the CLI.
#[derive(Debug, Diagnostic, Error)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    ClientToolMissing(#[from] ClientToolMissingError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    UnparseableBranch(#[from] UnparseableBranchError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    EmptyCatalog(#[from] EmptyCatalogError),

    #[error("invalid configuration: {0}")]
    #[diagnostic(
        code(docs_translations::config),
        help("See the docs-translations-toml README for the translations.toml format")
    )]
    Config(#[from] TranslationsConfigError),

    #[error("IO error: {0}")]
    #[diagnostic(code(docs_translations::io))]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    #[diagnostic(code(docs_translations::other))]
    Other(String),
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::Other(format!("{:#}", err))
    }
}
