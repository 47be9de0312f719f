//! robots.txt command implementation.
//!
//! Measures every `(language, resource)` catalog and disallows crawling of the
//! pages whose translation is below the configured threshold.

use super::{ConfigArgs, SelectionArgs};
use crate::core::{CliError, Completeness, CompletenessEntry, EmptyCatalogError, ExclusionList};
use crate::stats::parse_statistics;
use crate::tools::{SystemToolchain, Toolchain};
use crate::utils::{to_language, ui};
use crate::version::resolve_version;
use clap::Args;
use docs_translations_toml::TranslationsConfig;
use std::path::Path;
use tracing::debug;

/// Arguments specific to the robots_txt operation.
#[derive(Debug, Clone, Default, Args)]
pub struct RobotsArgs {
    /// Branch to derive the documentation version from, instead of asking git (robots_txt only).
    #[arg(long, value_name = "NAME")]
    pub branch: Option<String>,
}

/// Run the robots_txt command, printing the result to stdout.
pub fn run_robots_txt(
    selection: SelectionArgs,
    args: RobotsArgs,
    config: ConfigArgs,
) -> Result<(), CliError> {
    let config = config.load()?;
    let toolchain = SystemToolchain::new(config.tools.clone());

    let robots = robots_txt(&selection, args.branch.as_deref(), &config, &toolchain)?;

    println!("{}", robots);
    Ok(())
}

/// Build the exclusion list for the selected languages and resources.
pub fn robots_txt<T: Toolchain>(
    selection: &SelectionArgs,
    branch: Option<&str>,
    config: &TranslationsConfig,
    toolchain: &T,
) -> Result<ExclusionList, CliError> {
    let branch = match branch {
        Some(branch) => branch.to_string(),
        None => toolchain.current_branch()?,
    };
    let version = resolve_version(&branch, &config.trunk_branches)?;

    ui::print_robots_header(&version);

    let report = completeness_report(selection, config, toolchain)?;

    let mut robots = ExclusionList::new();
    for entry in report.iter().filter(|e| e.is_below(config.threshold)) {
        robots.disallow(format!(
            "/{}/{}/{}",
            to_language(&entry.language),
            version,
            entry.resource
        ));
    }

    ui::print_robots_summary(robots.disallowed().len(), report.len(), config.threshold);

    Ok(robots)
}

/// Measure completeness for every selected `(language, resource)` pair, in list order.
pub fn completeness_report<T: Toolchain>(
    selection: &SelectionArgs,
    config: &TranslationsConfig,
    toolchain: &T,
) -> Result<Vec<CompletenessEntry>, CliError> {
    let mut report = Vec::new();

    for language in selection.languages(config) {
        for resource in selection.resources(config) {
            let catalog = config.catalog_path(language, resource);
            let completeness = measure(&catalog, toolchain)?;
            debug!(
                language = %language,
                resource = %resource,
                percent = completeness.percent(),
                "measured"
            );

            report.push(CompletenessEntry {
                language: language.clone(),
                resource: resource.clone(),
                completeness,
            });
        }
    }

    Ok(report)
}

fn measure<T: Toolchain>(catalog: &Path, toolchain: &T) -> Result<Completeness, CliError> {
    if !catalog.exists() {
        return Ok(Completeness::Missing);
    }

    let output = toolchain.catalog_statistics(catalog)?;
    let stats = parse_statistics(&output);
    let percent = stats.percentage().ok_or_else(|| EmptyCatalogError {
        path: catalog.to_path_buf(),
    })?;

    Ok(Completeness::Measured { stats, percent })
}
