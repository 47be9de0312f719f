//! Fetch command implementation.
//!
//! Pulls each language from the translation platform, then rewrites every
//! pulled catalog without source location comments.

use super::{ConfigArgs, SelectionArgs};
use crate::core::{CliError, FetchSummary};
use crate::tools::{SystemToolchain, Toolchain};
use crate::utils::{list_catalogs, ui};
use docs_translations_toml::TranslationsConfig;
use std::io::{self, Write};
use tracing::debug;

/// Run the fetch command.
pub fn run_fetch(selection: SelectionArgs, config: ConfigArgs) -> Result<(), CliError> {
    let config = config.load()?;
    let toolchain = SystemToolchain::new(config.tools.clone());

    ui::print_fetch_header();

    let stdout = io::stdout();
    let summary = fetch(&selection, &config, &toolchain, &mut stdout.lock())?;

    ui::print_fetch_summary(summary.languages, summary.catalogs, &summary.skipped_languages);
    Ok(())
}

/// Pull and normalize catalogs, writing each processed catalog path to `out`.
///
/// Fails before touching any language when the client is unavailable. Failed
/// pulls and normalizations are reported and otherwise ignored.
pub fn fetch<T: Toolchain, W: Write>(
    selection: &SelectionArgs,
    config: &TranslationsConfig,
    toolchain: &T,
    out: &mut W,
) -> Result<FetchSummary, CliError> {
    toolchain.probe_client()?;

    let languages = selection.languages(config);
    let mut summary = FetchSummary::default();

    let pb = ui::create_progress_bar(languages.len() as u64, "Fetching translations...");

    for language in languages {
        let remote = config.remote_language(language);
        pb.set_message(format!("Pulling {}", language));
        pb.suspend(|| ui::print_pulling(language, remote));

        if let Err(e) = toolchain.pull(remote, config.minimum_perc) {
            pb.suspend(|| ui::print_pull_failed(language, &format!("{:#}", e)));
        }

        let catalog_dir = config.catalog_dir(language);
        let catalogs = match list_catalogs(&catalog_dir) {
            Ok(catalogs) => catalogs,
            Err(e) => {
                debug!(language = %language, error = %format!("{:#}", e), "no catalog directory");
                pb.suspend(|| ui::print_missing_catalog_dir(language, &catalog_dir));
                summary.skipped_languages.push(language.clone());
                pb.inc(1);
                continue;
            },
        };

        for catalog in catalogs.iter().filter(|c| selection.includes_catalog(c)) {
            pb.suspend(|| writeln!(out, "{}", catalog.display()))?;

            if let Err(e) = toolchain.strip_locations(catalog) {
                pb.suspend(|| ui::print_normalize_failed(catalog, &format!("{:#}", e)));
            }
            summary.catalogs += 1;
        }

        summary.languages += 1;
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::fake::{Call, FakeToolchain};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn setup(languages: &[&str], catalogs: &[(&str, &str)]) -> (TempDir, TranslationsConfig) {
        let temp = TempDir::new().unwrap();
        let config = TranslationsConfig {
            active_languages: languages.iter().map(|l| l.to_string()).collect(),
            translations_dir: temp.path().join("translations"),
            ..TranslationsConfig::default()
        };
        for (language, file) in catalogs {
            let dir = config.catalog_dir(language);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join(file), "msgid \"\"\nmsgstr \"\"\n").unwrap();
        }
        (temp, config)
    }

    fn printed(out: &[u8]) -> Vec<String> {
        String::from_utf8(out.to_vec())
            .unwrap()
            .lines()
            .map(String::from)
            .collect()
    }

    fn path_str(path: &Path) -> String {
        path.display().to_string()
    }

    #[test]
    fn test_missing_client_aborts_before_any_language() {
        let (_temp, config) = setup(&["fr"], &[("fr", "intro.po")]);
        let toolchain = FakeToolchain {
            client_missing: true,
            ..FakeToolchain::default()
        };
        let mut out = Vec::new();

        let err = fetch(&SelectionArgs::default(), &config, &toolchain, &mut out).unwrap_err();

        assert!(matches!(err, CliError::ClientToolMissing(_)));
        assert_eq!(toolchain.calls(), vec![Call::Probe]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_pulls_and_normalizes_catalogs() {
        let (_temp, mut config) = setup(
            &["fr", "pt_BR"],
            &[
                ("fr", "intro.po"),
                ("fr", "index.po"),
                ("fr", "intro.mo"),
                ("pt_BR", "topics.po"),
            ],
        );
        config
            .remote_languages
            .insert("pt_BR".to_string(), "pt-BR".to_string());
        let toolchain = FakeToolchain::default();
        let mut out = Vec::new();

        let summary = fetch(&SelectionArgs::default(), &config, &toolchain, &mut out).unwrap();

        let fr_index = config.catalog_dir("fr").join("index.po");
        let fr_intro = config.catalog_dir("fr").join("intro.po");
        let pt_topics = config.catalog_dir("pt_BR").join("topics.po");
        assert_eq!(
            toolchain.calls(),
            vec![
                Call::Probe,
                Call::Pull("fr".to_string(), 5),
                Call::Strip(fr_index.clone()),
                Call::Strip(fr_intro.clone()),
                Call::Pull("pt-BR".to_string(), 5),
                Call::Strip(pt_topics.clone()),
            ]
        );
        assert_eq!(
            printed(&out),
            vec![path_str(&fr_index), path_str(&fr_intro), path_str(&pt_topics)]
        );
        assert_eq!(
            summary,
            FetchSummary {
                languages: 2,
                skipped_languages: Vec::new(),
                catalogs: 3,
            }
        );
    }

    #[test]
    fn test_language_filter_passes_unknown_codes_through() {
        let (_temp, config) = setup(&["fr"], &[("xx", "intro.po")]);
        let selection = SelectionArgs {
            languages: vec!["xx".to_string()],
            ..SelectionArgs::default()
        };
        let toolchain = FakeToolchain::default();
        let mut out = Vec::new();

        fetch(&selection, &config, &toolchain, &mut out).unwrap();

        let calls = toolchain.calls();
        assert_eq!(calls[1], Call::Pull("xx".to_string(), 5));
        assert!(!calls.contains(&Call::Pull("fr".to_string(), 5)));
    }

    #[test]
    fn test_resource_filter_limits_normalization() {
        let (_temp, config) = setup(&["fr"], &[("fr", "intro.po"), ("fr", "index.po")]);
        let selection = SelectionArgs {
            resources: vec!["intro".to_string()],
            ..SelectionArgs::default()
        };
        let toolchain = FakeToolchain::default();
        let mut out = Vec::new();

        let summary = fetch(&selection, &config, &toolchain, &mut out).unwrap();

        let intro = config.catalog_dir("fr").join("intro.po");
        assert_eq!(printed(&out), vec![path_str(&intro)]);
        assert_eq!(summary.catalogs, 1);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_catalog_names_are_normalized_without_filter() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt as _;

        let (_temp, config) = setup(&["fr"], &[("fr", "intro.po")]);
        let odd = config
            .catalog_dir("fr")
            .join(OsStr::from_bytes(b"caf\xe9.po"));
        fs::write(&odd, "").unwrap();
        let toolchain = FakeToolchain::default();
        let mut out = Vec::new();

        let summary = fetch(&SelectionArgs::default(), &config, &toolchain, &mut out).unwrap();

        assert_eq!(summary.catalogs, 2);
        assert!(toolchain.calls().contains(&Call::Strip(odd)));
    }

    #[test]
    fn test_failed_pull_and_missing_directory_do_not_stop_the_run() {
        let (_temp, config) = setup(&["el", "fr"], &[("fr", "intro.po")]);
        let toolchain = FakeToolchain {
            failing_pulls: vec!["el".to_string()],
            ..FakeToolchain::default()
        };
        let mut out = Vec::new();

        let summary = fetch(&SelectionArgs::default(), &config, &toolchain, &mut out).unwrap();

        assert_eq!(summary.skipped_languages, vec!["el".to_string()]);
        assert_eq!(summary.languages, 1);
        assert_eq!(summary.catalogs, 1);
        assert!(
            toolchain
                .calls()
                .contains(&Call::Pull("fr".to_string(), 5))
        );
    }
}
