//! External programs the commands shell out to.
//!
//! Every program is spawned directly with an argument vector, never through a shell.

use crate::core::ClientToolMissingError;
use anyhow::{Context as _, Result, bail};
use docs_translations_toml::ToolsConfig;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tracing::debug;

/// Locale forced on `msgfmt` so its statistics are printed in English.
const STABLE_LOCALE: &str = "C";

/// The external collaborators used by `fetch` and `robots_txt`.
pub trait Toolchain {
    /// Check that the translation platform client can be run.
    fn probe_client(&self) -> Result<(), ClientToolMissingError>;

    /// Pull remote translations for `language` (already in its remote form).
    fn pull(&self, language: &str, minimum_perc: u8) -> Result<()>;

    /// Rewrite `catalog` in place without `#:` location comments.
    fn strip_locations(&self, catalog: &Path) -> Result<()>;

    /// Diagnostic text printed by the statistics tool for `catalog`.
    fn catalog_statistics(&self, catalog: &Path) -> Result<String>;

    /// Name of the currently checked out branch.
    fn current_branch(&self) -> Result<String>;
}

/// [`Toolchain`] backed by real processes.
#[derive(Clone, Debug)]
pub struct SystemToolchain {
    tools: ToolsConfig,
}

impl SystemToolchain {
    pub fn new(tools: ToolsConfig) -> Self {
        Self { tools }
    }

    fn run(mut cmd: Command) -> Result<Output> {
        debug!(command = ?cmd, "running");
        let program = cmd.get_program().to_string_lossy().into_owned();
        let output = cmd
            .output()
            .with_context(|| format!("Failed to run {}", program))?;
        debug!(command = %program, status = %output.status, "finished");
        Ok(output)
    }

    fn run_checked(cmd: Command) -> Result<Output> {
        let program = cmd.get_program().to_string_lossy().into_owned();
        let output = Self::run(cmd)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("{} failed ({}): {}", program, output.status, stderr.trim());
        }

        Ok(output)
    }
}

impl Toolchain for SystemToolchain {
    fn probe_client(&self) -> Result<(), ClientToolMissingError> {
        let mut cmd = Command::new(&self.tools.client);
        cmd.arg("--version");

        let missing = |reason: String| ClientToolMissingError {
            command: self.tools.client.clone(),
            reason,
        };

        let output = Self::run(cmd).map_err(|e| missing(format!("{:#}", e)))?;
        if output.status.success() {
            Ok(())
        } else {
            Err(missing(format!("`--version` exited with {}", output.status)))
        }
    }

    fn pull(&self, language: &str, minimum_perc: u8) -> Result<()> {
        let mut cmd = Command::new(&self.tools.client);
        cmd.arg("pull")
            .arg("-l")
            .arg(language)
            .arg(format!("--minimum-perc={}", minimum_perc));

        Self::run_checked(cmd).map(drop)
    }

    fn strip_locations(&self, catalog: &Path) -> Result<()> {
        let mut cmd = Command::new(&self.tools.msgcat);
        cmd.arg("--no-location").arg("-o").arg(catalog).arg(catalog);

        Self::run_checked(cmd).map(drop)
    }

    fn catalog_statistics(&self, catalog: &Path) -> Result<String> {
        let mut cmd = Command::new(&self.tools.msgfmt);
        cmd.arg("--statistics")
            .arg("-o")
            .arg("-")
            .arg(catalog)
            .env("LANG", STABLE_LOCALE)
            .env("LC_ALL", STABLE_LOCALE)
            .stdout(Stdio::null());

        // msgfmt prints statistics even for catalogs it rejects; status is ignored.
        let output = Self::run(cmd)?;
        Ok(String::from_utf8_lossy(&output.stderr).into_owned())
    }

    fn current_branch(&self) -> Result<String> {
        let mut cmd = Command::new(&self.tools.git);
        cmd.args(["rev-parse", "--abbrev-ref", "HEAD"]);

        let output = Self::run_checked(cmd).context("Failed to read the current branch")?;
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

#[cfg(test)]
pub(crate) mod fake {
    //! Recording [`Toolchain`] used by command tests.

    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::path::PathBuf;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Call {
        Probe,
        Pull(String, u8),
        Strip(PathBuf),
        Statistics(PathBuf),
        Branch,
    }

    #[derive(Default)]
    pub struct FakeToolchain {
        pub client_missing: bool,
        pub failing_pulls: Vec<String>,
        pub branch: String,
        pub statistics: HashMap<PathBuf, String>,
        pub calls: RefCell<Vec<Call>>,
    }

    impl FakeToolchain {
        pub fn on_branch(branch: &str) -> Self {
            Self {
                branch: branch.to_string(),
                ..Self::default()
            }
        }

        pub fn with_statistics(mut self, catalog: PathBuf, output: &str) -> Self {
            self.statistics.insert(catalog, output.to_string());
            self
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    impl Toolchain for FakeToolchain {
        fn probe_client(&self) -> Result<(), ClientToolMissingError> {
            self.calls.borrow_mut().push(Call::Probe);
            if self.client_missing {
                return Err(ClientToolMissingError {
                    command: "tx".to_string(),
                    reason: "No such file or directory".to_string(),
                });
            }
            Ok(())
        }

        fn pull(&self, language: &str, minimum_perc: u8) -> Result<()> {
            self.calls
                .borrow_mut()
                .push(Call::Pull(language.to_string(), minimum_perc));
            if self.failing_pulls.iter().any(|l| l == language) {
                bail!("tx pull failed for {}", language);
            }
            Ok(())
        }

        fn strip_locations(&self, catalog: &Path) -> Result<()> {
            self.calls
                .borrow_mut()
                .push(Call::Strip(catalog.to_path_buf()));
            Ok(())
        }

        fn catalog_statistics(&self, catalog: &Path) -> Result<String> {
            self.calls
                .borrow_mut()
                .push(Call::Statistics(catalog.to_path_buf()));
            Ok(self.statistics.get(catalog).cloned().unwrap_or_default())
        }

        fn current_branch(&self) -> Result<String> {
            self.calls.borrow_mut().push(Call::Branch);
            Ok(self.branch.clone())
        }
    }
}
