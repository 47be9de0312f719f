use std::fmt;

/// Message counts reported for a single catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CatalogStats {
    /// Messages with a final translation.
    pub translated: u64,
    /// Messages without any translation.
    pub untranslated: u64,
    /// Messages flagged as approximate matches.
    pub fuzzy: u64,
}

impl CatalogStats {
    pub fn new(translated: u64, untranslated: u64, fuzzy: u64) -> Self {
        Self {
            translated,
            untranslated,
            fuzzy,
        }
    }

    /// Returns the total number of messages.
    ///
    /// Summed as `u128`, which three `u64` counts cannot overflow.
    pub fn total(&self) -> u128 {
        u128::from(self.translated) + u128::from(self.untranslated) + u128::from(self.fuzzy)
    }

    /// Share of translated messages, rounded down.
    ///
    /// Returns `None` when the catalog has no messages at all.
    pub fn percentage(&self) -> Option<u8> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        // translated <= total, so the quotient never exceeds 100
        Some((u128::from(self.translated) * 100 / total) as u8)
    }
}

/// Completeness of one `(language, resource)` catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completeness {
    /// The catalog file does not exist locally.
    Missing,
    /// The catalog was measured.
    Measured {
        /// Raw counts.
        stats: CatalogStats,
        /// Translated share, rounded down.
        percent: u8,
    },
}

impl Completeness {
    pub fn percent(&self) -> u8 {
        match self {
            Completeness::Missing => 0,
            Completeness::Measured { percent, .. } => *percent,
        }
    }
}

/// Completeness of a resource in a given language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletenessEntry {
    pub language: String,
    pub resource: String,
    pub completeness: Completeness,
}

impl CompletenessEntry {
    /// Whether this entry should be hidden from crawlers.
    pub fn is_below(&self, threshold: u8) -> bool {
        self.completeness.percent() < threshold
    }
}

/// A `robots.txt` body addressing every crawler.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExclusionList {
    disallowed: Vec<String>,
}

impl ExclusionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a `Disallow:` directive for `path`.
    pub fn disallow(&mut self, path: impl Into<String>) {
        self.disallowed.push(path.into());
    }

    pub fn disallowed(&self) -> &[String] {
        &self.disallowed
    }
}

impl fmt::Display for ExclusionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("User-agent: *")?;
        for path in &self.disallowed {
            write!(f, "\nDisallow: {}", path)?;
        }
        Ok(())
    }
}

/// Outcome of a fetch run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FetchSummary {
    /// Languages whose catalog directory was processed.
    pub languages: usize,
    /// Languages skipped because nothing was pulled for them.
    pub skipped_languages: Vec<String>,
    /// Catalog files that were normalized.
    pub catalogs: usize,
}
