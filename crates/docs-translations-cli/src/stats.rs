//! Parsing of `msgfmt --statistics` diagnostics.
//!
//! With `LANG=C` msgfmt reports one line such as
//! `117 translated messages, 5 fuzzy translations, 3 untranslated messages.`
//! Any of the three parts is left out when its count is zero.

use crate::core::CatalogStats;
use regex::Regex;
use std::sync::LazyLock;

static COUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+) (untranslated|translated|fuzzy)").expect("statistics pattern is valid")
});

/// Extract translated, untranslated and fuzzy counts from statistics output.
///
/// Only the first occurrence of each count is used. Absent counts are zero.
pub fn parse_statistics(output: &str) -> CatalogStats {
    let mut translated = None;
    let mut untranslated = None;
    let mut fuzzy = None;

    for caps in COUNT_RE.captures_iter(output) {
        let slot = match &caps[2] {
            "translated" => &mut translated,
            "untranslated" => &mut untranslated,
            _ => &mut fuzzy,
        };
        if slot.is_none() {
            *slot = caps[1].parse::<u64>().ok();
        }
    }

    CatalogStats::new(
        translated.unwrap_or(0),
        untranslated.unwrap_or(0),
        fuzzy.unwrap_or(0),
    )
}
