use anyhow::{Context as _, Result};
use docs_translations_toml::CATALOG_EXTENSION;
use std::path::{Path, PathBuf};

/// Turn a locale name (`pt_BR`) into the language form used in URLs (`pt-br`).
pub fn to_language(locale: &str) -> String {
    match locale.split_once('_') {
        Some((language, region)) => {
            format!("{}-{}", language.to_lowercase(), region.to_lowercase())
        },
        None => locale.to_lowercase(),
    }
}

/// Whether `path` names a message catalog.
pub fn is_catalog(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == CATALOG_EXTENSION)
}

/// List catalog files directly inside `dir`, sorted by path.
///
/// Symlinks are followed, so a link to a catalog counts as a catalog.
pub fn list_catalogs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut catalogs = Vec::new();

    for entry in fs_err::read_dir(dir).context("Failed to read catalog directory")? {
        let path = entry?.path();
        if path.is_file() && is_catalog(&path) {
            catalogs.push(path);
        }
    }

    catalogs.sort();
    Ok(catalogs)
}

/// Resource name a catalog file belongs to (its file stem).
pub fn resource_of(catalog: &Path) -> Option<&str> {
    catalog.file_stem().and_then(|stem| stem.to_str())
}
