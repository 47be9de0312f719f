//! Documentation version labels derived from the current branch.

use crate::core::UnparseableBranchError;

/// Version label used for documentation built from a trunk branch.
pub const DEV_VERSION: &str = "dev";

/// Map a branch name to the documentation version it publishes.
///
/// Trunk branches publish `dev`. Release branches such as `stable/1.10.x`
/// publish their release line (`1.10`).
pub fn resolve_version(
    branch: &str,
    trunk_branches: &[String],
) -> Result<String, UnparseableBranchError> {
    let branch = branch.trim();

    if trunk_branches.iter().any(|trunk| trunk == branch) {
        return Ok(DEV_VERSION.to_string());
    }

    let line = branch.strip_suffix(".x").unwrap_or(branch);
    let mut parts = line.split('/');

    match (parts.next(), parts.next(), parts.next()) {
        (Some(prefix), Some(version), None) if !prefix.is_empty() && !version.is_empty() => {
            Ok(version.to_string())
        },
        _ => Err(UnparseableBranchError {
            branch: branch.to_string(),
            trunk: trunk_branches.join(", "),
        }),
    }
}
