//! Where preferences live on disk.

use std::path::{Path, PathBuf};

/// Overrides the data directory when set to a non-empty value.
pub const DATA_DIR_ENV: &str = "PORTFOLIO_DATA_DIR";
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Explicit path first, then [`DATA_DIR_ENV`], then the platform's local data
/// directory. `None` only when the platform has no local data directory.
pub fn resolve_data_root(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(value) = read_non_empty_env_var(DATA_DIR_ENV) {
        return Some(PathBuf::from(value));
    }
    dirs::data_local_dir().map(|base| base.join("portfolio"))
}

fn read_non_empty_env_var(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if value.trim().is_empty() => {
            tracing::debug!(var = name, "ignoring empty environment override");
            None
        }
        Ok(value) => Some(value),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_takes_precedence() {
        let root = resolve_data_root(Some(Path::new("/srv/portfolio")));
        assert_eq!(root, Some(PathBuf::from("/srv/portfolio")));
    }

    #[test]
    fn unset_variable_reads_as_none() {
        assert_eq!(read_non_empty_env_var("PORTFOLIO_TEST_UNSET_VARIABLE"), None);
    }
}
