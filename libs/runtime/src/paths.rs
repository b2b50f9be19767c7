use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};

/// Expand a leading `~` using the platform home directory.
pub fn expand_tilde(raw: &str) -> Result<PathBuf> {
    if raw == "~" {
        return dirs::home_dir().ok_or_else(|| anyhow!("home directory is not available"));
    }
    if let Some(rest) = raw.strip_prefix("~/").or_else(|| raw.strip_prefix("~\\")) {
        let home = dirs::home_dir().ok_or_else(|| anyhow!("home directory is not available"))?;
        return Ok(home.join(rest));
    }
    Ok(PathBuf::from(raw))
}

/// Resolve the application home directory.
///
/// `None` falls back to `<platform home>/<default_subdir>`. Relative paths are
/// made absolute against the current working directory. With `create` set the
/// directory is created when missing.
pub fn resolve_home_dir(
    configured: Option<String>,
    default_subdir: &str,
    create: bool,
) -> Result<PathBuf> {
    let path = match configured {
        Some(raw) => expand_tilde(raw.trim())?,
        None => dirs::home_dir()
            .ok_or_else(|| anyhow!("home directory is not available"))?
            .join(default_subdir),
    };

    let path = if path.is_absolute() {
        path
    } else {
        std::env::current_dir()
            .context("cannot read current directory")?
            .join(path)
    };

    if create {
        std::fs::create_dir_all(&path)
            .with_context(|| format!("cannot create home dir {}", path.display()))?;
    }
    Ok(path)
}

/// Resolve `file` against `base_dir` unless it is already absolute.
pub fn resolve_under(file: &str, base_dir: &Path) -> PathBuf {
    let p = Path::new(file);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        base_dir.join(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn explicit_dir_is_created() {
        let tmp = tempdir().unwrap();
        let target = tmp.path().join("nested/home");
        let resolved =
            resolve_home_dir(Some(target.to_string_lossy().to_string()), ".notes", true).unwrap();
        assert_eq!(resolved, target);
        assert!(target.exists());
    }

    #[test]
    fn tilde_is_expanded() {
        let expanded = expand_tilde("~/.notes_test").unwrap();
        assert!(expanded.is_absolute());
        assert!(expanded.ends_with(".notes_test"));
    }

    #[test]
    fn absolute_paths_are_kept() {
        let tmp = tempdir().unwrap();
        let abs = tmp.path().join("a.log");
        let resolved = resolve_under(abs.to_str().unwrap(), Path::new("/elsewhere"));
        assert_eq!(resolved, abs);
        let rel = resolve_under("logs/a.log", tmp.path());
        assert!(rel.starts_with(tmp.path()));
    }
}
