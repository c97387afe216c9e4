use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

/// Turn a relative `sqlite:` path into an absolute `sqlite://` URL.
pub fn normalize_sqlite_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed == "sqlite::memory:" || trimmed.starts_with("sqlite://") {
        return trimmed.to_string();
    }

    let path_str = trimmed.strip_prefix("sqlite:").unwrap_or(trimmed);
    let path = Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

/// Make sure the database file and its directory exist before connecting.
pub fn prepare_sqlite_file(db_url: &str) -> Result<()> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let Some(path) = db_url.strip_prefix("sqlite://") else {
        bail!("invalid --db value: {db_url}");
    };
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        bail!("invalid --db value: {db_url}");
    }

    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)
            .with_context(|| format!("creating {}", path.display()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_memory_and_absolute_urls() {
        assert_eq!(normalize_sqlite_url("sqlite::memory:"), "sqlite::memory:");
        assert_eq!(
            normalize_sqlite_url("sqlite:///tmp/p.sqlite3"),
            "sqlite:///tmp/p.sqlite3"
        );
    }

    #[test]
    fn absolutizes_relative_paths() {
        let url = normalize_sqlite_url("sqlite:data/p.sqlite3");
        assert!(url.starts_with("sqlite:///"));
        assert!(url.ends_with("data/p.sqlite3"));
    }

    #[test]
    fn rejects_non_sqlite_urls() {
        assert!(prepare_sqlite_file("postgres://x").is_err());
        assert!(prepare_sqlite_file("sqlite://").is_err());
        assert!(prepare_sqlite_file("sqlite::memory:").is_ok());
    }
}
