use anyhow::{Context, Result};
use skinscan_comparison::Watchlist;
use std::path::Path;

/// Reads a watchlist file with one market hash name per line.
///
/// Lines are trimmed; blank lines and duplicates are skipped.
///
/// # Errors
/// Returns error if the file cannot be read
pub fn read_watchlist(path: impl AsRef<Path>) -> Result<Watchlist> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read watchlist file: {}", path.display()))?;

    let mut watchlist = Watchlist::new();
    let added = watchlist.add_many(content.lines());
    tracing::debug!(path = %path.display(), items = added, "Loaded watchlist");

    Ok(watchlist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_watchlist() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "AK-47 | Redline (Field-Tested)").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "   StatTrak™ AWP | Asiimov (Battle-Scarred)  ").unwrap();
        writeln!(file, "AK-47 | Redline (Field-Tested)").unwrap();

        let watchlist = read_watchlist(file.path()).unwrap();
        assert_eq!(
            watchlist.iter().collect::<Vec<_>>(),
            vec![
                "AK-47 | Redline (Field-Tested)",
                "StatTrak™ AWP | Asiimov (Battle-Scarred)",
            ]
        );
    }

    #[test]
    fn test_read_watchlist_crlf() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "a\r\nb\r\n").unwrap();

        let watchlist = read_watchlist(file.path()).unwrap();
        assert_eq!(watchlist.iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_read_watchlist_missing_file() {
        let err = read_watchlist("/nonexistent/watchlist.txt").unwrap_err();
        assert!(err.to_string().contains("Failed to read watchlist file"));
    }
}
