use crate::error::AppError;
use lazy_static::lazy_static;
use regex::Regex;
use shared::LogEntry;
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::Path;

lazy_static! {
    static ref LOG_LINE: Regex = Regex::new(r"^\[([^\]]*)\]\[([^\]]*)\]\[([^\]]*)\] (.*)$").unwrap();
}

/// Parses `[timestamp][level][service] message`. Lines in any other shape,
/// including continuation lines of multi-line messages, yield `None`.
pub fn parse_line(line: &str) -> Option<LogEntry> {
    let caps = LOG_LINE.captures(line)?;
    Some(LogEntry {
        timestamp: caps[1].to_string(),
        level: caps[2].to_string(),
        service: caps[3].to_string(),
        message: caps[4].to_string(),
    })
}

pub fn read_entries(path: &Path) -> Result<Vec<LogEntry>, AppError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    Ok(content.lines().filter_map(parse_line).collect())
}

/// Truncates the log file, creating it if needed.
pub fn clear(path: &Path) -> Result<(), AppError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_well_formed_line() {
        let entry = parse_line("[2024-05-01 10:00:00][INFO][backend] Starting server on 0.0.0.0:8081").unwrap();
        assert_eq!(entry.timestamp, "2024-05-01 10:00:00");
        assert_eq!(entry.level, "INFO");
        assert_eq!(entry.service, "backend");
        assert_eq!(entry.message, "Starting server on 0.0.0.0:8081");
    }

    #[test]
    fn brackets_in_the_message_stay_in_the_message() {
        let entry = parse_line("[2024-05-01 10:00:00][INFO][backend] got [a][b] x").unwrap();
        assert_eq!(entry.level, "INFO");
        assert_eq!(entry.service, "backend");
        assert_eq!(entry.message, "got [a][b] x");
    }

    #[test]
    fn rejects_lines_without_the_bracket_prefix() {
        assert!(parse_line("").is_none());
        assert!(parse_line("    at some continuation line").is_none());
        assert!(parse_line("[2024-05-01][INFO] missing service").is_none());
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let entries = read_entries(&dir.path().join("webapp.log")).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn reads_entries_and_skips_unparseable_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("webapp.log");
        fs::write(
            &path,
            "[2024-05-01 10:00:00][INFO][backend] first\n\
             continuation of first\n\
             [2024-05-01 10:00:01][ERROR][backend::routes] second\n",
        )
        .unwrap();

        let entries = read_entries(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "first");
        assert_eq!(entries[1].level, "ERROR");
        assert_eq!(entries[1].service, "backend::routes");
    }

    #[test]
    fn clear_truncates_and_creates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("webapp.log");

        clear(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");

        fs::write(&path, "[a][INFO][b] c\n").unwrap();
        clear(&path).unwrap();
        assert!(read_entries(&path).unwrap().is_empty());
    }
}
