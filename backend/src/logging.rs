use log::{Level, LevelFilter};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Targets that are too chatty at `info`.
const QUIET_TARGETS: &[&str] = &["actix_server", "actix_web::middleware::logger"];

/// Formats one log line the way `log_reader::parse_line` reads it back.
pub fn format_record(timestamp: &str, level: Level, target: &str, message: &str) -> String {
    format!("[{}][{}][{}] {}", timestamp, level, target, message)
}

/// Installs the global logger, appending to `log_file`. `RUST_LOG` still
/// overrides the default `info` level.
pub fn init(log_file: &Path) -> std::io::Result<()> {
    if let Some(dir) = log_file.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(log_file)?;

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::new().default_filter_or("info"));
    for target in QUIET_TARGETS {
        builder.filter_module(target, LevelFilter::Warn);
    }
    builder
        .format(|buf, record| {
            let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
            writeln!(
                buf,
                "{}",
                format_record(
                    &timestamp,
                    record.level(),
                    record.target(),
                    &record.args().to_string()
                )
            )
        })
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(|e| std::io::Error::other(e.to_string()))
}
