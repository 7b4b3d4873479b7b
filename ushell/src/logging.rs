use env_logger::{Builder, Target};
use log::LevelFilter;
use std::io::Write;

/// Send log records to stderr, keeping stdout for command output
pub fn init_logger(level: LevelFilter) {
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(Target::Stderr)
        .filter(Some("ushell"), level)
        .filter(None, LevelFilter::Warn)
        .init();

    log::debug!("log level set to {}", level);
}
