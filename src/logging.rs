//! Log-level parsing and logger setup.

use anyhow::bail;
use log::LevelFilter;
use std::io::Write;

/// Parse a `--loglevel` value. Case-insensitive; `WARNING` is accepted as an
/// alias for `WARN`.
pub fn parse_level(s: &str) -> anyhow::Result<LevelFilter> {
    let level = match s.to_ascii_uppercase().as_str() {
        "OFF" => LevelFilter::Off,
        "ERROR" => LevelFilter::Error,
        "WARN" | "WARNING" => LevelFilter::Warn,
        "INFO" => LevelFilter::Info,
        "DEBUG" => LevelFilter::Debug,
        "TRACE" => LevelFilter::Trace,
        _ => bail!("invalid log level: {}", s),
    };
    Ok(level)
}

/// Install the global logger on stderr, leaving stdout to the document.
pub fn init(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {} {} - {}",
                record.level(),
                buf.timestamp(),
                record.target(),
                record.args()
            )
        })
        .init();
    log::debug!("logger initialized with level {}", level);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_known_levels_case_insensitively() {
        assert_eq!(parse_level("INFO").unwrap(), LevelFilter::Info);
        assert_eq!(parse_level("debug").unwrap(), LevelFilter::Debug);
        assert_eq!(parse_level("Warning").unwrap(), LevelFilter::Warn);
        assert_eq!(parse_level("off").unwrap(), LevelFilter::Off);
    }

    #[test]
    fn rejects_unknown_level() {
        let err = parse_level("LOUD").unwrap_err();
        assert_eq!(err.to_string(), "invalid log level: LOUD");
    }
}
