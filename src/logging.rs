#![cfg(feature = "std")]
//! Stderr logger for the `stratego` binary.
//!
//! `STRATEGO_LOG` takes a comma-separated list of directives: a bare level
//! sets the default, `target=level` overrides it for targets starting with
//! `target`. For example `warn,stratego::combat=debug`.

use std::boxed::Box;
use std::env;
use std::string::String;
use std::vec::Vec;

use log::{LevelFilter, Log, Metadata, Record};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Directives {
    default: LevelFilter,
    targets: Vec<(String, LevelFilter)>,
}

impl Directives {
    fn parse(directives: &str) -> Self {
        let mut out = Directives {
            default: LevelFilter::Info,
            targets: Vec::new(),
        };
        for part in directives.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            match part.split_once('=') {
                Some((target, level)) => {
                    if let Ok(level) = level.trim().parse() {
                        out.targets.push((target.trim().into(), level));
                    }
                }
                None => {
                    if let Ok(level) = part.parse() {
                        out.default = level;
                    }
                }
            }
        }
        // longest prefix wins
        out.targets.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        out
    }

    fn level_for(&self, target: &str) -> LevelFilter {
        self.targets
            .iter()
            .find(|(prefix, _)| target.starts_with(prefix.as_str()))
            .map_or(self.default, |&(_, level)| level)
    }

    fn max_level(&self) -> LevelFilter {
        self.targets
            .iter()
            .map(|&(_, level)| level)
            .fold(self.default, Ord::max)
    }
}

struct StderrLogger {
    directives: Directives,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.directives.level_for(metadata.target())
    }

    // stdout carries command output such as the sim report
    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let area = record
                .target()
                .rsplit("::")
                .next()
                .unwrap_or(record.target());
            eprintln!("[{:<5} {}] {}", record.level(), area, record.args());
        }
    }

    fn flush(&self) {}
}

/// Install the stderr logger, configured from `STRATEGO_LOG` (default
/// `info`). Calling it again is a no-op.
pub fn init_logging() {
    let directives = Directives::parse(&env::var("STRATEGO_LOG").unwrap_or_default());
    let max = directives.max_level();
    if log::set_boxed_logger(Box::new(StderrLogger { directives })).is_ok() {
        log::set_max_level(max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_default_and_targets() {
        let d = Directives::parse("warn, stratego::combat=debug,stratego=info,bogus=loud");
        assert_eq!(d.default, LevelFilter::Warn);
        assert_eq!(d.level_for("stratego::combat"), LevelFilter::Debug);
        assert_eq!(d.level_for("stratego::game"), LevelFilter::Info);
        assert_eq!(d.level_for("other"), LevelFilter::Warn);
        assert_eq!(d.max_level(), LevelFilter::Debug);
    }

    #[test]
    fn empty_means_info() {
        let d = Directives::parse("");
        assert_eq!(d.default, LevelFilter::Info);
        assert!(d.targets.is_empty());
    }
}
