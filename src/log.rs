// RustPixel Range
// copyright zipxing@hotmail.com 2022～2025

//! Log module, a thin wrapper over log4rs, reference
//! https://docs.rs/log4rs
//!
//! Widgets only use the `log` macros; call `init_log` once at startup to
//! route them to a file.

use log::LevelFilter;

#[cfg(feature = "log4rs")]
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

/// init logs system, writing records at `level` and above to `file_path`
#[cfg(feature = "log4rs")]
pub fn init_log(level: LevelFilter, file_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}",
        )))
        .build(file_path)?;
    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

/// Without log4rs only the max level is set; records go to whatever logger
/// the host installed.
#[cfg(not(feature = "log4rs"))]
pub fn init_log(level: LevelFilter, _file_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    log::set_max_level(level);
    Ok(())
}
