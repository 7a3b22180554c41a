use std::str::FromStr;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use crate::errors::ConfigError;
use crate::initialization::General;

const LOG_PATTERN: &str = "{d(%Y-%m-%dT%H:%M:%S%.3f)} {l} {t} - {m}{n}";

/// Sets up log4rs with a console and/or a file appender
///
/// # Arguments
///
/// * 'general' - general configuration holding log settings
pub fn setup_logger(general: &General) -> Result<(), ConfigError> {
    let config = log_config(general)?;
    log4rs::init_config(config)?;

    Ok(())
}

/// Builds the log4rs configuration
///
/// # Arguments
///
/// * 'general' - general configuration holding log settings
fn log_config(general: &General) -> Result<LogConfig, ConfigError> {
    let level = LevelFilter::from_str(&general.log_level)?;

    let mut builder = LogConfig::builder();
    let mut root = Root::builder();

    if general.log_to_stdout {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build();
        builder = builder.appender(Appender::builder().build("stdout", Box::new(stdout)));
        root = root.appender("stdout");
    }

    if let Some(path) = &general.log_path {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build(path)?;
        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    Ok(builder.build(root.build(level))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn general(level: &str, log_path: Option<String>, log_to_stdout: bool) -> General {
        General { log_path, log_level: level.to_string(), log_to_stdout }
    }

    #[test]
    fn console_only() {
        let config = log_config(&general("debug", None, true)).unwrap();

        assert_eq!(config.appenders().len(), 1);
        assert_eq!(config.root().level(), LevelFilter::Debug);
    }

    #[test]
    fn console_and_file() {
        let path = std::env::temp_dir().join("weathersummary-logging-test.log");
        let config = log_config(&general("warn", Some(path.to_string_lossy().to_string()), true)).unwrap();

        assert_eq!(config.appenders().len(), 2);
        assert_eq!(config.root().appenders(), &["stdout".to_string(), "file".to_string()]);
    }

    #[test]
    fn unknown_level_fails() {
        assert!(log_config(&general("loud", None, true)).is_err());
    }
}
