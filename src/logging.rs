use log::LevelFilter;
use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        file::FileAppender,
    },
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};
use std::io;

/// Configures the stderr appender at `stderr_level` plus a debug-level
/// file appender. A log file that cannot be opened downgrades to
/// stderr-only logging rather than aborting startup.
pub fn setup_logging(stderr_level: LevelFilter, file_path: &str) -> Result<(), io::Error> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(
            "[{d(%Y-%m-%d %H:%M:%S)} {h({l})}] {m}\n",
        )))
        .build();

    let mut config_builder = Config::builder().appender(
        Appender::builder()
            .filter(Box::new(ThresholdFilter::new(stderr_level)))
            .build("stderr", Box::new(stderr)),
    );
    let mut root_builder = Root::builder().appender("stderr");

    match FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "[{d(%Y-%m-%d %H:%M:%S)} {l}] {m}\n",
        )))
        .append(false)
        .build(file_path)
    {
        Ok(logfile) => {
            config_builder = config_builder
                .appender(Appender::builder().build("logfile", Box::new(logfile)));
            root_builder = root_builder.appender("logfile");
        }
        Err(e) => {
            eprintln!("warning: could not open log file {}: {}", file_path, e);
        }
    }

    let log_config = config_builder
        .build(root_builder.build(LevelFilter::Debug))
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    log4rs::init_config(log_config).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    Ok(())
}
