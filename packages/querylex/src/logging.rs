use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

static STDERR_APPENDER: &str = "stderr";

fn get_level(verbose: bool) -> LevelFilter {
    // i_debug! logs at debug level
    if verbose { LevelFilter::Debug } else { LevelFilter::Info }
}

fn build_config(verbose: bool) -> anyhow::Result<Config> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l})} {t} - {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build(STDERR_APPENDER, Box::new(stderr)))
        .build(Root::builder().appender(STDERR_APPENDER).build(get_level(verbose)))?;

    Ok(config)
}

/// Logs to stderr, keeping stdout free for the corrected queries.
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    log4rs::init_config(build_config(verbose)?)?;

    Ok(())
}
