//!
//! Setup logging subsystem.
//!

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter, fmt,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter, Layer,
};

use super::{config, Level};

/// Keeps the non-blocking log writers alive; logs are flushed when it is dropped.
#[derive(Debug)]
pub struct TelemetryGuard {
    _log_guards: Vec<WorkerGuard>,
}

///
/// Setup logging sub-system specifying.
/// Expects config and list of names of crates to watch.
///
/// Crates in `crates_to_watch` log to the console at the configured level, every other crate
/// only at `WARN` and above. `RUST_LOG` narrows the output further unless the config carries a
/// filtering directive of its own.
///
pub fn setup<Str: AsRef<str>>(
    conf: &config::Log,
    service_name: &str,
    crates_to_watch: impl IntoIterator<Item = Str>,
) -> Result<TelemetryGuard, TryInitError> {
    let mut guards = Vec::new();

    let env_filter_builder =
        EnvFilter::builder().with_default_directive(filter::LevelFilter::TRACE.into());
    let env_filter = match conf.console.filtering_directive.as_deref() {
        Some(directive) => env_filter_builder.parse_lossy(directive),
        None => env_filter_builder.from_env_lossy(),
    };

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if conf.console.enabled {
        let (console_writer, guard) = tracing_appender::non_blocking(std::io::stdout());
        guards.push(guard);

        let level = conf.console.level.into_level();
        let mut console_filter = filter::Targets::new().with_default(Level::WARN);
        for acrate in crates_to_watch {
            console_filter = console_filter.with_target(acrate.as_ref(), level);
        }

        match conf.console.log_format {
            config::LogFormat::Default => {
                let logging_layer = fmt::layer()
                    .with_timer(fmt::time::time())
                    .with_span_events(fmt::format::FmtSpan::ACTIVE)
                    .pretty()
                    .with_writer(console_writer);

                subscriber
                    .with(logging_layer.with_filter(console_filter))
                    .try_init()?;
            }
            config::LogFormat::Json => {
                let logging_layer = fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_writer(console_writer);

                subscriber
                    .with(logging_layer.with_filter(console_filter))
                    .try_init()?;
            }
        }
    } else {
        subscriber.try_init()?;
    }

    tracing::info!(service = service_name, "logger initialised");

    // Returning the WorkerGuard for logs to be printed until it is dropped
    Ok(TelemetryGuard {
        _log_guards: guards,
    })
}
