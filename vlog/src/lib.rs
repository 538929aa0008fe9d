#![deny(unused_crate_dependencies)]

//! Logging setup shared by the relayer binaries.
//!
//! `trace!`, `debug!` and `info!` behave just like their `tracing`
//! counterparts. `warn!` and `error!` additionally attach the file, line
//! and column of the call site to the event.
//!
//! The format of the logs in `stdout` can be `plain` or `json` and is set by
//! the `RELAYER_LOG_FORMAT` env variable. Filtering follows `RUST_LOG`.
//!
//! Full documentation for the `tracing` crate here <https://docs.rs/tracing/>
//!
//! Errors can additionally be reported to sentry
//! <https://docs.sentry.io/platforms/rust/>

use std::{backtrace::Backtrace, borrow::Cow, str::FromStr};

use sentry::{types::Dsn, ClientInitGuard};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub use tracing as __tracing;
pub use tracing::{debug, info, trace};

/// Env variable selecting the log format.
pub const LOG_FORMAT_ENV: &str = "RELAYER_LOG_FORMAT";

/// Env variable holding the sentry DSN.
pub const SENTRY_URL_ENV: &str = "RELAYER_SENTRY_URL";

/// Env variable naming the network reported to sentry as the environment.
pub const NETWORK_ENV: &str = "RELAYER_CHAIN_NETWORK";

/// Output format of the logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human readable lines.
    #[default]
    Plain,
    /// One json object per line.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            other => Err(format!("{LOG_FORMAT_ENV} has an unexpected value {other}")),
        }
    }
}

fn get_sentry_url() -> Option<Dsn> {
    std::env::var(SENTRY_URL_ENV)
        .ok()
        .and_then(|url| Dsn::from_str(&url).ok())
}

/// Initialize logging with tracing and set up log format
///
/// If the sentry URL is provided via an environment variable, this function will also initialize sentry.
/// Returns a sentry client guard. The full description can be found in the official documentation:
/// <https://docs.sentry.io/platforms/rust/#configure>
#[must_use]
pub fn init() -> Option<ClientInitGuard> {
    let log_format = match std::env::var(LOG_FORMAT_ENV) {
        Ok(format) => format.parse().unwrap_or_else(|e: String| panic!("{e}")),
        Err(_) => LogFormat::default(),
    };

    match log_format {
        LogFormat::Plain => {
            tracing_subscriber::registry()
                .with(fmt::Layer::default())
                .with(tracing_subscriber::EnvFilter::from_default_env())
                .init();
        }
        LogFormat::Json => {
            let timer = tracing_subscriber::fmt::time::UtcTime::rfc_3339();
            // must be set before sentry hook for sentry to function
            install_pretty_panic_hook();

            tracing_subscriber::registry()
                .with(
                    fmt::Layer::default()
                        .with_file(true)
                        .with_line_number(true)
                        .with_timer(timer)
                        .json(),
                )
                .with(tracing_subscriber::EnvFilter::from_default_env())
                .init();
        }
    };

    get_sentry_url().map(|sentry_url| {
        let options = sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: std::env::var(NETWORK_ENV).ok().map(Cow::from),
            attach_stacktrace: true,
            ..Default::default()
        };

        sentry::init((sentry_url, options))
    })
}

/// Format panics like tracing::error
fn install_pretty_panic_hook() {
    // The previous hook is not chained, otherwise every panic is logged twice.
    std::panic::set_hook(Box::new(move |panic_info| {
        let backtrace = Backtrace::capture();
        let timestamp = chrono::Utc::now();
        let panic_message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.as_str()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s
        } else {
            "Panic occurred without additional info"
        };

        let panic_location = panic_info
            .location()
            .map(|val| val.to_string())
            .unwrap_or_else(|| "Unknown location".to_owned());

        println!(
            "{}",
            serde_json::json!({
                "timestamp": timestamp.format("%Y-%m-%dT%H:%M:%S%.fZ").to_string(),
                "level": "CRITICAL",
                "fields": {
                    "message": panic_message,
                    "location": panic_location,
                    "backtrace": backtrace.to_string(),
                }
            })
        );
    }));
}

/// Like [`tracing::warn`] but with the location of the call site.
#[macro_export]
macro_rules! warn {
    ($($args:tt)*) => {
        $crate::__tracing::warn!(
            file = file!(),
            line = line!(),
            column = column!(),
            $($args)*
        )
    };
}

/// Like [`tracing::error`] but with the location of the call site.
#[macro_export]
macro_rules! error {
    ($($args:tt)*) => {
        $crate::__tracing::error!(
            file = file!(),
            line = line!(),
            column = column!(),
            $($args)*
        )
    };
}
