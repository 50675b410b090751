use anyhow::{Context, Result};
use chrono::Local;
use std::{
    fs::File,
    io::{self, IsTerminal},
    path::PathBuf,
    sync::Mutex,
};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

/// Filter used when no flag, `RUST_LOG` or config value is given.
pub const DEFAULT_LEVEL: &str = "warn";

// --- Formatter ---

/// `<local timestamp> <LEVEL> <file:line> <fields>`, coloured when the
/// writer supports ANSI.
struct LocalFmt;

impl<S, N> FormatEvent<S, N> for LocalFmt
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();

        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.6f%:z");
        if ansi {
            write!(writer, "\x1b[2m{timestamp}\x1b[0m ")?;
        } else {
            write!(writer, "{timestamp} ")?;
        }

        let colour = match *meta.level() {
            Level::ERROR => "\x1b[1;31m",
            Level::WARN => "\x1b[1;33m",
            Level::INFO => "\x1b[1;32m",
            Level::DEBUG => "\x1b[1;34m",
            Level::TRACE => "\x1b[1;35m",
        };
        if ansi {
            write!(writer, "{colour}{:>5}\x1b[0m ", meta.level())?;
        } else {
            write!(writer, "{:>5} ", meta.level())?;
        }

        let file = meta.file().map(|f| {
            f.strip_prefix("src/")
                .or_else(|| f.strip_prefix("src\\"))
                .unwrap_or(f)
        });
        if let (Some(file), Some(line)) = (file, meta.line()) {
            if ansi {
                write!(writer, "\x1b[36m{file}:{line}\x1b[0m ")?;
            } else {
                write!(writer, "{file}:{line} ")?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// --- Settings ---

/// Where log output goes and how verbose it is.
///
/// Precedence for the filter: `level` (the `--log-level` flag), then
/// `RUST_LOG`, then `config_level`, then [`DEFAULT_LEVEL`].
#[derive(Debug, Clone, Default)]
pub struct LogSettings {
    pub level: Option<String>,
    pub config_level: Option<String>,
    pub file: Option<PathBuf>,
}

impl LogSettings {
    /// Builds the filter these settings select. Accepts a bare level
    /// ("error", "warn", "info", "debug", "trace") or any full EnvFilter
    /// directive.
    pub fn filter(&self) -> Result<EnvFilter> {
        if let Some(level) = &self.level {
            return parse_filter(level);
        }
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
        parse_filter(self.config_level.as_deref().unwrap_or(DEFAULT_LEVEL))
    }
}

fn parse_filter(directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directive).with_context(|| format!("invalid log level '{directive}'"))
}

// --- Public API ---

/// Initializes logging. Call once at startup.
///
/// - Stderr: colored when attached to a terminal, plain when piped. Stdout
///   is left to reports.
/// - File: appended to when `settings.file` is set. Never coloured.
pub fn init(settings: &LogSettings) -> Result<()> {
    let filter = settings.filter()?;

    let stderr_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalFmt)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr);

    let file_layer = match &settings.file {
        Some(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file '{}'", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .event_format(LocalFmt)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("logging already initialized")
}
