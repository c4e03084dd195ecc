use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Keeps the background writer alive; drop it last in `main`.
pub struct LoggingGuard {
    _guard: WorkerGuard,
    log_dir: Option<PathBuf>,
}

impl LoggingGuard {
    /// `None` when the log directory was unusable and output went to stderr.
    pub fn log_dir(&self) -> Option<&Path> {
        self.log_dir.as_deref()
    }
}

pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "litesearch=debug"
    } else {
        "litesearch=info"
    }
}

/// Daily log file under the app log dir. Without a usable log dir, output goes
/// to stderr, where it interleaves with the CLI's own diagnostics.
pub fn init(verbose: bool) -> Option<LoggingGuard> {
    let (writer, guard, log_dir) = match litesearch::kernel::services::adapters::ensure_log_dir() {
        Ok(dir) => {
            let file_appender = tracing_appender::rolling::daily(&dir, "litesearch.log");
            let (writer, guard) = tracing_appender::non_blocking(file_appender);
            (writer, guard, Some(dir))
        }
        Err(error) => {
            eprintln!("litesearch: log dir unavailable ({error}), logging to stderr");
            let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
            (writer, guard, None)
        }
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true)
            .with_file(verbose)
            .with_line_number(verbose),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!(panic = %panic_info, "panic");
    }));

    match &log_dir {
        Some(dir) => tracing::debug!(log_dir = %dir.display(), "file logging ready"),
        None => tracing::debug!("stderr logging ready"),
    }

    Some(LoggingGuard {
        _guard: guard,
        log_dir,
    })
}
