//! Fatal error reporting.
//!
//! [`die`] writes a message to the process' error sink and exits with
//! [`EXIT_FAILURE`]. The sink is chosen once per process with
//! [`install_sink`]; without one, the platform default is used.

use std::{fmt::Display, process, sync::OnceLock};

pub mod sink;
#[cfg(windows)]
mod dialog;

#[cfg(windows)]
pub use dialog::DialogSink;
pub use sink::{ConsoleSink, ErrorSink, LogSink, SinkKind};

pub const EXIT_FAILURE: i32 = 1;

static SINK: OnceLock<(SinkKind, Box<dyn ErrorSink + Send + Sync>)> = OnceLock::new();

/// Sets the process-wide sink. Only the first call takes effect.
pub fn install_sink(kind: SinkKind) -> bool {
    let installed = SINK.set((kind, kind.into_sink())).is_ok();
    if installed {
        log::debug!("Installed {} error sink", kind);
    } else {
        log::warn!("Error sink already installed, ignoring {}", kind);
    }
    installed
}

pub fn installed_sink() -> Option<SinkKind> {
    SINK.get().map(|(kind, _)| *kind)
}

pub fn die(message: &str) -> ! {
    match SINK.get() {
        Some((_, sink)) => die_with(&**sink, message),
        None => die_with(&*SinkKind::platform_default().into_sink(), message),
    }
}

pub fn die_with(sink: &dyn ErrorSink, message: &str) -> ! {
    sink.report(message);
    process::exit(EXIT_FAILURE)
}

/// `die` with `format!` arguments.
#[macro_export]
macro_rules! die {
    ($($arg:tt)*) => {
        $crate::fatal::die(&::std::format!($($arg)*))
    };
}

pub trait OrDie<T> {
    /// Unwraps the value, or dies with `context` (and the error, if any).
    fn or_die(self, context: &str) -> T;
}

impl<T, E: Display> OrDie<T> for Result<T, E> {
    fn or_die(self, context: &str) -> T {
        match self {
            Ok(value) => value,
            Err(err) => die(&format!("{}: {}", context, err)),
        }
    }
}

impl<T> OrDie<T> for Option<T> {
    fn or_die(self, context: &str) -> T {
        match self {
            Some(value) => value,
            None => die(context),
        }
    }
}
