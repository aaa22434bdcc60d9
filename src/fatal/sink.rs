use std::{
    fmt,
    io::{self, Write},
    str::FromStr,
};

#[cfg(windows)]
use super::dialog::DialogSink;

/// Channel a fatal message is written to before the process exits.
pub trait ErrorSink {
    fn report(&self, message: &str);
}

/// Writes the message and a newline to stderr.
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn write_to<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
        writeln!(out, "{}", message)?;
        out.flush()
    }
}

impl ErrorSink for ConsoleSink {
    fn report(&self, message: &str) {
        // nowhere left to report a failing stderr
        let _ = Self::write_to(&mut io::stderr().lock(), message);
    }
}

/// Emits the message as an error record through `log`.
pub struct LogSink;

impl ErrorSink for LogSink {
    fn report(&self, message: &str) {
        log::error!("{}", message);
        log::logger().flush();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    Console,
    Dialog,
    Log,
}

impl SinkKind {
    pub fn platform_default() -> SinkKind {
        if cfg!(windows) {
            SinkKind::Dialog
        } else {
            SinkKind::Console
        }
    }

    pub fn into_sink(self) -> Box<dyn ErrorSink + Send + Sync> {
        match self {
            SinkKind::Console => Box::new(ConsoleSink),
            SinkKind::Log => Box::new(LogSink),
            #[cfg(windows)]
            SinkKind::Dialog => Box::new(DialogSink),
            #[cfg(not(windows))]
            SinkKind::Dialog => {
                log::warn!("Dialog error sink is only available on Windows, using console");
                Box::new(ConsoleSink)
            }
        }
    }
}

impl FromStr for SinkKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "console" => Ok(SinkKind::Console),
            "dialog" => Ok(SinkKind::Dialog),
            "log" => Ok(SinkKind::Log),
            _ => Err(anyhow::anyhow!("Unknown error sink: {}", s)),
        }
    }
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SinkKind::Console => "console",
            SinkKind::Dialog => "dialog",
            SinkKind::Log => "log",
        };
        f.write_str(name)
    }
}
