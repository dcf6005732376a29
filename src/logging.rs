//! Routes `tracing` events to the browser console.

use std::io;
use std::sync::OnceLock;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;
use wasm_bindgen::JsValue;

use crate::core::config::DEFAULT_LOG_FILTER;

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Installs the global subscriber. Later calls are ignored; never panics.
///
/// An unparsable `filter` falls back to `info`.
pub fn init_logging(filter: &str) {
    if INITIALIZED.get().is_some() {
        return;
    }

    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|e| {
        web_sys::console::warn_1(
            &format!("Invalid log filter `{}` ({}), using `{}`", filter, e, DEFAULT_LOG_FILTER)
                .into(),
        );
        EnvFilter::new(DEFAULT_LOG_FILTER)
    });

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .without_time()
        .with_writer(ConsoleMakeWriter)
        .try_init();

    match installed {
        Ok(()) => {
            let _ = INITIALIZED.set(());
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to install logger: {}", e).into());
        }
    }
}

struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and emits it on drop.
struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }

        let line = String::from_utf8_lossy(&self.buf);
        let msg = JsValue::from_str(line.trim_end());
        match self.level {
            Level::ERROR => web_sys::console::error_1(&msg),
            Level::WARN => web_sys::console::warn_1(&msg),
            Level::INFO => web_sys::console::log_1(&msg),
            _ => web_sys::console::debug_1(&msg),
        }
    }
}
