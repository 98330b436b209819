//! Logging setup.
//!
//! Installs a `tracing-subscriber` fmt subscriber filtered by an `EnvFilter`
//! directive. On wasm32 each formatted event is forwarded to the browser
//! console method matching its level.

use std::sync::OnceLock;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

use crate::error::{Error, Result};

/// Filter of the subscriber installed by [`init`].
static FILTER: OnceLock<reload::Handle<EnvFilter, Registry>> = OnceLock::new();

/// Install the global subscriber, or swap its filter if already installed.
///
/// If some other subscriber was installed first, it is left alone and the
/// level is ignored.
pub fn init(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level).map_err(|e| Error::ConfigValidation {
        field: "logging.level".to_string(),
        message: format!("Invalid filter '{}': {}", level, e),
    })?;

    if let Some(handle) = FILTER.get() {
        return handle
            .reload(filter)
            .map_err(|e| Error::Config(format!("Failed to change log level: {}", e)));
    }

    let (filter_layer, handle) = reload::Layer::new(filter);

    #[cfg(target_arch = "wasm32")]
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .with_writer(console::ConsoleMakeWriter);

    #[cfg(not(target_arch = "wasm32"))]
    let fmt_layer = fmt::layer().with_target(false);

    match tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
    {
        Ok(()) => {
            let _ = FILTER.set(handle);
        }
        Err(_) => tracing::debug!("Another subscriber is installed, keeping it"),
    }

    Ok(())
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;

    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;

    /// Hands out one [`ConsoleWriter`] per event.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct ConsoleMakeWriter;

    /// Buffers one formatted event and emits it to the console on drop.
    pub struct ConsoleWriter {
        level: Level,
        buf: Vec<u8>,
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
            let text = String::from_utf8_lossy(&self.buf);
            let line = text.trim_end();
            if line.is_empty() {
                return;
            }
            let message = JsValue::from_str(line);
            match self.level {
                Level::ERROR => web_sys::console::error_1(&message),
                Level::WARN => web_sys::console::warn_1(&message),
                Level::INFO => web_sys::console::info_1(&message),
                _ => web_sys::console::debug_1(&message),
            }
        }
    }

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter {
                level: Level::INFO,
                buf: Vec::new(),
            }
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleWriter {
                level: *meta.level(),
                buf: Vec::new(),
            }
        }
    }
}
