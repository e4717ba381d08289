use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::{EnvFilter, fmt::MakeWriter};
use wasm_bindgen::JsValue;
use web_sys::console;

/// Buffers one formatted event and hands it to the browser console when dropped.
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let msg = String::from_utf8_lossy(&self.buf);
        let msg = JsValue::from_str(msg.trim_end());
        match self.level {
            Level::ERROR => console::error_1(&msg),
            Level::WARN => console::warn_1(&msg),
            Level::INFO => console::info_1(&msg),
            Level::DEBUG => console::debug_1(&msg),
            Level::TRACE => console::log_1(&msg),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
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

pub fn env_filter(filter: &str) -> EnvFilter {
    EnvFilter::try_new(filter).unwrap_or_else(|err| {
        console::warn_1(&JsValue::from_str(&format!(
            "invalid log filter {filter:?}: {err}, falling back to info"
        )));
        EnvFilter::new("info")
    })
}

pub fn simple_web_logger_init(filter: &str) {
    let result = tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .without_time()
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true),
        )
        .with_writer(MakeConsoleWriter)
        .with_env_filter(env_filter(filter))
        .try_init();

    if let Err(err) = result {
        console::warn_1(&JsValue::from_str(&format!("logger already set: {err}")));
    }
}
