//! Routes `tracing` events from the core crates to the browser console

use std::io;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

/// Where a finished log line goes
pub type Sink = fn(Level, &str);

/// Buffers one formatted event and hands it to the sink when dropped
pub struct LineWriter {
    level: Level,
    sink: Sink,
    buf: Vec<u8>,
}

impl io::Write for LineWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for LineWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if !line.is_empty() {
            (self.sink)(self.level, line);
        }
    }
}

/// `MakeWriter` that opens one [`LineWriter`] per event at the event's level
#[derive(Clone, Copy)]
pub struct ConsoleWriter {
    sink: Sink,
}

impl ConsoleWriter {
    pub fn new() -> Self {
        Self { sink: console_sink }
    }

    pub fn with_sink(sink: Sink) -> Self {
        Self { sink }
    }

    fn writer(&self, level: Level) -> LineWriter {
        LineWriter {
            level,
            sink: self.sink,
            buf: Vec::new(),
        }
    }
}

impl Default for ConsoleWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> MakeWriter<'a> for ConsoleWriter {
    type Writer = LineWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.writer(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        self.writer(*meta.level())
    }
}

fn console_sink(level: Level, line: &str) {
    let line = JsValue::from_str(line);
    if level == Level::ERROR {
        web_sys::console::error_1(&line);
    } else if level == Level::WARN {
        web_sys::console::warn_1(&line);
    } else if level == Level::INFO {
        web_sys::console::info_1(&line);
    } else {
        web_sys::console::debug_1(&line);
    }
}

/// Subscriber used in the browser: no timestamps, no ANSI colours
pub fn subscriber(writer: ConsoleWriter) -> impl tracing::Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .without_time()
        .finish()
}

/// Install the console subscriber once; later calls are no-ops
pub fn init() {
    let _ = tracing::subscriber::set_global_default(subscriber(ConsoleWriter::new()));
}
