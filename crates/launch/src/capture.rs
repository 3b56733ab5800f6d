//! Line capture for the child's stdout and stderr
//!
//! Each attached stream gets its own reader task. Readers push complete
//! lines into one unbounded channel; the collector is the single consumer and
//! only drains it after the child has exited and every reader has hit end of
//! stream. Lines from different streams appear in whatever order they
//! arrived.

use std::fmt;

use fightai_core::layout::LINE_ENDING;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

// ============================================================================
// Stream Source
// ============================================================================

/// Which child stream a reader is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamSource {
    Stdout,
    Stderr,
}

impl fmt::Display for StreamSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamSource::Stdout => f.write_str("stdout"),
            StreamSource::Stderr => f.write_str("stderr"),
        }
    }
}

// ============================================================================
// Captured Output
// ============================================================================

/// Lines captured from the child, in arrival order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    lines: Vec<String>,
}

impl CapturedOutput {
    /// Captured lines without their line endings
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of captured lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Log file content: every line terminated by the platform line ending
    pub fn to_log_text(&self) -> String {
        let capacity = self
            .lines
            .iter()
            .map(|line| line.len() + LINE_ENDING.len())
            .sum();
        let mut text = String::with_capacity(capacity);
        for line in &self.lines {
            text.push_str(line);
            text.push_str(LINE_ENDING);
        }
        text
    }
}

impl From<Vec<String>> for CapturedOutput {
    fn from(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

// ============================================================================
// Output Collector
// ============================================================================

/// Gathers lines from any number of attached streams
pub struct OutputCollector {
    tx: UnboundedSender<String>,
    rx: UnboundedReceiver<String>,
    readers: Vec<(StreamSource, JoinHandle<()>)>,
}

impl OutputCollector {
    /// Create a collector with no streams attached
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx,
            readers: Vec::new(),
        }
    }

    /// Start reading `stream` line by line on a background task
    pub fn attach<R>(&mut self, stream: R, source: StreamSource)
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        let tx = self.tx.clone();
        let handle = tokio::spawn(forward_lines(stream, source, tx));
        self.readers.push((source, handle));
    }

    /// Wait for every reader to reach end of stream and return the lines
    pub async fn finish(self) -> CapturedOutput {
        let Self { tx, mut rx, readers } = self;
        drop(tx);

        for (source, handle) in readers {
            if let Err(e) = handle.await {
                tracing::warn!(stream = %source, error = %e, "output reader task failed");
            }
        }

        let mut lines = Vec::new();
        while let Some(line) = rx.recv().await {
            lines.push(line);
        }
        CapturedOutput { lines }
    }
}

impl Default for OutputCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// Read `stream` until end of stream, sending each line to `tx`
async fn forward_lines<R>(stream: R, source: StreamSource, tx: UnboundedSender<String>)
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(stream);
    let mut raw = Vec::new();

    loop {
        raw.clear();
        match reader.read_until(b'\n', &mut raw).await {
            Ok(0) => break,
            Ok(_) => {
                if tx.send(decode_line(&raw)).is_err() {
                    break;
                }
            }
            Err(e) => {
                tracing::warn!(stream = %source, error = %e, "stopped reading child output");
                break;
            }
        }
    }
}

/// Strip one trailing `\n` or `\r\n` and decode lossily
fn decode_line(raw: &[u8]) -> String {
    let line = raw.strip_suffix(b"\n").unwrap_or(raw);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line).into_owned()
}

// ============================================================================
// Tests
// ============================================================================
