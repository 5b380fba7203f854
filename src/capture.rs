//! Per-call capture of `tracing` output into memory.
//!
//! A [`LogCapture`] is installed as the default dispatcher of one future
//! only, so nothing global is touched and two runs never see each other's
//! records. The capture detaches when that future completes, fails, panics
//! or is dropped.

use std::future::Future;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tracing::instrument::WithSubscriber;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// Shared in-memory sink the formatter writes into.
#[derive(Clone, Default)]
pub struct LogBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

pub struct LogBufferWriter {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl LogBuffer {
    pub fn contents(&self) -> String {
        match self.inner.lock() {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(poisoned) => String::from_utf8_lossy(&poisoned.into_inner()).into_owned(),
        }
    }
}

impl io::Write for LogBufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut bytes = self
            .inner
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log buffer poisoned"))?;
        bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBufferWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogBufferWriter {
            inner: self.inner.clone(),
        }
    }
}

pub struct LogCapture {
    buffer: LogBuffer,
    level: Level,
    attached: Arc<AtomicBool>,
}

impl LogCapture {
    pub fn new(level: Level) -> Self {
        Self {
            buffer: LogBuffer::default(),
            level,
            attached: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// True only while a [`scope`](Self::scope) future is alive.
    pub fn is_attached(&self) -> bool {
        self.attached.load(Ordering::SeqCst)
    }

    pub fn contents(&self) -> String {
        self.buffer.contents()
    }

    /// Run `fut` with every event at or above the capture level recorded here.
    pub async fn scope<F>(&self, fut: F) -> F::Output
    where
        F: Future,
    {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.buffer.clone())
            .with_max_level(self.level)
            .with_ansi(false)
            .with_target(true)
            .finish();

        let _attached = AttachGuard::attach(self.attached.clone());
        fut.with_subscriber(subscriber).await
    }
}

impl Default for LogCapture {
    fn default() -> Self {
        Self::new(Level::DEBUG)
    }
}

struct AttachGuard(Arc<AtomicBool>);

impl AttachGuard {
    fn attach(flag: Arc<AtomicBool>) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for AttachGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
