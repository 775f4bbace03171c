use std::time::Duration;

use rand::Rng;
use thiserror::Error;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time;

use crate::seed::DEMO_STORE_QR;

/// Barcodes the mock product scanner picks from, matching the seeded
/// catalog.
pub const SAMPLE_BARCODES: [&str; 5] = [
    "7896080900021",
    "7891234567890",
    "7893210987654",
    "7897890123456",
    "7899876543210",
];

#[derive(Debug, Error)]
pub enum ScanError {
    /// Camera or scanner hardware was unavailable.
    #[error("device access denied: {0}")]
    DeviceAccess(String),
    /// The scanned payload did not resolve to anything.
    #[error("no code found")]
    NoCodeFound,
    /// The scan was cancelled before a code was produced.
    #[error("scan cancelled")]
    Cancelled,
}

/// A pending scan: one timer task that delivers exactly one code.
///
/// Cancelling (or dropping) the job aborts the timer; no signal is ever
/// delivered afterwards. Scanning again means starting a fresh job from
/// the provider.
#[derive(Debug)]
pub struct ScanJob {
    rx: oneshot::Receiver<String>,
    task: JoinHandle<()>,
}

impl ScanJob {
    fn spawn<F>(delay: Duration, produce: F) -> Self
    where
        F: FnOnce() -> String + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let task = tokio::spawn(async move {
            time::sleep(delay).await;
            let _ = tx.send(produce());
        });
        Self { rx, task }
    }

    /// Wait for the scan result. Delivered at most once; a cancelled job
    /// yields [`ScanError::Cancelled`].
    pub async fn recv(&mut self) -> Result<String, ScanError> {
        (&mut self.rx).await.map_err(|_| ScanError::Cancelled)
    }

    /// Abort the pending timer.
    pub fn cancel(&self) {
        self.task.abort();
    }
}

impl Drop for ScanJob {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Simulated product barcode scanner. After a fixed delay it emits one
/// barcode chosen uniformly at random from [`SAMPLE_BARCODES`].
#[derive(Debug, Clone)]
pub struct BarcodeScanner {
    delay: Duration,
}

impl Default for BarcodeScanner {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(2000),
        }
    }
}

impl BarcodeScanner {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn start(&self) -> ScanJob {
        ScanJob::spawn(self.delay, || {
            let idx = rand::rng().random_range(0..SAMPLE_BARCODES.len());
            SAMPLE_BARCODES[idx].to_string()
        })
    }
}

/// Simulated store QR scanner. After a fixed delay it emits the configured
/// store code (the seeded demo store by default).
#[derive(Debug, Clone)]
pub struct StoreQrScanner {
    delay: Duration,
    code: String,
}

impl Default for StoreQrScanner {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(3000),
            code: DEMO_STORE_QR.to_string(),
        }
    }
}

impl StoreQrScanner {
    pub fn new(delay: Duration, code: impl Into<String>) -> Self {
        Self {
            delay,
            code: code.into(),
        }
    }

    pub fn start(&self) -> ScanJob {
        let code = self.code.clone();
        ScanJob::spawn(self.delay, move || code)
    }
}

/// Parsed `store:<id>:<name>:<branch>` payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreCode {
    pub id: i32,
    pub name: String,
    pub branch: String,
}

/// Parse a store scan payload. Wrong prefix, too few segments, or a
/// non-numeric id yield `None`; callers ignore malformed payloads silently.
pub fn parse_store_code(payload: &str) -> Option<StoreCode> {
    let parts: Vec<&str> = payload.split(':').collect();
    if parts.len() < 4 || parts[0] != "store" {
        return None;
    }
    let id = parts[1].parse().ok()?;
    Some(StoreCode {
        id,
        name: parts[2].to_string(),
        branch: parts[3].to_string(),
    })
}
