use std::time::Duration;

use rust_decimal::Decimal;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time;

/// Progress of the simulated checkout scale. Transitions are strictly
/// forward: `Waiting -> Verifying -> Verified`, never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationState {
    Waiting,
    Verifying { observed: Decimal },
    Verified,
}

impl VerificationState {
    pub fn is_verified(&self) -> bool {
        matches!(self, VerificationState::Verified)
    }
}

/// Timing constants for the weight verification sequence. These are
/// configuration, not algorithmic parameters; the defaults mirror the
/// physical-scale simulation of the demo.
#[derive(Debug, Clone, Copy)]
pub struct VerifierConfig {
    /// Delay before the scale starts registering weight.
    pub initial_delay: Duration,
    /// Weight units added per tick.
    pub step: Decimal,
    /// Interval between scale readings.
    pub tick: Duration,
    /// Settle time after the observed weight crosses the threshold.
    pub hold: Duration,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(2000),
            step: Decimal::new(2, 1),
            tick: Duration::from_millis(500),
            hold: Duration::from_millis(1000),
        }
    }
}

/// Simulates a scale converging on the expected cart weight.
#[derive(Debug, Clone)]
pub struct WeightVerifier {
    expected: Decimal,
    config: VerifierConfig,
}

impl WeightVerifier {
    pub fn new(expected: Decimal) -> Self {
        Self::with_config(expected, VerifierConfig::default())
    }

    pub fn with_config(expected: Decimal, config: VerifierConfig) -> Self {
        Self { expected, config }
    }

    /// Spawn the verification task. States are published over a watch
    /// channel; the task exits after publishing `Verified`.
    ///
    /// An expected weight of zero or less is treated as already converged:
    /// the machine still passes through `Verifying` and honors the hold
    /// delay, so observers always see the full progression.
    pub fn start(self) -> Verification {
        let WeightVerifier { expected, config } = self;
        let (tx, rx) = watch::channel(VerificationState::Waiting);

        let task = tokio::spawn(async move {
            time::sleep(config.initial_delay).await;

            let mut observed = Decimal::ZERO;
            if tx
                .send(VerificationState::Verifying { observed })
                .is_err()
            {
                return;
            }

            while observed < expected {
                time::sleep(config.tick).await;
                observed += config.step;
                if tx
                    .send(VerificationState::Verifying { observed })
                    .is_err()
                {
                    return;
                }
            }

            time::sleep(config.hold).await;
            let _ = tx.send(VerificationState::Verified);
        });

        Verification { expected, rx, task }
    }
}

/// Handle to a running (or finished) verification. Dropping it cancels the
/// task; no further states are published after cancellation.
#[derive(Debug)]
pub struct Verification {
    expected: Decimal,
    rx: watch::Receiver<VerificationState>,
    task: JoinHandle<()>,
}

impl Verification {
    /// The threshold the observed weight must reach.
    pub fn expected(&self) -> Decimal {
        self.expected
    }

    /// Current state of the machine.
    pub fn state(&self) -> VerificationState {
        *self.rx.borrow()
    }

    pub fn verified(&self) -> bool {
        self.state().is_verified()
    }

    /// Wait for the next published state. `None` once the machine has
    /// finished (or was cancelled) and no further transitions will occur.
    pub async fn changed(&mut self) -> Option<VerificationState> {
        self.rx.changed().await.ok()?;
        Some(*self.rx.borrow_and_update())
    }

    /// Wait until the machine reaches `Verified`. `false` if it was
    /// cancelled first.
    pub async fn wait_verified(&mut self) -> bool {
        self.rx
            .wait_for(VerificationState::is_verified)
            .await
            .is_ok()
    }

    /// Stop the verification task. The state never advances afterwards.
    pub fn cancel(&self) {
        self.task.abort();
    }
}

impl Drop for Verification {
    fn drop(&mut self) {
        self.task.abort();
    }
}
