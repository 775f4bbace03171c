use std::time::Duration;

use rust_decimal::Decimal;
use tokio::time;

use smartcart::checkout::{VerificationState, VerifierConfig, WeightVerifier};

#[tokio::test(start_paused = true)]
async fn stays_waiting_until_the_initial_delay_elapses() {
    let mut verification = WeightVerifier::new(Decimal::ONE).start();
    assert_eq!(verification.state(), VerificationState::Waiting);

    time::advance(Duration::from_millis(1999)).await;
    assert_eq!(verification.state(), VerificationState::Waiting);

    let state = verification.changed().await.expect("verifier still running");
    assert_eq!(
        state,
        VerificationState::Verifying {
            observed: Decimal::ZERO
        }
    );
}

#[tokio::test(start_paused = true)]
async fn observed_weight_is_monotonic_and_gates_verified() {
    let expected = Decimal::new(5, 1);
    let mut verification = WeightVerifier::new(expected).start();

    let mut last_observed = Decimal::ZERO;
    let mut saw_verified = false;
    while let Some(state) = verification.changed().await {
        match state {
            VerificationState::Waiting => panic!("machine never re-enters waiting"),
            VerificationState::Verifying { observed } => {
                assert!(!saw_verified, "no transitions after verified");
                assert!(observed >= last_observed, "observed weight decreased");
                last_observed = observed;
            }
            VerificationState::Verified => {
                assert!(
                    last_observed >= expected,
                    "verified before reaching the threshold"
                );
                saw_verified = true;
            }
        }
    }

    assert!(saw_verified);
    assert!(verification.verified());
}

#[tokio::test(start_paused = true)]
async fn zero_expected_weight_still_runs_the_full_progression() {
    let mut verification = WeightVerifier::new(Decimal::ZERO).start();

    let first = verification.changed().await.expect("verifier running");
    assert_eq!(
        first,
        VerificationState::Verifying {
            observed: Decimal::ZERO
        }
    );

    let second = verification.changed().await.expect("verifier running");
    assert_eq!(second, VerificationState::Verified);
    assert!(verification.changed().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn cancelled_verification_never_advances() {
    let mut verification = WeightVerifier::new(Decimal::ONE).start();
    verification.cancel();

    assert!(verification.changed().await.is_none());
    assert_eq!(verification.state(), VerificationState::Waiting);
    assert!(!verification.verified());
}

#[tokio::test(start_paused = true)]
async fn custom_timing_constants_are_respected() {
    let config = VerifierConfig {
        initial_delay: Duration::from_millis(10),
        step: Decimal::ONE,
        tick: Duration::from_millis(5),
        hold: Duration::from_millis(10),
    };
    let mut verification = WeightVerifier::with_config(Decimal::new(3, 0), config).start();

    let mut steps = 0;
    while let Some(state) = verification.changed().await {
        if let VerificationState::Verifying { .. } = state {
            steps += 1;
        }
    }

    // observed runs 0, 1, 2, 3; the last reading crosses the threshold
    assert_eq!(steps, 4);
    assert!(verification.verified());
}
