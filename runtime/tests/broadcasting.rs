//! Integration tests for Store action broadcasting
//!
//! Tests the action observation features that let UI bindings react to
//! effect results: `subscribe_actions` for streaming and
//! `send_and_wait_for` for request-response flows.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use std::time::Duration;

use marquee_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use marquee_runtime::Store;

// ============================================================================
// Test Fixtures
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
enum FetchAction {
    /// Kick off a three-step chained fetch
    Start,
    /// One step of the chain finished
    StepCompleted { step: u32 },
    /// Whole chain finished (terminal action)
    Completed,
}

#[derive(Debug, Clone, Default)]
struct FetchState {
    steps_seen: Vec<u32>,
    completed: bool,
}

#[derive(Clone)]
struct FetchEnv;

#[derive(Clone)]
struct FetchReducer;

impl Reducer for FetchReducer {
    type State = FetchState;
    type Action = FetchAction;
    type Environment = FetchEnv;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            FetchAction::Start => {
                state.steps_seen.clear();
                smallvec![Effect::Future(Box::pin(async {
                    tokio::time::sleep(Duration::from_millis(5)).await;
                    Some(FetchAction::StepCompleted { step: 1 })
                }))]
            },
            FetchAction::StepCompleted { step } => {
                state.steps_seen.push(step);
                if step < 3 {
                    smallvec![Effect::Future(Box::pin(async move {
                        tokio::time::sleep(Duration::from_millis(5)).await;
                        Some(FetchAction::StepCompleted { step: step + 1 })
                    }))]
                } else {
                    smallvec![Effect::Future(Box::pin(async {
                        Some(FetchAction::Completed)
                    }))]
                }
            },
            FetchAction::Completed => {
                state.completed = true;
                smallvec![]
            },
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_observers_see_every_effect_produced_action() {
    let store = Store::new(FetchState::default(), FetchReducer, FetchEnv);
    let mut rx = store.subscribe_actions();

    let _ = store.send(FetchAction::Start).await;

    let mut observed = Vec::new();
    while observed.len() < 4 {
        match tokio::time::timeout(Duration::from_secs(1), rx.recv()).await {
            Ok(Ok(action)) => observed.push(action),
            other => panic!("broadcast ended early: {other:?}"),
        }
    }

    assert_eq!(
        observed,
        vec![
            FetchAction::StepCompleted { step: 1 },
            FetchAction::StepCompleted { step: 2 },
            FetchAction::StepCompleted { step: 3 },
            FetchAction::Completed,
        ]
    );
}

#[tokio::test]
async fn test_send_and_wait_for_resolves_on_terminal_action() {
    let store = Store::new(FetchState::default(), FetchReducer, FetchEnv);

    let result = store
        .send_and_wait_for(
            FetchAction::Start,
            |a| matches!(a, FetchAction::Completed),
            Duration::from_secs(1),
        )
        .await
        .expect("chain should complete");

    assert_eq!(result, FetchAction::Completed);
    assert_eq!(store.state(|s| s.steps_seen.clone()).await, vec![1, 2, 3]);
    assert!(store.state(|s| s.completed).await);
}

#[tokio::test]
async fn test_initial_action_is_not_broadcast() {
    let store = Store::new(FetchState::default(), FetchReducer, FetchEnv);
    let mut rx = store.subscribe_actions();

    // Completed produces no effects, so nothing should be broadcast
    let _ = store.send(FetchAction::Completed).await;

    let result = tokio::time::timeout(Duration::from_millis(50), rx.recv()).await;
    assert!(result.is_err(), "expected no broadcast, got {result:?}");
}

#[tokio::test]
async fn test_multiple_observers_each_get_all_actions() {
    let store = Store::new(FetchState::default(), FetchReducer, FetchEnv);
    let mut rx_a = store.subscribe_actions();
    let mut rx_b = store.subscribe_actions();

    let _ = store.send(FetchAction::Start).await;

    let first_a = tokio::time::timeout(Duration::from_secs(1), rx_a.recv())
        .await
        .unwrap()
        .unwrap();
    let first_b = tokio::time::timeout(Duration::from_secs(1), rx_b.recv())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(first_a, FetchAction::StepCompleted { step: 1 });
    assert_eq!(first_b, FetchAction::StepCompleted { step: 1 });
}
