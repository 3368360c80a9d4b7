//! Store performance benchmarks
//!
//! These benchmarks track the overhead of the runtime around a trivial
//! reducer:
//! - Reducer execution in isolation (pure in-memory operation)
//! - Store send throughput (lock + reducer + effect dispatch)
//! - Scoped effect dispatch (cancellation bookkeeping)
//!
//! Run with: `cargo bench`

#![allow(missing_docs)] // Benchmarks don't need extensive docs
#![allow(clippy::expect_used)] // Benchmarks can use expect for setup

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use marquee_core::effect::{Effect, ScopeId};
use marquee_core::reducer::Reducer;
use marquee_core::{SmallVec, smallvec};
use marquee_runtime::Store;

// Bench state
#[derive(Clone, Debug, Default)]
struct BenchState {
    counter: i64,
}

// Bench actions
#[derive(Clone, Debug)]
enum BenchAction {
    Increment,
    SetValue(i64),
    ScopedNoOp(ScopeId),
}

// Bench environment
#[derive(Clone, Debug)]
struct BenchEnv;

// Bench reducer
#[derive(Clone)]
struct BenchReducer;

impl Reducer for BenchReducer {
    type State = BenchState;
    type Action = BenchAction;
    type Environment = BenchEnv;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            BenchAction::Increment => {
                state.counter += 1;
                smallvec![]
            },
            BenchAction::SetValue(v) => {
                state.counter = v;
                smallvec![]
            },
            BenchAction::ScopedNoOp(scope) => {
                smallvec![Effect::Cancellable {
                    scope,
                    effect: Box::new(Effect::None),
                }]
            },
        }
    }
}

/// Benchmark reducer execution in isolation (no Store overhead)
fn benchmark_reducer_execution(c: &mut Criterion) {
    let mut group = c.benchmark_group("reducer");
    group.throughput(Throughput::Elements(1));

    let reducer = BenchReducer;
    let env = BenchEnv;

    group.bench_function("increment", |b| {
        let mut state = BenchState::default();
        b.iter(|| {
            let _effects = reducer.reduce(&mut state, black_box(BenchAction::Increment), &env);
        });
    });

    group.bench_function("set_value", |b| {
        let mut state = BenchState::default();
        b.iter(|| {
            let _effects = reducer.reduce(&mut state, black_box(BenchAction::SetValue(42)), &env);
        });
    });

    group.finish();
}

/// Benchmark Store send throughput (actions/sec)
fn benchmark_store_send(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");

    let mut group = c.benchmark_group("store");
    group.throughput(Throughput::Elements(1));

    group.bench_function("send_increment", |b| {
        let store = Store::new(BenchState::default(), BenchReducer, BenchEnv);
        b.to_async(&runtime).iter(|| {
            let store = store.clone();
            async move {
                let _ = store.send(black_box(BenchAction::Increment)).await;
            }
        });
    });

    group.bench_function("send_scoped_noop", |b| {
        let store = Store::new(BenchState::default(), BenchReducer, BenchEnv);
        let scope = ScopeId::new();
        b.to_async(&runtime).iter(|| {
            let store = store.clone();
            async move {
                let _ = store.send(black_box(BenchAction::ScopedNoOp(scope))).await;
            }
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_reducer_execution, benchmark_store_send);
criterion_main!(benches);
