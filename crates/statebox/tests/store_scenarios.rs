use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use statebox::{combine_reducers, infallible, Action, BoxError, Store, StoreError};

#[derive(Debug, Clone, PartialEq, strum::IntoStaticStr)]
enum Op {
    Init,
    Inc,
    Push(u32),
    Reject,
}

impl Action for Op {
    fn init() -> Self {
        Op::Init
    }

    fn kind(&self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Tally {
    total: u64,
    history: Arc<Vec<u32>>,
}

fn total(state: Option<&u64>, action: &Op) -> u64 {
    let state = state.copied().unwrap_or(0);
    match action {
        Op::Inc => state + 1,
        Op::Push(n) => state + u64::from(*n),
        _ => state,
    }
}

fn history(state: Option<&Arc<Vec<u32>>>, action: &Op) -> Result<Arc<Vec<u32>>, BoxError> {
    let mut history = state.cloned().unwrap_or_default();
    match action {
        Op::Reject => return Err("history is append-only".into()),
        Op::Push(n) => Arc::make_mut(&mut history).push(*n),
        _ => {}
    }
    Ok(history)
}

fn tally_store() -> Store<Tally, Op> {
    Store::try_new(combine_reducers!(Tally {
        total: infallible(total),
        history: history,
    }))
    .unwrap()
}

#[test]
fn combined_store_starts_from_field_defaults() {
    let store = tally_store();
    assert_eq!(store.state().total, 0);
    assert!(store.state().history.is_empty());
}

#[test]
fn unchanged_slices_are_shared_between_records() {
    let store = tally_store();
    store.dispatch(Op::Push(4)).unwrap();
    let before = store.state();

    store.dispatch(Op::Inc).unwrap();
    let after = store.state();

    // New record, but the untouched history slice is the same allocation
    assert!(!Arc::ptr_eq(&before, &after));
    assert!(Arc::ptr_eq(&before.history, &after.history));
    assert_eq!(after.total, 5);
    // The earlier record was not mutated
    assert_eq!(before.total, 4);
}

#[test]
fn rejected_action_leaves_record_untouched() {
    let store = tally_store();
    store.dispatch(Op::Push(1)).unwrap();

    let fired = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&fired);
    let subscription = store.subscribe(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let before = store.state();
    let err = store.dispatch(Op::Reject).unwrap_err();
    assert!(matches!(err, StoreError::Transition { action: "Reject", .. }));
    assert!(err.to_string().contains("append-only"));
    assert!(Arc::ptr_eq(&before, &store.state()));
    assert_eq!(fired.load(Ordering::SeqCst), 0);

    subscription.unsubscribe();
}

#[test]
fn every_listener_sees_every_transition() {
    let store = tally_store();
    let fired = Arc::new(AtomicUsize::new(0));
    let subscriptions: Vec<_> = (0..5)
        .map(|_| {
            let fired = Arc::clone(&fired);
            store.subscribe(move || {
                fired.fetch_add(1, Ordering::SeqCst);
            })
        })
        .collect();

    for _ in 0..3 {
        store.dispatch(Op::Inc).unwrap();
    }
    assert_eq!(fired.load(Ordering::SeqCst), 15);

    for subscription in &subscriptions {
        subscription.unsubscribe();
    }
    assert_eq!(store.listener_count(), 0);
}

#[test]
fn dispatches_from_many_threads_are_serialized() {
    const THREADS: u64 = 8;
    const PER_THREAD: u64 = 200;

    let store = tally_store();
    // Each notification must observe a total no smaller than the previous one
    let observed = Arc::new(Mutex::new(Vec::new()));
    let handle = store.clone();
    let sink = Arc::clone(&observed);
    let _subscription = store.subscribe(move || {
        sink.lock().unwrap().push(handle.state().total);
    });

    let workers: Vec<_> = (0..THREADS)
        .map(|_| {
            let store = store.clone();
            thread::spawn(move || {
                for _ in 0..PER_THREAD {
                    store.dispatch(Op::Inc).unwrap();
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    let observed = observed.lock().unwrap();
    assert_eq!(store.state().total, THREADS * PER_THREAD);
    assert_eq!(observed.len() as u64, THREADS * PER_THREAD);
    assert!(observed.windows(2).all(|pair| pair[1] == pair[0] + 1));
}
