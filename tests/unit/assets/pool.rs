use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

fn opts(threads: usize) -> WorkerPoolOpts {
    WorkerPoolOpts {
        threads: Some(threads),
        ..WorkerPoolOpts::default()
    }
}

#[test]
fn zero_threads_rejected() {
    let err = WorkerPool::new(&opts(0)).unwrap_err();
    assert!(matches!(err, CanvasError::Pool(_)));
}

#[test]
fn runs_every_job_once() {
    let pool = WorkerPool::new(&opts(3)).unwrap();
    assert_eq!(pool.threads(), 3);
    let hits = Arc::new(AtomicUsize::new(0));
    for _ in 0..64 {
        let hits = Arc::clone(&hits);
        pool.spawn(move || {
            hits.fetch_add(1, Ordering::SeqCst);
        });
    }
    pool.wait_idle();
    assert_eq!(hits.load(Ordering::SeqCst), 64);
    assert_eq!(pool.in_flight(), 0);
}

#[test]
fn jobs_run_on_named_worker_threads() {
    let pool = WorkerPool::new(&WorkerPoolOpts {
        threads: Some(1),
        thread_name: "decoder".to_string(),
    })
    .unwrap();
    let seen = Arc::new(Mutex::new(None));
    let slot = Arc::clone(&seen);
    let caller = std::thread::current().id();
    pool.spawn(move || {
        let me = std::thread::current();
        *slot.lock() = Some((me.id() != caller, me.name().map(str::to_string)));
    });
    pool.shutdown();
    assert_eq!(*seen.lock(), Some((true, Some("decoder-0".to_string()))));
}

#[test]
fn panicking_job_still_counts_down() {
    let pool = WorkerPool::new(&opts(1)).unwrap();
    pool.spawn(|| panic!("boom"));
    assert!(pool.wait_idle_timeout(Duration::from_secs(10)));
}

#[test]
fn busy_workers_hold_back_later_jobs() {
    let pool = WorkerPool::new(&opts(1)).unwrap();
    let gate = Arc::new((Mutex::new(false), Condvar::new()));
    let blocker = Arc::clone(&gate);
    pool.spawn(move || {
        let (open, cv) = &*blocker;
        let mut open = open.lock();
        while !*open {
            cv.wait(&mut open);
        }
    });
    let ran = Arc::new(AtomicUsize::new(0));
    let hit = Arc::clone(&ran);
    pool.spawn(move || {
        hit.fetch_add(1, Ordering::SeqCst);
    });

    assert!(!pool.wait_idle_timeout(Duration::from_millis(50)));
    assert_eq!(ran.load(Ordering::SeqCst), 0);

    *gate.0.lock() = true;
    gate.1.notify_all();
    pool.wait_idle();
    assert_eq!(ran.load(Ordering::SeqCst), 1);
}
