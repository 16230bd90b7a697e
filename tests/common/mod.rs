//! Shared helpers for integration tests.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Write `contents` to a fresh file under the system temp directory and
/// return its path. Files are never reused across calls.
pub fn temp_dict(contents: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    let path = std::env::temp_dir().join(format!(
        "colordict_test_{}_{n}.txt",
        std::process::id()
    ));
    std::fs::write(&path, contents).expect("write temp dictionary");
    path
}

/// Temporarily set an environment variable for the duration of a closure.
///
/// The original value is restored after the closure completes. Callers
/// must serialize tests that touch the environment (`#[serial]`).
pub fn with_env_var<F, R>(key: &str, value: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let original = std::env::var(key).ok();
    // SAFETY: env-mutating tests are serialized and single-threaded
    unsafe { std::env::set_var(key, value) };

    let result = f();

    // SAFETY: env-mutating tests are serialized and single-threaded
    match original {
        Some(v) => unsafe { std::env::set_var(key, v) },
        None => unsafe { std::env::remove_var(key) },
    }

    result
}

/// Temporarily remove an environment variable for the duration of a
/// closure.
pub fn without_env_var<F, R>(key: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let original = std::env::var(key).ok();
    // SAFETY: env-mutating tests are serialized and single-threaded
    unsafe { std::env::remove_var(key) };

    let result = f();

    if let Some(v) = original {
        // SAFETY: env-mutating tests are serialized and single-threaded
        unsafe { std::env::set_var(key, v) };
    }

    result
}
