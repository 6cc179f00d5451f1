use std::panic::{self, AssertUnwindSafe};

/// Runs `f`, returning true if it panicked. The panic is caught rather than propagated, so the
/// state `f` touched may be left half-modified.
#[allow(dead_code)]
pub(crate) fn panics<F: FnOnce()>(f: F) -> bool {
    panic::catch_unwind(AssertUnwindSafe(f)).is_err()
}

/// Asserts that the given block panics.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "block was expected to panic")
    };
    ($run:block, $msg:literal) => {
        assert!($crate::util::panic::panics(|| $run), $msg)
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
