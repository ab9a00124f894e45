//! Fatal guard around accelerator-runtime calls
//! ============================================
//! Host code that allocates, copies or launches on the accelerator wraps each
//! runtime call in [`runtime_call!`](crate::runtime_call). Success passes the
//! value through untouched. Failure prints where and why the call failed and
//! exits the process: lane state after a runtime error cannot be trusted, so
//! there is no retry and no partial result.
//!
//! ```no_run
//! use lanebits::runtime_call;
//!
//! fn alloc(len: usize) -> Result<Vec<u8>, String> {
//!     Ok(vec![0; len])
//! }
//!
//! let buf = runtime_call!(alloc(4096));
//! assert_eq!(buf.len(), 4096);
//! ```

use std::fmt;
use std::string::{String, ToString};

/// Exit status used when a guarded call fails.
pub const EXIT_RUNTIME_FAILURE: i32 = 1;

/// Source location of a guarded call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    #[inline]
    #[must_use]
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file '{}' in line {}", self.file, self.line)
    }
}

/// A failed runtime call, ready to be reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("accelerator runtime error in {site} ({call}): {cause}")]
pub struct CallFailure {
    pub site: CallSite,
    /// The call expression as written at the call site.
    pub call: &'static str,
    /// Description of the underlying runtime error.
    pub cause: String,
}

impl CallFailure {
    pub fn new(site: CallSite, call: &'static str, cause: &impl fmt::Display) -> Self {
        Self {
            site,
            call,
            cause: cause.to_string(),
        }
    }
}

/// Pass `result` through on success; report and exit on failure.
pub fn check<T, E: fmt::Display>(site: CallSite, call: &'static str, result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => abort(CallFailure::new(site, call, &err)),
    }
}

/// Report `failure` to the diagnostic stream and terminate the process.
///
/// The failure always goes out as an `error` event. The plain stderr line is
/// written only while no `tracing` dispatcher has ever been installed, so a
/// process with a stderr subscriber sees the diagnostic once.
pub fn abort(failure: CallFailure) -> ! {
    tracing::error!(
        file = failure.site.file,
        line = failure.site.line,
        call = failure.call,
        cause = %failure.cause,
        "accelerator runtime call failed"
    );
    if !tracing::dispatcher::has_been_set() {
        std::eprintln!("{failure}");
    }
    std::process::exit(EXIT_RUNTIME_FAILURE)
}

/// Evaluate a fallible runtime call, aborting with the call site on error.
#[macro_export]
macro_rules! runtime_call {
    ($call:expr) => {
        $crate::guard::check(
            $crate::guard::CallSite::new(file!(), line!()),
            stringify!($call),
            $call,
        )
    };
}
