//! Recoverable problems found while decoding a segment
//!
//! The decoder never logs on its own. It reports through a [`Diagnostics`]
//! hook, which callers can point at tracing, a collector, or telemetry.

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A tolerated oddity in segment markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A formatting `bpt` has a `ctype` outside the five known kinds; no flag was set.
    UnrecognizedFormatKind {
        /// The marker's `id` attribute.
        id: String,
        /// The unknown `ctype` value.
        ctype: String,
    },
    /// A formatting `ept` refers to an id no `bpt` opened; nothing was cleared.
    UnmatchedCloseMarker {
        /// The marker's `id` attribute.
        id: String,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnrecognizedFormatKind { id, ctype } => {
                write!(f, "formatting marker {id} has unknown ctype '{ctype}'")
            }
            Warning::UnmatchedCloseMarker { id } => {
                write!(f, "formatting end marker {id} has no matching start")
            }
        }
    }
}

/// Receiver for decoder warnings.
pub trait Diagnostics: Send + Sync {
    fn warn(&self, warning: &Warning);
}

/// Forwards warnings to `tracing` at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn warn(&self, warning: &Warning) {
        tracing::warn!("{warning}");
    }
}

/// Keeps every warning for later inspection.
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    warnings: Mutex<Vec<Warning>>,
}

impl CollectingDiagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Warning>> {
        self.warnings.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Takes the warnings collected so far.
    pub fn take(&self) -> Vec<Warning> {
        std::mem::take(&mut *self.lock())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl Diagnostics for CollectingDiagnostics {
    fn warn(&self, warning: &Warning) {
        self.lock().push(warning.clone());
    }
}
