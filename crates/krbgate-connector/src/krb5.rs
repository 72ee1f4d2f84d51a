//! Process-wide Kerberos configuration registration.
//!
//! The underlying security subsystem resolves realm configuration from a
//! single location per process. This module isolates all writes to that
//! slot behind one guarded setter.
//!
//! # Concurrency hazard
//!
//! Concurrent [`register`](Krb5Registry::register) calls with different
//! paths race: the last writer before the security subsystem reads the
//! slot wins. This is a property of the process-wide slot, not a
//! guarantee of this layer. Callers mixing realm configuration paths
//! against the same registry must serialize their connection attempts;
//! callers that can tolerate per-connector isolation should give each
//! connector its own registry instead.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use log::{debug, warn};

static PROCESS_REGISTRY: OnceLock<Arc<Krb5Registry>> = OnceLock::new();

/// A guarded slot holding the realm configuration path consulted by the
/// security subsystem.
#[derive(Debug, Default)]
pub struct Krb5Registry {
    slot: Mutex<Option<PathBuf>>,
}

impl Krb5Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide registry shared by every connector that
    /// does not carry an explicit one.
    #[must_use]
    pub fn process() -> Arc<Self> {
        PROCESS_REGISTRY.get_or_init(|| Arc::new(Self::new())).clone()
    }

    /// Registers `path` as the realm configuration location, replacing any
    /// previous registration. Returns the previously registered path.
    ///
    /// Replacing a different path logs a warning: it means two credential
    /// contexts are racing on the same slot.
    pub fn register(&self, path: &Path) -> Option<PathBuf> {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        let previous = slot.replace(path.to_path_buf());

        match previous.as_deref() {
            None => debug!(
                "registered Kerberos configuration path {}",
                path.display()
            ),
            Some(replaced) if replaced != path => warn!(
                "Kerberos configuration path changed from {} to {}; \
                 concurrent connectors race on this process-wide slot",
                replaced.display(),
                path.display()
            ),
            Some(_) => {}
        }

        previous
    }

    /// Returns the currently registered path, if any.
    #[must_use]
    pub fn current(&self) -> Option<PathBuf> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
