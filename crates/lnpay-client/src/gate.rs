//! Serialization gate for money-moving calls.
//!
//! Invoice creation, payments and transfers pass through a [`MutationGate`]
//! before they hit the wire. The default gate is a single exclusive lock
//! shared by every client in the process, so at most one mutating request is
//! in flight at any instant, even across unrelated wallets.
//!
//! Serializing unrelated wallets costs throughput. Callers that want
//! per-client or per-wallet ordering can inject their own [`ExclusiveGate`]
//! instances through [`LnPayClient::with_gate`](crate::LnPayClient::with_gate).

use std::fmt;
use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// A gate that mutating requests must enter before going on the wire.
///
/// The returned [`GatePass`] is held for the duration of the network phase
/// and dropped afterwards, whatever the outcome.
#[async_trait]
pub trait MutationGate: Send + Sync {
    /// Wait for the gate and return a pass that releases it on drop.
    async fn enter(&self) -> GatePass;
}

/// Proof of having entered a [`MutationGate`]. Dropping it leaves the gate.
#[must_use = "the gate is released as soon as the pass is dropped"]
pub struct GatePass {
    _guard: Option<OwnedMutexGuard<()>>,
}

impl GatePass {
    /// A pass that holds nothing.
    pub fn open() -> Self {
        Self { _guard: None }
    }

    /// A pass that keeps `guard` locked until dropped.
    pub fn holding(guard: OwnedMutexGuard<()>) -> Self {
        Self {
            _guard: Some(guard),
        }
    }
}

impl fmt::Debug for GatePass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatePass")
            .field("exclusive", &self._guard.is_some())
            .finish()
    }
}

/// Exclusive gate backed by a fair async mutex.
///
/// Waiters are admitted in the order they called [`enter`](MutationGate::enter).
/// Not reentrant: a task that enters twice without dropping its first pass
/// waits forever.
#[derive(Debug, Clone, Default)]
pub struct ExclusiveGate {
    lock: Arc<Mutex<()>>,
}

static PROCESS_GATE: OnceLock<Arc<ExclusiveGate>> = OnceLock::new();

impl ExclusiveGate {
    /// Create an independent gate.
    pub fn new() -> Self {
        Self::default()
    }

    /// The gate shared by every client that was not given one explicitly.
    pub fn process_wide() -> Arc<ExclusiveGate> {
        PROCESS_GATE
            .get_or_init(|| Arc::new(ExclusiveGate::new()))
            .clone()
    }
}

#[async_trait]
impl MutationGate for ExclusiveGate {
    async fn enter(&self) -> GatePass {
        GatePass::holding(self.lock.clone().lock_owned().await)
    }
}

/// Gate that never blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopGate;

#[async_trait]
impl MutationGate for NoopGate {
    async fn enter(&self) -> GatePass {
        GatePass::open()
    }
}
