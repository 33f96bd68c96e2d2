use tokio::sync::{mpsc, Mutex, MutexGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceId {
    A,
    B,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockEvent {
    Locked(ResourceId),
    Unlocked(ResourceId),
}

/// The two resources every colony needs for one growth step. They are only
/// ever taken together through `acquire_all`, A before B, so no circular
/// wait can form between colonies.
pub struct ResourcePair {
    resource_a: Mutex<()>,
    resource_b: Mutex<()>,
    probe: Option<mpsc::UnboundedSender<LockEvent>>,
}

impl ResourcePair {
    pub fn new() -> ResourcePair {
        ResourcePair {
            resource_a: Mutex::new(()),
            resource_b: Mutex::new(()),
            probe: None,
        }
    }

    /// Like `new`, but every lock and unlock is reported on `probe` in the
    /// order it happens.
    pub fn with_probe(probe: mpsc::UnboundedSender<LockEvent>) -> ResourcePair {
        ResourcePair {
            resource_a: Mutex::new(()),
            resource_b: Mutex::new(()),
            probe: Some(probe),
        }
    }

    /// Blocks until the caller exclusively holds both resources, always
    /// requesting A before B. Contention never fails, it only waits.
    pub async fn acquire_all(&self) -> ResourceHold<'_> {
        let guard_a = self.resource_a.lock().await;
        self.emit(LockEvent::Locked(ResourceId::A));
        let guard_b = self.resource_b.lock().await;
        self.emit(LockEvent::Locked(ResourceId::B));

        ResourceHold {
            _b: TrackedGuard {
                resource: ResourceId::B,
                _guard: guard_b,
                probe: self.probe.clone(),
            },
            _a: TrackedGuard {
                resource: ResourceId::A,
                _guard: guard_a,
                probe: self.probe.clone(),
            },
        }
    }

    fn emit(&self, event: LockEvent) {
        if let Some(probe) = &self.probe {
            let _ = probe.send(event);
        }
    }
}

/// Exclusive hold on both resources. Guards drop in declaration order, so B
/// is always released before A.
pub struct ResourceHold<'a> {
    _b: TrackedGuard<'a>,
    _a: TrackedGuard<'a>,
}

impl ResourceHold<'_> {
    /// Releases B, then A. Dropping the hold does the same.
    pub fn release_all(self) {}
}

struct TrackedGuard<'a> {
    resource: ResourceId,
    _guard: MutexGuard<'a, ()>,
    probe: Option<mpsc::UnboundedSender<LockEvent>>,
}

impl Drop for TrackedGuard<'_> {
    fn drop(&mut self) {
        if let Some(probe) = &self.probe {
            let _ = probe.send(LockEvent::Unlocked(self.resource));
        }
    }
}
