/// Timing for deferred reclamation of evicted items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReclaimPolicy {
    /// Period of the reclamation timer.
    pub interval_ms: u64,
    /// A reclamation pass is skipped while the last interaction is younger than this.
    pub idle_ms: u64,
}

impl ReclaimPolicy {
    pub const DEFAULT_INTERVAL_MS: u64 = 300;
    pub const DEFAULT_IDLE_MS: u64 = 100;

    pub fn new(interval_ms: u64, idle_ms: u64) -> Self {
        Self {
            interval_ms,
            idle_ms,
        }
    }
}

impl Default for ReclaimPolicy {
    fn default() -> Self {
        Self {
            interval_ms: Self::DEFAULT_INTERVAL_MS,
            idle_ms: Self::DEFAULT_IDLE_MS,
        }
    }
}

/// Periodic reclamation timer plus interaction recency.
///
/// The timer keeps ticking during interaction; the idle gate decides whether a tick does any
/// work. Time is supplied by the caller in milliseconds from an arbitrary monotonic origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reclaimer {
    policy: ReclaimPolicy,
    next_due_ms: Option<u64>,
    last_interaction_ms: Option<u64>,
}

impl Reclaimer {
    pub fn new(policy: ReclaimPolicy) -> Self {
        Self {
            policy,
            next_due_ms: None,
            last_interaction_ms: None,
        }
    }

    pub fn policy(&self) -> ReclaimPolicy {
        self.policy
    }

    pub fn start(&mut self, now_ms: u64) {
        self.next_due_ms = Some(now_ms.saturating_add(self.policy.interval_ms));
    }

    pub fn cancel(&mut self) {
        self.next_due_ms = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due_ms.is_some()
    }

    pub fn next_due_ms(&self) -> Option<u64> {
        self.next_due_ms
    }

    pub fn record_interaction(&mut self, now_ms: u64) {
        self.last_interaction_ms = Some(now_ms);
    }

    pub fn last_interaction_ms(&self) -> Option<u64> {
        self.last_interaction_ms
    }

    /// Whether an interaction happened less than `idle_ms` ago. Never true before the first
    /// interaction.
    pub fn is_recent(&self, now_ms: u64) -> bool {
        match self.last_interaction_ms {
            Some(last) => now_ms.saturating_sub(last) < self.policy.idle_ms,
            None => false,
        }
    }

    /// Returns `true` once per elapsed period.
    ///
    /// Several missed periods coalesce into a single tick; the next deadline is counted from
    /// `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        let Some(due) = self.next_due_ms else {
            return false;
        };
        if now_ms < due {
            return false;
        }
        self.next_due_ms = Some(now_ms.saturating_add(self.policy.interval_ms));
        true
    }
}
