use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of the latest completed liveness probe. Replaced whole on every
/// probe completion, never accumulated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HealthStatus {
    pub online: bool,
    pub checked_at: DateTime<Utc>,
}

impl HealthStatus {
    /// Initial snapshot before the first probe completes.
    pub fn offline() -> Self {
        Self::observed(false)
    }

    /// Snapshot for a probe that just completed.
    pub fn observed(online: bool) -> Self {
        Self {
            online,
            checked_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offline_starts_offline() {
        assert!(!HealthStatus::offline().online);
    }

    #[test]
    fn test_observed_keeps_flag() {
        assert!(HealthStatus::observed(true).online);
        assert!(!HealthStatus::observed(false).online);
    }

    #[test]
    fn test_checked_at_non_decreasing() {
        let first = HealthStatus::observed(true);
        let second = HealthStatus::observed(false);
        assert!(second.checked_at >= first.checked_at);
    }
}
