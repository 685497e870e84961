use serde::{Deserialize, Serialize};

use crate::kernel::action::Action;
use crate::kernel::policy::Branch;
use crate::kernel::time::Tick;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TelemetryEvent {
    DecisionMade {
        tick: Tick,
        branch: Branch,
        action: Action,
    },

    /// The turn's input could not be interpreted; nothing was emitted.
    SnapshotRejected {
        tick: Tick,
        field: String,
    },
}
