//! Actions a scenario can perform on a session

use hamlet_core::entity::Direction;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ScenarioAction {
    // === INPUT ===
    /// Hold a direction down
    Press { direction: Direction },

    /// Let a direction go
    Release { direction: Direction },

    /// Apply a named edge such as `"up-press"` (the host event names)
    Edge { name: String },

    /// Release every direction
    ReleaseAll,

    // === CONTROL FLOW ===
    /// Run this many ticks with the current input
    WaitTicks { ticks: u64 },

    /// Write a message to the execution log
    Log { message: String },

    /// Run nested actions in order
    Sequence { actions: Vec<ScenarioAction> },
}
