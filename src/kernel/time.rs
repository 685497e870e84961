use serde::{Deserialize, Serialize};

/// Logical game turn. Advanced once per `tick_step`, before anything else runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Tick {
    pub turn: u64,
}

impl Tick {
    pub fn new() -> Self {
        Tick { turn: 0 }
    }

    pub fn next(&self) -> Self {
        Tick { turn: self.turn + 1 }
    }
}
