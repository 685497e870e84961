use serde::{Deserialize, Serialize};
use std::fmt;

use crate::world::{Location, ResourceKind, SampleId};

/// What a `CONNECT` refers to at the current module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectTarget {
    Sample(SampleId),
    Molecule(ResourceKind),
}

/// The single command sent back each turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Goto(Location),
    Connect(ConnectTarget),
}

impl fmt::Display for ConnectTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectTarget::Sample(id) => write!(f, "{}", id),
            ConnectTarget::Molecule(kind) => write!(f, "{}", kind),
        }
    }
}

/// Wire format: `GOTO <module>` or `CONNECT <id|molecule>`.
impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Goto(location) => write!(f, "GOTO {}", location),
            Action::Connect(target) => write!(f, "CONNECT {}", target),
        }
    }
}
