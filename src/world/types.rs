use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::CoreError;

pub const NUM_RESOURCES: usize = 5;

pub type SampleId = i32;

/// One of the five molecule types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    A,
    B,
    C,
    D,
    E,
}

impl ResourceKind {
    /// Fixed scan order used whenever the policy looks for a missing molecule.
    pub const ALL: [ResourceKind; NUM_RESOURCES] = [
        ResourceKind::A,
        ResourceKind::B,
        ResourceKind::C,
        ResourceKind::D,
        ResourceKind::E,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn symbol(self) -> &'static str {
        match self {
            ResourceKind::A => "A",
            ResourceKind::B => "B",
            ResourceKind::C => "C",
            ResourceKind::D => "D",
            ResourceKind::E => "E",
        }
    }

    pub fn from_symbol(token: &str) -> Result<Self, CoreError> {
        match token {
            "A" => Ok(ResourceKind::A),
            "B" => Ok(ResourceKind::B),
            "C" => Ok(ResourceKind::C),
            "D" => Ok(ResourceKind::D),
            "E" => Ok(ResourceKind::E),
            other => Err(CoreError::malformed("resource", other)),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The four places an agent can stand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Start,
    /// Where samples are picked up from the shared pool.
    Diagnosis,
    /// Where molecules are requested one at a time.
    Molecules,
    /// Where affordable samples are turned in.
    Laboratory,
}

impl Location {
    pub fn token(self) -> &'static str {
        match self {
            Location::Start => "START_POS",
            Location::Diagnosis => "DIAGNOSIS",
            Location::Molecules => "MOLECULES",
            Location::Laboratory => "LABORATORY",
        }
    }

    pub fn from_token(token: &str) -> Result<Self, CoreError> {
        match token {
            "START_POS" => Ok(Location::Start),
            "DIAGNOSIS" => Ok(Location::Diagnosis),
            "MOLECULES" => Ok(Location::Molecules),
            "LABORATORY" => Ok(Location::Laboratory),
            other => Err(CoreError::malformed("location", other)),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Who currently holds a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ownership {
    Mine,
    Opponent,
    /// Still in the shared pool, free to take.
    Shared,
}

impl Ownership {
    pub fn code(self) -> i8 {
        match self {
            Ownership::Mine => 0,
            Ownership::Opponent => 1,
            Ownership::Shared => -1,
        }
    }

    pub fn from_code(code: i8) -> Result<Self, CoreError> {
        match code {
            0 => Ok(Ownership::Mine),
            1 => Ok(Ownership::Opponent),
            -1 => Ok(Ownership::Shared),
            other => Err(CoreError::malformed("owner", other.to_string())),
        }
    }
}

/// Per-molecule counts, indexed by [`ResourceKind`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceVector(pub [u32; NUM_RESOURCES]);

impl ResourceVector {
    /// Summed in `u64` so arbitrary wire counts cannot overflow.
    pub fn total(&self) -> u64 {
        self.0.iter().map(|&n| u64::from(n)).sum()
    }
}

impl From<[u32; NUM_RESOURCES]> for ResourceVector {
    fn from(counts: [u32; NUM_RESOURCES]) -> Self {
        Self(counts)
    }
}

impl Index<ResourceKind> for ResourceVector {
    type Output = u32;

    fn index(&self, kind: ResourceKind) -> &u32 {
        &self.0[kind.index()]
    }
}

impl IndexMut<ResourceKind> for ResourceVector {
    fn index_mut(&mut self, kind: ResourceKind) -> &mut u32 {
        &mut self.0[kind.index()]
    }
}

/// A task-like sample: pay its molecule cost at the laboratory to earn health.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub id: SampleId,
    pub ownership: Ownership,
    pub rank: i32,
    /// Molecule expertise granted on delivery; `None` while undiagnosed.
    pub expertise_gain: Option<ResourceKind>,
    pub health: i32,
    pub cost: ResourceVector,
}

impl Sample {
    pub fn total_cost(&self) -> u64 {
        self.cost.total()
    }
}
