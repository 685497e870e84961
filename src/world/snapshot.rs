use serde::{Deserialize, Serialize};

use super::types::*;
use crate::error::CoreError;

/// One player line exactly as it came off the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPlayer {
    pub location: String,
    pub eta: i32,
    pub health: i32,
    pub storage: [u32; NUM_RESOURCES],
    pub expertise: [u32; NUM_RESOURCES],
}

/// One sample line exactly as it came off the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSample {
    pub id: SampleId,
    pub owner: i8,
    pub rank: i32,
    pub expertise_gain: String,
    pub health: i32,
    pub cost: [u32; NUM_RESOURCES],
}

/// A full turn of already-tokenized input, before any token is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTurn {
    pub me: RawPlayer,
    pub opponent: RawPlayer,
    pub available: [u32; NUM_RESOURCES],
    pub samples: Vec<RawSample>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub location: Location,
    /// Turns left before arriving at `location`.
    pub eta: i32,
    pub health: i32,
    pub storage: ResourceVector,
    pub expertise: ResourceVector,
}

impl PlayerState {
    fn from_raw(raw: RawPlayer) -> Result<Self, CoreError> {
        Ok(Self {
            location: Location::from_token(&raw.location)?,
            eta: raw.eta,
            health: raw.health,
            storage: raw.storage.into(),
            expertise: raw.expertise.into(),
        })
    }
}

/// Immutable view of one turn. Sample order is preserved from the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    me: PlayerState,
    opponent: PlayerState,
    available: ResourceVector,
    samples: Vec<Sample>,
}

impl WorldSnapshot {
    /// Interprets every wire token, failing on the first one it does not know.
    pub fn from_raw(raw: RawTurn) -> Result<Self, CoreError> {
        let me = PlayerState::from_raw(raw.me)?;
        let opponent = PlayerState::from_raw(raw.opponent)?;
        let samples = raw
            .samples
            .into_iter()
            .map(sample_from_raw)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            me,
            opponent,
            available: raw.available.into(),
            samples,
        })
    }

    pub fn me(&self) -> &PlayerState {
        &self.me
    }

    pub fn opponent(&self) -> &PlayerState {
        &self.opponent
    }

    pub fn available(&self) -> &ResourceVector {
        &self.available
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn owned_by(&self, ownership: Ownership) -> impl Iterator<Item = &Sample> + '_ {
        self.samples.iter().filter(move |s| s.ownership == ownership)
    }
}

impl TryFrom<RawTurn> for WorldSnapshot {
    type Error = CoreError;

    fn try_from(raw: RawTurn) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

fn sample_from_raw(raw: RawSample) -> Result<Sample, CoreError> {
    // "0" marks a sample whose expertise has not been diagnosed yet.
    let expertise_gain = match raw.expertise_gain.as_str() {
        "0" => None,
        token => Some(
            ResourceKind::from_symbol(token)
                .map_err(|_| CoreError::malformed("expertise gain", token))?,
        ),
    };

    Ok(Sample {
        id: raw.id,
        ownership: Ownership::from_code(raw.owner)?,
        rank: raw.rank,
        expertise_gain,
        health: raw.health,
        cost: raw.cost.into(),
    })
}
