use serde::Serialize;
use std::collections::VecDeque;

use super::event::TelemetryEvent;
use crate::kernel::action::{Action, ConnectTarget};
use crate::kernel::policy::Branch;
use crate::world::{Location, NUM_RESOURCES};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TelemetrySnapshot {
    pub turns: u64,
    pub rejected_turns: u64,
    pub moves: MoveStats,
    pub sample_stats: SampleStats,
    /// Molecule requests, indexed A..E.
    pub molecules_requested: [u64; NUM_RESOURCES],
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MoveStats {
    pub to_start: u64,
    pub to_diagnosis: u64,
    pub to_molecules: u64,
    pub to_laboratory: u64,
    /// Moves away from the laboratory while holding unpayable samples.
    pub fallbacks: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SampleStats {
    pub taken: u64,
    pub delivered: u64,
}

pub fn compute_snapshot(events: &VecDeque<TelemetryEvent>) -> TelemetrySnapshot {
    let mut snap = TelemetrySnapshot::default();

    for event in events {
        match event {
            TelemetryEvent::DecisionMade { branch, action, .. } => {
                snap.turns += 1;
                match action {
                    Action::Goto(location) => {
                        let slot = match location {
                            Location::Start => &mut snap.moves.to_start,
                            Location::Diagnosis => &mut snap.moves.to_diagnosis,
                            Location::Molecules => &mut snap.moves.to_molecules,
                            Location::Laboratory => &mut snap.moves.to_laboratory,
                        };
                        *slot += 1;
                        if *branch == Branch::LaboratoryFallback {
                            snap.moves.fallbacks += 1;
                        }
                    }
                    Action::Connect(ConnectTarget::Molecule(kind)) => {
                        snap.molecules_requested[kind.index()] += 1;
                    }
                    Action::Connect(ConnectTarget::Sample(_)) => match branch {
                        Branch::TakeSample => snap.sample_stats.taken += 1,
                        _ => snap.sample_stats.delivered += 1,
                    },
                }
            }
            TelemetryEvent::SnapshotRejected { .. } => {
                snap.turns += 1;
                snap.rejected_turns += 1;
            }
        }
    }

    snap
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::time::Tick;
    use crate::world::ResourceKind;

    fn decided(branch: Branch, action: Action) -> TelemetryEvent {
        TelemetryEvent::DecisionMade {
            tick: Tick::new(),
            branch,
            action,
        }
    }

    #[test]
    fn tallies_each_kind_of_decision() {
        let events: VecDeque<_> = vec![
            decided(Branch::SeekSample, Action::Goto(Location::Diagnosis)),
            decided(Branch::TakeSample, Action::Connect(ConnectTarget::Sample(3))),
            decided(Branch::SeekMolecules, Action::Goto(Location::Molecules)),
            decided(
                Branch::CollectMolecule,
                Action::Connect(ConnectTarget::Molecule(ResourceKind::B)),
            ),
            decided(Branch::SeekLaboratory, Action::Goto(Location::Laboratory)),
            decided(Branch::DeliverSample, Action::Connect(ConnectTarget::Sample(3))),
            decided(Branch::LaboratoryFallback, Action::Goto(Location::Molecules)),
            TelemetryEvent::SnapshotRejected {
                tick: Tick::new(),
                field: "location".into(),
            },
        ]
        .into();

        let snap = compute_snapshot(&events);
        assert_eq!(snap.turns, 8);
        assert_eq!(snap.rejected_turns, 1);
        assert_eq!(snap.moves.to_diagnosis, 1);
        assert_eq!(snap.moves.to_molecules, 2);
        assert_eq!(snap.moves.fallbacks, 1);
        assert_eq!(snap.sample_stats.taken, 1);
        assert_eq!(snap.sample_stats.delivered, 1);
        assert_eq!(snap.molecules_requested, [0, 1, 0, 0, 0]);
    }
}
