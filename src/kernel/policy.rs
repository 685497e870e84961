//! Greedy sample-gathering policy.
//!
//! The agent's location is the state; each turn evaluates exactly one
//! transition and yields exactly one [`Action`]. Precedence:
//!
//! 1. At the laboratory: turn in the first affordable carried sample, or leave.
//! 2. Elsewhere: fetch a new sample from the pool if one fits the carry limit
//!    and cost budget, otherwise collect the first missing molecule, otherwise
//!    head to the laboratory.

use serde::{Deserialize, Serialize};

use super::action::{Action, ConnectTarget};
use super::agent::Agent;
use crate::world::{Location, Ownership, ResourceKind, Sample, WorldSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Most samples the agent will hold at once.
    pub carry_limit: usize,
    /// Ceiling on the summed total cost of carried samples plus a new one.
    pub cost_budget: u32,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            carry_limit: 3,
            cost_budget: 10,
        }
    }
}

/// Where policy diagnostics go. Injected per decision so nothing writes to a
/// process-wide stream.
pub trait DiagnosticSink {
    fn note(&mut self, line: String);
}

impl DiagnosticSink for Vec<String> {
    fn note(&mut self, line: String) {
        self.push(line);
    }
}

/// Which rule produced the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    DeliverSample,
    LaboratoryEmpty,
    /// Holding samples at the laboratory that cannot be paid for.
    LaboratoryFallback,
    SeekSample,
    TakeSample,
    SeekMolecules,
    CollectMolecule,
    SeekLaboratory,
    ProcessSample,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub action: Action,
    pub branch: Branch,
}

#[derive(Debug, Clone, Default)]
pub struct Policy {
    config: PolicyConfig,
}

impl Policy {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Picks this turn's action, updating the agent's belief as it goes.
    pub fn decide(
        &self,
        agent: &mut Agent,
        snapshot: &WorldSnapshot,
        sink: &mut dyn DiagnosticSink,
    ) -> Decision {
        if agent.location == Location::Laboratory {
            return self.at_laboratory(agent, sink);
        }

        if let Some(candidate) = self.next_sample(agent, snapshot.samples()) {
            sink.note(format!(
                "candidate sample {} (cost {}, committed {})",
                candidate.id,
                candidate.total_cost(),
                agent.inventory.committed_cost()
            ));
            if agent.location != Location::Diagnosis {
                return travel(agent, Location::Diagnosis, Branch::SeekSample);
            }
            return Decision {
                action: Action::Connect(ConnectTarget::Sample(candidate.id)),
                branch: Branch::TakeSample,
            };
        }

        if !agent.inventory.can_afford_all() {
            let kind = agent.inventory.first_missing().unwrap_or(ResourceKind::A);
            if agent.location != Location::Molecules {
                return travel(agent, Location::Molecules, Branch::SeekMolecules);
            }
            agent.inventory.add(kind);
            sink.note(format!(
                "requesting {} (now {}, need {})",
                kind,
                agent.inventory.count(kind),
                agent.inventory.required(kind)
            ));
            return Decision {
                action: Action::Connect(ConnectTarget::Molecule(kind)),
                branch: Branch::CollectMolecule,
            };
        }

        self.process_sample(agent)
    }

    /// The pool sample to fetch next, if any.
    ///
    /// Samples are stable-sorted by total cost, highest first, and the last
    /// shared one within budget wins. Equal-cost ties therefore go to the one
    /// appearing later in the input.
    pub fn next_sample<'a>(&self, agent: &Agent, samples: &'a [Sample]) -> Option<&'a Sample> {
        if agent.inventory.samples().len() >= self.config.carry_limit {
            return None;
        }

        let committed = agent.inventory.committed_cost();
        let mut ranked: Vec<&Sample> = samples.iter().collect();
        ranked.sort_by(|a, b| b.total_cost().cmp(&a.total_cost()));

        let budget = u64::from(self.config.cost_budget);
        ranked.into_iter().rev().find(|s| {
            s.ownership == Ownership::Shared && committed.saturating_add(s.total_cost()) <= budget
        })
    }

    fn at_laboratory(&self, agent: &mut Agent, sink: &mut dyn DiagnosticSink) -> Decision {
        let inventory = &agent.inventory;
        if let Some(sample) = inventory.samples().iter().find(|s| inventory.can_afford(s)) {
            return Decision {
                action: Action::Connect(ConnectTarget::Sample(sample.id)),
                branch: Branch::DeliverSample,
            };
        }

        if inventory.samples().is_empty() {
            return travel(agent, Location::Diagnosis, Branch::LaboratoryEmpty);
        }

        sink.note(format!(
            "at laboratory with {} unaffordable samples",
            inventory.samples().len()
        ));
        travel(agent, Location::Molecules, Branch::LaboratoryFallback)
    }

    fn process_sample(&self, agent: &mut Agent) -> Decision {
        let first = agent.inventory.samples().first().map(|s| s.id);
        match first {
            Some(id) if agent.location == Location::Laboratory => Decision {
                action: Action::Connect(ConnectTarget::Sample(id)),
                branch: Branch::ProcessSample,
            },
            _ => travel(agent, Location::Laboratory, Branch::SeekLaboratory),
        }
    }
}

fn travel(agent: &mut Agent, location: Location, branch: Branch) -> Decision {
    agent.move_to(location);
    Decision {
        action: Action::Goto(location),
        branch,
    }
}
