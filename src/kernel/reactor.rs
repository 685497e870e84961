use tracing::{debug, warn};

use super::agent::Agent;
use super::policy::{Policy, PolicyConfig};
use super::scheduler::{Scheduler, SideEffect};
use super::telemetry::event::TelemetryEvent;
use super::telemetry::recorder::TelemetryRecorder;
use super::time::Tick;
use crate::error::CoreError;
use crate::world::{RawTurn, WorldSnapshot};

#[derive(Debug, Clone, Default)]
pub struct ReactorConfig {
    pub policy: PolicyConfig,
}

pub struct Reactor {
    pub policy: Policy,
    pub scheduler: Scheduler,
    pub tick: Tick,
    pub telemetry: TelemetryRecorder,
}

impl Reactor {
    pub fn new(config: ReactorConfig) -> Self {
        Self {
            policy: Policy::new(config.policy),
            scheduler: Scheduler,
            tick: Tick::new(),
            telemetry: TelemetryRecorder::new(),
        }
    }

    /// Pure turn step: one raw turn in, side effects out for the driver.
    ///
    /// The tick is advanced first. The agent's belief is rebuilt from this
    /// turn's snapshot alone, so replaying a turn gives the same action. A
    /// turn that fails to parse returns the error and produces no effects.
    pub fn tick_step(&mut self, turn: RawTurn) -> Result<Vec<SideEffect>, CoreError> {
        self.tick = self.tick.next();

        let snapshot = match WorldSnapshot::from_raw(turn) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!("Rejected turn {}: {}", self.tick.turn, err);
                let CoreError::MalformedSnapshot { field, .. } = &err;
                self.telemetry.record(TelemetryEvent::SnapshotRejected {
                    tick: self.tick,
                    field: field.to_string(),
                });
                return Err(err);
            }
        };

        let mut agent = Agent::from_snapshot(&snapshot);
        let (me, opponent) = (snapshot.me(), snapshot.opponent());
        debug!(
            "Turn {}: at {} (eta {}) carrying {} samples, storage {:?}, expertise {:?}; \
             opponent at {} (eta {}); available {:?}",
            self.tick.turn,
            agent.location,
            me.eta,
            agent.inventory.samples().len(),
            agent.inventory.counts().0,
            me.expertise.0,
            opponent.location,
            opponent.eta,
            snapshot.available().0
        );

        let mut notes = Vec::new();
        let decision = self.policy.decide(&mut agent, &snapshot, &mut notes);

        self.telemetry.record(TelemetryEvent::DecisionMade {
            tick: self.tick,
            branch: decision.branch,
            action: decision.action,
        });

        Ok(self.scheduler.schedule(decision, notes, self.tick))
    }
}
