use super::action::Action;
use super::policy::Decision;
use super::time::Tick;

pub struct Scheduler;

/// Work handed back to the driver. The kernel never touches stdout itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideEffect {
    Log(String),
    Emit(Action),
}

impl Scheduler {
    /// Pure projection: diagnostics first, then the one action for the turn.
    pub fn schedule(&self, decision: Decision, notes: Vec<String>, tick: Tick) -> Vec<SideEffect> {
        let mut effects: Vec<SideEffect> = notes
            .into_iter()
            .map(|note| SideEffect::Log(format!("[turn {}] {}", tick.turn, note)))
            .collect();

        effects.push(SideEffect::Log(format!(
            "[turn {}] {:?} -> {}",
            tick.turn, decision.branch, decision.action
        )));
        effects.push(SideEffect::Emit(decision.action));
        effects
    }
}
