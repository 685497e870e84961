use crate::world::{Location, Ownership, ResourceKind, ResourceVector, Sample, WorldSnapshot};

/// Molecules in storage plus the samples currently carried.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    counts: ResourceVector,
    samples: Vec<Sample>,
}

impl Inventory {
    pub fn new(counts: ResourceVector, samples: Vec<Sample>) -> Self {
        Self { counts, samples }
    }

    pub fn counts(&self) -> &ResourceVector {
        &self.counts
    }

    pub fn count(&self, kind: ResourceKind) -> u32 {
        self.counts[kind]
    }

    pub fn add(&mut self, kind: ResourceKind) {
        self.counts[kind] = self.counts[kind].saturating_add(1);
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Summed total cost of every carried sample.
    pub fn committed_cost(&self) -> u64 {
        self.samples.iter().map(Sample::total_cost).sum()
    }

    /// Summed cost of `kind` across every carried sample.
    pub fn required(&self, kind: ResourceKind) -> u64 {
        self.samples.iter().map(|s| u64::from(s.cost[kind])).sum()
    }

    pub fn can_afford(&self, sample: &Sample) -> bool {
        ResourceKind::ALL
            .iter()
            .all(|&kind| self.counts[kind] >= sample.cost[kind])
    }

    /// Each sample is checked against the full storage on its own; molecules
    /// are not reserved between samples.
    pub fn can_afford_all(&self) -> bool {
        self.samples.iter().all(|s| self.can_afford(s))
    }

    /// First kind, in A..E order, whose summed requirement exceeds storage.
    pub fn first_missing(&self) -> Option<ResourceKind> {
        ResourceKind::ALL
            .into_iter()
            .find(|&kind| self.required(kind) > u64::from(self.counts[kind]))
    }
}

/// The agent's belief for the current turn.
///
/// Rebuilt from every snapshot; nothing here outlives the turn that built it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agent {
    pub location: Location,
    pub health: i32,
    pub inventory: Inventory,
}

impl Agent {
    pub fn new(location: Location, health: i32, inventory: Inventory) -> Self {
        Self {
            location,
            health,
            inventory,
        }
    }

    pub fn from_snapshot(snapshot: &WorldSnapshot) -> Self {
        let me = snapshot.me();
        let carried = snapshot.owned_by(Ownership::Mine).cloned().collect();
        Self::new(me.location, me.health, Inventory::new(me.storage, carried))
    }

    pub fn move_to(&mut self, location: Location) {
        self.location = location;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: i32, cost: [u32; 5]) -> Sample {
        Sample {
            id,
            ownership: Ownership::Mine,
            rank: 1,
            expertise_gain: None,
            health: 1,
            cost: cost.into(),
        }
    }

    #[test]
    fn affordability_uses_undiminished_storage() {
        let inv = Inventory::new(
            [2, 0, 0, 0, 0].into(),
            vec![sample(1, [2, 0, 0, 0, 0]), sample(2, [2, 0, 0, 0, 0])],
        );
        // Both pass individually even though together they need 4 A.
        assert!(inv.can_afford_all());
        assert_eq!(inv.first_missing(), Some(ResourceKind::A));
    }

    #[test]
    fn first_missing_scans_in_fixed_order() {
        let inv = Inventory::new(
            [3, 0, 1, 0, 0].into(),
            vec![sample(1, [1, 0, 2, 0, 1]), sample(2, [1, 0, 0, 0, 0])],
        );
        assert!(!inv.can_afford_all());
        assert_eq!(inv.first_missing(), Some(ResourceKind::C));
        assert_eq!(inv.committed_cost(), 5);
        assert_eq!(inv.required(ResourceKind::A), 2);
    }

    #[test]
    fn empty_inventory_is_trivially_affordable() {
        let inv = Inventory::default();
        assert!(inv.can_afford_all());
        assert_eq!(inv.first_missing(), None);
        assert_eq!(inv.committed_cost(), 0);
    }
}
