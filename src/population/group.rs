use super::InstanceRecord;
use crate::ornament::OrnamentKind;

/// All records of one kind, in generation order.
///
/// The index of a record is its slot in the kind's render batch.
#[derive(Debug, Clone)]
pub struct TypeGroup {
    kind: OrnamentKind,
    records: Vec<InstanceRecord>,
}

impl TypeGroup {
    fn new(kind: OrnamentKind) -> Self {
        Self { kind, records: Vec::new() }
    }

    pub fn kind(&self) -> OrnamentKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&InstanceRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InstanceRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[InstanceRecord] {
        &self.records
    }
}

/// Immutable set of eight type groups, one per kind in batch order
#[derive(Debug, Clone)]
pub struct Population {
    groups: Vec<TypeGroup>,
}

impl Default for Population {
    fn default() -> Self {
        Self::from_records(Vec::new())
    }
}

impl Population {
    /// Partition records by kind, keeping their relative order
    pub fn from_records(records: impl IntoIterator<Item = InstanceRecord>) -> Self {
        let mut groups: Vec<TypeGroup> = OrnamentKind::ALL.iter().map(|k| TypeGroup::new(*k)).collect();
        for record in records {
            groups[record.kind.index()].records.push(record);
        }
        Self { groups }
    }

    pub fn group(&self, kind: OrnamentKind) -> &TypeGroup {
        &self.groups[kind.index()]
    }

    pub fn groups(&self) -> &[TypeGroup] {
        &self.groups
    }

    /// Total instance count across all groups
    pub fn total(&self) -> usize {
        self.groups.iter().map(|g| g.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Iterate over every record, group by group
    pub fn iter(&self) -> impl Iterator<Item = &InstanceRecord> {
        self.groups.iter().flat_map(|g| g.iter())
    }

    /// Per-kind instance counts in batch order
    pub fn counts(&self) -> [usize; OrnamentKind::COUNT] {
        let mut counts = [0; OrnamentKind::COUNT];
        for group in &self.groups {
            counts[group.kind().index()] = group.len();
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;

    fn record(kind: OrnamentKind, tag: f32) -> InstanceRecord {
        InstanceRecord {
            chaos_position: Vec3::new(tag, 0.0, 0.0),
            target_position: Vec3::new(0.0, tag, 0.0),
            kind,
            color: Vec3::ONE,
            scale: 0.2,
            speed: 1.0,
            rotation_seed: (0.0, 0.0),
        }
    }

    #[test]
    fn test_empty_population_has_eight_groups() {
        let pop = Population::default();
        assert_eq!(pop.groups().len(), OrnamentKind::COUNT);
        assert_eq!(pop.total(), 0);
        assert!(pop.groups().iter().all(|g| g.is_empty()));
    }

    #[test]
    fn test_partition_preserves_order() {
        let pop = Population::from_records(vec![
            record(OrnamentKind::Star, 1.0),
            record(OrnamentKind::Ball, 2.0),
            record(OrnamentKind::Star, 3.0),
            record(OrnamentKind::Wreath, 4.0),
            record(OrnamentKind::Star, 5.0),
        ]);

        assert_eq!(pop.total(), 5);
        let stars = pop.group(OrnamentKind::Star);
        assert_eq!(stars.kind(), OrnamentKind::Star);
        let tags: Vec<f32> = stars.iter().map(|r| r.chaos_position.x).collect();
        assert_eq!(tags, vec![1.0, 3.0, 5.0]);
        assert_eq!(pop.group(OrnamentKind::Ball).len(), 1);
        assert!(pop.group(OrnamentKind::Gift).is_empty());
        assert_eq!(pop.counts()[OrnamentKind::Star.index()], 3);
    }

    #[test]
    fn test_groups_hold_only_their_kind() {
        let kinds = [OrnamentKind::Bell, OrnamentKind::Candy, OrnamentKind::Bell];
        let pop = Population::from_records(kinds.iter().map(|k| record(*k, 0.0)));
        for group in pop.groups() {
            assert!(group.iter().all(|r| r.kind == group.kind()));
        }
    }
}
