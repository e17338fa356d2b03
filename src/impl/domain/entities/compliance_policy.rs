/// Parameters of the attendance policy. The substitution priority order and
/// the Sunday-first week are fixed and not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompliancePolicy {
    /// Office days required per week.
    pub weekly_target: u32,
    /// Number of entries in the top office locations list.
    pub top_locations: usize,
}

impl Default for CompliancePolicy {
    fn default() -> Self {
        Self {
            weekly_target: 3,
            top_locations: 3,
        }
    }
}
