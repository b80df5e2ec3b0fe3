// crates/garage-core/src/config.rs

/// How `release` treats the per-class counter when nothing matched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CountPolicy {
    /// Decrement after every release attempt, found or not.
    /// Counters can go negative; this matches the historical garage tool.
    #[default]
    Legacy,
    /// Decrement only when a vehicle was actually removed.
    Strict,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GarageConfig {
    pub count_policy: CountPolicy,
}

impl GarageConfig {
    pub fn strict() -> Self {
        Self {
            count_policy: CountPolicy::Strict,
        }
    }
}
