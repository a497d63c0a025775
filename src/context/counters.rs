use std::time::Duration;

/// Counts for various things which count, roughly.
pub struct Counters {
    /// The total number of iterations through a solve.
    pub total_iterations: usize,

    /// A count of every resolvent derived during a solve, fresh or not.
    pub resolvents: usize,

    /// A count of every factor derived during a solve, fresh or not.
    pub factors: usize,

    /// A count of tautologous clauses set aside rather than stored.
    pub tautologies: usize,

    /// The time taken during a solve.
    pub time: Duration,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            total_iterations: 0,
            resolvents: 0,
            factors: 0,
            tautologies: 0,

            time: Duration::from_secs(0),
        }
    }
}
