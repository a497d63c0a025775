/*!
Configuration of a context.

All configuration for a context is contained within [Config].
Each option is a [ConfigOption], recording the permitted range of the option alongside its value and the latest context state in which revising the option is reasonable.
*/

mod config_option;
pub use config_option::ConfigOption;

use std::time::Duration;

use crate::context::ContextState;

/// The probability of preferring a random candidate clause over the least candidate.
pub type RandomChoiceBias = f64;

/// The primary configuration structure.
#[derive(Clone)]
pub struct Config {
    /// A ceiling on the count of stored clauses.
    ///
    /// Saturation grows the clause database without bound on some inputs, and the ceiling caps the memory spent on a solve.
    /// A solve which hits the ceiling concludes with an unknown report.
    pub clause_limit: ConfigOption<usize>,

    /// Whether factors of a clause are derived alongside its resolvents.
    ///
    /// Binary resolution alone is not refutation complete; resolution with factoring is.
    pub factoring: ConfigOption<bool>,

    /// The probability of taking a random clause from among the shortest candidates, rather than the least such clause.
    pub random_choice_bias: ConfigOption<RandomChoiceBias>,

    /// The time limit for a solve.
    ///
    /// A zero limit is read as no limit.
    pub time_limit: ConfigOption<Duration>,
}

impl Default for Config {
    /// The default configuration is set to provide quick, deterministic, results on small formula sets.
    fn default() -> Self {
        Config {
            clause_limit: ConfigOption {
                name: "clause_limit",
                min: 1,
                max: usize::MAX,
                max_state: ContextState::Configuration,
                value: 1 << 16,
            },

            factoring: ConfigOption {
                name: "factoring",
                min: false,
                max: true,
                max_state: ContextState::Configuration,
                value: true,
            },

            random_choice_bias: ConfigOption {
                name: "random_choice_bias",
                min: 0.0,
                max: 1.0,
                max_state: ContextState::Configuration,
                value: 0.0,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: Duration::ZERO,
                max: Duration::MAX,
                max_state: ContextState::Configuration,
                value: Duration::ZERO,
            },
        }
    }
}
