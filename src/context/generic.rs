use crate::{
    config::Config,
    context::{callbacks::CallbackTerminate, ContextState, Counters, NameSupply},
    db::clause::ClauseDB,
    reports::Report,
};

/// A generic context, parameterised to a source of randomness.
///
/// Requires a source of [rng](rand::Rng) which (also) implements [Default](std::default::Default).
///
/// For a context with the canonical source of randomness, see [Context](crate::context::Context) and [from_config](crate::context::Context::from_config).
pub struct GenericContext<R: rand::Rng + std::default::Default> {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The clause database.
    pub clause_db: ClauseDB,

    /// The supply of fresh names and the record of bound names seen, shared by every formula added to the context.
    pub names: NameSupply,

    /// The state of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,

    /// An optional callback, checked each solve iteration, to terminate the solve.
    pub callback_terminate: Option<Box<CallbackTerminate>>,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Creates a context with the given configuration and source of randomness.
    pub fn with_rng(config: Config, rng: R) -> Self {
        let clause_db = ClauseDB::new(&config);

        Self {
            config,
            counters: Counters::default(),
            clause_db,
            names: NameSupply::default(),
            state: ContextState::Configuration,
            rng,
            callback_terminate: None,
        }
    }

    /// The report of the context, derived from its state.
    pub fn report(&self) -> Report {
        Report::from(self.state)
    }
}
