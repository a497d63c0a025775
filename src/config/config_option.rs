use crate::context::ContextState;

/// Some configuration option, together with the range of values the option may take.
#[derive(Clone)]
pub struct ConfigOption<T> {
    /// The name of the option, as used by external tools such as the CLI.
    pub name: &'static str,

    /// The minimum permitted value.
    pub min: T,

    /// The maximum permitted value.
    pub max: T,

    /// The latest context state in which revising the option is reasonable.
    pub max_state: ContextState,

    /// The current value.
    pub value: T,
}

impl<T: Copy> ConfigOption<T> {
    /// The (min, max) pair of permitted values.
    pub fn min_max(&self) -> (T, T) {
        (self.min, self.max)
    }
}
