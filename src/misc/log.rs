/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [compiler passes](crate::compile)
    pub const COMPILE: &str = "compile";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to [resolution](crate::procedures)
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to the [runner](crate::runner)
    pub const RUNNER: &str = "runner";
}
