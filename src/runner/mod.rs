/*!
Examination of many formula sets, each on its own worker and within a shared budget.

Each set is independent: a worker thread builds a fresh context, adds every formula of the set, and solves.
The budget is split evenly, each worker receiving `budget / N` as its time limit, and each carries a deadline callback checked every solve iteration, so a worker concludes promptly once its slice is spent.

Workers are fault-isolated.
A set whose formulas fail to lex, parse, or compile is reported consistent and the remaining sets proceed; likewise a worker which panics is absorbed when joined.
The only signal for a set is membership of its index in the returned list.

# Example

```rust
# use marten_fol::runner::find_inconsistent;
# use std::time::Duration;
let sets = vec![
    vec!["(FORALL x (p x))".to_string(), "(NOT (p a))".to_string()],
    vec!["(p a)".to_string(), "(p b)".to_string()],
];

assert_eq!(find_inconsistent(&sets, Duration::from_secs(2)), vec![0]);
```
*/

use std::time::{Duration, Instant};

use crate::{
    config::Config,
    context::Context,
    misc::log::targets,
    reports::Report,
};

/// The indices of the inconsistent sets among `sets`, in ascending order.
///
/// Each set receives an even share of `budget` as its time limit.
/// A set is reported inconsistent only if its refutation completes within the share; a timeout, a malformed formula, or a worker failure all leave the set out of the result.
pub fn find_inconsistent(sets: &[Vec<String>], budget: Duration) -> Vec<usize> {
    find_inconsistent_with(sets, budget, &Config::default())
}

/// As [find_inconsistent], with each worker configured by a copy of `config` rather than the default configuration.
///
/// The time limit of `config` is overwritten with the worker's share of `budget`.
pub fn find_inconsistent_with(sets: &[Vec<String>], budget: Duration, config: &Config) -> Vec<usize> {
    if sets.is_empty() {
        return Vec::default();
    }

    // An even split, kept positive so every worker may at least begin.
    let share = budget / sets.len() as u32;
    let share = share.max(Duration::from_millis(1));

    let mut workers = Vec::default();
    for (index, set) in sets.iter().enumerate() {
        let set = set.clone();
        let config = config.clone();
        workers.push((
            index,
            std::thread::spawn(move || examine_set(index, &set, share, config)),
        ));
    }

    let mut inconsistent = Vec::default();
    for (index, worker) in workers {
        match worker.join() {
            Ok(true) => inconsistent.push(index),

            Ok(false) => {}

            Err(_) => {
                log::warn!(target: targets::RUNNER, "The worker for set {index} panicked");
            }
        }
    }

    inconsistent.sort_unstable();
    inconsistent
}

/// Whether `set` was refuted within `share`.
fn examine_set(index: usize, set: &[String], share: Duration, mut config: Config) -> bool {
    config.time_limit.value = share;

    let mut ctx = Context::from_config(config);

    let deadline = Instant::now() + share;
    ctx.set_callback_terminate(Box::new(move || deadline <= Instant::now()));

    for source in set {
        if let Err(e) = ctx.add_formula(source) {
            log::info!(target: targets::RUNNER, "Set {index} skipped: {e:?}");
            return false;
        }
    }

    let report = match ctx.solve() {
        Ok(report) => report,

        Err(e) => {
            log::info!(target: targets::RUNNER, "Set {index} skipped during solve: {e:?}");
            return false;
        }
    };

    log::info!(target: targets::RUNNER, "Set {index}: {report}");
    matches!(report, Report::Unsatisfiable)
}
