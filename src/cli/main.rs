/*!
A simple CLI interface to the library.

# Use

```sh
marten_cli [--option(=value)]* file
```

The file holds one formula per line, with sets of formulas separated by blank lines.
Lines beginning with `#` are comments.

## Options

No configuration option is required.
Of note:

- `--budget=seconds` sets the total budget shared by the sets (default 10).
- `--factoring=false` disables factoring, leaving binary resolution alone.

For full documentation of the supported options, see the source of [parse_args].
*/

use std::time::Duration;

use marten_fol::{config::Config, runner::find_inconsistent_with};

mod parse_args;
use parse_args::{parse_args, CliOptions};

mod read;
use read::read_sets;

/// Entrypoint to the CLI.
fn main() {
    let mut cli_options = CliOptions::default();
    let mut config = Config::default();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        println!("c A problem file is required.");
        std::process::exit(1);
    }

    parse_args(&args, &mut config, &mut cli_options);

    let path = args.last().unwrap();

    let sets = match read_sets(path) {
        Ok(sets) => sets,
        Err(e) => {
            println!("c Failed to read {path}: {e}");
            std::process::exit(1);
        }
    };

    println!("c {} set(s) read from {path}", sets.len());

    let budget = Duration::from_secs(cli_options.budget);
    let inconsistent = find_inconsistent_with(&sets, budget, &config);

    match inconsistent.is_empty() {
        true => println!("s no inconsistent sets"),

        false => {
            let indices = inconsistent
                .iter()
                .map(|index| index.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            println!("s inconsistent: {indices}");
        }
    }
}
