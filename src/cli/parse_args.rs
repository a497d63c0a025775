use marten_fol::config::Config;

/// Options relevant to the CLI rather than the library.
pub struct CliOptions {
    /// The total budget, in seconds, shared by the sets of the problem file.
    pub budget: u64,
}

impl Default for CliOptions {
    fn default() -> Self {
        CliOptions { budget: 10 }
    }
}

/// Parse CLI arguments to a [Config] struct or a [CliOptions] struct.
///
/// If an unrecognised argument or invalid option is found a message is sent and the process is terminated.
pub fn parse_args(args: &[String], cfg: &mut Config, cli_options: &mut CliOptions) {
    'arg_examination: for arg in args.iter().skip(1).rev().skip(1) {
        let mut split = arg.split("=");
        match split.next() {
            Some("--budget") => {
                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<u64>() {
                        if 0 < value {
                            println!("c budget set to: {value} seconds");
                            cli_options.budget = value;
                            continue 'arg_examination;
                        }
                    }
                }

                println!("budget requires a positive count of seconds");
                std::process::exit(1);
            }

            // The remaining cases follow a common template.
            // If a value is present, may be parsed appropriately, and is valid, the config is updated.
            //
            // Further, the cases should be in lexicographic order.
            //
            Some("--clause_limit") => {
                let (min, max) = cfg.clause_limit.min_max();

                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<usize>() {
                        if min <= value && value <= max {
                            println!("c clause_limit set to: {value}");
                            cfg.clause_limit.value = value;
                            continue 'arg_examination;
                        }
                    }
                }

                println!("clause_limit requires a value between {min} and {max}");
                std::process::exit(1);
            }

            Some("--factoring") => {
                let (min, max) = cfg.factoring.min_max();

                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<bool>() {
                        if min <= value && value <= max {
                            println!("c factoring set to: {value}");
                            cfg.factoring.value = value;
                            continue 'arg_examination;
                        }
                    }
                }

                println!("factoring requires a value between {min} and {max}");
                std::process::exit(1);
            }

            Some("--random_choice_bias") => {
                let (min, max) = cfg.random_choice_bias.min_max();

                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<f64>() {
                        if min <= value && value <= max {
                            println!("c random_choice_bias set to: {value}");
                            cfg.random_choice_bias.value = value;
                            continue 'arg_examination;
                        }
                    }
                }

                println!("random_choice_bias requires a value between {min} and {max}");
                std::process::exit(1);
            }

            Some(_) | None => {
                println!("Unable to parse argument: {arg:?}");
                std::process::exit(1);
            }
        }
    }
}
