use clap::{Arg, ArgAction, Command, arg};

use crate::consts;

pub fn create_spatialtest_cli() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Permutation testing for spatial clustering of variants and for presence in domains.")
        .arg(
            Arg::new("config")
                .required(true)
                .help("Path to a YAML config with variants, domains, and length"),
        )
        .arg(
            arg!(-p --permutations <N>)
                .required(false)
                .default_value("1000000")
                .help("Number of permutations"),
        )
        .arg(
            arg!(--seed <SEED>)
                .required(false)
                .help("Seed for the null-model sampler; omit for a fresh seed per run"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Emit the result record as JSON instead of the text report"),
        )
}
