use std::collections::HashMap;
use std::fs::File;

use anyhow::{Context, Result};
use clap::ArgMatches;
use serde::Deserialize;

use spatialtest_core::{DomainMap, SpatialTest, TestResult};

/// Shape of the YAML config file. The domain mapping arrives unordered; the
/// core model sorts it by boundary.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Config {
    variants: Vec<u32>,
    domains: HashMap<String, u32>,
    length: Option<u32>,
}

pub fn run_spatialtest(matches: &ArgMatches) -> Result<()> {
    let config_path = matches
        .get_one::<String>("config")
        .expect("A path to a config file is required.");

    let n_perms: u64 = matches
        .get_one::<String>("permutations")
        .unwrap()
        .parse()
        .context("--permutations must be a non-negative integer")?;

    let seed: Option<u64> = matches
        .get_one::<String>("seed")
        .map(|s| s.parse())
        .transpose()
        .context("--seed must be a non-negative integer")?;

    let result = run_from_config_file(config_path, n_perms, seed)?;

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{result}");
    }

    Ok(())
}

fn run_from_config_file(
    config_path: &str,
    n_perms: u64,
    seed: Option<u64>,
) -> Result<TestResult> {
    let file = File::open(config_path)
        .with_context(|| format!("Failed to open config file: {}", config_path))?;
    let config: Config = serde_yaml::from_reader(file)
        .with_context(|| format!("Failed to parse config file: {}", config_path))?;

    let domains = DomainMap::new(config.domains)?;
    let test = SpatialTest::new(config.variants, domains, config.length)?;

    let result = match seed {
        Some(seed) => test.run_seeded(n_perms, seed)?,
        None => test.run(n_perms)?,
    };

    Ok(result)
}
