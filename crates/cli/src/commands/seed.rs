use crate::commands::CommandResult;
use clientele_core::config::{AppConfig, LoadOptions};
use clientele_store::{fixtures, SeedError};

pub fn run() -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "seed",
                "config_validation",
                format!("configuration issue: {error}"),
                2,
            );
        }
    };

    match fixtures::load_from_path(&config.seed.path) {
        Ok(records) => {
            let ids: Vec<&str> = records.iter().map(|record| record.id.as_str()).collect();
            CommandResult::success(
                "seed",
                format!(
                    "seed file `{}` holds {} customer records (ids: {})",
                    config.seed.path.display(),
                    records.len(),
                    ids.join(", ")
                ),
            )
        }
        Err(error @ SeedError::ReadFile { .. }) => {
            CommandResult::failure("seed", "seed_read", error.to_string(), 4)
        }
        Err(error @ SeedError::Parse { .. }) => {
            CommandResult::failure("seed", "seed_parse", error.to_string(), 5)
        }
    }
}
