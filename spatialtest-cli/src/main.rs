mod cli;
mod handlers;

use anyhow::Result;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "spatialtest";
}

fn main() -> Result<()> {
    let app = cli::create_spatialtest_cli();
    let matches = app.get_matches();
    handlers::run_spatialtest(&matches)
}
