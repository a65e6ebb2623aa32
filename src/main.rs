use anyhow::Result;
use dayplan::commands::Cli;
use dayplan::libs::logging;

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    logging::init()?;

    Cli::menu()
}
