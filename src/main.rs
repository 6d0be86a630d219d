use anyhow::Result;
use clap::Parser;

// ──────────────────────────────────────────────────────────────
//  Entry point
// ──────────────────────────────────────────────────────────────
fn main() -> Result<()> {
    env_logger::init();
    let args = diceware::ui::cli::Cli::parse();
    diceware::app_controller::run(args)
}
