use anyhow::Result;
use contrib_graph::cli::Cli;

fn main() -> Result<()> {
    contrib_graph::logging::setup_logger();
    let cli = Cli::parse();
    cli.execute()
}
