use std::io;

use anyhow::Context;
use clap::Parser;

use mochila_cli::{Cli, Session};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    mochila_observability::init(cli.log_format());

    let config = cli.session_config();
    tracing::info!(?config, "starting session");

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), config);
    session.run().context("menu session failed")?;

    tracing::info!(items = session.inventory().len(), "session ended");
    Ok(())
}
