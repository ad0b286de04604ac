//! `seek`: find and replace in a file from the command line.
//!
//! Drives the same [`FindSession`](seek_find::FindSession) an editor would,
//! with a [`TextBuffer`](seek_find::TextBuffer) standing in for the editor.

mod cli;
mod commands;

use clap::Parser;
use cli::Cli;
use seek_find::FindConfig;
use tracing::debug;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	setup_tracing(cli.verbose);

	let config = match &cli.config {
		Some(path) => FindConfig::load(path)?,
		None => FindConfig::default(),
	};
	debug!(?config, "configuration");

	commands::run(cli.command, &config)
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_env("SEEK_LOG")
		.or_else(|_| EnvFilter::try_from_default_env())
		.unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(verbose)
		.init();
}
