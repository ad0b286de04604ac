use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use seek_find::SearchOptions;

#[derive(Parser, Debug)]
#[command(name = "seek")]
#[command(about = "Find and replace text in a file")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Engine configuration file (TOML)
	#[arg(long, global = true, value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Print every match as `line:column: text`
	Find {
		#[command(flatten)]
		search: SearchArgs,

		/// File to search
		file: PathBuf,
	},
	/// Replace every match and print the result
	Replace {
		#[command(flatten)]
		search: SearchArgs,

		/// Text inserted in place of each match (taken literally)
		replacement: String,

		/// File to edit
		file: PathBuf,

		/// Write the result back to the file instead of stdout
		#[arg(long)]
		in_place: bool,
	},
}

/// Pattern and the flags that shape it.
#[derive(Args, Debug)]
pub struct SearchArgs {
	/// Text or expression to search for
	pub pattern: String,

	/// Treat the pattern as a regular expression
	#[arg(long)]
	pub regex: bool,

	/// Match case exactly
	#[arg(long)]
	pub match_case: bool,

	/// Only match whole words
	#[arg(long)]
	pub whole_word: bool,
}

impl SearchArgs {
	/// Layers the command-line flags over configured defaults. Flags only switch options on.
	pub fn options(&self, defaults: SearchOptions) -> SearchOptions {
		defaults
			.with_regex(defaults.use_regex || self.regex)
			.with_match_case(defaults.match_case || self.match_case)
			.with_whole_word(defaults.whole_word || self.whole_word)
	}
}
