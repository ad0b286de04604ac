use std::io::Write;
use std::path::Path;

use anyhow::Context;
use ropey::Rope;
use seek_find::{CompiledPattern, FindConfig, FindSession, TextBuffer, locate_all};
use tracing::info;

use crate::cli::{Command, SearchArgs};

#[cfg(test)]
mod tests;

/// One match as printed by `seek find`, with one-based line and column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundAt {
	pub line: usize,
	pub column: usize,
	pub text: String,
}

pub fn run(command: Command, config: &FindConfig) -> anyhow::Result<()> {
	let stdout = std::io::stdout();
	let mut out = stdout.lock();
	match command {
		Command::Find { search, file } => {
			let found = find_file(&file, &search, config)?;
			for hit in &found {
				writeln!(out, "{}:{}: {}", hit.line, hit.column, hit.text)?;
			}
			info!(matches = found.len(), file = %file.display(), "find finished");
		}
		Command::Replace {
			search,
			replacement,
			file,
			in_place,
		} => {
			let text = read(&file)?;
			let (result, count) = replace_text(&text, &search, &replacement, config)?;
			if in_place {
				std::fs::write(&file, &result)
					.with_context(|| format!("failed to write {}", file.display()))?;
			} else {
				out.write_all(result.as_bytes())?;
			}
			eprintln!("{count} replacement{}", if count == 1 { "" } else { "s" });
		}
	}
	out.flush()?;
	Ok(())
}

fn read(path: &Path) -> anyhow::Result<String> {
	std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

pub fn find_file(path: &Path, search: &SearchArgs, config: &FindConfig) -> anyhow::Result<Vec<FoundAt>> {
	anyhow::ensure!(!search.pattern.is_empty(), "pattern must not be empty");
	let text = read(path)?;
	let pattern = CompiledPattern::compile(&search.pattern, search.options(config.default_options))?;
	Ok(find_in(&text, &pattern))
}

/// Lists every match with its position resolved to line and column.
pub fn find_in(text: &str, pattern: &CompiledPattern) -> Vec<FoundAt> {
	let rope = Rope::from_str(text);
	locate_all(text, pattern)
		.into_iter()
		.map(|m| {
			let line = rope.char_to_line(m.start);
			FoundAt {
				line: line + 1,
				column: m.start - rope.line_to_char(line) + 1,
				text: rope.slice(m.start..m.end).to_string(),
			}
		})
		.collect()
}

/// Runs replace-all over `text` and returns the new text with the count.
pub fn replace_text(
	text: &str,
	search: &SearchArgs,
	replacement: &str,
	config: &FindConfig,
) -> anyhow::Result<(String, usize)> {
	anyhow::ensure!(!search.pattern.is_empty(), "pattern must not be empty");
	let mut buf = TextBuffer::new(text);
	let mut session = FindSession::new(*config);
	session.set_options(&mut buf, search.options(config.default_options));
	session.set_query(&mut buf, search.pattern.as_str());
	session.set_replacement(replacement);

	let count = session.replace_all(&mut buf)?;
	Ok((buf.to_string(), count))
}
