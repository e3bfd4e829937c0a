
//////
//
// Imports
//

// Standard library
use std::io::{self, IsTerminal, Write};

// ANSI terminal library
use ansi_term::{Colour, Style};

// Local imports
use crate::*;



//////
//
// Structs
//

/// What a presentation layer shows for a single processed shader.
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct DisplayRecord {
	/// One of `Cached`, `Built` or `Error`.
	pub status: &'static str,

	/// Source path relative to the source root.
	pub sourcePath: String,

	/// Artifact path relative to the output root.
	pub artifactPath: String,

	/// Captured compiler output to echo below the status line; only populated for failures.
	pub diagnosticLines: Vec<String>
}



//////
//
// Traits
//

/// A presentation layer for the progress and results of a shader build.
pub trait Report
{
	/// Start a new titled section, e.g. for each shader kind.
	fn section (&mut self, title: &str) -> io::Result<()>;

	/// Show the result of one shader. `pad` is the column width the source path should be padded to.
	fn fileResult (&mut self, record: &DisplayRecord, pad: usize) -> io::Result<()>;

	/// Show the aggregate counts and timing of a finished run.
	fn summary (&mut self, summary: &BuildSummary) -> io::Result<()>;

	/// Show the consolidated diagnostics of a finished run. Only called if there are any.
	fn errors (&mut self, lines: &[String]) -> io::Result<()>;
}



//////
//
// Classes
//

////
// ConsoleReport

/// Writes a human-readable, optionally colorized report to a terminal-like sink.
pub struct ConsoleReport<W: Write> {
	sink: W,
	colored: bool
}
impl ConsoleReport<io::Stdout> {
	/// Report to standard output, with colors if it is a terminal.
	pub fn stdout () -> Self {
		let stdout = io::stdout();
		let colored = stdout.is_terminal();
		Self::new(stdout, colored)
	}
}
impl ConsoleReport<io::Stderr> {
	/// Report to standard error, with colors if it is a terminal.
	pub fn stderr () -> Self {
		let stderr = io::stderr();
		let colored = stderr.is_terminal();
		Self::new(stderr, colored)
	}
}
impl<W: Write> ConsoleReport<W>
{
	///
	pub fn new (sink: W, colored: bool) -> Self {
		Self { sink, colored }
	}

	/// Give back the sink, e.g. to inspect what was written.
	pub fn intoSink (self) -> W {
		self.sink
	}

	/// Show an error that prevented the build from running at all.
	pub fn fatal (&mut self, message: &str) -> io::Result<()> {
		let line = self.paint(Colour::Red.bold(), &format!("error: {message}"));
		writeln!(self.sink, "{line}")
	}

	fn paint (&self, style: Style, text: &str) -> String {
		if self.colored { style.paint(text).to_string() } else { text.to_owned() }
	}

	fn heading (&mut self, title: &str, style: Style) -> io::Result<()> {
		let underline = self.paint(style, &"-".repeat(title.chars().count()));
		let title = self.paint(style, title);
		writeln!(self.sink)?;
		writeln!(self.sink, "{title}")?;
		writeln!(self.sink, "{underline}")
	}

	fn statusStyle (status: &str) -> Style {
		match status {
			"Built" => Colour::Green.bold(),
			"Cached" => Colour::Blue.normal(),
			_ => Colour::Red.bold()
		}
	}
}
impl<W: Write> Report for ConsoleReport<W>
{
	fn section (&mut self, title: &str) -> io::Result<()> {
		self.heading(title, Colour::Cyan.normal())
	}

	fn fileResult (&mut self, record: &DisplayRecord, pad: usize) -> io::Result<()>
	{
		// Pad before painting so escape sequences don't disturb the columns
		let tag = self.paint(Self::statusStyle(record.status), &format!("{:<6}", record.status));
		writeln!(self.sink, "{tag} {:<pad$} -> {}", record.sourcePath, record.artifactPath)?;
		for line in &record.diagnosticLines {
			let line = self.paint(Colour::Yellow.normal(), line);
			writeln!(self.sink, "{line}")?;
		}
		Ok(())
	}

	fn summary (&mut self, summary: &BuildSummary) -> io::Result<()> {
		let text = self.paint(Colour::Cyan.normal(), &format!(
			"Done: {} vertex + {} fragment shaders in {:.2} s ({} built, {} cached, {} failed)",
			summary.vertex.count, summary.fragment.count, summary.elapsed.as_secs_f64(),
			summary.builtCount(), summary.cachedCount(), summary.errorCount()
		));
		writeln!(self.sink)?;
		writeln!(self.sink, "{text}")
	}

	fn errors (&mut self, lines: &[String]) -> io::Result<()>
	{
		self.heading("-- Errors", Colour::Red.normal())?;
		for line in lines {
			let line = self.paint(Colour::Red.normal(), line);
			writeln!(self.sink, "{line}")?;
		}
		Ok(())
	}
}


////
// SilentReport

/// Discards everything.
#[derive(Debug,Default,Clone,Copy)]
pub struct SilentReport;

impl Report for SilentReport {
	fn section (&mut self, _: &str) -> io::Result<()> { Ok(()) }
	fn fileResult (&mut self, _: &DisplayRecord, _: usize) -> io::Result<()> { Ok(()) }
	fn summary (&mut self, _: &BuildSummary) -> io::Result<()> { Ok(()) }
	fn errors (&mut self, _: &[String]) -> io::Result<()> { Ok(()) }
}
