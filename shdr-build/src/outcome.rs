
//////
//
// Imports
//

// Standard library
use std::{path::PathBuf, time::Duration};

// Local imports
use crate::*;



//////
//
// Enums
//

/// What happened to a single shader source during a run.
#[derive(Debug,Clone,PartialEq,Eq)]
pub enum CompileOutcome {
	/// The artifact was up to date, the compiler was not invoked.
	Cached,

	/// The compiler was invoked and exited with code zero.
	Built,

	/// The compiler was invoked (or could not be) and failed.
	Error(CompileError)
}
impl CompileOutcome
{
	/// The status tag shown for this outcome.
	pub fn tag (&self) -> &'static str {
		match self {
			Self::Cached => "Cached",
			Self::Built => "Built",
			Self::Error(_) => "Error"
		}
	}

	///
	#[inline(always)]
	pub fn isError (&self) -> bool {
		matches!(self, Self::Error(_))
	}
}

/// How a completed run should be reflected in the process exit status.
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum ExitStatus {
	/// Nothing went wrong, or compile errors are not considered failures.
	Success,

	/// At least one shader failed to compile and compile errors are considered failures.
	CompileErrors
}
impl ExitStatus {
	/// The process exit code corresponding to this status.
	pub fn code (&self) -> u8 {
		match self {
			Self::Success => 0,
			Self::CompileErrors => 2
		}
	}
}



//////
//
// Structs
//

/// The outcome of one shader source together with what is needed to report it.
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct OutcomeRecord {
	pub kind: ShaderKind,
	pub outcome: CompileOutcome,

	/// Source path relative to the source root.
	pub sourceRelPath: PathBuf,

	/// Artifact path relative to the output root.
	pub artifactRelPath: PathBuf,

	/// Lines the compiler wrote to standard output (empty if it was not invoked).
	pub stdout: Vec<String>,

	/// Lines the compiler wrote to standard error (empty if it was not invoked).
	pub stderr: Vec<String>
}
impl OutcomeRecord
{
	/// Project this record onto what a presentation layer should show for it.
	pub fn displayRecord (&self) -> DisplayRecord
	{
		// Captured output is only echoed for failures
		let diagnosticLines = if self.outcome.isError() {
			self.stderr.iter().chain(self.stdout.iter()).cloned().collect()
		}
		else { Vec::new() };

		DisplayRecord {
			status: self.outcome.tag(),
			sourcePath: util::path::displayPortable(&self.sourceRelPath),
			artifactPath: util::path::displayPortable(&self.artifactRelPath),
			diagnosticLines
		}
	}
}

/// The result of compiling all sources of one [`ShaderKind`].
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct ShaderSetResult {
	pub kind: ShaderKind,

	/// Number of files processed, regardless of outcome.
	pub count: usize,

	/// One record per processed file, in processing order.
	pub outcomes: Vec<OutcomeRecord>
}
impl ShaderSetResult
{
	///
	pub fn empty (kind: ShaderKind) -> Self {
		Self { kind, count: 0, outcomes: Vec::new() }
	}

	/// Count the records whose outcome carries the given tag.
	pub fn countTagged (&self, tag: &str) -> usize {
		self.outcomes.iter().filter(|record| record.outcome.tag() == tag).count()
	}
}

/// The aggregated result of a complete driver run.
#[derive(Debug,Clone)]
pub struct BuildSummary {
	pub vertex: ShaderSetResult,
	pub fragment: ShaderSetResult,

	/// All standard error lines captured from every compiler invocation of the run, in order.
	pub diagnostics: Vec<String>,

	/// Wall-clock duration of the run.
	pub elapsed: Duration
}
impl BuildSummary
{
	/// Iterate over all records of the run, vertex shaders first.
	pub fn outcomes (&self) -> impl Iterator<Item=&OutcomeRecord> {
		self.vertex.outcomes.iter().chain(self.fragment.outcomes.iter())
	}

	///
	pub fn totalCount (&self) -> usize {
		self.vertex.count + self.fragment.count
	}

	///
	pub fn cachedCount (&self) -> usize {
		self.vertex.countTagged("Cached") + self.fragment.countTagged("Cached")
	}

	///
	pub fn builtCount (&self) -> usize {
		self.vertex.countTagged("Built") + self.fragment.countTagged("Built")
	}

	///
	pub fn errorCount (&self) -> usize {
		self.vertex.countTagged("Error") + self.fragment.countTagged("Error")
	}

	/// Decide the exit status of the run according to the given policy.
	pub fn exitStatus (&self, failOnCompileErrors: bool) -> ExitStatus {
		if failOnCompileErrors && self.errorCount() > 0 {
			ExitStatus::CompileErrors
		}
		else {
			ExitStatus::Success
		}
	}
}
