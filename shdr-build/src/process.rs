
//////
//
// Imports
//

// Standard library
use std::{ffi::OsString, path::Path, process::Command};

// Anyhow library
use anyhow::{Context, Result};



//////
//
// Structs
//

/// The captured result of running an external process to completion.
#[derive(Debug,Default,Clone,PartialEq,Eq)]
pub struct ProcessOutput {
	/// The exit code, or [`None`] if the process was terminated by a signal.
	pub exitCode: Option<i32>,

	/// Everything the process wrote to its standard output, decoded lossily as UTF-8.
	pub stdout: String,

	/// Everything the process wrote to its standard error, decoded lossily as UTF-8.
	pub stderr: String
}
impl ProcessOutput
{
	/// Whether the process exited with code zero.
	#[inline(always)]
	pub fn success (&self) -> bool {
		self.exitCode == Some(0)
	}

	/// The lines written to standard output.
	pub fn stdoutLines (&self) -> Vec<String> {
		crate::util::trimmedLines(&self.stdout)
	}

	/// The lines written to standard error.
	pub fn stderrLines (&self) -> Vec<String> {
		crate::util::trimmedLines(&self.stderr)
	}
}



//////
//
// Traits
//

/// Runs external programs synchronously. An `Err` means the program could not be run at all; a program that ran and
/// failed is reported through [`ProcessOutput::exitCode`].
pub trait ProcessRunner {
	fn run (&self, program: &Path, args: &[OsString]) -> Result<ProcessOutput>;
}



//////
//
// Classes
//

////
// SystemProcessRunner

/// Runs programs as child processes of the current process, inheriting its working directory and environment, and
/// blocking until they exit.
#[derive(Debug,Default,Clone,Copy)]
pub struct SystemProcessRunner;

impl ProcessRunner for SystemProcessRunner
{
	fn run (&self, program: &Path, args: &[OsString]) -> Result<ProcessOutput>
	{
		tracing::trace!("Running {} {:?}", program.display(), args);
		let output = Command::new(program)
			.args(args)
			.output()
			.with_context(|| format!("Could not run '{}'", program.display()))?;
		Ok(ProcessOutput {
			exitCode: output.status.code(),
			stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
			stderr: String::from_utf8_lossy(&output.stderr).into_owned()
		})
	}
}
