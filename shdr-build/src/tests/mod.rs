
//////
//
// Module definitions
//









//////
//
// Imports
//

// Standard library
use std::{cell::RefCell, collections::{BTreeMap, BTreeSet}, ffi::OsString, fs, path::{Path, PathBuf}};
use std::time::{Duration, SystemTime};

// Anyhow library
use anyhow::anyhow;

// Local imports
use crate::*;



//////
//
// Helpers
//

pub(crate) use crate::util::testing::ScratchDir;

/// Set the modification time of the given file.
pub(crate) fn setModified (path: &Path, time: SystemTime) {
	fs::File::options().write(true).open(path).unwrap().set_modified(time).unwrap();
}

/// A point in time a fixed number of seconds after an arbitrary but stable epoch.
pub(crate) fn at (seconds: u64) -> SystemTime {
	SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000 + seconds)
}

/// Returns the argument following `flag` in the given argument list.
pub(crate) fn argAfter (args: &[OsString], flag: &str) -> Option<PathBuf> {
	args.iter().position(|arg| arg == flag).and_then(|pos| args.get(pos+1)).map(PathBuf::from)
}

/// A stand-in for the shader compiler. Succeeds for every source by writing a small artifact, unless it was told
/// otherwise for the source's file name. Records every invocation.
#[derive(Default)]
pub(crate) struct ScriptedRunner {
	pub invocations: RefCell<Vec<Vec<OsString>>>,
	outputs: BTreeMap<String, ProcessOutput>,
	unspawnable: BTreeSet<String>
}
impl ScriptedRunner
{
	/// Respond to compiling the source with the given file name with the given result.
	pub fn respond (mut self, sourceName: &str, exitCode: i32, stdout: &str, stderr: &str) -> Self {
		self.outputs.insert(sourceName.into(), ProcessOutput {
			exitCode: Some(exitCode), stdout: stdout.into(), stderr: stderr.into()
		});
		self
	}

	/// Pretend the compiler cannot be started for the source with the given file name.
	pub fn failToSpawn (mut self, sourceName: &str) -> Self {
		self.unspawnable.insert(sourceName.into());
		self
	}

	/// The file names of all sources the compiler was invoked for, in order.
	pub fn compiledNames (&self) -> Vec<String> {
		self.invocations.borrow().iter()
			.map(|args| argAfter(args, "-f").unwrap().file_name().unwrap().to_string_lossy().into_owned())
			.collect()
	}

	pub fn invocationCount (&self) -> usize {
		self.invocations.borrow().len()
	}
}
impl ProcessRunner for ScriptedRunner
{
	fn run (&self, _: &Path, args: &[OsString]) -> anyhow::Result<ProcessOutput>
	{
		self.invocations.borrow_mut().push(args.to_vec());
		let source = argAfter(args, "-f").ok_or_else(|| anyhow!("no input given"))?;
		let output = argAfter(args, "-o").ok_or_else(|| anyhow!("no output given"))?;
		let name = source.file_name().unwrap().to_string_lossy().into_owned();

		if self.unspawnable.contains(&name) {
			return Err(anyhow!("No such file or directory (os error 2)"));
		}
		let result = self.outputs.get(&name).cloned().unwrap_or(ProcessOutput {
			exitCode: Some(0), ..Default::default()
		});
		if result.success() {
			fs::write(&output, format!("compiled {name}"))?;
		}
		Ok(result)
	}
}

/// A source root with a `materials` and an `out` directory plus an (empty) compiler executable.
pub(crate) struct Fixture {
	pub scratch: ScratchDir,
	pub plan: BuildPlan
}
impl Fixture
{
	pub fn new () -> Self {
		let scratch = ScratchDir::new();
		fs::create_dir_all(scratch.path().join("materials")).unwrap();
		let compiler = scratch.write("tools/shaderc", "");
		let plan = BuildPlan::new(
			scratch.path().join("materials"), scratch.path().join("out"), compiler,
			vec!["--platform".into(), "linux".into(), "-p".into(), "spirv".into()]
		);
		Self { scratch, plan }
	}

	/// Add a source file below the materials directory.
	pub fn source (&self, relPath: &str) -> PathBuf {
		self.scratch.write(Path::new("materials").join(relPath), "void main() {}\n")
	}

	/// The full path of an artifact below the output directory.
	pub fn artifact (&self, relPath: &str) -> PathBuf {
		self.plan.outputRoot.join(relPath)
	}

	/// Run the whole plan with the given runner and timestamp invalidation.
	pub fn run (&self, runner: ScriptedRunner) -> (Result<BuildSummary, DriverError>, ScriptedRunner) {
		self.runWith(runner, Box::new(TimestampInvalidation))
	}

	/// Run the whole plan with the given runner and invalidation policy.
	pub fn runWith (&self, runner: ScriptedRunner, invalidation: Box<dyn InvalidationStrategy>)
	-> (Result<BuildSummary, DriverError>, ScriptedRunner) {
		let mut driver = Driver::new(runner, invalidation, SilentReport);
		let result = driver.run(&self.plan);
		(result, driver.intoParts().0)
	}
}
