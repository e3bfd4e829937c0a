
//////
//
// Imports
//

// Standard library
use std::{collections::BTreeMap, io, path::PathBuf, time::Instant};

// Local imports
use crate::*;



//////
//
// Classes
//

////
// Driver

/// Compiles shader sources incrementally by running an external shader compiler on every source whose artifact is not
/// up to date. Processing is strictly sequential; a failing shader never stops the remaining ones from being attempted.
/// Neither does a failing report: presentation errors are logged and otherwise ignored.
pub struct Driver<Runner: ProcessRunner, Rep: Report> {
	runner: Runner,
	invalidation: Box<dyn InvalidationStrategy>,
	report: Rep,
	reportFailed: bool
}
impl<Runner: ProcessRunner, Rep: Report> Driver<Runner, Rep>
{
	/// Create a driver running the compiler through `runner`, deciding staleness with `invalidation` and presenting
	/// progress through `report`.
	pub fn new (runner: Runner, invalidation: Box<dyn InvalidationStrategy>, report: Rep) -> Self {
		Self { runner, invalidation, report, reportFailed: false }
	}

	/// Dismantle the driver, giving back its process runner and report.
	pub fn intoParts (self) -> (Runner, Rep) {
		(self.runner, self.report)
	}

	/// Compile all shaders of one kind.
	///
	/// # Arguments
	///
	/// * `job` – Describes where to find the sources, where to put the artifacts and how to invoke the compiler.
	/// * `diagnostics` – Receives every line the compiler writes to its standard error, whether it succeeded or not.
	///
	/// # Returns
	///
	/// The number of files processed and their outcomes, or an error if a precondition is violated or the sources can't
	/// be enumerated. In both cases no file was processed.
	pub fn compileShaderSet (&mut self, job: &ShaderSetJob, diagnostics: &mut Vec<String>)
	-> Result<ShaderSetResult, DriverError>
	{
		////
		// Preconditions

		checkPreconditions(job)?;


		////
		// Discovery

		let section = self.report.section(&format!("-- Compiling {} shaders", job.kind));
		self.presented(section);
		let requests = discover(job)?;
		tracing::info!("Found {} {} shader(s) below {}", requests.len(), job.kind, job.sourceRoot.display());

		// Column width for the source paths of this batch
		let pad = util::maxCharWidth(
			requests.iter().map(|request| util::path::displayPortable(&request.source.relPath))
		) + 2;


		////
		// Compilation

		let mut result = ShaderSetResult::empty(job.kind);
		for request in requests
		{
			let record = self.compileOne(job, request, diagnostics);
			let shown = self.report.fileResult(&record.displayRecord(), pad);
			self.presented(shown);
			result.count += 1;
			result.outcomes.push(record);
		}

		// Done!
		Ok(result)
	}

	/// Run a complete build: all vertex shaders, then all fragment shaders, followed by the summary.
	pub fn run (&mut self, plan: &BuildPlan) -> Result<BuildSummary, DriverError>
	{
		let start = Instant::now();

		// Everything fatal is detected before the first file is touched
		if let Some(libraryRoot) = &plan.libraryRoot && !libraryRoot.is_dir() {
			return Err(ConfigurationError::MissingLibraryRoot(libraryRoot.clone()).into());
		}
		for kind in ShaderKind::ALL {
			checkPreconditions(&plan.job(kind))?;
		}
		checkCollisions(plan)?;

		// Compile
		let mut diagnostics = Vec::new();
		let vertex = self.compileShaderSet(&plan.job(ShaderKind::Vertex), &mut diagnostics)?;
		let fragment = self.compileShaderSet(&plan.job(ShaderKind::Fragment), &mut diagnostics)?;

		// Report
		let summary = BuildSummary { vertex, fragment, diagnostics, elapsed: start.elapsed() };
		tracing::info!(
			"Processed {} shader(s): {} built, {} cached, {} failed",
			summary.totalCount(), summary.builtCount(), summary.cachedCount(), summary.errorCount()
		);
		let shown = self.report.summary(&summary);
		self.presented(shown);
		if !summary.diagnostics.is_empty() {
			let shown = self.report.errors(&summary.diagnostics);
			self.presented(shown);
		}

		// Done!
		Ok(summary)
	}

	/// Log the first failure of the report. Later ones are most likely the same broken sink.
	fn presented (&mut self, result: io::Result<()>) {
		if let Err(err) = result && !self.reportFailed {
			tracing::warn!("Could not report build progress, continuing without: {err}");
			self.reportFailed = true;
		}
	}

	/// Bring a single artifact up to date. Never fails; problems become the outcome of the file.
	fn compileOne (&self, job: &ShaderSetJob, request: CompileRequest, diagnostics: &mut Vec<String>) -> OutcomeRecord
	{
		let CompileRequest { source, artifact, .. } = &request;
		let mut record = OutcomeRecord {
			kind: job.kind,
			outcome: CompileOutcome::Cached,
			sourceRelPath: source.relPath.clone(),
			artifactRelPath: artifact.relPath.clone(),
			stdout: Vec::new(),
			stderr: Vec::new()
		};

		// Output directory
		if let Err(err) = util::fs::ensureParentDir(&artifact.path) {
			fail(&mut record, format!("{}: {err:#}", util::path::displayPortable(&source.relPath)), diagnostics);
			return record;
		}

		// Staleness check
		match self.invalidation.isUpToDate(&source.path, &artifact.path) {
			Ok(true) => {
				tracing::debug!("{} is up to date", artifact.relPath.display());
				return record;
			},
			Ok(false) => tracing::debug!("{} is stale", artifact.relPath.display()),
			Err(err) => tracing::warn!("Could not check {}, recompiling: {err:#}", artifact.relPath.display())
		}

		// Invoke the compiler
		match self.runner.run(job.compiler, &request.commandLine())
		{
			Ok(output) => {
				record.stdout = output.stdoutLines();
				record.stderr = output.stderrLines();
				diagnostics.extend(record.stderr.iter().cloned());

				if output.success() {
					if let Err(err) = self.invalidation.recordBuilt(&source.path, &artifact.path) {
						tracing::warn!("Could not record build of {}: {err:#}", artifact.relPath.display());
					}
					record.outcome = CompileOutcome::Built;
				}
				else {
					let message = if !record.stderr.is_empty() { record.stderr.clone() }
						else if !record.stdout.is_empty() { record.stdout.clone() }
						else {
							// Make sure the failure shows up in the consolidated diagnostics
							let line = format!(
								"{}: compiler failed without output ({})",
								util::path::displayPortable(&source.relPath), exitCodeText(output.exitCode)
							);
							diagnostics.push(line.clone());
							vec![line]
						};
					tracing::warn!("Failed to compile {} ({})", source.relPath.display(), exitCodeText(output.exitCode));
					record.outcome = CompileOutcome::Error(CompileError { exitCode: output.exitCode, message });
				}
			},
			Err(err) => fail(
				&mut record, format!("{}: {err:#}", util::path::displayPortable(&source.relPath)), diagnostics
			)
		}
		record
	}
}



//////
//
// Functions
//

/// Fail if the source root or the compiler are missing.
fn checkPreconditions (job: &ShaderSetJob) -> Result<(), DriverError>
{
	if !job.sourceRoot.is_dir() {
		return Err(ConfigurationError::MissingSourceRoot(job.sourceRoot.to_owned()).into());
	}
	if !util::fs::isRegularFile(job.compiler) {
		return Err(ToolchainError::MissingCompiler(job.compiler.to_owned()).into());
	}
	Ok(())
}

/// Enumerate the sources of a job and map each to its artifact, in lexical order of the relative source paths.
fn discover<'job> (job: &ShaderSetJob<'job>) -> Result<Vec<CompileRequest<'job>>, DriverError>
{
	let files = util::fs::findFilesWithSuffix(job.sourceRoot, job.sourceSuffix)?;
	files.into_iter().map(|path| -> Result<CompileRequest<'job>, DriverError> {
		let source = ShaderSource::new(job.kind, job.sourceRoot, path)
			.map_err(ConfigurationError::InvalidPath)?;
		let artifact = CompiledShaderArtifact::forSource(&source, job.sourceSuffix, job.outputRoot, job.naming)
			.map_err(ConfigurationError::InvalidPath)?;
		Ok(CompileRequest { source, artifact, platformArgs: job.platformArgs })
	}).collect()
}

/// Fail if any two sources of the plan, of whatever kind, would be compiled into the same artifact.
fn checkCollisions (plan: &BuildPlan) -> Result<(), DriverError>
{
	let mut claimed: BTreeMap<PathBuf, PathBuf> = BTreeMap::new();
	for kind in ShaderKind::ALL {
		for request in discover(&plan.job(kind))? {
			if let Some(first) = claimed.insert(request.artifact.relPath.clone(), request.source.relPath.clone()) {
				return Err(ConfigurationError::ArtifactCollision {
					artifact: request.artifact.relPath, first, second: request.source.relPath
				}.into());
			}
		}
	}
	Ok(())
}

/// Turn the record into an error outcome for a problem that kept the compiler from producing any output.
fn fail (record: &mut OutcomeRecord, line: String, diagnostics: &mut Vec<String>) {
	tracing::warn!("{line}");
	diagnostics.push(line.clone());
	record.stderr = vec![line.clone()];
	record.outcome = CompileOutcome::Error(CompileError { exitCode: None, message: vec![line] });
}

fn exitCodeText (exitCode: Option<i32>) -> String {
	match exitCode {
		Some(code) => format!("exit code {code}"),
		None => "terminated without exit code".into()
	}
}
