
//////
//
// Language config
//

// Eff this convention.
#![allow(non_snake_case)]



//////
//
// Module definitions
//

/// The module defining the errors of the shader build.
mod error;
pub use error::{ConfigurationError, ToolchainError, CompileError, DriverError}; // re-export

/// The module providing the shader data model and artifact path mapping.
mod shader;
pub use shader::{ShaderKind, OutputNaming, ShaderSource, CompiledShaderArtifact, CompileRequest}; // re-export

/// The module implementing the artifact invalidation policies.
pub mod invalidation;
pub use invalidation::{InvalidationStrategy, TimestampInvalidation, ContentHashInvalidation}; // re-export

/// The module abstracting the execution of external processes.
mod process;
pub use process::{ProcessOutput, ProcessRunner, SystemProcessRunner}; // re-export

/// The module defining compile outcomes and their aggregation.
mod outcome;
pub use outcome::{CompileOutcome, ExitStatus, OutcomeRecord, ShaderSetResult, BuildSummary}; // re-export

/// The module implementing the presentation of build progress.
mod report;
pub use report::{DisplayRecord, Report, ConsoleReport, SilentReport}; // re-export

/// The module resolving a run environment into concrete paths and compiler arguments.
mod plan;
pub use plan::{ShaderSetJob, BuildPlan, defaultCompilerPath, bgfxPlatformArgs}; // re-export

/// The module implementing the incremental build driver.
mod driver;
pub use driver::Driver; // re-export

/// Tests for the shader build.
#[cfg(test)]
mod tests;

/// The utilities library.
pub use shdr_util as util;

/// The run environment library.
pub use shdr_runenv as runenv;



//////
//
// Functions
//

/// Build all shaders of the given plan with the system's process runner and the invalidation policy the plan selects.
///
/// # Arguments
///
/// * `plan` – The resolved build.
/// * `report` – Where to present progress and results.
///
/// # Returns
///
/// The summary of the run, or the fatal error that aborted it.
pub fn buildShaders<Rep: Report> (plan: &BuildPlan, report: Rep) -> Result<BuildSummary, DriverError> {
	let mut driver = Driver::new(SystemProcessRunner, invalidation::forPolicy(plan.invalidation), report);
	driver.run(plan)
}
