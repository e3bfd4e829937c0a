
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

/// Tests for the command line front end.
#[cfg(test)]
mod tests;



//////
//
// Imports
//

// Standard library
use std::{path::Path, process::ExitCode};

// Anyhow library
use anyhow::{Context, Result};

// Clap library
use clap::Parser;

// Tracing library
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Local imports
use shdr_build::{BuildPlan, ConsoleReport, ExitStatus, Report, buildShaders};
use shdr_runenv::{BuildConfig, Environment, DEFAULT_FRAMEWORK};



//////
//
// Structs
//

/// Compile the engine's material shaders, skipping everything that is already up to date. Project layout and policies
/// are read from `shdr.yaml` in the current directory, which is taken to be the solution root.
#[derive(Parser,Debug)]
#[command(version, about)]
pub(crate) struct Args {
	/// Build configuration the shaders are placed for.
	#[arg(short, long, value_enum, default_value_t=BuildConfig::Debug)]
	pub config: BuildConfig,

	/// Target framework identifier the shaders are placed for.
	#[arg(short, long, default_value=DEFAULT_FRAMEWORK)]
	pub framework: String
}



//////
//
// Functions
//

fn initTracing ()
{
	let mut envFilterBuilder = EnvFilter::builder();
	#[cfg(debug_assertions)] {
		envFilterBuilder = envFilterBuilder.with_default_directive(tracing::Level::DEBUG.into());
	}
	#[cfg(not(debug_assertions))] {
		envFilterBuilder = envFilterBuilder.with_default_directive(tracing::Level::INFO.into());
	}
	let envFilter = envFilterBuilder.from_env_lossy();

	// Logs go to stderr so they never interleave with the report on stdout
	let fmtLayer = tracing_subscriber::fmt::Layer::default().with_writer(std::io::stderr);
	tracing_subscriber::registry().with(envFilter).with(fmtLayer).init();
}

/// Build all shaders of the solution rooted at `solutionRoot`.
///
/// # Arguments
///
/// * `solutionRoot` – The directory containing the optional configuration file and against which all configured paths
///                    are resolved.
/// * `args` – The parsed command line.
/// * `report` – Where to present progress and results.
///
/// # Returns
///
/// The exit status the run warrants, or the error that prevented the build from running.
pub(crate) fn run<Rep: Report> (solutionRoot: &Path, args: &Args, report: Rep) -> Result<ExitStatus>
{
	let env = Environment::loadOrDefault(solutionRoot)?;
	let plan = BuildPlan::fromEnvironment(solutionRoot, &env, args.config, &args.framework);
	tracing::debug!("Sources: {}", plan.sourceRoot.display());
	tracing::debug!("Artifacts: {}", plan.outputRoot.display());
	tracing::debug!("Compiler: {}", plan.compiler.display());

	let summary = buildShaders(&plan, report)?;
	Ok(summary.exitStatus(plan.failOnCompileErrors))
}

/// Application entry point.
fn main () -> ExitCode
{
	#[cfg(target_os="windows")]
	let _ = ansi_term::enable_ansi_support();
	initTracing();

	let args = Args::parse();
	let result = std::env::current_dir()
		.context("Could not determine the solution root")
		.and_then(|solutionRoot| run(&solutionRoot, &args, ConsoleReport::stdout()));
	match result {
		Ok(status) => ExitCode::from(status.code()),
		Err(err) => {
			tracing::error!("{err:#}");
			// Shown even if logging is filtered
			let _ = ConsoleReport::stderr().fatal(&format!("{err:#}"));
			ExitCode::FAILURE
		}
	}
}
