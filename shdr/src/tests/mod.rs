
//////
//
// Imports
//

// Standard library
use std::fs;

// Clap library
use clap::Parser;

// Local imports
use crate::*;
use shdr_build::{ConfigurationError, DriverError, SilentReport};



//////
//
// Helpers
//

use shdr_util::testing::ScratchDir;

fn defaultArgs () -> Args {
	Args::try_parse_from(["shdr"]).unwrap()
}



//////
//
// Tests
//

#[test]
fn test_args_defaults() {
	let args = defaultArgs();
	assert_eq!(args.config, BuildConfig::Debug);
	assert_eq!(args.framework, "net9.0");
}

#[test]
fn test_args_long() {
	let args = Args::try_parse_from(["shdr", "--config", "release", "--framework", "net8.0"]).unwrap();
	assert_eq!(args.config, BuildConfig::Release);
	assert_eq!(args.framework, "net8.0");
}

#[test]
fn test_args_short() {
	let args = Args::try_parse_from(["shdr", "-c", "release", "-f", "net10.0"]).unwrap();
	assert_eq!(args.config, BuildConfig::Release);
	assert_eq!(args.framework, "net10.0");
}

#[test]
fn test_args_rejectsUnknown() {
	assert!(Args::try_parse_from(["shdr", "--config", "profile"]).is_err());
	assert!(Args::try_parse_from(["shdr", "--platform", "linux"]).is_err());
}

#[test]
fn test_run_missingLibrary()
{
	let scratch = ScratchDir::new();
	let err = run(scratch.path(), &defaultArgs(), SilentReport).unwrap_err();
	assert!(matches!(
		err.downcast_ref::<DriverError>(),
		Some(DriverError::Configuration(ConfigurationError::MissingLibraryRoot(_)))
	));
}

#[test]
fn test_run_malformedConfig() {
	let scratch = ScratchDir::new();
	scratch.write("shdr.yaml", "invalidation: sometimes\n");
	assert!(run(scratch.path(), &defaultArgs(), SilentReport).is_err());
}

#[test]
fn test_run_exitStatus()
{
	let scratch = ScratchDir::new();
	fs::create_dir_all(scratch.path().join("Submodules/bgfx")).unwrap();
	fs::create_dir_all(scratch.path().join("Engine.Assets/Materials")).unwrap();

	// A "compiler" that is never run because there is nothing to compile
	scratch.write("tools/shaderc", "");
	scratch.write("shdr.yaml", "compiler: tools/shaderc\nfailOnCompileErrors: true\n");

	let status = run(scratch.path(), &defaultArgs(), SilentReport).unwrap();
	assert_eq!(status, ExitStatus::Success);
	assert_eq!(status.code(), 0);
}
