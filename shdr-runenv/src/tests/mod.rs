
//////
//
// Imports
//

// Standard library
use std::path::PathBuf;

// Local imports
use crate::*;
use shdr_util::testing::ScratchDir;



//////
//
// Tests
//

#[test]
fn test_defaults_mirrorSolutionLayout()
{
	let env = Environment::default();
	assert_eq!(env.bgfxDir, PathBuf::from("Submodules/bgfx"));
	assert_eq!(env.materialsDir, PathBuf::from("Engine.Assets/Materials"));
	assert_eq!(env.outputDir, PathBuf::from("Engine.Editor/bin"));
	assert_eq!(env.varyingDef, PathBuf::from("varying.def.sc"));
	assert_eq!(env.vertexSuffix, ".vert.glsl");
	assert_eq!(env.fragmentSuffix, ".frag.glsl");
	assert_eq!(env.binarySuffix, ".bin");
	assert_eq!(env.invalidation, Invalidation::Timestamp);
	assert!(!env.stripStageSuffix);
	assert!(!env.failOnCompileErrors);
	assert_eq!(env.targetPlatform(), HostPlatform::current());
	assert_eq!(env.targetProfile(), HostPlatform::current().defaultProfile());
}

#[test]
fn test_deserialize_partialFileKeepsDefaults()
{
	let yaml = "\
materialsDir: Assets/Shaders
platform: osx
invalidation: contentHash
failOnCompileErrors: true
includeDirs:
  - Shared/include
";
	let env = Environment::deserialize(yaml).unwrap();
	assert_eq!(env.materialsDir, PathBuf::from("Assets/Shaders"));
	assert_eq!(env.platform, Some(HostPlatform::MacOS));
	assert_eq!(env.targetProfile(), "metal");
	assert_eq!(env.invalidation, Invalidation::ContentHash);
	assert!(env.failOnCompileErrors);
	assert_eq!(env.includeDirs, vec![PathBuf::from("Shared/include")]);
	// untouched fields
	assert_eq!(env.bgfxDir, PathBuf::from("Submodules/bgfx"));
	assert_eq!(env.binarySuffix, ".bin");
}

#[test]
fn test_deserialize_profileOverride()
{
	let env = Environment::deserialize("platform: windows\nprofile: s_4_0\n").unwrap();
	assert_eq!(env.targetPlatform(), HostPlatform::Windows);
	assert_eq!(env.targetProfile(), "s_4_0");
}

#[test]
fn test_deserialize_rejectsUnknownPolicy()
{
	assert!(Environment::deserialize("invalidation: vibes\n").is_err());
	assert!(Environment::deserialize("platform: amiga\n").is_err());
}

#[test]
fn test_loadOrDefault()
{
	let scratch = ScratchDir::new();
	let root = scratch.path();

	// No file present
	assert_eq!(Environment::loadOrDefault(root).unwrap(), Environment::default());

	// File written by ourselves is picked up
	let mut custom = Environment::default();
	custom.outputDir = "out".into();
	custom.stripStageSuffix = true;
	custom.serializeToFile(root.join(CONFIG_FILENAME)).unwrap();
	assert_eq!(Environment::loadOrDefault(root).unwrap(), custom);

	// Malformed file is an error, not silently ignored
	std::fs::write(root.join(CONFIG_FILENAME), "outputDir: [unterminated").unwrap();
	assert!(Environment::loadOrDefault(root).is_err());
}

#[test]
fn test_BuildConfig()
{
	assert_eq!(BuildConfig::default(), BuildConfig::Debug);
	assert_eq!(BuildConfig::Release.to_string(), "release");
}

#[test]
fn test_deserialize_platformAliases()
{
	// The configuration file accepts every spelling the platform parser does
	for (text, expected) in [
		("win64", HostPlatform::Windows), ("osx", HostPlatform::MacOS), ("darwin", HostPlatform::MacOS),
		("Linux", HostPlatform::Linux)
	] {
		let env = Environment::deserialize(format!("platform: {text}\n")).unwrap();
		assert_eq!(env.platform, Some(expected));
	}

	// What is written can be read back
	let env = Environment { platform: Some(HostPlatform::MacOS), ..Default::default() };
	assert_eq!(Environment::deserialize(env.serialize().unwrap()).unwrap(), env);
}
