
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

/// Tests for the run environment.
#[cfg(test)]
mod tests;



//////
//
// Imports
//

// Standard library
use std::{fmt::Display, fs, path::{Path, PathBuf}};

// Anyhow library
use anyhow::Context;

// Serde framework
use serde;
use serde_yaml_ng;

// Local imports
pub use shdr_util::meta::HostPlatform; // re-export



//////
//
// Enums
//

/// The build configuration of the application the shaders are compiled for. Selects the output subdirectory.
#[cfg_attr(feature="clap", derive(clap::ValueEnum))]
#[derive(Debug,Default,Clone,Copy,PartialEq,Eq,serde::Serialize,serde::Deserialize)]
#[serde(rename_all="lowercase")]
pub enum BuildConfig {
	#[default]
	Debug,
	Release
}
impl BuildConfig {
	/// The name of the output subdirectory for this configuration.
	pub fn dirName (&self) -> &'static str {
		match self {
			Self::Debug => "debug",
			Self::Release => "release"
		}
	}
}
impl Display for BuildConfig {
	fn fmt (&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.dirName())
	}
}

/// Selects how the shader driver decides whether a previously compiled artifact can be reused.
#[derive(Debug,Default,Clone,Copy,PartialEq,Eq,serde::Serialize,serde::Deserialize)]
#[serde(rename_all="camelCase")]
pub enum Invalidation {
	/// The artifact is reused iff it is at least as new as its source file.
	#[default]
	Timestamp,

	/// The artifact is reused iff a digest of the source content recorded at its last build still matches.
	ContentHash
}



//////
//
// Structs
//

/// Project layout and policy settings for a shader build, usually read from the [`CONFIG_FILENAME`] file in the
/// solution root. All relative paths are interpreted relative to the solution root.
#[derive(Debug,Clone,PartialEq,serde::Serialize,serde::Deserialize)]
#[serde(default)]
pub struct Environment {
	/// Root of the rendering library checkout providing the shader compiler and its include files.
	pub bgfxDir: PathBuf,

	/// Root directory of the shader sources.
	pub materialsDir: PathBuf,

	/// Base directory under which `<config>/<framework>/Compiled/Shaders` receives the compiled artifacts.
	pub outputDir: PathBuf,

	/// Explicit path to the shader compiler, bypassing the toolchain layout of [`Self::bgfxDir`].
	pub compiler: Option<PathBuf>,

	/// Target platform override. Defaults to the host platform.
	pub platform: Option<HostPlatform>,

	/// Shader profile override. Defaults to the profile of the target platform.
	pub profile: Option<String>,

	/// Additional include directories, passed after the ones provided by the rendering library.
	pub includeDirs: Vec<PathBuf>,

	/// The varying definition file, relative to [`Self::materialsDir`].
	pub varyingDef: PathBuf,

	/// File name suffix identifying vertex shader sources.
	pub vertexSuffix: String,

	/// File name suffix identifying fragment shader sources.
	pub fragmentSuffix: String,

	/// File name suffix of compiled artifacts.
	pub binarySuffix: String,

	/// Whether the stage part of the source suffix (e.g. `.vert`) is dropped from artifact names.
	pub stripStageSuffix: bool,

	/// The artifact invalidation policy.
	pub invalidation: Invalidation,

	/// Whether individual compile errors should make the run report failure through its exit status.
	pub failOnCompileErrors: bool
}
impl Default for Environment {
	fn default () -> Self { Self {
		bgfxDir: "Submodules/bgfx".into(),
		materialsDir: "Engine.Assets/Materials".into(),
		outputDir: "Engine.Editor/bin".into(),
		compiler: None,
		platform: None,
		profile: None,
		includeDirs: Vec::new(),
		varyingDef: "varying.def.sc".into(),
		vertexSuffix: ".vert.glsl".into(),
		fragmentSuffix: ".frag.glsl".into(),
		binarySuffix: ".bin".into(),
		stripStageSuffix: false,
		invalidation: Invalidation::default(),
		failOnCompileErrors: false
	}}
}
impl Environment
{
	///
	pub fn serialize (&self) -> anyhow::Result<Vec<u8>> {
		let mut bytes = Vec::new();
		serde_yaml_ng::to_writer(&mut bytes, self)?;
		Ok(bytes)
	}

	///
	pub fn serializeToFile (&self, filename: impl AsRef<Path>) -> anyhow::Result<()> {
		Ok(fs::write(filename, self.serialize()?)?)
	}

	///
	pub fn deserialize (bytes: impl AsRef<[u8]>) -> Result<Self, serde_yaml_ng::Error> {
		serde_yaml_ng::from_slice(bytes.as_ref())
	}

	/// Read the environment from the given YAML file.
	pub fn fromFile (filename: impl AsRef<Path>) -> anyhow::Result<Self>
	{
		let filename = filename.as_ref();
		let bytes = fs::read(filename).with_context(
			|| format!("Could not read configuration file '{}'", filename.display())
		)?;
		Self::deserialize(bytes).with_context(
			|| format!("Malformed configuration file '{}'", filename.display())
		)
	}

	/// Read the environment from the [`CONFIG_FILENAME`] file inside `solutionRoot` if there is one, otherwise return
	/// the default environment.
	pub fn loadOrDefault (solutionRoot: impl AsRef<Path>) -> anyhow::Result<Self>
	{
		let filename = solutionRoot.as_ref().join(CONFIG_FILENAME);
		if filename.exists() {
			Self::fromFile(filename)
		}
		else {
			Ok(Self::default())
		}
	}

	/// The target platform, taking the override into account.
	pub fn targetPlatform (&self) -> HostPlatform {
		self.platform.unwrap_or_else(HostPlatform::current)
	}

	/// The shader profile, taking the override into account.
	pub fn targetProfile (&self) -> String {
		self.profile.clone().unwrap_or_else(|| self.targetPlatform().defaultProfile().to_owned())
	}
}



//////
//
// Constants
//

/// The name of the configuration file looked for in the solution root.
pub const CONFIG_FILENAME: &str = "shdr.yaml";

/// The target framework identifier used when none is specified.
pub const DEFAULT_FRAMEWORK: &str = "net9.0";
