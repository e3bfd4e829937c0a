
//////
//
// Imports
//

// Standard library
use std::{ffi::OsString, path::{Path, PathBuf}};

// Local imports
use crate::*;
use runenv::{BuildConfig, Environment, Invalidation};



//////
//
// Structs
//

/// The inputs of compiling all shaders of one kind.
#[derive(Debug,Clone,Copy)]
pub struct ShaderSetJob<'plan> {
	/// The kind of shaders to compile, determines the compiler's `--type` argument.
	pub kind: ShaderKind,

	/// The file name suffix identifying sources of this kind.
	pub sourceSuffix: &'plan str,

	/// Directory searched recursively for sources. Must exist.
	pub sourceRoot: &'plan Path,

	/// Directory receiving the artifacts. Created on demand.
	pub outputRoot: &'plan Path,

	/// The shader compiler executable. Must exist as a regular file.
	pub compiler: &'plan Path,

	/// Arguments passed verbatim after the per-file ones.
	pub platformArgs: &'plan [OsString],

	/// How artifact paths are derived.
	pub naming: &'plan OutputNaming
}

/// A fully resolved description of a shader build, with all paths absolute (or relative to the working directory).
#[derive(Debug,Clone)]
pub struct BuildPlan {
	/// The rendering library checkout, checked for existence before anything else if set.
	pub libraryRoot: Option<PathBuf>,

	pub sourceRoot: PathBuf,
	pub outputRoot: PathBuf,
	pub compiler: PathBuf,
	pub platformArgs: Vec<OsString>,
	pub vertexSuffix: String,
	pub fragmentSuffix: String,
	pub naming: OutputNaming,
	pub invalidation: Invalidation,
	pub failOnCompileErrors: bool
}
impl BuildPlan
{
	/// A plan using the default suffixes and policies for the given directories and compiler.
	pub fn new (
		sourceRoot: impl Into<PathBuf>, outputRoot: impl Into<PathBuf>, compiler: impl Into<PathBuf>,
		platformArgs: Vec<OsString>
	) -> Self { Self {
		libraryRoot: None,
		sourceRoot: sourceRoot.into(),
		outputRoot: outputRoot.into(),
		compiler: compiler.into(),
		platformArgs,
		vertexSuffix: ShaderKind::Vertex.defaultSuffix().into(),
		fragmentSuffix: ShaderKind::Fragment.defaultSuffix().into(),
		naming: OutputNaming::default(),
		invalidation: Invalidation::default(),
		failOnCompileErrors: false
	}}

	/// Resolve the run environment for the given solution root, build configuration and target framework.
	pub fn fromEnvironment (solutionRoot: &Path, env: &Environment, config: BuildConfig, framework: &str) -> Self
	{
		let resolve = |path: &Path| util::path::normalizeToAnchor(solutionRoot, path);

		let libraryRoot = resolve(&env.bgfxDir);
		let sourceRoot = resolve(&env.materialsDir);
		let outputRoot = resolve(&env.outputDir)
			.join(config.dirName())
			.join(framework)
			.join("Compiled")
			.join("Shaders");

		let platform = env.targetPlatform();
		let compiler = match &env.compiler {
			Some(compiler) => resolve(compiler),
			None => defaultCompilerPath(&libraryRoot, platform)
		};

		let mut includeDirs = vec![libraryRoot.join("src"), libraryRoot.join("examples").join("common")];
		includeDirs.extend(env.includeDirs.iter().map(|dir| resolve(dir)));
		let platformArgs = bgfxPlatformArgs(
			platform.bgfxId(), &env.targetProfile(), &includeDirs, &sourceRoot.join(&env.varyingDef)
		);

		Self {
			libraryRoot: Some(libraryRoot),
			sourceRoot,
			outputRoot,
			compiler,
			platformArgs,
			vertexSuffix: env.vertexSuffix.clone(),
			fragmentSuffix: env.fragmentSuffix.clone(),
			naming: OutputNaming {
				binarySuffix: env.binarySuffix.clone(), stripStageSuffix: env.stripStageSuffix
			},
			invalidation: env.invalidation,
			failOnCompileErrors: env.failOnCompileErrors
		}
	}

	/// The source suffix configured for the given kind.
	pub fn suffixFor (&self, kind: ShaderKind) -> &str {
		match kind {
			ShaderKind::Vertex => &self.vertexSuffix,
			ShaderKind::Fragment => &self.fragmentSuffix
		}
	}

	/// The job compiling all shaders of the given kind.
	pub fn job (&self, kind: ShaderKind) -> ShaderSetJob<'_> {
		ShaderSetJob {
			kind,
			sourceSuffix: self.suffixFor(kind),
			sourceRoot: &self.sourceRoot,
			outputRoot: &self.outputRoot,
			compiler: &self.compiler,
			platformArgs: &self.platformArgs,
			naming: &self.naming
		}
	}
}



//////
//
// Functions
//

/// The location the rendering library's build places the release shader compiler at for the given platform.
pub fn defaultCompilerPath (libraryRoot: &Path, platform: util::meta::HostPlatform) -> PathBuf {
	libraryRoot
		.join(".build")
		.join(platform.toolchainBuildDir())
		.join("bin")
		.join(format!("shadercRelease{}", platform.executableSuffix()))
}

/// Assemble the fixed compiler arguments selecting target platform, profile, include directories and varying
/// definition file, in the order the compiler documents them.
pub fn bgfxPlatformArgs (platformId: &str, profile: &str, includeDirs: &[PathBuf], varyingDef: &Path)
-> Vec<OsString>
{
	let mut args: Vec<OsString> = vec!["--platform".into(), platformId.into(), "-p".into(), profile.into()];
	for dir in includeDirs {
		args.push("-i".into());
		args.push(dir.into());
	}
	args.push("--varyingdef".into());
	args.push(varyingDef.into());
	args
}
