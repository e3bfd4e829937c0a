
//////
//
// Imports
//

// Standard library
use std::{ffi::OsString, fmt::Display, path::{Path, PathBuf}};

// Anyhow library
use anyhow::Result;

// Local imports
use crate::util;



//////
//
// Enums
//

/// The pipeline stage a shader source is written for.
#[derive(Debug,Clone,Copy,PartialEq,Eq,PartialOrd,Ord,Hash)]
pub enum ShaderKind {
	Vertex,
	Fragment
}
impl ShaderKind
{
	/// All kinds, in the order the driver compiles them.
	pub const ALL: [ShaderKind; 2] = [Self::Vertex, Self::Fragment];

	/// The value of the compiler's `--type` argument for this kind.
	pub fn typeFlag (&self) -> &'static str {
		match self {
			Self::Vertex => "vertex",
			Self::Fragment => "fragment"
		}
	}

	/// The file name suffix identifying sources of this kind unless configured otherwise.
	pub fn defaultSuffix (&self) -> &'static str {
		match self {
			Self::Vertex => ".vert.glsl",
			Self::Fragment => ".frag.glsl"
		}
	}
}
impl Display for ShaderKind {
	fn fmt (&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.typeFlag())
	}
}



//////
//
// Structs
//

/// Determines how artifact paths are derived from shader source paths.
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct OutputNaming {
	/// The suffix every artifact file name ends with.
	pub binarySuffix: String,

	/// If `true`, the whole source suffix (e.g. `.vert.glsl`) is replaced, otherwise only the source language extension
	/// (the part after the last `.` of the suffix, e.g. `.glsl`). So `a.vert.glsl` becomes `a.bin` when set and
	/// `a.vert.bin` by default. Setting it makes `a.vert.glsl` and `a.frag.glsl` compete for the same artifact, which
	/// [`Driver::run`](crate::Driver::run) rejects before compiling anything.
	pub stripStageSuffix: bool
}
impl Default for OutputNaming {
	fn default () -> Self { Self {
		binarySuffix: ".bin".into(), stripStageSuffix: false
	}}
}
impl OutputNaming
{
	/// Derive the relative artifact path of a source with the given relative path and source suffix.
	pub fn artifactRelPath (&self, sourceRelPath: &Path, sourceSuffix: &str) -> Result<PathBuf>
	{
		let replaced = if self.stripStageSuffix {
			sourceSuffix
		}
		else {
			sourceSuffix.rfind('.').map(|pos| &sourceSuffix[pos..]).unwrap_or(sourceSuffix)
		};
		util::path::replaceSuffix(sourceRelPath, replaced, &self.binarySuffix)
	}
}

/// A shader source file discovered below the source root.
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct ShaderSource {
	/// The kind of shader, as determined by the suffix the file was discovered with.
	pub kind: ShaderKind,

	/// The full path of the file.
	pub path: PathBuf,

	/// The path relative to the source root, which identifies the source.
	pub relPath: PathBuf
}
impl ShaderSource {
	/// Classify the file at `path` found below `sourceRoot`.
	pub fn new (kind: ShaderKind, sourceRoot: &Path, path: PathBuf) -> Result<Self> {
		let relPath = util::path::relativeTo(sourceRoot, &path)?;
		Ok(Self { kind, path, relPath })
	}
}

/// The compiled counterpart of a [`ShaderSource`].
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct CompiledShaderArtifact {
	/// The full path the artifact is written to.
	pub path: PathBuf,

	/// The path relative to the output root.
	pub relPath: PathBuf
}
impl CompiledShaderArtifact {
	/// Map the given source to its artifact below `outputRoot`. This is a pure function of the source's relative path,
	/// its suffix, the naming and the output root.
	pub fn forSource (source: &ShaderSource, sourceSuffix: &str, outputRoot: &Path, naming: &OutputNaming)
	-> Result<Self> {
		let relPath = naming.artifactRelPath(&source.relPath, sourceSuffix)?;
		Ok(Self { path: outputRoot.join(&relPath), relPath })
	}
}

/// Everything required to run the external compiler for one shader.
#[derive(Debug,Clone)]
pub struct CompileRequest<'args> {
	pub source: ShaderSource,
	pub artifact: CompiledShaderArtifact,
	pub platformArgs: &'args [OsString]
}
impl CompileRequest<'_>
{
	/// The arguments to pass to the compiler: input, output and shader type, followed by the fixed platform arguments.
	pub fn commandLine (&self) -> Vec<OsString>
	{
		let mut args: Vec<OsString> = vec![
			"-f".into(), self.source.path.clone().into(),
			"-o".into(), self.artifact.path.clone().into(),
			"--type".into(), self.source.kind.typeFlag().into()
		];
		args.extend(self.platformArgs.iter().cloned());
		args
	}
}
