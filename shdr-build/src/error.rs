
//////
//
// Imports
//

// Standard library
use std::{error::Error, fmt::{Display, Formatter}, path::PathBuf};



//////
//
// Errors
//

/// A required input of the build setup is missing or inconsistent. Always fatal.
#[derive(Debug)]
pub enum ConfigurationError {
	/// The shader source root directory does not exist.
	MissingSourceRoot(PathBuf),

	/// The rendering library checkout does not exist.
	MissingLibraryRoot(PathBuf),

	/// Two distinct shader sources would be compiled into the same artifact.
	ArtifactCollision { artifact: PathBuf, first: PathBuf, second: PathBuf },

	/// Some path of the setup could not be mapped, e.g. because it is not valid UTF-8.
	InvalidPath(anyhow::Error)
}
impl Display for ConfigurationError {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
		let desc = match self {
			Self::MissingSourceRoot(path) => &format!("shader source directory not found: {}", path.display()),
			Self::MissingLibraryRoot(path) => &format!(
				"rendering library not found at {}; adjust `bgfxDir`", path.display()
			),
			Self::ArtifactCollision{artifact, first, second} => &format!(
				"'{}' and '{}' both compile to '{}'", first.display(), second.display(), artifact.display()
			),
			Self::InvalidPath(err) => &format!("invalid path: {err}")
		};
		write!(formatter, "ConfigurationError[{desc}]")
	}
}
impl Error for ConfigurationError {}

/// A required tool is not available. Always fatal.
#[derive(Debug)]
pub enum ToolchainError {
	/// The shader compiler executable is not present as a regular file.
	MissingCompiler(PathBuf)
}
impl Display for ToolchainError {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
		let desc = match self {
			Self::MissingCompiler(path) => &format!(
				"shader compiler not found at {}; build the rendering library tools first", path.display()
			)
		};
		write!(formatter, "ToolchainError[{desc}]")
	}
}
impl Error for ToolchainError {}

/// A single shader failed to compile. Never fatal; recorded with the file's outcome.
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct CompileError {
	/// The exit code of the compiler, or [`None`] if it could not be spawned or was terminated by a signal.
	pub exitCode: Option<i32>,

	/// The diagnostic lines explaining the failure.
	pub message: Vec<String>
}
impl Display for CompileError {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
		let code = match self.exitCode {
			Some(code) => format!("exit code {code}"),
			None => "no exit code".into()
		};
		match self.message.first() {
			Some(first) => write!(formatter, "CompileError[{code}: {first}]"),
			None => write!(formatter, "CompileError[{code}]")
		}
	}
}
impl Error for CompileError {}

/// Any error that aborts a shader build before or while processing.
#[derive(Debug)]
pub enum DriverError {
	Configuration(ConfigurationError),
	Toolchain(ToolchainError),
	Io(anyhow::Error)
}
impl Display for DriverError {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Configuration(err) => write!(formatter, "{err}"),
			Self::Toolchain(err) => write!(formatter, "{err}"),
			Self::Io(err) => write!(formatter, "DriverError[I/O failure: {err:#}]")
		}
	}
}
impl Error for DriverError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			Self::Configuration(err) => Some(err),
			Self::Toolchain(err) => Some(err),
			Self::Io(err) => Some(&**err)
		}
	}
}
impl From<ConfigurationError> for DriverError {
	fn from (err: ConfigurationError) -> Self { Self::Configuration(err) }
}
impl From<ToolchainError> for DriverError {
	fn from (err: ToolchainError) -> Self { Self::Toolchain(err) }
}
impl From<anyhow::Error> for DriverError {
	fn from (err: anyhow::Error) -> Self { Self::Io(err) }
}
impl From<std::io::Error> for DriverError {
	fn from (err: std::io::Error) -> Self { Self::Io(err.into()) }
}
