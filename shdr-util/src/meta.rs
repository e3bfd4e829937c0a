
//////
//
// Imports
//

// Standard library
use std::{fmt::Display, str::FromStr};

// Anyhow library
use anyhow::{anyhow, Result};



//////
//
// Enums
//

/// Enumerates the platforms the shader toolchain can produce binaries for. Deserialization accepts exactly what
/// [`FromStr`] accepts.
#[cfg_attr(feature="serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature="serde", serde(rename_all="lowercase", try_from="String"))]
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum HostPlatform {
	/// *Microsoft Windows*, compiling to *Direct3D* shader model bytecode.
	Windows,

	/// *Apple macOS*, compiling to *Metal*.
	MacOS,

	/// *Linux*, compiling to *SPIR-V*.
	Linux
}
impl HostPlatform
{
	/// Determine the platform the module was built for.
	pub const fn current () -> Self {
		if cfg!(target_os="windows") {
			Self::Windows
		}
		else if cfg!(target_os="macos") {
			Self::MacOS
		}
		else {
			Self::Linux
		}
	}

	/// The identifier the shader compiler expects for its `--platform` argument.
	pub fn bgfxId (&self) -> &'static str {
		match self {
			Self::Windows => "windows",
			Self::MacOS => "osx",
			Self::Linux => "linux"
		}
	}

	/// The shader profile the shader compiler should target by default on this platform.
	pub fn defaultProfile (&self) -> &'static str {
		match self {
			Self::Windows => "s_5_0",
			Self::MacOS => "metal",
			Self::Linux => "spirv"
		}
	}

	/// The name of the directory below `.build` that the rendering library's build system places its tools in for this
	/// platform.
	pub fn toolchainBuildDir (&self) -> &'static str {
		match self {
			Self::Windows => "win64_vs2022",
			Self::MacOS => if cfg!(target_arch="aarch64") { "osx-arm64" } else { "osx-x64" },
			Self::Linux => "linux64_gcc"
		}
	}

	/// The file name suffix of executables on this platform.
	pub fn executableSuffix (&self) -> &'static str {
		match self {
			Self::Windows => ".exe",
			_ => ""
		}
	}
}
impl FromStr for HostPlatform
{
	type Err = anyhow::Error;

	fn from_str (s: &str) -> Result<Self> {
		match s.trim().to_ascii_lowercase().as_str() {
			"windows" | "win" | "win64" => Ok(Self::Windows),
			"osx" | "macos" | "darwin" => Ok(Self::MacOS),
			"linux" => Ok(Self::Linux),
			other => Err(anyhow!("Unsupported platform identifier: '{other}'"))
		}
	}
}
impl TryFrom<String> for HostPlatform
{
	type Error = anyhow::Error;

	fn try_from (s: String) -> Result<Self> {
		s.parse()
	}
}
impl Display for HostPlatform {
	fn fmt (&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.bgfxId())
	}
}
