
//////
//
// Imports
//

// Standard library
use std::path::*;

// Anyhow library
use anyhow::{Result, anyhow};

// Normalize-path library
use normalize_path::NormalizePath;



//////
//
// Functions
//

/// Normalizes the given path, i.e. resolves/collapses any and all `..` and `.` contained within.
///
/// # Arguments
///
/// * `path` – The path to normalize.
///
/// # Returns
///
/// The normalized path.
pub fn normalize<PathRef: AsRef<Path>> (path: PathRef) -> PathBuf {
	path.as_ref().normalize()
}

/// Normalizes (i.e. returns an absolute path) the given *path* relative to the given *anchor*, **iff** *path* is
/// relative. If it is not, it will just be returned verbatim.
///
/// # Arguments
///
/// * `anchor` – The path to normalize relative to.
/// * `path` – The path to normalize in case it is relative.
///
/// # Returns
///
/// The absolute path resulting from normalizing *path*.
pub fn normalizeToAnchor<PathRef1: AsRef<Path>, PathRef2: AsRef<Path>> (anchor: PathRef1, path: PathRef2) -> PathBuf
{
	if path.as_ref().is_relative() {
		anchor.as_ref().join(path).normalize()
	}
	else {
		path.as_ref().into()
	}
}

/// Computes the path of `path` relative to `base`.
///
/// # Arguments
///
/// * `base` – The directory the result should be relative to.
/// * `path` – A path somewhere below `base`.
///
/// # Returns
///
/// The relative path, or an error if `path` does not reside below `base`.
pub fn relativeTo (base: impl AsRef<Path>, path: impl AsRef<Path>) -> Result<PathBuf> {
	path.as_ref().strip_prefix(base.as_ref()).map(Path::to_path_buf).map_err(|_| anyhow!(
		"'{}' is not located below '{}'", path.as_ref().display(), base.as_ref().display()
	))
}

/// Replaces the suffix `oldSuffix` of the final component of `path` with `newSuffix`. Unlike
/// [`Path::with_extension`], this works for compound suffixes like `.vert.glsl`.
///
/// # Arguments
///
/// * `path` – The path whose file name should be altered.
/// * `oldSuffix` – The suffix the file name is expected to end with.
/// * `newSuffix` – The replacement suffix.
///
/// # Returns
///
/// The altered path, or an error if the file name does not end with `oldSuffix` or is not valid UTF-8.
pub fn replaceSuffix (path: impl AsRef<Path>, oldSuffix: &str, newSuffix: &str) -> Result<PathBuf>
{
	let path = path.as_ref();
	let name = path.file_name().and_then(|name| name.to_str()).ok_or_else(
		|| anyhow!("Path has no UTF-8 file name: '{}'", path.display())
	)?;
	let stem = name.strip_suffix(oldSuffix).ok_or_else(
		|| anyhow!("File name '{name}' does not end with '{oldSuffix}'")
	)?;
	Ok(path.with_file_name(format!("{stem}{newSuffix}")))
}

/// Renders the given path with forward slashes regardless of host platform, for stable console output.
pub fn displayPortable (path: impl AsRef<Path>) -> String {
	path.as_ref().components()
		.map(|component| component.as_os_str().to_string_lossy().into_owned())
		.collect::<Vec<_>>()
		.join("/")
}
