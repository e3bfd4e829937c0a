
//////
//
// Imports
//

// Standard library
use std::{fs, path::{Path, PathBuf}};

// Anyhow library
use anyhow::{Context, Result, anyhow};



//////
//
// Functions
//

/// Recursively run a closure on an entire directory tree.
///
/// The closure receives the path of the visited entry, its path relative to `baseDirectory` (empty for the root
/// itself) and its file type. Directory entries are visited in lexical order of their file names. Symbolic links to
/// regular files are reported with the type of their target; links to directories are reported but not descended into.
pub fn doRecursively<PathRef: AsRef<Path>, Action: FnMut(&Path, &Path, fs::FileType)->Result<()>> (
	baseDirectory: PathRef, mut action: Action
) -> Result<()>
{
	// The actual recursive worker
	fn recurse<Action: FnMut(&Path, &Path, fs::FileType)->Result<()>> (source: &Path, destStack: &Path, action: &mut Action)
	-> Result<()> {
		let roottype = fs::metadata(source)
			.with_context(|| format!("Could not access '{}'", source.display()))?
			.file_type();
		action(source, destStack, roottype)?;
		if !roottype.is_dir() { return Ok(()) }

		let mut entries = fs::read_dir(source)
			.with_context(|| format!("Could not open directory '{}'", source.display()))?
			.collect::<std::io::Result<Vec<_>>>()?;
		entries.sort_by_key(|entry| entry.file_name());
		for entry in entries
		{
			let mut filetype = entry.file_type()?;
			if filetype.is_symlink() && let Ok(target) = fs::metadata(entry.path()) && target.is_file() {
				filetype = target.file_type();
			}
			if filetype.is_dir() {
				recurse(&entry.path(), &destStack.join(entry.file_name()), action)?;
			} else {
				action(&entry.path(), &destStack.join(entry.file_name()), filetype)?;
			}
		}
		Ok(())
	}

	// Dispatch
	recurse(baseDirectory.as_ref(), Path::new(""), &mut action)
}

/// Find all regular files below `rootDirectory` whose file name ends with `suffix`.
///
/// # Arguments
///
/// * `rootDirectory` – The directory to search recursively.
/// * `suffix` – The required ending of the file name, e.g. `.vert.glsl`.
///
/// # Returns
///
/// The full paths of all matching files, sorted lexically by their path relative to `rootDirectory`.
pub fn findFilesWithSuffix (rootDirectory: impl AsRef<Path>, suffix: &str) -> Result<Vec<PathBuf>>
{
	let rootDirectory = rootDirectory.as_ref();
	if !rootDirectory.is_dir() {
		return Err(anyhow!("Not a directory: '{}'", rootDirectory.display()));
	}

	let mut found = Vec::new();
	doRecursively(rootDirectory, |_, relPath, fileType| {
		if fileType.is_file() {
			if let Some(name) = relPath.file_name().and_then(|n| n.to_str()) && name.ends_with(suffix) {
				found.push(relPath.to_owned());
			}
		}
		Ok(())
	})?;
	found.sort();

	Ok(found.into_iter().map(|relPath| rootDirectory.join(relPath)).collect())
}

/// Make sure the parent directory of the given file path exists, creating all missing ancestors. Existing directories
/// and their contents are left untouched.
pub fn ensureParentDir (filepath: impl AsRef<Path>) -> Result<()>
{
	if let Some(parent) = filepath.as_ref().parent() && !parent.as_os_str().is_empty() {
		fs::create_dir_all(parent)
			.with_context(|| format!("Could not create directory '{}'", parent.display()))?;
	}
	Ok(())
}

/// Report whether the given path refers to an existing regular file (following symlinks).
#[inline(always)]
pub fn isRegularFile (path: impl AsRef<Path>) -> bool {
	fs::metadata(path).map(|meta| meta.is_file()).unwrap_or(false)
}
