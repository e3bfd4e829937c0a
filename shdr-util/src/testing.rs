
//////
//
// Imports
//

// Standard library
use std::{fs, path::{Path, PathBuf}};



//////
//
// Classes
//

////
// ScratchDir

/// A uniquely named directory below the system temp directory that gets removed again when dropped. Meant for tests,
/// hence panics instead of returning errors.
pub struct ScratchDir {
	path: PathBuf
}
impl ScratchDir
{
	///
	pub fn new () -> Self {
		let path = std::env::temp_dir().join(format!("shdr-test-{}", uuid::Uuid::new_v4()));
		fs::create_dir_all(&path).unwrap();
		Self { path }
	}

	///
	pub fn path (&self) -> &Path {
		&self.path
	}

	/// Write a file at the given relative path, including all parent directories.
	pub fn write (&self, relPath: impl AsRef<Path>, content: &str) -> PathBuf {
		let path = self.path.join(relPath);
		fs::create_dir_all(path.parent().unwrap()).unwrap();
		fs::write(&path, content).unwrap();
		path
	}

	/// Create an empty file at the given relative path, including all parent directories.
	pub fn touch (&self, relPath: impl AsRef<Path>) -> PathBuf {
		self.write(relPath, "")
	}
}
impl Drop for ScratchDir {
	fn drop (&mut self) {
		let _ = fs::remove_dir_all(&self.path);
	}
}
