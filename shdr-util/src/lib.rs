
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

/// Submodule providing operations on the file system.
pub mod fs;

/// Submodule providing utilities for reasoning about meta-related things like the current host platform.
pub mod meta;

/// Submodule providing operations on file system paths.
pub mod path;

/// Submodule providing helpers for tests, also of dependent crates.
#[cfg(any(test, feature="testing"))]
pub mod testing;

/// Tests for the utilities library.
#[cfg(test)]
mod tests;



//////
//
// Imports
//

// Normalize-path library
pub use normalize_path; // re-export



//////
//
// Functions
//

/// Splits the given text into its lines after trimming surrounding whitespace, dropping the single empty line that an
/// empty input would otherwise produce.
///
/// # Arguments
///
/// * `text` – The text to split, typically captured output of an external process.
///
/// # Returns
///
/// A vector of owned lines in order of appearance.
pub fn trimmedLines (text: &str) -> Vec<String> {
	let trimmed = text.trim();
	if trimmed.is_empty() {
		return Vec::new();
	}
	trimmed.lines().map(str::to_owned).collect()
}

/// Computes the width of the widest string in the given sequence, in characters.
pub fn maxCharWidth<Str: AsRef<str>> (strings: impl IntoIterator<Item=Str>) -> usize {
	strings.into_iter().map(|s| s.as_ref().chars().count()).max().unwrap_or(0)
}
