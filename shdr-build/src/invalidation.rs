
//////
//
// Imports
//

// Standard library
use std::{fs, io::ErrorKind, path::{Path, PathBuf}};

// Anyhow library
use anyhow::{Context, Result};

// CRC64 library
use crc64fast_nvme as crc64;

// Local imports
use crate::*;



//////
//
// Traits
//

/// Decides whether a compiled artifact is still valid for its source, i.e. whether compilation can be skipped.
pub trait InvalidationStrategy
{
	/// Report whether `artifact` is up to date with respect to `source`. A missing artifact is never up to date.
	fn isUpToDate (&self, source: &Path, artifact: &Path) -> Result<bool>;

	/// Called after `artifact` was successfully (re)built from `source`.
	fn recordBuilt (&self, source: &Path, artifact: &Path) -> Result<()>;
}



//////
//
// Classes
//

////
// TimestampInvalidation

/// Considers an artifact up to date iff it exists and was last modified no earlier than its source.
#[derive(Debug,Default,Clone,Copy)]
pub struct TimestampInvalidation;

impl InvalidationStrategy for TimestampInvalidation
{
	fn isUpToDate (&self, source: &Path, artifact: &Path) -> Result<bool>
	{
		let artifactModified = match fs::metadata(artifact) {
			Ok(meta) => meta.modified()?,
			Err(err) if err.kind() == ErrorKind::NotFound => return Ok(false),
			Err(err) => return Err(err).context(format!("Could not inspect '{}'", artifact.display()))
		};
		let sourceModified = fs::metadata(source)
			.with_context(|| format!("Could not inspect '{}'", source.display()))?
			.modified()?;
		Ok(artifactModified >= sourceModified)
	}

	fn recordBuilt (&self, _: &Path, _: &Path) -> Result<()> {
		Ok(())
	}
}


////
// ContentHashInvalidation

/// Considers an artifact up to date iff it exists and the *CRC-64/NVME* digest of the source content recorded next to it
/// at its last build matches the current content. Only the source file itself is digested, changes in included files
/// go unnoticed.
#[derive(Debug,Default,Clone,Copy)]
pub struct ContentHashInvalidation;

impl ContentHashInvalidation
{
	/// The suffix appended to an artifact's file name to obtain the path of its digest record.
	pub const RECORD_SUFFIX: &'static str = ".crc64";

	/// The path of the digest record belonging to the given artifact.
	pub fn recordPath (artifact: &Path) -> PathBuf {
		let mut record = artifact.as_os_str().to_owned();
		record.push(Self::RECORD_SUFFIX);
		record.into()
	}

	/// Digest the content of the given file.
	pub fn digestFile (path: &Path) -> Result<u64> {
		let content = fs::read(path).with_context(|| format!("Could not read '{}'", path.display()))?;
		let mut digest = crc64::Digest::new();
		digest.write(&content);
		Ok(digest.sum64())
	}
}
impl InvalidationStrategy for ContentHashInvalidation
{
	fn isUpToDate (&self, source: &Path, artifact: &Path) -> Result<bool>
	{
		if !util::fs::isRegularFile(artifact) {
			return Ok(false);
		}
		let recorded = match fs::read_to_string(Self::recordPath(artifact)) {
			Ok(text) => text,
			Err(err) if err.kind() == ErrorKind::NotFound => return Ok(false),
			Err(err) => return Err(err.into())
		};
		let current = format!("{:016x}", Self::digestFile(source)?);
		Ok(recorded.trim() == current)
	}

	fn recordBuilt (&self, source: &Path, artifact: &Path) -> Result<()> {
		let digest = Self::digestFile(source)?;
		let record = Self::recordPath(artifact);
		fs::write(&record, format!("{digest:016x}\n"))
			.with_context(|| format!("Could not write '{}'", record.display()))
	}
}



//////
//
// Functions
//

/// Instantiate the strategy selected in the run environment.
pub fn forPolicy (policy: runenv::Invalidation) -> Box<dyn InvalidationStrategy> {
	match policy {
		runenv::Invalidation::Timestamp => Box::new(TimestampInvalidation),
		runenv::Invalidation::ContentHash => Box::new(ContentHashInvalidation)
	}
}
