
//////
//
// Imports
//

// Standard library
use std::path::{Path, PathBuf};

// Local imports
use crate::path::*;



//////
//
// Tests
//

#[test]
fn test_normalizeToAnchor()
{
	let anchor = Path::new("/solution");
	assert_eq!(
		normalizeToAnchor(anchor, "Engine.Assets/./Materials/../Materials"),
		PathBuf::from("/solution/Engine.Assets/Materials")
	);
	assert_eq!(normalizeToAnchor(anchor, "/elsewhere/bgfx"), PathBuf::from("/elsewhere/bgfx"));
}

#[test]
fn test_relativeTo()
{
	let base = Path::new("/m");
	assert_eq!(relativeTo(base, "/m/sub/a.vert.glsl").unwrap(), Path::new("sub").join("a.vert.glsl"));
	assert!(relativeTo(base, "/other/a.vert.glsl").is_err());
}

#[test]
fn test_replaceSuffix()
{
	assert_eq!(
		replaceSuffix(Path::new("sub").join("a.vert.glsl"), ".glsl", ".bin").unwrap(),
		Path::new("sub").join("a.vert.bin")
	);
	assert_eq!(
		replaceSuffix("a.vert.glsl", ".vert.glsl", ".bin").unwrap(), PathBuf::from("a.bin")
	);
	assert!(replaceSuffix("a.frag.glsl", ".vert.glsl", ".bin").is_err());
}

#[test]
fn test_displayPortable()
{
	assert_eq!(displayPortable(Path::new("sub").join("deeper").join("x.bin")), "sub/deeper/x.bin");
	assert_eq!(displayPortable("x.bin"), "x.bin");
}
