
//////
//
// Module definitions
//


/// Tests for the `meta` module.
mod meta;

/// Tests for the `path` module.
mod path;



//////
//
// Imports
//

// Local imports
use crate::*;



//////
//
// Helpers
//

pub(crate) use crate::testing::ScratchDir;



//////
//
// Tests for functionality in the root module
//

#[test]
fn test_trimmedLines()
{
	assert!(trimmedLines("").is_empty());
	assert!(trimmedLines("  \n\t\n").is_empty());
	assert_eq!(trimmedLines("\nfirst\nsecond\n\n"), vec!["first", "second"]);
	assert_eq!(trimmedLines("a\r\nb"), vec!["a", "b"]);
}

#[test]
fn test_maxCharWidth()
{
	assert_eq!(maxCharWidth(Vec::<String>::new()), 0);
	assert_eq!(maxCharWidth(["a", "abc", "ab"]), 3);
	// Counts characters, not bytes
	assert_eq!(maxCharWidth(["Küche"]), 5);
}
