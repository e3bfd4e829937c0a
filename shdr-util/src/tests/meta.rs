
//////
//
// Imports
//

// Local imports
use crate::meta::*;



//////
//
// Tests
//

#[test]
fn test_HostPlatform_fromStr()
{
	assert_eq!("windows".parse::<HostPlatform>().unwrap(), HostPlatform::Windows);
	assert_eq!("OSX".parse::<HostPlatform>().unwrap(), HostPlatform::MacOS);
	assert_eq!(" macos ".parse::<HostPlatform>().unwrap(), HostPlatform::MacOS);
	assert_eq!("linux".parse::<HostPlatform>().unwrap(), HostPlatform::Linux);
	assert!("amiga".parse::<HostPlatform>().is_err());
}

#[test]
fn test_HostPlatform_toolchainProperties()
{
	let windows = HostPlatform::Windows;
	assert_eq!(windows.bgfxId(), "windows");
	assert_eq!(windows.defaultProfile(), "s_5_0");
	assert_eq!(windows.toolchainBuildDir(), "win64_vs2022");
	assert_eq!(windows.executableSuffix(), ".exe");

	let linux = HostPlatform::Linux;
	assert_eq!(linux.defaultProfile(), "spirv");
	assert_eq!(linux.executableSuffix(), "");
	assert_eq!(linux.to_string(), "linux");

	assert!(HostPlatform::MacOS.toolchainBuildDir().starts_with("osx-"));
}

#[test]
fn test_HostPlatform_current()
{
	let current = HostPlatform::current();
	#[cfg(target_os="windows")] assert_eq!(current, HostPlatform::Windows);
	#[cfg(target_os="macos")] assert_eq!(current, HostPlatform::MacOS);
	#[cfg(target_os="linux")] assert_eq!(current, HostPlatform::Linux);
	let _ = current;
}
