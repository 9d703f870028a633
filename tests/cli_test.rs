use anyhow::Result;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Runs the real binary with an isolated home directory and config override.
fn nsid(home: &Path, config: &Path, args: &[&OsStr]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_nsid"))
        .args(args)
        .env("HOME", home)
        .env("NSID_CONFIG", config)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .current_dir(home)
        .output()?;
    Ok(output)
}

#[test]
fn test_config_override_is_read_and_written() -> Result<()> {
    let dir = TempDir::new()?;
    let config = dir.path().join("profile").join("custom.nsid");
    fs::create_dir_all(config.parent().unwrap_or(dir.path()))?;
    let script = dir.path().join("tool");

    let output = nsid(dir.path(), &config, &[OsStr::new("-d"), OsStr::new("Ruby")])?;
    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&config)?, "ruby\n");
    assert!(!dir.path().join(".nsid").exists());

    let output = nsid(dir.path(), &config, &[OsStr::new("-sd")])?;
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "ruby");

    let output = nsid(dir.path(), &config, &[script.as_os_str()])?;
    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&script)?, "#!/usr/bin/env ruby\n");
    Ok(())
}

#[test]
fn test_double_dash_is_rejected_as_flag() -> Result<()> {
    let dir = TempDir::new()?;
    let config = dir.path().join(".nsid");

    let output = nsid(dir.path(), &config, &[OsStr::new("--"), OsStr::new("x")])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("[nsid] -- is not a valid flag")
    );
    assert!(!dir.path().join("x").exists());

    let output = nsid(dir.path(), &config, &[OsStr::new("--")])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("[nsid] -- is not a valid flag")
    );
    Ok(())
}

#[test]
fn test_no_arguments_fails_without_config() -> Result<()> {
    let dir = TempDir::new()?;
    let config = dir.path().join(".nsid");

    let output = nsid(dir.path(), &config, &[])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("[nsid] Must supply at least an option and/or file name"));
    assert!(!config.exists());
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_non_utf8_file_name_is_created() -> Result<()> {
    use std::os::unix::ffi::OsStrExt;
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new()?;
    let config = dir.path().join(".nsid");
    let name = OsStr::from_bytes(b"f\xff.sh");

    let output = nsid(dir.path(), &config, &[OsStr::new("-b"), name])?;
    assert!(output.status.success());

    let script = dir.path().join(name);
    assert_eq!(fs::read_to_string(&script)?, "#!/usr/bin/env bash\n");
    assert_eq!(fs::metadata(&script)?.permissions().mode() & 0o777, 0o700);
    Ok(())
}
