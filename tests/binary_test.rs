use std::process::Command;

use tempfile::TempDir;

// Runs the built binary with a clean environment rooted in `home`.
fn moviedbcli(home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_moviedbcli"));
    cmd.env_remove("MOVIEDB_API_KEY")
        .env_remove("API_KEY")
        .env_remove("MOVIEDB_API_URL")
        .env("HOME", home.path())
        .env("XDG_DATA_HOME", home.path())
        .env("MOVIEDB_CACHE_DIR", home.path().join("cache"));
    cmd
}

#[test]
fn test_missing_key_warning_stays_off_stdout() {
    let home = TempDir::new().unwrap();

    let output = moviedbcli(&home)
        .args(["list-movies", "--page", "1", "--local"])
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No API key configured"));
    assert!(!stdout.contains("No API key configured"));
    // nothing is cached yet, so the local read fails
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.is_empty());
}
