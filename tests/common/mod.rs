use std::path::{Path, PathBuf};

use assert_cmd::Command;

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// `smoot` pointed at the fixture data, isolated from any user config.
pub fn smoot() -> Command {
    smoot_with(&fixture("airlines_db.json"))
}

/// `smoot` with a specific airline database and the fixture route registry.
pub fn smoot_with(airlines: &Path) -> Command {
    let mut cmd = Command::cargo_bin("smoot").unwrap();
    let home = tempfile::tempdir().unwrap().into_path();
    cmd.current_dir(&home)
        .env("HOME", &home)
        .env("NO_COLOR", "1")
        .arg("--airlines-db")
        .arg(airlines)
        .arg("--routes-db")
        .arg(fixture("routes.json"));
    cmd
}
