#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use gatelog::Store;
use gatelog::config::CONFIG_DIR_ENV;
use std::env;
use std::fs;
use std::path::PathBuf;

/// The gatelog binary, with its config directory moved under the temp dir.
pub fn gl() -> Command {
    let mut cmd = cargo_bin_cmd!("gatelog");
    cmd.env(CONFIG_DIR_ENV, env::temp_dir().join("gatelog_test_config"));
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_gatelog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    fs::remove_file(format!("{}-wal", db_path)).ok();
    fs::remove_file(format!("{}-shm", db_path)).ok();
    db_path
}

/// Fresh empty directory inside the system temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("gatelog_{}", name));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB through the CLI (creates tables, no config file update)
pub fn init_db(db_path: &str) {
    gl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize the DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    for number in ["B200", "A100", "C300"] {
        gl().args(["--db", db_path, "vehicle", "add", number])
            .assert()
            .success();
    }

    for name in ["Petrov Ivan", "Andreev Oleg"] {
        gl().args(["--db", db_path, "commander", "add", name])
            .assert()
            .success();
    }
}

pub fn memory_store() -> Store {
    Store::open_in_memory().expect("open in-memory store")
}
