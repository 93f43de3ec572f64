use assert_cmd::prelude::*;
use std::process::Command;

//
// For more information about this file's naming convention, see
// https://doc.rust-lang.org/book/ch11-03-test-organization.html
//
#[allow(dead_code)]
pub fn autoload(fixture_name: &str) -> Command {
    let mut command = Command::cargo_bin("autoload")
        .expect("Failed to locate the autoload binary");
    command
        .arg("--root-directory")
        .arg(format!("tests/fixtures/{}", fixture_name));
    command
}
