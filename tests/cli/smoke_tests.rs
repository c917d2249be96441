use predicates::prelude::*;

use crate::common::luminosity;

#[test]
fn shows_help() {
    luminosity()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operate on Lightroom catalogs"))
        .stdout(predicate::str::contains("sunburst"));
}

#[test]
fn shows_version() {
    luminosity().arg("--version").assert().success().stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn requires_a_subcommand() {
    luminosity().assert().failure();
}

#[test]
fn rejects_unknown_format() {
    luminosity()
        .args(["stats", "--format", "csv", "a.lrcat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("csv"));
}
