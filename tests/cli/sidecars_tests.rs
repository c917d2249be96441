use predicates::prelude::*;

use crate::common::{Library, luminosity};

#[test]
fn lists_sidecar_paths() {
    let lib = Library::new();
    let catalog = lib.catalog("a.lrcat");

    luminosity()
        .args(["sidecars", "list"])
        .arg(&catalog)
        .assert()
        .success()
        .stdout("/photos/2017/DSCF0001.JPG\n/photos/2017/DSCF0002.JPG\n/photos/2017/DSC_0005.JPG\n");
}

#[test]
fn summary_checks_files_on_disk() {
    let lib = Library::new();
    let catalog = lib.catalog("a.lrcat");
    let root = format!("{}/photos/", lib.path().display());
    lib.relocate(&catalog, &root);
    lib.write("photos/2017/DSCF0001.RAF", &[0; 100]);
    lib.write("photos/2017/DSCF0001.JPG", &[0; 1024]);
    lib.write("photos/2017/DSCF0002.JPG", &[0; 512]);
    lib.write("photos/2017/DSC_0005.NEF", &[0; 100]);

    luminosity()
        .args(["sidecars", "summary"])
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("Count:             2"))
        .stdout(predicate::str::contains("Total Size:        1.5 KiB"))
        .stdout(predicate::str::contains("Missing Sidecars:  1"))
        .stdout(predicate::str::contains("Missing Originals: 1"));
}

#[test]
fn unreadable_catalog_fails_after_the_rest() {
    let lib = Library::new();
    let catalog = lib.catalog("a.lrcat");

    luminosity()
        .args(["sidecars", "list"])
        .arg(lib.path().join("missing.lrcat"))
        .arg(&catalog)
        .assert()
        .failure()
        .stdout(predicate::str::contains("DSCF0001.JPG"))
        .stderr(predicate::str::contains("1 of 2 catalogs could not be read"));
}
