use std::fs;

use predicates::prelude::*;

use crate::common::{Library, luminosity, stdout_json};

#[test]
fn merges_catalogs_into_one_report() {
    let lib = Library::new();
    let a = lib.catalog("a.lrcat");
    let b = lib.catalog("b.lrcat");

    let report = stdout_json(luminosity().args(["stats", "-o", "-"]).arg(&a).arg(&b));

    assert_eq!(report["catalogs_processed"], 2);
    assert_eq!(report["paths"].as_array().unwrap().len(), 2);
    let cameras = report["stats"]["by_camera"].as_array().unwrap();
    assert_eq!(cameras.len(), 2);
    assert_eq!(cameras[0]["label"], "D750");
    assert_eq!(cameras[0]["count"], 4);
    assert_eq!(cameras[1]["count"], 6);
    assert_eq!(report["cameras"].as_array().unwrap().len(), 2);
    assert!(report["generated_at"].is_string());
}

#[test]
fn writes_default_outfile_and_per_catalog_reports() {
    let lib = Library::new();
    lib.catalog("Main.lrcat");

    luminosity().current_dir(lib.path()).args(["stats", "-c", "-p", "Main.lrcat"]).assert().success();

    let merged = fs::read_to_string(lib.path().join("stats.json")).unwrap();
    assert!(merged.contains("\n  \"paths\""), "pretty-printed output expected");
    let single: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(lib.path().join("Main.json")).unwrap()).unwrap();
    assert_eq!(single["stats"]["by_keyword"][0]["label"], "travel");
}

#[test]
fn directories_are_searched_through_every_level() {
    let lib = Library::new();
    lib.catalog("2016/06/Old.lrcat");
    lib.catalog("Current.lrcat");
    lib.write("Current Previews.lrdata/Hidden.lrcat", b"not a catalog");

    let deep = stdout_json(luminosity().args(["stats", "-o", "-"]).arg(lib.path()));
    assert_eq!(deep["catalogs_processed"], 2);

    let shallow = stdout_json(luminosity().args(["stats", "--max-depth", "1", "-o", "-"]).arg(lib.path()));
    assert_eq!(shallow["catalogs_processed"], 1);
}

#[test]
fn photo_records_from_every_catalog_are_listed() {
    let lib = Library::new();
    let a = lib.catalog("a.lrcat");
    let b = lib.catalog("b.lrcat");

    let report = stdout_json(luminosity().args(["stats", "-o", "-"]).arg(&a).arg(&b));

    let photos = report["photos"].as_array().unwrap();
    assert_eq!(photos.len(), 10);
    assert_eq!(photos[0]["full_name"], "/photos/2017/DSCF0001.RAF");
    assert_eq!(photos[0]["capture_time"], "2017-01-01T10:00:00");
    assert_eq!(photos[0]["fnumber"], "2.8");
    assert_eq!(photos[0]["lat"], 48.8584);
    assert_eq!(photos[5]["full_name"], "/photos/2017/DSCF0001.RAF");
}

#[test]
fn undated_photos_are_reported() {
    let lib = Library::new();
    let catalog = lib.catalog("a.lrcat");
    rusqlite::Connection::open(&catalog)
        .unwrap()
        .execute("INSERT INTO Adobe_images (id_local, rootFile, fileFormat) VALUES (6, NULL, 'RAW')", [])
        .unwrap();

    luminosity()
        .args(["stats", "-o", "-"])
        .arg(&catalog)
        .assert()
        .success()
        .stderr(predicate::str::contains("action=validate_dates"));
}

#[test]
fn default_outfile_follows_format() {
    let lib = Library::new();
    lib.catalog("a.lrcat");

    luminosity().current_dir(lib.path()).args(["stats", "--format", "yaml", "a.lrcat"]).assert().success();
    luminosity().current_dir(lib.path()).args(["stats", "--format", "table", "a.lrcat"]).assert().success();

    assert!(fs::read_to_string(lib.path().join("stats.yaml")).unwrap().contains("catalogs_processed: 1"));
    assert!(fs::read_to_string(lib.path().join("stats.txt")).unwrap().contains("By Keyword"));
    assert!(!lib.path().join("stats.json").exists());
}

#[test]
fn unreadable_catalogs_are_skipped() {
    let lib = Library::new();
    let good = lib.catalog("good.lrcat");
    let bad = lib.write("bad.lrcat", b"definitely not sqlite, padded to look like a header........");

    luminosity()
        .args(["stats", "-o", "-"])
        .arg(&bad)
        .arg(&good)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"catalogs_processed\":1"))
        .stderr(predicate::str::contains("action=catalog_open"));
}

#[test]
fn no_catalogs_fails() {
    let lib = Library::new();
    lib.write("notes.txt", b"hello");

    luminosity()
        .args(["stats", "-o", "-"])
        .arg(lib.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No catalogs found"));
}

#[test]
fn yaml_and_table_formats() {
    let lib = Library::new();
    let catalog = lib.catalog("a.lrcat");

    luminosity()
        .args(["stats", "--format", "yaml", "-o", "-"])
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("catalogs_processed: 1"));

    luminosity()
        .args(["stats", "--format", "table", "-o", "-"])
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("By Exposure Time"))
        .stdout(predicate::str::contains("1/128"))
        .stdout(predicate::str::contains("photos=5"));
}
