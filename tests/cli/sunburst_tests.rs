use predicates::prelude::*;

use crate::common::{Library, luminosity, stdout_json};

#[test]
fn default_grouping_nests_four_levels() {
    let lib = Library::new();
    let catalog = lib.catalog("a.lrcat");

    let tree = stdout_json(luminosity().args(["sunburst", "-o", "-"]).arg(&catalog));

    assert_eq!(tree["name"], "All");
    assert_eq!(tree["size"], 5);
    let cameras: Vec<_> = tree["children"].as_array().unwrap().iter().map(|c| c["name"].clone()).collect();
    assert_eq!(cameras, ["D750", "X-T2"]);
    let xt2_lens = &tree["children"][1]["children"][0];
    assert_eq!(xt2_lens["name"], "XF23mmF1.4 R");
    let f28 = &xt2_lens["children"][1];
    assert_eq!(f28["name"], "2.8");
    let leaf = &f28["children"][0];
    assert_eq!(leaf["name"], "23");
    assert_eq!(leaf["data"][0]["exposure"], "1/128");
    assert_eq!(leaf["size"], 2);
}

#[test]
fn missing_fields_form_an_unlabeled_group() {
    let lib = Library::new();
    let catalog = lib.catalog("a.lrcat");

    let tree = stdout_json(luminosity().args(["sunburst", "-g", "camera,aperture", "--label", "Gear", "-o", "-"]).arg(&catalog));

    assert_eq!(tree["name"], "Gear");
    let d750 = &tree["children"][0];
    assert_eq!(d750["children"][0]["name"], serde_json::Value::Null);
    assert_eq!(d750["children"][0]["size"], 1);
}

#[test]
fn empty_groupby_yields_a_single_leaf() {
    let lib = Library::new();
    let catalog = lib.catalog("a.lrcat");

    let tree = stdout_json(luminosity().args(["sunburst", "-g", "", "-o", "-"]).arg(&catalog));

    assert_eq!(tree["name"], "All");
    assert_eq!(tree["size"], 5);
    assert!(tree.get("children").is_none());
    assert_eq!(tree["data"].as_array().unwrap().len(), 4);
}

#[test]
fn strict_mode_rejects_missing_fields() {
    let lib = Library::new();
    let catalog = lib.catalog("a.lrcat");

    luminosity()
        .args(["sunburst", "--strict", "-g", "camera,aperture", "-o", "-"])
        .arg(&catalog)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing grouping field 'aperture'"));
}

#[test]
fn writes_to_outfile() {
    let lib = Library::new();
    lib.catalog("a.lrcat");

    luminosity().current_dir(lib.path()).args(["sunburst", "a.lrcat"]).assert().success();

    let written = std::fs::read_to_string(lib.path().join("sunburst.json")).unwrap();
    assert!(written.starts_with("{\"name\":\"All\",\"size\":5,"));
}
