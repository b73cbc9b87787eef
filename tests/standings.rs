use std::fs;
use std::path::PathBuf;

use ll_defense::standings::{add_roster_names, rundle_links};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn rundle_links_filter_on_division() {
    let html = read_fixture("standings_page.html");
    let links = rundle_links(&html, "Pacific");
    assert_eq!(
        links,
        vec![
            "/standings.php?78&A_Pacific",
            "/standings.php?78&B_Pacific",
            "/standings.php?78&B_Pacific",
        ]
    );
}

#[test]
fn other_division_gets_its_own_links() {
    let html = read_fixture("standings_page.html");
    assert_eq!(
        rundle_links(&html, "Atlantic"),
        vec!["/standings.php?78&A_Atlantic"]
    );
}

#[test]
fn roster_names_come_from_cell_class_tokens() {
    let mut roster = Vec::new();
    add_roster_names(&read_fixture("rundle_a.html"), &mut roster);
    // The marker must be the last class token, with the name just before it;
    // the bare-marker cell and the reordered decoy cell contribute nothing.
    assert_eq!(roster, vec!["smith", "jones"]);
}

#[test]
fn roster_dedups_across_rundle_pages() {
    let mut roster = Vec::new();
    add_roster_names(&read_fixture("rundle_a.html"), &mut roster);
    add_roster_names(&read_fixture("rundle_b.html"), &mut roster);
    assert_eq!(roster, vec!["smith", "jones", "garcia"]);
}
