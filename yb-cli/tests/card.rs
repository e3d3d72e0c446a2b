use std::process::Command;

fn yb_bin() -> String {
    env!("CARGO_BIN_EXE_yb").to_string()
}

const SNAPSHOT: &str = "\
ones: 3
twos: 4
threes: 9
fours: 8
fives: 15
sixes: 24
fullHouse: 25
";

#[test]
fn card_totals_from_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("card.yaml");
    std::fs::write(&path, SNAPSHOT).unwrap();

    let out = Command::new(yb_bin())
        .args(["card", path.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(out.status.success());
    let s = String::from_utf8_lossy(&out.stdout);
    assert!(s.contains("Upper section    63"));
    assert!(s.contains("Upper bonus      50"));
    assert!(s.contains("Lower section    25"));
    assert!(s.contains("Total           138"));
}

#[test]
fn card_totals_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("card.yaml");
    std::fs::write(&path, SNAPSHOT).unwrap();

    let out = Command::new(yb_bin())
        .args(["card", path.to_str().unwrap(), "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["upperTotal"], 63);
    assert_eq!(v["upperBonus"], 50);
    assert_eq!(v["lowerTotal"], 25);
    assert_eq!(v["total"], 138);
}

#[test]
fn card_fails_cleanly_on_a_missing_file() {
    let out = Command::new(yb_bin())
        .args(["card", "does-not-exist.yaml"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    let s = String::from_utf8_lossy(&out.stderr);
    assert!(s.contains("Failed to load"));
}
