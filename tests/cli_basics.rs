use assert_cmd::cargo; // handy crate for testing CLIs

#[test]
fn prints_help() {
    let mut cmd = cargo::cargo_bin_cmd!();

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("Usage"));
}

#[test]
fn prints_version() {
    let mut cmd = cargo::cargo_bin_cmd!();

    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicates::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_diff_file_fails_without_writing_output() {
    let dir = tempfile::tempdir().unwrap();
    let files = dir.path().join("changed.txt");
    std::fs::write(&files, "backend/views.py\n").unwrap();
    let output = dir.path().join("suggestions.md");

    let mut cmd = cargo::cargo_bin_cmd!();
    cmd.arg("--diff")
        .arg(dir.path().join("nope.diff"))
        .arg("--files")
        .arg(&files)
        .arg("--output")
        .arg(&output)
        .arg("--no-model")
        .assert()
        .failure()
        .stderr(predicates::str::contains("failed to read diff file"));

    assert!(!output.exists());
}
