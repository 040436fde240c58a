use assert_cmd::Command;
use predicates::str;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let p = dir.join(name);
    fs::write(&p, content).unwrap();
    p
}

fn merger() -> Command {
    Command::cargo_bin("depth_merger").unwrap()
}

#[test]
fn test_version() {
    merger()
        .arg("--version")
        .assert()
        .success()
        .stdout(str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_args() {
    merger().assert().failure().stderr(str::contains("Usage"));
}

#[test]
fn test_sum_two_files() {
    let temp_dir = tempdir().unwrap();
    let a = write_file(temp_dir.path(), "a.dep", "seq1\t10\t5\nseq1\t20\t7\n");
    let b = write_file(temp_dir.path(), "b.dep", "seq1\t10\t3\nseq1\t20\t1\n");
    let out = temp_dir.path().join("out.dep");

    merger()
        .arg("-i")
        .arg(&a)
        .arg(&b)
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "seq1\t10\t8\nseq1\t20\t8\n"
    );
}

#[test]
fn test_input_order_irrelevant() {
    let temp_dir = tempdir().unwrap();
    let a = write_file(temp_dir.path(), "a.dep", "chr1\t1\t4\nchr1\t2\t0\nchr1\t3\t9\n");
    let b = write_file(temp_dir.path(), "b.dep", "chr1\t3\t1\nchr1\t1\t2\nchr1\t2\t5\n");
    let ab = temp_dir.path().join("ab.dep");
    let ba = temp_dir.path().join("ba.dep");

    merger().arg("-i").arg(&a).arg(&b).arg("-o").arg(&ab).assert().success();
    merger().arg("-i").arg(&b).arg(&a).arg("-o").arg(&ba).assert().success();

    let ab = fs::read_to_string(&ab).unwrap();
    assert_eq!(ab, fs::read_to_string(&ba).unwrap());
    assert_eq!(ab, "chr1\t1\t6\nchr1\t2\t5\nchr1\t3\t10\n");
}

#[test]
fn test_single_file_reproduced() {
    let temp_dir = tempdir().unwrap();
    let content = "chrM\t1\t12\nchrM\t2\t15\nchrM\t3\t0\n";
    let a = write_file(temp_dir.path(), "a.dep", content);
    let out = temp_dir.path().join("out.dep");

    merger().arg("--input").arg(&a).arg("--output").arg(&out).assert().success();
    assert_eq!(fs::read_to_string(&out).unwrap(), content);
}

#[test]
fn test_default_output() {
    let temp_dir = tempdir().unwrap();
    let a = write_file(temp_dir.path(), "a.dep", "chr1\t1\t1\n");

    merger()
        .current_dir(temp_dir.path())
        .arg("-i")
        .arg(&a)
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("combined.dep")).unwrap(),
        "chr1\t1\t1\n"
    );
}

#[test]
fn test_position_set_mismatch() {
    let temp_dir = tempdir().unwrap();
    let a = write_file(temp_dir.path(), "a.dep", "chr1\t1\t1\nchr1\t2\t1\nchr1\t3\t1\n");
    let b = write_file(temp_dir.path(), "b.dep", "chr1\t1\t1\nchr1\t2\t1\nchr1\t4\t1\n");
    let out = temp_dir.path().join("out.dep");

    merger()
        .arg("-i")
        .arg(&a)
        .arg(&b)
        .arg("-o")
        .arg(&out)
        .assert()
        .failure()
        .stderr(str::contains("Position mismatch"))
        .stderr(str::contains("b.dep"));
    assert!(!out.exists());
}

#[test]
fn test_position_count_mismatch() {
    let temp_dir = tempdir().unwrap();
    let a = write_file(temp_dir.path(), "a.dep", "chr1\t1\t1\nchr1\t2\t1\nchr1\t3\t1\n");
    let b = write_file(
        temp_dir.path(),
        "b.dep",
        "chr1\t1\t1\nchr1\t2\t1\nchr1\t3\t1\nchr1\t4\t1\n",
    );
    let out = temp_dir.path().join("out.dep");

    merger()
        .arg("-i")
        .arg(&a)
        .arg(&b)
        .arg("-o")
        .arg(&out)
        .assert()
        .failure()
        .stderr(str::contains("different number of positions: 3 4"));
    assert!(!out.exists());
}

#[test]
fn test_sequence_mismatch() {
    let temp_dir = tempdir().unwrap();
    let a = write_file(temp_dir.path(), "a.dep", "chr1\t1\t1\nchr1\t2\t1\n");
    let b = write_file(temp_dir.path(), "b.dep", "chr2\t1\t1\nchr2\t2\t1\n");
    let out = temp_dir.path().join("out.dep");

    merger()
        .arg("-i")
        .arg(&a)
        .arg(&b)
        .arg("-o")
        .arg(&out)
        .assert()
        .failure()
        .stderr(str::contains("Target mismatch"))
        .stderr(str::contains("chr2"));
    assert!(!out.exists());
}

#[test]
fn test_malformed_line() {
    let temp_dir = tempdir().unwrap();
    let a = write_file(temp_dir.path(), "bad.dep", "chr1\t1\n");
    let out = temp_dir.path().join("out.dep");

    merger()
        .arg("-i")
        .arg(&a)
        .arg("-o")
        .arg(&out)
        .assert()
        .failure()
        .stderr(str::contains("Non-standard depth file"))
        .stderr(str::contains("bad.dep"));
    assert!(!out.exists());
}

#[test]
fn test_multiple_targets_in_file() {
    let temp_dir = tempdir().unwrap();
    let a = write_file(temp_dir.path(), "mixed.dep", "chr1\t1\t1\nchr2\t1\t1\n");
    let out = temp_dir.path().join("out.dep");

    merger()
        .arg("-i")
        .arg(&a)
        .arg("-o")
        .arg(&out)
        .assert()
        .failure()
        .stderr(str::contains("Multiple targets in"))
        .stderr(str::contains("mixed.dep"));
    assert!(!out.exists());
}

#[test]
fn test_empty_file_gives_empty_output() {
    let temp_dir = tempdir().unwrap();
    let a = write_file(temp_dir.path(), "empty.dep", "");
    let out = temp_dir.path().join("out.dep");

    merger()
        .arg("-i")
        .arg(&a)
        .arg("-o")
        .arg(&out)
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&out).unwrap(), "");
}
