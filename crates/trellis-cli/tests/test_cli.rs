use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_cli_identify() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("trellis")?;
    cmd.arg("identify").arg("fb15k/train.txt");
    cmd.assert().success().stdout("txt\n");

    let mut cmd = Command::cargo_bin("trellis")?;
    cmd.arg("identify").arg("README");
    cmd.assert().success().stdout("unknown\n");
    Ok(())
}

#[test]
fn test_cli_load() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let file = dir.path().join("train.csv");
    fs::write(&file, "a,r,b\nb,r,c\nc,r,d\n")?;

    let mut cmd = Command::cargo_bin("trellis")?;
    cmd.arg("load").arg(&file).arg("--sep").arg(",");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Rows:    3"))
        .stdout(predicate::str::contains("Columns: 3"));

    let mut cmd = Command::cargo_bin("trellis")?;
    cmd.arg("load")
        .arg(&file)
        .arg("--sep")
        .arg(",")
        .arg("--chunk-size")
        .arg("2");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Chunks:  2"))
        .stdout(predicate::str::contains("Rows:    3"));
    Ok(())
}

#[test]
fn test_cli_load_gz_not_implemented() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("trellis")?;
    cmd.arg("load").arg("train.gz");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not implemented"));
    Ok(())
}

#[test]
fn test_cli_score() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let file = dir.path().join("embedded.txt");
    // k = 2: s | p | o
    fs::write(&file, "1\t0\t0\t0\t0\t0\n0\t0\t3\t4\t0\t0\n")?;

    let mut cmd = Command::cargo_bin("trellis")?;
    cmd.arg("score").arg(&file);
    cmd.assert().success().stdout("-1\n-5\n");

    let mut cmd = Command::cargo_bin("trellis")?;
    cmd.arg("score").arg(&file).arg("--norm").arg("l1");
    cmd.assert().success().stdout("-1\n-7\n");
    Ok(())
}

#[test]
fn test_cli_score_unknown_layer() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let file = dir.path().join("embedded.txt");
    fs::write(&file, "0\t0\t0\n")?;

    let mut cmd = Command::cargo_bin("trellis")?;
    cmd.arg("score").arg(&file).arg("--layer").arg("HolE");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown scoring layer: HolE"));
    Ok(())
}

#[test]
fn test_cli_layers() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("trellis")?;
    cmd.arg("layers");
    cmd.assert()
        .success()
        .stdout("ComplEx\nDistMult\nRotatE\nTransE\n");
    Ok(())
}
