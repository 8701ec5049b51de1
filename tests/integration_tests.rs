use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn write_lines(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file
}

#[test]
fn test_help_works() {
    let mut cmd = Command::cargo_bin("termplots").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("help"));
}

#[test]
fn test_no_subcommand_fails() {
    let mut cmd = Command::cargo_bin("termplots").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("requires a subcommand"));
}

#[test]
fn test_one_subcommand_help() {
    let mut cmd = Command::cargo_bin("termplots").unwrap();
    cmd.arg("scatter")
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("scatter"));
}

#[test]
fn test_hist() {
    let mut cmd = Command::cargo_bin("termplots").unwrap();
    cmd.arg("hist")
        .arg("--bins")
        .arg("2")
        .write_stdin("1\n2\n2\n3\n3\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            " 3|   o\n 2|  oo\n 1| ooo\n  +----\n",
        ))
        .stdout(predicate::str::contains("observations: 6"))
        .stdout(predicate::str::contains("mean : 2.333333"));
}

#[test]
fn test_hist_without_summary() {
    let file = write_lines(&["1", "", "2", "2", "3", "3", "3"]);
    let mut cmd = Command::cargo_bin("termplots").unwrap();
    cmd.arg("-C")
        .arg("no")
        .arg("hist")
        .arg("-b")
        .arg("2")
        .arg("-n")
        .arg("-p")
        .arg("#")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::diff(
            " 3|   #\n 2|  ##\n 1| ###\n  +----\n",
        ));
}

#[test]
fn test_hist_bad_input() {
    // Garbage
    let mut cmd = Command::cargo_bin("termplots").unwrap();
    cmd.arg("hist")
        .write_stdin("1\nfoo\n")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Cannot parse a number at line 2"));
    // Nothing at all
    let mut cmd = Command::cargo_bin("termplots").unwrap();
    cmd.arg("hist")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No data to process"));
    // Negative bin width
    let mut cmd = Command::cargo_bin("termplots").unwrap();
    cmd.arg("hist")
        .arg("--binwidth=-1")
        .write_stdin("1\n2\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid option"));
    // Missing file
    let mut cmd = Command::cargo_bin("termplots").unwrap();
    cmd.arg("hist")
        .arg("/non/existent/file")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not read /non/existent/file"));
}

#[test]
fn test_hhist() {
    let mut cmd = Command::cargo_bin("termplots").unwrap();
    cmd.arg("hhist")
        .arg("-b")
        .arg("2")
        .arg("-n")
        .write_stdin("1\n2\n2\n3\n3\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::diff("3| o  \n2| oo \n1| ooo\n +----\n"));
}

#[test]
fn test_scatter_series() {
    let xs = write_lines(&["-10", "20", "30"]);
    let ys = write_lines(&["-10", "20", "30"]);
    let mut cmd = Command::cargo_bin("termplots").unwrap();
    cmd.arg("scatter")
        .arg("-X")
        .arg(xs.path())
        .arg("-Y")
        .arg(ys.path())
        .arg("-s")
        .arg("10")
        .arg("-t")
        .arg("My Test GraphGraphGraphGraph")
        .arg("--x-title")
        .arg("x axis placeholder")
        .arg("--y-title")
        .arg("y axis placeholder")
        .arg("--axes")
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "\
+--------------------------+
|  My Test GraphGraphG...  |
+--------------------------+
y: y axis placeholder
+--------------------------+
|       |               x  |
|       |                  |
|       |                  |
|       |           x      |
|       |                  |
|       |                  |
|       |                  |
|       |                  |
| - - - 0 - - - - - - - -  |
|       |                  |
|       |                  |
| x     |                  |
+--------------------------+
       x: x axis placeholder
",
        ));
}

#[test]
fn test_scatter_records() {
    let file = write_lines(&["10,10", "20,20", "30,30"]);
    let mut cmd = Command::cargo_bin("termplots").unwrap();
    cmd.arg("scatter")
        .arg("-f")
        .arg(file.path())
        .arg("-s")
        .arg("5")
        .arg("-t")
        .arg("My Graph")
        .arg("--x-title")
        .arg("left")
        .arg("--y-title")
        .arg("x axis")
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "\
+--------------+
|   My Graph   |
+--------------+
y: x axis
+--------------+
|           x  |
|              |
|              |
|       x      |
|              |
| x            |
+--------------+
         x: left
",
        ));
}

#[test]
fn test_scatter_stdin() {
    let mut cmd = Command::cargo_bin("termplots").unwrap();
    cmd.arg("scatter")
        .arg("--size")
        .arg("10")
        .arg("--axes")
        .arg("-t")
        .arg("My Graph Test")
        .arg("--x-title")
        .arg("right")
        .arg("--y-title")
        .arg("x axis")
        .write_stdin("20,20\n20,20\n30,30\n15,21\n-16,-35\n18,12\n")
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "\
+--------------------------+
|      My Graph Test       |
+--------------------------+
y: x axis
+--------------------------+
|         |             x  |
|         |                |
|         |       x x      |
|         |         x      |
|         |                |
| - - - - 0 - - - - - - -  |
|         |                |
|         |                |
|         |                |
|         |                |
|         |                |
| x       |                |
+--------------------------+
                    x: right
",
        ));
}

#[test]
fn test_scatter_bad_input() {
    let xs = write_lines(&["1", "2"]);
    let ys = write_lines(&["1"]);
    let mut cmd = Command::cargo_bin("termplots").unwrap();
    cmd.arg("scatter")
        .arg("-X")
        .arg(xs.path())
        .arg("-Y")
        .arg(ys.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Series lengths differ"));
    let mut cmd = Command::cargo_bin("termplots").unwrap();
    cmd.arg("scatter")
        .write_stdin("1,2\n3\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot parse a number at line 2"));
}

#[test]
fn test_oversized_plots() {
    let mut cmd = Command::cargo_bin("termplots").unwrap();
    cmd.arg("scatter")
        .arg("-s")
        .arg("18446744073709551615")
        .write_stdin("1,2\n3,4\n")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid option"));
    let mut cmd = Command::cargo_bin("termplots").unwrap();
    cmd.arg("hist")
        .arg("-H")
        .arg("100000000000")
        .write_stdin("1\n2\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid option"));
    let mut cmd = Command::cargo_bin("termplots").unwrap();
    cmd.arg("hhist")
        .arg("-W")
        .arg("100000000")
        .write_stdin("1\n2\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid option"));
}
