//! End-to-end tests for `pairrank <FILE> reorder` and the prompted workflow.

mod common;

use common::{row, run_pairrank, stderr_of, stdout_of, CsvFixture};

#[test]
fn reorder_without_header_sorts_by_answers() {
    let fixture = CsvFixture::with_contents("d\na\nc\n");
    // [a] over [d]; [c] over [d]; [a] over [c].
    let output = run_pairrank(fixture.dir.path(), &["ranked.csv", "reorder"], "1\n1\n2\n");

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(fixture.rows(), vec![row(&["a"]), row(&["c"]), row(&["d"])]);
    assert!(stdout_of(&output).contains("File has been reordered."));
}

#[test]
fn reorder_keeps_header_out_of_comparisons() {
    let fixture = CsvFixture::with_contents("title\nz\ny\n");
    let output = run_pairrank(
        fixture.dir.path(),
        &["ranked.csv", "reorder", "--header"],
        "1\n",
    );

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(
        fixture.read().lines().collect::<Vec<_>>(),
        vec!["title", "y", "z"]
    );
    let stdout = stdout_of(&output);
    assert_eq!(stdout.matches("Which item should be higher").count(), 1);
    assert!(!stdout.contains("1: [title]"));
}

#[test]
fn reorder_of_empty_file_leaves_it_alone() {
    let fixture = CsvFixture::with_contents("");
    let output = run_pairrank(fixture.dir.path(), &["ranked.csv", "reorder"], "");

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("File is empty. Nothing to reorder."));
    assert_eq!(fixture.read(), "");
}

#[test]
fn reorder_of_missing_file_fails() {
    let fixture = CsvFixture::without_file();
    let output = run_pairrank(fixture.dir.path(), &["ranked.csv", "reorder"], "");

    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("does not exist"));
    assert!(!fixture.path.exists());
}

#[test]
fn prompted_run_collects_everything_from_stdin() {
    let fixture = CsvFixture::with_contents("b\n");
    // location, header answer, action, new row, one comparison
    let output = run_pairrank(fixture.dir.path(), &[], "ranked.csv\nn\nadd\na\n1\n");

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(fixture.rows(), vec![row(&["a"]), row(&["b"])]);
}

#[test]
fn config_file_sets_delimiter() {
    let fixture = CsvFixture::with_contents("b;2\na;1\n");
    std::fs::write(
        fixture.dir.path().join("pairrank.json"),
        r#"{"schema_version":1,"delimiter":";"}"#,
    )
    .expect("write config");
    let output = run_pairrank(
        fixture.dir.path(),
        &["ranked.csv", "reorder", "--config", "pairrank.json"],
        "1\n",
    );

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(
        fixture.read().lines().collect::<Vec<_>>(),
        vec!["a;1", "b;2"]
    );
}
