// tests/cli.rs
// =============================================================================
// End-to-end tests: run the real binary against a local mock web server.
// =============================================================================

use assert_cmd::Command;
use httpmock::{Method::GET, MockServer};
use predicates::prelude::*;

fn txt_tally() -> Command {
    let mut cmd = Command::cargo_bin("txt-tally").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

// Serves an index page at /books/ linking a.txt, b.csv and c.txt
fn books_server(server: &MockServer) {
    server.mock(|when, then| {
        when.method(GET).path("/books/");
        then.status(200).header("content-type", "text/html").body(
            r#"<html><body>
                <a href="a.txt">A</a>
                <a href="b.csv">B</a>
                <a href="c.txt">C</a>
            </body></html>"#,
        );
    });
}

#[test]
fn test_missing_url_fails_without_network() {
    txt_tally()
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("missing argument <SEED_URL>"));
}

#[test]
fn test_counts_words_from_linked_files() {
    let server = MockServer::start();
    books_server(&server);
    let a = server.mock(|when, then| {
        when.method(GET).path("/books/a.txt");
        then.status(200).body("The cat sat.\nThe CAT ran!\n");
    });
    let c = server.mock(|when, then| {
        when.method(GET).path("/books/c.txt");
        then.status(200).body("cat_2 sat");
    });

    txt_tally()
        .arg(server.url("/books/"))
        .assert()
        .success()
        .code(0)
        .stdout(
            "\n========There are 5 items in the map========\n\
             [cat]\t2\n\
             [cat_2]\t1\n\
             [ran]\t1\n\
             [sat]\t2\n\
             [the]\t2\n",
        );

    a.assert();
    c.assert();
}

#[test]
fn test_unreachable_text_file_is_fatal() {
    let server = MockServer::start();
    books_server(&server);
    let a = server.mock(|when, then| {
        when.method(GET).path("/books/a.txt");
        then.status(200).body("first file");
    });
    server.mock(|when, then| {
        when.method(GET).path("/books/c.txt");
        then.status(404);
    });

    txt_tally()
        .arg(server.url("/books/"))
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("items in the map").not())
        .stderr(predicate::str::contains("c.txt"));

    a.assert();
}

#[test]
fn test_unreachable_seed_page_prints_empty_report() {
    txt_tally()
        .arg("http://127.0.0.1:1/")
        .assert()
        .success()
        .stdout("\n========There are 0 items in the map========\n")
        .stderr(predicate::str::contains("could not collect links"));
}

#[test]
fn test_json_output() {
    let server = MockServer::start();
    books_server(&server);
    server.mock(|when, then| {
        when.method(GET).path("/books/a.txt");
        then.status(200).body("Hello hello");
    });
    server.mock(|when, then| {
        when.method(GET).path("/books/c.txt");
        then.status(200).body("world");
    });

    let output = txt_tally()
        .arg(server.url("/books/"))
        .arg("--json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["items"], 2);
    assert_eq!(value["words"]["hello"], 2);
    assert_eq!(value["words"]["world"], 1);
}

#[test]
fn test_log_file_receives_structured_log() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("logs").join("tally.log");

    txt_tally()
        .arg("http://127.0.0.1:1/")
        .arg("--log-file")
        .arg(&log_path)
        .assert()
        .success();

    let log = std::fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("Program started"));
    assert!(log.contains("There are 0 urls in the list."));
    assert!(log.contains("Map has been printed."));
}
