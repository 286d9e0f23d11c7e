//! CLI integration tests for klev commands.
//!
//! These tests focus on exit codes and key output, not exact formatting.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

/// Helper to create a temp directory for tests.
fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

/// Helper to run `klev` with HOME isolated to the provided directory.
fn klev(home: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("klev").unwrap();
    cmd.env("HOME", home)
        .env_remove("RUST_LOG")
        .env_remove("KLEV_CONFIG")
        .current_dir(home);
    cmd
}

/// Writes a small corpus and returns its file name.
fn write_corpus(dir: &Path) -> &'static str {
    let corpus = r#"{
        "reports": [
            {"id": "r1", "title": "Отчет о Днестре", "text": "Ловили леща на фидер", "photos": ["a.jpg"], "createdAt": "2026-01-10T08:00:00Z"},
            {"id": "r2", "title": "Карп на Гидигиче", "text": "Тихая погода", "createdAt": "2026-01-12T08:00:00Z"}
        ],
        "competitions": [
            {"id": "c1", "title": "Etapa 1 feeder", "location": "Lacul Danceni", "createdAt": "2026-01-18T08:00:00Z"}
        ]
    }"#;
    fs::write(dir.join("corpus.json"), corpus).unwrap();
    "corpus.json"
}

/// Writes a project config pointing at the corpus.
fn write_config(dir: &Path) {
    write_corpus(dir);
    fs::write(
        dir.join(".klev.toml"),
        "root = true\n\n[corpus]\npath = \"corpus.json\"\n",
    )
    .unwrap();
}

/// Strips ANSI escape sequences from a string.
fn strip_ansi(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            output.push(ch);
        }
    }

    output
}

/// Runs a command expecting success and parses its stdout as JSON.
fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

mod init {
    use super::*;

    #[test]
    fn creates_config_file() {
        let dir = temp_dir();
        fs::create_dir(dir.path().join("project")).unwrap();

        klev(dir.path())
            .current_dir(dir.path().join("project"))
            .arg("init")
            .assert()
            .success();

        let contents = fs::read_to_string(dir.path().join("project/.klev.toml")).unwrap();
        assert!(contents.contains("# [corpus]"));
    }

    #[test]
    fn in_home_directory_writes_global_template() {
        let dir = temp_dir();

        klev(dir.path()).arg("init").assert().success();

        let contents = fs::read_to_string(dir.path().join(".klev.toml")).unwrap();
        assert!(contents.contains("global configuration"));
    }

    #[test]
    fn fails_if_config_exists() {
        let dir = temp_dir();
        fs::write(dir.path().join(".klev.toml"), "existing").unwrap();

        klev(dir.path())
            .arg("init")
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));
    }

    #[test]
    fn force_overwrites_existing() {
        let dir = temp_dir();
        fs::write(dir.path().join(".klev.toml"), "old content").unwrap();

        klev(dir.path()).args(["init", "--force"]).assert().success();

        let contents = fs::read_to_string(dir.path().join(".klev.toml")).unwrap();
        assert!(contents.contains("# [search]"));
    }
}

mod config {
    use super::*;

    #[test]
    fn prints_effective_settings() {
        let dir = temp_dir();
        fs::write(
            dir.path().join(".klev.toml"),
            "root = true\n\n[search]\nresult_limit = 3\n",
        )
        .unwrap();

        klev(dir.path())
            .arg("config")
            .assert()
            .success()
            .stdout(predicate::str::contains("result_limit = 3"))
            .stdout(predicate::str::contains("max_variants = 256"));
    }

    #[test]
    fn env_names_global_config() {
        let dir = temp_dir();
        fs::create_dir(dir.path().join("shared")).unwrap();
        fs::write(
            dir.path().join("shared/klev.toml"),
            "[search]\nresult_limit = 7\n",
        )
        .unwrap();

        klev(dir.path())
            .env("KLEV_CONFIG", dir.path().join("shared/klev.toml"))
            .arg("config")
            .assert()
            .success()
            .stdout(predicate::str::contains("result_limit = 7"));
    }

    #[test]
    fn invalid_config_fails() {
        let dir = temp_dir();
        fs::write(dir.path().join(".klev.toml"), "[search\n").unwrap();

        klev(dir.path())
            .arg("config")
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to load configuration"));
    }
}

mod check {
    use super::*;

    #[test]
    fn no_config_is_ok() {
        let dir = temp_dir();

        klev(dir.path())
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("No configuration files found."));
    }

    #[test]
    fn healthy_config_reports_counts() {
        let dir = temp_dir();
        write_config(dir.path());

        let output = klev(dir.path()).arg("check").assert().success().get_output().stdout.clone();
        let stdout = strip_ansi(&String::from_utf8(output).unwrap());
        assert!(stdout.contains("(2 reports, 1 competitions)"));
        assert!(stdout.contains("No issues found."));
    }

    #[test]
    fn missing_corpus_fails() {
        let dir = temp_dir();
        fs::write(
            dir.path().join(".klev.toml"),
            "root = true\n\n[corpus]\npath = \"absent.json\"\n",
        )
        .unwrap();

        klev(dir.path())
            .arg("check")
            .assert()
            .failure()
            .stdout(predicate::str::contains("corpus path does not exist"));
    }
}

mod search {
    use super::*;

    #[test]
    fn finds_report_with_configured_corpus() {
        let dir = temp_dir();
        write_config(dir.path());

        let output = klev(dir.path())
            .args(["search", "днестр"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let stdout = strip_ansi(&String::from_utf8(output).unwrap());
        assert!(stdout.contains("Reports (1)"));
        assert!(stdout.contains("Отчет о Днестре [r1]"));
        assert!(stdout.contains("photos: 1"));
    }

    #[test]
    fn corpus_flag_overrides_config() {
        let dir = temp_dir();
        let file = write_corpus(dir.path());

        klev(dir.path())
            .args(["search", "карп", "--corpus", file])
            .assert()
            .success()
            .stdout(predicate::str::contains("Карп на Гидигиче"));
    }

    #[test]
    fn no_results_is_success() {
        let dir = temp_dir();
        write_config(dir.path());

        klev(dir.path())
            .args(["search", "щука"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No results found."));
    }

    #[test]
    fn json_output() {
        let dir = temp_dir();
        write_config(dir.path());

        let json = stdout_json(klev(dir.path()).args([
            "search", "Отчет", "о", "Днестре", "--json",
        ]));
        assert_eq!(json["query"], "Отчет о Днестре");
        assert_eq!(json["results"][0]["kind"], "report");
        assert_eq!(json["results"][0]["hasPhotos"], true);
        assert!(json.get("report").is_none());
    }

    #[test]
    fn explain_shows_fallback_variant() {
        let dir = temp_dir();
        write_config(dir.path());

        let json = stdout_json(
            klev(dir.path()).args(["search", "озеро", "данчены", "--json", "--explain"]),
        );
        assert_eq!(json["results"][0]["id"], "c1");
        assert_eq!(json["report"]["source"]["kind"], "variant");
        assert_eq!(json["report"]["source"]["query"], "lacul danceni");

        let output = klev(dir.path())
            .args(["search", "озеро", "данчены", "--explain"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let stdout = strip_ansi(&String::from_utf8(output).unwrap());
        assert!(stdout.contains("variant \"lacul danceni\""));
        assert!(stdout.contains("Competitions (1)"));
    }

    #[test]
    fn missing_corpus_fails() {
        let dir = temp_dir();

        klev(dir.path())
            .args(["search", "днестр"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("no corpus configured"));
    }

    #[test]
    fn unreadable_corpus_fails() {
        let dir = temp_dir();

        klev(dir.path())
            .args(["search", "днестр", "--corpus", "absent.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to read corpus"));
    }

    #[test]
    fn malformed_corpus_fails() {
        let dir = temp_dir();
        fs::write(dir.path().join("bad.json"), "[]").unwrap();

        klev(dir.path())
            .args(["search", "днестр", "--corpus", "bad.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("malformed corpus"));
    }
}

mod expand {
    use super::*;

    #[test]
    fn lists_variants() {
        let dir = temp_dir();

        klev(dir.path())
            .args(["expand", "соревнование"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("соревнование\n"))
            .stdout(predicate::str::contains("competitie"))
            .stdout(predicate::str::contains("sorevnovanie"));
    }

    #[test]
    fn honors_variant_cap() {
        let dir = temp_dir();

        let json = stdout_json(klev(dir.path()).args([
            "expand",
            "соревнование",
            "--max-variants",
            "2",
            "--json",
        ]));
        assert_eq!(json.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn explain_json_includes_segments() {
        let dir = temp_dir();

        let json = stdout_json(
            klev(dir.path()).args(["expand", "озеро данчены", "--json", "--explain"]),
        );
        assert_eq!(json["units"][0]["phrase"], true);
        assert_eq!(json["truncated"], false);
    }
}

mod keywords {
    use super::*;

    #[test]
    fn prints_date_tokens() {
        let dir = temp_dir();

        klev(dir.path())
            .args(["keywords", "18", "января"])
            .assert()
            .success()
            .stdout(predicate::str::contains("18.01"))
            .stdout(predicate::str::contains("января"));
    }

    #[test]
    fn stopwords_only() {
        let dir = temp_dir();

        let json = stdout_json(klev(dir.path()).args(["keywords", "на в и", "--json"]));
        assert_eq!(json["keywords"], Value::Array(Vec::new()));
        assert_eq!(json["dateTokens"], Value::Array(Vec::new()));
    }
}

mod ask {
    use super::*;

    #[test]
    fn greeting_gets_reply_without_corpus() {
        let dir = temp_dir();

        let json = stdout_json(klev(dir.path()).args(["ask", "Привет!", "--json"]));
        assert_eq!(json["type"], "reply");
        assert_eq!(json["intent"], "greet");
    }

    #[test]
    fn question_is_searched() {
        let dir = temp_dir();
        write_config(dir.path());

        let json = stdout_json(klev(dir.path()).args([
            "ask",
            "найди отчет о рыбалке на Днестре",
            "--json",
        ]));
        assert_eq!(json["type"], "results");
        assert_eq!(json["results"][0]["id"], "r1");
    }

    #[test]
    fn short_cyrillic_query_is_searched() {
        let dir = temp_dir();
        write_config(dir.path());

        let json = stdout_json(klev(dir.path()).args(["ask", "Отчет о Днестре", "--json"]));
        assert_eq!(json["type"], "results");
        assert_eq!(json["results"][0]["id"], "r1");
    }
}

#[test]
fn verbose_flag_logs_to_stderr() {
    let dir = temp_dir();

    klev(dir.path())
        .args(["-v", "keywords", "днестр"])
        .assert()
        .success()
        .stdout(predicate::str::contains("днестр"))
        .stderr(predicate::str::contains("extracted keywords"));
}
