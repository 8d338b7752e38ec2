//! Integration tests for stim-url.

#![allow(clippy::expect_used)]

use stim_url::encode::compact;
use stim_url::{CIRCUIT_HASH_PREFIX, encode_circuit_to_hash};

const SURFACE_CODE_SNIPPET: &str = "\
QUBIT_COORDS(1, 1) 1
QUBIT_COORDS(2, 0) 2
R 1 2
TICK
CX 1 2
M(0.001) 2
DETECTOR(2, 0, 0) rec[-1]
OBSERVABLE_INCLUDE(0) rec[-1]
";

#[test]
fn test_encode_realistic_circuit() {
    assert_eq!(
        encode_circuit_to_hash(SURFACE_CODE_SNIPPET),
        "#circuit=Q(1,1)_1;Q(2,0)_2;R_1_2;TICK;CX_1_2;M(0.001)_2;DT(2,0,0)_rec[-1];OI(0)_rec[-1];"
    );
}

#[test]
fn test_encode_windows_line_endings_match_unix() {
    let windows = SURFACE_CODE_SNIPPET.replace('\n', "\r\n");
    let old_mac = SURFACE_CODE_SNIPPET.replace('\n', "\r");
    let unix = encode_circuit_to_hash(SURFACE_CODE_SNIPPET);
    assert_eq!(encode_circuit_to_hash(&windows), unix);
    assert_eq!(encode_circuit_to_hash(&old_mac), unix);
}

#[test]
fn test_encode_overlay_pragma_with_ampersand() {
    let text = "#!pragma MARK(0) 1 & 2\nH 0";
    let body = encode_circuit_to_hash(text)
        .strip_prefix(CIRCUIT_HASH_PREFIX)
        .expect("prefix")
        .to_string();
    assert_eq!(body, "%23%21pragma_MARK%280%29_1_%26_2%3BH_0");
}

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    /// Undoes the separator substitutions for text without commas or abbreviations.
    fn expand(body: &str) -> String {
        body.replace(';', "\n").replace('_', " ")
    }

    proptest! {
        #[test]
        fn always_prefixed(text in any::<String>()) {
            prop_assert!(encode_circuit_to_hash(&text).starts_with(CIRCUIT_HASH_PREFIX));
        }

        #[test]
        fn deterministic(text in any::<String>()) {
            prop_assert_eq!(encode_circuit_to_hash(&text), encode_circuit_to_hash(&text));
        }

        #[test]
        fn plain_text_is_not_escaped(text in "[a-z0-9()\\[\\]\n -]{0,100}") {
            let hash = encode_circuit_to_hash(&text);
            let body = &hash[CIRCUIT_HASH_PREFIX.len()..];
            prop_assert!(!body.contains('%'));
            prop_assert!(!body.contains(' '));
            prop_assert!(!body.contains('\n'));
            prop_assert_eq!(expand(body), text);
        }

        #[test]
        fn trigger_escapes_whole_body(
            prefix in "[a-z (),\n]{0,40}",
            suffix in "[a-z (),\n]{0,40}",
            trigger in "[%&]",
        ) {
            let text = format!("{prefix}{trigger}{suffix}");
            let hash = encode_circuit_to_hash(&text);
            let body = &hash[CIRCUIT_HASH_PREFIX.len()..];
            prop_assert!(body
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || "-_.~%".contains(c)));
            let decoded = urlencoding::decode(body).expect("valid escapes");
            prop_assert_eq!(decoded.into_owned(), compact(&text));
        }
    }
}

/// End-to-end tests of the `stim-url` binary.
mod cli_tests {
    use assert_cmd::Command;
    use predicates::prelude::*;
    use tempfile::TempDir;

    fn stim_url() -> Command {
        let mut cmd = Command::cargo_bin("stim-url").expect("binary");
        cmd.env_remove("STIM_URL_BASE").env_remove("RUST_LOG");
        cmd
    }

    fn write_circuit(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("circuit.stim");
        std::fs::write(&path, content).expect("write circuit");
        path
    }

    #[test]
    fn test_stdin_prints_fragment() {
        stim_url()
            .write_stdin("QUBIT_COORDS(1, 2) 0")
            .assert()
            .success()
            .stdout("#circuit=Q(1,2)_0\n");
    }

    #[test]
    fn test_empty_stdin() {
        stim_url()
            .write_stdin("")
            .assert()
            .success()
            .stdout("#circuit=\n");
    }

    #[test]
    fn test_input_file() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = write_circuit(&temp_dir, "DETECTOR(0) rec[-1]\nOBSERVABLE_INCLUDE(0) rec[-1]");

        stim_url()
            .arg("-i")
            .arg(&path)
            .assert()
            .success()
            .stdout("#circuit=DT(0)_rec[-1];OI(0)_rec[-1]\n");
    }

    #[test]
    fn test_base_prints_full_url() {
        stim_url()
            .args(["--base", "https://h/x#old"])
            .write_stdin("H 0")
            .assert()
            .success()
            .stdout("https://h/x#circuit=H_0\n");
    }

    #[test]
    fn test_hash_only_with_base() {
        stim_url()
            .args(["--base", "https://h/x", "--hash-only"])
            .write_stdin("H 0")
            .assert()
            .success()
            .stdout("#circuit=H_0\n");
    }

    #[test]
    fn test_url_without_base_prints_fragment() {
        stim_url()
            .arg("--url")
            .write_stdin("H 0")
            .assert()
            .success()
            .stdout("#circuit=H_0\n");
    }

    #[test]
    fn test_url_with_empty_base_prints_fragment() {
        stim_url()
            .args(["--url", "--base", ""])
            .write_stdin("H 0")
            .assert()
            .success()
            .stdout("#circuit=H_0\n");
    }

    #[test]
    fn test_base_from_environment() {
        stim_url()
            .env("STIM_URL_BASE", "https://viewer.example/index.html")
            .write_stdin("H 0")
            .assert()
            .success()
            .stdout("https://viewer.example/index.html#circuit=H_0\n");
    }

    #[test]
    fn test_base_flag_overrides_environment() {
        stim_url()
            .env("STIM_URL_BASE", "https://env.example/")
            .args(["--base", "https://flag.example/"])
            .write_stdin("H 0")
            .assert()
            .success()
            .stdout("https://flag.example/#circuit=H_0\n");
    }

    #[test]
    fn test_missing_input_file_fails() {
        stim_url()
            .args(["-i", "/nonexistent/circuit.stim"])
            .assert()
            .failure()
            .stdout("")
            .stderr(predicate::str::contains("file not found: /nonexistent/circuit.stim"));
    }

    #[test]
    fn test_invalid_utf8_input_fails() {
        stim_url()
            .write_stdin(vec![0xff, 0xfe])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid UTF-8"));
    }

    #[test]
    fn test_verbose_logs_to_stderr_only() {
        stim_url()
            .arg("-v")
            .write_stdin("H 0")
            .assert()
            .success()
            .stdout("#circuit=H_0\n")
            .stderr(predicate::str::contains("encoded circuit"));
    }

    #[test]
    fn test_stdout_closed_before_write_exits_cleanly() {
        use assert_cmd::cargo::CommandCargoExt;
        use std::io::Write;
        use std::process::Stdio;

        let mut child = std::process::Command::cargo_bin("stim-url")
            .expect("binary")
            .env_remove("STIM_URL_BASE")
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("spawn");

        // The child blocks on stdin until EOF, so its stdout is already
        // closed by the time it writes the result.
        drop(child.stdout.take());
        let mut stdin = child.stdin.take().expect("stdin");
        stdin
            .write_all("QUBIT_COORDS(0, 0) 0\n".repeat(10_000).as_bytes())
            .expect("write stdin");
        drop(stdin);

        let output = child.wait_with_output().expect("wait");
        assert!(output.status.success());
        assert!(output.stderr.is_empty());
    }

    #[test]
    fn test_percent_triggers_full_encoding() {
        stim_url()
            .write_stdin("A&B")
            .assert()
            .success()
            .stdout("#circuit=A%26B\n");
    }
}
