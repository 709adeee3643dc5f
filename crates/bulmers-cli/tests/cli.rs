use std::io::Write;

use bulmers_cli::{run, Cli};
use clap::Parser;

fn run_args(args: &[&str], stdin: &str) -> (i32, String) {
    let cli = Cli::try_parse_from(std::iter::once("bulmers").chain(args.iter().copied()))
        .expect("arguments should parse");
    let mut input = stdin.as_bytes();
    let mut out = Vec::new();
    let code = run(cli, &mut input, &mut out).expect("command should succeed");
    (code, String::from_utf8(out).unwrap())
}

#[test]
fn test_compile_with_prefix() {
    let (code, out) = run_args(
        &[
            "compile",
            r#"{"color":"primary","m":"2","viewport":"tablet","className":"extra"}"#,
            "--prefix",
            "bulma-",
        ],
        "",
    );
    assert_eq!(code, 0);
    assert_eq!(out, "bulma-has-text-primary bulma-m-2 extra\n");
}

#[test]
fn test_compile_reads_stdin() {
    let (code, out) = run_args(&["compile", "--base", "box", "-m", "is-shadowless"], r#"{"p": 5}"#);
    assert_eq!(code, 0);
    assert_eq!(out, "box is-shadowless p-5\n");
}

#[test]
fn test_compile_json_report() {
    let (_, out) = run_args(
        &["compile", r#"{"hidden": true, "id": "x"}"#, "--json", "--icons", "mdi"],
        "",
    );
    let report: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(report["class"], "is-hidden");
    assert_eq!(report["scope"]["iconLibrary"], "mdi");
    assert_eq!(report["rest"]["id"], "x");
}

#[test]
fn test_compile_with_scope_file_and_override() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(file, "classPrefix: file-\niconLibrary: fa").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let (_, from_file) = run_args(&["compile", r#"{"pull":"left"}"#, "--scope", &path], "");
    assert_eq!(from_file, "file-is-pulled-left\n");

    let (_, overridden) = run_args(
        &["compile", r#"{"pull":"left"}"#, "--scope", &path, "--prefix", "flag-"],
        "",
    );
    assert_eq!(overridden, "flag-is-pulled-left\n");
}

#[test]
fn test_compile_rejects_non_object() {
    let cli = Cli::try_parse_from(["bulmers", "compile", "[1,2]"]).unwrap();
    let mut out = Vec::new();
    let err = run(cli, &mut "".as_bytes(), &mut out).unwrap_err();
    assert!(err.to_string().contains("JSON object"));
}

#[test]
fn test_check_exit_codes() {
    assert_eq!(run_args(&["check", "color", "danger"], ""), (0, "valid\n".to_string()));
    let (code, out) = run_args(&["check", "spacing", "7"], "");
    assert_eq!(code, 1);
    assert!(out.contains("not a spacing value"));
}

#[test]
fn test_check_unknown_dimension_fails_to_parse() {
    assert!(Cli::try_parse_from(["bulmers", "check", "colour", "red"]).is_err());
}

#[test]
fn test_dimensions_listing() {
    let (_, all) = run_args(&["dimensions"], "");
    assert!(all.lines().any(|l| l == "justify-content"));

    let (_, viewports) = run_args(&["dimensions", "viewport"], "");
    assert_eq!(viewports.lines().next(), Some("mobile"));
}

#[test]
fn test_keys_listing() {
    let (_, out) = run_args(&["keys"], "");
    let keys: Vec<&str> = out.lines().collect();
    assert_eq!(keys.first(), Some(&"color"));
    assert!(keys.contains(&"viewport"));
    assert!(!keys.contains(&"className"));
}
