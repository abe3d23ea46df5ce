//! Integration tests for the vecgen pipeline.
//!
//! These tests lay out a small C project in a temp directory, run the
//! generator against it, and inspect what landed on disk.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use vecgen::cli::Args;
use vecgen::error::{GenError, exit_code_for};
use vecgen::report::{Report, ReportStyle};
use vecgen::{RunSummary, run, run_with_report};

const VECTOR_H: &str = "\
#ifndef __VECTOR_H__
#define __VECTOR_H__

#include \"priv/vector_initialize_type.h\"

VECTOR_INITIALIZE_TYPE(int)
VECTOR_INITIALIZE_TYPE(unsigned char)
VECTOR_INITIALIZE_TYPE( int )
VECTOR_INITIALIZE_TYPE(struct Node *)
VECTOR_INITIALIZE_TYPE(unsigned long long)
VECTOR_INITIALIZE_TYPE(short)
VECTOR_INITIALIZE_TYPE(int)

#include \"gen/vector_decl.h\"

#endif // __VECTOR_H__
";

fn project(vector_h: Option<&str>) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("src");
    fs::create_dir_all(&src).unwrap();
    if let Some(text) = vector_h {
        fs::write(src.join("vector.h"), text).unwrap();
    }
    (dir, src)
}

fn args_for(src_dir: &Path) -> Args {
    Args {
        src_dir: src_dir.to_path_buf(),
        config: None,
        header: None,
        prefix: None,
        format: "text".to_string(),
        dry_run: false,
        no_color: true,
        quiet: true,
        debug: false,
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("{}: {e}", path.display()))
}

fn pairs(summary: &RunSummary) -> Vec<(&str, &str)> {
    summary
        .entries
        .iter()
        .map(|e| (e.pair.original.as_str(), e.pair.alias.as_str()))
        .collect()
}

fn assert_no_outputs(root: &Path, src: &Path) {
    assert!(!src.join("gen").exists(), "gen/ should not exist");
    assert!(!src.join("log").exists(), "log/ should not exist");
    assert!(!root.join("doc").exists(), "doc/ should not exist");
}

fn gen_error(err: &anyhow::Error) -> &GenError {
    err.chain()
        .find_map(|c| c.downcast_ref::<GenError>())
        .unwrap_or_else(|| panic!("not a GenError: {err:#}"))
}

// ---------- Full pipeline ----------

#[test]
fn generates_all_artifacts_in_first_seen_order() {
    let (dir, src) = project(Some(VECTOR_H));
    let summary = run(&args_for(&src)).unwrap();

    assert_eq!(
        pairs(&summary),
        vec![
            ("int", "int_t"),
            ("unsigned char", "uchar_t"),
            ("struct Node *", "Node_ptr_t"),
            ("unsigned long long", "ullint_t"),
            ("short", "short_short_t"),
        ]
    );

    let expected: Vec<PathBuf> = vec![
        src.join("gen/vector_aliases.h"),
        src.join("gen/vector_decl.h"),
        src.join("gen/vector_impl.c"),
        dir.path().join("doc/vector_types.txt"),
        src.join("log/vector_gen.txt"),
    ];
    assert_eq!(summary.written, expected);
    for path in &summary.written {
        assert!(path.is_file(), "missing {}", path.display());
    }

    let aliases = read(&summary.layout.aliases_file);
    assert!(aliases.contains("typedef unsigned char uchar_t;\n"));
    assert!(aliases.contains("typedef struct Node * Node_ptr_t;\n"));
    assert_eq!(aliases.matches("typedef ").count(), 5);

    let decl = read(&summary.layout.decl_file);
    assert_eq!(decl.matches("#include \"vector_template.h\"").count(), 5);
    assert!(decl.contains(&format!(" * @fingerprint {}\n", summary.fingerprint)));

    let implementation = read(&summary.layout.impl_file);
    assert_eq!(implementation.matches("#include \"vector_template.c\"").count(), 5);
    let first = implementation.find("#define T int_t").unwrap();
    let last = implementation.find("#define T short_short_t").unwrap();
    assert!(first < last);

    let doc = read(&summary.layout.doc_file);
    assert!(doc.contains("Total types: 5\n"));
    assert!(doc.contains("unsigned long long   | ullint_t\n"));

    let debug = read(&summary.layout.debug_file);
    assert!(debug.contains("Original: struct Node *\n  Alias: Node_ptr_t\n"));
    assert!(debug.contains("  Source: VECTOR_INITIALIZE_TYPE (line 9)\n"));
}

#[test]
fn rerun_is_byte_identical() {
    let (_dir, src) = project(Some(VECTOR_H));
    let first = run(&args_for(&src)).unwrap();
    let before: Vec<String> = first.written.iter().map(|p| read(p)).collect();

    let second = run(&args_for(&src)).unwrap();
    let after: Vec<String> = second.written.iter().map(|p| read(p)).collect();

    assert_eq!(pairs(&first), pairs(&second));
    assert_eq!(first.fingerprint, second.fingerprint);
    assert_eq!(before, after);
}

#[test]
fn stale_outputs_are_fully_rewritten() {
    let (_dir, src) = project(Some("VECTOR_INITIALIZE_TYPE(int)\nVECTOR_INITIALIZE_TYPE(char)\n"));
    run(&args_for(&src)).unwrap();

    fs::write(src.join("vector.h"), "VECTOR_INITIALIZE_TYPE(double)\n").unwrap();
    let summary = run(&args_for(&src)).unwrap();
    let aliases = read(&summary.layout.aliases_file);
    assert!(aliases.contains("typedef double double_t;"));
    assert!(!aliases.contains("int_t"));
    assert!(!aliases.contains("char_t"));
}

#[test]
fn dry_run_writes_nothing() {
    let (dir, src) = project(Some(VECTOR_H));
    let mut args = args_for(&src);
    args.dry_run = true;
    let summary = run(&args).unwrap();
    assert_eq!(summary.entries.len(), 5);
    assert!(summary.written.is_empty());
    assert_no_outputs(dir.path(), &src);
}

// ---------- Fatal paths ----------

#[test]
fn missing_header_aborts_before_output() {
    let (dir, src) = project(None);
    let err = run(&args_for(&src)).unwrap_err();
    assert!(matches!(gen_error(&err), GenError::SourceNotFound { .. }));
    assert_eq!(exit_code_for(&err), 2);
    assert!(format!("{err:#}").contains("vector.h"));
    assert_no_outputs(dir.path(), &src);
}

#[test]
fn header_without_macros_aborts_before_output() {
    let (dir, src) = project(Some("#ifndef __VECTOR_H__\n#define __VECTOR_H__\n#endif\n"));
    let err = run(&args_for(&src)).unwrap_err();
    assert!(matches!(gen_error(&err), GenError::NoTypesFound { .. }));
    assert_eq!(exit_code_for(&err), 3);
    assert_no_outputs(dir.path(), &src);
}

#[test]
fn alias_collision_aborts_before_output() {
    let (dir, src) = project(Some(
        "VECTOR_INITIALIZE_TYPE(unsigned)\nVECTOR_INITIALIZE_TYPE(unsigned int)\n",
    ));
    let err = run(&args_for(&src)).unwrap_err();
    match gen_error(&err) {
        GenError::AliasCollision {
            alias,
            first,
            second,
        } => {
            assert_eq!(alias, "uint_t");
            assert_eq!(first, "unsigned");
            assert_eq!(second, "unsigned int");
        }
        other => panic!("expected collision, got {other:?}"),
    }
    assert_eq!(exit_code_for(&err), 5);
    assert_no_outputs(dir.path(), &src);
}

#[test]
fn unwritable_output_reports_path() {
    let (_dir, src) = project(Some(VECTOR_H));
    // A plain file where gen/ should be.
    fs::write(src.join("gen"), "").unwrap();
    let err = run(&args_for(&src)).unwrap_err();
    match gen_error(&err) {
        GenError::OutputWrite { path, .. } => assert_eq!(path, &src.join("gen")),
        other => panic!("expected OutputWrite, got {other:?}"),
    }
    assert_eq!(exit_code_for(&err), 4);
}

#[test]
fn bad_config_exits_with_one() {
    let (dir, src) = project(Some(VECTOR_H));
    fs::write(dir.path().join("vecgen.yml"), "no_such_key: 1\n").unwrap();
    let err = run(&args_for(&src)).unwrap_err();
    assert_eq!(exit_code_for(&err), 1);
    assert_no_outputs(dir.path(), &src);
}

#[test]
fn unusable_alias_suffix_is_a_config_error() {
    let (dir, src) = project(Some(VECTOR_H));
    fs::write(dir.path().join("vecgen.yml"), "alias_suffix: \"-v t\"\n").unwrap();
    let err = run(&args_for(&src)).unwrap_err();
    assert!(format!("{err:#}").contains("alias_suffix"));
    assert_eq!(exit_code_for(&err), 1);
    assert_no_outputs(dir.path(), &src);
}

// ---------- Configuration and overrides ----------

#[test]
fn project_config_renames_outputs() {
    let (dir, src) = project(None);
    fs::write(src.join("list.h"), "LIST_INIT_TYPE(float)\nLIST_INIT_TYPE(char *)\n").unwrap();
    fs::write(
        dir.path().join("vecgen.yml"),
        "\
header: list.h
macro_prefix: LIST_INIT_
alias_suffix: _lt
gen_dir: generated
doc_dir: docs
template_header: list_template.h
files:
  aliases: list_aliases.h
  decl: list_decl.h
",
    )
    .unwrap();

    let summary = run(&args_for(&src)).unwrap();
    assert_eq!(
        pairs(&summary),
        vec![("float", "float_lt"), ("char *", "char_ptr_lt")]
    );

    let decl = read(&src.join("generated/list_decl.h"));
    assert!(decl.contains("#ifndef __LIST_DECL_H__"));
    assert!(decl.contains("#include \"list_aliases.h\""));
    assert!(decl.contains("#define T char_ptr_lt\n#include \"list_template.h\""));
    assert!(src.join("generated/list_aliases.h").is_file());
    assert!(dir.path().join("docs/vector_types.txt").is_file());
}

#[test]
fn explicit_config_path_is_used() {
    let (dir, src) = project(Some("VECTOR_INITIALIZE_TYPE(int)\n"));
    let config = dir.path().join("custom.yml");
    fs::write(&config, "alias_suffix: _vt\n").unwrap();
    let mut args = args_for(&src);
    args.config = Some(config);
    args.dry_run = true;
    let summary = run(&args).unwrap();
    assert_eq!(pairs(&summary), vec![("int", "int_vt")]);
}

#[test]
fn header_and_prefix_overrides() {
    let (dir, src) = project(Some(VECTOR_H));
    let other = dir.path().join("other.h");
    fs::write(&other, "POOL_DECLARE(double)\nVECTOR_INITIALIZE_TYPE(int)\n").unwrap();

    let mut args = args_for(&src);
    args.header = Some(other);
    args.prefix = Some("POOL_".to_string());
    args.dry_run = true;
    let summary = run(&args).unwrap();
    assert_eq!(pairs(&summary), vec![("double", "double_t")]);
}

#[test]
fn non_src_directory_uses_grandparent_as_project_root() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("lib").join("vector");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join("vector.h"), "VECTOR_INITIALIZE_TYPE(int)\n").unwrap();

    let summary = run(&args_for(&src)).unwrap();
    assert!(src.join("gen/vector_decl.h").is_file());
    assert!(dir.path().join("doc/vector_types.txt").is_file());
    assert_eq!(summary.written.len(), 5);
}

// ---------- Console report ----------

#[test]
fn text_report_walks_through_steps() {
    let (_dir, src) = project(Some(VECTOR_H));
    let mut args = args_for(&src);
    args.quiet = false;
    let mut report = Report::new(ReportStyle::Text, false, Vec::new());
    run_with_report(&args, &mut report).unwrap();
    let text = String::from_utf8(report.into_inner()).unwrap();

    let steps = [
        "VECTOR TYPE GENERATOR",
        "[1/3] Collecting types from",
        "\t[1] Found type: int\n",
        "Found unique types: 5",
        "[2/3] Generating aliases...",
        "--> ullint_t\n",
        "[3/3] Generating files...",
        "\t[1/5] vector_aliases.h\n",
        "\t[5/5] vector_gen.txt\n",
        "Done!",
    ];
    let mut last = 0;
    for step in steps {
        let pos = text[last..]
            .find(step)
            .unwrap_or_else(|| panic!("missing {step:?} after byte {last}:\n{text}"));
        last += pos;
    }
}

#[test]
fn json_report_is_parseable() {
    let (_dir, src) = project(Some(VECTOR_H));
    let mut args = args_for(&src);
    args.quiet = false;
    args.format = "json".to_string();
    args.dry_run = true;
    let mut report = Report::new(ReportStyle::Json, false, Vec::new());
    run_with_report(&args, &mut report).unwrap();
    let text = String::from_utf8(report.into_inner()).unwrap();

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let types = value["types"].as_array().unwrap();
    assert_eq!(types.len(), 5);
    assert_eq!(types[3]["original"], "unsigned long long");
    assert_eq!(types[3]["parsed"]["qualifiers"]["long_long"], true);
    assert_eq!(types[3]["parsed"]["qualifiers"]["unsigned"], true);
}

// ---------- Binary exit status ----------

fn vecgen_bin(args: &[&OsStr]) -> std::process::Output {
    std::process::Command::new(env!("CARGO_BIN_EXE_vecgen"))
        .args(args)
        .env_remove("VECGEN_LOG")
        .output()
        .unwrap()
}

#[test]
fn usage_error_and_missing_header_exit_differently() {
    let (_dir, src) = project(None);
    let missing = vecgen_bin(&[OsStr::new("--no-color"), OsStr::new("--src-dir"), src.as_os_str()]);
    let bad_flag = vecgen_bin(&[OsStr::new("--no-such-flag")]);

    assert_eq!(missing.status.code(), Some(2));
    assert_eq!(bad_flag.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&bad_flag.stderr).contains("--no-such-flag"));
}

#[test]
fn help_exits_successfully() {
    let out = vecgen_bin(&[OsStr::new("--help")]);
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("--src-dir"));
}

#[test]
fn json_report_is_withheld_when_a_write_fails() {
    let (_dir, src) = project(Some(VECTOR_H));
    fs::write(src.join("gen"), "").unwrap();
    let mut args = args_for(&src);
    args.quiet = false;
    args.format = "json".to_string();
    let mut report = Report::new(ReportStyle::Json, false, Vec::new());
    let err = run_with_report(&args, &mut report).unwrap_err();
    assert_eq!(exit_code_for(&err), 4);
    assert!(report.into_inner().is_empty());
}

#[test]
fn json_report_follows_a_full_write() {
    let (_dir, src) = project(Some(VECTOR_H));
    let mut args = args_for(&src);
    args.quiet = false;
    args.format = "json".to_string();
    let mut report = Report::new(ReportStyle::Json, false, Vec::new());
    let summary = run_with_report(&args, &mut report).unwrap();
    let text = String::from_utf8(report.into_inner()).unwrap();

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["fingerprint"], summary.fingerprint.as_str());
    assert_eq!(value["types"].as_array().unwrap().len(), 5);
}
