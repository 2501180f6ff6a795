//! Compiles every demo config and sanity-checks the output shape.

use std::fs;
use std::path::{Path, PathBuf};

use cta_compiler::config::CompileOptions;

fn demo_files(subdir: &str) -> Vec<PathBuf> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join(subdir);
    let mut files: Vec<PathBuf> = fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", dir.display()))
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().map(|ext| ext == "json").unwrap_or(false))
        .collect();
    files.sort();
    assert!(!files.is_empty(), "no demo configs in {}", dir.display());
    files
}

#[test]
fn all_cta_demos_compile_without_warnings() {
    for path in demo_files("cta") {
        let out = cta_compiler::compile_widget_file(&path, &CompileOptions::default())
            .unwrap_or_else(|e| panic!("{}: {e}", path.display()));
        assert!(
            out.warnings.is_empty(),
            "{}: unexpected warnings {:?}",
            path.display(),
            out.warnings
        );
        assert!(out.html.starts_with("<!-- CTA Widget -->"));
        assert!(out.iframe.starts_with("<iframe"));
        assert!(out.document.starts_with("<!DOCTYPE html>"));
        assert!(out.height >= 350);
    }
}

#[test]
fn cta_demos_compile_with_auto_update() {
    let opts = CompileOptions {
        auto_update: true,
        ..CompileOptions::default()
    };
    for path in demo_files("cta") {
        let out = cta_compiler::compile_widget_file(&path, &opts)
            .unwrap_or_else(|e| panic!("{}: {e}", path.display()));
        assert!(out.html.contains("widgetHistory"), "{}", path.display());
        assert!(out.iframe.contains("postMessage"), "{}", path.display());
    }
}

#[test]
fn all_proscons_demos_compile() {
    for path in demo_files("proscons") {
        let json = fs::read_to_string(&path).unwrap();
        let out = cta_compiler::compile_pros_cons(&json)
            .unwrap_or_else(|e| panic!("{}: {e}", path.display()));
        assert!(out.warnings.is_empty(), "{}: {:?}", path.display(), out.warnings);
        assert!(out.html.starts_with("<!-- Pros & Cons Widget -->"));
        assert!(out.height >= 400);
    }
}

#[test]
fn all_textlink_demos_compile() {
    for path in demo_files("textlink") {
        let json = fs::read_to_string(&path).unwrap();
        let out = cta_compiler::compile_text_link(&json)
            .unwrap_or_else(|e| panic!("{}: {e}", path.display()));
        assert!(out.warnings.is_empty(), "{}: {:?}", path.display(), out.warnings);
        assert!(out.html.contains("<a href="));
    }
}

#[test]
fn missing_file_reports_its_path() {
    let path = Path::new("demos/cta/does-not-exist.json");
    let err = cta_compiler::compile_widget_file(path, &CompileOptions::default()).unwrap_err();
    assert!(err.to_string().contains("does-not-exist.json"));
}
