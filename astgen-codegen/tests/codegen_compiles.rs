//! Checks that generated units are accepted by a C++17 compiler and that
//! the generated comparison operators behave as expected at run time.
//!
//! Skipped when no `c++` executable is available.

use std::{path::Path, process::Command};

use astgen_codegen::Generator;
use astgen_core::FileRules;
use astgen_schema::parse_str;
use tempfile::TempDir;

const AST_JSON: &str = include_str!("fixtures/ast.json");

fn compiler_available() -> bool {
    Command::new("c++")
        .arg("--version")
        .output()
        .is_ok_and(|output| output.status.success())
}

/// Exits with a distinct code for each comparison that does not hold.
const EQUALITY_MAIN: &str = r#"#include "ast.h"

using namespace lang::ast;

template <typename T>
static bool same(const T& a, const T& b) { return a == b && !(a != b); }

template <typename T>
static bool differ(const T& a, const T& b) { return !(a == b) && a != b; }

int main() {
    const Expr::Binary base{Expr::Op::Add, 1, 2};
    Expr::Binary copy = base;
    if (!same(base, copy)) return 1;

    Expr::Binary op = base;
    op.op = Expr::Op::Sub;
    if (!differ(base, op)) return 2;

    Expr::Binary lhs = base;
    lhs.lhs = 10;
    if (!differ(base, lhs)) return 3;

    Expr::Binary rhs = base;
    rhs.rhs = 20;
    if (!differ(base, rhs)) return 4;

    const Expr::Nil nil_a{};
    const Expr::Nil nil_b{};
    if (!same(nil_a, nil_b)) return 5;

    const Expr expr{1};
    Expr kind = expr;
    if (!same(expr, kind)) return 6;
    kind.kind = 2;
    if (!differ(expr, kind)) return 7;

    Module left;
    Module right;
    left.items.push_back(expr);
    right.items.push_back(expr);
    if (!same(left, right)) return 8;
    right.items.push_back(expr);
    if (!differ(left, right)) return 9;

    return 0;
}
"#;

fn generate_into(output_dir: &Path) {
    let schema = parse_str(AST_JSON).expect("Failed to parse schema");
    Generator::new(&schema)
        .generate(output_dir, FileRules::default())
        .expect("Failed to generate code");
    std::fs::write(output_dir.join("support.h"), "#pragma once\n").unwrap();
}

#[test]
fn test_generated_units_compile() {
    if !compiler_available() {
        eprintln!("c++ not found, skipping");
        return;
    }

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_dir = temp_dir.path();
    generate_into(output_dir);

    let output = Command::new("c++")
        .args(["-std=c++17", "-fsyntax-only", "ast.cpp"])
        .current_dir(output_dir)
        .output()
        .expect("Failed to run c++");

    if !output.status.success() {
        let header = std::fs::read_to_string(output_dir.join("ast.h")).unwrap_or_default();
        panic!(
            "Generated code failed to compile!\n\nstderr:\n{}\n\nast.h:\n{}",
            String::from_utf8_lossy(&output.stderr),
            header
        );
    }
}

#[test]
fn test_equality_operators_flip_per_field() {
    if !compiler_available() {
        eprintln!("c++ not found, skipping");
        return;
    }

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_dir = temp_dir.path();
    generate_into(output_dir);
    std::fs::write(output_dir.join("main.cpp"), EQUALITY_MAIN).unwrap();

    let build = Command::new("c++")
        .args(["-std=c++17", "ast.cpp", "main.cpp", "-o", "equality_check"])
        .current_dir(output_dir)
        .output()
        .expect("Failed to run c++");
    if !build.status.success() {
        let source = std::fs::read_to_string(output_dir.join("ast.cpp")).unwrap_or_default();
        panic!(
            "Equality check failed to build!\n\nstderr:\n{}\n\nast.cpp:\n{}",
            String::from_utf8_lossy(&build.stderr),
            source
        );
    }

    let run = Command::new(output_dir.join("equality_check"))
        .output()
        .expect("Failed to run equality check");
    assert!(
        run.status.success(),
        "comparison check failed with {}",
        run.status
    );
}
