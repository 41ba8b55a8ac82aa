//! Common Go fixtures shared across test modules.

/// Two suffixed tests sharing a group, matching the simplest regrouping.
pub const FOO_ALPHA_BETA: &str = r#"package foo

import "testing"

func TestFoo_Alpha(t *testing.T){ A() }

func TestFoo_Beta(t *testing.T){ B() }
"#;

/// Mixed file: helpers, methods, types and tests from several groups.
pub const MIXED: &str = r#"package widgets

import (
	"fmt"
	"testing"

	str "strings"
)

type fixture struct{ name string }

const answer = 42

func helper() string { return "help" }

func (f fixture) TestMethod_Ignored(t *testing.T) {}

// TestParse_empty covers the empty input case.
func TestParse_empty(t *testing.T) {
	if got := parse(""); got != nil {
		t.Fatalf("expected nil, got %v", got)
	}
}

func TestRender_basic_layout(t *testing.T) {
	fmt.Println(str.ToUpper("x"))
}

func TestParse_nested(t *testing.T) {
	raw := `line one
line two`
	_ = raw
}

func TestStandalone(t *testing.T) {
	t.Log(answer)
}
"#;

/// Two declarations producing the same group and subtest.
pub const DUPLICATES: &str = r#"package dup

import "testing"

func TestFoo_Alpha(t *testing.T) { first() }

func TestFoo_Alpha(t *testing.T) { second() }
"#;

/// Build a minimal test file from a list of function declarations.
pub fn go_test_file(package: &str, functions: &[&str]) -> String {
    format!(
        "package {package}\n\nimport \"testing\"\n\n{}\n",
        functions.join("\n\n")
    )
}
