//! Maps Go test function names onto `(group, subtest)` pairs.
//!
//! `TestFoo_Bar_Baz` belongs to group `TestFoo` as subtest `Bar_Baz`, while
//! `TestFoo` forms its own group with a single subtest named `Foo`.
use std::sync::LazyLock;

use regex::Regex;

use crate::{Result, SubtestifyError};

/// Literal prefix identifying a declaration as a test candidate.
pub const TEST_MARKER: &str = "Test";

/// Everything up to the first underscore after the marker
static GROUP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(Test[^_]+)(?:_.*|$)").unwrap());

/// Suffix after the first underscore, underscores kept verbatim
static SUFFIXED_SUBTEST_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Test[^_]+_(.*)$").unwrap());

/// Name without the marker
static BARE_SUBTEST_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Test(.+)$").unwrap());

/// Result of classifying a single declaration name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub group: String,
    pub subtest: String,
}

/// Classify a declaration name, requiring both the group and the subtest
/// pass to succeed.
pub fn classify(name: &str) -> Result<Classification> {
    let group = extract_group(name)?;
    let subtest = extract_subtest_name(name)?;
    Ok(Classification { group, subtest })
}

/// TestFoo_Bar -> TestFoo
pub fn extract_group(name: &str) -> Result<String> {
    GROUP_REGEX
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| {
            SubtestifyError::classification(name, "could not extract group")
        })
}

/// TestFoo_Bar -> Bar, TestBar -> Bar
pub fn extract_subtest_name(name: &str) -> Result<String> {
    if let Some(m) = SUFFIXED_SUBTEST_REGEX
        .captures(name)
        .and_then(|caps| caps.get(1))
    {
        return Ok(m.as_str().to_string());
    }

    if let Some(m) =
        BARE_SUBTEST_REGEX.captures(name).and_then(|caps| caps.get(1))
    {
        return Ok(m.as_str().to_string());
    }

    Err(SubtestifyError::classification(
        name,
        "could not extract subtest name",
    ))
}
