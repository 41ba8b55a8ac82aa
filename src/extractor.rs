//! Go source parsing and test declaration extraction.
//!
//! Parsing is delegated to tree-sitter with the Go grammar. Only top-level
//! declarations are inspected: the package clause, import declarations and
//! plain function declarations. Methods and every other declaration kind are
//! ignored.
use log::*;
use tree_sitter::{Node, Parser, Tree};

use crate::{
    Result, SubtestifyError,
    classifier::{self, Classification},
    types::{ClassifiedSubtest, Extraction, Subtest},
};

const PACKAGE_CLAUSE: &str = "package_clause";
const PACKAGE_IDENTIFIER: &str = "package_identifier";
const IMPORT_DECLARATION: &str = "import_declaration";
const IMPORT_SPEC: &str = "import_spec";
const FUNCTION_DECLARATION: &str = "function_declaration";

/// A parsed Go source unit.
pub struct GoSource {
    text: String,
    tree: Tree,
}

impl GoSource {
    /// Parse Go source text, failing on any syntax error.
    pub fn parse(text: impl Into<String>) -> Result<Self> {
        let text = text.into();

        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_go::LANGUAGE.into())
            .map_err(|e| SubtestifyError::ParserSetup(e.to_string()))?;

        let tree = parser.parse(&text, None).ok_or_else(|| {
            SubtestifyError::ParserSetup("parser returned no tree".into())
        })?;

        let root = tree.root_node();

        if root.has_error() {
            let node = first_error(root).unwrap_or(root);
            let pos = node.start_position();
            return Err(SubtestifyError::Parse {
                line: pos.row + 1,
                column: pos.column + 1,
            });
        }

        Ok(Self { text, tree })
    }

    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn node_text(&self, node: Node<'_>) -> &str {
        &self.text[node.byte_range()]
    }
}

/// Depth-first search for the first ERROR or MISSING node.
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }

    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_error(child) {
            return Some(found);
        }
    }

    None
}

/// Walk the top-level declarations of a parsed unit and collect the package
/// name, imports and every classifiable test function.
pub fn extract(source: &GoSource) -> Result<Extraction> {
    let root = source.root();
    let mut extraction = Extraction::default();
    let mut package_name = None;

    let mut cursor = root.walk();
    for decl in root.named_children(&mut cursor) {
        match decl.kind() {
            PACKAGE_CLAUSE => {
                package_name = package_identifier(source, decl);
            }
            IMPORT_DECLARATION => {
                collect_import_specs(source, decl, &mut extraction.imports);
            }
            FUNCTION_DECLARATION => {
                let Some(name) = function_name(source, decl) else {
                    continue;
                };

                match extract_function(source, name, decl) {
                    Ok(Some(classified)) => {
                        extraction.subtests.push(classified)
                    }
                    Ok(None) => extraction.skipped.push(name.to_string()),
                    Err(err) => {
                        warn!("{err}");
                        extraction.skipped.push(name.to_string());
                    }
                }
            }
            _ => {}
        }
    }

    extraction.package_name =
        package_name.ok_or(SubtestifyError::MissingPackage)?;

    Ok(extraction)
}

fn package_identifier(source: &GoSource, clause: Node<'_>) -> Option<String> {
    let mut cursor = clause.walk();
    clause
        .named_children(&mut cursor)
        .find(|n| n.kind() == PACKAGE_IDENTIFIER)
        .map(|n| source.node_text(n).to_string())
}

/// Handles both `import "x"` and the parenthesized list form.
fn collect_import_specs(
    source: &GoSource,
    node: Node<'_>,
    imports: &mut Vec<String>,
) {
    if node.kind() == IMPORT_SPEC {
        imports.push(source.node_text(node).to_string());
        return;
    }

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        collect_import_specs(source, child, imports);
    }
}

fn function_name<'s>(
    source: &'s GoSource,
    decl: Node<'_>,
) -> Option<&'s str> {
    decl.child_by_field_name("name").map(|n| source.node_text(n))
}

/// Classify a function declaration and capture its body. Bodyless
/// declarations yield `Ok(None)`.
fn extract_function(
    source: &GoSource,
    name: &str,
    decl: Node<'_>,
) -> Result<Option<ClassifiedSubtest>> {
    let Classification { group, subtest } = classifier::classify(name)?;

    let Some(body) = decl.child_by_field_name("body") else {
        warn!("skipping {name}: function has no body");
        return Ok(None);
    };

    debug!("extracted {name} as {group}/{subtest}");

    Ok(Some(ClassifiedSubtest {
        group,
        subtest: Subtest {
            name: subtest,
            body: source.node_text(body).to_string(),
        },
    }))
}

#[cfg(test)]
#[path = "./extractor_tests.rs"]
mod tests;
