//! Data passed between extraction, aggregation and rendering.
use serde::Serialize;

/// One runnable unit nested inside a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subtest {
    /// Display name passed to `t.Run`
    pub name: String,
    /// Verbatim text of the original function body, braces included
    pub body: String,
}

/// A subtest tagged with the group it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedSubtest {
    pub group: String,
    pub subtest: Subtest,
}

/// An outer test function and the subtests it will run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub name: String,
    pub subtests: Vec<Subtest>,
}

/// Everything the extractor pulls out of a single Go source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub package_name: String,
    /// Rendered import specs in source order
    pub imports: Vec<String>,
    pub subtests: Vec<ClassifiedSubtest>,
    /// Names of function declarations that were dropped
    pub skipped: Vec<String>,
}

/// Complete input to the template renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TemplateContext {
    pub package_name: String,
    pub imports: Vec<String>,
    /// Imports joined one per line, tab indented
    pub import_block: String,
    pub groups: Vec<Group>,
}

impl TemplateContext {
    pub fn new(
        package_name: impl Into<String>,
        imports: Vec<String>,
        groups: Vec<Group>,
    ) -> Self {
        let import_block = imports
            .iter()
            .map(|i| format!("\t{i}"))
            .collect::<Vec<String>>()
            .join("\n");

        Self {
            package_name: package_name.into(),
            imports,
            import_block,
            groups,
        }
    }

    pub fn subtest_count(&self) -> usize {
        self.groups.iter().map(|g| g.subtests.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_tab_indented_import_block() {
        let ctx = TemplateContext::new(
            "foo",
            vec![r#""fmt""#.into(), r#"tt "testing""#.into()],
            vec![],
        );
        assert_eq!(ctx.import_block, "\t\"fmt\"\n\ttt \"testing\"");
    }

    #[test]
    fn empty_imports_give_empty_block() {
        let ctx = TemplateContext::new("foo", vec![], vec![]);
        assert!(ctx.import_block.is_empty());
        assert_eq!(ctx.subtest_count(), 0);
    }
}
