use std::path::{Path, PathBuf};

/// Suffix appended to the input stem for standalone output.
pub const GENERATED_SUFFIX: &str = "_generated";

/// Derives the standalone output path `<stem>_generated<ext>`, placed next
/// to the input file.
pub fn generated_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let file_name = match input.extension() {
        Some(ext) => {
            format!("{stem}{GENERATED_SUFFIX}.{}", ext.to_string_lossy())
        }
        None => format!("{stem}{GENERATED_SUFFIX}"),
    };

    input.with_file_name(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inserts_suffix_before_extension() {
        let result = generated_path(Path::new("foo_test.go"));
        assert_eq!(result, PathBuf::from("foo_test_generated.go"));
    }

    #[test]
    fn keeps_parent_directory() {
        let result = generated_path(Path::new("pkg/widgets/render_test.go"));
        assert_eq!(
            result,
            PathBuf::from("pkg/widgets/render_test_generated.go")
        );
    }

    #[test]
    fn only_last_extension_is_moved() {
        let result = generated_path(Path::new("fixtures.test.go"));
        assert_eq!(result, PathBuf::from("fixtures.test_generated.go"));
    }

    #[test]
    fn handles_missing_extension() {
        let result = generated_path(Path::new("dir/Makefile"));
        assert_eq!(result, PathBuf::from("dir/Makefile_generated"));
    }
}
