//! Built-in tera templates for generated Go code.

/// Template name of the group/subtest block.
pub const GROUPS: &str = "groups";

/// Template name of the full compilable unit.
pub const STANDALONE: &str = "standalone";

/// One parallel test function per group with a `t.Run` per subtest.
pub const DEFAULT_GROUPS_TEMPLATE: &str = r#"{% for group in groups %}
func {{ group.name }}(t *testing.T) {
	t.Parallel()
{%- for subtest in group.subtests %}
	t.Run("{{ subtest.name | go_quote }}", func(t *testing.T) {{ subtest.body }})
{%- endfor %}
}
{% endfor %}"#;

/// Package clause and imports followed by the group block.
pub const DEFAULT_STANDALONE_TEMPLATE: &str = r#"package {{ package_name }}
{% if import_block %}
import (
{{ import_block }}
)
{% endif %}{% include "groups" %}"#;
