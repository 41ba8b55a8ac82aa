//! Folds classified subtests into groups.
use std::collections::HashMap;

use crate::types::{ClassifiedSubtest, Group};

/// Group subtests by name, keeping groups in first-seen order and subtests
/// in the order they were encountered.
///
/// Identical `(group, subtest)` pairs are not merged: each declaration gets
/// its own `t.Run`, even when display names collide.
pub fn aggregate(
    subtests: impl IntoIterator<Item = ClassifiedSubtest>,
) -> Vec<Group> {
    let mut groups: Vec<Group> = vec![];
    let mut index: HashMap<String, usize> = HashMap::new();

    for ClassifiedSubtest { group, subtest } in subtests {
        match index.get(&group) {
            Some(&i) => groups[i].subtests.push(subtest),
            None => {
                index.insert(group.clone(), groups.len());
                groups.push(Group {
                    name: group,
                    subtests: vec![subtest],
                });
            }
        }
    }

    groups
}
