//! The two lookup strategies under comparison.
//!
//! Both resolve a `(parent_id, child_id)` pair to a child record, and both
//! report absence as `None` rather than an error. They differ only in how
//! the parent is located: a first-match scan over the sequence versus a
//! hashed retrieval from the mapping. The child step is a scan either way,
//! since children are only reachable through their parent.

use std::collections::HashMap;

use crate::record::{ChildRecord, ParentRecord};

/// Linear strategy: scan the sequence front to back for the first parent
/// with a matching id, then scan that parent's children. Worst case
/// O(N + M) comparisons.
pub fn linear_find<'a>(
    sequence: &'a [ParentRecord],
    parent_id: u32,
    child_id: u32,
) -> Option<&'a ChildRecord> {
    sequence
        .iter()
        .find(|parent| parent.id == parent_id)
        .and_then(|parent| find_child(parent, child_id))
}

/// Hashed strategy: retrieve the parent by key, then scan its children.
/// Expected O(1) for the parent step, O(M) for the child step.
pub fn indexed_find<'a>(
    index: &'a HashMap<u32, ParentRecord>,
    parent_id: u32,
    child_id: u32,
) -> Option<&'a ChildRecord> {
    index
        .get(&parent_id)
        .and_then(|parent| find_child(parent, child_id))
}

fn find_child(parent: &ParentRecord, child_id: u32) -> Option<&ChildRecord> {
    parent.children.iter().find(|child| child.id == child_id)
}
