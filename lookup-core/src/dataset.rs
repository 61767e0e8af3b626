//! Dataset generation.
//!
//! The same logical content is built into two representations: an ordered
//! sequence and a hashed mapping keyed by parent id. Generation is
//! deterministic (content derives from indices alone), so representations
//! built independently always agree record for record.

use std::collections::HashMap;

use crate::record::{child_label, ChildRecord, ParentRecord};

fn generate_parent(parent_id: u32, children: u32) -> ParentRecord {
    let children = (0..children)
        .map(|child_id| ChildRecord {
            id: child_id,
            label: child_label(parent_id, child_id),
        })
        .collect();
    ParentRecord {
        id: parent_id,
        children,
    }
}

/// Build the ordered-sequence representation.
///
/// Parent ids are dense `[0, parents)`, so each parent sits at the index
/// equal to its id. Lookups against this representation still scan: the
/// sequence models a collection whose position/id alignment is incidental,
/// not an access path.
pub fn generate_sequence(parents: u32, children: u32) -> Vec<ParentRecord> {
    let sequence: Vec<ParentRecord> = (0..parents)
        .map(|parent_id| generate_parent(parent_id, children))
        .collect();
    tracing::debug!(parents, children, "sequence representation built");
    sequence
}

/// Build the hashed-mapping representation, keyed by parent id, with the
/// same logical content as [`generate_sequence`].
pub fn generate_index(parents: u32, children: u32) -> HashMap<u32, ParentRecord> {
    let mut index = HashMap::with_capacity(parents as usize);
    for parent_id in 0..parents {
        index.insert(parent_id, generate_parent(parent_id, children));
    }
    tracing::debug!(parents, children, "index representation built");
    index
}
