//! Record types shared by every dataset representation.

/// A top-level dataset record: one parent and its run of children.
///
/// Parent ids are dense: the parent generated at position `i` has id `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentRecord {
    pub id: u32,
    /// Children in id order; a child's id equals its position here.
    pub children: Vec<ChildRecord>,
}

/// A leaf record scoped to one parent. Child ids are dense within the
/// parent, starting at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildRecord {
    pub id: u32,
    pub label: String,
}

/// The label every generated child carries: `Child_<parent>_<child>`.
///
/// Generation and verification both go through this function so the two
/// sides can never drift apart.
pub fn child_label(parent_id: u32, child_id: u32) -> String {
    format!("Child_{parent_id}_{child_id}")
}
