//! # lookup-core
//!
//! Dataset model and lookup strategies for the collection benchmark.
//!
//! A dataset is N parent records with M children each, materialized as two
//! representations with identical content: an ordered sequence and a hashed
//! mapping keyed by parent id. [`linear_find`] resolves a target by scanning
//! the sequence; [`indexed_find`] resolves the same target through the
//! mapping. Absence is a normal outcome for both, reported as `None`.
//!
//! This crate only models and searches; timing and reporting belong to the
//! `collection-bench` binary.

pub mod dataset;
pub mod record;
pub mod search;

pub use dataset::{generate_index, generate_sequence};
pub use record::{child_label, ChildRecord, ParentRecord};
pub use search::{indexed_find, linear_find};
