// ABOUTME: DOM traversal and tree-building utilities for the layout engine.
// ABOUTME: Provides the shared paragraph index and the owned output tree with its serializer.

//! DOM utilities for reading article markup and writing composed markup.
//!
//! [`flow`] classifies block-level nodes and defines the paragraph sequence that
//! both the analyzer and the composer index into. [`tree`] holds the owned
//! output tree the composer builds, plus deep cloning from parsed nodes.

pub mod flow;
pub mod tree;
