// ABOUTME: Main library entry point for the folio editorial layout engine.
// ABOUTME: Re-exports the public API: Pipeline, Analyzer, Composer, content and option types, LayoutError.

//! Folio - editorial layout for extracted articles.
//!
//! This crate takes an article that has already been extracted (title, body
//! markup, plain text and pre-encoded images), decides where images and pull
//! quotes belong, and recomposes the body markup for a print renderer.
//!
//! # Example
//!
//! ```
//! use digests_folio::{ExtractedContent, Pipeline};
//!
//! let content = ExtractedContent {
//!     title: "Harbour Lights".into(),
//!     html_content: "<p>It began with a storm.</p>".into(),
//!     ..Default::default()
//! };
//! let pipeline = Pipeline::builder().num_pull_quotes(2).build()?;
//! let analyzed = pipeline.analyze(&content);
//! let body = pipeline.compose_body(&analyzed);
//! assert!(body.starts_with(r#"<div class="article-body">"#));
//! # Ok::<(), digests_folio::LayoutError>(())
//! ```

pub mod analyzer;
pub mod composer;
pub mod content;
pub mod document;
pub mod dom;
pub mod error;
pub mod naming;
pub mod options;
pub mod pipeline;

pub use crate::analyzer::{
    analyze_content, AnalyzedContent, Analyzer, ImagePlacement, PlacementKind, PullQuote,
};
pub use crate::composer::{compose_body, Composer};
pub use crate::content::{ExtractedContent, ImageDescriptor};
pub use crate::document::compose_document;
pub use crate::error::{ErrorCode, LayoutError};
pub use crate::naming::suggest_filename;
pub use crate::options::{
    pull_quote_count, AnalyzerOptions, LayoutOptions, PipelineBuilder, Style,
};
pub use crate::pipeline::{Composed, Pipeline};
