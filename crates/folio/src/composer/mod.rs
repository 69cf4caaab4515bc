// ABOUTME: Body composition: clones the article's flow blocks into a fresh tree.
// ABOUTME: Interleaves image figures and pull quotes at the analyzer's paragraph indices.

//! Layout composition.
//!
//! The original markup is parsed once into a read-only tree. A new output tree
//! is built by appending deep clones of the flow-level blocks and synthesized
//! figures/asides; the parsed tree is never modified.

pub mod blocks;

use std::collections::BTreeMap;

use ego_tree::{NodeMut, NodeRef};
use scraper::{ElementRef, Html, Node};

use crate::analyzer::{AnalyzedContent, ImagePlacement, PlacementKind, PullQuote};
use crate::dom::flow::{is_empty_paragraph, is_flow_tag, is_heading, paragraphs_covered, FIGURE_TAG};
use crate::dom::tree::{clone_into, Fragment, OutNode};
use crate::options::LayoutOptions;

pub const ARTICLE_BODY_CLASS: &str = "article-body";
pub const DROP_CAP_CLASS: &str = "drop-cap";
pub const SECTION_HEADING_CLASS: &str = "section-heading";

/// Composes analyzed content into body markup under a fixed policy.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    options: LayoutOptions,
}

impl Composer {
    pub fn new(options: LayoutOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Compose the article body as `<div class="article-body">...</div>`.
    pub fn compose_body(&self, content: &AnalyzedContent) -> String {
        let mut body = Fragment::new(OutNode::element("div", &[("class", ARTICLE_BODY_CLASS)]));
        self.fill_body(content, &mut body.root_mut());
        body.to_html()
    }

    /// Write the composed body's children under `container`.
    pub fn fill_body(&self, content: &AnalyzedContent, container: &mut NodeMut<'_, OutNode>) {
        let doc = Html::parse_fragment(&content.html_content);
        let mut writer = BodyWriter::new(&self.options, content);

        if self.options.include_images {
            if let Some(hero) = content.hero() {
                blocks::append_figure(container, hero);
                writer.figures += 1;
            }
        }

        writer.walk(*doc.root_element(), container);
        writer.finish(container);

        tracing::debug!(
            blocks = writer.blocks,
            figures = writer.figures,
            quotes = writer.quotes_written,
            paragraphs = writer.counter,
            "composed article body"
        );
    }
}

/// Per-call composition state.
struct BodyWriter<'c> {
    options: &'c LayoutOptions,
    images: BTreeMap<usize, Vec<&'c ImagePlacement>>,
    quotes: BTreeMap<usize, Vec<&'c PullQuote>>,
    /// Paragraphs passed so far; the analyzer's index space.
    counter: usize,
    /// Set once the opening `<p>` block has been written.
    drop_cap_done: bool,
    blocks: usize,
    figures: usize,
    quotes_written: usize,
}

impl<'c> BodyWriter<'c> {
    fn new(options: &'c LayoutOptions, content: &'c AnalyzedContent) -> Self {
        let mut images: BTreeMap<usize, Vec<&ImagePlacement>> = BTreeMap::new();
        for placement in &content.image_placements {
            if placement.kind != PlacementKind::Hero {
                images
                    .entry(placement.paragraph_index)
                    .or_default()
                    .push(placement);
            }
        }

        let mut quotes: BTreeMap<usize, Vec<&PullQuote>> = BTreeMap::new();
        for quote in &content.pull_quotes {
            quotes.entry(quote.paragraph_index).or_default().push(quote);
        }

        Self {
            options,
            images,
            quotes,
            counter: 0,
            drop_cap_done: false,
            blocks: 0,
            figures: 0,
            quotes_written: 0,
        }
    }

    /// Visit the children of `node`, emitting flow blocks in document order.
    fn walk(&mut self, node: NodeRef<'_, Node>, out: &mut NodeMut<'_, OutNode>) {
        for child in node.children() {
            let Some(element) = ElementRef::wrap(child) else {
                continue;
            };
            let name = element.value().name();

            if name.eq_ignore_ascii_case(FIGURE_TAG) {
                continue;
            }
            if !is_flow_tag(name) {
                self.walk(child, out);
                continue;
            }
            if is_empty_paragraph(&element) {
                continue;
            }
            self.emit_block(&element, out);
        }
    }

    fn emit_block(&mut self, element: &ElementRef<'_>, out: &mut NodeMut<'_, OutNode>) {
        let name = element.value().name();
        let start = self.counter;
        let end = start + paragraphs_covered(element);

        // Images go ahead of the block holding their paragraph. A heading
        // covers no paragraph but still precedes the one at `start`.
        if self.options.include_images {
            self.write_images_before(end.max(start + 1), out);
        }

        let mut classes = Vec::new();
        if name.eq_ignore_ascii_case("p") && !self.drop_cap_done {
            self.drop_cap_done = true;
            if self.options.include_drop_cap {
                classes.push(DROP_CAP_CLASS);
            }
        }
        if is_heading(name) {
            classes.push(SECTION_HEADING_CLASS);
        }
        clone_into(out, **element, &classes);
        self.blocks += 1;
        self.counter = end;

        if self.options.include_pull_quotes {
            let rest = self.quotes.split_off(&end);
            let ready = std::mem::replace(&mut self.quotes, rest);
            for quote in ready.into_values().flatten() {
                blocks::append_pull_quote(out, quote);
                self.quotes_written += 1;
            }
        }
    }

    fn write_images_before(&mut self, bound: usize, out: &mut NodeMut<'_, OutNode>) {
        let rest = self.images.split_off(&bound);
        let ready = std::mem::replace(&mut self.images, rest);
        for placement in ready.into_values().flatten() {
            blocks::append_figure(out, placement);
            self.figures += 1;
        }
    }

    /// Flush images whose paragraph never appeared, in index order.
    fn finish(&mut self, out: &mut NodeMut<'_, OutNode>) {
        if !self.options.include_images || self.images.is_empty() {
            return;
        }
        let leftover: usize = self.images.values().map(Vec::len).sum();
        tracing::debug!(leftover, "appending unmatched images at the end");
        for placement in std::mem::take(&mut self.images).into_values().flatten() {
            blocks::append_figure(out, placement);
            self.figures += 1;
        }
    }
}

/// Compose with the given options in one call.
pub fn compose_body(content: &AnalyzedContent, options: &LayoutOptions) -> String {
    Composer::new(options.clone()).compose_body(content)
}
