// ABOUTME: Builders for synthesized blocks: image figures and pull-quote asides.
// ABOUTME: Placement kind is recorded as a class so the renderer can style it.

use ego_tree::NodeMut;

use crate::analyzer::{ImagePlacement, PullQuote};
use crate::dom::tree::OutNode;

pub const PULL_QUOTE_CLASS: &str = "pull-quote";

/// Append `<figure class="figure KIND"><img/><figcaption/></figure>`.
///
/// The caption falls back to the alt text and is omitted when both are blank.
pub fn append_figure(parent: &mut NodeMut<'_, OutNode>, placement: &ImagePlacement) {
    let class = format!("figure {}", placement.kind.as_class());
    let mut figure = parent.append(OutNode::element("figure", &[("class", class.as_str())]));
    figure.append(OutNode::element(
        "img",
        &[
            ("src", placement.image.data_uri.as_str()),
            ("alt", placement.image.alt_text.as_str()),
        ],
    ));
    if let Some(caption) = placement.image.caption_text() {
        let mut figcaption = figure.append(OutNode::element("figcaption", &[]));
        figcaption.append(OutNode::text(caption));
    }
}

/// Append `<aside class="pull-quote"><blockquote>TEXT</blockquote></aside>`.
pub fn append_pull_quote(parent: &mut NodeMut<'_, OutNode>, quote: &PullQuote) {
    let mut aside = parent.append(OutNode::element("aside", &[("class", PULL_QUOTE_CLASS)]));
    let mut blockquote = aside.append(OutNode::element("blockquote", &[]));
    blockquote.append(OutNode::text(quote.text.as_str()));
}
