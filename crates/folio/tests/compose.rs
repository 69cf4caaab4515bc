// ABOUTME: End-to-end tests for analysis and composition against a realistic article fixture.
// ABOUTME: Covers placement, quote selection, content preservation and determinism.

use digests_folio::{ExtractedContent, ImageDescriptor, LayoutOptions, Pipeline, PlacementKind};
use pretty_assertions::assert_eq;
use scraper::{ElementRef, Html, Selector};
use std::fs;

/// Load a fixture file from the fixtures directory.
fn load_fixture(name: &str) -> ExtractedContent {
    let path = format!(
        "{}/tests/fixtures/{}.json",
        env!("CARGO_MANIFEST_DIR"),
        name
    );
    let raw = fs::read_to_string(&path).expect(&format!("Failed to read fixture: {}", path));
    ExtractedContent::from_json(&raw).expect(&format!("Failed to parse fixture: {}", path))
}

fn pipeline() -> Pipeline {
    Pipeline::builder().build().unwrap()
}

fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("expected output to contain {:?}", needle))
}

/// (tag, text, attributes without class, class tokens) for a block.
type BlockShape = (String, String, Vec<(String, String)>, Vec<String>);

fn shape(element: &ElementRef) -> BlockShape {
    let mut attrs: Vec<(String, String)> = element
        .value()
        .attrs()
        .filter(|(k, _)| *k != "class")
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    attrs.sort();
    let classes = element.value().classes().map(str::to_string).collect();
    (
        element.value().name().to_string(),
        element.text().collect::<String>(),
        attrs,
        classes,
    )
}

fn input_blocks(html: &str) -> Vec<BlockShape> {
    let doc = Html::parse_fragment(html);
    doc.root_element()
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() != "figure")
        .filter(|el| !el.text().collect::<String>().trim().is_empty())
        .map(|el| shape(&el))
        .collect()
}

fn output_blocks(html: &str) -> Vec<BlockShape> {
    let doc = Html::parse_fragment(html);
    let body_sel = Selector::parse("div.article-body").unwrap();
    let body = doc.select(&body_sel).next().expect("article body");
    body.children()
        .filter_map(ElementRef::wrap)
        .filter(|el| !matches!(el.value().name(), "figure" | "aside"))
        .map(|el| shape(&el))
        .collect()
}

#[test]
fn fixture_analysis() {
    let content = load_fixture("harbour");
    let analyzed = pipeline().analyze(&content);

    assert_eq!(analyzed.paragraph_count, 20);
    assert_eq!(analyzed.source_name, "example.com");
    assert_eq!(analyzed.word_count, content.word_count());
    assert_eq!(analyzed.reading_time_minutes, 2);
    assert!(analyzed
        .subtitle
        .as_deref()
        .unwrap()
        .starts_with("When the storm reached the coast"));

    let quotes: Vec<(usize, &str)> = analyzed
        .pull_quotes
        .iter()
        .map(|q| (q.paragraph_index, q.text.as_str()))
        .collect();
    assert_eq!(
        quotes,
        vec![
            (3, "The real question is whether anyone in the harbour office could say where the money had gone."),
            (12, "What this means is that the true cost of the storm is far higher than the official figures suggest."),
        ]
    );
    assert_eq!(analyzed.pull_quotes[1].score, 5.0);
}

#[test]
fn quote_invariants_hold() {
    let content = load_fixture("harbour");
    let analyzed = Pipeline::builder()
        .num_pull_quotes(10)
        .build()
        .unwrap()
        .analyze(&content);

    assert!(!analyzed.pull_quotes.is_empty());
    for quote in &analyzed.pull_quotes {
        let words = quote.text.split_whitespace().count();
        assert!((8..=35).contains(&words), "quote has {} words", words);
    }
    for (i, a) in analyzed.pull_quotes.iter().enumerate() {
        for b in &analyzed.pull_quotes[i + 1..] {
            assert!(a.paragraph_index.abs_diff(b.paragraph_index) >= 8);
        }
    }
    let indices: Vec<usize> = analyzed.pull_quotes.iter().map(|q| q.paragraph_index).collect();
    let mut sorted = indices.clone();
    sorted.sort();
    assert_eq!(indices, sorted);
}

#[test]
fn four_square_images_pair_and_trail() {
    let content = load_fixture("harbour");
    let analyzed = pipeline().analyze(&content);

    let plan: Vec<(PlacementKind, usize, Option<usize>)> = analyzed
        .image_placements
        .iter()
        .map(|p| (p.kind, p.paragraph_index, p.partner))
        .collect();
    assert_eq!(
        plan,
        vec![
            (PlacementKind::Hero, 0, None),
            (PlacementKind::Paired, 6, Some(2)),
            (PlacementKind::Paired, 6, Some(1)),
            (PlacementKind::Centered, 12, None),
        ]
    );

    let body = pipeline().compose_body(&analyzed);
    let hero = position(&body, r#"<figure class="figure hero"><img src="data:image/jpeg;base64,SU1BR0U1""#);
    let first_paragraph = position(&body, "When the storm reached the coast");
    assert!(hero < first_paragraph);

    let pair_a = position(&body, "SU1BR0U2");
    let pair_b = position(&body, "SU1BR0U3");
    let paragraph_six = position(&body, "Jonah Pell");
    let paragraph_five = position(&body, "Ultimately the fishermen");
    assert!(paragraph_five < pair_a && pair_a < pair_b && pair_b < paragraph_six);

    let centered = position(&body, "SU1BR0U4");
    let paragraph_twelve = position(&body, "What this means");
    let paragraph_eleven = position(&body, "Engineers who surveyed");
    assert!(paragraph_eleven < centered && centered < paragraph_twelve);

    // The third image has no caption, so its alt text is used.
    assert!(body.contains("<figcaption>Harbour photograph 3</figcaption>"));
    assert_eq!(body.matches("<figure").count(), 4);
}

#[test]
fn pull_quotes_follow_their_paragraph() {
    let content = load_fixture("harbour");
    let body = pipeline().compose_body(&pipeline().analyze(&content));

    assert_eq!(body.matches(r#"<aside class="pull-quote">"#).count(), 2);
    let source = position(&body, "<p>The city had spent a decade");
    let aside = position(
        &body,
        r#"<aside class="pull-quote"><blockquote>The real question is whether anyone in the harbour office could say where the money had gone.</blockquote></aside>"#,
    );
    let next = position(&body, r#"<h2 id="money" class="section-heading">"#);
    assert!(source < aside && aside < next);
}

#[test]
fn no_images_and_no_quotes_keeps_body_plain() {
    let mut content = load_fixture("harbour");
    content.images.clear();
    let pipeline = Pipeline::builder().num_pull_quotes(0).build().unwrap();
    let analyzed = pipeline.analyze(&content);
    assert!(analyzed.pull_quotes.is_empty());
    assert!(analyzed.image_placements.is_empty());

    let body = pipeline.compose_body(&analyzed);
    assert!(!body.contains("<figure"));
    assert!(!body.contains("<aside"));

    let order = [
        "When the storm reached",
        "Residents had been warned",
        "Where the money went",
        "We rebuilt what we could",
        "Forty boats lost",
        "tide gauge",
        "After the water",
        "On the quay",
    ];
    let positions: Vec<usize> = order.iter().map(|n| position(&body, n)).collect();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
}

#[test]
fn single_image_becomes_hero() {
    let mut content = load_fixture("harbour");
    content.images.truncate(1);
    let analyzed = pipeline().analyze(&content);
    assert_eq!(analyzed.image_placements.len(), 1);
    assert_eq!(analyzed.image_placements[0].kind, PlacementKind::Hero);
    assert_eq!(analyzed.image_placements[0].paragraph_index, 0);

    let body = pipeline().compose_body(&analyzed);
    assert!(body.starts_with(r#"<div class="article-body"><figure class="figure hero">"#));
}

#[test]
fn composition_preserves_every_block() {
    let content = load_fixture("harbour");
    let body = pipeline().compose_body(&pipeline().analyze(&content));

    let input = input_blocks(&content.html_content);
    let output = output_blocks(&body);
    assert_eq!(input.len(), output.len());

    for (before, after) in input.iter().zip(&output) {
        assert_eq!(before.0, after.0, "tag changed");
        assert_eq!(before.1, after.1, "text changed in <{}>", before.0);
        assert_eq!(before.2, after.2, "attributes changed in <{}>", before.0);
        for class in &before.3 {
            assert!(after.3.contains(class), "class {} dropped", class);
        }
    }

    // Markers added on top of the original classes.
    assert!(output[0].3.contains(&"lede".to_string()));
    assert!(output[0].3.contains(&"drop-cap".to_string()));
    assert!(output[1].3.is_empty());
    assert!(body.contains(r#"<a href="https://example.com/report?id=7&amp;y=2024">council report</a>"#));
    assert!(body.contains("<pre>tide gauge   4.2 m\nsurge peak   02:40</pre>"));
    assert!(!body.contains("old.jpg"));
}

#[test]
fn composition_is_deterministic() {
    let content = load_fixture("harbour");
    let first = pipeline().run(&content);
    let second = pipeline().run(&content);
    assert_eq!(first.body, second.body);
    assert_eq!(
        serde_json::to_string(&first.analysis).unwrap(),
        serde_json::to_string(&second.analysis).unwrap()
    );

    let analyzed = pipeline().analyze(&content);
    let options = LayoutOptions::default();
    assert_eq!(
        digests_folio::compose_body(&analyzed, &options),
        digests_folio::compose_body(&analyzed, &options)
    );
}

#[test]
fn short_article_flushes_images_at_end() {
    let content = ExtractedContent {
        title: "Brief".to_string(),
        html_content: "<p>Only one paragraph here.</p>".to_string(),
        images: (0..3)
            .map(|i| ImageDescriptor {
                data_uri: format!("data:image/png;base64,IMG{}", i),
                width: 1600,
                height: 900,
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    };
    let body = pipeline().run(&content).body;
    let paragraph = position(&body, "Only one paragraph");
    let hero = position(&body, "IMG0");
    // Both trailing slots clamp to paragraph 0, so they precede it.
    let second = position(&body, "IMG1");
    let third = position(&body, "IMG2");
    assert!(hero < second && second < third && third < paragraph);
}

#[test]
fn document_wraps_body() {
    let content = load_fixture("harbour");
    let pipeline = pipeline();
    let analyzed = pipeline.analyze(&content);
    let page = pipeline.compose_document(&analyzed);
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains(r#"<p class="byline">By Jane Roe · March 5, 2024 · 2 min read</p>"#));
    assert!(page.contains(&pipeline.compose_body(&analyzed)));
}
