// ABOUTME: Image placement planning: hero first, then paired or centered slots.
// ABOUTME: Slots are spread across the body at a stride derived from the paragraph count.

use crate::content::ImageDescriptor;
use crate::options::AnalyzerOptions;

use super::{ImagePlacement, PlacementKind};

/// Assign every image a slot.
///
/// The first image is the hero at paragraph 0. The rest are walked in order;
/// two consecutive square-or-vertical images share one `paired` slot, anything
/// else gets a `centered` slot of its own. Paired placements reference each
/// other by their index in the returned list.
pub fn plan(
    images: &[ImageDescriptor],
    paragraph_count: usize,
    options: &AnalyzerOptions,
) -> Vec<ImagePlacement> {
    let Some((hero, remaining)) = images.split_first() else {
        return Vec::new();
    };

    let mut placements = vec![ImagePlacement {
        image: hero.clone(),
        kind: PlacementKind::Hero,
        paragraph_index: 0,
        partner: None,
    }];

    if remaining.is_empty() {
        return placements;
    }

    let stride = options
        .min_image_stride
        .max(paragraph_count / remaining.len());
    let last_paragraph = paragraph_count.saturating_sub(1);
    let pairable = |image: &ImageDescriptor| {
        image.is_square_or_vertical_with(options.pair_aspect_cutoff)
    };

    let mut idx = 0;
    let mut position_counter = 1;
    while idx < remaining.len() {
        let image = &remaining[idx];
        let position = (position_counter * stride).min(last_paragraph);

        match remaining.get(idx + 1) {
            Some(next) if pairable(image) && pairable(next) => {
                let first = placements.len();
                placements.push(ImagePlacement {
                    image: image.clone(),
                    kind: PlacementKind::Paired,
                    paragraph_index: position,
                    partner: Some(first + 1),
                });
                placements.push(ImagePlacement {
                    image: next.clone(),
                    kind: PlacementKind::Paired,
                    paragraph_index: position,
                    partner: Some(first),
                });
                idx += 2;
            }
            _ => {
                placements.push(ImagePlacement {
                    image: image.clone(),
                    kind: PlacementKind::Centered,
                    paragraph_index: position,
                    partner: None,
                });
                idx += 1;
            }
        }

        position_counter += 1;
    }

    placements
}
