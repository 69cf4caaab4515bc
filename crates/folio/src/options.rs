// ABOUTME: Configuration options for the folio engine including Style, LayoutOptions and AnalyzerOptions.
// ABOUTME: PipelineBuilder provides a fluent API for constructing a validated Pipeline.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::pipeline::Pipeline;

/// Visual style label forwarded to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Magazine,
    Minimal,
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Style::Magazine => "magazine",
            Style::Minimal => "minimal",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Style {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "magazine" => Ok(Style::Magazine),
            "minimal" => Ok(Style::Minimal),
            other => Err(LayoutError::invalid_config(
                "style",
                format!("unknown style '{}', expected 'magazine' or 'minimal'", other),
            )),
        }
    }
}

/// Read-only policy consumed by the composer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    pub style: Style,
    pub include_images: bool,
    pub include_pull_quotes: bool,
    pub include_drop_cap: bool,
    pub include_header_footer: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            style: Style::Magazine,
            include_images: true,
            include_pull_quotes: true,
            include_drop_cap: true,
            include_header_footer: true,
        }
    }
}

/// Tunables for content analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerOptions {
    /// Upper bound on selected pull quotes. Zero disables selection.
    pub num_pull_quotes: usize,
    /// Minimum paragraph distance between two selected quotes; at least 1,
    /// so no paragraph supplies two quotes.
    pub min_quote_spacing: usize,
    /// Images with width/height at or below this ratio may be paired.
    pub pair_aspect_cutoff: f64,
    /// Smallest paragraph stride between image slots.
    pub min_image_stride: usize,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            num_pull_quotes: 3,
            min_quote_spacing: 8,
            pair_aspect_cutoff: 1.0,
            min_image_stride: 3,
        }
    }
}

impl AnalyzerOptions {
    /// Check the tunables before any analysis runs.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !self.pair_aspect_cutoff.is_finite() || self.pair_aspect_cutoff <= 0.0 {
            return Err(LayoutError::invalid_config(
                "pair_aspect_cutoff",
                format!("must be a positive number, got {}", self.pair_aspect_cutoff),
            ));
        }
        if self.min_quote_spacing == 0 {
            return Err(LayoutError::invalid_config(
                "min_quote_spacing",
                "must be at least 1",
            ));
        }
        if self.min_image_stride == 0 {
            return Err(LayoutError::invalid_config(
                "min_image_stride",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Convert a caller-supplied quote count, rejecting negative values.
pub fn pull_quote_count(raw: i64) -> Result<usize, LayoutError> {
    usize::try_from(raw).map_err(|_| {
        LayoutError::invalid_config(
            "pull_quotes",
            format!("count must be non-negative, got {}", raw),
        )
    })
}

/// Builder for constructing Pipeline instances with custom configuration.
#[derive(Debug, Clone, Default)]
pub struct PipelineBuilder {
    layout: LayoutOptions,
    analyzer: AnalyzerOptions,
}

impl PipelineBuilder {
    /// Create a new PipelineBuilder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(mut self, style: Style) -> Self {
        self.layout.style = style;
        self
    }

    pub fn include_images(mut self, include: bool) -> Self {
        self.layout.include_images = include;
        self
    }

    pub fn include_pull_quotes(mut self, include: bool) -> Self {
        self.layout.include_pull_quotes = include;
        self
    }

    pub fn include_drop_cap(mut self, include: bool) -> Self {
        self.layout.include_drop_cap = include;
        self
    }

    pub fn include_header_footer(mut self, include: bool) -> Self {
        self.layout.include_header_footer = include;
        self
    }

    /// Set how many pull quotes the analyzer may select.
    pub fn num_pull_quotes(mut self, count: usize) -> Self {
        self.analyzer.num_pull_quotes = count;
        self
    }

    pub fn min_quote_spacing(mut self, spacing: usize) -> Self {
        self.analyzer.min_quote_spacing = spacing;
        self
    }

    pub fn pair_aspect_cutoff(mut self, cutoff: f64) -> Self {
        self.analyzer.pair_aspect_cutoff = cutoff;
        self
    }

    pub fn min_image_stride(mut self, stride: usize) -> Self {
        self.analyzer.min_image_stride = stride;
        self
    }

    /// Replace the layout options wholesale.
    pub fn layout(mut self, layout: LayoutOptions) -> Self {
        self.layout = layout;
        self
    }

    /// Replace the analyzer options wholesale.
    pub fn analyzer(mut self, analyzer: AnalyzerOptions) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Validate and build the Pipeline.
    pub fn build(self) -> Result<Pipeline, LayoutError> {
        self.analyzer.validate()?;
        let mut analyzer = self.analyzer;
        if !self.layout.include_pull_quotes {
            analyzer.num_pull_quotes = 0;
        }
        Ok(Pipeline::new(self.layout, analyzer))
    }
}
