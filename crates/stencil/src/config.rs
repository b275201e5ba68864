//! Configuration types for Stencil conversions.
//!
//! This module provides the single immutable configuration value threaded
//! through the compiler. All types implement [`serde::Deserialize`] so a
//! configuration can be loaded from TOML; every field falls back to the
//! built-in BPMN styling when absent.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the four sections.
//! - [`PageConfig`] - Page scale, margin, minimum size and default title.
//! - [`ShapeConfig`] - Colors, stroke weights and fonts of BPMN shapes.
//! - [`LabelConfig`] - Detached label sizing for events and gateways.
//! - [`ConnectorConfig`] - Flow styling, corner rounding and arrowheads.
//!
//! # Example
//!
//! ```
//! # use stencil::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.page().ppi(), 96.0);
//! assert_eq!(config.connectors().rounding(), 0.15);
//! ```

use serde::Deserialize;

use stencil_core::{color::Color, draw::LinePattern, model::FlowKind};

fn color(value: &str) -> Color {
    Color::new(value).unwrap_or_default()
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    page: PageConfig,

    #[serde(default)]
    shapes: ShapeConfig,

    #[serde(default)]
    labels: LabelConfig,

    #[serde(default)]
    connectors: ConnectorConfig,
}

impl AppConfig {
    /// Creates a configuration from its four sections.
    pub fn new(
        page: PageConfig,
        shapes: ShapeConfig,
        labels: LabelConfig,
        connectors: ConnectorConfig,
    ) -> Self {
        Self {
            page,
            shapes,
            labels,
            connectors,
        }
    }

    pub fn page(&self) -> &PageConfig {
        &self.page
    }

    pub fn shapes(&self) -> &ShapeConfig {
        &self.shapes
    }

    pub fn labels(&self) -> &LabelConfig {
        &self.labels
    }

    pub fn connectors(&self) -> &ConnectorConfig {
        &self.connectors
    }
}

/// Page scale and sizing.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Source pixels per page inch.
    ppi: f64,
    /// Blank space kept around the drawing, in source pixels.
    margin_px: f64,
    min_width: f64,
    min_height: f64,
    /// Page name used when no title can be derived from the file name.
    default_title: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            ppi: 96.0,
            margin_px: 50.0,
            min_width: 11.0,
            min_height: 8.5,
            default_title: "BPMN Diagram".to_string(),
        }
    }
}

impl PageConfig {
    pub fn ppi(&self) -> f64 {
        self.ppi
    }

    pub fn margin_px(&self) -> f64 {
        self.margin_px
    }

    /// Minimum page width in inches.
    pub fn min_width(&self) -> f64 {
        self.min_width
    }

    /// Minimum page height in inches.
    pub fn min_height(&self) -> f64 {
        self.min_height
    }

    pub fn default_title(&self) -> &str {
        &self.default_title
    }
}

/// Styling of BPMN node shapes, pools and lanes.
///
/// Weights are in inches and font sizes in points.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShapeConfig {
    fill_color: Color,
    stroke_color: Color,
    /// Stroke of pools, lanes and annotations.
    container_stroke_color: Color,
    text_color: Color,
    regular_weight: f64,
    /// End events, sub-processes and call activities.
    heavy_weight: f64,
    /// Pools, lanes and annotations.
    light_weight: f64,
    task_corner_cap: f64,
    annotation_tick: f64,
    task_font_size: f64,
    event_font_size: f64,
    annotation_font_size: f64,
    container_font_size: f64,
    header_font_min: f64,
    header_font_max: f64,
    /// Header font points per inch of band width.
    header_font_scale: f64,
    /// Header band width used when none can be measured, in source pixels.
    header_band_px: f64,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            fill_color: color("#FFFFFF"),
            stroke_color: color("#000000"),
            container_stroke_color: color("#999999"),
            text_color: color("#333333"),
            regular_weight: 0.02,
            heavy_weight: 0.04,
            light_weight: 0.01,
            task_corner_cap: 0.1,
            annotation_tick: 0.15,
            task_font_size: 8.0,
            event_font_size: 6.0,
            annotation_font_size: 7.0,
            container_font_size: 9.0,
            header_font_min: 6.0,
            header_font_max: 8.0,
            header_font_scale: 24.0,
            header_band_px: 30.0,
        }
    }
}

impl ShapeConfig {
    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    pub fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    pub fn container_stroke_color(&self) -> Color {
        self.container_stroke_color
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn regular_weight(&self) -> f64 {
        self.regular_weight
    }

    pub fn heavy_weight(&self) -> f64 {
        self.heavy_weight
    }

    pub fn light_weight(&self) -> f64 {
        self.light_weight
    }

    pub fn task_corner_cap(&self) -> f64 {
        self.task_corner_cap
    }

    pub fn annotation_tick(&self) -> f64 {
        self.annotation_tick
    }

    pub fn task_font_size(&self) -> f64 {
        self.task_font_size
    }

    /// Font size of events and gateways.
    pub fn event_font_size(&self) -> f64 {
        self.event_font_size
    }

    pub fn annotation_font_size(&self) -> f64 {
        self.annotation_font_size
    }

    /// Font size of a pool or lane without a header band.
    pub fn container_font_size(&self) -> f64 {
        self.container_font_size
    }

    /// Font size of a header band `band` inches wide.
    ///
    /// # Examples
    ///
    /// ```
    /// # use stencil::config::ShapeConfig;
    /// let shapes = ShapeConfig::default();
    /// assert_eq!(shapes.header_font_size(0.3125), 7.0);
    /// assert_eq!(shapes.header_font_size(0.1), 6.0);
    /// assert_eq!(shapes.header_font_size(2.0), 8.0);
    /// ```
    pub fn header_font_size(&self, band: f64) -> f64 {
        (band * self.header_font_scale)
            .floor()
            .max(self.header_font_min)
            .min(self.header_font_max)
    }

    pub fn header_band_px(&self) -> f64 {
        self.header_band_px
    }
}

/// Sizing of detached event and gateway labels, in inches.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    min_width: f64,
    min_height: f64,
    fallback_height: f64,
    /// Vertical gap between a shape and a fallback label below it.
    fallback_gap: f64,
    /// Fallback label width as a multiple of the shape width.
    fallback_width_factor: f64,
    fallback_min_width: f64,
    font_size: f64,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            min_width: 0.8,
            min_height: 0.25,
            fallback_height: 0.35,
            fallback_gap: 0.04,
            fallback_width_factor: 2.5,
            fallback_min_width: 1.2,
            font_size: 6.0,
        }
    }
}

impl LabelConfig {
    pub fn min_width(&self) -> f64 {
        self.min_width
    }

    pub fn min_height(&self) -> f64 {
        self.min_height
    }

    pub fn fallback_height(&self) -> f64 {
        self.fallback_height
    }

    pub fn fallback_gap(&self) -> f64 {
        self.fallback_gap
    }

    pub fn fallback_width_factor(&self) -> f64 {
        self.fallback_width_factor
    }

    pub fn fallback_min_width(&self) -> f64 {
        self.fallback_min_width
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }
}

/// Styling and geometry of flow connectors.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConnectorConfig {
    sequence_color: Color,
    message_color: Color,
    association_color: Color,
    /// Weight of sequence and message flows.
    flow_weight: f64,
    association_weight: f64,
    /// Corner rounding radius in inches.
    rounding: f64,
    arrow_length: f64,
    /// Arrowhead half-width as a fraction of its length.
    arrow_width_ratio: f64,
    label_font_size: f64,
    sequence_label_color: Color,
    message_label_color: Color,
    label_min_width: f64,
    label_min_height: f64,
    fallback_label_min_width: f64,
    fallback_label_min_height: f64,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            sequence_color: color("#555555"),
            message_color: color("#555555"),
            association_color: color("#999999"),
            flow_weight: 0.02,
            association_weight: 0.01,
            rounding: 0.15,
            arrow_length: 0.12,
            arrow_width_ratio: 0.35,
            label_font_size: 7.0,
            sequence_label_color: color("#333333"),
            message_label_color: color("#555555"),
            label_min_width: 0.4,
            label_min_height: 0.2,
            fallback_label_min_width: 0.6,
            fallback_label_min_height: 0.3,
        }
    }
}

/// Resolved line style of one connector kind.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorStyle {
    pub color: Color,
    pub weight: f64,
    pub pattern: LinePattern,
    pub arrow: bool,
    /// Text color, or `None` when the kind never carries text.
    pub label_color: Option<Color>,
}

impl ConnectorConfig {
    /// Returns the line style of a flow kind.
    ///
    /// # Examples
    ///
    /// ```
    /// # use stencil::config::ConnectorConfig;
    /// # use stencil_core::{draw::LinePattern, model::FlowKind};
    /// let connectors = ConnectorConfig::default();
    /// let style = connectors.style(FlowKind::Message);
    /// assert_eq!(style.pattern, LinePattern::Dashed);
    /// assert!(style.arrow);
    /// assert!(connectors.style(FlowKind::Association).label_color.is_none());
    /// ```
    pub fn style(&self, kind: FlowKind) -> ConnectorStyle {
        match kind {
            FlowKind::Sequence => ConnectorStyle {
                color: self.sequence_color,
                weight: self.flow_weight,
                pattern: LinePattern::Solid,
                arrow: true,
                label_color: Some(self.sequence_label_color),
            },
            FlowKind::Message => ConnectorStyle {
                color: self.message_color,
                weight: self.flow_weight,
                pattern: LinePattern::Dashed,
                arrow: true,
                label_color: Some(self.message_label_color),
            },
            FlowKind::Association => ConnectorStyle {
                color: self.association_color,
                weight: self.association_weight,
                pattern: LinePattern::DashDot,
                arrow: false,
                label_color: None,
            },
        }
    }

    pub fn rounding(&self) -> f64 {
        self.rounding
    }

    pub fn arrow_length(&self) -> f64 {
        self.arrow_length
    }

    pub fn arrow_width_ratio(&self) -> f64 {
        self.arrow_width_ratio
    }

    pub fn label_font_size(&self) -> f64 {
        self.label_font_size
    }

    pub fn label_min_width(&self) -> f64 {
        self.label_min_width
    }

    pub fn label_min_height(&self) -> f64 {
        self.label_min_height
    }

    pub fn fallback_label_min_width(&self) -> f64 {
        self.fallback_label_min_width
    }

    pub fn fallback_label_min_height(&self) -> f64 {
        self.fallback_label_min_height
    }
}
