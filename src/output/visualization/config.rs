//! Plot configuration shared across visualization modules
//!
//! This module defines the configuration used by both the spatial
//! (snapshot) and temporal (history) plotting functions.

use std::error::Error;

use plotters::prelude::*;

/// Configuration for customizing plots
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Plot title (empty string: no caption)
/// - `xlabel`, `ylabel`: Axis labels
/// - `series_colors`: Optional colors, one per plotted curve
/// - `x_range`, `y_range`: Fixed axis ranges, or `None` to fit the data
/// - `show_grid`: Whether to draw the mesh (ticks, labels, grid lines)
/// - `show_legend`: Whether to draw the series legend
///
/// # Example
///
/// ```rust
/// use diffusion_rs::output::visualization::PlotConfig;
///
/// let mut config = PlotConfig::snapshots("Diffusion from the left edge");
/// config.width = 1920;
/// config.height = 1080;
/// assert_eq!(config.y_range, Some((0.0, 1.0)));
/// ```
#[derive(Clone, Debug)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Plot")
    pub title: String,

    /// X-axis label (default: auto-set by plot type)
    pub xlabel: String,

    /// Y-axis label (default: "C")
    pub ylabel: String,

    /// Optional colors, one per curve
    ///
    /// If None, uses the default palette. Curves past the end of the list
    /// wrap around the default palette.
    pub series_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Fixed x range, `None` to fit the data
    pub x_range: Option<(f64, f64)>,

    /// Fixed y range, `None` to fit the data
    pub y_range: Option<(f64, f64)>,

    /// Show mesh, ticks and axis labels (default: true)
    pub show_grid: bool,

    /// Show the legend box (default: true)
    pub show_legend: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Plot".to_string(),
            xlabel: String::new(),
            ylabel: "C".to_string(),
            series_colors: None,
            background: WHITE,
            line_width: 2,
            x_range: None,
            y_range: None,
            show_grid: true,
            show_legend: true,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
///
/// # Example
///
/// ```rust
/// use diffusion_rs::output::visualization::{PlotConfig, NO_TITLE};
///
/// let config = PlotConfig::snapshots(NO_TITLE);
/// assert_eq!(config.title, "Concentration Snapshots");
/// ```
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Snapshot overlay on the unit square
    ///
    /// Sets xlabel to "x", both axes to `[0, 1]` and title to custom value or
    /// "Concentration Snapshots".
    pub fn snapshots(title: impl IntoOptionalTitle) -> Self {
        Self {
            xlabel: "x".to_string(),
            title: title
                .into_optional_title()
                .unwrap_or_else(|| "Concentration Snapshots".to_string()),
            x_range: Some((0.0, 1.0)),
            y_range: Some((0.0, 1.0)),
            ..Self::default()
        }
    }

    /// Spatial profiles with ranges fitted to the data
    ///
    /// Sets xlabel to "x" and title to custom value or "Spatial Profile".
    pub fn profile(title: impl IntoOptionalTitle) -> Self {
        Self {
            xlabel: "x".to_string(),
            title: title
                .into_optional_title()
                .unwrap_or_else(|| "Spatial Profile".to_string()),
            ..Self::default()
        }
    }

    /// Concentration history at one grid point
    ///
    /// Sets xlabel to "t" and title to custom value or "Concentration History".
    pub fn history(title: impl IntoOptionalTitle) -> Self {
        Self {
            xlabel: "t".to_string(),
            title: title
                .into_optional_title()
                .unwrap_or_else(|| "Concentration History".to_string()),
            ..Self::default()
        }
    }

    /// Curves only: no caption, mesh, axis labels or legend
    ///
    /// Nothing in this layout draws text, so it renders on machines without
    /// any installed font.
    pub fn bare() -> Self {
        Self {
            title: String::new(),
            show_grid: false,
            show_legend: false,
            ..Self::default()
        }
    }

    /// Builder pattern: set image size
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Builder pattern: set series colors
    pub fn colors(mut self, colors: Vec<RGBColor>) -> Self {
        self.series_colors = Some(colors);
        self
    }

    /// Check dimensions and fixed ranges
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        if self.width == 0 || self.height == 0 {
            return Err(format!("Invalid plot size: {}x{}", self.width, self.height).into());
        }

        for (axis, range) in [("x", self.x_range), ("y", self.y_range)] {
            if let Some((low, high)) = range {
                if !low.is_finite() || !high.is_finite() || low >= high {
                    return Err(format!("Invalid {} range: [{}, {}]", axis, low, high).into());
                }
            }
        }

        Ok(())
    }

    /// Get color for the curve at index i
    ///
    /// Uses custom colors if provided, otherwise falls back to default palette
    pub(crate) fn series_color(&self, index: usize) -> RGBColor {
        if let Some(ref colors) = self.series_colors {
            if index < colors.len() {
                return colors[index];
            }
        }

        DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()]
    }
}

/// Ten-color cycle, close to the usual scientific plotting defaults
const DEFAULT_PALETTE: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_config_default() {
        let config = PlotConfig::default();
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 768);
        assert!(config.show_grid);
        assert!(config.show_legend);
        assert_eq!(config.x_range, None);
    }

    #[test]
    fn test_snapshots_config_default() {
        let config = PlotConfig::snapshots(NO_TITLE);
        assert_eq!(config.xlabel, "x");
        assert_eq!(config.title, "Concentration Snapshots");
        assert_eq!(config.x_range, Some((0.0, 1.0)));
        assert_eq!(config.y_range, Some((0.0, 1.0)));
    }

    #[test]
    fn test_snapshots_config_with_string() {
        let title = format!("D = {}", 0.1);
        let config = PlotConfig::snapshots(title);
        assert_eq!(config.title, "D = 0.1");
    }

    #[test]
    fn test_profile_and_history_presets() {
        let profile = PlotConfig::profile("Final");
        assert_eq!(profile.title, "Final");
        assert_eq!(profile.y_range, None);

        let history = PlotConfig::history(NO_TITLE);
        assert_eq!(history.xlabel, "t");
        assert_eq!(history.title, "Concentration History");
    }

    #[test]
    fn test_bare_has_no_text() {
        let config = PlotConfig::bare();
        assert!(config.title.is_empty());
        assert!(!config.show_grid);
        assert!(!config.show_legend);
    }

    #[test]
    fn test_validate() {
        assert!(PlotConfig::default().validate().is_ok());
        assert!(PlotConfig::default().size(0, 10).validate().is_err());

        let mut config = PlotConfig::snapshots(NO_TITLE);
        config.y_range = Some((1.0, 1.0));
        assert!(config.validate().is_err());

        config.y_range = Some((0.0, f64::NAN));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_series_color_default_palette() {
        let config = PlotConfig::default();
        assert_eq!(config.series_color(0), DEFAULT_PALETTE[0]);
        assert_eq!(config.series_color(10), DEFAULT_PALETTE[0]);
    }

    #[test]
    fn test_series_color_custom() {
        let config = PlotConfig::default().colors(vec![RED, BLUE]);
        assert_eq!(config.series_color(0), RED);
        assert_eq!(config.series_color(1), BLUE);
        assert_eq!(config.series_color(2), DEFAULT_PALETTE[2]);
    }
}
