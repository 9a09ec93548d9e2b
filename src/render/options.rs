//! Rendering options configuration.

/// Options for rendering a frame as console text.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Decimal places used for floats before trailing zeros are trimmed
    pub precision: usize,

    /// Marker for missing cells in numeric and text columns
    pub na_rep: String,

    /// Print the positional row index as the first column
    pub show_index: bool,

    /// Measure widths in terminal columns instead of characters
    pub east_asian_width: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            precision: 6,
            na_rep: "NaN".to_string(),
            show_index: true,
            east_asian_width: false,
        }
    }
}

impl RenderOptions {
    /// Create new render options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set float precision (clamped to 0-17).
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision.min(17);
        self
    }

    /// Set the missing-value marker.
    pub fn with_na_rep(mut self, na_rep: impl Into<String>) -> Self {
        self.na_rep = na_rep.into();
        self
    }

    /// Show or hide the row index column.
    pub fn with_index(mut self, show: bool) -> Self {
        self.show_index = show;
        self
    }

    /// Align by display width, counting wide characters as two columns.
    pub fn with_east_asian_width(mut self, enabled: bool) -> Self {
        self.east_asian_width = enabled;
        self
    }
}
