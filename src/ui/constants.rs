// UI text and palette - single source of truth

use ratatui::style::Color;

pub const DASHBOARD_TITLE: &str = " Sales Segmentation Dashboard ";

pub const INTRO_LINES: &[&str] = &[
    "This dashboard explains product sales behavior using clustering.",
    "Each cluster represents a distinct sales pattern.",
];

pub const ITEM_CODE_PLACEHOLDER: &str = "e.g. 100009";

pub const NO_DATA_MESSAGE: &str = "No data for the current filters";

// Cluster profile bar colours
pub const RETAIL_COLOR: Color = Color::LightBlue;
pub const WAREHOUSE_COLOR: Color = Color::LightGreen;

// Series colours, indexed by option position so a cluster or item type
// keeps its colour while filters change
pub const SERIES_COLORS: &[Color] = &[
    Color::Cyan,
    Color::Yellow,
    Color::Magenta,
    Color::LightGreen,
    Color::LightRed,
    Color::LightBlue,
    Color::LightYellow,
    Color::LightMagenta,
    Color::Green,
    Color::Red,
];

pub fn series_color(index: usize) -> Color {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

/// Sidebar width in columns
pub const SIDEBAR_WIDTH: u16 = 36;
