#![forbid(unsafe_code)]

//! Sidebar geometry and the point → label lookup.
//!
//! Labels are stacked one row each and the stack is centred vertically in
//! the sidebar area, matching a strip pinned to the right edge of the
//! screen at 50% height.

use indexbar_core::geometry::{Point, Rect};
use unicode_width::UnicodeWidthStr;

use super::index_list::IndexList;

/// Default height of one label row, in pixels.
pub const DEFAULT_ROW_HEIGHT: f32 = 14.0;

/// Default horizontal padding around labels: `(left, right)`.
pub const DEFAULT_PADDING: (f32, f32) = (16.0, 4.0);

/// Resolves the label under a screen point.
///
/// Embedders backed by a real element tree implement this with their own
/// hit testing; [`SidebarLayout`] is the geometric implementation.
pub trait LabelLookup {
    /// Label of the topmost label element at `point`, if any.
    fn label_at(&self, point: Point) -> Option<&str>;
}

/// One positioned label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelCell {
    pub label: String,
    pub rect: Rect,
}

/// Positions of every label in the sidebar.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SidebarLayout {
    area: Rect,
    cells: Vec<LabelCell>,
}

impl SidebarLayout {
    /// Lay out `labels` in `area` with rows of `row_height`.
    ///
    /// Labels that overflow a too-short area keep their rows; the stack is
    /// centred, so overflow is split between top and bottom.
    #[must_use]
    pub fn new(area: Rect, labels: &IndexList, row_height: f32) -> Self {
        let row_height = row_height.max(0.0);
        let stack = row_height * labels.len() as f32;
        let first_top = area.top() + (area.height - stack) / 2.0;
        let cells = labels
            .iter()
            .enumerate()
            .map(|(i, label)| LabelCell {
                label: label.to_owned(),
                rect: Rect::new(
                    area.left(),
                    first_top + row_height * i as f32,
                    area.width,
                    row_height,
                ),
            })
            .collect();
        Self { area, cells }
    }

    /// Width needed to show the widest label.
    ///
    /// `glyph_width` is the advance of one terminal column (half an em for
    /// CJK-wide glyphs, which occupy two).
    #[must_use]
    pub fn preferred_width(labels: &IndexList, glyph_width: f32) -> f32 {
        let widest = labels.iter().map(UnicodeWidthStr::width).max().unwrap_or(0);
        widest as f32 * glyph_width + DEFAULT_PADDING.0 + DEFAULT_PADDING.1
    }

    #[must_use]
    pub fn area(&self) -> Rect {
        self.area
    }

    #[must_use]
    pub fn cells(&self) -> &[LabelCell] {
        &self.cells
    }

    /// Rect of `label`'s row.
    #[must_use]
    pub fn cell_rect(&self, label: &str) -> Option<Rect> {
        self.cells.iter().find(|c| c.label == label).map(|c| c.rect)
    }

    /// Centre point of `label`'s row, convenient for synthesizing taps.
    #[must_use]
    pub fn cell_center(&self, label: &str) -> Option<Point> {
        self.cell_rect(label)
            .map(|r| Point::new(r.left() + r.width / 2.0, r.top() + r.height / 2.0))
    }
}

impl LabelLookup for SidebarLayout {
    fn label_at(&self, point: Point) -> Option<&str> {
        if !self.area.contains(point) {
            return None;
        }
        self.cells
            .iter()
            .find(|c| c.rect.contains(point))
            .map(|c| c.label.as_str())
    }
}

/// Render state of one sidebar label.
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarItem<'a> {
    pub label: &'a str,
    pub active: bool,
    /// Highlight colour, set only on the active label.
    pub color: Option<&'a str>,
}
