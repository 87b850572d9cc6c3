use std::ops::Range;

/// Filtered row count above which only a window is materialized.
pub const WINDOWING_THRESHOLD: usize = 50;
/// Extra rows materialized on each side of the visible span.
pub const WINDOW_BUFFER_ROWS: usize = 5;

/// Scroll state of the list viewport, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub height: f64,
    pub row_height: f64,
    pub scroll_offset: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            height: 400.0,
            row_height: 32.0,
            scroll_offset: 0.0,
        }
    }
}

/// Contiguous range of filtered positions to materialize for display.
///
/// Below the threshold the whole list is materialized. Above it the
/// visible rows are padded by [`WINDOW_BUFFER_ROWS`] on each side and
/// clamped to the filtered range; the result is always a contiguous,
/// order-preserving subsequence.
pub fn window_range(filtered_len: usize, viewport: &Viewport) -> Range<usize> {
    if filtered_len <= WINDOWING_THRESHOLD {
        return 0..filtered_len;
    }
    if !(viewport.row_height > 0.0) {
        return 0..filtered_len;
    }
    let visible_rows = (viewport.height / viewport.row_height).ceil() as usize;
    let first_visible = (viewport.scroll_offset.max(0.0) / viewport.row_height) as usize;
    let start = first_visible.saturating_sub(WINDOW_BUFFER_ROWS);
    let end = (first_visible + visible_rows + WINDOW_BUFFER_ROWS).min(filtered_len);
    start.min(end)..end
}
