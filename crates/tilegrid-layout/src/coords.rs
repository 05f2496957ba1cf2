//! Conversion between pixel geometry and grid units.
//!
//! Cells are `column_width × row_height` pixels, separated by `margin`, with
//! `container_padding` around the whole grid. Margins only sit between cells,
//! never after the last cell of a span.

use glam::Vec2;
use tilegrid_core::GridConfig;

/// Pixel geometry of the grid container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionParams {
    pub cols: u32,
    pub column_width: f64,
    pub row_height: f64,
    pub margin: [f64; 2],
    pub container_padding: [f64; 2],
    pub container_width: f64,
    /// Row limit (None for unbounded)
    pub max_rows: Option<u32>,
}

impl PositionParams {
    /// Derive the parameters for a container of the given width.
    pub fn from_config(config: &GridConfig, container_width: f64) -> Self {
        let container_padding = config.padding();
        Self {
            cols: config.cols.max(1),
            column_width: column_width(
                container_width,
                config.cols,
                config.margin[0],
                container_padding[0],
            ),
            row_height: config.row_height,
            margin: config.margin,
            container_padding,
            container_width,
            max_rows: config.max_rows,
        }
    }
}

/// An item's box in container pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Get the top-left corner as Vec2.
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.left as f32, self.top as f32)
    }

    /// Get the size as Vec2.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Clamp `value` into `[lower, upper]`; `lower` wins if the bounds cross.
pub fn clamp<T: PartialOrd>(value: T, lower: T, upper: T) -> T {
    let capped = if value > upper { upper } else { value };
    if capped < lower {
        lower
    } else {
        capped
    }
}

/// Width of one column once margins and padding are taken out.
pub fn column_width(container_width: f64, cols: u32, margin_x: f64, padding_x: f64) -> f64 {
    let cols = cols.max(1) as f64;
    ((container_width - margin_x * (cols - 1.0) - padding_x * 2.0) / cols)
        .round()
        .max(0.0)
}

/// Pixel height of a container holding `rows` rows.
pub fn container_height(rows: u32, row_height: f64, margin_y: f64, padding_y: f64) -> f64 {
    if rows == 0 {
        return padding_y * 2.0;
    }
    let rows = rows as f64;
    rows * row_height + (rows - 1.0) * margin_y + padding_y * 2.0
}

/// Pixel box of the grid rectangle `(x, y, w, h)`.
pub fn calc_grid_item_position(
    params: &PositionParams,
    x: u32,
    y: u32,
    w: u32,
    h: u32,
) -> PixelRect {
    let [margin_x, margin_y] = params.margin;
    let [padding_x, padding_y] = params.container_padding;

    PixelRect {
        left: ((params.column_width + margin_x) * x as f64 + padding_x).round(),
        top: ((params.row_height + margin_y) * y as f64 + padding_y).round(),
        width: span_px(w, params.column_width, margin_x),
        height: span_px(h, params.row_height, margin_y),
    }
}

fn span_px(span: u32, cell: f64, margin: f64) -> f64 {
    let span = span as f64;
    (span * cell + (span - 1.0).max(0.0) * margin).round()
}

/// Nearest grid cell for a pixel position, kept inside the grid.
///
/// `x` is limited so a `w`-wide item still fits; `y` is only limited when
/// `max_rows` is set.
pub fn calc_xy(params: &PositionParams, top: f64, left: f64, w: u32, h: u32) -> (u32, u32) {
    let [margin_x, margin_y] = params.margin;
    let [padding_x, padding_y] = params.container_padding;

    let x = ((left - padding_x) / (params.column_width + margin_x)).round();
    let y = ((top - padding_y) / (params.row_height + margin_y)).round();

    let max_x = params.cols.saturating_sub(w) as f64;
    let max_y = params
        .max_rows
        .map_or(f64::from(u32::MAX), |rows| rows.saturating_sub(h) as f64);

    (clamp(x, 0.0, max_x) as u32, clamp(y, 0.0, max_y) as u32)
}

/// Nearest whole span for a pixel size, at least one cell.
pub fn calc_wh(params: &PositionParams, width: f64, height: f64, x: u32, y: u32) -> (u32, u32) {
    let [margin_x, margin_y] = params.margin;

    let w = ((width + margin_x) / (params.column_width + margin_x)).round();
    let h = ((height + margin_y) / (params.row_height + margin_y)).round();

    let max_w = params.cols.saturating_sub(x).max(1) as f64;
    let max_h = params
        .max_rows
        .map_or(u32::MAX, |rows| rows.saturating_sub(y))
        .max(1) as f64;

    (clamp(w, 1.0, max_w) as u32, clamp(h, 1.0, max_h) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> PositionParams {
        PositionParams {
            cols: 12,
            column_width: 100.0,
            row_height: 50.0,
            margin: [10.0, 10.0],
            container_padding: [10.0, 10.0],
            container_width: 1330.0,
            max_rows: None,
        }
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5, 1, 10), 5);
        assert_eq!(clamp(0, 1, 10), 1);
        assert_eq!(clamp(12, 1, 10), 10);
        // Crossed bounds: the lower bound wins.
        assert_eq!(clamp(7, 4, 2), 4);
    }

    #[test]
    fn test_forward_mapping() {
        let rect = calc_grid_item_position(&params(), 3, 2, 2, 1);
        assert!((rect.left - 340.0).abs() < 0.001);
        assert!((rect.top - 130.0).abs() < 0.001);
        assert!((rect.width - 210.0).abs() < 0.001); // 2 cells + 1 margin
        assert!((rect.height - 50.0).abs() < 0.001);
        assert_eq!(rect.position(), Vec2::new(340.0, 130.0));
    }

    #[test]
    fn test_inverse_mapping() {
        let p = params();
        assert_eq!(calc_xy(&p, 130.0, 340.0, 2, 1), (3, 2));
        // Snaps to the nearest cell.
        assert_eq!(calc_xy(&p, 150.0, 380.0, 2, 1), (3, 2));
        assert_eq!(calc_xy(&p, 170.0, 400.0, 2, 1), (4, 3));
    }

    #[test]
    fn test_inverse_mapping_clamps() {
        let p = params();
        assert_eq!(calc_xy(&p, -400.0, -400.0, 1, 1), (0, 0));
        assert_eq!(calc_xy(&p, 0.0, 5000.0, 4, 1), (8, 0));

        let bounded = PositionParams {
            max_rows: Some(5),
            ..p
        };
        assert_eq!(calc_xy(&bounded, 9000.0, 0.0, 1, 2), (0, 3));
    }

    #[test]
    fn test_size_mapping() {
        let p = params();
        assert_eq!(calc_wh(&p, 210.0, 50.0, 0, 0), (2, 1));
        assert_eq!(calc_wh(&p, 10.0, 5.0, 0, 0), (1, 1));
        assert_eq!(calc_wh(&p, 5000.0, 110.0, 9, 0), (3, 2));
    }

    #[test]
    fn test_round_trip_within_a_cell() {
        let p = params();
        for (top, left) in [(0.0, 0.0), (75.0, 260.0), (333.0, 1015.0), (12.0, 499.0)] {
            let (x, y) = calc_xy(&p, top, left, 1, 1);
            let rect = calc_grid_item_position(&p, x, y, 1, 1);
            assert!((rect.left - left).abs() <= (p.column_width + p.margin[0]) / 2.0 + 10.0);
            assert!((rect.top - top).abs() <= (p.row_height + p.margin[1]) / 2.0 + 10.0);
        }
    }

    #[test]
    fn test_column_width_and_height() {
        // 12 columns, 11 margins of 10px, 10px padding on both sides.
        assert_eq!(column_width(1330.0, 12, 10.0, 10.0), 100.0);
        assert_eq!(column_width(5.0, 12, 10.0, 10.0), 0.0);
        assert_eq!(container_height(0, 150.0, 10.0, 10.0), 20.0);
        assert_eq!(container_height(3, 150.0, 10.0, 10.0), 490.0);
    }

    #[test]
    fn test_params_from_config() {
        let config = GridConfig::default();
        let p = PositionParams::from_config(&config, 1330.0);
        assert_eq!(p.column_width, 100.0);
        assert_eq!(p.container_padding, [10.0, 10.0]);
        assert_eq!(p.cols, 12);
    }
}
