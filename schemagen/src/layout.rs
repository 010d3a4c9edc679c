//! Layout Engine
//!
//! Deterministic placement for component instances (simple grid) and
//! net labels (wrapped rows). Placement is not routing-aware; the point
//! is a readable, reproducible sheet, not a finished schematic.

/// Grid origin for component placement (mm).
pub const GRID_ORIGIN: (f64, f64) = (50.0, 50.0);
/// Horizontal / vertical pitch between grid cells (mm).
pub const GRID_PITCH: (f64, f64) = (40.0, 30.0);
/// Default number of grid columns before wrapping to the next row.
pub const DEFAULT_COLUMNS: usize = 8;

/// Power label row y coordinate (mm).
pub const POWER_LABEL_Y: f64 = 20.0;
/// Horizontal pitch between power labels (mm).
pub const POWER_LABEL_PITCH: f64 = 20.0;
/// Signal label block origin y (mm); rows stack upward from here.
pub const SIGNAL_LABEL_Y: f64 = 10.0;
/// Horizontal pitch between signal labels (mm).
pub const SIGNAL_LABEL_PITCH: f64 = 25.0;
/// Signal labels per row before wrapping.
pub const SIGNAL_LABEL_COLUMNS: usize = 10;
/// Vertical pitch between wrapped signal label rows (mm).
pub const SIGNAL_LABEL_ROW_PITCH: f64 = 5.0;
/// Label block x origin (mm).
pub const LABEL_ORIGIN_X: f64 = 20.0;

/// An item placed at a sheet coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Placed<T> {
    pub item: T,
    pub x: f64,
    pub y: f64,
}

/// Place items on a fixed-pitch grid, wrapping every `columns` items.
/// Enumeration order of the input is preserved.
pub fn grid_placement<T>(items: impl IntoIterator<Item = T>, columns: usize) -> Vec<Placed<T>> {
    let columns = columns.max(1);
    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| {
            let col = idx % columns;
            let row = idx / columns;
            Placed {
                item,
                x: GRID_ORIGIN.0 + col as f64 * GRID_PITCH.0,
                y: GRID_ORIGIN.1 + row as f64 * GRID_PITCH.1,
            }
        })
        .collect()
}

/// Place net labels: power nets on a single row, signal nets in rows of
/// [`SIGNAL_LABEL_COLUMNS`] stacking upward above them.
pub fn label_placement<T>(
    power: impl IntoIterator<Item = T>,
    signal: impl IntoIterator<Item = T>,
) -> Vec<Placed<T>> {
    let mut placed = Vec::new();

    for (idx, item) in power.into_iter().enumerate() {
        placed.push(Placed {
            item,
            x: LABEL_ORIGIN_X + idx as f64 * POWER_LABEL_PITCH,
            y: POWER_LABEL_Y,
        });
    }

    for (idx, item) in signal.into_iter().enumerate() {
        let col = idx % SIGNAL_LABEL_COLUMNS;
        let row = idx / SIGNAL_LABEL_COLUMNS;
        placed.push(Placed {
            item,
            x: LABEL_ORIGIN_X + col as f64 * SIGNAL_LABEL_PITCH,
            y: SIGNAL_LABEL_Y - row as f64 * SIGNAL_LABEL_ROW_PITCH,
        });
    }

    placed
}
