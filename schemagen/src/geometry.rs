//! Symbol Geometry Engine
//!
//! Derives a rectangular symbol body and pin placement from a pin count
//! alone. Used only by the schematic emitter. All dimensions are in
//! millimetres on KiCad's 2.54 mm grid; the same pin count always yields
//! the same layout.

/// Vertical distance between adjacent pins (mm).
pub const PIN_PITCH: f64 = 2.54;
/// A symbol body is never shorter than this, regardless of pin count (mm).
pub const MIN_BODY_HEIGHT: f64 = 10.16;
/// Half the symbol body width (mm).
pub const BODY_HALF_WIDTH: f64 = 7.62;
/// Pin stem length (mm).
pub const PIN_LENGTH: f64 = 2.54;
/// Horizontal distance from symbol origin to the pin connection point (mm).
pub const PIN_STEM_X: f64 = 10.16;

/// Which body edge a pin sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinSide {
    Left,
    Right,
}

/// One pin's position on the symbol outline.
#[derive(Debug, Clone, PartialEq)]
pub struct PinPosition {
    /// 1-based pin index; doubles as pin name and number on generic symbols.
    pub number: u32,
    pub x: f64,
    pub y: f64,
    /// 0 for left-side pins pointing right, 180 for right-side pins.
    pub orientation: u32,
    pub side: PinSide,
}

/// Derived body size and pin layout for one component.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolGeometry {
    pub pin_count: u32,
    pub body_height: f64,
    pub pins: Vec<PinPosition>,
}

impl SymbolGeometry {
    /// Compute the layout for a symbol with `pin_count` pins.
    ///
    /// Body height is `pin_count * PIN_PITCH`, floored at
    /// `MIN_BODY_HEIGHT`. Pins are spread evenly over the body height;
    /// the first half (rounded up) goes on the left edge, the rest on
    /// the right. A one- or two-pin symbol keeps everything on the left.
    pub fn for_pin_count(pin_count: u32) -> Self {
        let pin_count = pin_count.max(1);
        let body_height = (f64::from(pin_count) * PIN_PITCH).max(MIN_BODY_HEIGHT);
        let left_pins = pin_count.div_ceil(2);

        // Even spread over the usable height. The max(1) guard keeps a
        // single-pin symbol from dividing by zero.
        let step = (body_height - PIN_PITCH) / f64::from((pin_count - 1).max(1));

        let pins = (1..=pin_count)
            .map(|i| {
                let y = if pin_count > 1 {
                    body_height / 2.0 - PIN_PITCH - f64::from(i - 1) * step
                } else {
                    0.0
                };
                let side = if i <= left_pins || pin_count <= 2 {
                    PinSide::Left
                } else {
                    PinSide::Right
                };
                let (x, orientation) = match side {
                    PinSide::Left => (-PIN_STEM_X, 0),
                    PinSide::Right => (PIN_STEM_X, 180),
                };
                PinPosition {
                    number: i,
                    x,
                    y,
                    orientation,
                    side,
                }
            })
            .collect();

        Self {
            pin_count,
            body_height,
            pins,
        }
    }

    /// Half the body height. Always at least `MIN_BODY_HEIGHT / 2`.
    pub fn half_height(&self) -> f64 {
        self.body_height / 2.0
    }
}
