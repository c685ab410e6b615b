//! Colours for both figures

use plotters::style::RGBColor;

/// Hue colours for categorical bars, by value rank
pub const CATEGORY_PALETTE: [RGBColor; 4] = [
    RGBColor(76, 114, 176),  // Blue
    RGBColor(221, 132, 82),  // Orange
    RGBColor(85, 168, 104),  // Green
    RGBColor(196, 78, 82),   // Red
];

/// Anchor points of the blue-white-red diverging map
const COOLWARM_STOPS: [(f64, (u8, u8, u8)); 5] = [
    (0.0, (59, 76, 192)),
    (0.25, (141, 176, 254)),
    (0.5, (221, 221, 221)),
    (0.75, (244, 154, 123)),
    (1.0, (180, 4, 38)),
];

/// Palette colour for the `rank`-th hue
#[must_use]
pub fn category_color(rank: usize) -> RGBColor {
    CATEGORY_PALETTE[rank % CATEGORY_PALETTE.len()]
}

/// Sample the diverging map at `t`, clamped to `[0, 1]`
#[must_use]
pub fn coolwarm(t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);

    for pair in COOLWARM_STOPS.windows(2) {
        let (t0, c0) = pair[0];
        let (t1, c1) = pair[1];
        if t <= t1 {
            let f = (t - t0) / (t1 - t0);
            let lerp = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * f).round() as u8;
            return RGBColor(lerp(c0.0, c1.0), lerp(c0.1, c1.1), lerp(c0.2, c1.2));
        }
    }
    let (_, last) = COOLWARM_STOPS[COOLWARM_STOPS.len() - 1];
    RGBColor(last.0, last.1, last.2)
}

/// Colour for `value` on a scale centred at zero spanning `[-scale, scale]`
#[must_use]
pub fn diverging_color(value: f64, scale: f64) -> RGBColor {
    coolwarm(0.5 + value / (2.0 * scale))
}
