//! RGB colors and HSV conversion.

/// RGB triple, one byte per channel.
pub type Color = [u8; 3];

pub const BLACK: Color = [0, 0, 0];
pub const WHITE: Color = [255, 255, 255];

/// Convert HSV to RGB, all components in [0, 1].
///
/// Hue is taken modulo 1 via the sector index, so `h = 1.0` wraps to red.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// Scale unit channels to bytes, truncating rather than rounding.
pub fn unit_rgb_to_color((r, g, b): (f64, f64, f64)) -> Color {
    [
        (r * 255.0) as u8,
        (g * 255.0) as u8,
        (b * 255.0) as u8,
    ]
}
