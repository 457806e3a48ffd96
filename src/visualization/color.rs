/// Converts a color from HSV to a `#RRGGBB` string.
/// Hue is in degrees and wraps around, saturation and value are clamped to the range from 0.0 to 1.0.
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> String {
    let s = saturation.clamp(0.0, 1.0);
    let v = value.clamp(0.0, 1.0);

    let (r, g, b) = if s == 0.0 {
        (v, v, v)
    } else {
        let h = hue.rem_euclid(360.0) / 60.0;
        let sector = h.floor();
        let f = h - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));
        match sector as u8 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        }
    };

    format!("#{:02X}{:02X}{:02X}", channel(r), channel(g), channel(b))
}

#[inline]
fn channel(x: f32) -> u8 {
    (x * 255.0).round() as u8
}
