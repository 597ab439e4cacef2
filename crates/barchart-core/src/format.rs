// File: crates/barchart-core/src/format.rs
// Summary: Attribute value formatting for surface coordinates.

/// Format a coordinate the way an SVG attribute literal is written:
/// shortest round-trip decimal, no trailing `.0`, no unit suffix.
/// Magnitudes at or above 1e21 or below 1e-6 use exponent form (`1e+21`, `1.5e-7`).
pub fn number(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // -0 prints as 0
    let v = if v == 0.0 { 0.0 } else { v };
    let mag = v.abs();
    if mag != 0.0 && !(1e-6..1e21).contains(&mag) {
        let exp = format!("{v:e}");
        return match exp.split_once('e') {
            Some((mantissa, e)) if !e.starts_with('-') => format!("{mantissa}e+{e}"),
            _ => exp,
        };
    }
    format!("{v}")
}

/// Escape text for use inside a double-quoted attribute or element body.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
