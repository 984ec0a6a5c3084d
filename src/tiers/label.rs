//! Range labels built from exact boundary values.

/// Separator between closed-range bounds (U+2013 EN DASH).
pub const RANGE_SEPARATOR: char = '\u{2013}';

/// Renders a number the way JavaScript's `Number#toString` does.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    let exponential = format!("{:e}", value);
    match exponential.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => exponential,
    }
}

/// Lower and optional upper bound of one tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierBounds {
    pub from: f64,
    pub to: Option<f64>,
}

impl TierBounds {
    pub fn new(from: f64, to: Option<f64>) -> Self {
        Self { from, to }
    }

    pub fn is_open(&self) -> bool {
        self.to.is_none()
    }

    /// `"from–to"` for a closed range, `"from+"` for an open one.
    pub fn label(&self) -> String {
        match self.to {
            Some(to) => format!(
                "{}{}{}",
                format_number(self.from),
                RANGE_SEPARATOR,
                format_number(to)
            ),
            None => format!("{}+", format_number(self.from)),
        }
    }
}
