use serde_json::Number;

use crate::node::{DocumentNode, PaintColor, PaintType};

/// Channels of a solid fill scaled to `0..=255` by truncation, plus the
/// untouched alpha.
#[derive(Debug, Clone, PartialEq)]
pub struct SolidColor {
    pub r: i64,
    pub g: i64,
    pub b: i64,
    pub a: Number,
}
impl SolidColor {
    pub fn to_hex(&self) -> String {
        format!(
            "#{}{}{}",
            hex_channel(self.r),
            hex_channel(self.g),
            hex_channel(self.b)
        )
    }
    pub fn to_rgba(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
    pub fn to_rgb(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}
impl From<&PaintColor> for SolidColor {
    fn from(color: &PaintColor) -> Self {
        SolidColor {
            r: scale(color.r),
            g: scale(color.g),
            b: scale(color.b),
            a: color.a.clone().unwrap_or_else(opaque),
        }
    }
}

/// One entry per `SOLID` fill that carries a color, in fill order.
pub fn solid_fills(node: &DocumentNode) -> Vec<SolidColor> {
    node.fills
        .iter()
        .flatten()
        .filter(|fill| fill.type_ == PaintType::Solid)
        .filter_map(|fill| fill.color.as_ref())
        .map(SolidColor::from)
        .collect()
}

// `as` truncates toward zero; values outside 0..=1 are not clamped.
fn scale(channel: f64) -> i64 {
    (channel * 255.0) as i64
}

fn hex_channel(value: i64) -> String {
    if value < 0 {
        format!("{:>2}", format!("-{:x}", value.unsigned_abs()))
    } else {
        format!("{value:02x}")
    }
}

fn opaque() -> Number {
    Number::from_f64(1.0).unwrap_or_else(|| Number::from(1))
}
