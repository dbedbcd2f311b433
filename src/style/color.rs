use serde::{Deserialize, Serialize};

use crate::foundation::core::{Rgb, Rgba};

/// Opaque RGB color accepted from configuration as `"#rrggbb"`, `{r,g,b}` or `[r,g,b]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorRgb {
    /// Red in `[0, 1]`.
    pub r: f32,
    /// Green in `[0, 1]`.
    pub g: f32,
    /// Blue in `[0, 1]`.
    pub b: f32,
}

impl ColorRgb {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn to_rgb(self) -> Rgb {
        [self.r, self.g, self.b]
    }

    pub fn to_rgba(self) -> Rgba {
        [self.r, self.g, self.b, 1.0]
    }

    pub(crate) fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }
}

impl<'de> Deserialize<'de> for ColorRgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            RgbObj { r: f32, g: f32, b: f32 },
            Arr(Vec<f32>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::RgbObj { r, g, b } => Ok(Self::rgb(r, g, b)),
            Repr::Arr(v) => {
                if v.len() == 3 {
                    Ok(Self::rgb(v[0], v[1], v[2]))
                } else {
                    Err(serde::de::Error::custom("rgb array must have len 3 ([r,g,b])"))
                }
            }
        }
    }
}

fn parse_hex(s: &str) -> Result<ColorRgb, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if s.len() != 6 || !s.is_ascii() {
        return Err("hex color must be #RRGGBB (case-insensitive)".to_owned());
    }
    let r = hex_byte(&s[0..2])?;
    let g = hex_byte(&s[2..4])?;
    let b = hex_byte(&s[4..6])?;

    Ok(ColorRgb::rgb(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
    ))
}
