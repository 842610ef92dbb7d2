use crate::error::{DotfieldError, DotfieldResult};

pub use kurbo::{Point, Rect, Vec2};

/// Device-pixel-ratio cap. Buffers never scale beyond this, whatever the
/// display reports, to bound per-frame raster cost.
pub const MAX_DPR: f64 = 2.0;

/// Pixel dimensions of the drawing buffer, derived from logical viewport
/// dimensions scaled by a capped device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub dpr: f64,
}

impl Viewport {
    /// Build from logical (CSS-like) dimensions. `dpr` is clamped to
    /// `[1.0, MAX_DPR]`. Zero logical dimensions are allowed and produce an
    /// empty viewport that draws nothing.
    pub fn from_logical(logical_width: f64, logical_height: f64, dpr: f64) -> Self {
        let dpr = if dpr.is_finite() { dpr.clamp(1.0, MAX_DPR) } else { 1.0 };
        let scale = |v: f64| -> u32 {
            if v.is_finite() && v > 0.0 {
                (v * dpr).round() as u32
            } else {
                0
            }
        };
        Self {
            width: scale(logical_width),
            height: scale(logical_height),
            dpr,
        }
    }

    /// Synchronous resize: recompute buffer dimensions for the new logical
    /// size. Cheap enough that no debouncing is needed.
    pub fn resize(&mut self, logical_width: f64, logical_height: f64, dpr: f64) {
        *self = Self::from_logical(logical_width, logical_height, dpr);
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn min_side(self) -> f64 {
        f64::from(self.width.min(self.height))
    }

    pub fn diagonal(self) -> f64 {
        f64::from(self.width).hypot(f64::from(self.height))
    }
}

/// Straight-alpha RGBA8 color. Serializes as a hex string (`"#rrggbb"` or
/// `"#rrggbbaa"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn parse_hex(s: &str) -> DotfieldResult<Self> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let nibble = |c: u8| -> DotfieldResult<u8> {
            match c {
                b'0'..=b'9' => Ok(c - b'0'),
                b'a'..=b'f' => Ok(c - b'a' + 10),
                b'A'..=b'F' => Ok(c - b'A' + 10),
                _ => Err(DotfieldError::config(format!(
                    "invalid hex digit in color '{s}'"
                ))),
            }
        };
        let bytes = hex.as_bytes();
        match bytes.len() {
            3 => {
                let r = nibble(bytes[0])?;
                let g = nibble(bytes[1])?;
                let b = nibble(bytes[2])?;
                Ok(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 | 8 => {
                let pair = |i: usize| -> DotfieldResult<u8> {
                    Ok(nibble(bytes[i])? << 4 | nibble(bytes[i + 1])?)
                };
                Ok(Self {
                    r: pair(0)?,
                    g: pair(2)?,
                    b: pair(4)?,
                    a: if bytes.len() == 8 { pair(6)? } else { 255 },
                })
            }
            _ => Err(DotfieldError::config(format!(
                "color '{s}' must be #rgb, #rrggbb or #rrggbbaa"
            ))),
        }
    }

    /// Parse a hex color, falling back to `fallback` on malformed input.
    /// Configuration mistakes must not take the page down, so this warns
    /// instead of erroring.
    pub fn parse_hex_or(s: &str, fallback: Self) -> Self {
        match Self::parse_hex(s) {
            Ok(c) => c,
            Err(err) => {
                tracing::warn!(color = s, %err, "falling back to default color");
                fallback
            }
        }
    }
}

impl serde::Serialize for Rgba8 {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let s = if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        };
        serializer.serialize_str(&s)
    }
}

impl<'de> serde::Deserialize<'de> for Rgba8 {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse_hex(&s).map_err(serde::de::Error::custom)
    }
}
