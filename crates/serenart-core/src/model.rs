//! Stroke data model for the drawing canvas.
//!
//! A `Stroke` is one finished pointer gesture: a polyline plus the paint
//! attributes it was drawn with. Strokes are immutable once built; the
//! in-progress gesture lives in a `StrokeBuilder` until pointer-up.

use crate::id::StrokeId;
use kurbo::{BezPath, Point};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;
use std::fmt;

// ─── Colors ──────────────────────────────────────────────────────────────

/// RGBA color, 8 bits per channel, straight (non-premultiplied) alpha.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Helper to parse a single hex digit.
pub fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const DARK_GRAY: Color = Color::rgb(0x44, 0x44, 0x44);
    pub const GRAY: Color = Color::rgb(0x88, 0x88, 0x88);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 0xFF)
    }

    /// Unpack an Android-style `0xAARRGGBB` integer.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    pub const fn to_argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    pub const fn is_opaque(self) -> bool {
        self.a == 0xFF
    }

    /// Parse a hex color string: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.
    /// The string may optionally start with `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();

        let short = |i: usize| hex_val(bytes[i]).map(|v| v * 17);
        let long = |i: usize| Some(hex_val(bytes[i])? << 4 | hex_val(bytes[i + 1])?);

        match bytes.len() {
            3 => Some(Self::rgb(short(0)?, short(1)?, short(2)?)),
            4 => Some(Self::rgba(short(0)?, short(1)?, short(2)?, short(3)?)),
            6 => Some(Self::rgb(long(0)?, long(2)?, long(4)?)),
            8 => Some(Self::rgba(long(0)?, long(2)?, long(4)?, long(6)?)),
            _ => None,
        }
    }

    /// Emit as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.is_opaque() {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex color {s:?}")))
    }
}

// ─── Paint ───────────────────────────────────────────────────────────────

/// Paint attributes captured when a stroke begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintStyle {
    pub color: Color,
    /// Stroke width in surface units; always positive.
    pub width: f32,
    /// Eraser strokes are opaque background-colored strokes layered on top,
    /// not true pixel erasure.
    pub is_eraser: bool,
}

impl PaintStyle {
    pub fn brush(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            is_eraser: false,
        }
    }

    pub fn eraser(background: Color, width: f32) -> Self {
        Self {
            color: background,
            width,
            is_eraser: true,
        }
    }
}

// ─── Polyline ────────────────────────────────────────────────────────────

/// An ordered point sequence: one move-to followed by line-to segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    points: SmallVec<[Point; 32]>,
}

impl Polyline {
    /// Start a polyline at `start` (the move-to).
    pub fn new(start: Point) -> Self {
        let mut points = SmallVec::new();
        points.push(start);
        Self { points }
    }

    /// Append a line segment ending at `to`.
    pub fn line_to(&mut self, to: Point) {
        self.points.push(to);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn start(&self) -> Point {
        self.points[0]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the polyline holds no points. `new` always seeds the move-to
    /// point, so this returns `false` for every constructed polyline.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A tap: no line-to segment was ever appended.
    pub fn is_single_point(&self) -> bool {
        self.points.len() == 1
    }

    pub fn to_bez_path(&self) -> BezPath {
        let mut bez = BezPath::new();
        let mut iter = self.points.iter();
        if let Some(first) = iter.next() {
            bez.move_to(*first);
        }
        for p in iter {
            bez.line_to(*p);
        }
        bez
    }
}

// ─── Stroke ──────────────────────────────────────────────────────────────

/// One committed pencil gesture and the paint it was rendered with.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    id: StrokeId,
    path: Polyline,
    paint: PaintStyle,
}

impl Stroke {
    pub fn new(path: Polyline, paint: PaintStyle) -> Self {
        Self {
            id: StrokeId::next(),
            path,
            paint,
        }
    }

    pub fn id(&self) -> StrokeId {
        self.id
    }

    pub fn path(&self) -> &Polyline {
        &self.path
    }

    pub fn paint(&self) -> &PaintStyle {
        &self.paint
    }

    pub fn is_eraser(&self) -> bool {
        self.paint.is_eraser
    }
}

/// The in-progress stroke between pointer-down and pointer-up.
#[derive(Debug, Clone)]
pub struct StrokeBuilder {
    path: Polyline,
    paint: PaintStyle,
}

impl StrokeBuilder {
    pub fn begin(at: Point, paint: PaintStyle) -> Self {
        Self {
            path: Polyline::new(at),
            paint,
        }
    }

    pub fn line_to(&mut self, to: Point) {
        self.path.line_to(to);
    }

    pub fn path(&self) -> &Polyline {
        &self.path
    }

    pub fn paint(&self) -> &PaintStyle {
        &self.paint
    }

    /// Freeze the gesture into an immutable stroke.
    pub fn finish(self) -> Stroke {
        Stroke::new(self.path, self.paint)
    }
}
