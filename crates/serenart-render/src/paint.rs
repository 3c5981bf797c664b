//! Stroke → tiny-skia drawing commands.
//!
//! Every stroke is rendered antialiased with round joins and round caps.
//! A single-point stroke (a tap) becomes a filled dot of the stroke width.

use kurbo::{BezPath, PathEl};
use serenart_core::model::{Color, PaintStyle, Polyline, Stroke};
use tiny_skia::{FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke as SkiaStroke, Transform};

/// Paint one committed stroke onto `pixmap`. Additive; never clears.
pub fn paint_stroke(pixmap: &mut Pixmap, stroke: &Stroke) {
    paint_polyline(pixmap, stroke.path(), stroke.paint());
}

/// Paint a polyline with the given attributes. Shared by committed strokes
/// and the in-progress overlay so both render identically.
pub fn paint_polyline(pixmap: &mut Pixmap, line: &Polyline, style: &PaintStyle) {
    let paint = skia_paint(style.color);

    if line.is_single_point() {
        let p = line.start();
        if let Some(dot) = PathBuilder::from_circle(p.x as f32, p.y as f32, style.width / 2.0) {
            pixmap.fill_path(&dot, &paint, FillRule::Winding, Transform::identity(), None);
        }
        return;
    }

    let Some(path) = bez_to_skia(&line.to_bez_path()) else {
        log::trace!("skipping degenerate polyline ({} points)", line.len());
        return;
    };
    let stroke = SkiaStroke {
        width: style.width,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Default::default()
    };
    pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

pub fn skia_color(c: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn skia_paint(c: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(c.r, c.g, c.b, c.a);
    paint.anti_alias = true;
    paint
}

/// Convert a kurbo path to a tiny-skia path. Returns `None` for paths
/// tiny-skia considers empty.
pub fn bez_to_skia(bez: &BezPath) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for el in bez.elements() {
        match *el {
            PathEl::MoveTo(p) => pb.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => pb.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(c, p) => pb.quad_to(c.x as f32, c.y as f32, p.x as f32, p.y as f32),
            PathEl::CurveTo(c1, c2, p) => pb.cubic_to(
                c1.x as f32,
                c1.y as f32,
                c2.x as f32,
                c2.y as f32,
                p.x as f32,
                p.y as f32,
            ),
            PathEl::ClosePath => pb.close(),
        }
    }
    pb.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::sample;
    use serenart_core::{Point, StrokeBuilder};

    fn blank(w: u32, h: u32) -> Pixmap {
        Pixmap::new(w, h).unwrap()
    }

    #[test]
    fn horizontal_stroke_covers_its_center_line() {
        let mut pixmap = blank(100, 40);
        let mut b = StrokeBuilder::begin(Point::new(10.0, 20.0), PaintStyle::brush(Color::BLACK, 10.0));
        b.line_to(Point::new(90.0, 20.0));
        paint_stroke(&mut pixmap, &b.finish());

        assert_eq!(sample(&pixmap, 50, 20), Some(Color::BLACK));
        assert_eq!(sample(&pixmap, 50, 2), Some(Color::TRANSPARENT));
    }

    #[test]
    fn round_caps_extend_past_endpoints() {
        let mut pixmap = blank(100, 40);
        let mut b = StrokeBuilder::begin(Point::new(20.0, 20.0), PaintStyle::brush(Color::BLACK, 20.0));
        b.line_to(Point::new(80.0, 20.0));
        paint_stroke(&mut pixmap, &b.finish());

        // 5px before the start point, inside the round cap's radius.
        assert_eq!(sample(&pixmap, 15, 20), Some(Color::BLACK));
    }

    #[test]
    fn tap_renders_dot() {
        let mut pixmap = blank(40, 40);
        let stroke = StrokeBuilder::begin(Point::new(20.0, 20.0), PaintStyle::brush(Color::WHITE, 12.0)).finish();
        paint_stroke(&mut pixmap, &stroke);

        assert_eq!(sample(&pixmap, 20, 20), Some(Color::WHITE));
        assert_eq!(sample(&pixmap, 2, 2), Some(Color::TRANSPARENT));
    }

    #[test]
    fn bez_conversion_keeps_segments() {
        let mut bez = BezPath::new();
        bez.move_to((0.0, 0.0));
        bez.line_to((10.0, 0.0));
        bez.quad_to((15.0, 5.0), (10.0, 10.0));
        let path = bez_to_skia(&bez).unwrap();
        assert_eq!(path.points().len(), 4);
    }
}
