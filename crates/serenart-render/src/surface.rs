//! Off-screen compositing raster.
//!
//! The raster is a cache of the committed strokes, never the source of
//! truth: `replay` rebuilds it from a stroke list onto a transparent buffer.
//! Undo and redo always go through a full replay instead of patching pixels.

use crate::paint::{paint_polyline, paint_stroke, skia_color};
use serenart_core::model::{Color, PaintStyle, Polyline, Stroke};
use serenart_core::CanvasError;
use tiny_skia::{Pixmap, PixmapPaint, Transform};

/// Persistent raster that accumulates committed strokes.
///
/// Unsized (no raster) until `resize` receives a non-zero area.
#[derive(Debug, Clone, Default)]
pub struct CompositingSurface {
    raster: Option<Pixmap>,
    /// Image loaded under the strokes; drawn first on every replay.
    base: Option<Pixmap>,
}

impl CompositingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(width: u32, height: u32) -> Self {
        let mut surface = Self::new();
        surface.resize(width, height);
        surface
    }

    /// Reallocate a transparent raster, discarding previous content.
    /// The caller re-triggers `replay` if strokes already exist.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.raster = Pixmap::new(width, height);
        if self.raster.is_none() {
            log::debug!("resize to {width}x{height}: zero area, surface unsized");
        } else {
            log::debug!("resize to {width}x{height}");
        }
    }

    pub fn is_sized(&self) -> bool {
        self.raster.is_some()
    }

    pub fn width(&self) -> u32 {
        self.raster.as_ref().map_or(0, Pixmap::width)
    }

    pub fn height(&self) -> u32 {
        self.raster.as_ref().map_or(0, Pixmap::height)
    }

    /// Read-only view of the live raster.
    pub fn raster(&self) -> Option<&Pixmap> {
        self.raster.as_ref()
    }

    /// Rasterize one stroke on top of the current content.
    pub fn paint_stroke(&mut self, stroke: &Stroke) {
        if let Some(raster) = self.raster.as_mut() {
            paint_stroke(raster, stroke);
        }
    }

    /// Clear to transparent, then redraw the base image and `strokes` in order.
    pub fn replay(&mut self, strokes: &[Stroke]) {
        let Some(raster) = self.raster.as_mut() else {
            return;
        };
        log::debug!("replay {} strokes", strokes.len());
        raster.fill(tiny_skia::Color::TRANSPARENT);
        if let Some(base) = &self.base {
            draw_base(raster, base);
        }
        for stroke in strokes {
            paint_stroke(raster, stroke);
        }
    }

    /// Install an image under the strokes. Takes effect on the next replay.
    pub fn load_base_image(&mut self, image: Pixmap) {
        log::debug!("base image {}x{}", image.width(), image.height());
        self.base = Some(image);
    }

    pub fn clear_base_image(&mut self) {
        self.base = None;
    }

    /// Copy of the live raster with an in-progress polyline painted on top.
    /// The live raster itself is left untouched.
    pub fn frame_with_overlay(&self, line: &Polyline, style: &PaintStyle) -> Option<Pixmap> {
        let mut frame = self.raster.clone()?;
        paint_polyline(&mut frame, line, style);
        Some(frame)
    }

    /// Build a new raster of the same size filled with `background`, with
    /// the base image and `strokes` painted on top.
    ///
    /// # Errors
    /// Returns `CanvasError::NotSized` if the surface has zero area.
    pub fn export_flattened(&self, background: Color, strokes: &[Stroke]) -> Result<Pixmap, CanvasError> {
        let mut out = Pixmap::new(self.width(), self.height()).ok_or(CanvasError::NotSized)?;
        out.fill(skia_color(background));
        if let Some(base) = &self.base {
            draw_base(&mut out, base);
        }
        for stroke in strokes {
            paint_stroke(&mut out, stroke);
        }
        Ok(out)
    }
}

fn draw_base(target: &mut Pixmap, base: &Pixmap) {
    target.draw_pixmap(
        0,
        0,
        base.as_ref(),
        &PixmapPaint::default(),
        Transform::identity(),
        None,
    );
}

/// Read one pixel as a straight-alpha color. `None` when out of bounds.
pub fn sample(pixmap: &Pixmap, x: u32, y: u32) -> Option<Color> {
    let c = pixmap.pixel(x, y)?.demultiply();
    Some(Color::rgba(c.red(), c.green(), c.blue(), c.alpha()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serenart_core::{Point, StrokeBuilder};

    fn line(from: (f64, f64), to: (f64, f64), color: Color) -> Stroke {
        let mut b = StrokeBuilder::begin(Point::new(from.0, from.1), PaintStyle::brush(color, 8.0));
        b.line_to(Point::new(to.0, to.1));
        b.finish()
    }

    fn is_blank(pixmap: &Pixmap) -> bool {
        pixmap.data().iter().all(|b| *b == 0)
    }

    #[test]
    fn unsized_surface_ignores_paint_and_refuses_export() {
        let mut surface = CompositingSurface::new();
        surface.paint_stroke(&line((0.0, 0.0), (5.0, 5.0), Color::BLACK));
        surface.replay(&[]);
        assert!(!surface.is_sized());
        assert!(matches!(
            surface.export_flattened(Color::WHITE, &[]),
            Err(CanvasError::NotSized)
        ));
    }

    #[test]
    fn zero_area_resize_leaves_surface_unsized() {
        let mut surface = CompositingSurface::with_size(10, 10);
        surface.resize(0, 10);
        assert!(!surface.is_sized());
        assert_eq!((surface.width(), surface.height()), (0, 0));
    }

    #[test]
    fn resize_discards_content() {
        let mut surface = CompositingSurface::with_size(20, 20);
        surface.paint_stroke(&line((0.0, 10.0), (20.0, 10.0), Color::BLACK));
        assert!(!is_blank(surface.raster().unwrap()));

        surface.resize(30, 30);
        assert!(is_blank(surface.raster().unwrap()));
        assert_eq!((surface.width(), surface.height()), (30, 30));
    }

    #[test]
    fn replay_clears_before_painting() {
        let mut surface = CompositingSurface::with_size(40, 40);
        surface.paint_stroke(&line((0.0, 10.0), (40.0, 10.0), Color::BLACK));
        surface.replay(&[line((0.0, 30.0), (40.0, 30.0), Color::BLACK)]);

        let raster = surface.raster().unwrap();
        assert_eq!(sample(raster, 20, 10), Some(Color::TRANSPARENT));
        assert_eq!(sample(raster, 20, 30), Some(Color::BLACK));

        surface.replay(&[]);
        assert!(is_blank(surface.raster().unwrap()));
    }

    #[test]
    fn export_has_solid_background() {
        let surface = CompositingSurface::with_size(16, 16);
        let out = surface.export_flattened(Color::WHITE, &[]).unwrap();
        assert_eq!(sample(&out, 0, 0), Some(Color::WHITE));
        assert_eq!(sample(&out, 15, 15), Some(Color::WHITE));
        // The live raster stays transparent.
        assert!(is_blank(surface.raster().unwrap()));
    }

    #[test]
    fn overlay_does_not_touch_live_raster() {
        let surface = CompositingSurface::with_size(20, 20);
        let b = StrokeBuilder::begin(Point::new(10.0, 10.0), PaintStyle::brush(Color::BLACK, 6.0));
        let frame = surface.frame_with_overlay(b.path(), b.paint()).unwrap();
        assert_eq!(sample(&frame, 10, 10), Some(Color::BLACK));
        assert!(is_blank(surface.raster().unwrap()));
    }

    #[test]
    fn base_image_is_drawn_under_strokes_on_replay() {
        let mut base = Pixmap::new(20, 20).unwrap();
        base.fill(skia_color(Color::rgb(0x4E, 0xCD, 0xC4)));

        let mut surface = CompositingSurface::with_size(20, 20);
        surface.load_base_image(base);
        surface.replay(&[line((0.0, 5.0), (20.0, 5.0), Color::BLACK)]);

        let raster = surface.raster().unwrap();
        assert_eq!(sample(raster, 10, 5), Some(Color::BLACK));
        assert_eq!(sample(raster, 10, 15), Some(Color::rgb(0x4E, 0xCD, 0xC4)));

        surface.clear_base_image();
        surface.replay(&[]);
        assert!(is_blank(surface.raster().unwrap()));
    }
}
