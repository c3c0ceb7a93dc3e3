use crate::escape_time::{color_for, iterate};
use crate::surface::{PixelBuffer, Surface};
use fractalview_core::{
    pixel_to_plane, Color, FractalError, GridSize, Pixel, RenderSettings, Viewport,
};
use rayon::prelude::*;
use std::time::Instant;

/// Each click shrinks both viewport extents to this fraction.
pub const DEFAULT_ZOOM_FACTOR: f64 = 0.2;

/// Full-grid escape-time renderer with click-to-zoom.
///
/// Owns the viewport; the only mutation is `zoom_and_rerender`, which always
/// finishes a complete repaint before returning. Plain f64 arithmetic, so
/// the image degrades once the viewport approaches machine precision.
#[derive(Clone, Debug)]
pub struct MandelbrotRenderer {
    viewport: Viewport,
    max_iterations: u32,
    zoom_factor: f64,
    parallel: bool,
}

impl MandelbrotRenderer {
    pub fn new(viewport: Viewport, max_iterations: u32) -> Result<Self, FractalError> {
        if max_iterations == 0 {
            return Err(FractalError::Config("max_iterations must be positive".into()));
        }
        Ok(Self {
            viewport,
            max_iterations,
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            parallel: false,
        })
    }

    pub fn from_settings(settings: &RenderSettings) -> Result<Self, FractalError> {
        settings.validate()?;
        Ok(Self::new(settings.default_viewport()?, settings.max_iterations)?
            .with_zoom_factor(settings.zoom_factor)?
            .with_parallel(settings.parallel))
    }

    pub fn with_zoom_factor(mut self, zoom_factor: f64) -> Result<Self, FractalError> {
        if !(zoom_factor > 0.0 && zoom_factor < 1.0) {
            return Err(FractalError::InvalidZoomFactor(zoom_factor));
        }
        self.zoom_factor = zoom_factor;
        Ok(self)
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    /// Back to the classic view on the current grid.
    pub fn reset(&mut self) -> Result<(), FractalError> {
        self.viewport = Viewport::mandelbrot_default(self.viewport.grid())?;
        Ok(())
    }

    /// Color of a single pixel under the current viewport.
    pub fn color_at(&self, pixel: &Pixel) -> Color {
        let c = pixel_to_plane(pixel, &self.viewport);
        color_for(iterate(&c, self.max_iterations), self.max_iterations)
    }

    /// Colors for the whole grid in row-major order.
    ///
    /// In parallel mode every row is computed on the rayon pool and the call
    /// returns only after all rows have joined.
    pub fn compute_colors(&self) -> Vec<Color> {
        let grid = self.viewport.grid();
        if self.parallel {
            let rows: Vec<Vec<Color>> = (0..grid.height)
                .into_par_iter()
                .map(|y| self.compute_row(grid, y as i64))
                .collect();
            rows.into_iter().flatten().collect()
        } else {
            grid.pixels().map(|pixel| self.color_at(&pixel)).collect()
        }
    }

    fn compute_row(&self, grid: GridSize, y: i64) -> Vec<Color> {
        (0..grid.width as i64)
            .map(|x| self.color_at(&Pixel::new(x, y)))
            .collect()
    }

    /// Paint every pixel of the grid, then present once.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), FractalError> {
        let start = Instant::now();
        let grid = self.viewport.grid();
        let colors = self.compute_colors();

        for (pixel, color) in grid.pixels().zip(colors) {
            surface.set_pixel(pixel, color)?;
        }
        surface.present();

        log::info!(
            "Rendered Mandelbrot {}x{} ({} iterations, {}) in {:.1?}",
            grid.width,
            grid.height,
            self.max_iterations,
            if self.parallel { "parallel" } else { "sequential" },
            start.elapsed()
        );
        Ok(())
    }

    /// Render into a fresh buffer sized to the viewport grid.
    pub fn render_buffer(&self) -> Result<PixelBuffer, FractalError> {
        PixelBuffer::from_colors(self.viewport.grid(), self.compute_colors())
    }

    /// Zoom on `center` by the configured factor and repaint the full grid.
    ///
    /// A failed zoom leaves both the viewport and the surface untouched.
    pub fn zoom_and_rerender<S: Surface + ?Sized>(
        &mut self,
        center: Pixel,
        surface: &mut S,
    ) -> Result<(), FractalError> {
        self.viewport.zoom(center, self.zoom_factor)?;
        self.render(surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fractalview_core::{BLACK, WHITE};

    fn renderer(width: u32, height: u32, max_iterations: u32) -> MandelbrotRenderer {
        let grid = GridSize::new(width, height).unwrap();
        MandelbrotRenderer::new(Viewport::mandelbrot_default(grid).unwrap(), max_iterations).unwrap()
    }

    #[test]
    fn render_produces_correct_size() {
        let colors = renderer(100, 50, 100).compute_colors();
        assert_eq!(colors.len(), 100 * 50);
    }

    #[test]
    fn zero_iterations_rejected() {
        let grid = GridSize::new(10, 10).unwrap();
        let vp = Viewport::mandelbrot_default(grid).unwrap();
        assert!(MandelbrotRenderer::new(vp, 0).is_err());
    }

    #[test]
    fn center_of_default_view_is_inside() {
        // Pixel (300, 300) maps to c = -0.5, inside the main cardioid
        let r = renderer(600, 600, 200);
        assert_eq!(r.color_at(&Pixel::new(300, 300)), BLACK);
    }

    #[test]
    fn top_left_corner_is_outside() {
        // c = -2 + 1.5i escapes on the first check after one update
        let r = renderer(600, 600, 200);
        assert_eq!(r.color_at(&Pixel::new(0, 0)), color_for(1, 200));
    }

    #[test]
    fn render_paints_every_pixel_and_presents_once() {
        let r = renderer(60, 40, 50);
        let mut buf = PixelBuffer::new(r.viewport().grid(), [1, 2, 3]);
        r.render(&mut buf).unwrap();
        assert_eq!(buf.count_color([1, 2, 3]), 0);
        assert_eq!(buf.frames_presented(), 1);
        assert_eq!(buf.pixels(), r.compute_colors().as_slice());
    }

    #[test]
    fn render_rejects_smaller_surface() {
        let r = renderer(20, 20, 10);
        let mut buf = PixelBuffer::new(GridSize::new(10, 10).unwrap(), WHITE);
        let err = r.render(&mut buf).unwrap_err();
        assert!(matches!(err, FractalError::OutOfBoundsPixel { .. }));
    }

    #[test]
    fn parallel_matches_sequential() {
        let seq = renderer(64, 48, 80);
        let par = seq.clone().with_parallel(true);
        assert_eq!(seq.compute_colors(), par.compute_colors());
    }

    #[test]
    fn zoom_and_rerender_updates_viewport_and_buffer() {
        let mut r = renderer(60, 60, 60);
        let mut buf = r.render_buffer().unwrap();
        let before = buf.clone();
        let old_width = r.viewport().width();

        r.zoom_and_rerender(Pixel::new(15, 30), &mut buf).unwrap();

        assert!((r.viewport().width() - old_width * 0.2).abs() < 1e-12);
        assert_ne!(buf.pixels(), before.pixels());
        assert_eq!(buf.pixels(), r.compute_colors().as_slice());
    }

    #[test]
    fn reset_restores_default_view() {
        let mut r = renderer(60, 60, 20);
        let mut buf = r.render_buffer().unwrap();
        r.zoom_and_rerender(Pixel::new(10, 10), &mut buf).unwrap();
        r.reset().unwrap();
        assert_eq!(r.viewport().domain(), (-2.0, 1.0));
        assert_eq!(r.viewport().range(), (-1.5, 1.5));
    }

    #[test]
    fn invalid_zoom_factor_rejected() {
        let r = renderer(10, 10, 10);
        assert!(r.clone().with_zoom_factor(0.0).is_err());
        assert!(r.with_zoom_factor(1.0).is_err());
    }

    #[test]
    fn from_settings_uses_configured_values() {
        let settings = RenderSettings {
            width: 320,
            height: 160,
            max_iterations: 64,
            zoom_factor: 0.5,
            parallel: true,
            ..Default::default()
        };
        let r = MandelbrotRenderer::from_settings(&settings).unwrap();
        assert_eq!(r.viewport().grid(), GridSize::new(320, 160).unwrap());
        assert_eq!(r.max_iterations(), 64);
        assert_eq!(r.zoom_factor(), 0.5);
    }
}
