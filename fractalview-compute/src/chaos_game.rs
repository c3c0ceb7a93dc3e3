//! Sierpinski triangle by the chaos game.
//!
//! Each step jumps halfway from the current point toward a corner chosen
//! uniformly at random. Started inside the triangle, the walk never leaves
//! it (up to one pixel of truncation) and settles onto the attractor.

use crate::surface::Surface;
use fractalview_core::{Color, FractalError, GridSize, Pixel, Triangle, BLACK};
use rand::Rng;

/// Overlay color for the single-step preview.
pub const PREVIEW_COLOR: Color = [220, 30, 30];
const PREVIEW_MARKER_RADIUS: u32 = 3;

pub struct ChaosGame<R> {
    corners: Triangle<i64>,
    rng: R,
}

/// One illustrated chaos step from an arbitrary pointer position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChaosPreview {
    pub pointer: Pixel,
    pub point: Pixel,
    /// Pointer reflected through `point`; the chosen corner up to truncation.
    pub reflection: Pixel,
}

impl<R: Rng> ChaosGame<R> {
    pub fn new(corners: Triangle<i64>, rng: R) -> Self {
        Self { corners, rng }
    }

    /// Game on the attractor triangle inset 50 pixels from the grid edges.
    pub fn for_grid(grid: GridSize, rng: R) -> Self {
        Self::new(Triangle::inset(grid.width, grid.height), rng)
    }

    pub fn corners(&self) -> &Triangle<i64> {
        &self.corners
    }

    /// Midpoint between `current` and a uniformly chosen corner, truncated.
    pub fn step(&mut self, current: Pixel) -> Pixel {
        let corner = match self.rng.gen_range(0..3) {
            0 => self.corners.top,
            1 => self.corners.left,
            _ => self.corners.right,
        };
        current.midpoint(&corner)
    }

    /// Lazy walk yielding `start` then `repetitions` successive steps.
    pub fn run(&mut self, start: Pixel, repetitions: u32) -> ChaosWalk<'_, R> {
        ChaosWalk {
            game: self,
            current: start,
            remaining: repetitions,
            started: false,
        }
    }

    /// Plot the walk point by point, presenting every `redraw_every` points
    /// and once more at the end if the last point fell between refreshes.
    ///
    /// Returns the final point of the walk.
    pub fn draw<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        start: Pixel,
        repetitions: u32,
        redraw_every: u32,
    ) -> Result<Pixel, FractalError> {
        if redraw_every == 0 {
            return Err(FractalError::Config("redraw_every must be positive".into()));
        }

        let mut last = start;
        let mut presented_last = false;
        for (i, point) in self.run(start, repetitions).enumerate() {
            surface.set_pixel(point, BLACK)?;
            last = point;
            presented_last = i > 0 && i as u64 % redraw_every as u64 == 0;
            if presented_last {
                surface.present();
            }
        }
        if !presented_last {
            surface.present();
        }

        log::debug!(
            "Chaos game: {} points from ({}, {}) ending at ({}, {})",
            repetitions,
            start.x(),
            start.y(),
            last.x(),
            last.y()
        );
        Ok(last)
    }

    /// One step from an arbitrary pointer, without touching any walk state.
    pub fn preview_step(&mut self, pointer: Pixel) -> ChaosPreview {
        let point = self.step(pointer);
        let reflection = Pixel::new(2 * point.x() - pointer.x(), 2 * point.y() - pointer.y());
        ChaosPreview {
            pointer,
            point,
            reflection,
        }
    }

    /// Draw the preview overlay: a line from the pointer to its reflection
    /// and a marker around the stepped point.
    pub fn draw_preview<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        pointer: Pixel,
    ) -> ChaosPreview {
        let preview = self.preview_step(pointer);
        surface.draw_line(preview.pointer, preview.reflection, PREVIEW_COLOR);
        surface.draw_circle_outline(preview.point, PREVIEW_MARKER_RADIUS, PREVIEW_COLOR);
        if surface.set_pixel(preview.point, BLACK).is_err() {
            log::warn!(
                "Preview point ({}, {}) is off the grid",
                preview.point.x(),
                preview.point.y()
            );
        }
        surface.present();
        preview
    }
}

/// Finite, single-use chaos walk. Yields the start point first.
pub struct ChaosWalk<'a, R> {
    game: &'a mut ChaosGame<R>,
    current: Pixel,
    remaining: u32,
    started: bool,
}

impl<R: Rng> Iterator for ChaosWalk<'_, R> {
    type Item = Pixel;

    fn next(&mut self) -> Option<Pixel> {
        if !self.started {
            self.started = true;
            return Some(self.current);
        }
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.current = self.game.step(self.current);
        Some(self.current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize + usize::from(!self.started);
        (n, Some(n))
    }
}

impl<R: Rng> ExactSizeIterator for ChaosWalk<'_, R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::PixelBuffer;
    use fractalview_core::WHITE;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn game(seed: u64) -> ChaosGame<StdRng> {
        ChaosGame::for_grid(GridSize::default(), StdRng::seed_from_u64(seed))
    }

    #[test]
    fn step_lands_on_a_corner_midpoint() {
        let mut g = game(1);
        let corners = *g.corners();
        let current = Pixel::new(300, 400);
        for _ in 0..50 {
            let next = g.step(current);
            let candidates = [
                current.midpoint(&corners.top),
                current.midpoint(&corners.left),
                current.midpoint(&corners.right),
            ];
            assert!(candidates.contains(&next), "{:?}", next);
        }
    }

    #[test]
    fn step_picks_every_corner_eventually() {
        let mut g = game(2);
        let corners = *g.corners();
        let current = Pixel::new(300, 300);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let next = g.step(current);
            for (i, corner) in corners.corners().iter().enumerate() {
                if next == current.midpoint(corner) {
                    seen[i] = true;
                }
            }
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn run_yields_start_then_repetitions() {
        let mut g = game(3);
        let start = Pixel::new(300, 550);
        let walk = g.run(start, 10);
        assert_eq!(walk.len(), 11);
        let points: Vec<_> = walk.collect();
        assert_eq!(points.len(), 11);
        assert_eq!(points[0], start);
    }

    #[test]
    fn run_with_zero_repetitions_yields_only_start() {
        let mut g = game(3);
        let points: Vec<_> = g.run(Pixel::new(10, 10), 0).collect();
        assert_eq!(points, vec![Pixel::new(10, 10)]);
    }

    #[test]
    fn same_seed_same_walk() {
        let a: Vec<_> = game(42).run(Pixel::new(300, 300), 500).collect();
        let b: Vec<_> = game(42).run(Pixel::new(300, 300), 500).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn walk_carries_state_between_steps() {
        let mut g = game(5);
        let points: Vec<_> = g.run(Pixel::new(300, 300), 20).collect();
        let corners = *g.corners();
        for pair in points.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            assert!(corners
                .corners()
                .iter()
                .any(|c| prev.midpoint(c) == next));
        }
    }

    #[test]
    fn draw_presents_periodically_and_at_end() {
        let mut g = game(6);
        let mut buf = PixelBuffer::new(GridSize::default(), WHITE);
        g.draw(&mut buf, Pixel::new(300, 550), 1000, 100).unwrap();
        assert_eq!(buf.frames_presented(), 10);

        let mut buf = PixelBuffer::new(GridSize::default(), WHITE);
        g.draw(&mut buf, Pixel::new(300, 550), 1050, 100).unwrap();
        assert_eq!(buf.frames_presented(), 11);

        let mut buf = PixelBuffer::new(GridSize::default(), WHITE);
        g.draw(&mut buf, Pixel::new(300, 550), 0, 100).unwrap();
        assert_eq!(buf.frames_presented(), 1);
        assert_eq!(buf.get(&Pixel::new(300, 550)), Some(BLACK));
    }

    #[test]
    fn draw_returns_last_point_and_paints_it() {
        let mut g = game(7);
        let mut buf = PixelBuffer::new(GridSize::default(), WHITE);
        let last = g.draw(&mut buf, Pixel::new(300, 550), 300, 100).unwrap();
        assert_eq!(buf.get(&last), Some(BLACK));
        assert!(buf.count_color(BLACK) > 1);
    }

    #[test]
    fn draw_rejects_off_grid_start() {
        let mut g = game(8);
        let mut buf = PixelBuffer::new(GridSize::default(), WHITE);
        let err = g.draw(&mut buf, Pixel::new(-1, 5), 10, 100).unwrap_err();
        assert!(matches!(err, FractalError::OutOfBoundsPixel { .. }));
    }

    #[test]
    fn draw_rejects_zero_redraw_interval() {
        let mut g = game(8);
        let mut buf = PixelBuffer::new(GridSize::default(), WHITE);
        assert!(g.draw(&mut buf, Pixel::new(300, 300), 10, 0).is_err());
    }

    #[test]
    fn preview_reflection_lands_on_chosen_corner() {
        let mut g = game(9);
        let corners = *g.corners();
        // Even coordinates keep the midpoint exact, so the reflection is the corner.
        let preview = g.preview_step(Pixel::new(200, 300));
        assert!(corners.corners().contains(&&preview.reflection));
        assert_eq!(preview.pointer, Pixel::new(200, 300));
    }

    #[test]
    fn preview_draws_overlay_and_presents() {
        let mut g = game(10);
        let mut buf = PixelBuffer::new(GridSize::default(), WHITE);
        let preview = g.draw_preview(&mut buf, Pixel::new(100, 100));
        assert_eq!(buf.get(&preview.point), Some(BLACK));
        assert_eq!(buf.get(&preview.pointer), Some(PREVIEW_COLOR));
        assert_eq!(buf.frames_presented(), 1);
    }

    #[test]
    fn preview_from_outside_grid_does_not_fail() {
        let mut g = game(11);
        let mut buf = PixelBuffer::new(GridSize::default(), WHITE);
        let preview = g.draw_preview(&mut buf, Pixel::new(-900, -900));
        assert_eq!(preview.pointer, Pixel::new(-900, -900));
        assert_eq!(buf.frames_presented(), 1);
    }
}
