//! Drawing surface abstraction
//!
//! The game draws through [`DrawSurface`] in field coordinates (origin top
//! left, Y down). [`ShapeBatch`] tessellates the calls into triangles for the
//! GPU pipeline.

use glam::Vec2;

use super::shapes::{self, CIRCLE_SEGMENTS};
use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::sim::{GameState, PowerUpKind};

/// Immediate-mode 2D drawing primitives
pub trait DrawSurface {
    /// Erase everything drawn so far this frame
    fn clear(&mut self);
    /// Filled axis-aligned rectangle
    fn fill_rect(&mut self, top_left: Vec2, size: Vec2, color: [f32; 4]);
    /// Filled circle
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]);
}

/// Draw one frame: both paddles, the ball and the power-up marker if any
pub fn draw_frame(state: &GameState, surface: &mut impl DrawSurface) {
    surface.clear();

    for paddle in [&state.player, &state.computer] {
        surface.fill_rect(
            Vec2::new(paddle.x, paddle.y),
            Vec2::new(PADDLE_WIDTH, paddle.height),
            colors::PADDLE,
        );
    }

    surface.fill_circle(state.ball.pos, state.ball.radius, colors::BALL);

    if let Some(power_up) = &state.power_up {
        surface.fill_circle(power_up.pos, POWER_UP_RADIUS, power_up_color(power_up.kind));
    }
}

/// Marker color of each power-up kind
pub fn power_up_color(kind: PowerUpKind) -> [f32; 4] {
    match kind {
        PowerUpKind::PaddleGrow => colors::GREEN,
        PowerUpKind::BallSpeedUp => colors::RED,
        PowerUpKind::BallShrink => colors::BLUE,
    }
}

/// Triangle list built from draw calls
#[derive(Debug, Default, Clone)]
pub struct ShapeBatch {
    vertices: Vec<Vertex>,
}

impl ShapeBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl DrawSurface for ShapeBatch {
    fn clear(&mut self) {
        self.vertices.clear();
    }

    fn fill_rect(&mut self, top_left: Vec2, size: Vec2, color: [f32; 4]) {
        self.vertices.extend(shapes::rect(top_left, size, color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        self.vertices
            .extend(shapes::circle(center, radius, color, CIRCLE_SEGMENTS));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::PowerUp;

    #[derive(Debug, Clone, PartialEq)]
    enum DrawCall {
        Clear,
        Rect(Vec2, Vec2, [f32; 4]),
        Circle(Vec2, f32, [f32; 4]),
    }

    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<DrawCall>,
    }

    impl DrawSurface for RecordingSurface {
        fn clear(&mut self) {
            self.calls.push(DrawCall::Clear);
        }

        fn fill_rect(&mut self, top_left: Vec2, size: Vec2, color: [f32; 4]) {
            self.calls.push(DrawCall::Rect(top_left, size, color));
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
            self.calls.push(DrawCall::Circle(center, radius, color));
        }
    }

    #[test]
    fn test_draw_frame_without_power_up() {
        let state = GameState::new(1);
        let mut surface = RecordingSurface::default();
        draw_frame(&state, &mut surface);

        assert_eq!(
            surface.calls,
            vec![
                DrawCall::Clear,
                DrawCall::Rect(Vec2::new(20.0, 200.0), Vec2::new(10.0, 100.0), colors::PADDLE),
                DrawCall::Rect(Vec2::new(770.0, 200.0), Vec2::new(10.0, 100.0), colors::PADDLE),
                DrawCall::Circle(Vec2::new(400.0, 250.0), 10.0, colors::BALL),
            ]
        );
    }

    #[test]
    fn test_draw_frame_with_power_up() {
        let mut state = GameState::new(1);
        state.power_up = Some(PowerUp {
            pos: Vec2::new(100.0, 80.0),
            kind: PowerUpKind::BallSpeedUp,
        });
        let mut surface = RecordingSurface::default();
        draw_frame(&state, &mut surface);

        assert_eq!(
            surface.calls.last(),
            Some(&DrawCall::Circle(Vec2::new(100.0, 80.0), 12.0, colors::RED))
        );
    }

    #[test]
    fn test_each_kind_has_distinct_color() {
        let colors: Vec<_> = PowerUpKind::ALL.iter().map(|k| power_up_color(*k)).collect();
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
    }

    #[test]
    fn test_batch_is_rebuilt_each_frame() {
        let state = GameState::new(1);
        let mut batch = ShapeBatch::new();
        draw_frame(&state, &mut batch);
        let first = batch.vertices().len();
        draw_frame(&state, &mut batch);
        assert_eq!(batch.vertices().len(), first);
        assert_eq!(first, 6 + 6 + (CIRCLE_SEGMENTS * 3) as usize);
    }
}
