use chase_kernel::{Mood, Session};
use glam::{Mat4, Vec3};

/// Camera and viewport configuration for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub width: u32,
    pub height: u32,
    pub near: f32,
    pub far: f32,
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 15.0, 30.0),
            target: Vec3::ZERO,
            fov_degrees: 75.0,
            width: 1280,
            height: 720,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl RenderView {
    /// Reconfigure for a new viewport size. Zero sizes are clamped to 1.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width.max(1);
        self.height = height.max(1);
        tracing::debug!(width = self.width, height = self.height, "viewport resized");
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_degrees.to_radians(),
            self.aspect(),
            self.near,
            self.far,
        )
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads the session and a view, then produces output. It
/// never mutates the session.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given session and view.
    fn render(&self, session: &Session, view: &RenderView) -> Self::Output;
}

/// Text renderer for CLI output, logs and tests.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, session: &Session, view: &RenderView) -> String {
        let player = session.player();
        let enemy = session.enemy();
        let mood = match enemy.mood {
            Mood::Normal => "normal",
            Mood::Angry => "ANGRY",
        };

        let mut out = String::new();
        out.push_str(&format!(
            "=== Session (tick={}, round={}, started={}) ===\n",
            session.tick(),
            session.round(),
            session.started()
        ));
        out.push_str(&format!(
            "Camera: eye=({:.1}, {:.1}, {:.1}) target=({:.1}, {:.1}, {:.1}) {}x{} aspect={:.2}\n",
            view.eye.x,
            view.eye.y,
            view.eye.z,
            view.target.x,
            view.target.y,
            view.target.z,
            view.width,
            view.height,
            view.aspect()
        ));
        out.push_str(&format!(
            "  player pos=({:.2}, {:.2}, {:.2}) yaw={:.2}\n",
            player.position.x, player.position.y, player.position.z, player.yaw
        ));
        out.push_str(&format!(
            "  enemy  pos=({:.2}, {:.2}, {:.2}) yaw={:.2} mode={} unstick={} turbo={} mood={}\n",
            enemy.pose.position.x,
            enemy.pose.position.y,
            enemy.pose.position.z,
            enemy.pose.yaw,
            enemy.chaser.mode().kind(),
            enemy.chaser.unstick_timer(),
            enemy.chaser.turbo_timer(),
            mood
        ));
        out.push_str(&format!("  distance={:.2}\n", session.distance()));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chase_input::{Direction, KeyState};
    use chase_kernel::{ChaseConfig, CollisionIndex};

    fn session() -> Session {
        Session::new(
            ChaseConfig::default(),
            CollisionIndex::default(),
            Vec3::ZERO,
            Vec3::new(10.0, 0.0, 0.0),
        )
    }

    #[test]
    fn debug_renderer_fresh_session() {
        let output = DebugTextRenderer::new().render(&session(), &RenderView::default());
        assert!(output.contains("tick=0"));
        assert!(output.contains("started=false"));
        assert!(output.contains("mode=CHASE"));
        assert!(output.contains("mood=normal"));
        assert!(output.contains("distance=10.00"));
    }

    #[test]
    fn debug_renderer_after_steps() {
        let mut s = session();
        s.step(&KeyState::holding(&[Direction::Right]));
        let output = DebugTextRenderer::new().render(&s, &RenderView::default());
        assert!(output.contains("tick=1"));
        assert!(output.contains("started=true"));
        assert!(output.contains("player pos=(0.20"));
    }

    #[test]
    fn render_view_default() {
        let view = RenderView::default();
        assert_eq!(view.fov_degrees, 75.0);
        assert_eq!(view.target, Vec3::ZERO);
        assert!((view.aspect() - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn resize_updates_aspect_and_clamps() {
        let mut view = RenderView::default();
        view.resize(800, 800);
        assert_eq!(view.aspect(), 1.0);
        view.resize(0, 0);
        assert_eq!((view.width, view.height), (1, 1));
        assert!(!view.view_projection().col(0).x.is_nan());
    }
}
