use glam::Vec3;

use crate::RenderView;

/// Third-person camera that trails the player.
///
/// Each frame the eye eases a fixed fraction of the way toward
/// `player + offset` and the look target snaps to the player. Camera motion
/// is presentation only and lives outside the kernel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowCamera {
    pub eye: Vec3,
    pub target: Vec3,
    pub offset: Vec3,
    /// Fraction of the remaining distance covered per frame, in (0, 1].
    pub ease: f32,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 15.0, 30.0),
            target: Vec3::ZERO,
            offset: Vec3::new(0.0, 10.0, 20.0),
            ease: 0.1,
        }
    }
}

impl FollowCamera {
    /// Advance one frame toward the player.
    pub fn follow(&mut self, player: Vec3) {
        self.eye = self.eye.lerp(player + self.offset, self.ease);
        self.target = player;
    }

    /// Jump straight to the resting position behind the player.
    pub fn snap_to(&mut self, player: Vec3) {
        self.eye = player + self.offset;
        self.target = player;
    }

    /// Copy eye and target into a view, keeping its projection settings.
    pub fn apply(&self, view: &mut RenderView) {
        view.eye = self.eye;
        view.target = self.target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follow_eases_toward_offset() {
        let mut cam = FollowCamera {
            eye: Vec3::ZERO,
            ..FollowCamera::default()
        };
        cam.follow(Vec3::ZERO);
        assert!((cam.eye - Vec3::new(0.0, 1.0, 2.0)).length() < 1e-5);
        assert_eq!(cam.target, Vec3::ZERO);
    }

    #[test]
    fn follow_converges() {
        let mut cam = FollowCamera::default();
        let player = Vec3::new(5.0, 0.0, -3.0);
        for _ in 0..200 {
            cam.follow(player);
        }
        assert!((cam.eye - (player + cam.offset)).length() < 1e-3);
    }

    #[test]
    fn snap_and_apply() {
        let mut cam = FollowCamera::default();
        cam.snap_to(Vec3::new(1.0, 0.0, 1.0));
        let mut view = RenderView::default();
        cam.apply(&mut view);
        assert_eq!(view.eye, Vec3::new(1.0, 10.0, 21.0));
        assert_eq!(view.target, Vec3::new(1.0, 0.0, 1.0));
    }
}
