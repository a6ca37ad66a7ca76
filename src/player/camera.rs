use glam::{Mat4, Vec3};

/// Eye position and look target handed to the renderer each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

impl CameraPose {
    pub fn from_angles(eye: Vec3, yaw: f32, pitch: f32) -> Self {
        CameraPose {
            position: eye,
            target: eye + look_direction(yaw, pitch),
        }
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }
}

pub fn look_direction(yaw: f32, pitch: f32) -> Vec3 {
    Vec3::new(
        yaw.cos() * pitch.cos(),
        pitch.sin(),
        yaw.sin() * pitch.cos(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_follows_yaw_and_pitch() {
        let pose = CameraPose::from_angles(Vec3::new(1.0, 2.0, 3.0), 0.0, 0.0);
        assert!((pose.forward() - Vec3::X).length() < 1e-6);

        let up = CameraPose::from_angles(Vec3::ZERO, 0.0, std::f32::consts::FRAC_PI_4);
        assert!(up.forward().y > 0.7);
    }
}
