use glam::{EulerRot, Quat, Vec3};

/// World-space position and orientation of a camera.
///
/// The transform is owned by the host (it is the thing the view matrix is
/// built from); the controller reads its local basis vectors and writes
/// position/rotation back each frame.
///
/// Conventions: right-handed, Y-up, forward along `-Z` — the same frame
/// `glam::Mat4::look_at_rh` expects. Euler views use intrinsic YXZ order
/// (yaw, then pitch, then roll) in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// World-space position.
    pub position: Vec3,
    /// World-space orientation.
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// Identity pose: origin, no rotation.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    /// Create a transform from a position and orientation.
    #[must_use]
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Local forward axis (`-Z` rotated into world space).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Local right axis (`+X` rotated into world space).
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Local up axis (`+Y` rotated into world space).
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Euler view of the orientation in degrees, packed as
    /// `(pitch, yaw, roll)` about the `(X, Y, Z)` axes, intrinsic YXZ
    /// order.
    #[must_use]
    pub fn euler_angles(&self) -> Vec3 {
        let (yaw, pitch, roll) = self.rotation.to_euler(EulerRot::YXZ);
        Vec3::new(pitch.to_degrees(), yaw.to_degrees(), roll.to_degrees())
    }

    /// Set the orientation from `(pitch, yaw, roll)` degrees, intrinsic
    /// YXZ order. Inverse of [`euler_angles`](Self::euler_angles).
    pub fn set_euler_angles(&mut self, degrees: Vec3) {
        self.rotation = Quat::from_euler(
            EulerRot::YXZ,
            degrees.y.to_radians(),
            degrees.x.to_radians(),
            degrees.z.to_radians(),
        );
    }

    /// Compose a rotation in local space (applied after the current
    /// orientation, i.e. about the camera's own axes).
    pub fn rotate_local(&mut self, rotation: Quat) {
        self.rotation *= rotation;
    }
}
