//! Camera with a 3D pose and a 4D pose
//!
//! The 3D half is an ordinary look-at camera with a symmetric perspective
//! frustum. The 4D half is a look-at frame (wa, wb, wc, wd) plus a single
//! field-of-view angle used for the 4D perspective divide; there is no
//! separate 4D projection matrix.
//!
//! Derived matrices are recomputed eagerly by every setter, so render code
//! only ever reads from a `&Camera`.

use std::f32::consts::FRAC_PI_4;

use hyperview_math::mat4::{self, Mat4};
use hyperview_math::{Vec3, Vec4};

/// Initial parameters for a [`Camera`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraSettings {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,

    pub position_4d: Vec4,
    pub target_4d: Vec4,
    pub up_4d: Vec4,
    pub over_4d: Vec4,
    /// 4D projection angle in radians
    pub fov_4d: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            position: Vec3::new(4.147724, -4.964352, -3.691729),
            target: Vec3::new(3.596415, -4.284839, -3.20768),
            up: Vec3::new(-0.5506194, -0.7322351, 0.4007882),
            fov_y: FRAC_PI_4,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 100.0,

            position_4d: Vec4::new(4.0, 0.0, 0.0, 0.0),
            target_4d: Vec4::ZERO,
            up_4d: Vec4::Y,
            over_4d: Vec4::Z,
            fov_4d: FRAC_PI_4,
        }
    }
}

/// Owns both poses and their derived view/projection matrices
#[derive(Clone, Debug)]
pub struct Camera {
    settings: CameraSettings,
    view: Mat4,
    projection: Mat4,
    view4d: Mat4,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(CameraSettings::default())
    }
}

impl Camera {
    pub fn new(settings: CameraSettings) -> Self {
        let mut camera = Self {
            settings,
            view: mat4::IDENTITY,
            projection: mat4::IDENTITY,
            view4d: mat4::IDENTITY,
        };
        camera.rebuild_view();
        camera.rebuild_projection();
        camera.rebuild_view4d();
        camera
    }

    /// Builder form of [`Camera::set_viewport`]
    pub fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.set_viewport(width, height);
        self
    }

    pub fn settings(&self) -> &CameraSettings {
        &self.settings
    }

    /// 3D view matrix
    pub fn view(&self) -> Mat4 {
        self.view
    }

    /// 3D perspective projection
    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// 4D view matrix, columns wa, wb, wc, wd
    pub fn view4d(&self) -> Mat4 {
        self.view4d
    }

    pub fn position_4d(&self) -> Vec4 {
        self.settings.position_4d
    }

    pub fn fov_4d(&self) -> f32 {
        self.settings.fov_4d
    }

    pub fn aspect(&self) -> f32 {
        self.settings.aspect
    }

    /// The 4D look-at frame `[wa, wb, wc, wd]`; `wd` is the depth axis
    pub fn basis_4d(&self) -> [Vec4; 4] {
        [
            mat4::get_column(self.view4d, 0),
            mat4::get_column(self.view4d, 1),
            mat4::get_column(self.view4d, 2),
            mat4::get_column(self.view4d, 3),
        ]
    }

    /// Update the aspect ratio after a resize
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if height == 0 {
            log::warn!("Ignoring viewport with zero height ({}x{})", width, height);
            return;
        }
        self.settings.aspect = width as f32 / height as f32;
        self.rebuild_projection();
    }

    pub fn set_fov_y(&mut self, fov_y: f32) {
        self.settings.fov_y = fov_y;
        self.rebuild_projection();
    }

    pub fn set_fov_4d(&mut self, fov_4d: f32) {
        self.settings.fov_4d = fov_4d;
    }

    pub fn set_pose_3d(&mut self, position: Vec3, target: Vec3, up: Vec3) {
        self.settings.position = position;
        self.settings.target = target;
        self.settings.up = up;
        self.rebuild_view();
    }

    pub fn set_pose_4d(&mut self, position: Vec4, target: Vec4, up: Vec4, over: Vec4) {
        self.settings.position_4d = position;
        self.settings.target_4d = target;
        self.settings.up_4d = up;
        self.settings.over_4d = over;
        self.rebuild_view4d();
    }

    fn rebuild_view(&mut self) {
        let s = &self.settings;
        self.view = mat4::look_at(s.position, s.target, s.up);
    }

    fn rebuild_projection(&mut self) {
        let s = &self.settings;
        self.projection = mat4::perspective(s.fov_y, s.aspect, s.near, s.far);
    }

    fn rebuild_view4d(&mut self) {
        let s = &self.settings;
        self.view4d = mat4::look_at_4d(s.position_4d, s.target_4d, s.up_4d, s.over_4d);
    }
}
