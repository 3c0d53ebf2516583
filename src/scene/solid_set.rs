//! The two solids and which one is on screen
//!
//! Both solids are bound to the backend at startup; switching between them
//! never re-uploads geometry. Only the active solid is animated and drawn.

use hyperview_core::{
    Camera, CoreError, Cube, Hypercube, RenderBackend, RotatingSolid, RotationPlane, SolidKind,
    SolidRenderer,
};
use hyperview_input::InputAction;

use crate::config::AnimationConfig;

pub struct SolidSet {
    cube: SolidRenderer<Cube>,
    hypercube: SolidRenderer<Hypercube>,
    active: SolidKind,
}

impl SolidSet {
    /// Build and bind both solids
    ///
    /// Fails if either solid cannot be uploaded or its program cannot be
    /// linked.
    pub fn new(backend: &mut dyn RenderBackend, config: &AnimationConfig) -> Result<Self, CoreError> {
        let cube = Cube::with_tumble(config.size, config.tumble());
        let hypercube = Hypercube::new(config.size)
            .with_tumble(config.tumble())
            .with_plane(config.initial_plane)
            .with_rotation_speed(config.rotation_speed);

        let cube = SolidRenderer::new(backend, cube)?;
        let hypercube = SolidRenderer::new(backend, hypercube)?;

        log::info!(
            "Solids ready, showing {:?} ({} plane, {:.2} rad/s)",
            config.start_solid,
            config.initial_plane,
            hypercube.solid().rotation_speed()
        );

        Ok(Self {
            cube,
            hypercube,
            active: config.start_solid,
        })
    }

    pub fn active(&self) -> SolidKind {
        self.active
    }

    pub fn hypercube(&self) -> &Hypercube {
        self.hypercube.solid()
    }

    pub fn cube(&self) -> &Cube {
        self.cube.solid()
    }

    pub fn active_solid(&self) -> &dyn RotatingSolid {
        match self.active {
            SolidKind::Cube => self.cube.solid(),
            SolidKind::Hypercube => self.hypercube.solid(),
        }
    }

    /// Advance the active solid
    pub fn update(&mut self, delta_seconds: f32) {
        match self.active {
            SolidKind::Cube => self.cube.update(delta_seconds),
            SolidKind::Hypercube => self.hypercube.update(delta_seconds),
        }
    }

    /// Draw the active solid
    pub fn render(&self, backend: &mut dyn RenderBackend, camera: &Camera) -> Result<(), CoreError> {
        match self.active {
            SolidKind::Cube => self.cube.render(backend, camera),
            SolidKind::Hypercube => self.hypercube.render(backend, camera),
        }
    }

    pub fn set_plane(&mut self, plane: RotationPlane) {
        self.hypercube.solid_mut().set_plane(plane);
    }

    /// Apply a solid-related action; returns whether it was handled
    pub fn apply(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::SelectPlane(plane) => {
                self.set_plane(plane);
                log::info!("Rotation plane: {}", plane);
            }
            InputAction::SpeedUp | InputAction::SlowDown => {
                let hypercube = self.hypercube.solid_mut();
                let speed = action.apply_to_speed(hypercube.rotation_speed());
                hypercube.set_rotation_speed(speed);
                log::info!("Rotation speed: {:.3} rad/s", hypercube.rotation_speed());
            }
            InputAction::ResetAngle => {
                self.hypercube.solid_mut().reset_angle();
                log::info!("Rotation angle reset");
            }
            InputAction::ToggleSolid => {
                self.active = self.active.toggled();
                log::info!("Showing {:?}", self.active);
            }
            InputAction::TogglePause | InputAction::ToggleFullscreen | InputAction::Exit => {
                return false;
            }
        }
        true
    }

    /// Short state summary for the window title
    pub fn status(&self) -> String {
        match self.active {
            SolidKind::Cube => "Cube".to_string(),
            SolidKind::Hypercube => {
                let h = self.hypercube.solid();
                format!(
                    "Hypercube {} {:.2} rad/s @ {:.0}°",
                    h.plane(),
                    h.rotation_speed(),
                    h.current_angle().to_degrees()
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperview_core::{ProgramKind, RecordingBackend, MAX_ROTATION_SPEED};

    fn solid_set(backend: &mut RecordingBackend) -> SolidSet {
        SolidSet::new(backend, &AnimationConfig::default()).unwrap()
    }

    #[test]
    fn test_both_solids_bound_up_front() {
        let mut backend = RecordingBackend::new();
        let set = solid_set(&mut backend);
        assert_eq!(backend.mesh_count(), 2);
        assert_eq!(backend.program_count(), 2);
        assert_eq!(set.active(), SolidKind::Hypercube);
    }

    #[test]
    fn test_construction_fails_without_context() {
        let mut backend = RecordingBackend::detached();
        let result = SolidSet::new(&mut backend, &AnimationConfig::default());
        assert!(matches!(result, Err(CoreError::MissingContext(_))));
    }

    #[test]
    fn test_construction_fails_on_link_error() {
        let mut backend = RecordingBackend::rejecting(ProgramKind::Solid3D);
        let result = SolidSet::new(&mut backend, &AnimationConfig::default());
        assert!(matches!(result, Err(CoreError::Backend(_))));
    }

    #[test]
    fn test_plane_and_speed_actions() {
        let mut backend = RecordingBackend::new();
        let mut set = solid_set(&mut backend);

        assert!(set.apply(InputAction::SelectPlane(RotationPlane::YW)));
        assert_eq!(set.hypercube().plane(), RotationPlane::YW);

        let speed = set.hypercube().rotation_speed();
        assert!(set.apply(InputAction::SpeedUp));
        assert!(set.hypercube().rotation_speed() > speed);
        assert!(set.apply(InputAction::SlowDown));
        assert!((set.hypercube().rotation_speed() - speed).abs() < 1e-6);
    }

    #[test]
    fn test_bad_configured_speed_keeps_rotation_finite() {
        for bad in [f32::NAN, f32::INFINITY, -1.0] {
            let mut backend = RecordingBackend::new();
            let config = AnimationConfig {
                rotation_speed: bad,
                ..AnimationConfig::default()
            };
            let mut set = SolidSet::new(&mut backend, &config).unwrap();
            let speed = set.hypercube().rotation_speed();
            assert!(speed.is_finite() && speed > 0.0, "speed {} from {}", speed, bad);

            set.update(0.05);
            let angle = set.hypercube().current_angle();
            assert!(angle.is_finite() && angle > 0.0);
        }
    }

    #[test]
    fn test_held_speed_keys_saturate() {
        let mut backend = RecordingBackend::new();
        let mut set = solid_set(&mut backend);

        for _ in 0..500 {
            set.apply(InputAction::SpeedUp);
        }
        assert_eq!(set.hypercube().rotation_speed(), MAX_ROTATION_SPEED);
        set.update(0.016);
        assert!(set.hypercube().current_angle().is_finite());

        set.apply(InputAction::SlowDown);
        assert!(set.hypercube().rotation_speed() < MAX_ROTATION_SPEED);
    }

    #[test]
    fn test_reset_angle_action() {
        let mut backend = RecordingBackend::new();
        let mut set = solid_set(&mut backend);
        set.update(0.5);
        assert!(set.hypercube().current_angle() > 0.0);
        set.apply(InputAction::ResetAngle);
        assert_eq!(set.hypercube().current_angle(), 0.0);
    }

    #[test]
    fn test_toggle_switches_drawn_solid() {
        let mut backend = RecordingBackend::new();
        let mut set = solid_set(&mut backend);
        let camera = Camera::default();

        set.render(&mut backend, &camera).unwrap();
        assert_eq!(backend.last_draw().unwrap().scene.vertices.len(), 16);

        set.apply(InputAction::ToggleSolid);
        assert_eq!(set.active(), SolidKind::Cube);
        set.render(&mut backend, &camera).unwrap();
        assert_eq!(backend.last_draw().unwrap().scene.vertices.len(), 24);
    }

    #[test]
    fn test_only_active_solid_animates() {
        let mut backend = RecordingBackend::new();
        let mut set = solid_set(&mut backend);
        let cube_model = set.cube().model();
        set.update(0.25);
        assert_eq!(set.cube().model(), cube_model);
        assert!(set.hypercube().current_angle() > 0.0);
    }

    #[test]
    fn test_viewer_actions_not_handled() {
        let mut backend = RecordingBackend::new();
        let mut set = solid_set(&mut backend);
        assert!(!set.apply(InputAction::Exit));
        assert!(!set.apply(InputAction::TogglePause));
        assert!(!set.apply(InputAction::ToggleFullscreen));
    }

    #[test]
    fn test_status_mentions_plane() {
        let mut backend = RecordingBackend::new();
        let mut set = solid_set(&mut backend);
        assert!(set.status().contains("XW"));
        set.apply(InputAction::SelectPlane(RotationPlane::ZW));
        assert!(set.status().contains("ZW"));
        set.apply(InputAction::ToggleSolid);
        assert_eq!(set.status(), "Cube");
    }
}
