use serde::{Deserialize, Serialize};

use crate::config::ViewportConfig;

/// Zoom and rotation of the model stage, plus the horizontal drag gesture that
/// drives rotation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub zoom: f32,
    /// Degrees around the vertical axis. Unbounded; use
    /// [`Viewport::display_rotation`] for a wrapped value.
    pub rotation: f32,
    /// Last pointer x while a drag is active.
    #[serde(skip)]
    drag_x: Option<f32>,
    #[serde(skip)]
    limits: ViewportConfig,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(ViewportConfig::default())
    }
}

impl Viewport {
    /// Invalid limits fall back to the defaults.
    pub fn new(limits: ViewportConfig) -> Self {
        let limits = limits.sanitized();
        Self {
            zoom: 1.0_f32.clamp(limits.zoom_min, limits.zoom_max),
            rotation: 0.0,
            drag_x: None,
            limits,
        }
    }

    pub fn limits(&self) -> &ViewportConfig {
        &self.limits
    }

    /// Replace the limits and re-clamp the current zoom into them. Invalid
    /// limits fall back to the defaults.
    pub fn set_limits(&mut self, limits: ViewportConfig) {
        self.limits = limits.sanitized();
        self.zoom = self.clamp_zoom(self.zoom);
    }

    /// Clamp into the zoom range; NaN lands on the minimum.
    fn clamp_zoom(&self, zoom: f32) -> f32 {
        if zoom.is_nan() {
            return self.limits.zoom_min;
        }
        zoom.clamp(self.limits.zoom_min, self.limits.zoom_max)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_x.is_some()
    }

    /// Pointer (mouse or touch) pressed over the stage.
    pub fn pointer_down(&mut self, x: f32) {
        self.drag_x = Some(x);
    }

    /// Pointer moved. Rotates by `delta * degrees_per_pixel` while dragging;
    /// ignored otherwise. Returns the applied rotation delta.
    pub fn pointer_move(&mut self, x: f32) -> f32 {
        let Some(last_x) = self.drag_x else {
            return 0.0;
        };
        let delta = (x - last_x) * self.limits.degrees_per_pixel;
        self.rotation += delta;
        self.drag_x = Some(x);
        delta
    }

    /// Pointer released or left the stage.
    pub fn pointer_up(&mut self) {
        self.drag_x = None;
    }

    pub fn zoom_in(&mut self) {
        self.zoom = self.clamp_zoom(self.zoom + self.limits.zoom_step);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.clamp_zoom(self.zoom - self.limits.zoom_step);
    }

    pub fn can_zoom_in(&self) -> bool {
        self.zoom < self.limits.zoom_max
    }

    pub fn can_zoom_out(&self) -> bool {
        self.zoom > self.limits.zoom_min
    }

    pub fn reset_rotation(&mut self) {
        self.rotation = 0.0;
    }

    /// Rotation wrapped into `[0, 360)`.
    pub fn display_rotation(&self) -> f32 {
        self.rotation.rem_euclid(360.0)
    }
}
