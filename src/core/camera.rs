use crate::constants::*;
use glam::{Mat4, Vec3};

/// Perspective camera looking down -Z from a fixed eye position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub eye: Vec3,
    projection: Mat4,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        let mut cam = Self {
            fov_y_deg: CAMERA_FOV_DEG,
            aspect: 1.0,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            projection: Mat4::IDENTITY,
        };
        cam.set_aspect(aspect);
        cam
    }

    /// Camera whose aspect matches a `width` x `height` container.
    pub fn for_size(width: f32, height: f32) -> Self {
        Self::new(aspect_ratio(width, height).unwrap_or(1.0))
    }

    /// Update the aspect ratio and rebuild the projection matrix.
    /// Non-finite or non-positive ratios are ignored.
    pub fn set_aspect(&mut self, aspect: f32) {
        if !(aspect.is_finite() && aspect > 0.0) {
            return;
        }
        self.aspect = aspect;
        self.update_projection();
    }

    pub fn update_projection(&mut self) {
        self.projection =
            Mat4::perspective_rh(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far);
    }

    #[inline]
    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    #[inline]
    pub fn view(&self) -> Mat4 {
        Mat4::look_to_rh(self.eye, Vec3::NEG_Z, Vec3::Y)
    }

    #[inline]
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[inline]
pub fn aspect_ratio(width: f32, height: f32) -> Option<f32> {
    let a = width / height;
    (width > 0.0 && height > 0.0 && a.is_finite()).then_some(a)
}

/// Device pixel ratio clamped to the maximum the renderer will honour.
#[inline]
pub fn effective_pixel_ratio(device_pixel_ratio: f64) -> f64 {
    if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(MAX_PIXEL_RATIO)
    } else {
        1.0
    }
}

/// Backing-store size in physical pixels for a CSS-pixel container.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> (u32, u32) {
    let ratio = effective_pixel_ratio(device_pixel_ratio);
    let w = (css_width.max(0.0) * ratio).floor() as u32;
    let h = (css_height.max(0.0) * ratio).floor() as u32;
    (w.max(1), h.max(1))
}
