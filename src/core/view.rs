use crate::core::camera::{aspect_ratio, backing_size, Camera};
use crate::core::motion::{step_rotation, PointerState};
use crate::core::scene::{LineRenderer, SpiralGroup};

/// Everything the frame loop and the input handlers share for one spiral.
pub struct SpiralView<R> {
    pub group: SpiralGroup,
    pub pointer: PointerState,
    pub camera: Camera,
    renderer: Option<R>,
}

impl<R: LineRenderer> SpiralView<R> {
    pub fn new(group: SpiralGroup, camera: Camera, renderer: Option<R>) -> Self {
        Self {
            group,
            pointer: PointerState::default(),
            camera,
            renderer,
        }
    }

    #[inline]
    pub fn on_pointer_move(&mut self, client_x: f32, client_y: f32, width: f32, height: f32) {
        self.pointer.update(client_x, client_y, width, height);
    }

    /// Advance the rotation by one frame, then draw if a renderer is attached.
    pub fn tick(&mut self) -> Result<(), R::Error> {
        step_rotation(&mut self.group.rotation, self.pointer.target_rotation);
        match self.renderer.as_mut() {
            Some(r) => r.render(&self.group, &self.camera),
            None => Ok(()),
        }
    }

    /// Match the camera and surface to a container of `css_width` x `css_height`.
    /// Returns false when nothing was changed.
    pub fn resize(&mut self, css_width: f64, css_height: f64, device_pixel_ratio: f64) -> bool {
        let Some(renderer) = self.renderer.as_mut() else {
            return false;
        };
        let Some(aspect) = aspect_ratio(css_width as f32, css_height as f32) else {
            return false;
        };
        self.camera.set_aspect(aspect);
        let (w, h) = backing_size(css_width, css_height, device_pixel_ratio);
        renderer.resize(w, h);
        true
    }

    pub fn renderer(&self) -> Option<&R> {
        self.renderer.as_ref()
    }

    pub fn renderer_mut(&mut self) -> Option<&mut R> {
        self.renderer.as_mut()
    }
}
