use crate::constants::*;
use crate::core::camera::Camera;
use crate::core::curve::CurveParams;
use crate::core::interp::CurveInterpolator;
use glam::{EulerRot, Mat4, Vec3};

/// Reference configuration for the decorative spiral.
#[derive(Clone, Debug, PartialEq)]
pub struct SpiralConfig {
    pub curve: CurveParams,
    pub strand_count: usize,
    pub offset_step: f32,
    pub noise_step: f32,
    pub divisions: usize,
    pub color: [f32; 3],
    pub base_opacity: f32,
    pub initial_tilt: f32,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self {
            curve: CurveParams::default(),
            strand_count: STRAND_COUNT,
            offset_step: STRAND_OFFSET_STEP,
            noise_step: STRAND_NOISE_STEP,
            divisions: STRAND_DIVISIONS,
            color: STRAND_COLOR,
            base_opacity: BASE_OPACITY,
            initial_tilt: INITIAL_TILT,
        }
    }
}

impl SpiralConfig {
    /// Radial offset of strand `j`, centred on the middle strand.
    #[inline]
    pub fn strand_offset(&self, j: usize) -> f32 {
        (j as f32 - (self.strand_count / 2) as f32) * self.offset_step
    }

    #[inline]
    pub fn strand_noise_offset(&self, j: usize) -> f32 {
        j as f32 * self.noise_step
    }

    /// Inner layers are more opaque; the pattern repeats every three strands.
    #[inline]
    pub fn strand_opacity(&self, j: usize) -> f32 {
        self.base_opacity - (j % OPACITY_LAYERS) as f32 * OPACITY_LAYER_STEP
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Strand {
    pub points: Vec<Vec3>,
    pub opacity: f32,
}

/// All strands plus the single rotation the frame loop animates.
#[derive(Clone, Debug)]
pub struct SpiralGroup {
    pub strands: Vec<Strand>,
    pub color: [f32; 3],
    pub rotation: Vec3,
}

impl SpiralGroup {
    /// Model matrix for the current rotation (X, then Y, then Z).
    #[inline]
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }
}

/// Draws a `SpiralGroup` through some graphics backend.
pub trait LineRenderer {
    type Error: std::fmt::Debug;

    fn render(&mut self, group: &SpiralGroup, camera: &Camera) -> Result<(), Self::Error>;

    /// Resize the render surface to `width` x `height` physical pixels.
    fn resize(&mut self, width: u32, height: u32);
}

pub fn build_strand<I: CurveInterpolator>(
    config: &SpiralConfig,
    interpolator: &I,
    j: usize,
) -> Strand {
    let control = config
        .curve
        .points(config.strand_offset(j), config.strand_noise_offset(j));
    Strand {
        points: interpolator.sample(&control, config.divisions),
        opacity: config.strand_opacity(j),
    }
}

/// Build every strand and tilt the group into its starting pose.
pub fn build_spiral<I: CurveInterpolator>(config: &SpiralConfig, interpolator: &I) -> SpiralGroup {
    let strands = (0..config.strand_count)
        .map(|j| build_strand(config, interpolator, j))
        .collect::<Vec<_>>();
    SpiralGroup {
        strands,
        color: config.color,
        rotation: Vec3::new(config.initial_tilt, config.initial_tilt, 0.0),
    }
}
