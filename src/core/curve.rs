use crate::constants::*;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Shape parameters for one spiral strand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveParams {
    pub segments: usize,
    pub turns: f32,
    pub base_radius: f32,
    pub max_radius: f32,
    pub height: f32,
}

impl Default for CurveParams {
    fn default() -> Self {
        Self {
            segments: CURVE_SEGMENTS,
            turns: CURVE_TURNS,
            base_radius: BASE_RADIUS,
            max_radius: MAX_RADIUS,
            height: SPIRAL_HEIGHT,
        }
    }
}

/// Opening curve: slow growth near the centre, faster toward the tip.
#[inline]
pub fn flower_open(t: f32) -> f32 {
    t.powf(FLOWER_OPEN_EXPONENT)
}

impl CurveParams {
    /// Noise-free radius envelope at progress `t` in [0, 1].
    #[inline]
    pub fn radius_expansion(&self, t: f32) -> f32 {
        self.base_radius + (self.max_radius - self.base_radius) * flower_open(t)
    }

    /// Control point `i` of the strand identified by `(offset, noise_offset)`.
    pub fn point(&self, i: usize, offset: f32, noise_offset: f32) -> Vec3 {
        let t = if self.segments == 0 {
            0.0
        } else {
            i as f32 / self.segments as f32
        };
        let angle = t * TAU * self.turns;
        let open = flower_open(t);
        let n = noise_offset;

        let petal_noise = (angle * 2.0 + n).sin() * PETAL_NOISE_AMP * open;
        let petal_waviness = (angle * 3.0 + n * 1.5).cos() * PETAL_WAVINESS_AMP * open;
        let vertical_noise = (t * PI * 6.0 + n).sin() * VERTICAL_NOISE_AMP * (1.0 - open);
        let petal_variation = (angle + n * 0.5).sin() * PETAL_VARIATION_AMP * open;

        let r = (self.radius_expansion(t) + offset)
            * (1.0 + petal_noise + petal_waviness + petal_variation);

        let edge = open * EDGE_DISTORTION_AMP;
        let x_distortion = (angle * 2.0 + n).cos() * edge;
        let z_distortion = (angle * 2.0 + n * 0.8).sin() * edge;
        let vertical_curve = (t * PI).sin() * VERTICAL_CURVE_AMP * open;

        Vec3::new(
            r * angle.cos() + x_distortion,
            (t - 0.5) * self.height + vertical_noise + vertical_curve,
            r * angle.sin() + z_distortion,
        )
    }

    /// Ordered control points `0..=segments` for one strand.
    pub fn points(&self, offset: f32, noise_offset: f32) -> Vec<Vec3> {
        (0..=self.segments)
            .map(|i| self.point(i, offset, noise_offset))
            .collect()
    }
}

/// Control points for one strand using the reference shape.
pub fn spiral_points(offset: f32, noise_offset: f32) -> Vec<Vec3> {
    CurveParams::default().points(offset, noise_offset)
}
