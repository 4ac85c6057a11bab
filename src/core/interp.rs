use glam::Vec3;

/// Turns sparse control points into a smooth, evenly parameterised path.
pub trait CurveInterpolator {
    /// Sample the curve at `divisions + 1` parameter values in [0, 1].
    fn sample(&self, control: &[Vec3], divisions: usize) -> Vec<Vec3>;
}

/// Open centripetal Catmull-Rom spline.
///
/// End segments use reflected phantom points so the curve starts and ends
/// exactly on the first and last control points.
#[derive(Clone, Copy, Debug, Default)]
pub struct CatmullRom;

#[derive(Clone, Copy)]
struct CubicPoly {
    c0: Vec3,
    c1: Vec3,
    c2: Vec3,
    c3: Vec3,
}

impl CubicPoly {
    fn hermite(x0: Vec3, x1: Vec3, t0: Vec3, t1: Vec3) -> Self {
        Self {
            c0: x0,
            c1: t0,
            c2: -3.0 * x0 + 3.0 * x1 - 2.0 * t0 - t1,
            c3: 2.0 * x0 - 2.0 * x1 + t0 + t1,
        }
    }

    // Non-uniform Catmull-Rom tangents for knot spacings dt0..dt2.
    fn non_uniform(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, dt0: f32, dt1: f32, dt2: f32) -> Self {
        let mut t1 = (p1 - p0) / dt0 - (p2 - p0) / (dt0 + dt1) + (p2 - p1) / dt1;
        let mut t2 = (p2 - p1) / dt1 - (p3 - p1) / (dt1 + dt2) + (p3 - p2) / dt2;
        t1 *= dt1;
        t2 *= dt1;
        Self::hermite(p1, p2, t1, t2)
    }

    #[inline]
    fn eval(&self, t: f32) -> Vec3 {
        let t2 = t * t;
        self.c0 + self.c1 * t + self.c2 * t2 + self.c3 * (t2 * t)
    }
}

impl CatmullRom {
    /// Point at parameter `t` in [0, 1] (uniform in segment index, not arc length).
    pub fn point_at(&self, control: &[Vec3], t: f32) -> Vec3 {
        let l = control.len();
        match l {
            0 => return Vec3::ZERO,
            1 => return control[0],
            _ => {}
        }

        let p = (l - 1) as f32 * t.clamp(0.0, 1.0);
        let mut seg = p.floor() as usize;
        let mut weight = p - seg as f32;
        if seg >= l - 1 {
            seg = l - 2;
            weight = 1.0;
        }

        let p1 = control[seg];
        let p2 = control[seg + 1];
        let p0 = if seg > 0 {
            control[seg - 1]
        } else {
            2.0 * control[0] - control[1]
        };
        let p3 = if seg + 2 < l {
            control[seg + 2]
        } else {
            2.0 * control[l - 1] - control[l - 2]
        };

        // centripetal: knot spacing is sqrt of the chord length
        let mut dt0 = p0.distance_squared(p1).powf(0.25);
        let mut dt1 = p1.distance_squared(p2).powf(0.25);
        let mut dt2 = p2.distance_squared(p3).powf(0.25);
        if dt1 < 1e-4 {
            dt1 = 1.0;
        }
        if dt0 < 1e-4 {
            dt0 = dt1;
        }
        if dt2 < 1e-4 {
            dt2 = dt1;
        }

        CubicPoly::non_uniform(p0, p1, p2, p3, dt0, dt1, dt2).eval(weight)
    }
}

impl CurveInterpolator for CatmullRom {
    fn sample(&self, control: &[Vec3], divisions: usize) -> Vec<Vec3> {
        if divisions == 0 {
            return vec![self.point_at(control, 0.0)];
        }
        (0..=divisions)
            .map(|d| self.point_at(control, d as f32 / divisions as f32))
            .collect()
    }
}
