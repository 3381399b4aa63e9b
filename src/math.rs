use nalgebra::Vector3;


/// Absolute tolerance for treating a plane normal as the zero vector.
pub const PLANE_TOLERANCE: f64 = 1e-8;


pub fn cross_product(a: &Vector3<f64>, b: &Vector3<f64>) -> Vector3<f64> {
    a.cross(b)
}


pub fn dot_product(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    a.dot(b)
}


pub fn is_near_zero(v: &Vector3<f64>, eps: f64) -> bool {
    v.iter().all(|c| c.abs() <= eps)
}


#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub point: Vector3<f64>,
    pub normal: Vector3<f64>,
}


#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpanningPlane {
    Spanned(Plane),
    /// Parallel, anti-parallel, or zero input vectors.
    Degenerate,
}


/// Plane through `a` spanned by `a` and `b`.
pub fn spanning_plane(a: &Vector3<f64>, b: &Vector3<f64>) -> SpanningPlane {
    let normal = cross_product(a, b);
    if is_near_zero(&normal, PLANE_TOLERANCE) {
        SpanningPlane::Degenerate
    } else {
        SpanningPlane::Spanned(Plane { point: *a, normal })
    }
}


impl SpanningPlane {
    pub fn is_degenerate(&self) -> bool {
        matches!(self, SpanningPlane::Degenerate)
    }
}


impl Plane {
    /// Height of the plane above (x, y), or `None` for a vertical plane.
    pub fn z_at(&self, x: f64, y: f64) -> Option<f64> {
        let (p, n) = (self.point, self.normal);
        if n.z.abs() <= PLANE_TOLERANCE {
            return None;
        }
        let z = p.z - (n.x * (x - p.x) + n.y * (y - p.y)) / n.z;
        z.is_finite().then_some(z)
    }

    /// Corners of a finite patch of the plane, in drawing order.
    ///
    /// The patch covers `point.x ± extent.x` by `point.y ± extent.y`, lifted
    /// onto the plane. Vertical planes and collapsed extents fall back to the
    /// parallelogram `point ± a ± b` with `a = point` and `b = extent`.
    pub fn patch(&self, extent: &Vector3<f64>) -> [Vector3<f64>; 4] {
        let p = self.point;
        let collapsed = extent.x.abs() <= PLANE_TOLERANCE || extent.y.abs() <= PLANE_TOLERANCE;

        if !collapsed {
            let corners = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)].map(|(sx, sy)| {
                let x = p.x + sx * extent.x;
                let y = p.y + sy * extent.y;
                self.z_at(x, y).map(|z| Vector3::new(x, y, z))
            });
            if let [Some(c0), Some(c1), Some(c2), Some(c3)] = corners {
                return [c0, c1, c2, c3];
            }
        }

        [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)]
            .map(|(s, t)| p + p * s + *extent * t)
    }
}


/// Everything computed from the first two vectors of a visualization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedGeometry {
    pub plane: SpanningPlane,
    pub cross: Vector3<f64>,
    pub dot: f64,
}

impl DerivedGeometry {
    pub fn from_pair(a: &Vector3<f64>, b: &Vector3<f64>) -> Self {
        Self {
            plane: spanning_plane(a, b),
            cross: cross_product(a, b),
            dot: dot_product(a, b),
        }
    }
}


/// Largest absolute component over all vectors; 1.0 when all are zero.
pub fn axis_bound(vectors: &[Vector3<f64>]) -> f64 {
    let max = vectors
        .iter()
        .flat_map(|v| v.iter())
        .fold(0.0_f64, |acc, c| acc.max(c.abs()));

    if max > 0.0 && max.is_finite() { max } else { 1.0 }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_axes() {
        let x = Vector3::x();
        let y = Vector3::y();

        assert_eq!(cross_product(&x, &y), Vector3::z());
        assert_eq!(dot_product(&x, &y), 0.0);
        match spanning_plane(&x, &y) {
            SpanningPlane::Spanned(plane) => {
                assert_eq!(plane.normal, Vector3::z());
                assert_eq!(plane.point, x);
            }
            SpanningPlane::Degenerate => panic!("x and y span the XY plane"),
        }
    }

    #[test]
    fn parallel_and_zero_vectors_are_degenerate() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        assert!(spanning_plane(&a, &(a * 2.0)).is_degenerate());
        assert!(spanning_plane(&a, &(a * -0.5)).is_degenerate());
        assert!(spanning_plane(&a, &Vector3::zeros()).is_degenerate());
        assert!(spanning_plane(&Vector3::zeros(), &a).is_degenerate());
    }

    #[test]
    fn patch_lies_on_the_plane() {
        let a = Vector3::new(1.0, 0.0, 1.0);
        let b = Vector3::new(0.0, 2.0, 1.0);
        let SpanningPlane::Spanned(plane) = spanning_plane(&a, &b) else {
            panic!("vectors are not parallel");
        };
        // b.x is zero, so the xy heuristic collapses and the fallback is used
        for corner in plane.patch(&b) {
            assert!((corner - plane.point).dot(&plane.normal).abs() < 1e-9);
        }

        let b = Vector3::new(1.0, 2.0, 0.0);
        let SpanningPlane::Spanned(plane) = spanning_plane(&a, &b) else {
            panic!("vectors are not parallel");
        };
        let corners = plane.patch(&b);
        assert_eq!(corners[0].x, 0.0);
        assert_eq!(corners[2].y, 2.0);
        for corner in corners {
            assert!((corner - plane.point).dot(&plane.normal).abs() < 1e-9);
        }
    }

    #[test]
    fn vertical_plane_uses_fallback_patch() {
        let a = Vector3::new(1.0, 0.0, 0.0);
        let b = Vector3::new(1.0, 0.0, 1.0);
        let SpanningPlane::Spanned(plane) = spanning_plane(&a, &b) else {
            panic!("vectors are not parallel");
        };
        assert_eq!(plane.z_at(0.0, 0.0), None);
        for corner in plane.patch(&b) {
            assert!(corner.iter().all(|c| c.is_finite()));
            assert!(corner.y.abs() < 1e-12);
        }
    }

    #[test]
    fn axis_bound_uses_largest_component() {
        let vs = [Vector3::new(1.0, -7.5, 2.0), Vector3::new(3.0, 0.0, 0.0)];
        assert_eq!(axis_bound(&vs), 7.5);
        assert_eq!(axis_bound(&[Vector3::zeros()]), 1.0);
        assert_eq!(axis_bound(&[]), 1.0);
    }
}
