use nalgebra::Vector3;

use crate::math::{axis_bound, DerivedGeometry, SpanningPlane};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Plane,
    CrossProduct,
    DotProduct,
}

impl Toggle {
    pub const ALL: [Toggle; 3] = [Toggle::Plane, Toggle::CrossProduct, Toggle::DotProduct];

    pub fn label(self) -> &'static str {
        match self {
            Toggle::Plane => "Plane",
            Toggle::CrossProduct => "Cross Product",
            Toggle::DotProduct => "Dot Product",
        }
    }
}


/// Vectors of one plot window plus its three display toggles.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualizationState {
    vectors: Vec<Vector3<f64>>,
    pub show_plane: bool,
    pub show_cross_product: bool,
    pub show_dot_product: bool,
}

impl VisualizationState {
    pub fn new(vectors: Vec<Vector3<f64>>) -> Self {
        Self {
            vectors,
            show_plane: false,
            show_cross_product: false,
            show_dot_product: false,
        }
    }

    pub fn vectors(&self) -> &[Vector3<f64>] {
        &self.vectors
    }

    pub fn is_on(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::Plane => self.show_plane,
            Toggle::CrossProduct => self.show_cross_product,
            Toggle::DotProduct => self.show_dot_product,
        }
    }

    /// Flips one flag and returns the redrawn scene.
    pub fn toggle(&mut self, toggle: Toggle) -> Scene {
        let flag = match toggle {
            Toggle::Plane => &mut self.show_plane,
            Toggle::CrossProduct => &mut self.show_cross_product,
            Toggle::DotProduct => &mut self.show_dot_product,
        };
        *flag = !*flag;
        log::debug!("{} -> {}", toggle.label(), *flag);
        self.redraw()
    }

    /// Only defined once there are at least two vectors.
    pub fn derived(&self) -> Option<DerivedGeometry> {
        match self.vectors.as_slice() {
            [a, b, ..] => Some(DerivedGeometry::from_pair(a, b)),
            _ => None,
        }
    }

    pub fn redraw(&self) -> Scene {
        let mut scene = Scene {
            bound: axis_bound(&self.vectors),
            arrows: self
                .vectors
                .iter()
                .enumerate()
                .map(|(i, v)| Arrow { tip: *v, kind: ArrowKind::Input(i) })
                .collect(),
            plane: None,
            captions: Vec::new(),
        };

        let Some(derived) = self.derived() else {
            return scene;
        };

        if self.show_plane {
            match derived.plane {
                SpanningPlane::Spanned(plane) => {
                    scene.plane = Some(plane.patch(&self.vectors[1]));
                }
                SpanningPlane::Degenerate => scene.captions.push(Caption {
                    text: "No plane exists".to_owned(),
                    placement: Placement::Center,
                }),
            }
        }

        if self.show_cross_product {
            scene.arrows.push(Arrow { tip: derived.cross, kind: ArrowKind::CrossProduct });
        }

        if self.show_dot_product {
            scene.captions.push(Caption {
                text: format!("Dot Product: {}", derived.dot),
                placement: Placement::BottomLeft,
            });
        }

        scene
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKind {
    /// Index into the state's vectors.
    Input(usize),
    CrossProduct,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    pub tip: Vector3<f64>,
    pub kind: ArrowKind,
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Centre of the plot, drawn as a warning.
    Center,
    BottomLeft,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    pub text: String,
    pub placement: Placement,
}


/// What one redraw puts on screen. Arrows start at the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Half-width of the axis cube centred on the origin.
    pub bound: f64,
    pub arrows: Vec<Arrow>,
    pub plane: Option<[Vector3<f64>; 4]>,
    pub captions: Vec<Caption>,
}
