use nalgebra::{Matrix3, Vector3};

use crate::config::ViewerConfig;
use crate::scene::{ArrowKind, Placement, Scene};


/// Orbit camera of a plot window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub yaw: f32,
    pub pitch: f32,
    pub zoom: f32,
    pub perspective: bool,
}

impl Camera {
    pub fn from_config(config: &ViewerConfig) -> Self {
        Self {
            yaw: config.view_yaw,
            pitch: config.view_pitch,
            zoom: config.view_zoom,
            perspective: config.perspective,
        }
    }

    pub fn view_matrix(&self) -> Matrix3<f32> {
        let (cr, sr) = (self.yaw.cos(), self.yaw.sin());
        let (cp, sp) = (self.pitch.cos(), self.pitch.sin());
        Matrix3::new(
            cr, 0.0, sr,
            sr * sp, cp, -cr * sp,
            -sr * cp, sp, cr * cp,
        )
    }

    /// Drag to orbit, scroll to zoom.
    pub fn handle_input(&mut self, ui: &egui::Ui, resp: &egui::Response) {
        if resp.dragged_by(egui::PointerButton::Primary) {
            self.yaw += resp.drag_delta().x * 0.01;
            self.pitch = (self.pitch + resp.drag_delta().y * 0.01).clamp(-1.5, 1.5);
        }
        if resp.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            self.zoom = (self.zoom * (1.0 + scroll * 0.001)).clamp(0.1, 10.0);
        }
    }

    /// Maps world coordinates into `rect` so that the cube `[-bound, bound]^3`
    /// fits the shorter side.
    pub fn projector(&self, rect: egui::Rect, bound: f64) -> impl Fn(Vector3<f64>) -> egui::Pos2 {
        let view_mat = self.view_matrix();
        let perspective = self.perspective;
        let base_scale = rect.width().min(rect.height()) * 0.3 * self.zoom;
        let inv_bound = 1.0 / bound.max(f64::EPSILON);
        let center = rect.center();

        move |v: Vector3<f64>| {
            let v_v = view_mat * (v * inv_bound).cast::<f32>();
            let factor = if perspective {
                (base_scale * 4.0) / (4.0 - v_v.z).max(0.1)
            } else {
                base_scale
            };
            center + egui::vec2(v_v.x * factor, -v_v.y * factor)
        }
    }
}


pub fn draw_arrow(painter: &egui::Painter, start: egui::Pos2, end: egui::Pos2, color: egui::Color32) {
    let vec = end - start;
    let len = vec.length();
    if len < 1.0 { return; }

    painter.line_segment([start, end], egui::Stroke::new(2.5, color));

    let head_len = (len * 0.15).clamp(5.0, 15.0);
    let dir = vec / len;
    let perp = egui::vec2(-dir.y, dir.x) * (head_len * 0.4);
    let base = end - dir * head_len;

    painter.add(egui::Shape::convex_polygon(
        vec![end, base + perp, base - perp],
        color,
        egui::Stroke::NONE,
    ));
}


/// Axis lines through the origin, labelled at their positive end.
pub fn draw_axes_3d(painter: &egui::Painter, project: &impl Fn(Vector3<f64>) -> egui::Pos2, bound: f64) {
    let stroke = egui::Stroke::new(1.0, egui::Color32::GRAY);
    for (i, name) in ["X", "Y", "Z"].into_iter().enumerate() {
        let mut start = Vector3::zeros();
        let mut end = Vector3::zeros();
        start[i] = -bound;
        end[i] = bound;
        painter.line_segment([project(start), project(end)], stroke);

        end[i] = bound * 1.1;
        painter.text(
            project(end),
            egui::Align2::CENTER_CENTER,
            name,
            egui::FontId::proportional(13.0),
            egui::Color32::LIGHT_GRAY,
        );
    }
}


/// Reference grid on the XY, XZ and YZ planes spanning `[-bound, bound]`.
pub fn draw_grid_3d(
    painter: &egui::Painter,
    project: &impl Fn(Vector3<f64>) -> egui::Pos2,
    bound: f64,
    divisions: i32,
    color: egui::Color32,
) {
    if divisions <= 0 { return; }
    let stroke = egui::Stroke::new(1.0, color);
    let s = bound;

    for i in -divisions..=divisions {
        let t = bound * i as f64 / divisions as f64;
        // XY
        painter.line_segment([project(Vector3::new(t, -s, 0.0)), project(Vector3::new(t, s, 0.0))], stroke);
        painter.line_segment([project(Vector3::new(-s, t, 0.0)), project(Vector3::new(s, t, 0.0))], stroke);
        // XZ
        painter.line_segment([project(Vector3::new(t, 0.0, -s)), project(Vector3::new(t, 0.0, s))], stroke);
        painter.line_segment([project(Vector3::new(-s, 0.0, t)), project(Vector3::new(s, 0.0, t))], stroke);
        // YZ
        painter.line_segment([project(Vector3::new(0.0, t, -s)), project(Vector3::new(0.0, t, s))], stroke);
        painter.line_segment([project(Vector3::new(0.0, -s, t)), project(Vector3::new(0.0, s, t))], stroke);
    }
}


pub fn draw_plane_patch(
    painter: &egui::Painter,
    project: &impl Fn(Vector3<f64>) -> egui::Pos2,
    corners: &[Vector3<f64>; 4],
    color: egui::Color32,
) {
    let poly: Vec<egui::Pos2> = corners.iter().map(|c| project(*c)).collect();
    painter.add(egui::Shape::convex_polygon(
        poly,
        color,
        egui::Stroke::new(1.0, egui::Color32::GRAY),
    ));
}


/// Paints a redrawn scene into `rect`.
pub fn draw_scene(painter: &egui::Painter, rect: egui::Rect, camera: &Camera, scene: &Scene, config: &ViewerConfig) {
    let project = camera.projector(rect, scene.bound);

    draw_grid_3d(painter, &project, scene.bound, config.grid_divisions, config.grid_color());
    draw_axes_3d(painter, &project, scene.bound);

    if let Some(corners) = &scene.plane {
        draw_plane_patch(painter, &project, corners, config.plane_color);
    }

    let origin = project(Vector3::zeros());
    for arrow in &scene.arrows {
        let color = match arrow.kind {
            ArrowKind::Input(i) => config.vector_color(i),
            ArrowKind::CrossProduct => config.cross_color,
        };
        draw_arrow(painter, origin, project(arrow.tip), color);
    }

    painter.text(
        egui::pos2(rect.center().x, rect.top() + 16.0),
        egui::Align2::CENTER_CENTER,
        "Vector Visualization",
        egui::FontId::proportional(16.0),
        config.text_color,
    );

    for caption in &scene.captions {
        let (pos, align, color) = match caption.placement {
            Placement::Center => (rect.center(), egui::Align2::CENTER_CENTER, config.notice_color),
            Placement::BottomLeft => (
                egui::pos2(rect.left() + rect.width() * 0.1, rect.bottom() - rect.height() * 0.1),
                egui::Align2::LEFT_CENTER,
                config.text_color,
            ),
        };
        painter.text(pos, align, &caption.text, egui::FontId::proportional(14.0), color);
    }
}
