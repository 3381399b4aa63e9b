use eframe::egui;

use crate::config::ViewerConfig;
use crate::parse::{parse_vector_strict, ParseError};
use crate::render::{draw_scene, Camera};
use crate::scene::{Scene, Toggle, VisualizationState};


/// Parses both form fields into a fresh visualization with every toggle off.
pub fn submit(vector1: &str, vector2: &str) -> Result<VisualizationState, ParseError> {
    let v1 = parse_vector_strict(vector1)?;
    let v2 = parse_vector_strict(vector2)?;
    Ok(VisualizationState::new(vec![v1, v2]))
}


/// One open plot window. Owns its state; nothing is shared between windows.
pub struct PlotWindow {
    id: u64,
    state: VisualizationState,
    scene: Scene,
    camera: Camera,
    open: bool,
}

impl PlotWindow {
    pub fn new(id: u64, state: VisualizationState, config: &ViewerConfig) -> Self {
        let scene = state.redraw();
        Self {
            id,
            state,
            scene,
            camera: Camera::from_config(config),
            open: true,
        }
    }

    pub fn state(&self) -> &VisualizationState {
        &self.state
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self, toggle: Toggle) {
        self.scene = self.state.toggle(toggle);
    }

    fn title(&self) -> String {
        format!("Vector Visualization #{}", self.id)
    }

    fn show(&mut self, ctx: &egui::Context, config: &ViewerConfig) {
        let viewport_id = egui::ViewportId::from_hash_of(("plot_window", self.id));
        let builder = egui::ViewportBuilder::default()
            .with_title(self.title())
            .with_inner_size(config.plot_size);

        ctx.show_viewport_immediate(viewport_id, builder, |ctx, class| {
            if matches!(class, egui::ViewportClass::Embedded) {
                // Backend without multiple native windows
                let mut open = self.open;
                egui::Window::new(self.title())
                    .id(egui::Id::new(viewport_id))
                    .default_size(config.plot_size)
                    .open(&mut open)
                    .show(ctx, |ui| self.ui(ui, config));
                self.open &= open;
                return;
            }

            egui::CentralPanel::default().show(ctx, |ui| self.ui(ui, config));

            if ctx.input(|i| i.viewport().close_requested()) {
                self.open = false;
            }
        });

        if !self.open {
            log::info!("closed plot window #{}", self.id);
        }
    }

    fn ui(&mut self, ui: &mut egui::Ui, config: &ViewerConfig) {
        egui::SidePanel::left(egui::Id::new(("plot_controls", self.id)))
            .resizable(false)
            .show_inside(ui, |ui| {
                for toggle in Toggle::ALL {
                    let mut on = self.state.is_on(toggle);
                    if ui.checkbox(&mut on, toggle.label()).changed() {
                        self.toggle(toggle);
                    }
                }
                ui.separator();
                ui.checkbox(&mut self.camera.perspective, "Perspective");
                if ui.button("Reset view").clicked() {
                    self.camera = Camera::from_config(config);
                }
            });

        egui::CentralPanel::default().show_inside(ui, |ui| {
            let (rect, resp) = ui.allocate_exact_size(ui.available_size(), egui::Sense::drag());
            self.camera.handle_input(ui, &resp);

            let painter = ui.painter_at(rect);
            draw_scene(&painter, rect, &self.camera, &self.scene, config);
        });
    }
}


pub struct VectorApp {
    config: ViewerConfig,
    vector1: String,
    vector2: String,
    error: Option<String>,
    windows: Vec<PlotWindow>,
    next_id: u64,
}

impl Default for VectorApp {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}

impl VectorApp {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            vector1: String::new(),
            vector2: String::new(),
            error: None,
            windows: Vec::new(),
            next_id: 1,
        }
    }

    pub fn set_inputs(&mut self, vector1: &str, vector2: &str) {
        self.vector1 = vector1.to_owned();
        self.vector2 = vector2.to_owned();
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn windows(&self) -> &[PlotWindow] {
        &self.windows
    }

    /// Handles the Submit button. Returns whether a plot window was opened.
    pub fn submit(&mut self) -> bool {
        match submit(&self.vector1, &self.vector2) {
            Ok(state) => {
                let id = self.next_id;
                self.next_id += 1;
                log::info!("opening plot window #{} for {:?}", id, state.vectors());
                self.windows.push(PlotWindow::new(id, state, &self.config));
                self.error = None;
                true
            }
            Err(err) => {
                log::warn!("rejected submission ({:?}, {:?}): {}", self.vector1, self.vector2, err);
                self.error = Some(format!(
                    "Invalid vector components. Please enter valid numbers.\n\n{}",
                    err
                ));
                false
            }
        }
    }

    fn form_ui(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label("Vector 1 (x, y, z):");
            ui.text_edit_singleline(&mut self.vector1);
            ui.label("Vector 2 (x, y, z):");
            ui.text_edit_singleline(&mut self.vector2);
            ui.add_space(4.0);
            if ui.button("Submit").clicked() {
                self.submit();
            }
        });
    }

    fn error_ui(&mut self, ctx: &egui::Context) {
        let Some(message) = self.error.clone() else { return };

        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(4.0);
                if ui.button("OK").clicked() {
                    self.error = None;
                }
            });
    }
}


impl eframe::App for VectorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            // Modal: the form is inert while an error is shown
            ui.add_enabled_ui(self.error.is_none(), |ui| self.form_ui(ui));
        });
        self.error_ui(ctx);

        for window in &mut self.windows {
            window.show(ctx, &self.config);
        }
        self.windows.retain(PlotWindow::is_open);
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    #[test]
    fn submit_builds_state_with_all_toggles_off() {
        let state = submit("1,0,0", " 0, 1, 0 ").unwrap();
        assert_eq!(state.vectors(), &[Vector3::x(), Vector3::y()]);
        assert!(Toggle::ALL.iter().all(|t| !state.is_on(*t)));
    }

    #[test]
    fn submit_requires_three_components() {
        assert_eq!(
            submit("1,2", "1,2,3"),
            Err(ParseError::NotThreeComponents { found: 2 })
        );
        assert_eq!(
            submit("1,2,3", "1,2,3,4"),
            Err(ParseError::NotThreeComponents { found: 4 })
        );
    }

    #[test]
    fn invalid_input_opens_no_window() {
        let mut app = VectorApp::default();
        app.set_inputs("a,b,c", "1,2,3");

        assert!(!app.submit());
        assert!(app.windows().is_empty());
        assert!(app
            .error()
            .is_some_and(|e| e.starts_with("Invalid vector components. Please enter valid numbers.")));
    }

    #[test]
    fn every_submission_opens_an_independent_window() {
        let mut app = VectorApp::default();
        app.set_inputs("1,0,0", "0,1,0");
        assert!(app.submit());
        app.set_inputs("1,2,3", "2,4,6");
        assert!(app.submit());
        assert_eq!(app.windows().len(), 2);
        assert!(app.error().is_none());

        app.windows[0].toggle(Toggle::Plane);
        assert!(app.windows[0].state().show_plane);
        assert!(!app.windows[1].state().show_plane);
        assert!(app.windows[0].scene().plane.is_some());
    }

    #[test]
    fn successful_submit_clears_previous_error() {
        let mut app = VectorApp::default();
        app.set_inputs("1,2", "1,2,3");
        assert!(!app.submit());
        app.set_inputs("1,2,0", "1,2,3");
        assert!(app.submit());
        assert!(app.error().is_none());
        assert!(app.windows().iter().all(PlotWindow::is_open));
    }
}
