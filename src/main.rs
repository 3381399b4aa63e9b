use eframe::egui;

use vector_viz::app::VectorApp;
use vector_viz::config::ViewerConfig;


fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let config = ViewerConfig::default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Vector Visualization")
            .with_inner_size(config.form_size),
        ..Default::default()
    };

    log::info!("starting vector visualizer");
    eframe::run_native(
        "Vector Visualization",
        options,
        Box::new(|_cc| Box::new(VectorApp::new(config))),
    )
}
