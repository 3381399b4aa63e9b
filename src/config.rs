use egui::Color32;


/// Window sizes, colours and camera defaults shared by the form and every
/// plot window it opens.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub form_size: [f32; 2],
    pub plot_size: [f32; 2],

    /// Input vectors cycle through this palette.
    pub vector_colors: Vec<Color32>,
    pub cross_color: Color32,
    pub plane_color: Color32,
    pub notice_color: Color32,
    pub text_color: Color32,
    pub grid_opacity: u8, // 0 is invisible, 255 is fully opaque
    pub grid_divisions: i32,

    pub view_yaw: f32,
    pub view_pitch: f32,
    pub view_zoom: f32,
    pub perspective: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            form_size: [400.0, 200.0],
            plot_size: [720.0, 560.0],
            vector_colors: vec![
                Color32::from_rgb(0x83, 0xB3, 0x66),
                Color32::from_rgb(0x8B, 0xC9, 0xD7),
                Color32::YELLOW,
            ],
            cross_color: Color32::from_rgb(220, 60, 60),
            plane_color: Color32::from_rgba_unmultiplied(150, 150, 150, 128),
            notice_color: Color32::RED,
            text_color: Color32::WHITE,
            grid_opacity: 30,
            grid_divisions: 4,
            view_yaw: 0.5,
            view_pitch: 0.3,
            view_zoom: 1.0,
            perspective: true,
        }
    }
}

impl ViewerConfig {
    pub fn vector_color(&self, index: usize) -> Color32 {
        if self.vector_colors.is_empty() {
            return self.text_color;
        }
        self.vector_colors[index % self.vector_colors.len()]
    }

    pub fn grid_color(&self) -> Color32 {
        Color32::from_rgba_unmultiplied(80, 140, 220, self.grid_opacity)
    }
}
