use egui::Color32;

/// Smallest brush size the UI offers
pub const MIN_SIZE: u32 = 1;
/// Largest brush size the UI offers
pub const MAX_SIZE: u32 = 20;

/// The fixed swatch palette shown in the tools panel
pub const PALETTE: [Color32; 10] = [
    Color32::BLACK,
    Color32::from_rgb(0xe7, 0x4c, 0x3c), // red
    Color32::from_rgb(0xe6, 0x7e, 0x22), // orange
    Color32::from_rgb(0xf1, 0xc4, 0x0f), // yellow
    Color32::from_rgb(0x2e, 0xcc, 0x71), // green
    Color32::from_rgb(0x34, 0x98, 0xdb), // blue
    Color32::from_rgb(0x9b, 0x59, 0xb6), // purple
    Color32::from_rgb(0x8b, 0x5a, 0x2b), // brown
    Color32::from_rgb(0xff, 0x9f, 0xf3), // pink
    Color32::WHITE,
];

/// Current brush configuration, read on every stroke-paint operation
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Brush {
    color: Color32,
    size: u32,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            color: PALETTE[0],
            size: 4,
        }
    }
}

impl Brush {
    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Size is clamped to the declared 1-20 range no matter where it comes from
    pub fn set_size(&mut self, size: u32) {
        self.size = size.clamp(MIN_SIZE, MAX_SIZE);
    }

    /// The stroke width painted for this brush, in points
    pub fn width(&self) -> f32 {
        self.size as f32
    }
}
