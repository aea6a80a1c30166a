use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border: Color,
    pub bar_bg: Color,
    pub pole: Color,
    pub base: Color,
    pub discs: [Color; 6], // Cycled by disc size
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border: Color::Rgb(108, 112, 134), // Grey border
    bar_bg: Color::Rgb(50, 50, 70),    // Slightly lighter BG for the status bar
    pole: Color::Rgb(147, 153, 178),
    base: Color::Rgb(249, 226, 175), // Yellow
    discs: [
        Color::Rgb(243, 139, 168), // Red
        Color::Rgb(250, 179, 135), // Orange
        Color::Rgb(249, 226, 175), // Yellow
        Color::Rgb(166, 227, 161), // Green
        Color::Rgb(137, 180, 250), // Blue
        Color::Rgb(203, 166, 247), // Mauve
    ],
};

impl Theme {
    pub fn disc_color(&self, disc: u32) -> Color {
        self.discs[(disc as usize).saturating_sub(1) % self.discs.len()]
    }
}
