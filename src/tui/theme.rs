use ratatui::style::Color;

// Segment colors
pub const SEGMENT_FILLED: Color = Color::Rgb(124, 175, 194); // #7CAFC2
pub const SEGMENT_EMPTY: Color = Color::Rgb(88, 88, 88);     // #585858

// UI colors
pub const ACCENT_MINT: Color = Color::Rgb(161, 193, 129);    // #A1C181
pub const TEXT_DIM: Color = Color::Rgb(136, 136, 136);       // #888888
pub const TEXT_WHITE: Color = Color::Rgb(255, 255, 255);     // #FFFFFF
