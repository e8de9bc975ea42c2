use ratatui::style::Color;

// Brand colors, carried over from the original palette
pub const PRIMARY_PURPLE: Color = Color::Rgb(102, 0, 204); // #6600CC
pub const ACCENT_BLUE: Color = Color::Rgb(102, 153, 255); // #6699FF

// Category accents
pub const CAT_BLUE: Color = Color::Rgb(75, 123, 229); // #4B7BE5
pub const CAT_GREEN: Color = Color::Rgb(16, 185, 129); // #10B981
pub const CAT_ROSE: Color = Color::Rgb(244, 63, 94); // #F43F5E
pub const CAT_VIOLET: Color = Color::Rgb(139, 92, 246); // #8B5CF6
pub const CAT_AMBER: Color = Color::Rgb(245, 158, 11); // #F59E0B
pub const CAT_INDIGO: Color = Color::Rgb(99, 102, 241); // #6366F1

// UI colors
pub const TEXT_DIM: Color = Color::Rgb(136, 136, 136); // #888888
pub const TEXT_WHITE: Color = Color::Rgb(255, 255, 255); // #FFFFFF
pub const DANGER_RED: Color = Color::Rgb(239, 68, 68); // Delete marker

/// Accent color for a category card. Unknown (user-defined) categories fall
/// back to the brand purple.
pub fn category_accent(name: &str) -> Color {
    match name {
        "General" => CAT_BLUE,
        "Food" => CAT_GREEN,
        "Sport" => CAT_ROSE,
        "Place" => CAT_VIOLET,
        "Color" => CAT_AMBER,
        "Mood" => ACCENT_BLUE,
        "Custom" => CAT_INDIGO,
        _ => PRIMARY_PURPLE,
    }
}
