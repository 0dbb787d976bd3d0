use ratatui::style::{Color, Modifier, Style};

/// Botanical palette.
///
/// Base aesthetic:
/// - soft off-white text on a near-black leaf-green background
/// - leaf green for focus and success
/// - petal violet for titles and the predicted species
pub struct Theme;

impl Theme {
    // Core palette
    pub const BG: Color = Color::Rgb(14, 18, 14);
    pub const FG: Color = Color::Rgb(224, 229, 224);
    pub const FG_DIM: Color = Color::Rgb(150, 162, 150);
    pub const FG_MUTED: Color = Color::Rgb(96, 106, 96);

    // Accents
    pub const LEAF: Color = Color::Rgb(118, 202, 118);
    pub const PETAL: Color = Color::Rgb(206, 130, 219);
    pub const ERROR_RED: Color = Color::Rgb(235, 92, 92);

    /// Default full-screen style.
    pub fn base() -> Style {
        Style::default().fg(Self::FG).bg(Self::BG)
    }

    /// Panel borders.
    pub fn border() -> Style {
        Style::default().fg(Self::FG_MUTED).bg(Self::BG)
    }

    /// Titles (bold petal violet).
    pub fn title() -> Style {
        Style::default()
            .fg(Self::PETAL)
            .add_modifier(Modifier::BOLD)
    }

    /// Regular text.
    pub fn text() -> Style {
        Style::default().fg(Self::FG)
    }

    /// Secondary/dim text.
    pub fn dim() -> Style {
        Style::default().fg(Self::FG_DIM)
    }

    /// Muted/disabled text.
    pub fn muted() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    /// The focused input field.
    pub fn focus() -> Style {
        Style::default()
            .fg(Self::LEAF)
            .add_modifier(Modifier::BOLD)
    }

    pub fn ok() -> Style {
        Style::default()
            .fg(Self::LEAF)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::ERROR_RED)
            .add_modifier(Modifier::BOLD)
    }
}
