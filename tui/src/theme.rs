//! Color theme and glyphs for the landing page.
//!
//! Uses a Kanagawa Wave palette by default with an optional high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use marquee_types::FeatureIcon;
use marquee_types::ui::UiOptions;

/// Kanagawa Wave color palette constants.
mod colors {
    use super::Color;

    // === Backgrounds (Sumi Ink) ===
    pub const BG_DARK: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const BG_PANEL: Color = Color::Rgb(31, 31, 40); // sumiInk3
    pub const BG_HIGHLIGHT: Color = Color::Rgb(42, 42, 55); // sumiInk4
    pub const BG_BORDER: Color = Color::Rgb(84, 84, 109); // sumiInk6

    // === Foregrounds (Fuji) ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_SECONDARY: Color = Color::Rgb(200, 192, 147); // oldWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray

    // === Brand ===
    pub const PRIMARY: Color = Color::Rgb(149, 127, 184); // oniViolet
    pub const BLUE: Color = Color::Rgb(126, 156, 216); // crystalBlue
    pub const CYAN: Color = Color::Rgb(127, 180, 202); // springBlue
    pub const GREEN: Color = Color::Rgb(152, 187, 108); // springGreen
    pub const YELLOW: Color = Color::Rgb(230, 195, 132); // carpYellow
    pub const ORANGE: Color = Color::Rgb(255, 160, 102); // surimiOrange
}

/// Resolved theme palette used by the renderer.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub blue: Color,
    pub green: Color,
    pub star: Color,
    pub peach: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_highlight: colors::BG_HIGHLIGHT,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            primary: colors::PRIMARY,
            accent: colors::CYAN,
            blue: colors::BLUE,
            green: colors::GREEN,
            star: colors::YELLOW,
            peach: colors::ORANGE,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,
            primary: Color::White,
            accent: Color::Cyan,
            blue: Color::Blue,
            green: Color::Green,
            star: Color::Yellow,
            peach: Color::Yellow,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for icons, stars and markers.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub star_full: &'static str,
    pub star_empty: &'static str,
    pub check: &'static str,
    pub dot_active: &'static str,
    pub dot_inactive: &'static str,
    pub arrow_left: &'static str,
    pub arrow_right: &'static str,
    pub menu: &'static str,
    pub close: &'static str,
    pub selected: &'static str,
    pub bullet: &'static str,
    pub quote: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            star_full: "*",
            star_empty: ".",
            check: "+",
            dot_active: "#",
            dot_inactive: "-",
            arrow_left: "<",
            arrow_right: ">",
            menu: "=",
            close: "x",
            selected: ">",
            bullet: "*",
            quote: "\"",
        }
    } else {
        Glyphs {
            star_full: "★",
            star_empty: "☆",
            check: "✓",
            dot_active: "●",
            dot_inactive: "○",
            arrow_left: "‹",
            arrow_right: "›",
            menu: "☰",
            close: "✕",
            selected: "▸",
            bullet: "•",
            quote: "“",
        }
    }
}

/// Icon for a feature card.
#[must_use]
pub fn feature_icon(icon: FeatureIcon, options: UiOptions) -> &'static str {
    if options.ascii_only {
        match icon {
            FeatureIcon::Zap => "[!]",
            FeatureIcon::Rocket => "[^]",
            FeatureIcon::Shield => "[#]",
            FeatureIcon::Gauge => "[%]",
            FeatureIcon::Code => "[<>]",
            FeatureIcon::Users => "[@]",
        }
    } else {
        match icon {
            FeatureIcon::Zap => "⚡",
            FeatureIcon::Rocket => "🚀",
            FeatureIcon::Shield => "🛡",
            FeatureIcon::Gauge => "◔",
            FeatureIcon::Code => "⟨⟩",
            FeatureIcon::Users => "👥",
        }
    }
}

/// Pre-defined styles for common page elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn brand(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn headline(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn body(palette: &Palette) -> Style {
        Style::default().fg(palette.text_secondary)
    }

    #[must_use]
    pub fn muted(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn button_primary(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn button_secondary(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .bg(palette.bg_highlight)
    }

    #[must_use]
    pub fn nav_link(palette: &Palette, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(palette.peach)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(palette.text_secondary)
        }
    }

    #[must_use]
    pub fn statistic(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }
}
