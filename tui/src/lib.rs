//! Terminal rendering for Marquee using ratatui.

mod effects;
mod input;
mod sections;
mod theme;
mod wrap;

pub use effects::{apply_slide_frame, fade_style, slide_columns};
pub use input::{InputPump, apply_event, handle_events};
pub use sections::{Document, Theme, render_document};
pub use theme::{Glyphs, Palette, feature_icon, glyphs, palette, styles};
pub use wrap::wrap;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use marquee_engine::LandingPage;
use marquee_types::PageContent;

use self::wrap::display_width;

/// Rows taken by the fixed navigation bar.
pub const NAV_HEIGHT: u16 = 2;
const HINT_HEIGHT: u16 = 1;
const LINK_SPACING: usize = 3;

/// Whether the navigation links no longer fit beside the brand on one row.
#[must_use]
pub fn nav_is_compact(content: &PageContent, width: u16) -> bool {
    let brand = display_width(&content.company_name) + 4;
    let links: usize = content
        .navigation
        .iter()
        .map(|link| display_width(&link.label) + LINK_SPACING)
        .sum();
    brand + links + 2 > usize::from(width)
}

/// Main draw function.
///
/// Lays the page out for the current width, reports the layout back to the
/// page (which drives the counters' visibility), then draws the scrolled window.
pub fn draw(frame: &mut Frame, page: &mut LandingPage) {
    let theme = Theme::new(page.ui_options());
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.palette.bg_dark)),
        frame.area(),
    );

    let [nav_area, body_area, hint_area] = Layout::vertical([
        Constraint::Length(NAV_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(HINT_HEIGHT),
    ])
    .areas(frame.area());

    let document = render_document(page, body_area.width, &theme);
    page.apply_layout(document.layout.clone(), u32::from(body_area.height));
    draw_document(frame, &document, page.scroll(), body_area);

    let compact = nav_is_compact(page.content(), nav_area.width);
    page.set_compact_nav(compact);
    draw_nav(frame, page, nav_area, compact, &theme);
    draw_hints(frame, page, hint_area, &theme);

    if compact && page.menu_open() {
        draw_menu(frame, page, nav_area, body_area, &theme);
    }
}

fn draw_document(frame: &mut Frame, document: &Document, scroll: u32, area: Rect) {
    let Ok(top) = u16::try_from(scroll) else {
        return;
    };
    let visible = area
        .height
        .min(document.buffer.area.height.saturating_sub(top));
    if visible == 0 {
        return;
    }

    let window = Rect::new(0, top, document.buffer.area.width, visible);
    let buffer = frame.buffer_mut();
    for row in 0..window.height {
        for col in 0..window.width.min(area.width) {
            let Some(cell) = document.buffer.cell((col, top + row)) else {
                continue;
            };
            if let Some(target) = buffer.cell_mut((area.x + col, area.y + row)) {
                let bg = target.bg;
                *target = cell.clone();
                if target.bg == Color::Reset {
                    target.bg = bg;
                }
            }
        }
    }
}

fn draw_nav(frame: &mut Frame, page: &LandingPage, area: Rect, compact: bool, theme: &Theme) {
    let palette = &theme.palette;
    let content = page.content();

    let mut spans = vec![
        Span::styled(format!(" {} ", theme.glyphs.dot_active), styles::brand(palette)),
        Span::styled(content.company_name.clone(), styles::brand(palette)),
    ];

    let right: Vec<Span> = if compact {
        let glyph = if page.menu_open() {
            theme.glyphs.close
        } else {
            theme.glyphs.menu
        };
        vec![Span::styled(
            format!("{glyph} Menu "),
            styles::nav_link(palette, page.menu_open()),
        )]
    } else {
        content
            .navigation
            .iter()
            .enumerate()
            .flat_map(|(index, link)| {
                [
                    Span::styled(
                        link.label.clone(),
                        styles::nav_link(palette, page.focused_link() == Some(index)),
                    ),
                    Span::raw(" ".repeat(LINK_SPACING)),
                ]
            })
            .collect()
    };

    let used: usize = spans
        .iter()
        .chain(right.iter())
        .map(|span| display_width(&span.content))
        .sum();
    let fill = usize::from(area.width).saturating_sub(used);
    spans.push(Span::raw(" ".repeat(fill)));
    spans.extend(right);

    let nav = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(palette.bg_border))
            .style(Style::default().bg(palette.bg_panel)),
    );
    frame.render_widget(nav, area);
}

fn draw_menu(frame: &mut Frame, page: &LandingPage, nav: Rect, body: Rect, theme: &Theme) {
    let content = page.content();
    let widest = content
        .navigation
        .iter()
        .map(|link| display_width(&link.label))
        .max()
        .unwrap_or(0);
    let width = u16::try_from(widest + 6)
        .unwrap_or(u16::MAX)
        .min(body.width);
    let height = u16::try_from(content.navigation.len() + 2)
        .unwrap_or(u16::MAX)
        .min(body.height);
    let area = Rect {
        x: nav.right().saturating_sub(width),
        y: body.y,
        width,
        height,
    };

    let lines: Vec<Line> = content
        .navigation
        .iter()
        .enumerate()
        .map(|(index, link)| {
            let focused = page.focused_link() == Some(index);
            let marker = if focused { theme.glyphs.selected } else { " " };
            Line::from(vec![
                Span::styled(format!("{marker} "), styles::nav_link(&theme.palette, focused)),
                Span::styled(link.label.clone(), styles::nav_link(&theme.palette, focused)),
            ])
        })
        .collect();

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.palette.primary))
                .style(Style::default().bg(theme.palette.bg_panel)),
        ),
        area,
    );
}

fn draw_hints(frame: &mut Frame, page: &LandingPage, area: Rect, theme: &Theme) {
    let palette = &theme.palette;
    let mut spans = Vec::new();
    let mut hint = |key: &str, label: &str| {
        spans.push(Span::styled(format!(" {key}"), styles::nav_link(palette, true)));
        spans.push(Span::styled(format!(" {label} "), styles::key_hint(palette)));
    };
    let (sideways, vertical) = if theme.options.ascii_only {
        ("h/l", "j/k")
    } else {
        ("←/→", "↑/↓")
    };
    if page.carousel().is_some() {
        hint(sideways, "slides");
    }
    hint(vertical, "scroll");
    hint("Tab", "links");
    hint("Enter", "go");
    hint("m", "menu");
    hint("q", "quit");

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.bg_panel)),
        area,
    );
}
