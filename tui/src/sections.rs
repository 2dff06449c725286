//! Page sections rendered into an offscreen document buffer.
//!
//! Every section is drawn into its own [`Buffer`] at the document width and
//! then stacked. The stacked document is taller than the terminal; the
//! caller copies the scrolled window into the frame.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Padding, Paragraph, Widget},
};

use marquee_engine::{Carousel, Counter, LandingPage, PageLayout, RowSpan, Section};
use marquee_types::ui::UiOptions;
use marquee_types::{CtaCopy, Feature, FooterColumn, HeroCopy, Statistic, Testimonial};

use crate::effects::{apply_slide_frame, fade_style};
use crate::theme::{Glyphs, Palette, feature_icon, glyphs, palette, styles};
use crate::wrap::wrap;

const MAX_CONTENT_WIDTH: u16 = 110;
const SECTION_GAP: u16 = 2;
const GRID_GAP: u16 = 2;
const CARD_MAX_WIDTH: u16 = 72;

const FEATURES_TITLE: &str = "Powerful Features Built for Success";
const FEATURES_SUBTITLE: &str =
    "Everything you need to build, deploy, and scale modern web applications with confidence";
const STATISTICS_TITLE: &str = "Trusted by Industry Leaders";
const STATISTICS_SUBTITLE: &str = "Join thousands of teams building the future";
const TESTIMONIALS_TITLE: &str = "Loved by Teams Worldwide";
const TESTIMONIALS_SUBTITLE: &str = "See what our customers have to say about their experience";
const HERO_BADGE: &str = "Welcome to the future of web development";
const FOOTER_TAGLINE: &str = "Building the future of web development, one innovation at a time.";

/// Palette, glyphs and options resolved once per frame.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub palette: Palette,
    pub glyphs: Glyphs,
    pub options: UiOptions,
}

impl Theme {
    #[must_use]
    pub fn new(options: UiOptions) -> Self {
        Self {
            palette: palette(options),
            glyphs: glyphs(options),
            options,
        }
    }
}

/// The whole page, laid out for one width.
#[derive(Debug)]
pub struct Document {
    pub buffer: Buffer,
    pub layout: PageLayout,
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// Copy `src` into `dst` with its top-left at `(x, y)`.
///
/// Cells outside `dst` are dropped. A source cell without a background keeps
/// the destination's.
pub fn blit(src: &Buffer, dst: &mut Buffer, x: u16, y: u16) {
    for row in 0..src.area.height {
        for col in 0..src.area.width {
            let Some(cell) = src.cell((src.area.x + col, src.area.y + row)) else {
                continue;
            };
            if let Some(target) = dst.cell_mut((x.saturating_add(col), y.saturating_add(row))) {
                let bg = if cell.bg == Color::Reset { target.bg } else { cell.bg };
                *target = cell.clone();
                target.bg = bg;
            }
        }
    }
}

fn lines_buffer(lines: Vec<Line<'static>>, width: u16, alignment: Alignment) -> Buffer {
    let area = Rect::new(0, 0, width, to_u16(lines.len()));
    let mut buffer = Buffer::empty(area);
    Paragraph::new(lines)
        .alignment(alignment)
        .render(area, &mut buffer);
    buffer
}

fn stack(parts: &[Buffer], width: u16) -> Buffer {
    let height = parts.iter().map(|part| part.area.height).sum();
    let mut buffer = Buffer::empty(Rect::new(0, 0, width, height));
    let mut top = 0;
    for part in parts {
        blit(part, &mut buffer, 0, top);
        top += part.area.height;
    }
    buffer
}

fn styled_wrap(text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    wrap(text, width)
        .into_iter()
        .map(|line| Line::from(Span::styled(line, style)))
        .collect()
}

fn heading(title: &str, subtitle: &str, width: u16, theme: &Theme) -> Buffer {
    let inner = usize::from(width.saturating_sub(4));
    let mut lines = styled_wrap(title, inner, styles::headline(&theme.palette));
    lines.extend(styled_wrap(subtitle, inner, styles::muted(&theme.palette)));
    lines.push(Line::default());
    lines_buffer(lines, width, Alignment::Center)
}

fn button_row(primary: &str, secondary: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {primary} {} ", theme.glyphs.arrow_right),
            styles::button_primary(&theme.palette),
        ),
        Span::raw("   "),
        Span::styled(
            format!(" {secondary} "),
            styles::button_secondary(&theme.palette),
        ),
    ])
}

fn grid_columns(width: u16, wide: u16, medium: u16, max: usize) -> usize {
    let columns = if width >= wide {
        max
    } else if width >= medium {
        2
    } else {
        1
    };
    columns.min(max).max(1)
}

/// Lay items out as bordered cards in `columns` columns.
///
/// Returns the grid buffer and each card's rect within it.
fn card_grid<T>(
    items: &[T],
    columns: usize,
    width: u16,
    border: Style,
    build: impl Fn(&T, usize) -> Vec<Line<'static>>,
) -> (Buffer, Vec<Rect>) {
    let columns = columns.max(1);
    let column_count = to_u16(columns);
    let col_width = width.saturating_sub(GRID_GAP * (column_count - 1)) / column_count;
    let inner = usize::from(col_width.saturating_sub(4));
    let contents: Vec<Vec<Line<'static>>> = items.iter().map(|item| build(item, inner)).collect();

    let mut rects = Vec::with_capacity(contents.len());
    let mut top: u16 = 0;
    for row in contents.chunks(columns) {
        let height = to_u16(row.iter().map(Vec::len).max().unwrap_or(0)).saturating_add(2);
        for col in 0..row.len() {
            let x = to_u16(col) * (col_width + GRID_GAP);
            rects.push(Rect::new(x, top, col_width, height));
        }
        top = top.saturating_add(height + 1);
    }
    let total = top.saturating_sub(1);

    let mut buffer = Buffer::empty(Rect::new(0, 0, width, total));
    for (lines, rect) in contents.into_iter().zip(&rects) {
        Paragraph::new(lines)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(border)
                    .padding(Padding::horizontal(1)),
            )
            .render(*rect, &mut buffer);
    }
    (buffer, rects)
}

fn hero(copy: &HeroCopy, width: u16, theme: &Theme) -> Buffer {
    let inner = usize::from(width.saturating_sub(4).min(CARD_MAX_WIDTH));
    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            format!("{} {HERO_BADGE}", theme.glyphs.bullet),
            Style::default().fg(theme.palette.primary),
        )),
        Line::default(),
    ];
    lines.extend(styled_wrap(
        &copy.headline,
        inner,
        styles::headline(&theme.palette).add_modifier(Modifier::UNDERLINED),
    ));
    lines.push(Line::default());
    lines.extend(styled_wrap(&copy.subheading, inner, styles::body(&theme.palette)));
    lines.push(Line::default());
    lines.push(button_row(&copy.primary_cta, &copy.secondary_cta, theme));
    lines.push(Line::default());
    lines_buffer(lines, width, Alignment::Center)
}

fn features(items: &[Feature], width: u16, theme: &Theme) -> Buffer {
    let columns = grid_columns(width, 96, 60, 3);
    let (grid, _) = card_grid(
        items,
        columns,
        width,
        Style::default().fg(theme.palette.bg_border),
        |feature, inner| {
            let mut lines = vec![
                Line::from(vec![
                    Span::styled(
                        feature_icon(feature.icon, theme.options),
                        Style::default().fg(theme.palette.accent),
                    ),
                    Span::raw(" "),
                    Span::styled(feature.title.clone(), styles::headline(&theme.palette)),
                ]),
                Line::default(),
            ];
            lines.extend(styled_wrap(
                &feature.description,
                inner,
                styles::muted(&theme.palette),
            ));
            lines
        },
    );
    stack(
        &[heading(FEATURES_TITLE, FEATURES_SUBTITLE, width, theme), grid],
        width,
    )
}

/// Statistics section plus each card's span relative to the section top.
fn statistics(
    items: &[Statistic],
    counters: &[Counter],
    width: u16,
    theme: &Theme,
) -> (Buffer, Vec<RowSpan>) {
    let header = heading(STATISTICS_TITLE, STATISTICS_SUBTITLE, width, theme);
    let columns = grid_columns(width, 80, 40, 4);
    let cards: Vec<(String, &str)> = items
        .iter()
        .enumerate()
        .map(|(index, stat)| {
            let shown = counters
                .get(index)
                .map_or_else(|| format!("{}0{}", stat.prefix, stat.suffix), Counter::display);
            (shown, stat.label.as_str())
        })
        .collect();

    let (grid, rects) = card_grid(
        &cards,
        columns,
        width,
        Style::default().fg(theme.palette.bg_border),
        |(shown, label), _| {
            vec![
                Line::from(Span::styled(shown.clone(), styles::statistic(&theme.palette)))
                    .centered(),
                Line::from(Span::styled((*label).to_string(), styles::muted(&theme.palette)))
                    .centered(),
            ]
        },
    );

    let offset = u32::from(header.area.height);
    let spans = rects
        .iter()
        .map(|rect| RowSpan::new(offset + u32::from(rect.y), u32::from(rect.height)))
        .collect();
    (stack(&[header, grid], width), spans)
}

fn testimonial_lines(testimonial: &Testimonial, inner: usize, theme: &Theme) -> Vec<Line<'static>> {
    let stars = usize::from(testimonial.rating.stars());
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                theme.glyphs.star_full.repeat(stars),
                Style::default().fg(theme.palette.star),
            ),
            Span::styled(
                theme.glyphs.star_empty.repeat(5usize.saturating_sub(stars)),
                styles::muted(&theme.palette),
            ),
        ]),
        Line::default(),
    ];
    let quote = format!("{}{}", theme.glyphs.quote, testimonial.quote);
    lines.extend(styled_wrap(
        &quote,
        inner,
        styles::body(&theme.palette).add_modifier(Modifier::ITALIC),
    ));
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(
            format!("({})", testimonial.initials()),
            Style::default()
                .fg(theme.palette.bg_dark)
                .bg(theme.palette.primary),
        ),
        Span::raw(" "),
        Span::styled(testimonial.name.clone(), styles::headline(&theme.palette)),
    ]));
    lines.push(Line::from(Span::styled(
        testimonial.title.clone(),
        styles::muted(&theme.palette),
    )));
    lines
}

fn testimonials(carousel: Option<&Carousel>, width: u16, theme: &Theme) -> Buffer {
    let header = heading(TESTIMONIALS_TITLE, TESTIMONIALS_SUBTITLE, width, theme);
    let Some(carousel) = carousel else {
        return header;
    };

    let card_width = width.min(CARD_MAX_WIDTH);
    let inner = usize::from(card_width.saturating_sub(4));
    // Tallest slide sets the card height so the page does not jump.
    let card_height = carousel
        .slides()
        .iter()
        .map(|slide| testimonial_lines(slide, inner, theme).len())
        .max()
        .map_or(0, |rows| to_u16(rows).saturating_add(2));

    let mut track = Buffer::empty(Rect::new(0, 0, width, card_height));
    let frame = carousel.frame();
    let base = Rect::new((width - card_width) / 2, 0, card_width, card_height);
    if let (Some(slide), Some(rect)) = (
        carousel.slides().get(frame.index),
        apply_slide_frame(frame, base, track.area),
    ) {
        Paragraph::new(testimonial_lines(slide, inner, theme))
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(theme.palette.primary))
                    .padding(Padding::horizontal(1)),
            )
            .style(fade_style(frame))
            .render(rect, &mut track);
    }

    let mut dots = vec![Span::styled(
        format!("{}  ", theme.glyphs.arrow_left),
        styles::key_hint(&theme.palette),
    )];
    for index in 0..carousel.len() {
        let (glyph, style) = if index == carousel.current_index() {
            (theme.glyphs.dot_active, Style::default().fg(theme.palette.primary))
        } else {
            (theme.glyphs.dot_inactive, styles::muted(&theme.palette))
        };
        dots.push(Span::styled(format!("{glyph} "), style));
    }
    dots.push(Span::styled(
        format!(" {}", theme.glyphs.arrow_right),
        styles::key_hint(&theme.palette),
    ));
    let footer = lines_buffer(
        vec![
            Line::default(),
            Line::from(dots),
            Line::from(Span::styled(
                format!(
                    "{} {} of {}",
                    carousel.current().name,
                    carousel.current_index() + 1,
                    carousel.len()
                ),
                styles::key_hint(&theme.palette),
            )),
        ],
        width,
        Alignment::Center,
    );

    stack(&[header, track, footer], width)
}

fn cta(copy: &CtaCopy, width: u16, theme: &Theme) -> Buffer {
    let inner = usize::from(width.saturating_sub(4).min(CARD_MAX_WIDTH));
    let mut lines = styled_wrap(&copy.headline, inner, styles::headline(&theme.palette));
    lines.push(Line::default());
    lines.extend(styled_wrap(&copy.subheading, inner, styles::body(&theme.palette)));
    lines.push(Line::default());
    for benefit in &copy.benefits {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", theme.glyphs.check),
                Style::default().fg(theme.palette.green),
            ),
            Span::styled(benefit.clone(), styles::body(&theme.palette)),
        ]));
    }
    lines.push(Line::default());
    lines.push(button_row(&copy.primary_cta, &copy.secondary_cta, theme));

    let area = Rect::new(0, 0, width, to_u16(lines.len()).saturating_add(2));
    let mut buffer = Buffer::empty(area);
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::bordered()
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(theme.palette.primary)),
        )
        .render(area, &mut buffer);
    buffer
}

enum FooterEntry<'a> {
    Brand(&'a str),
    Column(&'a FooterColumn),
}

fn footer(page: &LandingPage, width: u16, theme: &Theme) -> Buffer {
    let content = page.content();
    let mut entries = vec![FooterEntry::Brand(&content.company_name)];
    entries.extend(content.footer.iter().map(FooterEntry::Column));

    let columns = grid_columns(width, 90, 40, entries.len().max(1));
    let (grid, _) = card_grid(
        &entries,
        columns,
        width,
        Style::default().fg(theme.palette.bg_dark),
        |entry, inner| match entry {
            FooterEntry::Brand(name) => {
                let mut lines = vec![
                    Line::from(Span::styled((*name).to_string(), styles::brand(&theme.palette))),
                    Line::default(),
                ];
                lines.extend(styled_wrap(FOOTER_TAGLINE, inner, styles::muted(&theme.palette)));
                lines
            }
            FooterEntry::Column(column) => {
                let mut lines = vec![
                    Line::from(Span::styled(
                        column.title.clone(),
                        styles::headline(&theme.palette),
                    )),
                    Line::default(),
                ];
                lines.extend(column.links.iter().map(|link| {
                    Line::from(Span::styled(link.label.clone(), styles::muted(&theme.palette)))
                }));
                lines
            }
        },
    );

    let bottom = lines_buffer(
        vec![
            Line::from(Span::styled(
                "─".repeat(usize::from(width.saturating_sub(8))),
                Style::default().fg(theme.palette.bg_border),
            )),
            Line::from(Span::styled(
                page.copyright_line(),
                styles::muted(&theme.palette),
            )),
        ],
        width,
        Alignment::Center,
    );
    stack(&[grid, bottom], width)
}

/// Render every section for `width` columns and record where each landed.
#[must_use]
pub fn render_document(page: &LandingPage, width: u16, theme: &Theme) -> Document {
    let content_width = width.saturating_sub(4).min(MAX_CONTENT_WIDTH).max(1);
    let margin = (width.saturating_sub(content_width)) / 2;
    let content = page.content();

    let (stats_buffer, stat_spans) =
        statistics(&content.statistics, page.counters(), content_width, theme);
    let parts = [
        (Section::Hero, hero(&content.hero, content_width, theme)),
        (
            Section::Features,
            features(&content.features, content_width, theme),
        ),
        (Section::Statistics, stats_buffer),
        (
            Section::Testimonials,
            testimonials(page.carousel(), content_width, theme),
        ),
        (Section::Cta, cta(&content.cta, content_width, theme)),
        (Section::Footer, footer(page, content_width, theme)),
    ];

    let height: u16 = parts
        .iter()
        .map(|(_, buffer)| buffer.area.height.saturating_add(SECTION_GAP))
        .fold(0, u16::saturating_add);
    let mut buffer = Buffer::empty(Rect::new(0, 0, width, height));
    buffer.set_style(buffer.area, Style::default().bg(theme.palette.bg_dark));

    let mut layout = PageLayout {
        document_height: u32::from(height),
        ..PageLayout::default()
    };
    let mut top: u16 = 0;
    for (section, part) in &parts {
        blit(part, &mut buffer, margin, top);
        layout
            .sections
            .push((*section, RowSpan::new(u32::from(top), u32::from(part.area.height))));
        if *section == Section::Statistics {
            layout.statistics = stat_spans
                .iter()
                .map(|span| RowSpan::new(span.top + u32::from(top), span.height))
                .collect();
        }
        top = top.saturating_add(part.area.height.saturating_add(SECTION_GAP));
    }

    Document { buffer, layout }
}
