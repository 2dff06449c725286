//! Slide motion for the testimonial card.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use marquee_engine::SlideFrame;
use marquee_types::ui::SLIDE_DISTANCE;

/// Below this opacity the card is drawn dimmed.
const DIM_THRESHOLD: f32 = 0.5;

/// Horizontal column offset for a slide frame, scaled so a full
/// `SLIDE_DISTANCE` moves the card by its own width.
#[must_use]
pub fn slide_columns(frame: SlideFrame, width: u16) -> i32 {
    let ratio = (frame.offset / SLIDE_DISTANCE).clamp(-1.0, 1.0);
    (ratio * f32::from(width)).round() as i32
}

/// Move `base` by the frame's offset, clipped to `bounds`.
///
/// Returns `None` once the card has left the bounds entirely.
#[must_use]
pub fn apply_slide_frame(frame: SlideFrame, base: Rect, bounds: Rect) -> Option<Rect> {
    let shift = slide_columns(frame, base.width);
    let left = i32::from(base.x) + shift;
    let right = left + i32::from(base.width);
    let bounds_left = i32::from(bounds.x);
    let bounds_right = i32::from(bounds.x) + i32::from(bounds.width);

    let clipped_left = left.max(bounds_left);
    let clipped_right = right.min(bounds_right);
    if clipped_right <= clipped_left {
        return None;
    }

    Some(Rect {
        x: u16::try_from(clipped_left).ok()?,
        width: u16::try_from(clipped_right - clipped_left).ok()?,
        ..base
    })
}

/// Style overlay approximating the fade for a given opacity.
#[must_use]
pub fn fade_style(frame: SlideFrame) -> Style {
    if frame.opacity < DIM_THRESHOLD {
        Style::default().add_modifier(Modifier::DIM)
    } else {
        Style::default()
    }
}
