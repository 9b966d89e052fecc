//! Theme and style helpers.
//!
//! Style functions receive `&Theme` and derive their colors from its
//! extended palette, so both light and dark themes work unchanged.

use iced::widget::{container, text};
use iced::{Border, Theme};

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - label to input
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - gaps inside a card
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, standard gaps
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - page margins
pub const SPACING_LG: f32 = 24.0;

/// Medium radius - cards
pub const BORDER_RADIUS_MD: f32 = 6.0;

/// Width of the form column.
pub const FORM_WIDTH: f32 = 420.0;

// =============================================================================
// THEME CREATION
// =============================================================================

/// Theme for the given display mode.
pub fn app_theme(dark_mode: bool) -> Theme {
    if dark_mode { Theme::Dark } else { Theme::Light }
}

// =============================================================================
// WIDGET STYLES
// =============================================================================

/// Result card container.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: BORDER_RADIUS_MD.into(),
        },
        ..Default::default()
    }
}

/// Error text.
pub fn text_error(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().danger.base.color),
    }
}

/// Secondary text (labels, provider line).
pub fn text_muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().background.strong.text),
    }
}

/// Service status text, green when healthy.
pub fn text_status(healthy: bool) -> impl Fn(&Theme) -> text::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        text::Style {
            color: Some(if healthy {
                palette.success.base.color
            } else {
                palette.danger.base.color
            }),
        }
    }
}
