use egui::{Response, RichText, Ui};

use crate::utils::colors::{COLOR_GREEN, COLOR_RED};

/// Outcome banner shown above the users table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlashMessage {
    Success(String),
    Error(String),
}

impl FlashMessage {
    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Draws the message with a dismiss button.
///
/// Returns `true` when the operator dismissed it.
pub fn flash(ui: &mut Ui, message: &FlashMessage) -> (Response, bool) {
    let color = if message.is_error() {
        COLOR_RED
    } else {
        COLOR_GREEN
    };
    let inner = ui.horizontal(|ui| {
        ui.label(RichText::new(message.text()).color(color));
        ui.small_button("✖").on_hover_text("Dismiss").clicked()
    });
    (inner.response, inner.inner)
}
