//! Form fields bound to a [`Property`].
//!
//! Each field reads the property when drawn and writes back only when the
//! operator changed the value in this frame.

use egui::{Response, TextEdit, Ui, WidgetText};
use roster_states::Property;

/// Checkbox whose checked state lives in `property`.
pub fn checkbox_field(
    ui: &mut Ui,
    label: impl Into<WidgetText>,
    property: &impl Property<bool>,
) -> Response {
    let mut checked = property.get();
    let response = ui.checkbox(&mut checked, label);
    if response.changed() {
        property.set(checked);
    }
    response
}

/// Single-line search box whose text lives in `property`.
///
/// The box is labelled "Search" for screen readers and tests.
pub fn search_field(ui: &mut Ui, property: &impl Property<String>, test_id: &str) -> Response {
    let mut text = property.get();
    ui.horizontal(|ui| {
        let label = ui.label("Search");
        let response = ui
            .add(
                TextEdit::singleline(&mut text)
                    .id_salt(test_id)
                    .hint_text("Search users")
                    .desired_width(180.0),
            )
            .labelled_by(label.id);
        if response.changed() {
            property.set(text.clone());
        }
        response
    })
    .inner
}
