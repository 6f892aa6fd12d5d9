use egui::{Color32, Response, RichText, Ui};

use crate::utils::test_attrs::set_test_attr;

/// One entry of a [`counts`] strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountItem<'a> {
    pub count: usize,
    pub label: &'a str,
    pub color: Option<Color32>,
}

impl<'a> CountItem<'a> {
    pub fn new(label: &'a str, count: usize) -> Self {
        Self {
            count,
            label,
            color: None,
        }
    }

    pub fn color(mut self, color: Color32) -> Self {
        self.color = Some(color);
        self
    }
}

/// Draws `Label: count` entries in a row.
///
/// Each count is also published as a test attribute named after its
/// lower-cased label under `test_id`.
pub fn counts(ui: &mut Ui, test_id: &str, items: &[CountItem<'_>]) -> Response {
    ui.horizontal(|ui| {
        for item in items {
            let mut text = RichText::new(format!("{}: {}", item.label, item.count)).strong();
            if let Some(color) = item.color {
                text = text.color(color);
            }
            ui.label(text);
            set_test_attr(ui.ctx(), test_id, &item.label.to_lowercase(), item.count);
        }
    })
    .response
}

#[cfg(test)]
mod tests {
    use egui_kittest::Harness;
    use kittest::Queryable;

    use super::*;
    use crate::utils::test_attrs::test_attr;

    #[test]
    fn renders_and_publishes_each_count() {
        let mut harness = Harness::new_ui(|ui| {
            counts(
                ui,
                "users",
                &[
                    CountItem::new("Total", 10),
                    CountItem::new("Enabled", 7).color(Color32::GREEN),
                ],
            );
        });
        harness.run();

        harness.get_by_label("Total: 10");
        harness.get_by_label("Enabled: 7");
        assert_eq!(test_attr::<usize>(&harness.ctx, "users", "total"), Some(10));
        assert_eq!(test_attr::<usize>(&harness.ctx, "users", "enabled"), Some(7));
    }
}
