//! deskcalc theme
//!
//! Black and white only, 1px black outlines, square corners.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

pub struct CalcColors;

impl CalcColors {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
}

pub struct CalcTheme {
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub font_size_small: f32,
    /// Size of the value on the display.
    pub font_size_display: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for CalcTheme {
    fn default() -> Self {
        Self {
            font_size_body: 16.0,
            font_size_heading: 22.0,
            font_size_small: 12.0,
            font_size_display: 28.0,
            window_padding: 8.0,
            item_spacing: 4.0,
        }
    }
}

impl CalcTheme {
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::light();

        visuals.window_fill = CalcColors::WHITE;
        visuals.panel_fill = CalcColors::WHITE;
        visuals.faint_bg_color = CalcColors::WHITE;
        visuals.extreme_bg_color = CalcColors::WHITE;

        visuals.window_rounding = Rounding::ZERO;
        visuals.menu_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::new(1.0, CalcColors::BLACK);

        let bw = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_fill = CalcColors::WHITE;
            ws.weak_bg_fill = CalcColors::WHITE;
            ws.bg_stroke = Stroke::new(1.0, CalcColors::BLACK);
            ws.fg_stroke = Stroke::new(1.0, CalcColors::BLACK);
            ws.rounding = Rounding::ZERO;
        };
        bw(&mut visuals.widgets.noninteractive);
        bw(&mut visuals.widgets.inactive);
        bw(&mut visuals.widgets.hovered);
        bw(&mut visuals.widgets.open);

        // Pressed buttons invert.
        bw(&mut visuals.widgets.active);
        visuals.widgets.active.bg_fill = CalcColors::BLACK;
        visuals.widgets.active.weak_bg_fill = CalcColors::BLACK;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, CalcColors::WHITE);

        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        visuals.selection.bg_fill = Color32::from_rgb(160, 160, 160);
        visuals.selection.stroke = Stroke::new(1.0, CalcColors::BLACK);

        style.visuals = visuals;

        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }

    /// Display panel: white fill, 1px black outline.
    pub fn display_frame() -> egui::Frame {
        egui::Frame::none()
            .fill(CalcColors::WHITE)
            .stroke(Stroke::new(1.0, CalcColors::BLACK))
            .inner_margin(egui::Margin::symmetric(8.0, 4.0))
    }

    /// Display panel while the equals feedback is showing.
    pub fn display_frame_inverted() -> egui::Frame {
        Self::display_frame().fill(CalcColors::BLACK)
    }
}

pub fn menu_bar<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> egui::InnerResponse<R> {
    let frame_resp = egui::Frame::none()
        .fill(CalcColors::WHITE)
        .stroke(Stroke::new(1.0, CalcColors::BLACK))
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| ui.horizontal(add_contents).inner);
    egui::InnerResponse {
        inner: frame_resp.inner,
        response: frame_resp.response,
    }
}

/// Strip Tab and Cmd+/Cmd-/Cmd= before the keypad sees them, so focus does
/// not cycle between buttons and the UI does not zoom when the user means
/// an operator.
pub fn consume_special_keys(ctx: &egui::Context) {
    ctx.input_mut(|i| {
        i.events.retain(|event| match event {
            egui::Event::Key { key: egui::Key::Tab, .. } => false,
            egui::Event::Key { key, modifiers, .. }
                if modifiers.command
                    && matches!(key, egui::Key::Plus | egui::Key::Minus | egui::Key::Equals) =>
            {
                false
            }
            _ => true,
        });
    });
}
