//! deskcalc application window

use calccore::theme::{consume_special_keys, menu_bar, CalcColors};
use calccore::{CalcSettings, CalcTheme, Calculator, CalculatorEngine, Command, Layout, RepaintController};
use egui::{Context, Event};
use tracing::{debug, info, trace};

use crate::keypad::{command_for_char, command_for_key, Button, ADVANCED_ROW, BASIC_ROWS};

pub const WINDOW_WIDTH: f32 = 320.0;
const BASIC_HEIGHT: f32 = 460.0;
const ADVANCED_HEIGHT: f32 = 520.0;

/// Smallest window that still fits the display and every keypad row.
const MIN_WIDTH: f32 = 280.0;
const MIN_BASIC_HEIGHT: f32 = 400.0;
const MIN_ADVANCED_HEIGHT: f32 = 450.0;

pub fn window_height(layout: Layout) -> f32 {
    match layout {
        Layout::Basic => BASIC_HEIGHT,
        Layout::Advanced => ADVANCED_HEIGHT,
    }
}

pub fn min_window_size(layout: Layout) -> egui::Vec2 {
    let height = match layout {
        Layout::Basic => MIN_BASIC_HEIGHT,
        Layout::Advanced => MIN_ADVANCED_HEIGHT,
    };
    egui::vec2(MIN_WIDTH, height)
}

pub struct DeskCalcApp {
    calc: Calculator,
    settings: CalcSettings,
    theme: CalcTheme,
    prev_layout: Layout,
    show_about: bool,
    repaint: RepaintController,
}

impl DeskCalcApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: CalcSettings) -> Self {
        Self {
            calc: Calculator::new(CalculatorEngine::new()),
            prev_layout: settings.layout,
            settings,
            theme: CalcTheme::default(),
            show_about: false,
            repaint: RepaintController::new(),
        }
    }

    fn run(&mut self, command: Command) {
        let state = self.calc.apply(command);
        debug!(?command, display = %state.display, history = %state.history, "key");
    }

    fn copy_display(&self, ctx: &Context) {
        let text = self.calc.display().to_string();
        debug!(%text, "copied to clipboard");
        ctx.output_mut(|o| o.copied_text = text);
    }

    /// Pull keyboard events out of the frame before the buttons render, so
    /// a focused button cannot also react to Enter.
    fn handle_keys(&mut self, ctx: &Context) {
        consume_special_keys(ctx);

        let mut commands = Vec::new();
        let mut copy = false;
        ctx.input_mut(|i| {
            i.events.retain(|event| match event {
                Event::Text(text) => {
                    commands.extend(text.chars().filter_map(command_for_char));
                    false
                }
                Event::Key { key, pressed: true, modifiers, .. } if !modifiers.command => {
                    match command_for_key(*key) {
                        Some(cmd) => {
                            commands.push(cmd);
                            false
                        }
                        None => true,
                    }
                }
                Event::Copy => {
                    copy = true;
                    false
                }
                _ => true,
            });
        });

        for command in commands {
            self.run(command);
        }
        if copy {
            self.copy_display(ctx);
        }
    }

    fn set_layout(&mut self, layout: Layout) {
        if self.settings.layout != layout {
            self.settings.layout = layout;
            self.settings.save();
            info!(?layout, "layout changed");
        }
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        let inverted = self.calc.is_equals_pressed();
        let (frame, fg) = if inverted {
            (CalcTheme::display_frame_inverted(), CalcColors::WHITE)
        } else {
            (CalcTheme::display_frame(), CalcColors::BLACK)
        };

        frame.show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                if self.settings.show_history {
                    let history = match self.calc.history() {
                        "" => " ",
                        h => h,
                    };
                    ui.label(
                        egui::RichText::new(history)
                            .font(egui::FontId::proportional(self.theme.font_size_small))
                            .color(fg),
                    );
                }
                ui.label(
                    egui::RichText::new(self.calc.display())
                        .font(egui::FontId::proportional(self.theme.font_size_display))
                        .color(fg)
                        .strong(),
                );
            });
        });
    }

    fn render_row(&mut self, ui: &mut egui::Ui, row: &[Button], width: f32, height: f32) {
        ui.horizontal(|ui| {
            for (label, command) in row {
                if ui.add_sized([width, height], egui::Button::new(*label)).clicked() {
                    self.run(*command);
                }
            }
        });
    }

    fn render_keypad(&mut self, ui: &mut egui::Ui) {
        let btn_w = (ui.available_width() - 12.0) / 4.0;
        let btn_h = 44.0;

        if self.settings.layout == Layout::Advanced {
            self.render_row(ui, &ADVANCED_ROW, btn_w, btn_h);
            ui.add_space(4.0);
        }
        for row in &BASIC_ROWS {
            self.render_row(ui, row, btn_w, btn_h);
        }
    }

    fn render_menu(&mut self, ctx: &Context) {
        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            menu_bar(ui, |ui| {
                ui.menu_button("edit", |ui| {
                    if ui.button("copy").clicked() {
                        self.copy_display(ui.ctx());
                        ui.close_menu();
                    }
                    if ui.button("clear").clicked() {
                        self.run(Command::Clear);
                        ui.close_menu();
                    }
                });
                ui.menu_button("view", |ui| {
                    let layout = self.settings.layout;
                    if ui.selectable_label(layout == Layout::Basic, "basic").clicked() {
                        self.set_layout(Layout::Basic);
                        ui.close_menu();
                    }
                    if ui.selectable_label(layout == Layout::Advanced, "advanced").clicked() {
                        self.set_layout(Layout::Advanced);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.checkbox(&mut self.settings.show_history, "history").changed() {
                        self.settings.save();
                        self.repaint.mark_needs_repaint();
                    }
                });
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });
    }

    fn render_about(&mut self, ctx: &Context) {
        egui::Window::new("about calculator")
            .collapsible(false)
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("calculator");
                    ui.label(concat!("version ", env!("CARGO_PKG_VERSION")));
                });
                ui.separator();
                ui.label("keys: 0-9 . + - * / % = Enter");
                ui.label("Backspace, Del (CE), Esc (C), Ctrl+C");
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                });
            });
    }
}

impl eframe::App for DeskCalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.repaint.begin_frame(ctx);
        trace!(reason = ?self.repaint.reason(), frame = self.repaint.frame(), "paint");
        self.handle_keys(ctx);

        if self.settings.layout != self.prev_layout {
            ctx.send_viewport_cmd(egui::ViewportCommand::MinInnerSize(min_window_size(
                self.settings.layout,
            )));
            ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(
                WINDOW_WIDTH,
                window_height(self.settings.layout),
            )));
            self.prev_layout = self.settings.layout;
            self.repaint.mark_needs_repaint();
        }

        self.render_menu(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(CalcColors::WHITE).inner_margin(egui::Margin::same(8.0)))
            .show(ctx, |ui| {
                self.render_display(ui);
                ui.add_space(8.0);
                self.render_keypad(ui);
            });

        if self.show_about {
            self.render_about(ctx);
        }

        self.repaint.end_frame(ctx);
    }
}
