use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use egui::{Align, Color32, Layout, RichText};
use shared::{domain::MaxLength, samples};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    clipboard::{copy_with_fallback, CopyOutcome, NativeClipboard, ToolkitClipboard},
    events::UiEvent,
    orchestration::dispatch_backend_command,
    reducer::{FormState, ScrollTarget},
};
use crate::ui::theme;

const INPUT_ID: &str = "input_text";
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct SummarizerApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    server_url: String,
    form: FormState,
}

impl SummarizerApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        server_url: String,
        max_length: MaxLength,
    ) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            server_url,
            form: FormState::new(max_length),
        };
        app.request_health_check();
        app
    }

    fn request_health_check(&mut self) {
        dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::CheckHealth,
            &mut self.form.status,
        );
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.form.apply(event);
        }
    }

    fn try_submit(&mut self) {
        let Some(request) = self.form.begin_submit() else {
            return;
        };
        tracing::info!(
            max_length = request.max_length,
            min_length = request.min_length,
            "submitting text for summarization"
        );
        let queued = dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::Summarize { request },
            &mut self.form.status,
        );
        if !queued {
            let reason = self.form.status.clone();
            self.form.abort_submit(reason);
        }
    }

    fn copy_summary(&mut self, ctx: &egui::Context) {
        let Some(text) = self.form.summary_text().map(str::to_owned) else {
            return;
        };
        let outcome = copy_with_fallback(&mut NativeClipboard, &mut ToolkitClipboard(ctx), &text);
        if let CopyOutcome::Copied { via } = outcome {
            tracing::debug!(via, chars = text.len(), "summary copied");
            self.form.mark_copied(Instant::now());
        }
    }

    fn populate_sample(&mut self) {
        self.form.set_draft(samples::random_sample());
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        let mut recheck = false;
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.small("Status:");
                ui.small(RichText::new(&self.form.status).weak());
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    recheck = ui.small_button("Recheck").clicked();
                    ui.small(RichText::new(&self.server_url).weak());
                });
            });
        });
        if recheck {
            self.form.status = "Checking summarizer...".to_string();
            self.request_health_check();
        }
    }

    fn show_form(&mut self, ui: &mut egui::Ui, scroll: Option<ScrollTarget>, now: Instant) {
        ui.heading("Text Summarizer");
        ui.label(
            RichText::new("Paste an article or long passage and get a short summary.").weak(),
        );
        ui.add_space(12.0);

        // Ctrl+Enter submits from the input and must not reach the text edit.
        let input_id = egui::Id::new(INPUT_ID);
        let input_focused = ui.ctx().memory(|m| m.has_focus(input_id));
        let submit_shortcut = input_focused
            && ui
                .ctx()
                .input_mut(|i| i.consume_key(egui::Modifiers::CTRL, egui::Key::Enter));

        let response = ui.add(
            egui::TextEdit::multiline(&mut self.form.draft)
                .id(input_id)
                .hint_text("Paste or type the text you want to summarize (at least 10 words)...")
                .desired_rows(12)
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            self.form.on_input_changed();
        }

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("{} characters", self.form.char_count()))
                    .color(theme::counter_color(self.form.counter_tier())),
            );
            let sample_btn =
                egui::Button::new(RichText::new("Try Sample Text").color(theme::SAMPLE_TEXT))
                    .fill(theme::SAMPLE_FILL);
            if ui.add(sample_btn).clicked() {
                self.populate_sample();
            }
        });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label("Summary length:");
            egui::ComboBox::from_id_salt("max_length")
                .selected_text(self.form.max_length.label())
                .show_ui(ui, |ui| {
                    for choice in MaxLength::CHOICES {
                        ui.selectable_value(&mut self.form.max_length, choice, choice.label());
                    }
                });
            ui.add_space(12.0);
            let clicked = self.show_submit_button(ui);
            if clicked || submit_shortcut {
                self.try_submit();
            }
        });

        ui.add_space(12.0);
        self.show_error_area(ui, scroll);
        self.show_output_area(ui, scroll, now);
    }

    /// Label while idle, spinner while a request is in flight.
    fn show_submit_button(&self, ui: &mut egui::Ui) -> bool {
        let busy = self.form.is_busy();
        let label = if busy {
            RichText::new("")
        } else {
            RichText::new("Summarize").strong().color(Color32::WHITE)
        };
        let button = egui::Button::new(label)
            .fill(theme::ACCENT)
            .min_size(egui::vec2(140.0, 34.0));
        let response = ui
            .add_enabled(!busy, button)
            .on_hover_text("Ctrl+Enter from the text box also submits");
        if busy {
            ui.put(response.rect, egui::Spinner::new());
        }
        response.clicked()
    }

    fn show_error_area(&self, ui: &mut egui::Ui, scroll: Option<ScrollTarget>) {
        let Some(message) = self.form.error() else {
            return;
        };
        let response = egui::Frame::NONE
            .fill(theme::ERROR_FILL)
            .stroke(egui::Stroke::new(1.0, theme::ERROR_STROKE))
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(message).color(theme::ERROR_TEXT));
            })
            .response;
        if scroll == Some(ScrollTarget::Error) {
            response.scroll_to_me(Some(Align::Center));
        }
    }

    fn show_output_area(&mut self, ui: &mut egui::Ui, scroll: Option<ScrollTarget>, now: Instant) {
        let Some(output) = self.form.output() else {
            return;
        };
        let stats = output.stats.clone();
        let received_at = output.received_at;
        let copied = self.form.copy_feedback_remaining(now).is_some();
        let copy_label = self.form.copy_label(now);

        let mut copy_clicked = false;
        let response = egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.heading("Summary");
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let button =
                            egui::Button::new(RichText::new(copy_label).color(Color32::WHITE))
                                .fill(theme::copy_button_fill(copied));
                        copy_clicked = ui.add(button).clicked();
                    });
                });
                ui.add_space(6.0);
                ui.add(egui::Label::new(stats.summary.as_str()).selectable(true).wrap());
                ui.add_space(8.0);
                ui.separator();
                egui::Grid::new("summary_stats")
                    .num_columns(3)
                    .spacing([32.0, 4.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("Original").weak());
                        ui.label(RichText::new("Summary").weak());
                        ui.label(RichText::new("Compression").weak());
                        ui.end_row();
                        ui.label(RichText::new(stats.original_label()).strong());
                        ui.label(RichText::new(stats.summary_label()).strong());
                        ui.label(RichText::new(stats.compression_label()).strong());
                        ui.end_row();
                    });
                ui.add_space(4.0);
                ui.small(
                    RichText::new(format!("Summarized at {}", received_at.format("%H:%M:%S")))
                        .weak(),
                );
            })
            .response;

        if scroll == Some(ScrollTarget::Output) {
            response.scroll_to_me(Some(Align::Min));
        }
        if copy_clicked {
            self.copy_summary(ui.ctx());
        }
    }
}

impl eframe::App for SummarizerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        let now = Instant::now();
        let scroll = self.form.take_scroll_target();

        self.show_status_bar(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.show_form(ui, scroll, now);
                });
        });

        let next_repaint = self
            .form
            .copy_feedback_remaining(Instant::now())
            .map_or(EVENT_POLL_INTERVAL, |left| left.min(EVENT_POLL_INTERVAL));
        ctx.request_repaint_after(next_repaint);
    }
}
