//! Dashboard shell: four screens sharing the request-lifecycle pattern.

use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use serde_json::Value;
use workbench_client::protocol::GeneratedArticle;
use workbench_client::{ApiResponse, RequestLifecycle, RequestSeq, RequestState};

use crate::backend_bridge::commands::BackendCommand;
use crate::config::StartupConfig;
use crate::controller::events::{ScreenId, UiError, UiErrorCategory, UiEvent};
use crate::controller::forms::{BriefForm, GenerateForm, ResearchForm};
use crate::controller::orchestration::dispatch_backend_command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Home,
    Tool(ScreenId),
}

pub struct DashboardApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    api_base_url: String,
    screen: Screen,
    status: String,
    banner: Option<String>,

    research_form: ResearchForm,
    research: RequestLifecycle<UiError>,
    brief_form: BriefForm,
    brief: RequestLifecycle<UiError>,
    generate_form: GenerateForm,
    generate: RequestLifecycle<UiError>,
}

impl DashboardApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        config: StartupConfig,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            api_base_url: config.api_base_url,
            screen: Screen::Home,
            status: "Backend worker starting...".to_string(),
            banner: None,
            research_form: ResearchForm::default(),
            research: RequestLifecycle::new(),
            brief_form: BriefForm::default(),
            brief: RequestLifecycle::new(),
            generate_form: GenerateForm::default(),
            generate: RequestLifecycle::new(),
        }
    }

    fn lifecycle_mut(&mut self, screen: ScreenId) -> &mut RequestLifecycle<UiError> {
        match screen {
            ScreenId::Research => &mut self.research,
            ScreenId::Brief => &mut self.brief,
            ScreenId::Generate => &mut self.generate,
        }
    }

    fn lifecycle(&self, screen: ScreenId) -> &RequestLifecycle<UiError> {
        match screen {
            ScreenId::Research => &self.research,
            ScreenId::Brief => &self.brief,
            ScreenId::Generate => &self.generate,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::BridgeReady => {
                    self.status = format!("Connected to {}", self.api_base_url);
                }
                UiEvent::BridgeFailed(message) => {
                    self.status = message.clone();
                    self.banner = Some(message);
                }
                UiEvent::RequestFinished {
                    screen,
                    seq,
                    outcome,
                } => self.apply_request_finished(screen, seq, outcome),
            }
        }
    }

    fn apply_request_finished(
        &mut self,
        screen: ScreenId,
        seq: RequestSeq,
        outcome: Result<ApiResponse, UiError>,
    ) {
        if self.lifecycle_mut(screen).complete(seq, outcome) {
            self.status = format!("{} request finished", screen.title());
        } else {
            tracing::debug!(screen = screen.title(), seq, "discarded stale response");
        }
    }

    /// Begins the screen's lifecycle and queues its request. Returns the
    /// submission's sequence number, or `None` when the queue rejected it (in
    /// which case the lifecycle is failed rather than left in flight).
    fn submit(&mut self, screen: ScreenId) -> Option<RequestSeq> {
        let seq = self.lifecycle_mut(screen).begin();
        let cmd = match screen {
            ScreenId::Research => BackendCommand::ResearchKeywords {
                seq,
                request: self.research_form.payload(),
            },
            ScreenId::Brief => BackendCommand::BuildBrief {
                seq,
                request: self.brief_form.payload(),
            },
            ScreenId::Generate => BackendCommand::GenerateArticle {
                seq,
                request: self.generate_form.payload(),
            },
        };

        if dispatch_backend_command(&self.cmd_tx, cmd, &mut self.status) {
            self.status = format!("{} request sent", screen.title());
            Some(seq)
        } else {
            let reason = self.status.clone();
            self.lifecycle_mut(screen)
                .complete(seq, Err(UiError::new(UiErrorCategory::Unknown, reason)));
            None
        }
    }

    fn show_nav(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.screen, Screen::Home, "Home");
            for id in [ScreenId::Research, ScreenId::Brief, ScreenId::Generate] {
                ui.selectable_value(&mut self.screen, Screen::Tool(id), id.title());
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.small(egui::RichText::new(&self.status).weak());
            });
        });
    }

    fn show_banner(&mut self, ui: &mut egui::Ui) {
        if let Some(message) = self.banner.clone() {
            show_error_frame(ui, &message, || self.banner = None);
        }
    }

    fn show_home(&self, ui: &mut egui::Ui) {
        ui.heading("SEO Workbench Dashboard");
        ui.label(format!("API: {}", self.api_base_url));
        ui.add_space(8.0);
        ui.label("Pick a tool from the navigation bar:");
        for id in [ScreenId::Research, ScreenId::Brief, ScreenId::Generate] {
            ui.label(format!("  - {}", id.title()));
        }
    }

    fn show_research(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.heading(ScreenId::Research.title());
        let field = labeled_text_field(
            ui,
            "research_seeds",
            "Seeds (comma separated)",
            &mut self.research_form.seeds,
        );
        let submitted = submit_row(
            ui,
            ctx,
            &field,
            !self.research.is_in_flight(),
            "Run",
        );
        if submitted {
            self.submit(ScreenId::Research);
        }
        self.show_result(ui, ScreenId::Research, "Running...");
    }

    fn show_brief(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.heading(ScreenId::Brief.title());
        let seed_field = labeled_text_field(ui, "brief_seed", "Seed", &mut self.brief_form.seed);
        let keywords_field = labeled_text_field(
            ui,
            "brief_keywords",
            "Keywords (comma separated)",
            &mut self.brief_form.keywords,
        );
        let focused = seed_field.union(keywords_field);
        let submitted = submit_row(ui, ctx, &focused, !self.brief.is_in_flight(), "Build Brief");
        if submitted {
            self.submit(ScreenId::Brief);
        }
        self.show_result(ui, ScreenId::Brief, "Building...");
    }

    fn show_generate(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.heading(ScreenId::Generate.title());
        let topic_field =
            labeled_text_field(ui, "generate_topic", "Topic", &mut self.generate_form.topic);
        let length_field = labeled_text_field(
            ui,
            "generate_length",
            "Target length (words)",
            &mut self.generate_form.target_length_words,
        );
        let focused = topic_field.union(length_field);
        let submitted = submit_row(ui, ctx, &focused, !self.generate.is_in_flight(), "Generate");
        if submitted {
            self.submit(ScreenId::Generate);
        }
        self.show_result(ui, ScreenId::Generate, "Generating...");
    }

    fn show_result(&mut self, ui: &mut egui::Ui, screen: ScreenId, busy_label: &str) {
        ui.add_space(10.0);
        let mut dismiss = false;
        match self.lifecycle(screen).state() {
            RequestState::Idle => {}
            RequestState::InFlight { .. } => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(busy_label);
                });
            }
            RequestState::Succeeded { response, .. } => match response {
                ApiResponse::RawJson(value) => show_json_result(ui, value),
                ApiResponse::Article(article) => show_article_result(ui, article),
            },
            RequestState::Failed { error, .. } => {
                let message = format!("{} error: {}", error.category().label(), error.message());
                show_error_frame(ui, &message, || dismiss = true);
            }
        }
        if dismiss {
            self.lifecycle_mut(screen).dismiss();
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        // Keep draining bridge events while a request is outstanding.
        if self.research.is_in_flight() || self.brief.is_in_flight() || self.generate.is_in_flight()
        {
            ctx.request_repaint_after(Duration::from_millis(120));
        }

        egui::TopBottomPanel::top("dashboard_nav").show(ctx, |ui| {
            self.show_nav(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_banner(ui);
            match self.screen {
                Screen::Home => self.show_home(ui),
                Screen::Tool(ScreenId::Research) => self.show_research(ui, ctx),
                Screen::Tool(ScreenId::Brief) => self.show_brief(ui, ctx),
                Screen::Tool(ScreenId::Generate) => self.show_generate(ui, ctx),
            }
        });
    }
}

fn labeled_text_field(
    ui: &mut egui::Ui,
    id: &'static str,
    label: &str,
    value: &mut String,
) -> egui::Response {
    ui.label(egui::RichText::new(label).strong());
    let edit = egui::TextEdit::singleline(value)
        .id_salt(id)
        .desired_width(f32::INFINITY);
    let response = ui.add_sized([ui.available_width(), 28.0], edit);
    ui.add_space(4.0);
    response
}

/// Submit button plus enter-to-submit while one of the fields has focus.
/// Disabling while in flight is advisory; the lifecycle itself accepts
/// re-entrant submissions.
fn submit_row(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    fields: &egui::Response,
    enabled: bool,
    label: &str,
) -> bool {
    let clicked = ui
        .add_enabled(enabled, egui::Button::new(label))
        .clicked();
    let enter_pressed = ctx.input(|i| i.key_pressed(egui::Key::Enter));
    clicked || (enabled && fields.has_focus() && enter_pressed)
}

fn show_json_result(ui: &mut egui::Ui, value: &Value) {
    let text = pretty_json(value);
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.monospace(text);
        });
}

fn show_article_result(ui: &mut egui::Ui, article: &GeneratedArticle) {
    ui.heading(format!("Title: {}", article.title));
    ui.add_space(6.0);
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.monospace(article.article_markdown.as_str());
        });
}

fn show_error_frame(ui: &mut egui::Ui, message: &str, mut on_dismiss: impl FnMut()) {
    egui::Frame::NONE
        .fill(egui::Color32::from_rgb(111, 53, 53))
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new(message).color(egui::Color32::WHITE));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Dismiss").clicked() {
                        on_dismiss();
                    }
                });
            });
        });
}

fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
#[path = "../tests/app_tests.rs"]
mod tests;
