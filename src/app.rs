//! Two-pane editor window: egui/eframe application.
//!
//! # Architecture
//!
//! [`CipherPadApp`] is the top-level [`eframe::App`].  It owns an
//! [`InputSurface`], which in turn owns the producer end of the ordering
//! queue and the receiving end of the result channel.
//!
//! Every frame the app:
//! 1. applies at most one delivered result to the output pane, and asks for
//!    another frame while more are waiting, so each transitional output is
//!    visible for at least one frame;
//! 2. renders the input pane and submits a snapshot whenever it changed;
//! 3. renders the read-only output pane and the status bar.
//!
//! The worker wakes the UI through [`Notify`], implemented here for
//! [`egui::Context`] as `request_repaint`.
//!
//! # Layout
//!
//! | Region | Content |
//! |--------|---------|
//! | Left column | Editable monospace input |
//! | Right column | Read-only monospace output, grey background |
//! | Bottom bar | Queue label, submitted / delivered / failed / pending counts |

use std::sync::Arc;

use eframe::egui;

use crate::config::AppConfig;
use crate::queue::{Notify, QueueError};
use crate::surface::InputSurface;
use crate::transform::Transform;

/// Results applied to the output per frame.
const DELIVERIES_PER_FRAME: usize = 1;

impl Notify for egui::Context {
    fn notify(&self) {
        self.request_repaint();
    }
}

// ---------------------------------------------------------------------------
// CipherPadApp
// ---------------------------------------------------------------------------

/// eframe application - the two-pane encryption editor.
pub struct CipherPadApp {
    surface: InputSurface,
    config: AppConfig,
    /// Last observed outer window position, saved on exit.
    window_position: Option<egui::Pos2>,
}

impl CipherPadApp {
    /// Create the app and start its worker.
    ///
    /// * `cc`        - eframe creation context; its `egui_ctx` wakes the UI.
    /// * `config`    - loaded application configuration.
    /// * `transform` - the transformation the worker runs.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: AppConfig,
        transform: Arc<dyn Transform>,
    ) -> Result<Self, QueueError> {
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        let surface = InputSurface::new(transform, cc.egui_ctx.clone())?;
        Ok(Self {
            surface,
            config,
            window_position: None,
        })
    }

    // ── Panes ────────────────────────────────────────────────────────────

    fn font(&self) -> egui::FontId {
        egui::FontId::monospace(self.config.ui.font_size)
    }

    /// Wrap width for the text editors.
    fn wrap_width(&self, ui: &egui::Ui) -> f32 {
        if self.config.ui.line_wrap {
            ui.available_width()
        } else {
            f32::INFINITY
        }
    }

    fn scroll_area(&self, id: &str) -> egui::ScrollArea {
        let area = if self.config.ui.line_wrap {
            egui::ScrollArea::vertical()
        } else {
            egui::ScrollArea::both()
        };
        area.id_salt(id).auto_shrink([false, false])
    }

    /// Render the editable pane and submit a snapshot when it changed.
    fn draw_input(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new(&self.config.ui.input_title).strong());

        let font = self.font();
        let width = self.wrap_width(ui);
        let changed = self
            .scroll_area("input_scroll")
            .show(ui, |ui| {
                let rows = (ui.available_height() / self.config.ui.font_size).max(1.0);
                ui.add(
                    egui::TextEdit::multiline(self.surface.input_mut())
                        .font(font)
                        .desired_width(width)
                        .desired_rows(rows as usize),
                )
                .changed()
            })
            .inner;

        if changed {
            self.surface.on_text_changed();
        }
    }

    /// Render the read-only pane.
    fn draw_output(&self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new(&self.config.ui.output_title).strong());

        let font = self.font();
        let width = self.wrap_width(ui);
        self.scroll_area("output_scroll").show(ui, |ui| {
            let rows = (ui.available_height() / self.config.ui.font_size).max(1.0);
            let mut text = self.surface.output();
            ui.add(
                egui::TextEdit::multiline(&mut text)
                    .font(font)
                    .desired_width(width)
                    .desired_rows(rows as usize)
                    .background_color(egui::Color32::from_rgb(230, 230, 230))
                    .text_color(egui::Color32::from_rgb(20, 20, 20)),
            );
        });
    }

    /// Render the bottom status bar.
    fn draw_status_bar(&self, ui: &mut egui::Ui) {
        let stats = self.surface.stats();
        ui.horizontal(|ui| {
            let color = if stats.is_busy() {
                egui::Color32::from_rgb(68, 136, 255)
            } else {
                egui::Color32::from_rgb(100, 100, 100)
            };
            ui.label(egui::RichText::new(stats.label()).color(color));
            ui.separator();
            let summary = egui::RichText::new(stats.summary());
            if stats.failed > 0 {
                ui.label(summary.color(egui::Color32::from_rgb(255, 136, 68)));
            } else {
                ui.label(summary);
            }
        });
    }

    // ── Window state ─────────────────────────────────────────────────────

    fn track_window_position(&mut self, ctx: &egui::Context) {
        if let Some(rect) = ctx.input(|i| i.viewport().outer_rect) {
            self.window_position = Some(rect.min);
        }
    }

    /// Persist the last window position (best-effort).
    fn save_window_position(&mut self) {
        let Some(pos) = self.window_position else {
            return;
        };
        self.config.ui.window_position = Some((pos.x, pos.y));
        if let Err(e) = self.config.save() {
            log::warn!("Failed to save window position: {e}");
        }
    }
}

// ---------------------------------------------------------------------------
// eframe::App impl
// ---------------------------------------------------------------------------

impl eframe::App for CipherPadApp {
    /// Called every frame by eframe.  Applies deliveries, then renders.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.surface.apply_pending(DELIVERIES_PER_FRAME);
        if self.surface.pending_deliveries() > 0 {
            ctx.request_repaint();
        }

        self.track_window_position(ctx);

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.draw_status_bar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |columns| {
                self.draw_input(&mut columns[0]);
                self.draw_output(&mut columns[1]);
            });
        });
    }

    /// Release the worker and persist the window position.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        log::info!("cipher-pad window closing");
        self.surface.close();
        self.save_window_position();
    }
}
