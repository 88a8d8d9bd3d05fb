use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use eframe::egui::{self, Color32, RichText};

use crate::io::{dataset_filters, load_term_index};
use crate::model::AppState;
use term_lookup_common::{Config, DisplayModel, Labels, Notice, Palette, Rgb};

pub struct DesktopApp {
    state: AppState,
    labels: Labels,
    palette: Palette,
    has_header: bool,
    status: String,
}

impl DesktopApp {
    pub fn new(config: Config, initial: Option<PathBuf>) -> Self {
        let mut app = Self {
            state: AppState::default(),
            labels: config.labels,
            palette: config.palette,
            has_header: config.has_header,
            status: String::new(),
        };
        if let Some(path) = initial {
            match app.load_from_path(&path) {
                Ok(_) => app.status = format!("Loaded {}", path.display()),
                Err(err) => app.status = format!("Load failed: {err:#}"),
            }
        }
        app
    }

    fn open_dataset(&mut self) {
        let dialog = dataset_filters()
            .into_iter()
            .fold(rfd::FileDialog::new(), |dialog, (name, extensions)| {
                dialog.add_filter(name, extensions)
            });
        if let Some(path) = dialog.pick_file() {
            match self.load_from_path(&path) {
                Ok(_) => self.status = format!("Loaded {}", path.display()),
                Err(err) => self.status = format!("Load failed: {err:#}"),
            }
        }
    }

    fn reload_dataset(&mut self) {
        let Some(path) = self.state.source_path.clone() else {
            self.status = "No dataset loaded".to_string();
            return;
        };
        match self.load_from_path(&path) {
            Ok(_) => self.status = format!("Reloaded {}", path.display()),
            Err(err) => self.status = format!("Reload failed: {err:#}"),
        }
    }

    // 失敗時は読み込み済みのインデックスをそのまま残す
    fn load_from_path(&mut self, path: &Path) -> Result<()> {
        let index = load_term_index(path, self.has_header)?;
        let duplicates = index.duplicates().len();
        self.state.set_index(index, path.to_path_buf());
        if duplicates > 0 {
            tracing::warn!(duplicates, "duplicate source terms ignored");
        }
        Ok(())
    }

    fn render_selector(&mut self, ui: &mut egui::Ui) {
        let Some(index) = self.state.index.as_ref().map(Arc::clone) else {
            ui.label("Open a dataset to start (File → Open Dataset).");
            return;
        };

        ui.horizontal(|ui| {
            ui.label("Filter");
            ui.add(
                egui::TextEdit::singleline(&mut self.state.filter)
                    .hint_text("Type to narrow the list")
                    .desired_width(240.0),
            );
            ui.label(
                RichText::new(format!("{} terms", index.len())).color(Color32::from_gray(150)),
            );
        });

        let visible = self.state.visible_terms();
        let selected_text = self
            .state
            .selected
            .clone()
            .unwrap_or_else(|| "Select a term".to_string());

        egui::ComboBox::from_id_source("term_select")
            .selected_text(selected_text)
            .width(ui.available_width().min(480.0))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut self.state.selected, None, "(none)");
                for term in &visible {
                    ui.selectable_value(&mut self.state.selected, Some(term.clone()), term);
                }
            });
    }

    fn render_model(&self, ui: &mut egui::Ui, model: &DisplayModel) {
        if model.is_empty() {
            return;
        }

        egui::Frame::none()
            .fill(Color32::from_rgb(244, 244, 244))
            .rounding(egui::Rounding::same(5.0))
            .inner_margin(egui::Margin::same(20.0))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                if let Some(header) = &model.header {
                    ui.label(RichText::new(header).strong().size(16.0).color(Color32::BLACK));
                }
                if let Some(best) = &model.best_match {
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new(format!("{}: {}", best.label, best.term))
                            .color(Color32::BLACK),
                    );
                }
                if let Some(notice) = &model.notice {
                    ui.add_space(6.0);
                    self.render_notice(ui, notice);
                }
            });

        if model.candidates.is_empty() {
            return;
        }

        ui.add_space(16.0);
        if let Some(heading) = &model.candidates_heading {
            ui.heading(heading);
        }
        egui::Grid::new("candidates")
            .striped(true)
            .min_col_width(32.0)
            .show(ui, |ui| {
                for candidate in &model.candidates {
                    ui.label(RichText::new(format!("{}.", candidate.rank)).color(Color32::from_gray(150)));
                    ui.label(&candidate.term);
                    ui.end_row();
                }
            });
    }

    fn render_notice(&self, ui: &mut egui::Ui, notice: &Notice) {
        let style = self.palette.style(notice.category);
        egui::Frame::none()
            .fill(to_color32(style.background))
            .rounding(egui::Rounding::same(5.0))
            .inner_margin(egui::Margin::same(10.0))
            .show(ui, |ui| {
                ui.label(
                    RichText::new(format!("{} {}", notice.icon.glyph(), notice.text))
                        .color(to_color32(style.foreground)),
                );
            });
    }
}

impl eframe::App for DesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Dataset").clicked() {
                        self.open_dataset();
                        ui.close_menu();
                    }
                    let reload_enabled = self.state.source_path.is_some();
                    if ui.add_enabled(reload_enabled, egui::Button::new("Reload Dataset")).clicked() {
                        self.reload_dataset();
                        ui.close_menu();
                    }
                });

                ui.separator();
                if !self.status.is_empty() {
                    ui.label(RichText::new(&self.status).color(Color32::from_gray(170)));
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(self.labels.title());
            });
            ui.separator();
            self.render_selector(ui);
            ui.add_space(20.0);

            let model = self.state.display_model(&self.labels);
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.render_model(ui, &model);
            });
        });
    }
}

fn to_color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}
