mod card;

use egui::{
    Align, Color32, Frame, Layout, Margin, RichText, ScrollArea, Ui, ViewportCommand, Visuals,
    style::Widgets,
};
use egui_dropdown::DropDownBox;
use log::{debug, error, info};

use replay_launcher::fonts::{calendar_family, font_definitions, load_font_files};
use replay_launcher::{
    AppConfig, FileScheduleProvider, GridView, LauncherSession, SeasonSelection, SystemSpawner,
};

use card::race_card;

pub(crate) const PALETTE_BACKGROUND: Color32 = Color32::from_rgb(21, 21, 30);
pub(crate) const PALETTE_CARD: Color32 = Color32::from_rgb(0, 0, 0);
pub(crate) const PALETTE_RED: Color32 = Color32::from_rgb(255, 24, 1);
pub(crate) const PALETTE_TEXT: Color32 = Color32::from_rgb(224, 224, 224);
pub(crate) const PALETTE_MUTED: Color32 = Color32::from_rgb(170, 170, 170);
pub(crate) const PALETTE_SUBTITLE: Color32 = Color32::from_rgb(153, 153, 153);
const PALETTE_SELECTOR: Color32 = Color32::from_rgb(51, 51, 51);

const TITLE: &str = "FIA FORMULA ONE WORLD CHAMPIONSHIP™ RACE CALENDAR";
const WINDOW_MARGIN: i8 = 20;
const GRID_SPACING: f32 = 15.;

pub(crate) type CalendarSession = LauncherSession<FileScheduleProvider, SystemSpawner>;

/// `LauncherApp` shows one season as a grid of race cards and hands the clicked race to the
/// replay viewer.
///
/// # Fields
///
/// * `session` - Season loading and replay hand-off.
/// * `years` - Selector entries, newest first.
/// * `year_text` - Current text of the year selector, may be anything the user typed.
/// * `notification` - Error banner shown when the replay could not be started.
pub struct LauncherApp {
    session: CalendarSession,
    years: Vec<String>,
    year_text: String,
    notification: Option<String>,
}

impl LauncherApp {
    pub fn new(
        session: CalendarSession,
        app_config: &AppConfig,
        initial_year: Option<i32>,
        cc: &eframe::CreationContext<'_>,
    ) -> Self {
        let visuals = Visuals {
            dark_mode: true,
            panel_fill: PALETTE_BACKGROUND,
            window_fill: PALETTE_BACKGROUND,
            extreme_bg_color: PALETTE_SELECTOR,
            faint_bg_color: PALETTE_SELECTOR,
            hyperlink_color: PALETTE_RED,
            widgets: Widgets::dark(),
            striped: false,
            ..Default::default()
        };
        cc.egui_ctx.set_visuals(visuals);

        let font_dir = app_config
            .font_dir
            .clone()
            .or_else(replay_launcher::fonts::default_font_dir);
        match font_dir {
            Some(dir) => {
                cc.egui_ctx
                    .set_fonts(font_definitions(load_font_files(&dir)));
            }
            None => {
                error!("Could not resolve font directory, using default fonts");
                cc.egui_ctx.set_fonts(font_definitions(Vec::new()));
            }
        }

        Self::with_session(session, initial_year)
    }

    fn with_session(mut session: CalendarSession, initial_year: Option<i32>) -> Self {
        let selection: &SeasonSelection = session.selection();
        let years = selection.years().iter().map(|y| y.to_string()).collect();
        let year_text = selection.initial_year(initial_year).to_string();

        if let Err(e) = session.select_year(&year_text) {
            debug!("Initial season not loaded: {}", e);
        }

        Self {
            session,
            years,
            year_text,
            notification: None,
        }
    }

    fn header(&mut self, ui: &mut Ui) {
        ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
            ui.label(
                RichText::new(TITLE)
                    .size(24.)
                    .color(Color32::WHITE)
                    .family(calendar_family()),
            );

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let previous_year = self.year_text.clone();
                ui.add(
                    DropDownBox::from_iter(
                        &self.years,
                        "year_dropbox",
                        &mut self.year_text,
                        |ui, text| ui.selectable_label(false, text),
                    )
                    .filter_by_input(false),
                );

                if previous_year != self.year_text {
                    // rejected text is logged by the session and keeps the current grid
                    if let Err(e) = self.session.select_year(&self.year_text) {
                        debug!("Year selector text rejected: {}", e);
                    }
                }
            });
        });
    }

    /// Draws the season grid and returns the round of a clicked card
    fn calendar(&self, ui: &mut Ui) -> Option<u32> {
        let grid = self.session.grid()?;

        let mut clicked = None;
        match grid {
            GridView::Placeholder(message) => {
                ui.label(RichText::new(message).size(16.).color(Color32::GRAY));
            }
            GridView::Cards(_) => {
                let columns = replay_launcher::launcher::GRID_COLUMNS as f32;
                let card_width =
                    ((ui.available_width() - GRID_SPACING * (columns - 1.)) / columns).max(1.);
                ui.spacing_mut().item_spacing = egui::Vec2::splat(GRID_SPACING);

                for row in grid.rows() {
                    ui.horizontal(|ui| {
                        for card in row {
                            if race_card(ui, card, card_width) {
                                clicked = Some(card.round_number);
                            }
                        }
                    });
                }
            }
        }
        clicked
    }

    fn launch(&mut self, ctx: &egui::Context, round: u32) {
        match self.session.activate(round) {
            Ok(handle) => {
                info!(
                    "Handing off to replay process {} for {} round {}",
                    handle.pid, handle.year, handle.round
                );
                ctx.send_viewport_cmd(ViewportCommand::Close);
            }
            Err(e) => {
                error!("Error while launching replay: {}", e);
                self.notification = Some(e.to_string());
            }
        }
    }
}

impl eframe::App for LauncherApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.session.is_terminated() {
            return;
        }

        egui::TopBottomPanel::top("header")
            .frame(
                Frame::new()
                    .fill(PALETTE_BACKGROUND)
                    .inner_margin(Margin::same(WINDOW_MARGIN)),
            )
            .show(ctx, |ui| self.header(ui));

        if let Some(message) = self.notification.clone() {
            egui::TopBottomPanel::bottom("notification")
                .frame(
                    Frame::new()
                        .fill(PALETTE_CARD)
                        .inner_margin(Margin::same(10)),
                )
                .show(ctx, |ui| {
                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                        ui.label(RichText::new(message).color(PALETTE_RED));
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            if ui.button("Dismiss").clicked() {
                                self.notification = None;
                            }
                        });
                    });
                });
        }

        let clicked = egui::CentralPanel::default()
            .frame(
                Frame::new()
                    .fill(PALETTE_BACKGROUND)
                    .inner_margin(Margin::same(WINDOW_MARGIN)),
            )
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| self.calendar(ui))
                    .inner
            })
            .inner;

        if let Some(round) = clicked {
            self.launch(ctx, round);
        }
    }
}
