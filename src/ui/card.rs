use egui::{
    CornerRadius, CursorIcon, Frame, Id, Label, Margin, RichText, Sense, Stroke, StrokeKind, Ui,
    Vec2,
};

use replay_launcher::CardView;
use replay_launcher::fonts::calendar_family;

use super::{PALETTE_CARD, PALETTE_MUTED, PALETTE_RED, PALETTE_SUBTITLE, PALETTE_TEXT};

pub(crate) const CARD_HEIGHT: f32 = 140.;
const CARD_CORNER_RADIUS: u8 = 10;
const CARD_MARGIN: i8 = 15;

/// Draws one race card and reports whether it was clicked.
pub(crate) fn race_card(ui: &mut Ui, card: &CardView, width: f32) -> bool {
    let inner_size = Vec2::new(
        width - 2. * CARD_MARGIN as f32,
        CARD_HEIGHT - 2. * CARD_MARGIN as f32,
    );

    let frame_response = Frame::new()
        .fill(PALETTE_CARD)
        .corner_radius(CornerRadius::same(CARD_CORNER_RADIUS))
        .stroke(Stroke::new(1., PALETTE_CARD))
        .inner_margin(Margin::same(CARD_MARGIN))
        .show(ui, |ui| {
            ui.set_min_size(inner_size);
            ui.set_max_size(inner_size);
            ui.spacing_mut().item_spacing.y = 2.;

            ui.label(
                RichText::new(&card.round_label)
                    .size(12.)
                    .strong()
                    .color(PALETTE_MUTED)
                    .family(calendar_family()),
            );
            ui.label(
                RichText::new(&card.header)
                    .size(24.)
                    .color(PALETTE_TEXT)
                    .family(calendar_family()),
            );
            ui.add(
                Label::new(
                    RichText::new(&card.subtitle)
                        .size(12.)
                        .color(PALETTE_SUBTITLE),
                )
                .wrap(),
            );

            ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                ui.label(
                    RichText::new(&card.date)
                        .size(14.)
                        .color(PALETTE_TEXT)
                        .family(calendar_family()),
                );
            });
        });

    let rect = frame_response.response.rect;
    let response = ui
        .interact(
            rect,
            Id::new(("race_card", card.year, card.round_number)),
            Sense::click(),
        )
        .on_hover_cursor(CursorIcon::PointingHand)
        .on_hover_text(&card.location);

    if response.hovered() {
        ui.painter().rect_stroke(
            rect,
            CornerRadius::same(CARD_CORNER_RADIUS),
            Stroke::new(1., PALETTE_RED),
            StrokeKind::Inside,
        );
    }

    response.clicked()
}
