//! Lightbox overlay renderer and its keyboard/swipe input

use eframe::egui::{self, RichText};
use portfolio::{Breakpoint, Lightbox, LightboxKey, Point, Swipe, SwipeTracker};

use super::textures::{self, TextureCache};
use super::Texts;
use crate::theme::Palette;

const BUTTON_SIZE: f32 = 44.0;
const EDGE: f32 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Previous,
    Next,
    Close,
    ToggleDetail,
    ToggleInfo,
}

/// Lightbox keys pressed this frame
pub fn pressed_keys(ctx: &egui::Context) -> Vec<LightboxKey> {
    ctx.input(|i| {
        [
            (egui::Key::ArrowLeft, LightboxKey::ArrowLeft),
            (egui::Key::ArrowRight, LightboxKey::ArrowRight),
            (egui::Key::Escape, LightboxKey::Escape),
            (egui::Key::Space, LightboxKey::Space),
        ]
        .into_iter()
        .filter(|(key, _)| i.key_pressed(*key))
        .map(|(_, lk)| lk)
        .collect()
    })
}

/// Feeds pointer/touch movement into the tracker; returns a finished swipe.
pub fn track_swipe(ctx: &egui::Context, tracker: &mut SwipeTracker) -> Option<Swipe> {
    let (pressed, released, pos) = ctx.input(|i| {
        (i.pointer.primary_pressed(), i.pointer.primary_released(), i.pointer.latest_pos())
    });
    let point = pos.map(|p| Point::new(p.x, p.y));

    if pressed {
        if let Some(p) = point {
            tracker.begin(p);
        }
    } else if let Some(p) = point {
        tracker.update(p);
    }

    if released {
        tracker.finish()
    } else {
        None
    }
}

pub fn show(
    ctx: &egui::Context,
    lightbox: &mut Lightbox,
    text: &Texts,
    textures: &mut TextureCache,
    palette: &Palette,
    breakpoint: Breakpoint,
) {
    let Some(art) = lightbox.current() else { return };
    let has_detail = art.has_detail_image();
    let detail_visible = lightbox.detail_visible();
    let image_hint = lightbox.image_label(text.t("lightbox.detail")).unwrap_or_default();
    let info_visible = lightbox.info_visible();
    let texture = lightbox
        .displayed_image()
        .and_then(|path| textures.get(ctx, path))
        .map(|t| (t.id(), t.size_vec2()));

    let mut command = None;

    egui::Area::new(egui::Id::new("lightbox_overlay"))
        .fixed_pos(egui::pos2(0.0, 0.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            let screen = ctx.screen_rect();
            // swallow clicks and drags meant for the page underneath
            ui.allocate_rect(screen, egui::Sense::click_and_drag());
            ui.painter().rect_filled(screen, 0.0, palette.overlay);

            let margin = if screen.width() >= 768.0 { 80.0 } else { EDGE };
            let image_area = screen.shrink(margin);
            match texture {
                Some((id, size)) => {
                    let rect = textures::contain(size, image_area);
                    let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                    ui.painter().image(id, rect, uv, egui::Color32::WHITE);
                    ui.interact(rect, egui::Id::new("lightbox_image"), egui::Sense::hover())
                        .on_hover_text(image_hint);
                }
                None => {
                    let rect = textures::contain(egui::vec2(1.0, 1.0), image_area);
                    ui.painter().rect_filled(rect, 0.0, egui::Color32::from_gray(30));
                }
            }

            // top left: previous / next
            let top_left = screen.min + egui::vec2(EDGE, EDGE);
            if overlay_button(ui, top_left, "⏴", text.t("lightbox.previous"), palette) {
                command = Some(Command::Previous);
            }
            let next_pos = top_left + egui::vec2(BUTTON_SIZE + 8.0, 0.0);
            if overlay_button(ui, next_pos, "⏵", text.t("lightbox.next"), palette) {
                command = Some(Command::Next);
            }

            // top right: close
            let close_pos = egui::pos2(screen.right() - EDGE - BUTTON_SIZE, screen.top() + EDGE);
            if overlay_button(ui, close_pos, "✕", text.t("lightbox.close"), palette) {
                command = Some(Command::Close);
            }

            if has_detail {
                let detail_pos = if breakpoint.is_compact() {
                    egui::pos2(screen.right() - EDGE - BUTTON_SIZE, screen.bottom() - 24.0 - BUTTON_SIZE)
                } else {
                    close_pos - egui::vec2(BUTTON_SIZE + 20.0, 0.0)
                };
                let (icon, hint) = if detail_visible {
                    ("🖼", text.t("lightbox.showMain"))
                } else {
                    ("🔍", text.t("lightbox.showDetail"))
                };
                if overlay_button(ui, detail_pos, icon, hint, palette) {
                    command = Some(Command::ToggleDetail);
                }

                if breakpoint.is_compact() {
                    let info_pos = detail_pos - egui::vec2(BUTTON_SIZE + 8.0, 0.0);
                    let hint = if info_visible {
                        text.t("lightbox.hideDetails")
                    } else {
                        text.t("lightbox.showDetails")
                    };
                    if overlay_button(ui, info_pos, "ℹ", hint, palette) {
                        command = Some(Command::ToggleInfo);
                    }
                }
            }

            caption(ui, screen, lightbox, text, palette, breakpoint);
        });

    match command {
        Some(Command::Previous) => lightbox.previous(),
        Some(Command::Next) => lightbox.next(),
        Some(Command::Close) => lightbox.close(),
        Some(Command::ToggleDetail) => lightbox.toggle_detail(),
        Some(Command::ToggleInfo) => lightbox.toggle_info(),
        None => {}
    }
}

fn overlay_button(ui: &mut egui::Ui, min: egui::Pos2, icon: &str, hint: &str, palette: &Palette) -> bool {
    let rect = egui::Rect::from_min_size(min, egui::vec2(BUTTON_SIZE, BUTTON_SIZE));
    let button = egui::Button::new(RichText::new(icon).size(18.0).color(palette.overlay_text))
        .fill(egui::Color32::TRANSPARENT)
        .rounding(BUTTON_SIZE / 2.0);
    let response = ui.put(rect, button).on_hover_text(hint);
    if response.hovered() {
        ui.painter().circle_filled(rect.center(), BUTTON_SIZE / 2.0, palette.overlay_button_hover);
    }
    response.clicked()
}

/// Title and metadata along the bottom edge. In the compact layout only
/// title and year are shown until the info panel is opened.
fn caption(
    ui: &mut egui::Ui,
    screen: egui::Rect,
    lightbox: &Lightbox,
    text: &Texts,
    palette: &Palette,
    breakpoint: Breakpoint,
) {
    let Some(art) = lightbox.current() else { return };

    let mut lines: Vec<(String, f32, egui::Color32)> = vec![
        (art.title.clone(), 17.0, palette.overlay_text),
        (art.year.clone(), 13.0, palette.overlay_text_dim),
    ];
    if !breakpoint.is_compact() || lightbox.info_visible() {
        if let Some(d) = &art.dimensions {
            lines.push((d.clone(), 13.0, palette.overlay_text_dim));
        }
        if let Some(p) = &art.photographer {
            lines.push((format!("{} {}", text.t("lightbox.photo"), p), 13.0, palette.overlay_text_dim));
        }
        if let Some(m) = &art.materials {
            lines.push((m.clone(), 13.0, palette.overlay_text_dim));
        }
        if let Some(d) = &art.description {
            lines.push((d.clone(), 13.0, palette.overlay_text_dim));
        }
    }

    let wrap = (screen.width() - EDGE * 2.0).min(900.0);
    let painter = ui.painter();
    let galleys: Vec<_> = lines
        .into_iter()
        .map(|(s, size, color)| painter.layout(s, egui::FontId::proportional(size), color, wrap))
        .collect();
    let spacing = 4.0;
    let height: f32 = galleys.iter().map(|g| g.size().y + spacing).sum::<f32>() + EDGE * 2.0;

    let band = egui::Rect::from_min_max(egui::pos2(screen.left(), screen.bottom() - height), screen.max);
    painter.rect_filled(band, 0.0, egui::Color32::from_black_alpha(170));

    let left = screen.center().x - wrap / 2.0;
    let mut y = band.top() + EDGE;
    for galley in galleys {
        let h = galley.size().y;
        painter.galley(egui::pos2(left, y), galley, palette.overlay_text);
        y += h + spacing;
    }
}
