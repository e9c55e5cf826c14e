//! Header, gallery grid, about, process, CV and footer

use eframe::egui::{self, RichText};
use portfolio::catalog::{self, CvSection, Section};
use portfolio::{Gallery, LayoutSignal, MenuState};

use super::textures::{self, TextureCache};
use super::{Texts, UiAction};
use crate::theme::Palette;

const PAGE_MAX_WIDTH: f32 = 1200.0;
const TEXT_MAX_WIDTH: f32 = 900.0;
const SIDE_PADDING: f32 = 24.0;
const GRID_GAP: f32 = 32.0;
// title + year under each tile
const TILE_CAPTION_HEIGHT: f32 = 56.0;

pub fn header(
    ctx: &egui::Context,
    text: &Texts,
    layout: &LayoutSignal,
    menu: &MenuState,
    palette: &Palette,
    actions: &mut Vec<UiAction>,
) {
    let frame = egui::Frame::none()
        .fill(palette.background)
        .inner_margin(egui::Margin::symmetric(SIDE_PADDING, 18.0));

    egui::TopBottomPanel::top("header").frame(frame).show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(text.t(catalog::HEADER_TITLE_KEY))
                    .size(20.0)
                    .color(palette.foreground),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if layout.desktop_nav() {
                    ui.spacing_mut().item_spacing.x = 40.0;
                    // right-to-left: add in reverse
                    for section in Section::ALL.iter().rev() {
                        if nav_link(ui, text.t(section.nav_key()), palette).clicked() {
                            actions.push(UiAction::Navigate(*section));
                        }
                    }
                } else {
                    let icon = if menu.is_open() { "✕" } else { "☰" };
                    let button = egui::Button::new(RichText::new(icon).size(20.0)).frame(false);
                    if ui.add(button).on_hover_text(text.t(catalog::MENU_KEY)).clicked() {
                        actions.push(UiAction::ToggleMenu);
                    }
                }
            });
        });

        if !layout.desktop_nav() && menu.is_open() {
            ui.add_space(12.0);
            ui.separator();
            ui.add_space(12.0);
            for section in Section::ALL {
                if nav_link(ui, text.t(section.nav_key()), palette).clicked() {
                    actions.push(UiAction::Navigate(section));
                }
                ui.add_space(8.0);
            }
        }
    });
}

fn nav_link(ui: &mut egui::Ui, label: &str, palette: &Palette) -> egui::Response {
    let button = egui::Button::new(RichText::new(label).size(15.0).color(palette.muted)).frame(false);
    ui.add(button).on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Scrolls to `section` if it is the pending navigation target.
fn anchor(ui: &mut egui::Ui, section: Section, target: &mut Option<Section>) {
    let response = ui.allocate_response(egui::vec2(1.0, 1.0), egui::Sense::hover());
    if *target == Some(section) {
        response.scroll_to_me(Some(egui::Align::TOP));
        *target = None;
    }
}

/// Centers a column no wider than `max_width`
fn centered<R>(
    ui: &mut egui::Ui,
    max_width: f32,
    fill: egui::Color32,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let avail = ui.available_width();
    let side = ((avail - max_width) / 2.0).max(SIDE_PADDING);
    egui::Frame::none()
        .fill(fill)
        .inner_margin(egui::Margin { left: side, right: side, top: 56.0, bottom: 56.0 })
        .show(ui, |ui| {
            ui.set_width(avail - side * 2.0);
            add_contents(ui)
        })
        .inner
}

#[allow(clippy::too_many_arguments)]
pub fn body(
    ui: &mut egui::Ui,
    text: &Texts,
    gallery: &Gallery,
    layout: &LayoutSignal,
    textures: &mut TextureCache,
    palette: &Palette,
    scroll_target: &mut Option<Section>,
    actions: &mut Vec<UiAction>,
) {
    ui.spacing_mut().item_spacing.y = 0.0;

    centered(ui, PAGE_MAX_WIDTH, palette.background, |ui| {
        anchor(ui, Section::Projects, scroll_target);
        gallery_grid(ui, text, gallery, layout.columns(), textures, palette, actions);
    });

    centered(ui, PAGE_MAX_WIDTH, palette.section_alt, |ui| {
        anchor(ui, Section::About, scroll_target);
        about(ui, text, layout, textures, palette);
    });

    centered(ui, TEXT_MAX_WIDTH, palette.background, |ui| {
        process(ui, text, layout, palette);
    });

    centered(ui, TEXT_MAX_WIDTH, palette.section_alt, |ui| {
        anchor(ui, Section::Cv, scroll_target);
        cv(ui, text, layout, palette);
    });

    centered(ui, TEXT_MAX_WIDTH, palette.background, |ui| {
        footer(ui, text, palette, actions);
    });
}

fn gallery_grid(
    ui: &mut egui::Ui,
    text: &Texts,
    gallery: &Gallery,
    columns: usize,
    textures: &mut TextureCache,
    palette: &Palette,
    actions: &mut Vec<UiAction>,
) {
    let columns = columns.max(1);
    let avail = ui.available_width();
    let col_width = ((avail - GRID_GAP * (columns - 1) as f32) / columns as f32).max(80.0);

    // 每件作品放进当前最短的列
    let mut heights = vec![0.0f32; columns];
    let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); columns];
    for (index, art) in gallery.iter().enumerate() {
        let tile = art.aspect().unwrap_or_default().height_for(col_width) + TILE_CAPTION_HEIGHT;
        let shortest = heights
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
            .unwrap_or(0);
        buckets[shortest].push(index);
        heights[shortest] += tile + GRID_GAP;
    }

    ui.horizontal_top(|ui| {
        ui.spacing_mut().item_spacing.x = GRID_GAP;
        for bucket in &buckets {
            ui.vertical(|ui| {
                ui.set_width(col_width);
                for &index in bucket {
                    artwork_tile(ui, text, gallery, index, col_width, textures, palette, actions);
                }
            });
        }
    });
}

#[allow(clippy::too_many_arguments)]
fn artwork_tile(
    ui: &mut egui::Ui,
    text: &Texts,
    gallery: &Gallery,
    index: usize,
    width: f32,
    textures: &mut TextureCache,
    palette: &Palette,
    actions: &mut Vec<UiAction>,
) {
    let Some(art) = gallery.get(index) else { return };
    let size = egui::vec2(width, art.aspect().unwrap_or_default().height_for(width));
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

    let texture = textures
        .get(ui.ctx(), &art.image)
        .map(|t| (t.id(), t.size_vec2()));
    let painter = ui.painter_at(rect);
    match texture {
        Some((id, image_size)) => {
            painter.image(id, rect, textures::cover_uv(image_size, size), egui::Color32::WHITE);
        }
        None => {
            painter.rect_filled(rect, 0.0, palette.tile_placeholder);
        }
    }

    if response.hovered() {
        painter.rect_filled(rect, 0.0, egui::Color32::from_black_alpha(60));
        let mut lines = vec![art.year.clone()];
        lines.extend(art.dimensions.clone());
        let caption = painter.layout(
            format!("{}\n{}", art.title, lines.join("\n")),
            egui::FontId::proportional(13.0),
            egui::Color32::WHITE,
            width - 32.0,
        );
        let pos = egui::pos2(rect.left() + 16.0, rect.bottom() - 16.0 - caption.size().y);
        painter.galley(pos, caption, egui::Color32::WHITE);
    }

    let response = response
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .on_hover_text(text.t("lightbox.viewArtwork"));
    if response.clicked() {
        actions.push(UiAction::OpenArtwork(index));
    }

    ui.add_space(12.0);
    ui.label(RichText::new(&art.title).size(14.0).color(palette.foreground));
    ui.add_space(4.0);
    ui.label(RichText::new(&art.year).small().color(palette.muted));
    ui.add_space(GRID_GAP);
}

fn about(ui: &mut egui::Ui, text: &Texts, layout: &LayoutSignal, textures: &mut TextureCache, palette: &Palette) {
    let [title, intro, description] = catalog::about_keys();
    let portrait = textures
        .get(ui.ctx(), catalog::PORTRAIT_IMAGE)
        .map(|t| (t.id(), t.size_vec2()));

    let draw_portrait = |ui: &mut egui::Ui| {
        let side = ui.available_width().min(560.0);
        let (rect, _) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::hover());
        match portrait {
            Some((id, image_size)) => {
                ui.painter().image(id, rect, textures::cover_uv(image_size, rect.size()), egui::Color32::WHITE);
            }
            None => {
                ui.painter().rect_filled(rect, 0.0, palette.tile_placeholder);
            }
        }
    };
    let draw_text = |ui: &mut egui::Ui| {
        ui.label(RichText::new(text.t(title)).heading().color(palette.foreground));
        ui.add_space(24.0);
        paragraph(ui, text.t(intro), palette);
        paragraph(ui, text.t(description), palette);
    };

    if layout.width().map_or(true, |w| w >= 1024.0) {
        ui.columns(2, |cols| {
            draw_portrait(&mut cols[0]);
            draw_text(&mut cols[1]);
        });
    } else {
        draw_portrait(ui);
        ui.add_space(32.0);
        draw_text(ui);
    }
}

fn paragraph(ui: &mut egui::Ui, s: &str, palette: &Palette) {
    ui.label(RichText::new(s).color(palette.muted));
    ui.add_space(16.0);
}

fn process(ui: &mut egui::Ui, text: &Texts, layout: &LayoutSignal, palette: &Palette) {
    let [title, p1, p2, p3, p4] = catalog::process_keys();
    ui.label(RichText::new(text.t(title)).size(24.0).color(palette.foreground));
    ui.add_space(32.0);

    if layout.desktop_nav() {
        ui.columns(2, |cols| {
            paragraph(&mut cols[0], text.t(p1), palette);
            paragraph(&mut cols[0], text.t(p2), palette);
            paragraph(&mut cols[1], text.t(p3), palette);
            paragraph(&mut cols[1], text.t(p4), palette);
        });
    } else {
        for key in [p1, p2, p3, p4] {
            paragraph(ui, text.t(key), palette);
        }
    }
}

fn cv(ui: &mut egui::Ui, text: &Texts, layout: &LayoutSignal, palette: &Palette) {
    ui.label(RichText::new(text.t(catalog::CV_TITLE_KEY)).size(24.0).color(palette.foreground));
    ui.add_space(32.0);

    let sections = catalog::cv_sections();
    let (left, right) = sections.split_at(2);
    if layout.desktop_nav() {
        ui.columns(2, |cols| {
            for section in left {
                cv_section(&mut cols[0], text, section, palette);
            }
            for section in right {
                cv_section(&mut cols[1], text, section, palette);
            }
        });
    } else {
        for section in &sections {
            cv_section(ui, text, section, palette);
        }
    }
}

fn cv_section(ui: &mut egui::Ui, text: &Texts, section: &CvSection, palette: &Palette) {
    ui.label(RichText::new(text.t(section.title_key)).size(19.0).color(palette.foreground));
    ui.add_space(16.0);
    for entry in section.entries {
        ui.label(RichText::new(text.t(entry.title_key)).color(palette.foreground));
        if let Some(detail) = entry.detail_key {
            ui.add_space(2.0);
            ui.label(RichText::new(text.t(detail)).small().color(palette.muted));
        }
        ui.add_space(14.0);
    }
    ui.add_space(32.0);
}

fn footer(ui: &mut egui::Ui, text: &Texts, palette: &Palette, actions: &mut Vec<UiAction>) {
    ui.separator();
    ui.add_space(24.0);
    ui.horizontal(|ui| {
        let language = text.language();
        let toggle = egui::Button::new(
            RichText::new(format!("🌐 {}", language.toggle_label())).size(13.0).color(palette.muted),
        )
        .frame(false);
        if ui.add(toggle).on_hover_text(language.switch_hint()).clicked() {
            actions.push(UiAction::ToggleLanguage);
        }

        ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
            for key in catalog::footer_keys() {
                ui.label(RichText::new(text.t(key)).size(13.0).color(palette.muted));
                ui.add_space(6.0);
            }
        });
    });
}
