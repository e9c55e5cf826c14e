use eframe::egui::{self, Color32};

// 页面配色
#[derive(Clone, PartialEq)]
pub struct Palette {
    pub background: Color32,
    pub section_alt: Color32,
    pub foreground: Color32,
    pub muted: Color32,
    pub border: Color32,
    pub tile_placeholder: Color32,

    pub overlay: Color32,
    pub overlay_text: Color32,
    pub overlay_text_dim: Color32,
    pub overlay_button_hover: Color32,
}

impl Palette {
    /// Light page with a near-black lightbox
    pub fn gallery() -> Self {
        Self {
            background: Color32::WHITE,
            section_alt: Color32::from_rgb(246, 246, 244),
            foreground: Color32::from_rgb(23, 23, 23),
            muted: Color32::from_rgb(115, 115, 115),
            border: Color32::from_rgb(229, 229, 229),
            tile_placeholder: Color32::from_rgb(240, 240, 238),

            overlay: Color32::from_black_alpha(242),
            overlay_text: Color32::WHITE,
            overlay_text_dim: Color32::from_white_alpha(200),
            overlay_button_hover: Color32::from_white_alpha(26),
        }
    }

    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::light();

        visuals.window_fill = self.background;
        visuals.panel_fill = self.background;
        visuals.faint_bg_color = self.section_alt;
        visuals.override_text_color = Some(self.foreground);
        visuals.hyperlink_color = self.foreground;
        visuals.window_rounding = egui::Rounding::ZERO;
        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, self.border);

        ctx.set_visuals(visuals);

        let mut style = (*ctx.style()).clone();
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.text_styles.insert(egui::TextStyle::Heading, egui::FontId::proportional(28.0));
        style.text_styles.insert(egui::TextStyle::Body, egui::FontId::proportional(15.0));
        style.text_styles.insert(egui::TextStyle::Small, egui::FontId::proportional(12.0));
        ctx.set_style(style);
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::gallery()
    }
}
