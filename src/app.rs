//! App module - main application state and frame loop

use eframe::egui;
use std::path::PathBuf;

use portfolio::catalog::Section;
use portfolio::{Gallery, LayoutSignal, Lightbox, MenuState, ScrollLock, SwipeTracker};

use crate::theme::Palette;
use crate::ui::{lightbox_view, page, TextureCache, Texts, UiAction};

pub struct PortfolioApp {
    pub text: Texts,
    pub lightbox: Lightbox,
    pub swipe: SwipeTracker,
    pub layout: LayoutSignal,
    pub menu: MenuState,
    pub textures: TextureCache,
    pub palette: Palette,
    pub scroll_target: Option<Section>,
    pub first_frame: bool,
}

impl PortfolioApp {
    pub fn new(text: Texts, gallery: Gallery, asset_root: PathBuf) -> Self {
        let textures = TextureCache::new(asset_root);
        tracing::info!(
            artworks = gallery.len(),
            assets = %textures.root().display(),
            "portfolio ready"
        );
        Self {
            text,
            lightbox: Lightbox::new(gallery, ScrollLock::new()),
            swipe: SwipeTracker::new(),
            layout: LayoutSignal::new(),
            menu: MenuState::default(),
            textures,
            palette: Palette::gallery(),
            scroll_target: None,
            first_frame: true,
        }
    }

    fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::OpenArtwork(index) => {
                if let Err(e) = self.lightbox.open(index) {
                    tracing::error!("{}", e);
                }
            }
            UiAction::ToggleLanguage => {
                self.text.toggle();
                tracing::info!(language = self.text.language().code(), "language changed");
            }
            UiAction::ToggleMenu => self.menu.toggle(),
            UiAction::Navigate(section) => {
                self.menu.close();
                self.scroll_target = Some(section);
            }
        }
    }

    fn handle_lightbox_input(&mut self, ctx: &egui::Context) {
        if !self.lightbox.is_open() {
            self.swipe.cancel();
            return;
        }
        for key in lightbox_view::pressed_keys(ctx) {
            self.lightbox.handle_key(key);
        }
        if let Some(swipe) = lightbox_view::track_swipe(ctx, &mut self.swipe) {
            tracing::debug!(?swipe, "swipe");
            swipe.apply(&mut self.lightbox);
        }
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            self.palette.apply(ctx);
            self.first_frame = false;
        }

        self.layout.resize(ctx.screen_rect().width());
        self.handle_lightbox_input(ctx);

        let mut actions = Vec::new();

        page::header(ctx, &self.text, &self.layout, &self.menu, &self.palette, &mut actions);

        let locked = self.lightbox.scroll_lock().is_locked();
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(self.palette.background))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .enable_scrolling(!locked)
                    .show(ui, |ui| {
                        page::body(
                            ui,
                            &self.text,
                            self.lightbox.gallery(),
                            &self.layout,
                            &mut self.textures,
                            &self.palette,
                            &mut self.scroll_target,
                            &mut actions,
                        );
                    });
            });

        // the overlay sits above the page layers, so page actions only arrive while it is closed
        if self.lightbox.is_open() {
            lightbox_view::show(
                ctx,
                &mut self.lightbox,
                &self.text,
                &mut self.textures,
                &self.palette,
                self.layout.breakpoint(),
            );
        }

        for action in actions {
            self.apply(action);
        }
    }
}
