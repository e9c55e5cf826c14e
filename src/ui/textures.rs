//! Decoded artwork textures, loaded on first use

use eframe::egui;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Longest side uploaded to the GPU
const MAX_TEXTURE_SIDE: u32 = 2048;

pub struct TextureCache {
    root: PathBuf,
    // None = failed to load, not retried
    entries: HashMap<String, Option<egui::TextureHandle>>,
}

impl TextureCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), entries: HashMap::new() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Asset paths are written site-style ("/images/x.png") and resolved
    /// against the asset root.
    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }

    pub fn get(&mut self, ctx: &egui::Context, path: &str) -> Option<&egui::TextureHandle> {
        if !self.entries.contains_key(path) {
            let full = self.resolve(path);
            let loaded = match load_texture(ctx, &full, path) {
                Ok(handle) => {
                    tracing::debug!(path, "texture loaded");
                    Some(handle)
                }
                Err(e) => {
                    tracing::warn!(path = %full.display(), "failed to load image: {}", e);
                    None
                }
            };
            self.entries.insert(path.to_string(), loaded);
        }
        self.entries.get(path).and_then(Option::as_ref)
    }
}

fn load_texture(ctx: &egui::Context, full: &Path, name: &str) -> Result<egui::TextureHandle, image::ImageError> {
    let mut img = image::open(full)?;
    if img.width() > MAX_TEXTURE_SIDE || img.height() > MAX_TEXTURE_SIDE {
        img = img.thumbnail(MAX_TEXTURE_SIDE, MAX_TEXTURE_SIDE);
    }
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let color = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
    Ok(ctx.load_texture(name, color, egui::TextureOptions::LINEAR))
}

/// Largest rect with the image's aspect that fits inside `bounds`, centered
pub fn contain(image_size: egui::Vec2, bounds: egui::Rect) -> egui::Rect {
    if image_size.x <= 0.0 || image_size.y <= 0.0 {
        return bounds;
    }
    let scale = (bounds.width() / image_size.x).min(bounds.height() / image_size.y);
    egui::Rect::from_center_size(bounds.center(), image_size * scale)
}

/// UV sub-rect that crops the image to fill `target` without distortion
pub fn cover_uv(image_size: egui::Vec2, target: egui::Vec2) -> egui::Rect {
    let full = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
    if image_size.x <= 0.0 || image_size.y <= 0.0 || target.x <= 0.0 || target.y <= 0.0 {
        return full;
    }
    let image_ratio = image_size.x / image_size.y;
    let target_ratio = target.x / target.y;
    if image_ratio > target_ratio {
        // wider than the tile: crop left and right
        let w = target_ratio / image_ratio;
        egui::Rect::from_min_max(egui::pos2((1.0 - w) / 2.0, 0.0), egui::pos2((1.0 + w) / 2.0, 1.0))
    } else {
        let h = image_ratio / target_ratio;
        egui::Rect::from_min_max(egui::pos2(0.0, (1.0 - h) / 2.0), egui::pos2(1.0, (1.0 + h) / 2.0))
    }
}
