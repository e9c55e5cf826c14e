/// 作品：一件展出的作品及其图片
#[derive(Debug, Clone, PartialEq)]
pub struct Artwork {
    /// Unique within a gallery
    pub id: u32,
    pub title: String,
    pub year: String,
    pub dimensions: Option<String>,
    pub materials: Option<String>,
    pub photographer: Option<String>,
    pub description: Option<String>,

    /// Primary image, relative to the asset root
    pub image: String,
    /// Close-up shown by the lightbox detail toggle
    pub detail_image: Option<String>,

    /// Display hint written as "W/H"
    pub aspect_ratio: Option<String>,
}

impl Artwork {
    pub fn new(id: u32, title: impl Into<String>, year: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            year: year.into(),
            dimensions: None,
            materials: None,
            photographer: None,
            description: None,
            image: image.into(),
            detail_image: None,
            aspect_ratio: None,
        }
    }

    pub fn with_dimensions(mut self, dimensions: impl Into<String>) -> Self {
        self.dimensions = Some(dimensions.into());
        self
    }

    pub fn with_materials(mut self, materials: impl Into<String>) -> Self {
        self.materials = Some(materials.into());
        self
    }

    pub fn with_photographer(mut self, photographer: impl Into<String>) -> Self {
        self.photographer = Some(photographer.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_detail_image(mut self, detail_image: impl Into<String>) -> Self {
        self.detail_image = Some(detail_image.into());
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: impl Into<String>) -> Self {
        self.aspect_ratio = Some(aspect_ratio.into());
        self
    }

    #[inline]
    pub fn has_detail_image(&self) -> bool {
        self.detail_image.is_some()
    }

    /// Parsed aspect hint, `None` when absent or malformed
    pub fn aspect(&self) -> Option<AspectRatio> {
        self.aspect_ratio.as_deref().and_then(AspectRatio::parse)
    }
}

/// 宽高比
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AspectRatio {
    pub width: u32,
    pub height: u32,
}

impl AspectRatio {
    pub const SQUARE: AspectRatio = AspectRatio { width: 1, height: 1 };

    /// Parse "W/H" with positive integers, surrounding whitespace allowed
    pub fn parse(s: &str) -> Option<Self> {
        let (w, h) = s.split_once('/')?;
        let width: u32 = w.trim().parse().ok()?;
        let height: u32 = h.trim().parse().ok()?;
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self { width, height })
    }

    /// width / height
    #[inline]
    pub fn ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Height of a tile of the given width
    #[inline]
    pub fn height_for(&self, width: f32) -> f32 {
        width / self.ratio()
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::SQUARE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_ratio_parse() {
        assert_eq!(AspectRatio::parse("4/5"), Some(AspectRatio { width: 4, height: 5 }));
        assert_eq!(AspectRatio::parse(" 1 / 1 "), Some(AspectRatio::SQUARE));
        assert_eq!(AspectRatio::parse("4:5"), None);
        assert_eq!(AspectRatio::parse("0/5"), None);
        assert_eq!(AspectRatio::parse("a/b"), None);
    }

    #[test]
    fn test_height_for() {
        let portrait = AspectRatio::parse("4/5").unwrap();
        assert_eq!(portrait.height_for(400.0), 500.0);
    }

    #[test]
    fn test_builder() {
        let art = Artwork::new(7, "Kyss meg", "2024", "/images/kyss-meg.jpeg")
            .with_detail_image("/images/detalj-kyss-meg.png")
            .with_aspect_ratio("1/1");

        assert!(art.has_detail_image());
        assert_eq!(art.aspect(), Some(AspectRatio::SQUARE));
        assert!(art.description.is_none());
    }
}
