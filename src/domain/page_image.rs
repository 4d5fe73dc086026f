use image::RgbImage;

/// A decoded bitmap for one page. Raster uploads are always page 0.
#[derive(Debug, Clone)]
pub struct PageImage {
    page_index: u32,
    bitmap: RgbImage,
}

impl PageImage {
    pub fn new(page_index: u32, bitmap: RgbImage) -> Self {
        Self { page_index, bitmap }
    }

    pub fn page_index(&self) -> u32 {
        self.page_index
    }

    pub fn width(&self) -> u32 {
        self.bitmap.width()
    }

    pub fn height(&self) -> u32 {
        self.bitmap.height()
    }

    pub fn bitmap(&self) -> &RgbImage {
        &self.bitmap
    }

    pub fn into_bitmap(self) -> RgbImage {
        self.bitmap
    }
}
