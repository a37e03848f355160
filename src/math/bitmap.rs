// Copyright 2020 @TwoCookingMice

use super::color::Color;

use std::ops;
use std::vec::Vec;

#[derive(Debug, Clone)]
pub struct Bitmap {
    data: Vec<Color>,
    height: usize,
    width: usize
}

impl ops::Index<(usize, usize)> for Bitmap {
    type Output = Color;

    fn index(&self, index: (usize, usize)) -> &Color {
        debug_assert!(index.0 < self.width && index.1 < self.height);
        &self.data[index.0 + self.width * index.1]
    }
}

impl ops::IndexMut<(usize, usize)> for Bitmap {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Color {
        debug_assert!(index.0 < self.width && index.1 < self.height);
        &mut self.data[index.0 + self.width * index.1]
    }
}

impl Bitmap {
    pub fn new(width: usize, height: usize) -> Self {
        let pixel_number = width * height;
        Self { data: vec!(Color::black(); pixel_number),
               width: width,
               height: height }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.data
    }
}

/* Test for Bitmap */
#[cfg(test)]
mod tests {
    use super::Bitmap;
    use super::Color;

    #[test]
    fn test_bitmap_basic_functions() {
        let mut bitmap = Bitmap::new(256usize, 128usize);
        assert_eq!(bitmap.width(), 256);
        assert_eq!(bitmap.height(), 128);

        bitmap[(5, 6)] = Color::new(1.0, 0.5, 0.6);
        assert_eq!(bitmap[(5, 6)].r(), 1.0);
        assert_eq!(bitmap[(2, 6)].r(), 0.0);
        assert_eq!(bitmap.pixels()[5 + 256 * 6].g(), 0.5);
    }
}
