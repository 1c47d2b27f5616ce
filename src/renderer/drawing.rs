use crate::renderer::fonts::FontConfig;
use image::{Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_rect_mut, draw_hollow_circle_mut, draw_hollow_rect_mut,
    draw_line_segment_mut, draw_text_mut,
};
use imageproc::rect::Rect;

pub fn fill(image: &mut RgbaImage, colour: Rgba<u8>) {
    for pixel in image.pixels_mut() {
        *pixel = colour;
    }
}

pub fn horizonal_line(image: &mut RgbaImage, x: u32, y: u32, width: u32) {
    draw_line_segment_mut(
        image,
        (x as f32, y as f32),
        (width as f32, y as f32),
        Rgba([60, 60, 60, 255]),
    );
}

pub fn text(
    image: &mut RgbaImage,
    colour: Rgba<u8>,
    x: i32,
    y: i32,
    font_config: &FontConfig,
    text: &str,
) {
    draw_text_mut(
        image,
        colour,
        x,
        y,
        font_config.scale,
        &font_config.font,
        text,
    );
}

/// `percentage` is 0.0..=1.0; values outside are clamped. A bar or canvas
/// with no area draws nothing.
pub fn progress_bar(
    image: &mut RgbaImage,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    percentage: f32,
    colour: Rgba<u8>,
) {
    if width == 0 || height == 0 || image.width() == 0 || image.height() == 0 {
        return;
    }

    let bg_colour = Rgba([30, 30, 30, 255]);

    // Background
    draw_filled_rect_mut(image, Rect::at(x, y).of_size(width, height), bg_colour);

    // Progress
    let bar_width = (percentage.clamp(0.0, 1.0) * width as f32) as u32;

    if bar_width > 0 {
        draw_filled_rect_mut(image, Rect::at(x, y).of_size(bar_width, height), colour);
    }

    // Border
    draw_hollow_rect_mut(
        image,
        Rect::at(x, y).of_size(width, height),
        Rgba([100, 100, 100, 255]),
    );
}

/// Status lamp: a filled disc when lit, an outline otherwise.
pub fn indicator(image: &mut RgbaImage, x: i32, y: i32, radius: i32, colour: Rgba<u8>, lit: bool) {
    if lit {
        draw_filled_circle_mut(image, (x, y), radius, colour);
    } else {
        draw_hollow_circle_mut(image, (x, y), radius, colour);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);
    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    #[test]
    fn test_progress_bar_fill() {
        let mut image = RgbaImage::new(120, 20);
        fill(&mut image, BLACK);

        progress_bar(&mut image, 0, 0, 100, 10, 0.5, GREEN);

        // Inside the filled half
        assert_eq!(*image.get_pixel(25, 5), GREEN);
        // Inside the empty half
        assert_eq!(*image.get_pixel(75, 5), Rgba([30, 30, 30, 255]));
        // Outside the bar
        assert_eq!(*image.get_pixel(110, 5), BLACK);
    }

    #[test]
    fn test_progress_bar_clamps() {
        let mut image = RgbaImage::new(120, 20);
        progress_bar(&mut image, 0, 0, 100, 10, 7.0, GREEN);
        assert_eq!(*image.get_pixel(98, 5), GREEN);
    }

    #[test]
    fn test_progress_bar_without_area() {
        let mut image = RgbaImage::new(20, 20);
        fill(&mut image, BLACK);

        progress_bar(&mut image, 5, 5, 0, 10, 0.5, GREEN);
        progress_bar(&mut image, 5, 5, 10, 0, 0.5, GREEN);
        assert!(image.pixels().all(|p| *p == BLACK));

        let mut empty = RgbaImage::new(0, 0);
        progress_bar(&mut empty, 0, 0, 10, 10, 0.5, GREEN);
    }

    #[test]
    fn test_indicator_lit_and_unlit() {
        let mut image = RgbaImage::new(40, 40);
        fill(&mut image, BLACK);
        indicator(&mut image, 20, 20, 8, GREEN, true);
        assert_eq!(*image.get_pixel(20, 20), GREEN);

        fill(&mut image, BLACK);
        indicator(&mut image, 20, 20, 8, GREEN, false);
        assert_eq!(*image.get_pixel(20, 20), BLACK);
        assert_eq!(*image.get_pixel(28, 20), GREEN);
    }
}
