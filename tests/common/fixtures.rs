#![allow(dead_code)]

use std::io::Cursor as IoCursor;

use img_caption::{LayoutRequest, Rgba, RgbaImage};

pub const DEJAVU_SANS: &[u8] = include_bytes!("../fixtures/fonts/DejaVuSans.ttf");

pub const BACKGROUND: Rgba<u8> = Rgba([240, 236, 228, 255]);
pub const INK: Rgba<u8> = Rgba([20, 20, 160, 255]);

pub fn background(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, BACKGROUND)
}

pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut out = IoCursor::new(Vec::new());
    background(width, height)
        .write_to(&mut out, image::ImageFormat::Png)
        .expect("encode png fixture");
    out.into_inner()
}

pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    let rgb = image::DynamicImage::ImageRgba8(background(width, height)).into_rgb8();
    let mut out = IoCursor::new(Vec::new());
    rgb.write_to(&mut out, image::ImageFormat::Jpeg)
        .expect("encode jpeg fixture");
    out.into_inner()
}

pub fn request(text: &str) -> LayoutRequest {
    let mut req = LayoutRequest::new(DEJAVU_SANS, text);
    req.font_size_pt = 10.0;
    req.font_color = INK;
    req.start_x = 8;
    req.start_y = 30;
    req
}

/// Coordinates whose pixel differs between two same-sized canvases.
pub fn changed_pixels(before: &RgbaImage, after: &RgbaImage) -> Vec<(u32, u32)> {
    assert_eq!(before.dimensions(), after.dimensions());
    before
        .enumerate_pixels()
        .filter(|(x, y, px)| after.get_pixel(*x, *y) != *px)
        .map(|(x, y, _)| (x, y))
        .collect()
}
