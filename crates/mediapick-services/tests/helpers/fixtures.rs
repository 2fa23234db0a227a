//! In-memory media fixtures

use bytes::Bytes;
use image::codecs::jpeg::JpegEncoder;
use image::{Rgb, RgbImage};
use img_parts::jpeg::Jpeg;
use img_parts::ImageEXIF;

/// Big-endian TIFF block carrying only an Orientation tag
fn orientation_exif(orientation: u16) -> Vec<u8> {
    let mut tiff = vec![
        b'M', b'M', 0x00, 0x2A, 0x00, 0x00, 0x00, 0x08, // header, IFD0 at 8
        0x00, 0x01, // one entry
        0x01, 0x12, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01, // Orientation, SHORT, count 1
    ];
    tiff.extend_from_slice(&orientation.to_be_bytes());
    tiff.extend_from_slice(&[0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
    tiff
}

/// Left half red, right half blue
pub fn split_jpeg(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgb([255, 0, 0])
        } else {
            Rgb([0, 0, 255])
        }
    });
    let mut out = Vec::new();
    img.write_with_encoder(JpegEncoder::new_with_quality(&mut out, 95))
        .unwrap();
    out
}

pub fn split_jpeg_with_orientation(width: u32, height: u32, orientation: u16) -> Vec<u8> {
    let mut jpeg = Jpeg::from_bytes(Bytes::from(split_jpeg(width, height))).unwrap();
    jpeg.set_exif(Some(Bytes::from(orientation_exif(orientation))));
    jpeg.encoder().bytes().to_vec()
}

/// Solid PNG; width doubles as an identifier in ordering tests
pub fn png_of_width(width: u32) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, 2, Rgb([20, 160, 60]));
    let mut out = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut out), image::ImageFormat::Png)
        .unwrap();
    out
}

/// Arbitrary bytes standing in for a video container
pub fn fake_video(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}
