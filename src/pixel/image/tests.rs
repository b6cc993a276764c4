use crate::pixel::color::{Color, ColorModel, ColorValue, GenericColor, Gray, Nrgba, Rgba64};
use crate::pixel::common::error::PixelError;
use crate::pixel::common::Rect;
use crate::pixel::format::PixelFormat;
use crate::pixel::image::{PixelImage, RasterImage, RasterImageMut, Rgb48Image};
use crate::pixel::kind::ElementKind;

fn gradient(rect: Rect) -> Rgb48Image {
    let mut img = Rgb48Image::new(rect);
    for p in rect.points() {
        let (dx, dy) = ((p.x - rect.min.x) as u16, (p.y - rect.min.y) as u16);
        img.set_rgb48(p.x, p.y, [dx * 0x1000 + 0x0fff, dy * 0x0100, 0xabcd]);
    }
    img
}

#[test]
fn test_rgb48_new_layout() {
    let img = Rgb48Image::new(Rect::new(0, 0, 4, 3));
    assert_eq!(img.stride(), 24);
    assert_eq!(img.pix().len(), 72);
    assert_eq!(img.color_model(), ColorModel::Rgba64);
    assert!(img.opaque());
}

#[test]
fn test_rgb48_pixels_are_big_endian() {
    let mut img = Rgb48Image::new(Rect::new(0, 0, 2, 2));
    img.set_rgb48(1, 0, [0x0102, 0x0304, 0x0506]);
    assert_eq!(img.pix_offset(1, 0), 6);
    assert_eq!(&img.pix()[6..12], &[1, 2, 3, 4, 5, 6]);
    assert_eq!(img.rgb48_at(1, 0), [0x0102, 0x0304, 0x0506]);
    assert_eq!(img.at(1, 0).rgba(), (0x0102, 0x0304, 0x0506, 0xffff));
}

#[test]
fn test_rgb48_offset_respects_origin() {
    let img = Rgb48Image::new(Rect::new(10, 20, 13, 22));
    assert_eq!(img.pix_offset(10, 20), 0);
    assert_eq!(img.pix_offset(12, 21), 18 + 12);
}

#[test]
fn test_rgb48_outside_bounds() {
    let mut img = Rgb48Image::new(Rect::new(0, 0, 2, 2));
    img.set_rgb48(2, 0, [1, 2, 3]);
    img.set(-1, 1, &Gray { y: 0xff }.into());
    assert!(img.pix().iter().all(|&b| b == 0));
    assert_eq!(img.rgb48_at(5, 5), [0; 3]);
    assert_eq!(img.at(0, 2).rgba(), (0, 0, 0, 0));
}

#[test]
fn test_rgb48_set_converts_through_rgba64() {
    let mut img = Rgb48Image::new(Rect::new(0, 0, 1, 1));
    img.set(0, 0, &Gray { y: 0x80 }.into());
    assert_eq!(img.rgb48_at(0, 0), [0x8080, 0x8080, 0x8080]);

    // Alpha is dropped after premultiplication.
    img.set(0, 0, &Nrgba { r: 0xff, g: 0, b: 0, a: 0x80 }.into());
    assert_eq!(img.rgb48_at(0, 0), [0x8080, 0, 0]);

    let pix = vec![0x12, 0x34, 0, 0, 0xff, 0xff];
    let generic = GenericColor::from_bytes(3, ElementKind::U16, pix).unwrap();
    img.set(0, 0, &generic.into());
    assert_eq!(img.rgb48_at(0, 0), [0x1234, 0, 0xffff]);
}

#[test]
fn test_rgb48_sub_image_shares_pixels() {
    let img = gradient(Rect::new(0, 0, 4, 4));
    let sub = img.sub_image(Rect::new(1, 2, 10, 3));
    assert_eq!(sub.bounds(), Rect::new(1, 2, 4, 3));
    assert_eq!(sub.stride(), img.stride());
    assert_eq!(sub.rgb48_at(3, 2), img.rgb48_at(3, 2));
    assert_eq!(sub.rgb48_at(0, 2), [0; 3]);
}

#[test]
fn test_rgb48_sub_image_mut_writes_through() {
    let mut img = Rgb48Image::new(Rect::new(0, 0, 3, 3));
    {
        let mut sub = img.sub_image_mut(Rect::new(1, 1, 3, 3));
        sub.set_rgb48(2, 2, [7, 8, 9]);
        sub.set(1, 1, &Rgba64 { r: 1, g: 2, b: 3, a: 0xffff }.into());
    }
    assert_eq!(img.rgb48_at(2, 2), [7, 8, 9]);
    assert_eq!(img.rgb48_at(1, 1), [1, 2, 3]);
}

#[test]
fn test_rgb48_empty_sub_image() {
    let mut img = Rgb48Image::new(Rect::new(0, 0, 2, 2));
    let sub = img.sub_image(Rect::new(5, 5, 8, 8));
    assert!(sub.bounds().is_empty());
    assert!(sub.pix().is_empty());
    assert_eq!(sub.at(5, 5).rgba(), (0, 0, 0, 0));

    let mut sub = img.sub_image_mut(Rect::new(2, 0, 4, 2));
    sub.set_rgb48(2, 0, [1, 1, 1]);
    assert!(sub.pix().is_empty());
}

#[test]
fn test_rgb48_from_raw_checks_buffer() {
    let rect = Rect::new(0, 0, 2, 2);

    let err = Rgb48Image::from_raw(vec![0u8; 24], 10, rect).unwrap_err();
    assert_eq!(err, PixelError::InvalidStride { stride: 10, row: 12 });

    let err = Rgb48Image::from_raw(vec![0u8; 23], 12, rect).unwrap_err();
    assert_eq!(err, PixelError::BufferTooSmall { expected: 24, actual: 23 });

    // The last row does not need padding up to the stride.
    let img = Rgb48Image::from_raw(vec![0u8; 28], 16, rect).unwrap();
    assert_eq!(img.pix_offset(1, 1), 22);

    let data = [0x11u8; 12];
    let borrowed = Rgb48Image::from_raw(&data[..], 12, Rect::new(0, 0, 2, 1)).unwrap();
    assert_eq!(borrowed.rgb48_at(1, 0), [0x1111; 3]);
}

#[test]
fn test_rgb48_from_image_drops_alpha() {
    let mut src = PixelImage::new(Rect::new(0, 0, 2, 1), PixelFormat::RGBA8);
    src.set(0, 0, &Rgba64 { r: 0xffff, g: 0x8080, b: 0, a: 0xffff }.into());
    src.set(1, 0, &Rgba64 { r: 0x1234, g: 0, b: 0, a: 0 }.into());

    let rgb = Rgb48Image::from_image(&src);
    assert_eq!(rgb.bounds(), src.bounds());
    assert_eq!(rgb.rgb48_at(0, 0), [0xffff, 0x8080, 0]);
    assert_eq!(rgb.rgb48_at(1, 0), [0, 0, 0]);
}

#[test]
fn test_pixel_image_layout() {
    let format = PixelFormat::new(3, ElementKind::F32);
    let img = PixelImage::new(Rect::new(0, 0, 5, 2), format);
    assert_eq!(img.stride(), 60);
    assert_eq!(img.pix().len(), 120);
    assert_eq!(img.pix_offset(4, 1), 108);
    assert_eq!(img.color_model(), ColorModel::Generic(format));
}

#[test]
fn test_pixel_image_set_converts() {
    let mut img = PixelImage::new(Rect::new(0, 0, 2, 2), PixelFormat::GRAY16);
    img.set(1, 1, &Rgba64 { r: 0x1234, g: 0x5678, b: 0x9abc, a: 0xffff }.into());
    let px = img.pixel_at(1, 1);
    assert_eq!(px.pix, 18903u16.to_be_bytes().to_vec());
    assert_eq!(img.at(1, 1).rgba(), (18903, 18903, 18903, 0xffff));
    assert_eq!(img.pixel_at(0, 0).pix, vec![0, 0]);
}

#[test]
fn test_pixel_image_outside_is_empty_color() {
    let mut img = PixelImage::new(Rect::new(0, 0, 1, 1), PixelFormat::RGB8);
    img.set(3, 3, &Gray { y: 9 }.into());
    let px = img.pixel_at(3, 3);
    assert!(px.is_empty());
    assert_eq!(px.format(), PixelFormat::RGB8);
    assert_eq!(img.pix(), &[0, 0, 0]);
}

#[test]
fn test_pixel_image_set_pixel_copies_bytes() {
    let mut img = PixelImage::new(Rect::new(0, 0, 2, 1), PixelFormat::RGB8);
    let c = GenericColor::from_bytes(3, ElementKind::U8, vec![1, 2, 3]).unwrap();
    img.set_pixel(1, 0, &c);
    assert_eq!(img.pix(), &[0, 0, 0, 1, 2, 3]);
    assert_eq!(img.pixel_at(1, 0), c);
}

#[test]
fn test_pixel_image_opaque_scans_alpha() {
    let mut img = PixelImage::new(Rect::new(0, 0, 2, 2), PixelFormat::RGBA16);
    assert!(!img.opaque());

    for p in img.bounds().points() {
        img.set(p.x, p.y, &Gray { y: 0x10 }.into());
    }
    assert!(img.opaque());

    img.set(1, 1, &Rgba64 { r: 0, g: 0, b: 0, a: 0xfffe }.into());
    assert!(!img.opaque());

    assert!(PixelImage::new(Rect::new(0, 0, 2, 2), PixelFormat::RGB8).opaque());
    assert!(PixelImage::new(Rect::default(), PixelFormat::RGBA8).opaque());
}

#[test]
fn test_pixel_image_from_rgb48_round_trip() {
    let src = gradient(Rect::new(-2, -1, 2, 2));
    let wide = PixelImage::from_image(&src, PixelFormat::RGB16);
    let back = Rgb48Image::from_image(&wide);
    assert_eq!(back, src);

    let narrow = PixelImage::from_image(&src, PixelFormat::RGB8);
    let back = Rgb48Image::from_image(&narrow);
    for p in src.bounds().points() {
        let a = src.rgb48_at(p.x, p.y);
        let b = back.rgb48_at(p.x, p.y);
        for i in 0..3 {
            assert!(a[i].abs_diff(b[i]) <= 0xff);
        }
    }
}

#[test]
fn test_pixel_image_sub_images() {
    let src = gradient(Rect::new(0, 0, 4, 4));
    let mut img = PixelImage::from_image(&src, PixelFormat::RGBA8);

    let sub = img.sub_image(Rect::new(2, 2, 4, 4));
    assert_eq!(sub.bounds(), Rect::new(2, 2, 4, 4));
    assert_eq!(sub.pixel_at(3, 3), img.pixel_at(3, 3));
    assert_eq!(sub.format(), PixelFormat::RGBA8);

    let empty = img.sub_image(Rect::new(8, 8, 9, 9));
    assert!(empty.pix().is_empty());
    assert_eq!(empty.format(), PixelFormat::RGBA8);

    {
        let mut sub = img.sub_image_mut(Rect::new(0, 0, 1, 1));
        sub.set(0, 0, &ColorValue::from(Gray { y: 0xff }));
    }
    assert_eq!(img.pixel_at(0, 0).pix, vec![0xff, 0xff, 0xff, 0xff]);
}

#[test]
fn test_pixel_image_from_raw_validates_format() {
    let rect = Rect::new(0, 0, 2, 1);
    let invalid = PixelFormat::new(2, ElementKind::Invalid);
    let err = PixelImage::from_raw(vec![0u8; 4], 4, rect, invalid).unwrap_err();
    assert!(matches!(err, PixelError::UnsupportedKind(_)));

    let err = PixelImage::from_raw(vec![0u8; 3], 4, rect, PixelFormat::GRAY16).unwrap_err();
    assert_eq!(err, PixelError::BufferTooSmall { expected: 4, actual: 3 });

    let img = PixelImage::from_raw(vec![0, 1, 0, 2], 4, rect, PixelFormat::GRAY16).unwrap();
    assert_eq!(img.at(1, 0).rgba(), (2, 2, 2, 0xffff));
}
