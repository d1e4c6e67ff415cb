use super::*;

fn gradient(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_fn(w, h, |x, y| image::Rgba([x as u8, y as u8, 0, 255]))
}

#[test]
fn default_options_copy_the_source() {
    let src = gradient(3, 2);
    let out = create_image_bitmap(&src, false, &ImageBitmapOptions::default()).unwrap();
    assert_eq!(out.image, src);
    assert!(!out.premultiplied);
}

#[test]
fn crop_then_flip() {
    let src = gradient(4, 4);
    let opts = ImageBitmapOptions {
        src_rect: Some(SrcRect {
            x: 1,
            y: 1,
            width: 2,
            height: 2,
        }),
        flip_y: true,
        ..Default::default()
    };
    let out = create_image_bitmap(&src, false, &opts).unwrap().image;
    assert_eq!(out.dimensions(), (2, 2));
    assert_eq!(out.get_pixel(0, 0).0, [1, 2, 0, 255]);
    assert_eq!(out.get_pixel(1, 1).0, [2, 1, 0, 255]);
}

#[test]
fn crop_outside_source_is_transparent() {
    let src = gradient(2, 2);
    let opts = ImageBitmapOptions {
        src_rect: Some(SrcRect {
            x: -1,
            y: 0,
            width: 2,
            height: 1,
        }),
        ..Default::default()
    };
    let out = create_image_bitmap(&src, false, &opts).unwrap().image;
    assert_eq!(out.get_pixel(0, 0).0, [0, 0, 0, 0]);
    assert_eq!(out.get_pixel(1, 0).0, [0, 0, 0, 255]);
}

#[test]
fn empty_rect_is_rejected() {
    let opts = ImageBitmapOptions {
        src_rect: Some(SrcRect {
            x: 0,
            y: 0,
            width: 0,
            height: 1,
        }),
        ..Default::default()
    };
    assert!(create_image_bitmap(&gradient(2, 2), false, &opts).is_err());
}

#[test]
fn single_resize_dimension_keeps_aspect_ratio() {
    let opts = ImageBitmapOptions {
        resize_width: Some(8),
        resize_quality: ResizeQuality::Pixelated,
        ..Default::default()
    };
    let out = create_image_bitmap(&gradient(4, 2), false, &opts).unwrap().image;
    assert_eq!(out.dimensions(), (8, 4));

    let opts = ImageBitmapOptions {
        resize_height: Some(1),
        ..Default::default()
    };
    let out = create_image_bitmap(&gradient(4, 2), false, &opts).unwrap().image;
    assert_eq!(out.dimensions(), (2, 1));
}

#[test]
fn premultiply_and_back() {
    let src = RgbaImage::from_pixel(1, 1, image::Rgba([200, 100, 50, 128]));
    let pre = create_image_bitmap(
        &src,
        false,
        &ImageBitmapOptions {
            premultiply_alpha: PremultiplyAlpha::Premultiply,
            ..Default::default()
        },
    )
    .unwrap();
    assert!(pre.premultiplied);
    assert_eq!(
        pre.image.get_pixel(0, 0).0,
        [
            ((200u16 * 128 + 127) / 255) as u8,
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            128
        ]
    );

    let straight = create_image_bitmap(
        &pre.image,
        true,
        &ImageBitmapOptions {
            premultiply_alpha: PremultiplyAlpha::None,
            ..Default::default()
        },
    )
    .unwrap();
    assert!(!straight.premultiplied);
    let px = straight.image.get_pixel(0, 0).0;
    for (got, want) in px.iter().zip([200u8, 100, 50, 128]) {
        assert!((*got as i16 - want as i16).abs() <= 1, "{px:?}");
    }
}

#[test]
fn transparent_pixels_premultiply_to_zero() {
    let mut px = [10u8, 20, 30, 0];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(px, [0, 0, 0, 0]);
}
