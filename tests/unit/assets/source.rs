use super::*;

#[test]
fn bitmap_rejects_mismatched_buffers() {
    assert!(Bitmap::from_rgba8(2, 2, vec![0; 16]).is_ok());
    assert!(Bitmap::from_rgba8(2, 2, vec![0; 15]).is_err());
    assert!(Bitmap::from_rgba8(0, 2, Vec::new()).is_err());
}

#[test]
fn bitmap_drawable_is_passed_through() {
    let bitmap = Bitmap::from_rgba8(1, 2, vec![9, 8, 7, 6, 5, 4, 3, 2]).unwrap();
    let out = rasterize(&bitmap).unwrap();
    assert_eq!(out.dimensions(), (1, 2));
    assert_eq!(out.get_pixel(0, 1).0, [5, 4, 3, 2]);
}

#[test]
fn non_bitmap_is_drawn_at_intrinsic_size() {
    let drawable = ColorDrawable {
        rgba: [255, 0, 0, 128],
        size: Some(Size::new(3, 2).unwrap()),
    };
    let out = rasterize(&drawable).unwrap();
    assert_eq!(out.dimensions(), (3, 2));
    assert!(out.pixels().all(|p| p.0 == [255, 0, 0, 128]));
}

#[test]
fn drawable_without_size_fails() {
    let drawable = ColorDrawable {
        rgba: [0, 0, 0, 255],
        size: None,
    };
    let err = rasterize(&drawable).unwrap_err();
    assert!(err.to_string().starts_with("resource error: "));
}

#[test]
fn table_resolves_registered_ids_only() {
    let mut table = ResourceTable::new();
    table.insert(
        0x7f01,
        ColorDrawable {
            rgba: [1, 1, 1, 1],
            size: Some(Size::new(1, 1).unwrap()),
        },
    );
    assert!(table.resolve(0x7f01).is_ok());
    let err = table.resolve(0x7f02).err().unwrap();
    assert!(err.to_string().contains("0x7f02"));
}

#[test]
fn source_kinds() {
    assert_eq!(AssetSource::Url("file:///x.png".into()).kind(), "url");
    assert_eq!(AssetSource::Buffer(Arc::from(vec![1u8])).kind(), "buffer");
    assert_eq!(AssetSource::Resource(1).kind(), "resource");
}
