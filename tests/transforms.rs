use bmpedit::*;

fn px(r: u8, g: u8, b: u8) -> RGB8 {
    RGB8 { r, g, b }
}

/// Grid where each pixel encodes its own coordinates: r = x, g = y.
fn coord_doc(w: usize, h: usize) -> Document {
    let mut pixels = Vec::with_capacity(w * h);
    for y in 0..h {
        for x in 0..w {
            pixels.push(px(x as u8, y as u8, 7));
        }
    }
    Document::new(PixelGrid::from_pixels(pixels, w, h).unwrap())
}

#[test]
fn flip_horizontal_mirrors_rows() {
    let mut doc = coord_doc(3, 2);
    doc.flip_horizontal();
    assert_eq!(doc.grid().pixel(0, 0), Some(px(2, 0, 7)));
    assert_eq!(doc.grid().pixel(2, 0), Some(px(0, 0, 7)));
    assert_eq!(doc.grid().pixel(1, 1), Some(px(1, 1, 7)));
    assert_eq!(doc.info.width, 3);
    assert_eq!(doc.info.height, 2);
}

#[test]
fn flip_vertical_mirrors_columns() {
    let mut doc = coord_doc(2, 3);
    doc.flip_vertical();
    assert_eq!(doc.grid().pixel(0, 0), Some(px(0, 2, 7)));
    assert_eq!(doc.grid().pixel(1, 2), Some(px(1, 0, 7)));
    assert_eq!(doc.grid().pixel(0, 1), Some(px(0, 1, 7)));
}

#[test]
fn flips_are_involutions() {
    for (w, h) in [(1, 1), (4, 3), (5, 2), (3, 5)] {
        let original = coord_doc(w, h);

        let mut doc = original.clone();
        doc.flip_horizontal();
        doc.flip_horizontal();
        assert_eq!(doc, original);

        let mut doc = original.clone();
        doc.flip_vertical();
        doc.flip_vertical();
        assert_eq!(doc, original);
    }
}

#[test]
fn transpose_swaps_axes_and_metadata() {
    let mut doc = coord_doc(3, 2);
    doc.transpose();
    assert_eq!(doc.grid().width(), 2);
    assert_eq!(doc.grid().height(), 3);
    // new[c][r] = old[r][c]
    assert_eq!(doc.grid().pixel(1, 2), Some(px(2, 1, 7)));
    assert_eq!(doc.grid().pixel(0, 0), Some(px(0, 0, 7)));

    assert_eq!(doc.info.width, 2);
    assert_eq!(doc.info.height, 3);
    assert_eq!(doc.padding(), row_padding(2));
    assert_eq!(u64::from(doc.header.file_size), calculate_size(2, 3));
}

#[test]
fn transpose_is_an_involution() {
    let original = coord_doc(5, 3);
    let mut doc = original.clone();
    doc.transpose();
    doc.transpose();
    assert_eq!(doc, original);
}

#[test]
fn rotations_invert_each_other() {
    let original = coord_doc(4, 3);
    let mut doc = original.clone();
    doc.rotate90_left();
    assert_eq!(doc.info.width, 3);
    assert_eq!(doc.info.height, 4);
    doc.rotate90_right();
    assert_eq!(doc, original);
}

#[test]
fn rotate_right_moves_bottom_left_to_top_left() {
    let mut doc = coord_doc(2, 2);
    doc.rotate90_right();
    assert_eq!(doc.grid().pixel(0, 0), Some(px(0, 1, 7)));
    assert_eq!(doc.grid().pixel(1, 0), Some(px(0, 0, 7)));
    assert_eq!(doc.grid().pixel(0, 1), Some(px(1, 1, 7)));
    assert_eq!(doc.grid().pixel(1, 1), Some(px(1, 0, 7)));
}

#[test]
fn rotate_left_moves_top_right_to_top_left() {
    let mut doc = coord_doc(2, 2);
    doc.rotate90_left();
    assert_eq!(doc.grid().pixel(0, 0), Some(px(1, 0, 7)));
    assert_eq!(doc.grid().pixel(1, 0), Some(px(1, 1, 7)));
    assert_eq!(doc.grid().pixel(0, 1), Some(px(0, 0, 7)));
    assert_eq!(doc.grid().pixel(1, 1), Some(px(0, 1, 7)));
}

#[test]
fn crop_selects_exclusive_span() {
    let mut doc = coord_doc(4, 3);
    doc.crop(1, 0, 3, 2).unwrap();
    // Span is end - begin: the end column/row is not included.
    assert_eq!(doc.grid().width(), 2);
    assert_eq!(doc.grid().height(), 2);
    assert_eq!(doc.grid().pixel(0, 0), Some(px(1, 0, 7)));
    assert_eq!(doc.grid().pixel(1, 1), Some(px(2, 1, 7)));

    assert_eq!(doc.info.width, 2);
    assert_eq!(doc.info.height, 2);
    assert_eq!(doc.padding(), row_padding(2));
    assert_eq!(u64::from(doc.header.file_size), calculate_size(2, 2));
}

#[test]
fn crop_roundtrips_through_the_codec() {
    let mut doc = coord_doc(5, 4);
    doc.crop(0, 1, 4, 3).unwrap();
    let back = Document::from_bytes(&doc.to_bytes()).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn crop_rejects_bad_bounds_and_leaves_document_unmodified() {
    let original = coord_doc(4, 3);

    let cases = [
        (3, 0, 1, 2), // x_begin > x_end
        (0, 0, 4, 2), // x_end == width
        (5, 0, 6, 2), // x_begin >= width
        (0, 2, 2, 1), // y_begin > y_end
        (0, 0, 2, 3), // y_end == height
    ];
    for (x0, y0, x1, y1) in cases {
        let mut doc = original.clone();
        let err = doc.crop(x0, y0, x1, y1).unwrap_err();
        assert!(
            matches!(err, BmpError::OutOfRange(_)),
            "crop({x0},{y0},{x1},{y1}): {err:?}"
        );
        assert_eq!(doc, original, "crop({x0},{y0},{x1},{y1}) mutated the document");
    }
}

#[test]
fn invert_colors() {
    let mut doc = Document::new(PixelGrid::from_pixels(vec![px(0, 128, 255)], 1, 1).unwrap());
    doc.invert_colors();
    assert_eq!(doc.grid().pixel(0, 0), Some(px(255, 127, 0)));
    doc.invert_colors();
    assert_eq!(doc.grid().pixel(0, 0), Some(px(0, 128, 255)));
}

#[test]
fn grayscale_uses_remainder_corrected_average() {
    // 10/3 + 20/3 + 30/3 + ((10%3 + 20%3 + 30%3) / 3) = 3+6+10 + (3/3) = 20
    let mut doc = Document::new(PixelGrid::from_pixels(vec![px(10, 20, 30)], 1, 1).unwrap());
    doc.grayscale();
    assert_eq!(doc.grid().pixel(0, 0), Some(px(20, 20, 20)));

    // Saturated input stays saturated.
    let mut doc = Document::new(PixelGrid::from_pixels(vec![px(255, 255, 255)], 1, 1).unwrap());
    doc.grayscale();
    assert_eq!(doc.grid().pixel(0, 0), Some(px(255, 255, 255)));
}

#[test]
fn sepia_clamps_at_white() {
    // Every weighted sum for (255,255,255) exceeds 255 (the weights sum
    // past 1.0), so all three channels clamp.
    let mut doc = Document::new(PixelGrid::from_pixels(vec![px(255, 255, 255)], 1, 1).unwrap());
    doc.sepia();
    assert_eq!(doc.grid().pixel(0, 0), Some(px(255, 255, 255)));
}

#[test]
fn sepia_truncates_weighted_sums() {
    // (100, 50, 25): r = 39.3 + 38.45 + 4.725 = 82.475 → 82
    //                g = 34.9 + 34.3  + 4.2   = 73.4   → 73
    //                b = 27.2 + 26.7  + 3.275 = 57.175 → 57
    let mut doc = Document::new(PixelGrid::from_pixels(vec![px(100, 50, 25)], 1, 1).unwrap());
    doc.sepia();
    assert_eq!(doc.grid().pixel(0, 0), Some(px(82, 73, 57)));
}

#[test]
fn channel_isolation() {
    let source = px(10, 20, 30);

    let mut doc = Document::new(PixelGrid::from_pixels(vec![source], 1, 1).unwrap());
    doc.isolate_red();
    assert_eq!(doc.grid().pixel(0, 0), Some(px(10, 0, 0)));

    let mut doc = Document::new(PixelGrid::from_pixels(vec![source], 1, 1).unwrap());
    doc.isolate_green();
    assert_eq!(doc.grid().pixel(0, 0), Some(px(0, 20, 0)));

    let mut doc = Document::new(PixelGrid::from_pixels(vec![source], 1, 1).unwrap());
    doc.isolate_blue();
    assert_eq!(doc.grid().pixel(0, 0), Some(px(0, 0, 30)));
}

#[test]
fn color_transforms_leave_metadata_alone() {
    let original = coord_doc(3, 2);
    let mut doc = original.clone();
    doc.grayscale();
    doc.sepia();
    doc.invert_colors();
    doc.isolate_green();
    assert_eq!(doc.header, original.header);
    assert_eq!(doc.info, original.info);
    assert_eq!(doc.padding(), original.padding());
}

#[test]
fn transforms_compose_and_still_roundtrip() {
    let mut doc = coord_doc(6, 4);
    doc.rotate90_left();
    doc.crop(0, 1, 3, 4).unwrap();
    doc.flip_horizontal();
    doc.sepia();
    let back = Document::from_bytes(&doc.to_bytes()).unwrap();
    assert_eq!(back, doc);
}
