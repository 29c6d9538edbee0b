use enough::Unstoppable;
use zenpnm::*;

fn gray(data: &[u8]) -> Graymap {
    decode(data, Unstoppable)
        .unwrap()
        .as_graymap()
        .cloned()
        .expect("graymap")
}

fn pixmap(data: &[u8]) -> Pixmap {
    decode(data, Unstoppable)
        .unwrap()
        .as_pixmap()
        .cloned()
        .expect("pixmap")
}

// ── Invert ───────────────────────────────────────────────────────────

#[test]
fn invert_graymap_against_max_value() {
    let mut g = gray(b"P2\n3 1\n10\n0 4 10\n");
    g.invert();
    assert_eq!(g.grid().as_slice(), &[10, 6, 0]);
    g.invert();
    assert_eq!(g.grid().as_slice(), &[0, 4, 10]);
}

#[test]
fn invert_is_self_inverse_for_every_kind() {
    for data in [
        &b"P1\n3 2\n1 0 0\n0 1 1\n"[..],
        b"P2\n2 2\n7\n0 3\n12 7\n",
        b"P3\n2 1\n200\n1 2 3 200 199 0\n",
    ] {
        let original = decode(data, Unstoppable).unwrap();
        let mut r = original.clone();
        r.invert();
        assert_ne!(r, original);
        r.invert();
        assert_eq!(r, original);
    }
}

#[test]
fn invert_pixmap_channels() {
    let mut p = pixmap(b"P3\n1 1\n255\n0 100 255\n");
    p.invert();
    assert_eq!(p.at(0, 0), Some(Rgb8::new(255, 155, 0)));
}

#[test]
fn invert_bitmap() {
    let mut r = decode(b"P1\n2 1\n1 0\n", Unstoppable).unwrap();
    r.invert();
    assert_eq!(r.as_bitmap().unwrap().grid().as_slice(), &[false, true]);
}

// ── Flip, flop, rotate ───────────────────────────────────────────────

#[test]
fn flip_mirrors_columns() {
    let mut g = gray(b"P2\n3 2\n255\n1 2 3\n4 5 6\n");
    g.flip();
    assert_eq!(g.grid().as_slice(), &[3, 2, 1, 6, 5, 4]);
}

#[test]
fn flop_mirrors_rows() {
    let mut g = gray(b"P2\n2 3\n255\n1 2\n3 4\n5 6\n");
    g.flop();
    assert_eq!(g.grid().as_slice(), &[5, 6, 3, 4, 1, 2]);
}

#[test]
fn flip_and_flop_are_self_inverse() {
    for data in [
        &b"P1\n3 2\n1 0 0\n0 1 1\n"[..],
        b"P5\n3 3\n255\n\x01\x02\x03\x04\x05\x06\x07\x08\x09",
        b"P6\n2 1\n255\n\x01\x02\x03\x04\x05\x06",
    ] {
        let original = decode(data, Unstoppable).unwrap();
        let mut r = original.clone();
        r.flip();
        r.flip();
        assert_eq!(r, original);
        r.flop();
        r.flop();
        assert_eq!(r, original);
    }
}

#[test]
fn rotate_swaps_dimensions() {
    // 1 2 3        4 1
    // 4 5 6   ->   5 2
    //              6 3
    let mut r = decode(b"P2\n3 2\n255\n1 2 3\n4 5 6\n", Unstoppable).unwrap();
    r.rotate_90_cw().unwrap();
    assert_eq!(r.size(), (2, 3));
    assert_eq!(
        r.as_graymap().unwrap().grid().as_slice(),
        &[4, 1, 5, 2, 6, 3]
    );
}

#[test]
fn four_rotations_are_identity() {
    let original = decode(
        b"P3\n3 2\n255\n1 1 1 2 2 2 3 3 3\n4 4 4 5 5 5 6 6 6\n",
        Unstoppable,
    )
    .unwrap();
    let mut r = original.clone();
    for _ in 0..4 {
        r.rotate_90_cw().unwrap();
    }
    assert_eq!(r, original);
}

#[test]
fn rotate_rejects_bitmaps() {
    let mut r = decode(b"P1\n2 1\n1 0\n", Unstoppable).unwrap();
    let before = r.clone();
    assert!(matches!(r.rotate_90_cw(), Err(PnmError::UnsupportedVariant(_))));
    assert_eq!(r, before);
}

// ── Max value ────────────────────────────────────────────────────────

#[test]
fn graymap_max_value_clamps() {
    let mut g = gray(b"P2\n4 1\n255\n0 50 100 255\n");
    g.set_max_value(100).unwrap();
    assert_eq!(g.max_value(), 100);
    assert_eq!(g.grid().as_slice(), &[0, 50, 100, 100]);

    // raising the bound leaves samples alone
    g.set_max_value(200).unwrap();
    assert_eq!(g.grid().as_slice(), &[0, 50, 100, 100]);
}

#[test]
fn pixmap_max_value_rescales() {
    let mut p = pixmap(b"P3\n2 1\n255\n128 255 0 51 1 254\n");
    p.set_max_value(100).unwrap();
    assert_eq!(p.max_value(), 100);
    // 128 * 100 / 255 = 50.19 -> 50
    assert_eq!(p.at(0, 0), Some(Rgb8::new(50, 100, 0)));
    assert_eq!(p.at(1, 0), Some(Rgb8::new(20, 0, 99)));
}

#[test]
fn zero_max_value_is_rejected() {
    let mut g = gray(b"P2\n1 1\n255\n9\n");
    assert!(g.set_max_value(0).is_err());
    assert_eq!(g.max_value(), 255);
    assert_eq!(g.at(0, 0), Some(9));
}

#[test]
fn bitmaps_have_no_max_value() {
    let mut r = decode(b"P4\n1 1\n\x80", Unstoppable).unwrap();
    assert_eq!(r.max_value(), None);
    assert!(matches!(r.set_max_value(1), Err(PnmError::UnsupportedVariant(_))));
}

// ── Conversions ──────────────────────────────────────────────────────

#[test]
fn pixmap_to_graymap_averages_channels() {
    let p = pixmap(b"P6\n2 1\n200\n\x0a\x14\x1e\x01\x01\x02");
    let g = p.to_graymap();
    assert_eq!(g.magic_number(), MagicNumber::P5);
    assert_eq!(g.max_value(), 200);
    // (10 + 20 + 30) / 3 = 20, (1 + 1 + 2) / 3 = 1
    assert_eq!(g.grid().as_slice(), &[20, 1]);

    let g = pixmap(b"P3\n1 1\n255\n1 2 3\n").to_graymap();
    assert_eq!(g.magic_number(), MagicNumber::P2);
}

#[test]
fn graymap_to_bitmap_sets_bright_samples() {
    // threshold is 255 / 2 = 127; equal to it stays unset
    let g = gray(b"P2\n4 1\n255\n0 127 128 255\n");
    let b = g.to_bitmap();
    assert_eq!(b.magic_number(), MagicNumber::P1);
    assert_eq!(b.grid().as_slice(), &[false, false, true, true]);

    let b = gray(b"P5\n1 1\n255\n\xff").to_bitmap();
    assert_eq!(b.magic_number(), MagicNumber::P1);
}

#[test]
fn pixmap_to_bitmap_sets_dark_pixels() {
    // threshold is 100 / 2 = 50; a mean equal to it stays unset
    let p = pixmap(b"P3\n3 1\n100\n0 0 0 50 50 50 49 50 50\n");
    let b = p.to_bitmap();
    assert_eq!(b.magic_number(), MagicNumber::P1);
    assert_eq!(b.grid().as_slice(), &[true, false, true]);

    let b = pixmap(b"P6\n1 1\n255\n\x00\x00\x00").to_bitmap();
    assert_eq!(b.magic_number(), MagicNumber::P4);
    assert_eq!(b.at(0, 0), Some(true));
}

#[test]
fn raster_conversions_dispatch() {
    let bitmap = decode(b"P1\n1 1\n1\n", Unstoppable).unwrap();
    assert!(matches!(bitmap.to_graymap(), Err(PnmError::UnsupportedVariant(_))));
    assert_eq!(&Raster::from(bitmap.to_bitmap()), &bitmap);

    let graymap = decode(b"P2\n1 1\n255\n200\n", Unstoppable).unwrap();
    assert_eq!(Raster::from(graymap.to_graymap().unwrap()), graymap);
    assert_eq!(graymap.to_bitmap().at(0, 0), Some(true));

    let color = decode(b"P3\n1 1\n255\n200 200 200\n", Unstoppable).unwrap();
    assert_eq!(color.to_graymap().unwrap().at(0, 0), Some(200));
    assert_eq!(color.to_bitmap().at(0, 0), Some(false));
}

// ── Raster-level access ──────────────────────────────────────────────

#[test]
fn sample_access_checks_kind_and_bounds() {
    let mut r = decode(b"P2\n2 1\n255\n1 2\n", Unstoppable).unwrap();
    assert_eq!(r.at(1, 0), Some(Sample::Gray(2)));
    assert_eq!(r.at(2, 0), None);

    assert_eq!(r.set(0, 0, Sample::Gray(9)).unwrap(), true);
    assert_eq!(r.set(5, 5, Sample::Gray(9)).unwrap(), false);
    assert!(r.set(0, 0, Sample::Bit(true)).is_err());
    assert_eq!(r.at(0, 0), Some(Sample::Gray(9)));
}

#[test]
fn magic_number_changes_keep_channel_model() {
    let mut r = decode(b"P3\n1 1\n255\n1 2 3\n", Unstoppable).unwrap();
    r.set_magic_number(MagicNumber::P6).unwrap();
    assert_eq!(r.magic_number(), MagicNumber::P6);
    assert!(r.set_magic_number(MagicNumber::P5).is_err());
    assert_eq!(r.magic_number(), MagicNumber::P6);
}

#[test]
fn constructors_validate() {
    assert!(Bitmap::new(0, 1, MagicNumber::P1).is_err());
    assert!(Bitmap::new(1, 1, MagicNumber::P2).is_err());
    assert!(Graymap::new(1, 1, MagicNumber::P5, 0).is_err());
    assert!(Pixmap::new(1, 1, MagicNumber::P4, 255).is_err());
    let p = Pixmap::new(2, 3, MagicNumber::P6, 255).unwrap();
    assert_eq!(p.size(), (2, 3));
    assert!(p.grid().as_slice().iter().all(|&px| px == Rgb8::new(0, 0, 0)));
}
