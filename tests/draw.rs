use zenpnm::draw::Point;
use zenpnm::*;

const INK: Rgb8 = Rgb8 { r: 255, g: 0, b: 0 };

fn canvas(w: u32, h: u32) -> Pixmap {
    Pixmap::new(w, h, MagicNumber::P3, 255).unwrap()
}

fn inked(p: &Pixmap) -> Vec<(u32, u32)> {
    let (w, _) = p.size();
    p.grid()
        .as_slice()
        .iter()
        .enumerate()
        .filter(|(_, px)| **px == INK)
        .map(|(i, _)| (i as u32 % w, i as u32 / w))
        .collect()
}

#[test]
fn set_pixel_inside_and_outside() {
    let mut p = canvas(3, 3);
    p.set_pixel(Point::new(1, 2), INK);
    assert_eq!(inked(&p), [(1, 2)]);

    let before = p.clone();
    for pt in [(-1, 0), (0, -1), (3, 0), (0, 3), (i32::MAX, i32::MIN)] {
        p.set_pixel(pt.into(), INK);
    }
    assert_eq!(p, before);
}

#[test]
fn line_to_itself_is_one_pixel() {
    let mut p = canvas(4, 4);
    p.draw_line(Point::new(2, 1), Point::new(2, 1), INK);
    assert_eq!(inked(&p), [(2, 1)]);
}

#[test]
fn straight_and_diagonal_lines() {
    let mut p = canvas(5, 5);
    p.draw_line(Point::new(3, 0), Point::new(0, 0), INK);
    assert_eq!(inked(&p), [(0, 0), (1, 0), (2, 0), (3, 0)]);

    let mut p = canvas(5, 5);
    p.draw_line(Point::new(0, 0), Point::new(4, 4), INK);
    assert_eq!(inked(&p), [(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
}

#[test]
fn shallow_line_is_connected() {
    let mut p = canvas(9, 3);
    p.draw_line(Point::new(0, 0), Point::new(8, 2), INK);
    let mut by_col = inked(&p);
    // one pixel per column, rows never jump by more than one
    assert_eq!(by_col.len(), 9);
    by_col.sort();
    for pair in by_col.windows(2) {
        assert_eq!(pair[1].0, pair[0].0 + 1);
        assert!(pair[1].1.abs_diff(pair[0].1) <= 1);
    }
    assert_eq!(by_col[0], (0, 0));
    assert_eq!(by_col[8], (8, 2));
}

#[test]
fn line_clips_to_canvas() {
    let mut p = canvas(4, 4);
    p.draw_line(Point::new(-5, -5), Point::new(10, 10), INK);
    assert_eq!(inked(&p), [(0, 0), (1, 1), (2, 2), (3, 3)]);
}

#[test]
fn rectangle_outline() {
    let mut p = canvas(6, 5);
    p.draw_rectangle(Point::new(1, 1), 3, 2, INK);
    let px = inked(&p);
    assert_eq!(px.len(), 10);
    for corner in [(1, 1), (4, 1), (4, 3), (1, 3)] {
        assert!(px.contains(&corner), "{corner:?}");
    }
    assert!(!px.contains(&(2, 2)));
    assert!(!px.contains(&(3, 2)));
}

#[test]
fn filled_rectangle_covers_half_open_area() {
    let mut p = canvas(6, 5);
    p.draw_filled_rectangle(Point::new(1, 1), 3, 2, INK);
    assert_eq!(
        inked(&p),
        [(1, 1), (2, 1), (3, 1), (1, 2), (2, 2), (3, 2)]
    );
}

#[test]
fn filled_rectangle_edge_cases() {
    let mut p = canvas(4, 4);
    p.draw_filled_rectangle(Point::new(1, 1), 0, 3, INK);
    p.draw_filled_rectangle(Point::new(1, 1), 3, -1, INK);
    assert!(inked(&p).is_empty());

    p.draw_filled_rectangle(Point::new(-2, -2), 4, 4, INK);
    assert_eq!(inked(&p), [(0, 0), (1, 0), (0, 1), (1, 1)]);

    let mut p = canvas(4, 4);
    p.draw_filled_rectangle(Point::new(2, 3), 100, 100, INK);
    assert_eq!(inked(&p), [(2, 3), (3, 3)]);
}

#[test]
fn triangle_outline() {
    let mut p = canvas(5, 5);
    p.draw_triangle(Point::new(0, 0), Point::new(4, 0), Point::new(0, 4), INK);
    let px = inked(&p);
    for v in [(0, 0), (4, 0), (0, 4), (2, 2)] {
        assert!(px.contains(&v), "{v:?}");
    }
    assert!(!px.contains(&(1, 1)));
    assert_eq!(px.len(), 12);
}

#[test]
fn filled_triangle() {
    let mut p = canvas(5, 5);
    p.draw_filled_triangle(Point::new(0, 4), Point::new(0, 0), Point::new(4, 0), INK);
    let px = inked(&p);
    // rows shrink from 5 pixels to 1
    assert_eq!(px.len(), 15);
    assert!(px.contains(&(1, 1)));
    assert!(!px.contains(&(4, 1)));
    assert!(!px.contains(&(1, 4)));
}

#[test]
fn degenerate_filled_triangle() {
    let mut p = canvas(6, 3);
    p.draw_filled_triangle(Point::new(4, 1), Point::new(1, 1), Point::new(2, 1), INK);
    assert_eq!(inked(&p), [(1, 1), (2, 1), (3, 1), (4, 1)]);
}

#[test]
fn circle_outline_stays_on_the_ring() {
    let mut p = canvas(11, 11);
    p.draw_circle(Point::new(5, 5), 4, INK);
    let px = inked(&p);
    assert!(!px.is_empty());
    assert!(!px.contains(&(5, 5)));
    for (x, y) in px {
        let dx = i64::from(x) - 5;
        let dy = i64::from(y) - 5;
        assert!(dx * dx + dy * dy <= 16, "({x}, {y})");
    }
}

#[test]
fn non_positive_radius_draws_nothing() {
    let mut p = canvas(5, 5);
    p.draw_circle(Point::new(2, 2), 0, INK);
    p.draw_circle(Point::new(2, 2), -3, INK);
    p.draw_filled_circle(Point::new(2, 2), 0, INK);
    assert!(inked(&p).is_empty());
}

#[test]
fn filled_circle_is_a_disk() {
    let mut p = canvas(7, 7);
    p.draw_filled_circle(Point::new(3, 3), 2, INK);
    let px = inked(&p);
    // rows of 1, 3, 5, 3 and 1 pixels
    assert_eq!(px.len(), 13);
    assert!(px.contains(&(3, 3)));
    assert!(px.contains(&(1, 3)));
    assert!(!px.contains(&(1, 1)));
}

#[test]
fn filled_circle_clips_at_corner() {
    let mut p = canvas(3, 3);
    p.draw_filled_circle(Point::new(0, 0), 2, INK);
    assert_eq!(
        inked(&p),
        [(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (0, 2)]
    );
}

#[test]
fn huge_fills_only_visit_canvas_rows() {
    let all: Vec<(u32, u32)> = (0..4).flat_map(|y| (0..4).map(move |x| (x, y))).collect();

    let mut p = canvas(4, 4);
    p.draw_filled_rectangle(Point::new(-1_000_000_000, -1_000_000_000), i32::MAX, i32::MAX, INK);
    assert_eq!(inked(&p), all);

    let mut p = canvas(4, 4);
    p.draw_filled_triangle(
        Point::new(-1_000_000_000, -1_000_000_000),
        Point::new(1_000_000_000, -1_000_000_000),
        Point::new(0, 1_000_000_000),
        INK,
    );
    assert_eq!(inked(&p), all);
}
