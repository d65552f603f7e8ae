use super::*;

fn expected_count(authored: usize) -> usize {
    if authored == 0 {
        return 0;
    }
    authored.max(MIN_ITEMS.min(authored << MAX_PADDING_PASSES))
}

#[test]
fn padding_reaches_minimum_for_any_nonempty_set() {
    for authored in 0..=20 {
        let logos: Vec<usize> = (0..authored).collect();
        let padded = pad_items(&logos);
        assert_eq!(padded.len(), expected_count(authored), "authored = {authored}");
    }
}

#[test]
fn padding_preserves_authored_order() {
    let padded = pad_items(&["a", "b", "c"]);
    assert_eq!(padded.len(), MIN_ITEMS);
    assert_eq!(&padded[..6], &["a", "b", "c", "a", "b", "c"]);
    // Clones repeat the list built so far, never reorder it.
    for (i, item) in padded.iter().enumerate() {
        assert_eq!(*item, ["a", "b", "c"][i % 3]);
    }
}

#[test]
fn empty_set_stays_empty() {
    let padded: Vec<String> = pad_items(&[]);
    assert!(padded.is_empty());
}

#[test]
fn large_sets_are_untouched() {
    let logos: Vec<u8> = (0..30).collect();
    assert_eq!(pad_items(&logos), logos);
}

#[test]
fn placement_is_deterministic() {
    let frame = HelixFrame::new(12.34, 320.0, 1024.0, 14);
    let again = HelixFrame::new(12.34, 320.0, 1024.0, 14);
    for i in 0..14 {
        assert_eq!(frame.place(i), again.place(i));
    }
}

#[test]
fn placement_at_time_zero() {
    let frame = HelixFrame::new(0.0, 300.0, 1000.0, 14);
    // (300 + 50) / 14 = 25
    assert!((frame.gap() - 25.0).abs() < 1e-9);
    assert!((frame.amplitude() - 210.0).abs() < 1e-9);

    let first = frame.place(0);
    assert!(first.x.abs() < 1e-9);
    assert!((first.y + 12.5).abs() < 1e-9);
    assert!((first.scale - 1.5).abs() < 1e-9);
    assert!((first.opacity - 1.0).abs() < 1e-9);
    assert_eq!(first.z_index, 100);
    assert!(first.blur.abs() < 1e-9);
    assert!(first.rotate.abs() < 1e-9);
}

#[test]
fn gap_has_a_floor_and_amplitude_scales_with_width() {
    let frame = HelixFrame::new(0.0, 100.0, 500.0, 40);
    assert_eq!(frame.gap(), 18.0);
    assert!((frame.amplitude() - 120.0).abs() < 1e-9);
}

#[test]
fn zero_viewport_uses_fallback_size() {
    assert_eq!(
        HelixFrame::new(3.0, 0.0, 0.0, 14),
        HelixFrame::new(3.0, FALLBACK_HEIGHT, FALLBACK_WIDTH, 14)
    );
}

#[test]
fn depth_cues_stay_in_range() {
    let height = 260.0;
    for step in 0..200 {
        let t = f64::from(step) * 0.37;
        let frame = HelixFrame::new(t, height, 900.0, 14);
        for i in 0..14 {
            let p = frame.place(i);
            assert!((0.75..=1.5).contains(&p.scale));
            assert!((0.4..=1.0 + 1e-12).contains(&p.opacity));
            assert!((0..=100).contains(&p.z_index));
            assert!((0.0..=0.9).contains(&p.blur));
            assert!(p.x.abs() <= frame.amplitude() + 1e-9);
            assert!(p.y >= -frame.gap() / 2.0 - 1e-9);
            assert!(p.y < height + frame.gap() / 2.0);
        }
    }
}

#[test]
fn vertical_scroll_loops_seamlessly() {
    let (h, count) = (260.0, 14);
    let start = HelixFrame::new(0.0, h, 900.0, count);
    let period = (h + start.gap()) / 12.0;
    let later = HelixFrame::new(period, h, 900.0, count);
    let span = h + start.gap();
    for i in 0..count {
        // Positions wrap at the span edge, so compare on the loop.
        let drift = (start.place(i).y - later.place(i).y).rem_euclid(span);
        assert!(drift < 1e-6 || span - drift < 1e-6, "item {i} drifted by {drift}");
    }
}

#[test]
fn css_strings() {
    let placement = HelixPlacement {
        x: 10.0,
        y: -4.5,
        scale: 1.25,
        opacity: 0.70004,
        z_index: 42,
        blur: 0.5,
        rotate: 3.0,
    };
    assert_eq!(
        placement.transform_css(),
        "translate(-50%, -50%) translate3d(10px, -4.5px, 0) scale(1.25) rotate(3deg)"
    );
    assert_eq!(placement.opacity_css(), "0.700");
    assert_eq!(placement.z_index_css(), "42");
    assert_eq!(placement.filter_css(), "blur(0.5px)");
}

#[test]
fn static_layout_shows_authored_items_once() {
    let allies = ["AgroSur", "Campo Vivo", "GenLab", "Hato Norte", "Pradera"];
    assert_eq!(displayed_items(&allies, false), allies.to_vec());
    assert_eq!(displayed_items(&allies, true).len(), MIN_ITEMS);
    assert!(displayed_items::<&str>(&[], true).is_empty());
}
