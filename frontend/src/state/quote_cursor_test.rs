use super::*;

#[test]
fn next_wraps_to_start() {
    let cursor = QuoteCursor::new(3).step(1).step(1);
    assert_eq!(cursor.index(), 2);
    assert_eq!(cursor.step(1).index(), 0);
}

#[test]
fn prev_wraps_to_end() {
    assert_eq!(QuoteCursor::new(4).step(-1).index(), 3);
}

#[test]
fn full_cycle_returns_home() {
    for len in 1..8 {
        for start in 0..len {
            let mut cursor = QuoteCursor::new(len);
            for _ in 0..start {
                cursor = cursor.step(1);
            }
            let origin = cursor.index();
            for _ in 0..len {
                cursor = cursor.step(1);
                assert!(cursor.index() < len);
            }
            assert_eq!(cursor.index(), origin);
        }
    }
}

#[test]
fn backwards_never_leaves_range() {
    let mut cursor = QuoteCursor::new(5);
    for _ in 0..23 {
        cursor = cursor.step(-1);
        assert!(cursor.index() < 5);
    }
    // 23 steps back from 0 on a ring of 5 lands on 2.
    assert_eq!(cursor.index(), 2);
}

#[test]
fn exactly_one_active() {
    let cursor = QuoteCursor::new(4).step(1);
    let active: Vec<usize> = (0..4).filter(|i| cursor.is_active(*i)).collect();
    assert_eq!(active, vec![1]);
}

#[test]
fn empty_carousel_is_a_no_op() {
    let cursor = QuoteCursor::new(0);
    assert_eq!(cursor.step(1), cursor);
    assert_eq!(cursor.step(-1), cursor);
    assert!(!cursor.is_active(0));
}

#[test]
fn reducer_applies_steps() {
    let cursor = Rc::new(QuoteCursor::new(3));
    let cursor = cursor.reduce(QuoteStep::Prev);
    assert_eq!(cursor.index(), 2);
    let cursor = cursor.reduce(QuoteStep::Next);
    assert_eq!(cursor.index(), 0);
}
