use super::*;

fn px(v: u8) -> Rgba8 {
    Rgba8::new(v, v, v, v)
}

#[test]
fn window_size_is_two_radius_plus_one() {
    assert_eq!(RingBuffer::new(0).div(), 1);
    assert_eq!(RingBuffer::new(1).div(), 3);
    assert_eq!(RingBuffer::new(7).div(), 15);
}

#[test]
fn rewind_places_out_cursor_at_radius_plus_one() {
    let mut ring = RingBuffer::new(2);
    for slot in 0..ring.div() {
        ring.load(slot, px(slot as u8));
    }
    ring.rewind();
    assert_eq!(ring.in_slot(), px(0));
    assert_eq!(ring.out_slot(), px(3));
}

#[test]
fn radius_zero_uses_a_single_slot() {
    let mut ring = RingBuffer::new(0);
    ring.fill(px(9));
    ring.rewind();
    assert_eq!(ring.in_slot(), px(9));
    assert_eq!(ring.out_slot(), px(9));

    ring.set_in(px(4));
    ring.advance();
    assert_eq!(ring.in_slot(), px(4));
    assert_eq!(ring.out_slot(), px(4));
}

#[test]
fn cursors_wrap_around() {
    let mut ring = RingBuffer::new(1);
    for slot in 0..ring.div() {
        ring.load(slot, px(10 + slot as u8));
    }
    ring.rewind();
    let mut seen_in = Vec::new();
    let mut seen_out = Vec::new();
    for _ in 0..4 {
        seen_in.push(ring.in_slot().r);
        seen_out.push(ring.out_slot().r);
        ring.advance();
    }
    assert_eq!(seen_in, vec![10, 11, 12, 10]);
    assert_eq!(seen_out, vec![12, 10, 11, 12]);
}

#[test]
fn fill_resets_every_slot() {
    let mut ring = RingBuffer::new(3);
    ring.load(5, px(1));
    ring.fill(px(200));
    ring.rewind();
    for _ in 0..ring.div() {
        assert_eq!(ring.in_slot(), px(200));
        ring.advance();
    }
}

#[test]
fn advance_moves_both_cursors_in_lockstep() {
    let mut ring = RingBuffer::new(2);
    for slot in 0..ring.div() {
        ring.load(slot, px(slot as u8));
    }
    ring.rewind();
    for step in 0..ring.div() * 2 {
        let expected_in = step % 5;
        let expected_out = (step + 3) % 5;
        assert_eq!(ring.in_slot(), px(expected_in as u8), "step {step}");
        assert_eq!(ring.out_slot(), px(expected_out as u8), "step {step}");
        ring.advance();
    }
}
