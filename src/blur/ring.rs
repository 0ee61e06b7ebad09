use crate::foundation::core::Rgba8;

/// Circular window of `div = 2 * radius + 1` pixel slots.
///
/// `stack_in` is the slot that receives the pixel entering the window and
/// `stack_out` the slot whose pixel moves from the "ahead" half to the
/// trailing half. `stack_end` (offset `radius + 1`) re-seeds `stack_out`
/// at the start of every row or column.
#[derive(Clone, Debug)]
pub(crate) struct RingBuffer {
    slots: Vec<Rgba8>,
    stack_end: usize,
    stack_in: usize,
    stack_out: usize,
}

impl RingBuffer {
    pub(crate) fn new(radius: usize) -> Self {
        let div = 2 * radius + 1;
        Self {
            slots: vec![Rgba8::transparent(); div],
            stack_end: (radius + 1) % div,
            stack_in: 0,
            stack_out: 0,
        }
    }

    pub(crate) fn div(&self) -> usize {
        self.slots.len()
    }

    /// Reset every slot to `px`.
    pub(crate) fn fill(&mut self, px: Rgba8) {
        self.slots.fill(px);
    }

    pub(crate) fn load(&mut self, slot: usize, px: Rgba8) {
        self.slots[slot] = px;
    }

    pub(crate) fn rewind(&mut self) {
        self.stack_in = 0;
        self.stack_out = self.stack_end;
    }

    pub(crate) fn in_slot(&self) -> Rgba8 {
        self.slots[self.stack_in]
    }

    pub(crate) fn set_in(&mut self, px: Rgba8) {
        self.slots[self.stack_in] = px;
    }

    pub(crate) fn out_slot(&self) -> Rgba8 {
        self.slots[self.stack_out]
    }

    /// Step both cursors one slot around the circle.
    pub(crate) fn advance(&mut self) {
        self.stack_in = self.next(self.stack_in);
        self.stack_out = self.next(self.stack_out);
    }

    fn next(&self, slot: usize) -> usize {
        if slot + 1 == self.slots.len() {
            0
        } else {
            slot + 1
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/blur/ring.rs"]
mod tests;
