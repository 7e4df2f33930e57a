use xor_decomp::ring::PointRing;

/// Cycles all the point index positions forward by `n`. E.g. index 1 becomes 0, index 0 becomes
/// the last index, etc.
pub fn cycle_start_index_forward(input: &PointRing, n: usize) -> PointRing {
    assert!(n > 0, "cycling forward by 0 just returns the same ring");
    assert!(
        n < input.len(),
        "cycling forward by more than the ring length is unnecessary"
    );
    input.iter().cycle().skip(n).take(input.len()).copied().collect()
}

/// Reverses the traversal direction of the ring.
pub fn invert_direction(input: &PointRing) -> PointRing {
    input.iter().rev().copied().collect()
}

#[derive(Debug, Clone, Copy)]
pub struct ModifiedRingState {
    pub inverted_direction: bool,
    pub cycle_position: usize,
}

impl ModifiedRingState {
    pub fn new(inverted_direction: bool, cycle_position: usize) -> Self {
        Self {
            inverted_direction,
            cycle_position,
        }
    }

    /// Maps an index of the modified ring back to the matching index of the input ring.
    pub fn original_index(&self, index: usize, len: usize) -> usize {
        let i = (index + self.cycle_position) % len;
        if self.inverted_direction {
            len - 1 - i
        } else {
            i
        }
    }
}

/// Set of rings formed by reversing and/or cycling the start index of an input ring.
#[derive(Debug, Clone)]
pub struct ModifiedRingSet<'a> {
    pub input: &'a PointRing,
    pub invert_direction: bool,
    pub cycle_index_positions: bool,
}

impl<'a> ModifiedRingSet<'a> {
    pub fn new(input: &'a PointRing, invert_direction: bool, cycle_index_positions: bool) -> Self {
        Self {
            input,
            invert_direction,
            cycle_index_positions,
        }
    }

    pub fn accept_closure<F>(&self, visitor: &mut F)
    where
        F: FnMut(PointRing, ModifiedRingState),
    {
        visitor(self.input.clone(), ModifiedRingState::new(false, 0));
        let inverted = invert_direction(self.input);
        if self.invert_direction {
            visitor(inverted.clone(), ModifiedRingState::new(true, 0));
        }

        if self.cycle_index_positions {
            for i in 1..self.input.len() {
                let cycled = cycle_start_index_forward(self.input, i);
                visitor(cycled, ModifiedRingState::new(false, i));
            }

            if self.invert_direction {
                for i in 1..self.input.len() {
                    let cycled = cycle_start_index_forward(&inverted, i);
                    visitor(cycled, ModifiedRingState::new(true, i));
                }
            }
        }
    }
}
