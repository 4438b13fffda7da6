//! Deterministic `RandomSource` implementations shared by the integration tests.

#![allow(dead_code)]

use lotto_gen::RandomSource;

/// Always returns `min`, so every draw keeps the pool in its original order.
#[derive(Debug)]
pub struct MockRng;

impl RandomSource for MockRng {
    fn next_u32_range(&mut self, min: u32, _max: u32) -> u32 {
        min
    }
}

/// Returns values from a predetermined sequence. Panics if the sequence is
/// exhausted or a value falls outside the requested range.
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<u32>,
    index: usize,
}

impl SequenceRng {
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, index: 0 }
    }

    pub fn calls(&self) -> usize {
        self.index
    }
}

impl RandomSource for SequenceRng {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        let val = self.values[self.index];
        assert!(
            (min..=max).contains(&val),
            "scripted value {} outside {}..={}",
            val,
            min,
            max
        );
        self.index += 1;
        val
    }
}
