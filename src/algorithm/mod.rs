//! Algorithms for comparing ancestors against mortality statistics

pub mod longevity;
