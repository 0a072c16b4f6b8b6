//! # SoC Tests
