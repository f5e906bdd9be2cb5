//! Benchmark crate for the strscan primitives. See `benches/`.
