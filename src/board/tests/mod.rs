//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Legal move generation
//! - `checks_and_pins.rs` - Check and pin detection, mate and stalemate
//! - `castling.rs` - Castling availability and rights bookkeeping
//! - `make_unmake.rs` - Make/undo move correctness
//! - `perft.rs` - Node counts against known reference values
//! - `search.rs` - Alpha-beta and parallel root search
//! - `proptest.rs` - Property-based tests

mod movegen;
mod proptest;
mod search;
