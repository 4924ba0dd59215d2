//! Behavioral tests for the effects
//!
//! BDD-style tests using given-when-then naming. They drive the pure
//! interaction rules through the recording engine, so they run natively.
