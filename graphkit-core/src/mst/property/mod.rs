//! Property-based tests for the Kruskal minimum spanning forest computer.
//!
//! Verifies Kruskal against a sequential oracle, validates structural
//! invariants (acyclicity, edge count, acceptance order) and checks that a
//! reused computer agrees with a fresh one across graph topologies with
//! varied weight distributions.

mod equivalence;
mod oracle;
mod strategies;
mod structural;
mod types;
