//! Unit tests for the grammar rules, grouped by construct.

mod collections;
