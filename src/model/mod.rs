pub mod config;
pub mod diagnostics;
pub mod ratings;
pub mod scores;

#[cfg(test)]
#[path = "../../tests/src_inline/model/tests.rs"]
mod tests;
