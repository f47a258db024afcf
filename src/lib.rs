//! CodeSieve: a small desktop utility that extracts uppercase alphanumeric
//! codes (10+ characters) from a plain-text file, previews them in a fixed
//! grid for pruning, and exports the final list as a single-column XLSX.

pub mod app;
pub mod ui;
