// src/config/consts.rs

// Input
pub const INPUT_GLOB: &str = "*.html";

// Document layout: result rows live in the Nth <tbody> (1-based)
pub const RESULTS_TBODY: usize = 2;

// Output
pub const OUTPUT_FILENAME: &str = "fullResults.csv";
pub const OUTPUT_SEP: char = ',';
