// src/specs/mod.rs
//! # Page specs
//!
//! A spec knows where the data lives in one kind of page and how to pull it
//! out. It works on already-read text and returns plain rows; reading files,
//! writing output and progress reporting are the runner's job.
//!
//! ## Current specs
//! - `results` – race-result pages: the rows of the second `<tbody>`, nine
//!   positional cells each (`bib, name, sex, age, location, net, clock, pace,
//!   event`).
//!
//! ## Testing notes
//! Specs take `&str` so they can be exercised offline against inline
//! snippets or saved pages.
pub mod results;
