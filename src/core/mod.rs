// src/core/mod.rs

pub mod charset;
pub mod html;
