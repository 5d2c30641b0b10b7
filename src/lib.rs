//! Videotex Terminal Library
//!
//! The wire protocol of a 40-column videotex terminal and a model of its
//! display. This crate provides:
//!
//! - `stream`: protocol code queue, special character substitution, row trimming and compaction
//! - `command`: command trees compiled into protocol codes
//! - `core`: page memory, cells, cursor and palette
//! - `renderer`: single-pass rendering of the page memory onto a bitmap surface
//! - `app`: configuration

pub mod app;
pub mod command;
pub mod core;
pub mod renderer;
pub mod stream;
