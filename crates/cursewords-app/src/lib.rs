//! Terminal front end for the Cursewords crossword solver.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod action;
pub mod app;
pub mod error;
pub mod input;
pub mod notification;
pub mod puzzle_file;
pub mod session;
pub mod settings;
pub mod ui;
pub mod version;
