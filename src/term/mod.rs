//! Terminal score-sheet rendering.
//!
//! A small, write-through rendering layer: the view queues styled
//! crossterm commands into any `io::Write` and flushes once per sheet.
//! The core stays print-free; everything visual lives here.

pub mod sheet_view;

pub use sheet_view::SheetView;
