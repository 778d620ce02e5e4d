// Review records — the row types that flow between stages, and the CSV
// reading/writing/cleaning around them.
//
// These types are kept separate from the pipeline so tests and the CLI can
// build and inspect tables without running any stage.

pub mod clean;
pub mod io;
pub mod models;
