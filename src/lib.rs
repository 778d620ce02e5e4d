// reviewscope: batch enrichment of app-store reviews.
//
// This is the library root. Each module corresponds to one stage or
// collaborator of the enrichment pipeline.

pub mod config;
pub mod output;
pub mod pipeline;
pub mod records;
pub mod sentiment;
pub mod text;
pub mod themes;
pub mod topics;
pub mod translate;
