//! The command layer behind each view.
//!
//! Each sub-module groups the operations of one view family: auth forms,
//! post CRUD views, the favourites view, and the analytics view. Commands
//! return typed outcomes; rendering to the terminal lives alongside them
//! in small `render_*` helpers.

pub mod analytics;
pub mod auth;
pub mod favourites;
pub mod posts;
