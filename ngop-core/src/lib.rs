mod domain;

pub mod cost;
pub mod edit;
pub mod format;
pub mod groups;
pub mod report;
pub mod track;

pub use domain::*;
