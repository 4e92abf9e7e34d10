mod ids;
mod lenient;
mod model;
mod status;

pub use ids::*;
pub use model::*;
pub use status::*;
