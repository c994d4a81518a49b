//! Project domain types: categories, sizes, validated input, and the
//! derived workload pressure metric.

mod input;
mod pressure;
mod types;

pub use input::ProjectInput;
pub use pressure::Pressure;
pub use types::{ProjectSize, ProjectType};
