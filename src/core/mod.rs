pub mod engine;
pub mod estimator;
pub mod recommendations;
pub mod report;

pub use crate::domain::model::{CostBreakdown, Estimate, Material, ProjectSpec};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
