//! Application services.

pub mod generator;
pub mod migrator;

pub use generator::{GenerateReport, GeneratorService};
pub use migrator::Migrator;
