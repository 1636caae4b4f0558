//! Application layer: orchestration over the domain.
//!
//! Holds the ports the outside world implements, the interactive wizard and
//! the services that drive one generation run end to end.

pub mod error;
pub mod ports;
pub mod services;
pub mod wizard;

pub use error::ApplicationError;
pub use ports::{Filesystem, Installer, Prompter, TemplateSource};
pub use services::{GenerateReport, GeneratorService};
pub use wizard::{ConfirmQuestion, InputQuestion, Wizard};
