// Core modules
pub mod error;
pub mod input;
pub mod limits;
pub mod run;
pub mod template;
pub mod words;

// Re-export commonly used types
pub use error::{MadlibError, Result};
pub use input::{StreamReader, TemplateSource};
pub use run::{run, RunSummary};
pub use template::{replace, Substituter};
pub use words::{Role, WordSet};
