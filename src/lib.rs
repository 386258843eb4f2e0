//! Scaffolds a TypeScript module: asks for package metadata, merges it into
//! `package.json`, writes editor and lint configuration, then runs npm.

pub mod api;
pub mod author;
pub mod error;
pub mod git;
pub mod install;
pub mod loader;
pub mod models;
pub mod naming;
pub mod pipeline;
pub mod prefs;
pub mod prompt;
pub mod templates;
pub mod writer;

pub use error::{Error, Result};
pub use pipeline::{Collaborators, GeneratorConfig, GeneratorState, RunSummary, run};
pub use prompt::{Prompter, Question};
