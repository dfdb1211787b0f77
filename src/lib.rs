pub mod assembler;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod ui;

pub use assembler::{assemble, assemble_at};
pub use config::VersionConfig;
pub use error::{Result, VersionError};
