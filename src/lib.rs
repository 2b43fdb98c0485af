//! # filescope - Decide which project files reach each analysis tool
//!
//! Before running linters and analyzers over a project, filescope works out
//! exactly which files each tool should see.
//!
//! ## Stages
//!
//! - **Enumerate**: every regular file under the root, relative to it, with
//!   the version-control directory skipped
//! - **Exclude**: local glob excludes, remote path prefixes and, when there is
//!   no usable local configuration, remote default-ignore expressions
//! - **Check permissions**: split into world-readable and unreadable files
//! - **Filter per tool**: tool-specific excludes and a language allow-list
//!
//! ## Quick Start
//!
//! ```bash
//! # Files every tool may receive
//! filescope list path/to/project
//!
//! # Files eslint would receive, as JSON
//! filescope filter path/to/project --tool eslint --format json
//! ```

pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod files;
pub mod filters;
pub mod languages;
pub mod permissions;
pub mod pipeline;
pub mod tools;

pub use collector::FileCollector;
pub use config::{ConfigSource, LocalConfiguration, RemoteConfiguration};
pub use error::{FilesError, Result};
pub use files::{FileSet, FilesTarget};
pub use languages::Language;
pub use tools::{Tool, ToolRegistry};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
