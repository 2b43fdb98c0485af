//! Filter pipelines
//!
//! Two pipelines narrow the enumerated files:
//!
//! 1. **Exclusion** - project-wide rules from local and remote configuration,
//!    applied once per run before the permission check
//! 2. **Tool** - per-tool excludes and the language allow-list, applied to the
//!    readable files on demand for each tool
//!
//! Each pipeline is built as an ordered list of [`Filter`](crate::filters::Filter)
//! values and folded over its input. Every pattern is compiled before any
//! filtering starts, so a malformed rule fails the stage instead of letting
//! files through.

pub mod exclusion;
pub mod tool;

pub use exclusion::{default_ignore_filter, exclude, exclusion_filters};
pub use tool::{filter_for_tool, tool_filters};
