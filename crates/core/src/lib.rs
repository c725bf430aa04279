//! Pure logic shared by the stratus CLI.
//!
//! No network or process I/O lives here; everything is testable in
//! isolation. Service modules in the `stratus` crate build on these types.

pub mod env;
pub mod grades;
pub mod student;
