//! Workload Module
//!
//! Defines the textual command grammar and its parser.
//!
//! ## Grammar (one command per line, fields space-separated)
//!
//! ```text
//! p KEY VAL     insert or overwrite KEY with VAL
//! g KEY         look up KEY
//! r START END   rank-addressed range over the sorted key list
//! d KEY         remove KEY
//! l PATH        bulk-load a binary snapshot (PATH is the line remainder)
//! ```
//!
//! KEY and VAL are signed 32-bit integers; START and END are signed
//! slice bounds. A line that matches no command, or carries the wrong
//! number of fields, or a non-integer field, aborts the run with a
//! parse error naming the line.

mod command;
mod parser;

pub use command::{Command, CommandKind};
pub use parser::parse_line;
