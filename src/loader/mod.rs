//! City loading, saving and generation.
//!
//! The record format is one city per line:
//!
//! ```text
//! <name>|<x>|<y>
//! ```
//!
//! Coordinates accept either `.` or `,` as decimal separator. Lines that do
//! not split into exactly three fields, or whose coordinates fail to parse,
//! are dropped without surfacing an error; only I/O failures are fatal.
//! Line order is preserved and becomes the tour builder's input order.

mod config;
mod generate;
mod parser;
mod writer;

pub use config::LoaderConfig;
pub use generate::random_cities;
pub use parser::{load_path, load_reader, load_str, parse_record, RecordError};
pub use writer::{save_path, write_cities};
