//! Recorded or live frame input, one JSON object per line.
//!
//! ```text
//! {"timestamp":0.033,"label":"TWO_FINGERS","confidence":0.91,
//!  "hands":{"Right":[{"x":0.1,"y":0.2}, … 21 points]},
//!  "hands_raw":{"Right":[{"x":0.5,"y":0.4,"z":-0.05}, …]}}
//! ```
//!
//! An upstream tracker + classifier (or a recording of one) writes these
//! lines; [`spawn_reader`] turns them into a stream of [`SourceEvent`]s for
//! the runtime loop.

pub mod reader;
pub mod record;

pub use reader::{spawn_reader, Input, SourceEvent};
pub use record::{parse_line, read_records, FrameRecord, SourceError};
