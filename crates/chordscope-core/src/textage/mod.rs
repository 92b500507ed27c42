//! Encoding of the remote score site's addressing scheme and decoding of the
//! raw data shapes it serves.

pub mod source;
pub mod tables;
pub mod url;

pub use source::{DumpSource, ScoreSource};
pub use tables::build_musics;
pub use url::{PageSide, ScorePageParams, HOST};
