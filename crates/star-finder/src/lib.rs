#![doc = include_str!("../README.md")]

mod error;
mod record;
mod select;
mod sized_heap;

pub use crate::{
    error::{Error, Result},
    record::{Point, Record},
    select::{
        select_file, select_file_scored, select_lines, select_lines_scored, select_reader, select_reader_scored,
        Neighbor,
    },
    sized_heap::SizedHeap,
};

/// The current version of the crate.
pub const VERSION: &str = "0.1.0";
