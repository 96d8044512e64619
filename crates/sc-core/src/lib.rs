//! sc-core: Core library for combining delimited text files
//!
//! This library provides functionality to:
//! - Read an ordered selection of CSV files into raw contents
//! - Combine their rows into header groups, optionally removing duplicates
//! - Serialize the combined document as delimited text
//! - Encode the combined document as an xlsx workbook
//! - Report export results with derived folder paths

pub mod document;
pub mod error;
pub mod export;
pub mod input;
pub mod merger;
pub mod workbook;

pub use document::{CombinedDocument, HeaderGroup, RawFile};
pub use error::{Error, Result};
pub use export::{folder_of, outcome_to_json, save_to_path, ExportOutcome, ExportRequest, FileFilter};
pub use input::read_raw_files;
pub use merger::combine;
pub use workbook::{encode_workbook, SHEET_NAME};
