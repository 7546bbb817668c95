//! # metadata-extractor
//!
//! Extract metadata from images (EXIF) and YAML, JSON and XML documents, including
//! entries inside ZIP archives, into one uniform list of records that serializes
//! to a single JSON document.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use metadata_extractor::output::write_records;
//! use metadata_extractor::pipeline::{ExtractOptions, extract_paths};
//! use metadata_extractor::report::LogReporter;
//! use std::path::{Path, PathBuf};
//!
//! fn main() -> anyhow::Result<()> {
//!     let paths = vec![PathBuf::from("photo.jpg"), PathBuf::from("configs.zip")];
//!
//!     // Failing files are reported through the sink and skipped.
//!     let records = extract_paths(&paths, &ExtractOptions::default(), &mut LogReporter);
//!
//!     for record in &records {
//!         println!("{} ({}): {} fields", record.filename(), record.kind(), record.fields().len());
//!     }
//!
//!     write_records(&records, Path::new("metadata.json"))?;
//!     Ok(())
//! }
//! ```
//!
//! ## Supported Formats
//!
//! | Kind | Extensions | Decoder |
//! |------|------------|---------|
//! | EXIF | `.jpg`, `.jpeg`, `.png`, `.tiff`, `.bmp` | `nom-exif`, every tag as a display string |
//! | YAML | `.yaml`, `.yml` | `serde_yaml` |
//! | JSON | `.json` | `serde_json` |
//! | XML | `.xml` | `xmltree` |
//!
//! `.zip` inputs are walked entry by entry; nested archives are not opened.
//!
//! ## Output
//!
//! ```json
//! [
//!   {
//!     "Filename": "photo.jpg",
//!     "Type": "EXIF",
//!     "Data": { "Make": "Canon", "Model": "EOS R5" }
//!   }
//! ]
//! ```
//!
//! ## Modules
//!
//! - [`kind`]: Extension classification and the kind filter
//! - [`decode`]: Format dispatch and the YAML/JSON/XML decoders
//! - [`exif`]: EXIF tag table reading
//! - [`record`]: The metadata record model
//! - [`archive`]: ZIP traversal with per-entry failure isolation
//! - [`pipeline`]: Merging direct files and archives into one record list
//! - [`output`]: Output document writing and text rendering
//! - [`report`]: Diagnostic sink
//! - [`config`]: Configuration types and loading/saving

pub mod archive;
pub mod config;
pub mod decode;
pub mod error;
pub mod exif;
pub mod kind;
pub mod output;
pub mod pipeline;
pub mod record;
pub mod report;
pub mod value;

pub use error::{ExtractError, Result};
pub use kind::{Kind, KindFilter};
pub use record::{MetadataRecord, Payload};
pub use value::{FieldMap, FieldValue};
