//! EXIF tag table reading.
//!
//! [`read_exif`] walks every tag of an image container and returns them as a
//! flat [`FieldMap`](crate::value::FieldMap) of display strings.

mod reader;

pub use reader::{collect_fields, read_exif};
