//! Render three-component floating-point vectors as human-readable text.
//!
//! A [Vec3f] is an xyz value with `f32` components. Its
//! [Display](std::fmt::Display) implementation renders the components in
//! declaration order, separated by a comma and a single space and enclosed in
//! parentheses:
//!
//! ```
//! use vec3f::Vec3f;
//! assert_eq!("(1, 2, 3)", Vec3f::new(1., 2., 3.).to_string());
//! ```
//!
//! Components use Rust's default float formatting, the shortest decimal
//! string that parses back to the same value. NaN and infinite components
//! render as `NaN`, `inf`, and `-inf` rather than failing.
//!
//! # Writing
//!
//! A [Writer] appends one record per vector, the rendered text plus a
//! terminating line break, to anything that implements
//! [Write](std::io::Write). `Writer::default()` writes to an in-memory
//! buffer:
//!
//! ```
//! use vec3f::{Vec3f, Writer};
//!
//! let mut writer = Writer::default();
//! writer.write(Vec3f::new(1., 2., 3.)).unwrap();
//! let cursor = writer.into_inner();
//! assert_eq!(b"(1, 2, 3)\n", cursor.get_ref().as_slice());
//! ```
//!
//! To write to standard output, wrap its lock:
//!
//! ```no_run
//! use std::io;
//! use vec3f::{Vec3f, Writer};
//!
//! let mut writer = Writer::new(io::stdout().lock());
//! writer.write(Vec3f::new(1., 2., 3.)).unwrap();
//! ```
//!
//! # Reading
//!
//! A [Reader] parses records back out of anything that implements
//! [BufRead](std::io::BufRead), one vector per line:
//!
//! ```
//! use vec3f::{Reader, Vec3f};
//!
//! let mut reader = Reader::new("(1, 2, 3)\n(0, 0, 0)\n".as_bytes());
//! let vectors = reader
//!     .vectors()
//!     .collect::<vec3f::Result<Vec<_>>>()
//!     .unwrap();
//! assert_eq!(vec![Vec3f::new(1., 2., 3.), Vec3f::new(0., 0., 0.)], vectors);
//! ```

mod error;
mod reader;
mod vector;
mod writer;

pub use crate::error::Error;
pub use crate::reader::{Reader, VectorIterator};
pub use crate::vector::Vec3f;
pub use crate::writer::Writer;

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, Error>;
