//! Read vectors from rendered text.
//!
//! A `Reader` parses one vector per line out of anything that implements
//! `BufRead`:
//!
//! ```
//! use vec3f::{Reader, Vec3f};
//!
//! let mut reader = Reader::new("(1, 2, 3)\n".as_bytes());
//! assert_eq!(Some(Vec3f::new(1., 2., 3.)), reader.read().unwrap());
//! assert_eq!(None, reader.read().unwrap());
//! ```
//!
//! Reading is permissive about the final record: a last line that is missing
//! its terminating line break is still parsed, with a warning on the `log`
//! facade.

use crate::{Result, Vec3f};
use log::warn;
use std::io::BufRead;

/// Reads vectors from lines of text.
#[derive(Debug)]
pub struct Reader<R: BufRead> {
    read: R,
}

impl<R: BufRead> Reader<R> {
    /// Creates a new reader from the provided source.
    ///
    /// # Examples
    ///
    /// ```
    /// use vec3f::Reader;
    /// let reader = Reader::new("(1, 2, 3)\n".as_bytes());
    /// ```
    pub fn new(read: R) -> Reader<R> {
        Reader { read }
    }

    /// Reads a vector, or `Ok(None)` at the end of the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use vec3f::{Reader, Vec3f};
    /// let mut reader = Reader::new("(1, 2, 3)\n".as_bytes());
    /// assert_eq!(Some(Vec3f::new(1., 2., 3.)), reader.read().unwrap());
    /// assert_eq!(None, reader.read().unwrap());
    /// ```
    pub fn read(&mut self) -> Result<Option<Vec3f>> {
        let mut line = String::new();
        if self.read.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if !line.ends_with('\n') {
            warn!("vector record is missing its terminating line break: {line}");
        }
        line.parse().map(Some)
    }

    /// Returns an iterator over this reader's vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// use vec3f::Reader;
    /// let mut reader = Reader::new("(1, 2, 3)\n(4, 5, 6)\n".as_bytes());
    /// let vectors = reader
    ///     .vectors()
    ///     .collect::<vec3f::Result<Vec<_>>>()
    ///     .unwrap();
    /// assert_eq!(2, vectors.len());
    /// ```
    pub fn vectors(&mut self) -> VectorIterator<'_, R> {
        VectorIterator { reader: self }
    }

    /// Consumes this reader and returns its source.
    pub fn into_inner(self) -> R {
        self.read
    }
}

/// An iterator over the vectors in a `Reader`.
///
/// This struct is generally created by calling `vectors()` on `Reader`.
#[derive(Debug)]
pub struct VectorIterator<'a, R: BufRead> {
    reader: &'a mut Reader<R>,
}

impl<R: BufRead> Iterator for VectorIterator<'_, R> {
    type Item = Result<Vec3f>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.read().transpose()
    }
}
