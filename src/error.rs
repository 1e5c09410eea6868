// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types

use core::fmt;
use std::error::Error as stdError;
use std::io;

use crate::seed::SEED_LEN;

/// Error kind which can be matched over.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum ErrorKind {
    /// The source ran dry before delivering a full seed.
    ShortRead,
    /// The source reported a read failure.
    Io,
}

impl ErrorKind {
    /// A description of this error kind
    pub fn description(self) -> &'static str {
        match self {
            ErrorKind::ShortRead => "source ended before a full seed was read",
            ErrorKind::Io => "source failed while reading seed",
        }
    }
}

/// Error returned by [`Isaac64Rng::seed_from`](crate::Isaac64Rng::seed_from).
///
/// Records how many seed bytes arrived before the failure and, for
/// [`ErrorKind::Io`], the underlying I/O error as its cause. The generator is
/// never modified when this error is returned.
#[derive(Debug)]
pub struct SeedError {
    kind: ErrorKind,
    read: usize,
    cause: Option<io::Error>,
}

/// Alias under which the seeding failure is commonly matched.
pub type ShortReadError = SeedError;

impl SeedError {
    pub(crate) fn short_read(read: usize) -> Self {
        SeedError { kind: ErrorKind::ShortRead, read, cause: None }
    }

    pub(crate) fn io(read: usize, cause: io::Error) -> Self {
        SeedError { kind: ErrorKind::Io, read, cause: Some(cause) }
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Number of seed bytes received before the failure.
    pub fn bytes_read(&self) -> usize {
        self.read
    }

    /// Take the cause, if any. This allows the embedded cause to be extracted.
    /// This uses `Option::take`, leaving `self` with no cause.
    pub fn take_cause(&mut self) -> Option<io::Error> {
        self.cause.take()
    }
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({} of {} bytes)", self.kind.description(), self.read, SEED_LEN)?;
        if let Some(ref cause) = self.cause {
            write!(f, "; cause: {}", cause)?;
        }
        Ok(())
    }
}

impl stdError for SeedError {
    fn source(&self) -> Option<&(dyn stdError + 'static)> {
        self.cause.as_ref().map(|e| e as &(dyn stdError + 'static))
    }
}

impl From<SeedError> for io::Error {
    fn from(error: SeedError) -> Self {
        match error.kind {
            ErrorKind::ShortRead => io::Error::new(io::ErrorKind::UnexpectedEof, error),
            ErrorKind::Io => io::Error::new(io::ErrorKind::Other, error),
        }
    }
}
