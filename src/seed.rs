// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Full-state seed material for ISAAC-64.

use core::fmt;

#[cfg(feature = "std")]
use std::io::{self, Read};

#[cfg(feature = "std")]
use crate::error::SeedError;
use crate::isaac64::RAND_SIZE;

/// Number of bytes needed to fill the whole pool: 256 words of 8 bytes.
pub const SEED_LEN: usize = RAND_SIZE * 8;

/// Seed for [`Isaac64Rng`](crate::Isaac64Rng): 2048 bytes, read as 256
/// little-endian `u64` words.
///
/// Arrays of this size do not implement `Default`, which
/// [`SeedableRng::Seed`](rand_core::SeedableRng::Seed) requires, hence the
/// wrapper.
#[derive(Clone)]
pub struct Isaac64Seed(pub [u8; SEED_LEN]);

impl Isaac64Seed {
    /// Read exactly `SEED_LEN` bytes from `src`.
    ///
    /// Reads interrupted by a signal are retried. If the source ends early
    /// the returned error reports how many bytes did arrive.
    #[cfg(feature = "std")]
    pub fn read_from<R: Read>(mut src: R) -> Result<Isaac64Seed, SeedError> {
        let mut seed = Isaac64Seed::default();
        let mut filled = 0;
        while filled < SEED_LEN {
            match src.read(&mut seed.0[filled..]) {
                Ok(0) => {
                    warn!("Isaac64Seed: source ended after {} of {} bytes", filled, SEED_LEN);
                    return Err(SeedError::short_read(filled));
                }
                Ok(n) => filled += n,
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(SeedError::io(filled, e)),
            }
        }
        Ok(seed)
    }
}

impl Default for Isaac64Seed {
    fn default() -> Isaac64Seed {
        Isaac64Seed([0; SEED_LEN])
    }
}

impl From<[u8; SEED_LEN]> for Isaac64Seed {
    fn from(bytes: [u8; SEED_LEN]) -> Isaac64Seed {
        Isaac64Seed(bytes)
    }
}

impl AsRef<[u8]> for Isaac64Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0[..]
    }
}

impl AsMut<[u8]> for Isaac64Seed {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0[..]
    }
}

// Seed material is as sensitive as the generator state.
impl fmt::Debug for Isaac64Seed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Isaac64Seed {{}}")
    }
}

#[cfg(all(test, feature = "std"))]
mod test {
    use super::*;
    use crate::error::ErrorKind;

    /// Hands out at most `chunk` bytes per call, interrupting every other read.
    struct Trickle<'a> {
        data: &'a [u8],
        chunk: usize,
        interrupt: bool,
    }

    impl<'a> Read for Trickle<'a> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.interrupt = !self.interrupt;
            if self.interrupt {
                return Err(io::Error::new(io::ErrorKind::Interrupted, "signal"));
            }
            let n = self.chunk.min(buf.len()).min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    #[test]
    fn test_read_from_exact() {
        let data: Vec<u8> = (0..SEED_LEN).map(|i| (i * 7) as u8).collect();
        let seed = Isaac64Seed::read_from(&data[..]).unwrap();
        assert_eq!(seed.as_ref(), &data[..]);
    }

    #[test]
    fn test_read_from_leaves_trailing_bytes() {
        let data = vec![0xa5u8; SEED_LEN + 10];
        let mut src = &data[..];
        Isaac64Seed::read_from(&mut src).unwrap();
        assert_eq!(src.len(), 10);
    }

    #[test]
    fn test_read_from_trickle_and_interrupts() {
        let data: Vec<u8> = (0..SEED_LEN).map(|i| (i % 251) as u8).collect();
        let src = Trickle { data: &data, chunk: 13, interrupt: false };
        let seed = Isaac64Seed::read_from(src).unwrap();
        assert_eq!(seed.as_ref(), &data[..]);
    }

    #[test]
    fn test_read_from_short() {
        let data = vec![1u8; SEED_LEN - 1];
        let err = Isaac64Seed::read_from(&data[..]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShortRead);
        assert_eq!(err.bytes_read(), SEED_LEN - 1);

        let err = Isaac64Seed::read_from(io::empty()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShortRead);
        assert_eq!(err.bytes_read(), 0);
    }

    #[test]
    fn test_read_from_io_error() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
            }
        }

        let mut err = Isaac64Seed::read_from(Broken).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        let cause = err.take_cause().unwrap();
        assert_eq!(cause.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn test_debug_hides_bytes() {
        let seed = Isaac64Seed([0xff; SEED_LEN]);
        assert_eq!(format!("{:?}", seed), "Isaac64Seed {}");
    }
}
