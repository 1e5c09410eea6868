// Copyright 2018 Developers of the Rand project.
// Copyright 2013 The Rust Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The ISAAC-64 random number generator.

use core::fmt;
use core::num::Wrapping as w;

use rand_core::impls::fill_bytes_via_next;
use rand_core::le::read_u64_into;
use rand_core::{Error, RngCore, SeedableRng};
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "std")]
use std::io::Read;

#[cfg(feature = "std")]
use crate::error::SeedError;
use crate::seed::Isaac64Seed;

#[allow(non_camel_case_types)]
type w64 = w<u64>;

const RAND_SIZE_LEN: usize = 8;
pub(crate) const RAND_SIZE: usize = 1 << RAND_SIZE_LEN;

/// A random number generator that uses ISAAC-64, the 64-bit variant of the
/// ISAAC algorithm.
///
/// ISAAC stands for "Indirection, Shift, Accumulate, Add, and Count" which are
/// the principal bitwise operations employed. It is the most advanced of a
/// series of array based random number generator designed by Robert Jenkins
/// in 1996[^1].
///
/// Although ISAAC is designed to be cryptographically secure, its design is not
/// founded in cryptographic theory. Therefore it is _not recommended for_
/// cryptographic purposes. It is however one of the strongest non-cryptograpic
/// RNGs, and that while still being reasonably fast.
///
/// ## Overview of the ISAAC-64 algorithm:
/// (in pseudo-code)
///
/// ```text
/// Input: a, b, c, s[256] // state
/// Output: r[256] // results
///
/// mix(a,i) = !(a ^ a << 21)  if i = 0 mod 4
///              a ^ a >>  5   if i = 1 mod 4
///              a ^ a << 12   if i = 2 mod 4
///              a ^ a >> 33   if i = 3 mod 4
///
/// c = c + 1
/// b = b + c
///
/// for i in 0..256 {
///     x = s_[i]
///     a = mix(a,i) + s[i+128 mod 256]
///     y = a + b + s[x>>3 mod 256]
///     s[i] = y
///     b = x + s[y>>11 mod 256]
///     r[i] = b
/// }
/// ```
///
/// Results are handed out in the order they are produced, `r[0]` first.
///
/// ## Seeding
///
/// Unlike the reference implementation, the pool is not run through the
/// ISAAC key schedule. There are two ways to fill it:
///
/// - [`seed`] expands a single integer: pool word `i` is the SplitMix64
///   finalizer applied to `i + seed`. This is meant for reproducible runs,
///   not for unpredictability.
/// - [`seed_from`] (and [`SeedableRng::from_seed`]) load 2048 bytes of
///   external entropy as 256 little-endian words, unmixed.
///
/// Either way the accumulators are cleared and one block is generated
/// straight away.
///
/// ## Concurrency
///
/// A generator is a plain value with no interior synchronisation. Use one
/// generator per thread, or wrap it in a lock.
///
/// [`seed`]: Isaac64Rng::seed
/// [`seed_from`]: Isaac64Rng::seed_from
///
/// [^1]: Bob Jenkins, [*ISAAC and RC4*](
///       http://burtleburtle.net/bob/rand/isaac.html)
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Isaac64Rng {
    #[cfg_attr(feature = "serde1", serde(with = "crate::isaac_serde"))]
    pool: [w64; RAND_SIZE],
    #[cfg_attr(feature = "serde1", serde(with = "crate::isaac_serde"))]
    out: [u64; RAND_SIZE],
    a: w64,
    b: w64,
    c: w64,
    cursor: usize,
}

// Custom Debug implementation that does not expose the internal state
impl fmt::Debug for Isaac64Rng {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Isaac64Rng {{}}")
    }
}

impl Default for Isaac64Rng {
    fn default() -> Isaac64Rng {
        Isaac64Rng::new()
    }
}

impl Isaac64Rng {
    /// Create an unseeded generator.
    ///
    /// The state is all zeroes and the output block is marked as used up.
    /// Drawing from it without seeding first is allowed and deterministic,
    /// but the output is not worth much.
    pub fn new() -> Isaac64Rng {
        Isaac64Rng {
            pool: [w(0); RAND_SIZE],
            out: [0; RAND_SIZE],
            a: w(0),
            b: w(0),
            c: w(0),
            cursor: RAND_SIZE,
        }
    }

    /// Create a generator seeded with [`seed`](Isaac64Rng::seed).
    pub fn with_seed(seed: i64) -> Isaac64Rng {
        let mut rng = Isaac64Rng::new();
        rng.seed(seed);
        rng
    }

    /// Fully initialize the generator state from an integer.
    ///
    /// Pool word `i` is the SplitMix64 finalizer applied to `i + seed`
    /// (wrapping), so the whole output stream is a function of `seed`.
    ///
    /// ```
    /// use isaac64::Isaac64Rng;
    ///
    /// let mut rng = Isaac64Rng::new();
    /// rng.seed(0);
    /// assert_eq!(rng.next_u64(), 0x4b73dab7cd5c5cdd);
    /// ```
    pub fn seed(&mut self, seed: i64) {
        trace!("Isaac64Rng: seeding from integer {}", seed);
        let seed = seed as u64;
        for (i, word) in self.pool.iter_mut().enumerate() {
            *word = w(splitmix64_mix((i as u64).wrapping_add(seed)));
        }
        self.restart();
    }

    /// Fill the pool with 2048 bytes read from `src`.
    ///
    /// `src` should deliver high quality entropy, such as `/dev/urandom`;
    /// the bytes are used as 256 little-endian words without further mixing.
    /// This blocks for as long as `src` does.
    ///
    /// If `src` cannot deliver the full 2048 bytes an error is returned and
    /// the generator is left exactly as it was.
    ///
    /// ```no_run
    /// use std::fs::File;
    /// use isaac64::Isaac64Rng;
    ///
    /// let mut rng = Isaac64Rng::new();
    /// rng.seed_from(File::open("/dev/urandom")?)?;
    /// println!("{:#018x}", rng.next_u64());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[cfg(feature = "std")]
    pub fn seed_from<R: Read>(&mut self, src: R) -> Result<(), SeedError> {
        debug!("Isaac64Rng: reading seed from byte source");
        let seed = Isaac64Seed::read_from(src)?;
        self.load(&seed);
        Ok(())
    }

    /// Return the next 64-bit word of output.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        if self.cursor >= RAND_SIZE {
            self.shuffle();
        }
        let value = self.out[self.cursor];
        self.cursor += 1;
        value
    }

    /// Return the next word of output shifted right by one, which is always
    /// non-negative as an `i64`.
    #[inline]
    pub fn next_i63(&mut self) -> i64 {
        (self.next_u64() >> 1) as i64
    }

    fn load(&mut self, seed: &Isaac64Seed) {
        let mut words = [0u64; RAND_SIZE];
        read_u64_into(seed.as_ref(), &mut words);
        for (word, &x) in self.pool.iter_mut().zip(words.iter()) {
            *word = w(x);
        }
        self.restart();
    }

    fn restart(&mut self) {
        self.a = w(0);
        self.b = w(0);
        self.c = w(0);
        self.shuffle();
    }

    /// Refills the output block (`self.out`) and rewinds the cursor.
    /// See also the pseudocode desciption of the algorithm at the top of this
    /// file.
    ///
    /// The loop is unrolled 4 times, once for every constant of mix(), and
    /// split in two halves over 0..128 and 128..256, so that
    /// `s[i+128 mod 256]` becomes a fixed offset. Pool lookups derived from
    /// state words are masked to the table size.
    fn shuffle(&mut self) {
        self.c += w(1);
        // abbreviations
        let mut a = self.a;
        let mut b = self.b + self.c;
        const MIDPOINT: usize = RAND_SIZE / 2;

        #[inline]
        fn ind(pool: &[w64; RAND_SIZE], v: w64, amount: usize) -> w64 {
            pool[(v >> amount).0 as usize & (RAND_SIZE - 1)]
        }

        #[inline]
        fn rngstep(rng: &mut Isaac64Rng,
                   mix: w64,
                   a: &mut w64,
                   b: &mut w64,
                   base: usize,
                   m: usize,
                   m2: usize) {
            let x = rng.pool[base + m];
            *a = mix + rng.pool[base + m2];
            let y = *a + *b + ind(&rng.pool, x, 3);
            rng.pool[base + m] = y;
            *b = x + ind(&rng.pool, y, 3 + RAND_SIZE_LEN);
            rng.out[base + m] = (*b).0;
        }

        let mut m = 0;
        let mut m2 = MIDPOINT;
        for _ in 0..2 {
            for i in (0..MIDPOINT / 4).map(|i| i * 4) {
                rngstep(self, !(a ^ (a << 21)), &mut a, &mut b, i, m, m2);
                rngstep(self,   a ^ (a >> 5 ),  &mut a, &mut b, i + 1, m, m2);
                rngstep(self,   a ^ (a << 12),  &mut a, &mut b, i + 2, m, m2);
                rngstep(self,   a ^ (a >> 33),  &mut a, &mut b, i + 3, m, m2);
            }
            core::mem::swap(&mut m, &mut m2);
        }

        self.a = a;
        self.b = b;
        self.cursor = 0;
    }
}

/// The SplitMix64 output function, used to spread an integer seed over the
/// pool.
#[inline]
fn splitmix64_mix(mut z: u64) -> u64 {
    z ^= z >> 30;
    z = z.wrapping_mul(0xbf58476d1ce4e5b9);
    z ^= z >> 27;
    z = z.wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

impl RngCore for Isaac64Rng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        Isaac64Rng::next_u64(self) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        Isaac64Rng::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Isaac64Rng {
    type Seed = Isaac64Seed;

    /// Load the seed bytes as 256 little-endian pool words, as
    /// [`seed_from`](Isaac64Rng::seed_from) does.
    fn from_seed(seed: Self::Seed) -> Self {
        let mut rng = Isaac64Rng::new();
        rng.load(&seed);
        rng
    }

    /// Same stream as [`Isaac64Rng::with_seed`] for the same bits.
    fn seed_from_u64(seed: u64) -> Self {
        Isaac64Rng::with_seed(seed as i64)
    }
}
