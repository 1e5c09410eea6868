// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The ISAAC-64 random number generator.
//!
//! [`Isaac64Rng`] produces a reproducible stream of `u64` words from either
//! an integer seed or 2048 bytes of external entropy. It implements the
//! [`RngCore`] and [`SeedableRng`] traits, so it can drive anything built on
//! `rand_core`.
//!
//! ```
//! use isaac64::Isaac64Rng;
//!
//! let mut rng = Isaac64Rng::with_seed(0);
//! let x = rng.next_u64();
//! let y = rng.next_i63();
//! assert!(y >= 0);
//! # let _ = x;
//! ```
//!
//! # Crate features
//!
//! - `std` (default): [`Isaac64Rng::seed_from`] over [`std::io::Read`] and
//!   its error type.
//! - `getrandom`: `SeedableRng::from_entropy`, through `rand_core`.
//! - `log`: internal diagnostics through the `log` facade.
//! - `serde1`: `Serialize`/`Deserialize` for [`Isaac64Rng`].
//!
//! [`RngCore`]: rand_core::RngCore
//! [`SeedableRng`]: rand_core::SeedableRng

#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![doc(test(attr(allow(unused_variables), deny(warnings))))]
#![allow(clippy::unreadable_literal)]
#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub use rand_core;

#[macro_use]
mod log_macros;

#[cfg(feature = "std")]
mod error;
pub mod isaac64;
#[cfg(feature = "serde1")]
mod isaac_serde;
mod seed;

#[cfg(feature = "std")]
pub use crate::error::{ErrorKind, SeedError, ShortReadError};
pub use crate::isaac64::Isaac64Rng;
pub use crate::seed::{Isaac64Seed, SEED_LEN};
