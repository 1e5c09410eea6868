// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Logging shims.
//!
//! With the `log` feature these forward to the `log` facade. Without it the
//! format arguments are still type-checked, but nothing is emitted and no
//! code is generated for them.

#![allow(unused)]

macro_rules! log_shim {
    ($level:ident, $($x:tt)*) => {
        #[cfg(feature = "log")]
        log::$level!($($x)*);

        #[cfg(not(feature = "log"))]
        let _ = || { let _ = format_args!($($x)*); };
    };
}

macro_rules! trace { ($($x:tt)*) => { log_shim!(trace, $($x)*) } }
macro_rules! debug { ($($x:tt)*) => { log_shim!(debug, $($x)*) } }
macro_rules! warn { ($($x:tt)*) => { log_shim!(warn, $($x)*) } }
