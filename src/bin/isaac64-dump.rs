// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Endlessly write ISAAC-64 output to stdout as raw little-endian words.
//!
//! Useful for feeding statistical test suites, for example
//! `isaac64-dump | RNG_test stdin64`.

use std::env;
use std::io::{self, Write};
use std::process;

use isaac64::Isaac64Rng;

/// Words drawn per write.
const BLOCK_WORDS: usize = 1 << 12;

fn print_usage(cmd: &str) {
    eprintln!("Usage: {} [SEED]

Writes an endless stream of ISAAC-64 output to stdout, each word as 8
little-endian bytes. SEED is a signed 64-bit integer and defaults to 0.",
        cmd);
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let cmd = args.first().map(String::as_str).unwrap_or("isaac64-dump");

    let seed = match args.len() {
        1 => 0,
        2 => match args[1].parse::<i64>() {
            Ok(seed) => seed,
            Err(e) => {
                eprintln!("Error: invalid seed {:?}: {}", args[1], e);
                eprintln!();
                print_usage(cmd);
                process::exit(2);
            }
        },
        _ => {
            print_usage(cmd);
            process::exit(2);
        }
    };

    let mut rng = Isaac64Rng::with_seed(seed);
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    if let Err(e) = dump(&mut rng, &mut lock) {
        eprintln!("fatal: {}", e);
        process::exit(1);
    }
}

/// Serialize the next `buf.len() / 8` words into `buf`.
fn fill_block(rng: &mut Isaac64Rng, buf: &mut [u8]) {
    for chunk in buf.chunks_exact_mut(8) {
        chunk.copy_from_slice(&rng.next_u64().to_le_bytes());
    }
}

/// Only returns on a write error.
fn dump<W: Write>(rng: &mut Isaac64Rng, out: &mut W) -> io::Result<()> {
    let mut buf = vec![0u8; BLOCK_WORDS * 8];
    loop {
        fill_block(rng, &mut buf);
        out.write_all(&buf)?;
    }
}
