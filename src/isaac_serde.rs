// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Serde support for the 256-word pool and output block.
//!
//! serde only implements its traits for arrays of up to 32 elements, so the
//! generator state is written as a fixed-length tuple of `RAND_SIZE` words.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::isaac64::RAND_SIZE;

pub(crate) fn serialize<T, S>(words: &[T; RAND_SIZE], ser: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    let mut tuple = ser.serialize_tuple(RAND_SIZE)?;
    for word in words.iter() {
        tuple.serialize_element(word)?;
    }
    tuple.end()
}

pub(crate) fn deserialize<'de, T, D>(de: D) -> Result<[T; RAND_SIZE], D::Error>
where
    T: Deserialize<'de> + Default + Copy,
    D: Deserializer<'de>,
{
    struct WordsVisitor<T>(PhantomData<T>);

    impl<'de, T> Visitor<'de> for WordsVisitor<T>
    where
        T: Deserialize<'de> + Default + Copy,
    {
        type Value = [T; RAND_SIZE];

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "an ISAAC-64 state array of {} words", RAND_SIZE)
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut words = [T::default(); RAND_SIZE];
            for (i, word) in words.iter_mut().enumerate() {
                *word = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(i, &self))?;
            }
            Ok(words)
        }
    }

    de.deserialize_tuple(RAND_SIZE, WordsVisitor(PhantomData))
}
