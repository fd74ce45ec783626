//! Data-quality profiling primitives for data frames.

mod flags;
mod nulls;

pub use flags::{profile_flags, FlagCount, FlagProfile};
pub use nulls::{profile_nulls, NullCount, NullProfile};
