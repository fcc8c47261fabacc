//! Commonly used imports
//!
//! Use `use asynceither::prelude::*;` for the total API. The panicking unwraps
//! in [`unchecked`](crate::unchecked) are deliberately left out.

// Core types
pub use crate::{AsyncCatching, Either, Fault};

// Fault capture
pub use crate::{catch, try_catch, EitherCatching};
