//! # simpleset
//!
//! A generic set abstraction for Rust: a capability trait for unordered
//! collections of unique values, a hash-map-backed implementation, and
//! serialization support.
//!
//! ## Overview
//!
//! - **[`Set`](set::Set)**: The container contract. Membership queries, bulk
//!   mutation, combination with other sets, filtering, cloning, and
//!   iteration with early stop through [`std::ops::ControlFlow`]
//! - **[`SimpleSet`](set::SimpleSet)**: The default implementation, backed by
//!   `HashMap<T, ()>`
//! - **Standard sets**: `HashSet` and `BTreeSet` implement `Set` as well
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for `SimpleSet` as a sequence
//!   (enabled by default)
//! - `fxhash`: `FxSimpleSet`, hashed with `rustc-hash`
//! - `ahash`: `AHashSimpleSet`, hashed with `ahash`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use simpleset::prelude::*;
//!
//! let numbers: SimpleSet<i32> = simple_set![1, 2, 3];
//! let even = numbers.filter(|value| value % 2 == 0);
//!
//! assert!(even.equal(&simple_set![2]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the [`Set`](crate::set::Set) trait, the set types, and the
/// [`simple_set!`](crate::simple_set) macro.
///
/// # Usage
///
/// ```rust
/// use simpleset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::set::*;
    pub use crate::simple_set;
}

pub mod set;
