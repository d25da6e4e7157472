//! Aurum: a golden-file testing helper.
//!
//! A golden test compares a computed value against a reference recorded on
//! disk. Aurum removes the boilerplate around that comparison: it resolves
//! file paths, persists and restores values through pluggable strategies, and
//! branches between *update* mode (record the actual value) and *compare*
//! mode (load the golden value and hand both to your assertion callback).
//!
//! Run ordinary tests to compare, or `GOLDEN_UPDATE=1 cargo test` to
//! (re)record every golden file in the run.
//!
//! # Example
//!
//! ```rust,no_run
//! use aurum::Golden;
//!
//! #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
//! struct Greeting {
//!     message: String,
//! }
//!
//! let golden = Golden::<Greeting, Greeting>::json("greetings");
//! golden.assert(
//!     Greeting { message: "hi".to_string() },
//!     "hello",
//!     |actual, expected| assert_eq!(actual, expected),
//! );
//! ```
//!
//! Strategy pairs other than JSON: [`Golden::bytes`] (verbatim),
//! [`Golden::string`] (the value's `Display` rendering), and
//! [`Golden::lines`] (newline-joined on save, a lazy [`Lines`] stream on
//! load). Every role (store, path layout, update policy, saver, loader) can
//! be replaced through the harness's `with_*` methods.

pub use crate::error::{GoldenError, Result};
pub use crate::harness::Golden;
pub use crate::load::{BytesLoader, JsonLoader, Lines, LinesLoader, Loader, LoaderFn, StringLoader};
pub use crate::save::{BytesSaver, DisplaySaver, JsonSaver, LinesSaver, Saver, SaverFn};
pub use crate::store::{default_golden_path, GoldenFile, Opener, PathFn, Reader, Store, Writer};
pub use crate::update::{set_update_mode, update_mode, FlagPolicy, UpdatePolicy};

pub mod error;
pub mod harness;
pub mod load;
pub mod save;
pub mod store;
pub mod update;

#[cfg(test)]
mod testutil;
