//! vtree - polymorphic structured-value trees.
//!
//! A value tree is built from four variants:
//!
//! - [`Scalar`]: a single `f64`.
//! - [`List`]: an ordered sequence of nullable values.
//! - [`Dictionary`]: a string-keyed map of nullable values, kept in key order.
//! - [`Grid`]: a dense 2-D array of nullable values with buffered capacity,
//!   configurable growth and a streaming fill cursor.
//!
//! Containers own their children exclusively and clone deeply. Every value
//! renders itself in three stable text encodings (compact, debug and XML)
//! through the [`Encode`] trait.
//!
//! # Features
//!
//! - `unchecked`: skip logical-bounds checks on grid cell access.
//! - `serde`: `serde::Serialize` for every variant.
//!
//! # Debugging
//!
//! Enable tracing with `RUST_LOG=vtree=debug` (capacity growth) or
//! `RUST_LOG=vtree=trace` (resizes and entry replacement) after calling
//! [`init_tracing`].

mod dictionary;
mod emitter;
mod encode;
mod errors;
mod grid;
mod kind;
mod list;
mod scalar;
#[cfg(feature = "serde")]
mod serialize;
mod stack;
mod value;

use std::sync::Once;

pub use dictionary::Dictionary;
pub use emitter::{Emitter, IoEmitter, StringEmitter};
pub use encode::{Encode, Encoding, NULL_TEXT, NULL_XML};
pub use errors::{Position, ValueError, ValueResult};
pub use grid::{Grid, GridView, Line, LineMut, DEFAULT_STEP};
pub use kind::ValueKind;
pub use list::List;
pub use scalar::{format_general, Scalar, SCALAR_DIGITS};
pub use value::{Value, Variant};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber writing to stderr.
///
/// Only takes effect when `RUST_LOG` is set. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
