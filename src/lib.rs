//! Event-level building blocks for YAML stream parsing and emission.
//!
//! This crate models the scalar unit of a YAML event stream: the leaf value a
//! parser yields between the structural events, and the leaf value emission
//! code hands to an emitter. The same type, [`ScalarEvent`], serves both
//! directions:
//!
//! - **read path** — wrap a wire-level record the parser just produced;
//!   anchor, tag, and value are decoded lazily on first access.
//! - **write path** — build the scalar up front, then serialize it into a
//!   wire-level record for the emitter.
//!
//! What it round-trips faithfully are the four pieces of presentation state
//! that decide whether a scalar survives re-emission byte-for-byte: the
//! [`ScalarStyle`] plus the plain/quoted implicit-resolution flags, and the
//! wire's own length field.
//!
//! # Example
//!
//! ```
//! use yaml_events::wire::MemoryInit;
//! use yaml_events::{ScalarEvent, ScalarStyle};
//!
//! fn main() -> Result<(), yaml_events::Error> {
//!     let scalar = ScalarEvent::tagged("hello", "tag:yaml.org,2002:str");
//!     assert_eq!(scalar.length(), 5);
//!
//!     let record = scalar.create_event(&mut MemoryInit)?;
//!     assert_eq!(&*record.value, b"hello");
//!     assert_eq!(record.style, ScalarStyle::Plain);
//!     Ok(())
//! }
//! ```
//!
//! The tokenizer/parser and the emitter proper are external collaborators;
//! their contracts are the [`wire::ScalarRecord`] and [`wire::RecordInit`]
//! traits.

#![doc(html_root_url = "https://docs.rs/yaml_events/0.1.2")]
#![deny(missing_docs)]

pub use crate::error::{Error, Result};
pub use crate::scalar::{ScalarEvent, ScalarStyle};

pub mod codec;
pub mod wire;

mod error;
mod scalar;
