#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[macro_use]
extern crate tracing;

mod alphabet;
mod decode;
mod digits;
mod encode;
mod error;

pub use alphabet::{Alphabet, BASE58_BITCOIN, BASE58_FLICKR};
pub use error::{AlphabetError, DecodeError};
