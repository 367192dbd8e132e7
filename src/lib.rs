#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

/// The hand-written Haxe that surrounds the translated definitions: package header, generated-file banner,
/// structural `BaseNode`/`TypeNode` shapes and the `TokenKind`/`Kind` enums.
pub mod boilerplate;

/// Implements the ordered regex rewrite rules that turn Flow type declarations into Haxe typedefs.
pub mod rules;

/// Implements retrieval of the graphql-js `ast.js` input, either pinned to a release tag on GitHub or from a
/// local development copy.
pub mod source;

/// Private crate for testing utilities.
#[cfg(test)]
pub(crate) mod testing;

/// Implements the translation pipeline tying [`source`], [`rules`] and [`boilerplate`] together.
pub mod translate;

pub use rules::Rule;
pub use source::{FetchError, Source};
pub use translate::{translate, Error, RuleReport, Translator};
