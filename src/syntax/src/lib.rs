//! Grammar syntax tools.
//!
//! [`parse_source_file`] turns grammar source text into a [`SourceFile`],
//! which owns the tree of [`Node`]s and everything reported while parsing.
//! Parsing never fails on bad input. Problems are reported as diagnostics
//! and the tree holds whatever could be recovered.
//!
//! The tree is walked either directly, through the typed views on [`Node`]
//! or its generic [`edges`][Node::edges], or with a [`Navigator`].
//!
//! ```
//! # use syntax::{parse_source_file, SyntaxKind};
//! let file = parse_source_file("example.grammar", "A : `a` B");
//!
//! let production = file.elements()[0].as_production().unwrap();
//! assert_eq!(production.name().and_then(|n| n.value()), Some("A"));
//! assert!(file.diagnostics().is_empty());
//! ```

pub mod ast;
pub mod navigator;
pub mod parser;

mod cancellation;
mod error;

pub use scanner::SyntaxKind;

pub use crate::{
    ast::{Edge, EdgeValue, Node, SourceFile},
    cancellation::CancellationToken,
    error::Error,
    navigator::Navigator,
    parser::{parse_source_file, parse_source_file_with_cancellation, Parser},
};
