//! Container directives in markdown (`:::name[label]{attrs}` ... `:::`).
//!
//! Directives are expanded before markdown parsing: the opening and closing
//! marker lines are replaced by raw HTML, and the content between them stays
//! markdown. The only directive the book uses is the tip callout
//! ([`TipDirective`](crate::components::TipDirective)).
//!
//! # Example
//!
//! ```
//! use sb_renderer::directive::{ContainerDirective, DirectiveArgs, DirectiveProcessor};
//!
//! struct Aside;
//!
//! impl ContainerDirective for Aside {
//!     fn name(&self) -> &str { "aside" }
//!     fn open(&mut self, _args: DirectiveArgs, _line: usize) -> Option<String> {
//!         Some("<aside>\n".to_owned())
//!     }
//!     fn close(&mut self, _line: usize) -> String {
//!         "\n</aside>".to_owned()
//!     }
//! }
//!
//! let mut processor = DirectiveProcessor::new().with_container(Aside);
//! let output = processor.process(":::aside\nSide note.\n:::");
//! assert!(output.starts_with("<aside>"));
//! ```

mod args;
mod container;
mod fence;
mod parser;
mod processor;

pub use args::DirectiveArgs;
pub use container::ContainerDirective;
pub use processor::DirectiveProcessor;
