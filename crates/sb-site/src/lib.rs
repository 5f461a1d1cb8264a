//! Static site build for the Snake Bytes book.
//!
//! [`SiteBuilder`] runs the whole pipeline in one synchronous pass:
//!
//! 1. scan the docs directory for markdown documents;
//! 2. load the sidebars and validate them against the documents;
//! 3. render every document and the landing page;
//! 4. check internal links and apply the broken link policies;
//! 5. replace the output directory with pages, static files and `sitemap.xml`.
//!
//! Nothing is written unless every step before the last succeeds.
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use sb_config::Config;
//! use sb_site::SiteBuilder;
//!
//! let config = Config::load(None, None)?;
//! let report = SiteBuilder::new(config).build()?;
//! println!("{} pages", report.pages);
//! # Ok(())
//! # }
//! ```

mod builder;
mod catalog;
mod document;
mod error;
mod links;
mod scanner;
mod sitemap;
mod static_files;

pub use builder::{BuildReport, RenderedSite, SiteBuilder};
pub use catalog::{DocLinks, DocumentCatalog};
pub use document::{Document, FrontMatter, split_front_matter};
pub use error::BuildError;
pub use links::{BrokenLink, LinkChecker, LinkOrigin};
pub use scanner::scan_documents;
pub use sitemap::render_sitemap;
pub use static_files::{StaticFile, collect_static_files, copy_static_files};
