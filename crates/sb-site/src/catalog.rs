//! Index of scanned documents by id.

use std::collections::BTreeMap;

use sb_renderer::LinkResolver;
use sb_renderer::components::DocLookup;
use sb_renderer::{resolve_relative, route_href};

use crate::document::Document;

/// All documents of the site, ordered by id.
#[derive(Debug, Default)]
pub struct DocumentCatalog {
    base_url: String,
    docs: BTreeMap<String, Document>,
}

impl DocumentCatalog {
    pub fn new(base_url: impl Into<String>, documents: Vec<Document>) -> Self {
        Self {
            base_url: base_url.into(),
            docs: documents
                .into_iter()
                .map(|doc| (doc.id.clone(), doc))
                .collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Document> {
        self.docs.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Document> {
        self.docs.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.docs.contains_key(id)
    }

    /// Documents in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.docs.values()
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Resolver for relative links written in document `id`.
    pub fn links_from<'a>(&'a self, id: &'a str) -> DocLinks<'a> {
        let dir = parent(id);
        // Relative page links resolve against the page URL. An index page's
        // route is its directory.
        let route_dir = match self.docs.get(id) {
            Some(doc) if id == "index" || id.ends_with("/index") => doc.route.as_str(),
            Some(doc) => parent(&doc.route),
            None => dir,
        };
        DocLinks {
            catalog: self,
            dir,
            route_dir,
        }
    }
}

impl DocLookup for DocumentCatalog {
    fn label(&self, id: &str) -> Option<&str> {
        self.docs.get(id).map(Document::label)
    }

    fn href(&self, id: &str) -> Option<String> {
        self.docs
            .get(id)
            .map(|doc| route_href(&self.base_url, &doc.route))
    }
}

/// Resolves links relative to one document.
pub struct DocLinks<'a> {
    catalog: &'a DocumentCatalog,
    /// Directory of the source file, for `.md` links.
    dir: &'a str,
    /// Directory of the page URL, for page and asset links.
    route_dir: &'a str,
}

fn parent(path: &str) -> &str {
    path.rsplit_once('/').map_or("", |(dir, _)| dir)
}

impl LinkResolver for DocLinks<'_> {
    fn resolve_markdown_link(&self, path: &str) -> Option<String> {
        let id = resolve_relative(self.dir, path.strip_suffix(".md")?)?;
        self.catalog.get(&id).map(|doc| doc.route.clone())
    }

    fn resolve_page_link(&self, path: &str) -> Option<String> {
        resolve_relative(self.route_dir, path)
    }
}
