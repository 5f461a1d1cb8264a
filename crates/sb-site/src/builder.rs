//! Static site build: load, validate, render, check links, write.

use std::collections::BTreeMap;
use std::fmt::Write;
use std::fs;
use std::path::Path;
use std::time::Instant;

use sb_config::{Config, LinkTarget};
use sb_renderer::components::{
    DEFAULT_FEATURES, DocLookup, Feature, LayoutContext, PageContent, PageLink, Pagination,
    render_landing, render_page, render_sidebar,
};
use sb_renderer::{HighlightLanguages, LinkKind, MarkdownRenderer, RenderedLink, escape_html};
use sb_sidebar::{Sidebar, Sidebars};

use crate::BuildError;
use crate::catalog::DocumentCatalog;
use crate::links::{LinkChecker, LinkOrigin};
use crate::scanner::scan_documents;
use crate::sitemap::render_sitemap;
use crate::static_files::{StaticFile, collect_static_files, copy_static_files};

/// Builds the site described by a [`Config`].
pub struct SiteBuilder {
    config: Config,
}

/// A fully rendered site, held in memory until written.
#[derive(Debug)]
pub struct RenderedSite {
    /// Page HTML by route.
    pages: BTreeMap<String, String>,
    static_files: Vec<StaticFile>,
    sitemap: String,
}

/// Summary of a build or check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildReport {
    pub pages: usize,
    pub static_files: usize,
}

/// Chapter markdown rendered to HTML, before layout.
struct RenderedDoc {
    id: String,
    html: String,
    has_heading: bool,
    links: Vec<RenderedLink>,
}

const SITEMAP_FILE: &str = "sitemap.xml";

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

impl SiteBuilder {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Render the whole site in memory.
    ///
    /// Fails on sidebar references to unknown documents, empty categories,
    /// route conflicts and broken links under the `throw` policy.
    pub fn render(&self) -> Result<RenderedSite, BuildError> {
        let start = Instant::now();
        let config = &self.config;
        let docs_config = &config.docs_resolved;
        let base_url = config.site.base_url.as_str();

        let documents = scan_documents(&docs_config.source_dir, &docs_config.route_base_path)?;
        let mut catalog = DocumentCatalog::new(base_url, documents);
        check_routes(&catalog)?;

        let sidebars = Sidebars::load(&docs_config.sidebar_path)?;
        validate_sidebars(&sidebars, &catalog)?;

        let rendered = self.render_documents(&mut catalog);
        let static_files = collect_static_files(&docs_config.static_dir)?;
        check_static_conflicts(&catalog, &static_files)?;
        self.check_links(&catalog, &rendered, &static_files)?;

        let mut pages = BTreeMap::new();
        let layout = LayoutContext::new(config, &catalog);
        for doc in rendered {
            if let Some(document) = catalog.get(&doc.id) {
                let html = compose_doc_page(&layout, &catalog, &sidebars, &doc);
                pages.insert(document.route.clone(), html);
            }
        }
        pages.insert(String::new(), self.compose_landing_page(&layout));

        let sitemap = render_sitemap(&config.site.url, base_url, pages.keys().map(String::as_str));

        tracing::info!(
            pages = pages.len(),
            static_files = static_files.len(),
            elapsed_ms = elapsed_ms(start),
            "Site rendered"
        );

        Ok(RenderedSite {
            pages,
            static_files,
            sitemap,
        })
    }

    /// Render and write the site to the configured output directory.
    pub fn build(&self) -> Result<BuildReport, BuildError> {
        let site = self.render()?;
        site.write(&self.config.build_resolved.output_dir)?;
        Ok(site.report())
    }

    fn render_documents(&self, catalog: &mut DocumentCatalog) -> Vec<RenderedDoc> {
        let languages = HighlightLanguages::new(&self.config.theme.prism.additional_languages);

        let mut rendered = Vec::with_capacity(catalog.len());
        let mut titles = Vec::with_capacity(catalog.len());
        for document in catalog.iter() {
            let resolver = catalog.links_from(&document.id);
            let result = MarkdownRenderer::new()
                .with_base_url(self.config.site.base_url.as_str())
                .with_link_resolver(&resolver)
                .with_languages(languages.clone())
                .with_title_extraction()
                .render(&document.body);

            for warning in &result.warnings {
                tracing::warn!(path = %document.source_path.display(), "{warning}");
            }

            titles.push((document.id.clone(), result.title.clone()));
            rendered.push(RenderedDoc {
                id: document.id.clone(),
                html: result.html,
                has_heading: result.title.is_some(),
                links: result.links,
            });
        }

        for (id, title) in titles {
            if let Some(document) = catalog.get_mut(&id) {
                document.set_heading_title(title);
            }
        }
        rendered
    }

    fn check_links(
        &self,
        catalog: &DocumentCatalog,
        rendered: &[RenderedDoc],
        static_files: &[StaticFile],
    ) -> Result<(), BuildError> {
        let config = &self.config;
        let routes = catalog
            .iter()
            .map(|doc| doc.route.clone())
            .chain(std::iter::once(String::new()));
        let mut checker = LinkChecker::new(
            routes,
            static_files.iter().map(|f| f.relative_path.clone()),
        );

        for item in &config.theme.navbar.items {
            match item.target() {
                Some(LinkTarget::Doc(id)) => {
                    let route = catalog.get(id).map(|doc| doc.route.as_str());
                    checker.check_route(&LinkOrigin::Navbar, LinkKind::Page, id, route);
                }
                Some(LinkTarget::Internal(path)) => checker.check_path(&LinkOrigin::Navbar, path),
                Some(LinkTarget::External(_)) | None => {}
            }
        }

        for item in config.theme.footer.links.iter().flat_map(|group| &group.items) {
            if let Some(LinkTarget::Internal(path)) = item.target() {
                checker.check_path(&LinkOrigin::Footer, path);
            }
        }

        let landing = &config.landing;
        checker.check_path(&LinkOrigin::Landing, &landing.cta_to);
        if let Some(image) = &landing.hero_image {
            checker.check_path(&LinkOrigin::Landing, image);
        }
        for feature in self.features() {
            checker.check_path(&LinkOrigin::Landing, feature.image);
        }
        if let Some(favicon) = &config.site.favicon {
            checker.check_route(
                &LinkOrigin::Favicon,
                LinkKind::Page,
                favicon,
                Some(favicon.trim_start_matches('/')),
            );
        }

        let docs_dir = &config.docs_resolved.source_dir;
        for doc in rendered {
            let Some(document) = catalog.get(&doc.id) else {
                continue;
            };
            let relative = document
                .source_path
                .strip_prefix(docs_dir)
                .unwrap_or(document.source_path.as_path());
            let origin = LinkOrigin::Document(relative.to_string_lossy().replace('\\', "/"));
            for link in &doc.links {
                checker.check_route(&origin, link.kind, &link.target, link.route.as_deref());
            }
        }

        checker.finish(&config.site)
    }

    /// Landing features: the configured list, or the built-in one.
    fn features(&self) -> Vec<Feature<'_>> {
        let configured = &self.config.landing.features;
        if configured.is_empty() {
            DEFAULT_FEATURES.to_vec()
        } else {
            configured.iter().map(Feature::from).collect()
        }
    }

    fn compose_landing_page(&self, layout: &LayoutContext<'_>) -> String {
        let config = &self.config;
        let body = render_landing(
            &config.site,
            &config.landing,
            &self.features(),
            &config.site.base_url,
        );
        render_page(
            layout,
            &PageContent {
                title: None,
                description: config.landing.description.as_deref(),
                body: &body,
                ..PageContent::default()
            },
        )
    }
}

fn compose_doc_page(
    layout: &LayoutContext<'_>,
    catalog: &DocumentCatalog,
    sidebars: &Sidebars,
    doc: &RenderedDoc,
) -> String {
    let id = doc.id.as_str();
    let Some(document) = catalog.get(id) else {
        return String::new();
    };

    let mut body = String::from(r#"<article class="markdown">"#);
    if !doc.has_heading {
        let _ = write!(
            body,
            "<header><h1>{}</h1></header>\n",
            escape_html(&document.title)
        );
    }
    body.push_str(&doc.html);
    body.push_str("</article>");

    let sidebar = sidebars.sidebar_for_doc(id);
    let sidebar_html = sidebar.map(|sidebar| render_sidebar(sidebar, Some(id), catalog));
    let pagination = sidebar.map(|sidebar| pagination(sidebar, id, catalog));

    render_page(
        layout,
        &PageContent {
            title: Some(document.title.as_str()),
            description: document.front_matter.description.as_deref(),
            body: &body,
            sidebar: sidebar_html.as_deref(),
            pagination,
        },
    )
}

/// Previous and next links of `id` in `sidebar` order.
fn pagination(sidebar: &Sidebar, id: &str, docs: &dyn DocLookup) -> Pagination {
    let neighbours = sidebar.neighbours(id);
    let link = |id: &str| {
        Some(PageLink {
            label: docs.label(id)?.to_owned(),
            href: docs.href(id)?,
        })
    };
    Pagination {
        previous: neighbours.previous.and_then(link),
        next: neighbours.next.and_then(link),
    }
}

/// Every route must come from exactly one page; the landing page owns `""`.
fn check_routes(catalog: &DocumentCatalog) -> Result<(), BuildError> {
    let mut owners: BTreeMap<&str, String> = BTreeMap::new();
    owners.insert("", "landing page".to_owned());
    for doc in catalog.iter() {
        let owner = format!("{}.md", doc.id);
        if let Some(first) = owners.insert(doc.route.as_str(), owner.clone()) {
            return Err(BuildError::RouteConflict {
                route: doc.route.clone(),
                first,
                second: owner,
            });
        }
    }
    Ok(())
}

/// Static files must not collide with generated output: page `index.html`
/// files, page directories or `sitemap.xml`.
fn check_static_conflicts(
    catalog: &DocumentCatalog,
    static_files: &[StaticFile],
) -> Result<(), BuildError> {
    let mut outputs: BTreeMap<String, String> = BTreeMap::new();
    outputs.insert("index.html".to_owned(), "landing page".to_owned());
    outputs.insert(SITEMAP_FILE.to_owned(), "sitemap".to_owned());
    for doc in catalog.iter() {
        let owner = format!("{}.md", doc.id);
        outputs.insert(format!("{}/index.html", doc.route), owner.clone());
        outputs.insert(doc.route.clone(), owner);
    }

    for file in static_files {
        if let Some(owner) = outputs.get(&file.relative_path) {
            return Err(BuildError::RouteConflict {
                route: file.relative_path.clone(),
                first: format!("static/{}", file.relative_path),
                second: owner.clone(),
            });
        }
    }
    Ok(())
}

fn validate_sidebars(sidebars: &Sidebars, catalog: &DocumentCatalog) -> Result<(), BuildError> {
    let (fatal, warnings): (Vec<_>, Vec<_>) = sidebars
        .validate(|id| catalog.contains(id))
        .into_iter()
        .partition(sb_sidebar::SidebarIssue::is_fatal);

    for issue in &warnings {
        tracing::warn!("{issue}");
    }
    if !sidebars.is_empty() {
        for doc in catalog.iter() {
            if sidebars.sidebar_for_doc(&doc.id).is_none() {
                tracing::warn!(doc = %doc.id, "Document is not listed in any sidebar");
            }
        }
    }
    if fatal.is_empty() {
        Ok(())
    } else {
        Err(BuildError::InvalidSidebar(fatal))
    }
}

impl RenderedSite {
    /// HTML of the page at `route` (`""` for the landing page).
    pub fn page(&self, route: &str) -> Option<&str> {
        self.pages.get(route).map(String::as_str)
    }

    /// Routes of all pages, sorted.
    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }

    pub fn sitemap(&self) -> &str {
        &self.sitemap
    }

    pub fn report(&self) -> BuildReport {
        BuildReport {
            pages: self.pages.len(),
            static_files: self.static_files.len(),
        }
    }

    /// Replace `output_dir` with the rendered site.
    pub fn write(&self, output_dir: &Path) -> Result<(), BuildError> {
        if output_dir.exists() {
            fs::remove_dir_all(output_dir).map_err(|e| BuildError::io(output_dir, e))?;
        }
        fs::create_dir_all(output_dir).map_err(|e| BuildError::io(output_dir, e))?;

        copy_static_files(&self.static_files, output_dir)?;

        for (route, html) in &self.pages {
            let dir = if route.is_empty() {
                output_dir.to_path_buf()
            } else {
                output_dir.join(route)
            };
            fs::create_dir_all(&dir).map_err(|e| BuildError::io(&dir, e))?;
            let path = dir.join("index.html");
            fs::write(&path, html).map_err(|e| BuildError::io(&path, e))?;
        }

        let sitemap_path = output_dir.join(SITEMAP_FILE);
        fs::write(&sitemap_path, &self.sitemap).map_err(|e| BuildError::io(&sitemap_path, e))?;

        tracing::debug!(output_dir = %output_dir.display(), "Site written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use static_assertions::assert_impl_all;
    use tempfile::TempDir;

    assert_impl_all!(SiteBuilder: Send, Sync);
    assert_impl_all!(RenderedSite: Send, Sync);

    const CONFIG: &str = r#"
[site]
title = "🐍 Snake Bytes"
tagline = "A practical crash course on Python, FastAPI & Streamlit"
url = "https://snake-bytes.dev"
favicon = "img/favicon.ico"

[theme.navbar]
items = [{ label = "📘 Start Reading", doc_id = "python-basics/intro" }]

[[theme.footer.links]]
title = "📚 Book"
items = [{ label = "FastAPI", to = "/fastapi/setting-up" }]

[landing]
cta_label = "🚀 Start Reading"
cta_to = "/python-basics/intro"
"#;

    const SIDEBARS: &str = r"
tutorialSidebar:
  - type: category
    label: 🐍 Python Basics
    collapsed: false
    items:
      - python-basics/intro
      - python-basics/types-and-logic
  - type: category
    label: ⚡ FastAPI
    items:
      - fastapi/setting-up
";

    struct Fixture {
        dir: TempDir,
    }

    impl Fixture {
        fn new() -> Self {
            let fixture = Self {
                dir: tempfile::tempdir().unwrap(),
            };
            fixture.write("sb.toml", CONFIG);
            fixture.write("sidebars.yaml", SIDEBARS);
            fixture.write(
                "docs/python-basics/intro.md",
                "# Introduction\n\nNext up: [types](types-and-logic.md).\n\n:::tip[Did You Know?]\nPython is fun.\n:::\n",
            );
            fixture.write(
                "docs/python-basics/types-and-logic.md",
                "---\ntitle: Types & Logic\n---\nSee [setup](/fastapi/setting-up).\n",
            );
            fixture.write("docs/fastapi/setting-up.md", "# Setting Up\n\n```bash\npip install fastapi\n```\n");
            fixture.write("static/img/favicon.ico", "ico");
            for image in DEFAULT_FEATURES.iter().map(|f| f.image) {
                fixture.write(&format!("static{image}"), "<svg/>");
            }
            fixture
        }

        fn path(&self, rel: &str) -> PathBuf {
            self.dir.path().join(rel)
        }

        fn write(&self, rel: &str, content: &str) {
            let path = self.path(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }

        fn builder(&self) -> SiteBuilder {
            let config = Config::load(Some(self.path("sb.toml").as_path()), None).unwrap();
            SiteBuilder::new(config)
        }

        fn read(&self, rel: &str) -> String {
            fs::read_to_string(self.path("build").join(rel)).unwrap()
        }
    }

    fn read_tree(dir: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
        let mut files = BTreeMap::new();
        let mut stack = vec![dir.to_path_buf()];
        while let Some(current) = stack.pop() {
            for entry in fs::read_dir(&current).unwrap() {
                let path = entry.unwrap().path();
                if path.is_dir() {
                    stack.push(path);
                } else {
                    let bytes = fs::read(&path).unwrap();
                    files.insert(path.strip_prefix(dir).unwrap().to_path_buf(), bytes);
                }
            }
        }
        files
    }

    #[test]
    fn test_build_writes_pages_static_files_and_sitemap() {
        let fixture = Fixture::new();
        let report = fixture.builder().build().unwrap();
        assert_eq!(report.pages, 4);
        assert_eq!(report.static_files, 4);

        let landing = fixture.read("index.html");
        assert!(landing.contains(r#"<h1 class="hero__title">🐍 Snake Bytes</h1>"#));
        assert!(landing.contains(
            r#"<p class="hero__subtitle">A practical crash course on Python, FastAPI &amp; Streamlit</p>"#
        ));

        let intro = fixture.read("python-basics/intro/index.html");
        assert!(intro.contains("<title>Introduction | 🐍 Snake Bytes</title>"));
        assert!(intro.contains(r#"href="/python-basics/types-and-logic">types</a>"#));
        assert!(intro.contains("🐍 Did You Know?</h4>"));

        assert!(fixture.path("build/img/favicon.ico").exists());
        assert!(fixture.read("sitemap.xml").contains("<loc>https://snake-bytes.dev/fastapi/setting-up</loc>"));
    }

    #[test]
    fn test_build_is_idempotent() {
        let fixture = Fixture::new();
        fixture.builder().build().unwrap();
        let first = read_tree(&fixture.path("build"));
        fixture.builder().build().unwrap();
        let second = read_tree(&fixture.path("build"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_build_replaces_stale_output() {
        let fixture = Fixture::new();
        fixture.write("build/stale.html", "old");
        fixture.builder().build().unwrap();
        assert!(!fixture.path("build/stale.html").exists());
    }

    #[test]
    fn test_sidebar_and_pagination() {
        let fixture = Fixture::new();
        let site = fixture.builder().render().unwrap();
        let page = site.page("python-basics/types-and-logic").unwrap();

        assert!(page.contains(
            r#"<a class="menu__link menu__link--active" aria-current="page" href="/python-basics/types-and-logic">Types &amp; Logic</a>"#
        ));
        let python = page.find("🐍 Python Basics").unwrap();
        let fastapi = page.find("⚡ FastAPI").unwrap();
        assert!(python < fastapi);
        assert!(page.contains(r#"<div class="pagination-nav__label">Introduction</div>"#));
        assert!(page.contains(r#"<div class="pagination-nav__label">Setting Up</div>"#));
    }

    #[test]
    fn test_front_matter_title_gets_heading() {
        let fixture = Fixture::new();
        let site = fixture.builder().render().unwrap();
        let page = site.page("python-basics/types-and-logic").unwrap();
        assert!(page.contains("<header><h1>Types &amp; Logic</h1></header>"));
        let intro = site.page("python-basics/intro").unwrap();
        assert!(!intro.contains("<header><h1>"));
    }

    #[test]
    fn test_routes_sorted() {
        let fixture = Fixture::new();
        let site = fixture.builder().render().unwrap();
        let routes: Vec<_> = site.routes().collect();
        assert_eq!(
            routes,
            vec![
                "",
                "fastapi/setting-up",
                "python-basics/intro",
                "python-basics/types-and-logic",
            ]
        );
    }

    #[test]
    fn test_broken_page_link_under_throw_writes_nothing() {
        let fixture = Fixture::new();
        fixture.write("docs/fastapi/setting-up.md", "[Gone](/fastapi/missing)\n");

        let err = fixture.builder().build().unwrap_err();
        match err {
            BuildError::BrokenLinks(links) => {
                assert_eq!(links.len(), 1);
                assert_eq!(links[0].to_string(), "fastapi/setting-up.md links to /fastapi/missing");
            }
            other => panic!("expected broken links, got {other}"),
        }
        assert!(!fixture.path("build").exists());
    }

    #[test]
    fn test_broken_markdown_link_under_warn_builds() {
        let fixture = Fixture::new();
        fixture.write("docs/fastapi/setting-up.md", "[Gone](missing.md)\n");
        assert!(fixture.builder().build().is_ok());
        assert!(fixture.read("fastapi/setting-up/index.html").contains(r#"href="missing.md""#));
    }

    #[test]
    fn test_broken_navbar_doc_fails() {
        let fixture = Fixture::new();
        fixture.write(
            "sb.toml",
            &CONFIG.replace(r#"doc_id = "python-basics/intro""#, r#"doc_id = "python-basics/gone""#),
        );
        let err = fixture.builder().render().unwrap_err();
        assert!(err.to_string().contains("navbar links to python-basics/gone"));
    }

    #[test]
    fn test_unknown_sidebar_doc_fails() {
        let fixture = Fixture::new();
        fixture.write("sidebars.yaml", &SIDEBARS.replace("fastapi/setting-up", "fastapi/missing"));
        let err = fixture.builder().build().unwrap_err();
        assert!(matches!(
            &err,
            BuildError::InvalidSidebar(issues) if issues.iter().all(sb_sidebar::SidebarIssue::is_fatal)
        ));
        assert!(err.to_string().contains("fastapi/missing"));
        assert!(!fixture.path("build").exists());
    }

    #[test]
    fn test_empty_category_fails() {
        let fixture = Fixture::new();
        fixture.write(
            "sidebars.yaml",
            "tutorialSidebar:\n  - python-basics/intro\n  - type: category\n    label: Empty\n    items: []\n",
        );
        let err = fixture.builder().render().unwrap_err();
        assert!(matches!(err, BuildError::InvalidSidebar(_)));
    }

    #[test]
    fn test_route_conflict_with_landing_page() {
        let fixture = Fixture::new();
        fixture.write("docs/index.md", "# Home");
        let err = fixture.builder().render().unwrap_err();
        assert!(matches!(
            err,
            BuildError::RouteConflict { ref route, .. } if route.is_empty()
        ));
    }

    #[test]
    fn test_static_file_shadowing_page_is_conflict() {
        for path in [
            "static/index.html",
            "static/sitemap.xml",
            "static/python-basics/intro/index.html",
        ] {
            let fixture = Fixture::new();
            fixture.write(path, "<html></html>");
            let err = fixture.builder().render().unwrap_err();
            assert!(
                matches!(&err, BuildError::RouteConflict { first, .. } if first.as_str() == path),
                "{path}: {err}"
            );
        }
    }

    #[test]
    fn test_relative_links_follow_page_policy() {
        let fixture = Fixture::new();
        fixture.write(
            "docs/fastapi/setting-up.md",
            "# Setting Up\n\n[gone](missing-page) ![img](../nope.png)\n",
        );
        let err = fixture.builder().build().unwrap_err();
        let BuildError::BrokenLinks(links) = err else {
            panic!("expected broken links");
        };
        let targets: Vec<_> = links.iter().map(|l| l.target.as_str()).collect();
        assert_eq!(targets, vec!["missing-page", "../nope.png"]);
        assert!(!fixture.path("build").exists());
    }

    #[test]
    fn test_relative_links_to_pages_and_assets_resolve() {
        let fixture = Fixture::new();
        fixture.write(
            "docs/python-basics/intro.md",
            "# Introduction\n\n[types](types-and-logic#hints) ![icon](../img/favicon.ico)\n",
        );
        let site = fixture.builder().render().unwrap();
        let page = site.page("python-basics/intro").unwrap();
        assert!(page.contains(r#"href="/python-basics/types-and-logic#hints""#));
        assert!(page.contains(r#"src="/img/favicon.ico""#));
    }

    #[test]
    fn test_missing_sidebar_file_builds_without_sidebar() {
        let fixture = Fixture::new();
        fs::remove_file(fixture.path("sidebars.yaml")).unwrap();
        let site = fixture.builder().render().unwrap();
        let page = site.page("python-basics/intro").unwrap();
        assert!(!page.contains(r#"<aside class="doc-sidebar">"#));
    }

    #[test]
    fn test_custom_features_replace_defaults() {
        let fixture = Fixture::new();
        fixture.write(
            "sb.toml",
            &format!(
                "{CONFIG}\n[[landing.features]]\ntitle = \"Async APIs\"\nimage = \"/img/favicon.ico\"\ndescription = \"Await it\"\n"
            ),
        );
        let site = fixture.builder().render().unwrap();
        let landing = site.page("").unwrap();
        assert_eq!(landing.matches(r#"<div class="col col--4">"#).count(), 1);
        assert!(landing.contains("<h3>Async APIs</h3>"));
    }

    #[test]
    fn test_book_renders() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
        let config = Config::load(Some(root.join("sb.toml").as_path()), None).unwrap();
        let site = SiteBuilder::new(config).render().unwrap();

        assert_eq!(site.report().pages, 8);
        let page = site.page("streamlit/layout-basics").unwrap();
        let positions: Vec<usize> = [
            "🐍 Python Basics",
            "⚡ FastAPI",
            "🎨 Streamlit",
            "🔗 Full-Stack Integration",
        ]
        .iter()
        .map(|label| page.find(label).unwrap())
        .collect();
        assert!(positions.is_sorted());
    }
}
