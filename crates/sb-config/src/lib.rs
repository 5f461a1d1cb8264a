//! Site configuration for the Snake Bytes book builder.
//!
//! Parses `sb.toml` with serde and provides auto-discovery of the config
//! file in parent directories. The file is the site metadata descriptor:
//! title and tagline, deployment URL, broken-link policies, navbar, footer,
//! syntax highlighting and landing page composition.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! Deployment-specific values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.url`
//! - `site.base_url`

mod expand;

use serde::Deserialize;
use std::path::{Component, Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override build output directory.
    pub output_dir: Option<PathBuf>,
    /// Override site base URL.
    pub base_url: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "sb.toml";

/// Site configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site-wide metadata.
    pub site: SiteMetadata,
    /// Content locations (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Build output settings (paths are relative strings from TOML).
    build: BuildConfigRaw,
    /// Navbar, footer and syntax highlighting.
    pub theme: ThemeConfig,
    /// Landing page composition.
    pub landing: LandingConfig,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Resolved build configuration (set after loading).
    #[serde(skip)]
    pub build_resolved: BuildConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// How a class of broken links is reported.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportingSeverity {
    /// Drop the report.
    Ignore,
    /// Report at info level.
    Log,
    /// Report at warn level.
    Warn,
    /// Fail the build.
    #[default]
    Throw,
}

/// Site-wide metadata.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteMetadata {
    /// Site title, shown in the navbar, page titles and the landing header.
    pub title: String,
    /// One-line tagline shown under the landing title.
    pub tagline: String,
    /// Production origin (scheme and host), used for absolute URLs.
    pub url: String,
    /// Path prefix the site is served under. Starts and ends with `/`.
    pub base_url: String,
    /// Favicon path relative to the static directory.
    pub favicon: Option<String>,
    /// Policy for internal page links that don't resolve.
    pub on_broken_links: ReportingSeverity,
    /// Policy for markdown `.md` links that don't resolve to a document.
    pub on_broken_markdown_links: ReportingSeverity,
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self {
            title: "Documentation".to_owned(),
            tagline: String::new(),
            url: "http://localhost".to_owned(),
            base_url: "/".to_owned(),
            favicon: None,
            on_broken_links: ReportingSeverity::Throw,
            on_broken_markdown_links: ReportingSeverity::Warn,
        }
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
    sidebar_path: Option<String>,
    static_dir: Option<String>,
    route_base_path: Option<String>,
}

/// Resolved content locations with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Directory holding markdown documents.
    pub source_dir: PathBuf,
    /// Sidebar declaration file.
    pub sidebar_path: PathBuf,
    /// Directory copied verbatim into the output.
    pub static_dir: PathBuf,
    /// Route prefix for documents, without surrounding slashes (`""` for root).
    pub route_base_path: String,
}

/// Raw build configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct BuildConfigRaw {
    output_dir: Option<String>,
}

/// Resolved build configuration.
#[derive(Debug, Default)]
pub struct BuildConfig {
    /// Directory the static site is written to.
    pub output_dir: PathBuf,
}

/// Theme configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Top navigation bar.
    pub navbar: NavbarConfig,
    /// Page footer.
    pub footer: FooterConfig,
    /// Syntax highlighting.
    pub prism: PrismConfig,
}

/// Navbar configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    /// Navbar title. Falls back to `site.title`.
    pub title: Option<String>,
    /// Navbar entries in display order.
    pub items: Vec<NavbarItem>,
}

/// Side of the navbar an item is placed on.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NavbarPosition {
    #[default]
    Left,
    Right,
}

/// Navbar entry. Exactly one of `doc_id`, `to` or `href` must be set.
#[derive(Debug, Deserialize)]
pub struct NavbarItem {
    /// Display label.
    pub label: String,
    /// Placement.
    #[serde(default)]
    pub position: NavbarPosition,
    /// Document id to link to.
    pub doc_id: Option<String>,
    /// Internal, base-relative path.
    pub to: Option<String>,
    /// External URL.
    pub href: Option<String>,
}

impl NavbarItem {
    /// Link target, or `None` if the item is misconfigured.
    pub fn target(&self) -> Option<LinkTarget<'_>> {
        link_target(
            self.doc_id.as_deref(),
            self.to.as_deref(),
            self.href.as_deref(),
        )
    }
}

/// Where a configured link points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    /// A document id.
    Doc(&'a str),
    /// A base-relative site path such as `/fastapi/setting-up`.
    Internal(&'a str),
    /// An absolute external URL.
    External(&'a str),
}

fn link_target<'a>(
    doc_id: Option<&'a str>,
    to: Option<&'a str>,
    href: Option<&'a str>,
) -> Option<LinkTarget<'a>> {
    match (doc_id, to, href) {
        (Some(id), None, None) => Some(LinkTarget::Doc(id)),
        (None, Some(to), None) => Some(LinkTarget::Internal(to)),
        (None, None, Some(href)) => Some(LinkTarget::External(href)),
        _ => None,
    }
}

/// Footer color scheme.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    Light,
    #[default]
    Dark,
}

impl FooterStyle {
    /// Lowercase name used in CSS class names.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Footer configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    /// Color scheme.
    pub style: FooterStyle,
    /// Link columns in display order.
    pub links: Vec<FooterLinkGroup>,
    /// Copyright line, rendered as-is.
    pub copyright: Option<String>,
}

/// Titled column of footer links.
#[derive(Debug, Deserialize)]
pub struct FooterLinkGroup {
    /// Column heading.
    pub title: String,
    /// Links in display order.
    #[serde(default)]
    pub items: Vec<FooterItem>,
}

/// Footer link. Exactly one of `to` or `href` must be set.
#[derive(Debug, Deserialize)]
pub struct FooterItem {
    /// Display label.
    pub label: String,
    /// Internal, base-relative path.
    pub to: Option<String>,
    /// External URL.
    pub href: Option<String>,
}

impl FooterItem {
    /// Link target, or `None` if the item is misconfigured.
    pub fn target(&self) -> Option<LinkTarget<'_>> {
        link_target(None, self.to.as_deref(), self.href.as_deref())
    }
}

/// Syntax highlighting configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PrismConfig {
    /// Light-mode theme name.
    pub theme: String,
    /// Dark-mode theme name.
    pub dark_theme: String,
    /// Languages enabled on top of the built-in set.
    pub additional_languages: Vec<String>,
}

impl Default for PrismConfig {
    fn default() -> Self {
        Self {
            theme: "github".to_owned(),
            dark_theme: "dracula".to_owned(),
            additional_languages: Vec::new(),
        }
    }
}

/// Landing page composition.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// `<meta name="description">` of the landing page.
    pub description: Option<String>,
    /// Call-to-action button label.
    pub cta_label: String,
    /// Call-to-action target, a base-relative path.
    pub cta_to: String,
    /// Hero image path (base-relative).
    pub hero_image: Option<String>,
    /// Hero image alt text.
    pub hero_alt: String,
    /// Feature callouts. Empty means the built-in list.
    pub features: Vec<FeatureConfig>,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            description: None,
            cta_label: "Start Reading".to_owned(),
            cta_to: "/".to_owned(),
            hero_image: None,
            hero_alt: String::new(),
            features: Vec::new(),
        }
    }
}

/// Feature callout declared in the config file.
#[derive(Debug, Deserialize)]
pub struct FeatureConfig {
    /// Callout heading.
    pub title: String,
    /// Illustration path (base-relative).
    pub image: String,
    /// Callout body text.
    pub description: String,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.url`").
        field: String,
        /// Error message (e.g., "${`DEPLOY_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

/// Absolute form of `path` with `.` and `..` folded, without touching the filesystem.
fn normalize_path(path: &Path) -> Result<PathBuf, ConfigError> {
    let mut normalized = PathBuf::new();
    for component in std::path::absolute(path)?.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    Ok(normalized)
}

/// Require an internal path to be absolute within the site.
fn require_site_path(path: &str, field: &str) -> Result<(), ConfigError> {
    if !path.starts_with('/') {
        return Err(ConfigError::Validation(format!(
            "{field} must start with / (got {path:?})"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `sb.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.build_resolved.output_dir.clone_from(output_dir);
        }
        if let Some(base_url) = &settings.base_url {
            self.site.base_url.clone_from(base_url);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteMetadata::default(),
            docs: DocsConfigRaw::default(),
            build: BuildConfigRaw::default(),
            theme: ThemeConfig::default(),
            landing: LandingConfig::default(),
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
                sidebar_path: base.join("sidebars.yaml"),
                static_dir: base.join("static"),
                route_base_path: String::new(),
            },
            build_resolved: BuildConfig {
                output_dir: base.join("build"),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content, path)
    }

    /// Parse configuration text as if it had been read from `path`.
    ///
    /// # Errors
    ///
    /// Returns error if parsing, env expansion or validation fails.
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_navbar()?;
        self.validate_footer()?;
        self.validate_landing()?;
        self.validate_output_dir()?;
        Ok(())
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;
        require_http_url(&self.site.url, "site.url")?;

        let base_url = &self.site.base_url;
        if !base_url.starts_with('/') || !base_url.ends_with('/') {
            return Err(ConfigError::Validation(format!(
                "site.base_url must start and end with / (got {base_url:?})"
            )));
        }
        Ok(())
    }

    fn validate_navbar(&self) -> Result<(), ConfigError> {
        for (idx, item) in self.theme.navbar.items.iter().enumerate() {
            let field = format!("theme.navbar.items[{idx}]");
            require_non_empty(&item.label, &format!("{field}.label"))?;
            match item.target() {
                Some(LinkTarget::Internal(to)) => require_site_path(to, &format!("{field}.to"))?,
                Some(LinkTarget::External(href)) => {
                    require_http_url(href, &format!("{field}.href"))?;
                }
                Some(LinkTarget::Doc(id)) => require_non_empty(id, &format!("{field}.doc_id"))?,
                None => {
                    return Err(ConfigError::Validation(format!(
                        "{field} must set exactly one of doc_id, to, href"
                    )));
                }
            }
        }
        Ok(())
    }

    fn validate_footer(&self) -> Result<(), ConfigError> {
        for (group_idx, group) in self.theme.footer.links.iter().enumerate() {
            require_non_empty(
                &group.title,
                &format!("theme.footer.links[{group_idx}].title"),
            )?;
            for (idx, item) in group.items.iter().enumerate() {
                let field = format!("theme.footer.links[{group_idx}].items[{idx}]");
                match item.target() {
                    Some(LinkTarget::Internal(to)) => {
                        require_site_path(to, &format!("{field}.to"))?;
                    }
                    Some(LinkTarget::External(href)) => {
                        require_http_url(href, &format!("{field}.href"))?;
                    }
                    _ => {
                        return Err(ConfigError::Validation(format!(
                            "{field} must set exactly one of to, href"
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// The output directory is cleared on every build, so it must not hold
    /// any of the book's inputs.
    fn validate_output_dir(&self) -> Result<(), ConfigError> {
        let output_dir = normalize_path(&self.build_resolved.output_dir)?;
        let docs = &self.docs_resolved;
        let config_dir = self.config_path.as_deref().and_then(Path::parent);
        let inputs = [
            ("config directory", config_dir),
            ("docs.source_dir", Some(docs.source_dir.as_path())),
            ("docs.static_dir", Some(docs.static_dir.as_path())),
            ("docs.sidebar_path", Some(docs.sidebar_path.as_path())),
        ];
        for (name, input) in inputs {
            let Some(input) = input else {
                continue;
            };
            if normalize_path(input)?.starts_with(&output_dir) {
                return Err(ConfigError::Validation(format!(
                    "build.output_dir {} would overwrite the {name} ({})",
                    self.build_resolved.output_dir.display(),
                    input.display()
                )));
            }
        }
        Ok(())
    }

    fn validate_landing(&self) -> Result<(), ConfigError> {
        require_site_path(&self.landing.cta_to, "landing.cta_to")?;
        for (idx, feature) in self.landing.features.iter().enumerate() {
            require_non_empty(&feature.title, &format!("landing.features[{idx}].title"))?;
        }
        Ok(())
    }

    /// Expand environment variable references in deployment settings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.url = expand::expand_env(&self.site.url, "site.url")?;
        self.site.base_url = expand::expand_env(&self.site.base_url, "site.base_url")?;
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.docs_resolved = DocsConfig {
            source_dir: resolve(self.docs.source_dir.as_deref(), "docs"),
            sidebar_path: resolve(self.docs.sidebar_path.as_deref(), "sidebars.yaml"),
            static_dir: resolve(self.docs.static_dir.as_deref(), "static"),
            route_base_path: self
                .docs
                .route_base_path
                .as_deref()
                .unwrap_or("/")
                .trim_matches('/')
                .to_owned(),
        };

        self.build_resolved = BuildConfig {
            output_dir: resolve(self.build.output_dir.as_deref(), "build"),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BOOK_TOML: &str = r#"
[site]
title = "🐍 Snake Bytes"
tagline = "A practical crash course on Python, FastAPI & Streamlit"
url = "https://snake-bytes.dev"
base_url = "/"
favicon = "img/favicon.svg"
on_broken_links = "throw"
on_broken_markdown_links = "warn"

[docs]
source_dir = "content"
route_base_path = "/"

[theme.navbar]
title = "🐍 Snake Bytes"

[[theme.navbar.items]]
doc_id = "python-basics/intro"
label = "📘 Start Reading"
position = "left"

[theme.footer]
style = "dark"
copyright = "© Snake Bytes"

[[theme.footer.links]]
title = "📚 Book"
items = [
    { label = "Python Basics", to = "/python-basics/intro" },
    { label = "FastAPI Docs", href = "https://fastapi.tiangolo.com" },
]

[theme.prism]
additional_languages = ["python", "bash", "json", "yaml"]

[landing]
cta_label = "🚀 Start Reading"
cta_to = "/python-basics/intro"
hero_image = "/img/hero.svg"
"#;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/book"));
        assert_eq!(config.site.base_url, "/");
        assert_eq!(config.site.on_broken_links, ReportingSeverity::Throw);
        assert_eq!(config.site.on_broken_markdown_links, ReportingSeverity::Warn);
        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/book/docs"));
        assert_eq!(
            config.docs_resolved.sidebar_path,
            PathBuf::from("/book/sidebars.yaml")
        );
        assert_eq!(config.docs_resolved.static_dir, PathBuf::from("/book/static"));
        assert_eq!(config.build_resolved.output_dir, PathBuf::from("/book/build"));
        assert_eq!(config.theme.prism.theme, "github");
        assert_eq!(config.theme.prism.dark_theme, "dracula");
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.site.title, "Documentation");
        assert!(config.theme.navbar.items.is_empty());
    }

    #[test]
    fn test_parse_book_config() {
        let config = Config::from_toml_str(BOOK_TOML, Path::new("/book/sb.toml")).unwrap();

        assert_eq!(config.site.title, "🐍 Snake Bytes");
        assert_eq!(
            config.site.tagline,
            "A practical crash course on Python, FastAPI & Streamlit"
        );
        assert_eq!(config.site.favicon.as_deref(), Some("img/favicon.svg"));
        assert_eq!(
            config.docs_resolved.source_dir,
            PathBuf::from("/book/content")
        );
        assert_eq!(config.docs_resolved.route_base_path, "");
        assert_eq!(
            config.config_path.as_deref(),
            Some(Path::new("/book/sb.toml"))
        );

        let item = &config.theme.navbar.items[0];
        assert_eq!(item.target(), Some(LinkTarget::Doc("python-basics/intro")));
        assert_eq!(item.position, NavbarPosition::Left);

        let group = &config.theme.footer.links[0];
        assert_eq!(group.title, "📚 Book");
        assert_eq!(
            group.items[0].target(),
            Some(LinkTarget::Internal("/python-basics/intro"))
        );
        assert_eq!(
            group.items[1].target(),
            Some(LinkTarget::External("https://fastapi.tiangolo.com"))
        );
        assert_eq!(config.theme.footer.style, FooterStyle::Dark);
        assert_eq!(
            config.theme.prism.additional_languages,
            vec!["python", "bash", "json", "yaml"]
        );
        assert_eq!(config.landing.cta_to, "/python-basics/intro");
    }

    #[test]
    fn test_route_base_path_is_trimmed() {
        let toml = r#"
[docs]
route_base_path = "/docs/"
"#;
        let config = Config::from_toml_str(toml, Path::new("/book/sb.toml")).unwrap();
        assert_eq!(config.docs_resolved.route_base_path, "docs");
    }

    #[test]
    fn test_reporting_severity_values() {
        let toml = r#"
[site]
on_broken_links = "ignore"
on_broken_markdown_links = "log"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.site.on_broken_links, ReportingSeverity::Ignore);
        assert_eq!(config.site.on_broken_markdown_links, ReportingSeverity::Log);
    }

    #[test]
    fn test_unknown_severity_is_parse_error() {
        let toml = r#"
[site]
on_broken_links = "explode"
"#;
        let result = Config::from_toml_str(toml, Path::new("/book/sb.toml"));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default_with_base(Path::new("/book"));
        let overrides = CliSettings {
            source_dir: Some(PathBuf::from("/other/docs")),
            output_dir: Some(PathBuf::from("/tmp/out")),
            base_url: Some("/snake-bytes/".to_owned()),
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/other/docs"));
        assert_eq!(config.build_resolved.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.site.base_url, "/snake-bytes/");
        assert_eq!(
            config.docs_resolved.static_dir,
            PathBuf::from("/book/static")
        );
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default_with_base(Path::new("/book"));
        config.apply_cli_settings(&CliSettings::default());
        assert_eq!(config.site.base_url, "/");
        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/book/docs"));
    }

    #[test]
    fn test_load_from_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sb.toml");
        std::fs::write(&path, BOOK_TOML).unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.site.title, "🐍 Snake Bytes");
        assert_eq!(config.docs_resolved.source_dir, dir.path().join("content"));
        assert_eq!(config.build_resolved.output_dir, dir.path().join("build"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Some(Path::new("/nonexistent/sb.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    fn write_book(dir: &Path, build: &str) -> PathBuf {
        let path = dir.join("sb.toml");
        std::fs::write(&path, format!("{BOOK_TOML}\n[build]\n{build}\n")).unwrap();
        path
    }

    #[test]
    fn test_output_dir_cannot_be_project_root() {
        let dir = tempfile::tempdir().unwrap();
        for build in [r#"output_dir = ".""#, r#"output_dir = "..""#, r#"output_dir = "content/..""#] {
            let path = write_book(dir.path(), build);
            let err = Config::load(Some(&path), None).unwrap_err();
            assert!(
                matches!(&err, ConfigError::Validation(msg) if msg.contains("build.output_dir")),
                "{build}: {err}"
            );
        }
    }

    #[test]
    fn test_output_dir_cannot_be_source_or_static_dir() {
        let dir = tempfile::tempdir().unwrap();
        for build in [r#"output_dir = "content""#, r#"output_dir = "./static""#] {
            let path = write_book(dir.path(), build);
            assert!(Config::load(Some(&path), None).is_err(), "{build}");
        }
    }

    #[test]
    fn test_output_dir_beside_inputs_is_valid() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_book(dir.path(), r#"output_dir = "site/out""#);
        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.build_resolved.output_dir, dir.path().join("site/out"));
    }

    #[test]
    fn test_cli_output_dir_over_sources_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sb.toml");
        std::fs::write(&path, BOOK_TOML).unwrap();
        let settings = CliSettings {
            output_dir: Some(dir.path().to_path_buf()),
            ..CliSettings::default()
        };

        let err = Config::load(Some(&path), Some(&settings)).unwrap_err();
        assert!(err.to_string().contains("config directory"));
    }

    #[test]
    fn test_load_revalidates_cli_base_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sb.toml");
        std::fs::write(&path, BOOK_TOML).unwrap();
        let settings = CliSettings {
            base_url: Some("no-slashes".to_owned()),
            ..CliSettings::default()
        };

        let err = Config::load(Some(&path), Some(&settings)).unwrap_err();
        assert!(err.to_string().contains("site.base_url"));
    }

    #[test]
    fn test_expand_env_vars_site_url() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("SB_TEST_SITE_URL", "https://preview.example.com");
        }

        let toml = r#"
[site]
url = "${SB_TEST_SITE_URL}"
base_url = "${SB_TEST_SITE_BASE:-/}"
"#;
        let config = Config::from_toml_str(toml, Path::new("/book/sb.toml")).unwrap();

        assert_eq!(config.site.url, "https://preview.example.com");
        assert_eq!(config.site.base_url, "/");

        unsafe {
            std::env::remove_var("SB_TEST_SITE_URL");
        }
    }

    // Validation tests

    /// Assert that validation fails with expected substrings in the error message.
    fn assert_validation_error(config: &Config, expected_substrings: &[&str]) {
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        let msg = err.to_string();
        for s in expected_substrings {
            assert!(
                msg.contains(s),
                "Expected error to contain '{s}', got: {msg}"
            );
        }
    }

    #[test]
    fn test_validate_default_config_passes() {
        let config = Config::default_with_base(Path::new("/book"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_title() {
        let mut config = Config::default_with_base(Path::new("/book"));
        config.site.title = "  ".to_owned();
        assert_validation_error(&config, &["site.title", "empty"]);
    }

    #[test]
    fn test_validate_url_scheme() {
        let mut config = Config::default_with_base(Path::new("/book"));
        config.site.url = "snake-bytes.dev".to_owned();
        assert_validation_error(&config, &["site.url", "http"]);
    }

    #[test]
    fn test_validate_base_url_slashes() {
        let mut config = Config::default_with_base(Path::new("/book"));
        config.site.base_url = "/snake-bytes".to_owned();
        assert_validation_error(&config, &["site.base_url"]);
    }

    #[test]
    fn test_validate_navbar_item_without_target() {
        let mut config = Config::default_with_base(Path::new("/book"));
        config.theme.navbar.items.push(NavbarItem {
            label: "Lost".to_owned(),
            position: NavbarPosition::Right,
            doc_id: None,
            to: None,
            href: None,
        });
        assert_validation_error(&config, &["theme.navbar.items[0]", "exactly one"]);
    }

    #[test]
    fn test_validate_navbar_item_with_two_targets() {
        let mut config = Config::default_with_base(Path::new("/book"));
        config.theme.navbar.items.push(NavbarItem {
            label: "Both".to_owned(),
            position: NavbarPosition::Left,
            doc_id: Some("intro".to_owned()),
            to: Some("/intro".to_owned()),
            href: None,
        });
        assert_validation_error(&config, &["exactly one"]);
    }

    #[test]
    fn test_validate_footer_relative_to() {
        let mut config = Config::default_with_base(Path::new("/book"));
        config.theme.footer.links.push(FooterLinkGroup {
            title: "Book".to_owned(),
            items: vec![FooterItem {
                label: "FastAPI".to_owned(),
                to: Some("fastapi/setting-up".to_owned()),
                href: None,
            }],
        });
        assert_validation_error(&config, &["theme.footer.links[0].items[0].to", "/"]);
    }

    #[test]
    fn test_validate_footer_href_scheme() {
        let mut config = Config::default_with_base(Path::new("/book"));
        config.theme.footer.links.push(FooterLinkGroup {
            title: "Resources".to_owned(),
            items: vec![FooterItem {
                label: "Docs".to_owned(),
                to: None,
                href: Some("docs.streamlit.io".to_owned()),
            }],
        });
        assert_validation_error(&config, &["href", "http"]);
    }

    #[test]
    fn test_validate_landing_cta() {
        let mut config = Config::default_with_base(Path::new("/book"));
        config.landing.cta_to = "python-basics/intro".to_owned();
        assert_validation_error(&config, &["landing.cta_to"]);
    }
}
