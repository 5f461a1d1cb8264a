//! Feature grid shown on the landing page.

use std::fmt::Write;

use sb_config::FeatureConfig;

use crate::escape::escape_html;

/// A feature callout: illustration, heading and a short description.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature<'a> {
    pub title: &'a str,
    /// Base-relative image path, e.g. `/img/undraw_docusaurus_tree.svg`.
    pub image: &'a str,
    pub description: &'a str,
}

impl<'a> From<&'a FeatureConfig> for Feature<'a> {
    fn from(config: &'a FeatureConfig) -> Self {
        Self {
            title: &config.title,
            image: &config.image,
            description: &config.description,
        }
    }
}

/// Features shown when the config file declares none.
pub const DEFAULT_FEATURES: [Feature<'static>; 3] = [
    Feature {
        title: "Beginner Friendly 🐍",
        image: "/img/undraw_docusaurus_mountain.svg",
        description: "Learn Python from scratch with simple explanations, real-world examples, \
                      and zero confusion. Perfect for absolute beginners.",
    },
    Feature {
        title: "Hands-on Practice 💻",
        image: "/img/undraw_docusaurus_tree.svg",
        description: "Every concept comes with practice code and mini challenges so you learn \
                      by doing, not just reading.",
    },
    Feature {
        title: "Built with Modern Tools ⚡",
        image: "/img/undraw_docusaurus_react.svg",
        description: "Powered by a small Rust static site builder to give you a fast, clean, \
                      and modern learning experience.",
    },
];

/// Render features as a three-column grid, one block per feature, in order.
///
/// ```
/// use sb_renderer::components::{DEFAULT_FEATURES, render_features};
///
/// let html = render_features(&DEFAULT_FEATURES, "/");
/// assert_eq!(html.matches(r#"<div class="col col--4">"#).count(), 3);
/// ```
#[must_use]
pub fn render_features(features: &[Feature<'_>], base_url: &str) -> String {
    let mut html = String::from(
        r#"<section class="features"><div class="container"><div class="row">"#,
    );
    for feature in features {
        let src = format!("{base_url}{}", feature.image.trim_start_matches('/'));
        let _ = write!(
            html,
            concat!(
                r#"<div class="col col--4">"#,
                r#"<div class="text--center"><img class="feature__image" src="{src}" alt="" role="img"></div>"#,
                r#"<div class="text--center padding-horiz--md"><h3>{title}</h3><p>{description}</p></div>"#,
                "</div>",
            ),
            src = escape_html(&src),
            title = escape_html(feature.title),
            description = escape_html(feature.description),
        );
    }
    html.push_str("</div></div></section>");
    html
}
