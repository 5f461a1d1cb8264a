//! Landing page body: hero header plus the feature grid.

use std::fmt::Write;

use sb_config::{LandingConfig, SiteMetadata};

use crate::components::features::{Feature, render_features};
use crate::escape::escape_html;
use crate::route::internal_href;

/// Render the landing page body.
///
/// Title and tagline come straight from the site metadata. The call to action
/// and hero image paths are base-relative and get `base_url` prepended.
#[must_use]
pub fn render_landing(
    site: &SiteMetadata,
    landing: &LandingConfig,
    features: &[Feature<'_>],
    base_url: &str,
) -> String {
    let mut html = String::with_capacity(2048);
    html.push_str(r#"<header class="hero hero--primary"><div class="container"><div class="hero__content">"#);

    let _ = write!(
        html,
        concat!(
            r#"<div class="hero__text">"#,
            r#"<h1 class="hero__title">{title}</h1>"#,
            r#"<p class="hero__subtitle">{tagline}</p>"#,
            r#"<a class="button button--secondary button--lg" href="{cta_href}">{cta_label}</a>"#,
            "</div>",
        ),
        title = escape_html(&site.title),
        tagline = escape_html(&site.tagline),
        cta_href = escape_html(&internal_href(base_url, &landing.cta_to)),
        cta_label = escape_html(&landing.cta_label),
    );

    if let Some(image) = &landing.hero_image {
        let src = format!("{base_url}{}", image.trim_start_matches('/'));
        let _ = write!(
            html,
            r#"<div class="hero__image"><img src="{}" alt="{}"></div>"#,
            escape_html(&src),
            escape_html(&landing.hero_alt)
        );
    }

    html.push_str("</div></div></header><main>");
    html.push_str(&render_features(features, base_url));
    html.push_str("</main>");
    html
}
