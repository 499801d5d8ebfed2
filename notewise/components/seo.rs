//! Per-page head tags: title, description, canonical link, Open Graph and
//! Twitter cards. Everything here is a pure function of the strings a page
//! passes in.
use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

pub const SITE_NAME: &str = "Notewise";
pub const SITE_URL: &str = "https://notewise.app";
pub const DEFAULT_IMAGE: &str = "/assets/og-default.png";

/// `"Pricing"` becomes `"Pricing | Notewise"`; an empty title is just the
/// site name.
pub fn page_title(title: &str) -> String {
    let title = title.trim();
    if title.is_empty() || title == SITE_NAME {
        SITE_NAME.to_string()
    } else {
        format!("{title} | {SITE_NAME}")
    }
}

pub fn canonical_url(path: &str) -> String {
    let path = path.trim_start_matches('/');
    format!("{SITE_URL}/{path}")
}

fn absolute_url(path_or_url: &str) -> String {
    if path_or_url.starts_with("https://") || path_or_url.starts_with("http://") {
        path_or_url.to_string()
    } else {
        canonical_url(path_or_url)
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
    pub path: String,
    pub image: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SocialTag {
    /// `<meta property=..>`, used by Open Graph.
    Property(&'static str, String),
    /// `<meta name=..>`, used by Twitter.
    Name(&'static str, String),
}

pub fn social_tags(meta: &SeoMeta) -> Vec<SocialTag> {
    let title = page_title(&meta.title);
    let image = absolute_url(meta.image.as_deref().unwrap_or(DEFAULT_IMAGE));
    vec![
        SocialTag::Property("og:site_name", SITE_NAME.to_string()),
        SocialTag::Property("og:type", "website".to_string()),
        SocialTag::Property("og:title", title.clone()),
        SocialTag::Property("og:description", meta.description.clone()),
        SocialTag::Property("og:url", canonical_url(&meta.path)),
        SocialTag::Property("og:image", image.clone()),
        SocialTag::Name("twitter:card", "summary_large_image".to_string()),
        SocialTag::Name("twitter:title", title),
        SocialTag::Name("twitter:description", meta.description.clone()),
        SocialTag::Name("twitter:image", image),
    ]
}

#[allow(non_snake_case)]
#[component]
pub fn Seo(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    #[prop(into)] path: String,
    #[prop(optional, into)] image: Option<String>,
) -> impl IntoView {
    let meta = SeoMeta {
        title,
        description,
        path,
        image,
    };
    let tags = social_tags(&meta)
        .into_iter()
        .map(|tag| match tag {
            SocialTag::Property(property, content) => {
                view! { <Meta property=property content=content /> }.into_any()
            },
            SocialTag::Name(name, content) => {
                view! { <Meta name=name content=content /> }.into_any()
            },
        })
        .collect_view();
    let canonical = canonical_url(&meta.path);
    view! {
        <Title text=meta.title />
        <Meta name="description" content=meta.description />
        <Link rel="canonical" href=canonical />
        {tags}
    }
}

#[cfg(test)]
mod test {
    use crate::components::seo::{canonical_url, page_title, social_tags, SeoMeta, SocialTag};

    #[test]
    fn test_page_title() {
        assert_eq!(page_title(""), "Notewise");
        assert_eq!(page_title("Notewise"), "Notewise");
        assert_eq!(page_title(" Pricing "), "Pricing | Notewise");
    }

    #[test]
    fn test_canonical_url() {
        assert_eq!(canonical_url("/"), "https://notewise.app/");
        assert_eq!(canonical_url(""), "https://notewise.app/");
        assert_eq!(canonical_url("/blog/exam-week"), "https://notewise.app/blog/exam-week");
        assert_eq!(canonical_url("docs"), "https://notewise.app/docs");
    }

    #[test]
    fn test_social_tags() {
        let tags = social_tags(&SeoMeta {
            title: "Pricing".into(),
            description: "Plans for every student".into(),
            path: "/pricing".into(),
            image: None,
        });
        assert!(tags.contains(&SocialTag::Property("og:title", "Pricing | Notewise".into())));
        assert!(tags.contains(&SocialTag::Property(
            "og:url",
            "https://notewise.app/pricing".into()
        )));
        assert!(tags.contains(&SocialTag::Property(
            "og:image",
            "https://notewise.app/assets/og-default.png".into()
        )));
        assert!(tags.contains(&SocialTag::Name(
            "twitter:description",
            "Plans for every student".into()
        )));

        let tags = social_tags(&SeoMeta {
            image: Some("https://cdn.example.com/card.png".into()),
            ..Default::default()
        });
        assert!(tags.contains(&SocialTag::Name(
            "twitter:image",
            "https://cdn.example.com/card.png".into()
        )));
    }
}
