use leptos::{either::Either, prelude::*};
use leptos_router::{hooks::use_params, params::Params};
use tailwindmerge::tailwind_merge;
use theme::use_theme;

use crate::{
    components::{card::Card, section::Section, seo::Seo},
    routes::notfound::NotFound,
};

pub struct Post {
    pub slug: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub author: &'static str,
    pub summary: &'static str,
    pub body: &'static [&'static str],
}

// Newest first.
pub const POSTS: &[Post] = &[
    Post {
        slug: "exam-week-plan",
        title: "A seven day plan for exam week",
        date: "2026-09-28",
        author: "Maya Okafor",
        summary: "How to spread review over a week instead of cramming the night before.",
        body: &[
            "Cramming feels productive because it is exhausting. It is also the least effective way to remember anything past Friday.",
            "Start seven days out. Split every course into topics, then give each topic two short reviews on different days.",
            "Leave the last day for practice quizzes only. If a topic still trips you up, you will know exactly which one.",
        ],
    },
    Post {
        slug: "why-spaced-repetition",
        title: "Why spaced repetition works",
        date: "2026-08-14",
        author: "Daniel Brandt",
        summary: "The forgetting curve, and how Notewise schedules your cards around it.",
        body: &[
            "Memories fade on a fairly predictable curve. Each successful review flattens it a little more.",
            "Notewise tracks when you last got each card right and brings it back just before you would have forgotten it.",
        ],
    },
    Post {
        slug: "dark-mode",
        title: "Dark mode is here",
        date: "2026-06-02",
        author: "The Notewise team",
        summary: "Late night study sessions just got easier on the eyes.",
        body: &[
            "Notewise now follows your system color scheme the first time you visit.",
            "Flip the switch in the navigation bar to override it. We remember your choice on this device.",
        ],
    },
];

pub fn find_post(slug: &str) -> Option<&'static Post> { POSTS.iter().find(|p| p.slug == slug) }

#[derive(PartialEq, Params)]
pub(crate) struct PostParams {
    pub(crate) slug: Option<String>,
}

#[allow(non_snake_case)]
#[component]
pub fn Blog() -> impl IntoView {
    let palette = use_theme().palette();
    view! {
        <Seo
            title="Blog"
            description="Study tips and product news from the Notewise team."
            path="/blog"
        />
        <Section title="Blog" subtitle="Study tips and product news.">
            <div class="grid gap-6">
                {POSTS
                    .iter()
                    .map(|post| {
                        view! {
                            <Card>
                                <p class=move || tailwind_merge("text-sm", palette.get().muted)>
                                    {post.date}
                                </p>
                                <a href=format!("/blog/{}", post.slug) class="block mt-1">
                                    <h3 class="text-2xl font-semibold">{post.title}</h3>
                                </a>
                                <p class="mt-2">{post.summary}</p>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[allow(non_snake_case)]
#[component]
fn PostBody(post: &'static Post) -> impl IntoView {
    let palette = use_theme().palette();
    view! {
        <Seo title=post.title description=post.summary path=format!("/blog/{}", post.slug) />
        <article class="mx-auto max-w-3xl px-6 py-16">
            <a href="/blog" class=move || tailwind_merge("text-sm", palette.get().link)>
                "← All posts"
            </a>
            <h1 class="mt-4 text-4xl font-bold">{post.title}</h1>
            <p class=move || tailwind_merge("mt-2 text-sm", palette.get().muted)>
                {format!("{} · {}", post.date, post.author)}
            </p>
            <div class="mt-8 space-y-4 text-lg leading-relaxed">
                {post.body.iter().map(|para| view! { <p>{*para}</p> }).collect_view()}
            </div>
        </article>
    }
}

#[allow(non_snake_case)]
#[component]
pub fn BlogPost() -> impl IntoView {
    let params = use_params::<PostParams>();
    let post = move || {
        params.with(|p| {
            p.as_ref()
                .ok()
                .and_then(|p| p.slug.as_deref())
                .and_then(find_post)
        })
    };
    move || match post() {
        Some(post) => Either::Left(view! { <PostBody post /> }),
        None => Either::Right(view! { <NotFound /> }),
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use crate::routes::blog::{find_post, POSTS};

    #[test]
    fn test_find_post() {
        assert_eq!(find_post("dark-mode").map(|p| p.title), Some("Dark mode is here"));
        assert!(find_post("").is_none());
        assert!(find_post("Dark-Mode").is_none());
    }

    #[test]
    fn test_posts_are_consistent() {
        let slugs: HashSet<_> = POSTS.iter().map(|p| p.slug).collect();
        assert_eq!(slugs.len(), POSTS.len());
        assert!(POSTS.windows(2).all(|w| w[0].date > w[1].date));
        assert!(POSTS.iter().all(|p| !p.body.is_empty()));
    }
}
