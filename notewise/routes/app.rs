use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use tailwindmerge::tailwind_merge;
use theme::{provide_theme, Backends, DetachedDocument, EphemeralStorage, NoSignal};

use crate::{
    components::{footer::Footer, nav::Nav, seo::page_title},
    routes::{
        about::About,
        blog::{Blog, BlogPost},
        docs::Docs,
        features::Features,
        help::Help,
        landing::Landing,
        legal::{Privacy, Terms},
        notfound::NotFound,
        pricing::Pricing,
    },
};

pub const LOGO: &str = "/assets/logo.svg";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[allow(non_snake_case)]
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    // Render dark on both sides first so hydration lines up, then switch to
    // the visitor's real preference once we're live in the browser.
    let theme = provide_theme(Backends::new(EphemeralStorage, NoSignal, DetachedDocument));
    Effect::new(move || {
        theme.attach(Backends::platform());
    });
    let mode = theme.mode();
    let palette = theme.palette();
    let formatter = |text: String| page_title(&text);
    view! {
        <Title formatter />
        <Stylesheet id="leptos" href="/pkg/notewise.css" />
        <Html class:dark=move || mode.get().is_dark() attr:data-theme=move || mode.get().as_str() />
        <Router>
            <div
                id="root"
                class=move || tailwind_merge("min-h-screen flex flex-col", palette.get().page)
            >
                <Nav name="Notewise" logo=LOGO />
                <main class="flex-1">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=Landing />
                        <Route path=path!("/features") view=Features />
                        <Route path=path!("/pricing") view=Pricing />
                        <Route path=path!("/about") view=About />
                        <Route path=path!("/blog") view=Blog />
                        <Route path=path!("/blog/:slug") view=BlogPost />
                        <Route path=path!("/docs") view=Docs />
                        <Route path=path!("/help") view=Help />
                        <Route path=path!("/legal/privacy") view=Privacy />
                        <Route path=path!("/legal/terms") view=Terms />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[cfg(test)]
mod test {
    use std::path::{Path, PathBuf};

    use crate::{components::seo::DEFAULT_IMAGE, routes::app::LOGO};

    fn workspace_root() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .unwrap()
            .to_path_buf()
    }

    fn leptos_options() -> toml::Table {
        let text = std::fs::read_to_string(
            Path::new(env!("CARGO_MANIFEST_DIR")).join("leptos.toml"),
        )
        .unwrap();
        let doc: toml::Table = text.parse().unwrap();
        doc["package"]["metadata"]["leptos"].as_table().unwrap().clone()
    }

    fn option_path(opts: &toml::Table, key: &str) -> PathBuf {
        workspace_root().join(opts[key].as_str().unwrap())
    }

    #[test]
    fn test_referenced_assets_exist() {
        let assets = option_path(&leptos_options(), "assets-dir");
        for url in [LOGO, DEFAULT_IMAGE, "/favicon.ico"] {
            let file = assets.join(url.trim_start_matches('/'));
            assert!(file.is_file(), "missing {}", file.display());
        }
    }

    #[test]
    fn test_tailwind_is_built() {
        let opts = leptos_options();
        let input = std::fs::read_to_string(option_path(&opts, "tailwind-input-file")).unwrap();
        for directive in ["@tailwind base;", "@tailwind components;", "@tailwind utilities;"] {
            assert!(input.contains(directive), "missing {directive}");
        }
        let config = std::fs::read_to_string(option_path(&opts, "tailwind-config-file")).unwrap();
        assert!(config.contains(r#"darkMode: "class""#));
        assert!(config.contains("./notewise/**/*.rs"));
    }
}
