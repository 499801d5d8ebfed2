use leptos::{prelude::*, tachys::dom::event_target_checked};
use leptos_router::hooks::use_location;
use tailwindmerge::tailwind_merge;
use theme::{use_theme, Mode};

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Features", "/features"),
    ("Pricing", "/pricing"),
    ("Blog", "/blog"),
    ("Docs", "/docs"),
    ("Help", "/help"),
    ("About", "/about"),
];

/// `/blog` stays highlighted on `/blog/some-post`; `/` only on itself.
pub fn is_active(pathname: &str, href: &str) -> bool {
    if href == "/" {
        return pathname == "/";
    }
    pathname
        .strip_prefix(href)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

#[allow(non_snake_case)]
#[component]
pub fn Nav(
    #[prop(into)] name: Signal<String>,
    #[prop(into)] logo: Signal<String>,
) -> impl IntoView {
    let pathname = use_location().pathname;
    let theme = use_theme();
    let palette = theme.palette();
    let is_dark = theme.is_dark();
    let (menu_open, set_menu_open) = signal(false);
    let links = NAV_LINKS
        .iter()
        .map(move |&(label, href)| {
            view! {
                <li>
                    <a
                        href=href
                        class=move || {
                            let p = palette.get();
                            if is_active(&pathname.read(), href) {
                                tailwind_merge("block p-2 font-semibold", p.accent_text)
                            } else {
                                tailwind_merge("block p-2", p.link)
                            }
                        }
                        on:click=move |_| set_menu_open.set(false)
                    >
                        {label}
                    </a>
                </li>
            }
        })
        .collect_view();
    view! {
        <nav class=move || {
            let p = palette.get();
            tailwind_merge(&format!("border-b {}", p.border), p.surface)
        }>
            <div class="flex flex-wrap items-center justify-between mx-auto max-w-6xl p-4">
                <a href="/" class="flex items-center gap-2">
                    <img class="w-10" src=move || logo.get() alt="Logo" />
                    <span class="self-center text-2xl font-semibold whitespace-nowrap">
                        {move || name.get()}
                    </span>
                </a>
                <div class="flex items-center gap-4">
                    <label class="relative flex items-center group p-2 text-sm">
                        <span class="sr-only">Dark mode</span>
                        <input
                            type="checkbox"
                            class="absolute left-1/2 -translate-x-1/2 w-full h-full peer appearance-none rounded-md"
                            prop:checked=move || is_dark.get()
                            on:change=move |ev| theme.set(Mode::from_dark(event_target_checked(&ev)))
                        />
                        <span class="w-12 h-7 flex items-center flex-shrink-0 p-1 bg-slate-300 rounded-full duration-300 ease-in-out peer-checked:bg-indigo-500 after:w-5 after:h-5 after:bg-white after:rounded-full after:shadow-md after:duration-300 peer-checked:after:translate-x-5"></span>
                    </label>
                    <button
                        type="button"
                        class="inline-flex md:hidden items-center justify-center p-2 w-10 h-10 text-sm rounded-lg focus:outline-none focus:ring-2 focus:ring-slate-400"
                        aria-controls="navbar-menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <span class="sr-only">Open main menu</span>
                        <svg
                            class="w-5 h-5"
                            aria-hidden="true"
                            xmlns="http://www.w3.org/2000/svg"
                            fill="none"
                            viewBox="0 0 17 14"
                        >
                            <path
                                stroke="currentColor"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M1 1h15M1 7h15M1 13h15"
                            ></path>
                        </svg>
                    </button>
                </div>
                <ul
                    id="navbar-menu"
                    class="w-full md:w-auto md:flex md:order-first md:ml-10 md:mr-auto font-medium"
                    class:hidden=move || !menu_open.get()
                >
                    {links}
                </ul>
            </div>
        </nav>
    }
}
