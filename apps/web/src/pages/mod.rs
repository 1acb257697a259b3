//! Server-rendered pages. Components are Leptos views rendered to HTML strings
//! on each request; no client-side hydration.

pub mod handlers;
pub mod home;
pub mod resume;

use leptos::prelude::*;

use crate::i18n::messages::Messages;
use crate::i18n::{alternate_path, Locale};

/// Stylesheet served at `/static/site.css`.
pub const SITE_CSS: &str = include_str!("../../static/site.css");

/// Document-level metadata for one rendered page.
pub struct PageHead {
    pub locale: Locale,
    pub title: String,
    pub description: String,
    /// Request path, used for the language switcher.
    pub path: String,
    /// Print view: no navigation, footer or download links.
    pub print: bool,
}

/// Wraps `body` into a complete HTML document with site chrome.
pub fn render_document(head: PageHead, messages: &Messages, body: impl IntoView + 'static) -> String {
    let PageHead {
        locale,
        title,
        description,
        path,
        print,
    } = head;

    let header_messages = messages.clone();
    let name = messages.profile.name.clone();
    let footer_text = messages.common.footer.clone();
    let body_class = if print { "print" } else { "screen" };
    let lang = locale.as_str();

    let owner = Owner::new();
    let html = owner.with(move || {
        let header = (!print).then(move || {
            view! { <SiteHeader locale=locale path=path messages=header_messages /> }
        });
        let footer = (!print).then(move || view! { <SiteFooter name=name footer=footer_text /> });
        view! {
            <html lang=lang>
                <head>
                    <meta charset="utf-8" />
                    <meta name="viewport" content="width=device-width, initial-scale=1" />
                    <meta name="description" content=description />
                    <title>{title}</title>
                    <link rel="stylesheet" href="/static/site.css" />
                </head>
                <body class=body_class>
                    {header}
                    {body}
                    {footer}
                </body>
            </html>
        }
        .to_html()
    });

    format!("<!DOCTYPE html>{html}")
}

/// Resolves a navigation target from the bundle to an absolute path.
/// `#about` → `/en#about`, `resume/fullstack` → `/en/resume/fullstack`.
pub fn nav_href(locale: Locale, href: &str) -> String {
    if href.starts_with('#') {
        format!("/{locale}{href}")
    } else if href.starts_with("http://") || href.starts_with("https://") {
        href.to_string()
    } else {
        format!("/{locale}/{}", href.trim_start_matches('/'))
    }
}

#[component]
fn SiteHeader(locale: Locale, path: String, messages: Messages) -> impl IntoView {
    let switch_href = alternate_path(&path, locale.alternate());
    let home_href = format!("/{locale}");
    let nav = messages
        .nav
        .into_iter()
        .map(|item| {
            let href = nav_href(locale, &item.href);
            view! { <li><a href=href>{item.label}</a></li> }
        })
        .collect_view();

    view! {
        <header class="site-header">
            <a class="brand" href=home_href>{messages.profile.name}</a>
            <nav>
                <ul>{nav}</ul>
            </nav>
            <span class="current-language">{messages.common.language_name}</span>
            <a class="language-switch" href=switch_href>
                {messages.common.switch_language}
            </a>
        </header>
    }
}

#[component]
fn SiteFooter(name: String, footer: String) -> impl IntoView {
    let year = chrono::Utc::now().format("%Y").to_string();
    view! {
        <footer class="site-footer">
            <p>{format!("© {year} {name}. {footer}")}</p>
        </footer>
    }
}

/// Localized 404 page.
pub fn render_not_found(locale: Locale, messages: &Messages, path: &str) -> String {
    let title = messages.not_found.title.clone();
    let message = messages.not_found.message.clone();
    let back = messages.common.back_home.clone();
    let home = format!("/{locale}");

    render_document(
        PageHead {
            locale,
            title: title.clone(),
            description: message.clone(),
            path: path.to_string(),
            print: false,
        },
        messages,
        view! {
            <main class="not-found">
                <h1>{title}</h1>
                <p>{message}</p>
                <a class="button" href=home>{back}</a>
            </main>
        },
    )
}
