use leptos::prelude::*;

use crate::i18n::messages::{Messages, ResumeHeadings};
use crate::i18n::Locale;
use crate::models::{CoverLetterConfig, Profile, ResumeConfig, ResumeType, SkillCategory};
use crate::pages::{render_document, PageHead};

/// `●●●●○` for level 4, clamped to 0–5.
pub fn level_dots(level: u8) -> String {
    let filled = usize::from(level.min(5));
    format!("{}{}", "●".repeat(filled), "○".repeat(5 - filled))
}

pub fn render_resume(
    locale: Locale,
    ty: ResumeType,
    config: &ResumeConfig,
    messages: &Messages,
    print: bool,
) -> String {
    let pdf_href = format!("/{locale}/api/resume-pdf/{ty}");
    let download = (!print).then(|| (pdf_href, messages.common.download_pdf.clone()));
    let profile = messages.profile.clone();
    let headings = messages.resume.headings.clone();
    let owned = config.clone();
    render_document(
        PageHead {
            locale,
            title: format!("{} | {}", config.title, messages.profile.name),
            description: config.profile.clone(),
            path: format!("/{locale}/resume/{ty}"),
            print,
        },
        messages,
        view! { <ResumeView profile=profile config=owned headings=headings download=download /> },
    )
}

pub fn render_cover_letter(
    locale: Locale,
    ty: ResumeType,
    config: &CoverLetterConfig,
    messages: &Messages,
    print: bool,
) -> String {
    let pdf_href = format!("/{locale}/api/cover-letter-pdf/{ty}");
    let download = (!print).then(|| (pdf_href, messages.common.download_pdf.clone()));
    let profile = messages.profile.clone();
    let owned = config.clone();
    render_document(
        PageHead {
            locale,
            title: format!("{} | {}", config.title, messages.profile.name),
            description: config.position.clone(),
            path: format!("/{locale}/cover-letter/{ty}"),
            print,
        },
        messages,
        view! { <CoverLetterView profile=profile config=owned download=download /> },
    )
}

#[component]
fn DocumentHeader(profile: Profile, position: String) -> impl IntoView {
    let mailto = format!("mailto:{}", profile.email);
    let github = profile.github.clone();
    view! {
        <header class="document-header">
            <h1>{profile.name}</h1>
            <p class="position">{position}</p>
            <p class="contact-line">
                <a href=mailto>{profile.email}</a>
                <span>{profile.location}</span>
                <a href=github>{profile.github}</a>
            </p>
        </header>
    }
}

fn skill_category(
    category: SkillCategory,
    level_label: String,
    years_label: String,
) -> impl IntoView {
    let skills = category
        .skills
        .into_iter()
        .map(|s| {
            view! {
                <li class="skill">
                    <span class="skill-name">{s.skill}</span>
                    <span class="skill-level">{level_dots(s.level)}</span>
                    <span class="skill-years">{format!("{} {}", s.years, years_label)}</span>
                </li>
            }
        })
        .collect_view();
    view! {
        <div class="skill-category">
            <h3>{category.title}</h3>
            <ul>
                <li class="skill skill-head" aria-hidden="true">
                    <span></span>
                    <span class="skill-level">{level_label}</span>
                    <span class="skill-years"></span>
                </li>
                {skills}
            </ul>
        </div>
    }
}

#[component]
fn ResumeView(
    profile: Profile,
    config: ResumeConfig,
    headings: ResumeHeadings,
    download: Option<(String, String)>,
) -> impl IntoView {
    let categories = config
        .skill_categories
        .into_iter()
        .map(|c| skill_category(c, headings.level.clone(), headings.years.clone()))
        .collect_view();
    let highlights = config
        .key_highlights
        .into_iter()
        .map(|h| view! { <li>{h}</li> })
        .collect_view();
    let download = download.map(|(href, label)| view! { <a class="button download" href=href>{label}</a> });

    view! {
        <main class="document resume">
            <DocumentHeader profile=profile position=config.position />
            {download}
            <section class="profile">
                <h2>{headings.profile}</h2>
                <p>{config.profile}</p>
            </section>
            <section class="skills">
                <h2>{headings.skills}</h2>
                {categories}
            </section>
            <section class="highlights">
                <h2>{headings.highlights}</h2>
                <ul>{highlights}</ul>
            </section>
        </main>
    }
}

#[component]
fn CoverLetterView(
    profile: Profile,
    config: CoverLetterConfig,
    download: Option<(String, String)>,
) -> impl IntoView {
    let signature = profile.name.clone();
    let paragraphs = config
        .paragraphs
        .into_iter()
        .map(|p| view! { <p>{p}</p> })
        .collect_view();
    let download = download.map(|(href, label)| view! { <a class="button download" href=href>{label}</a> });

    view! {
        <main class="document cover-letter">
            <DocumentHeader profile=profile position=config.position />
            {download}
            <p class="recipient">{config.recipient}</p>
            <p class="greeting">{config.greeting}</p>
            {paragraphs}
            <p class="closing">{config.closing}</p>
            <p class="signature">{signature}</p>
        </main>
    }
}
