use leptos::prelude::*;

use crate::contact::{ContactForm, FieldError};
use crate::i18n::messages::{
    AboutMessages, ContactMessages, HeroMessages, Messages, ProjectsMessages,
    TestimonialsMessages,
};
use crate::i18n::Locale;
use crate::models::{Profile, Testimonial};
use crate::pages::{render_document, PageHead};

/// Outcome banner shown above the contact form after a no-JS submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactBanner {
    Sent,
    Failed,
}

/// What the contact form shows: previous input, field errors, outcome.
#[derive(Debug, Clone, Default)]
pub struct ContactFormState {
    pub values: ContactForm,
    pub errors: Vec<FieldError>,
    pub banner: Option<ContactBanner>,
}

impl ContactFormState {
    fn error_for(&self, field: &str) -> Option<String> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.clone())
    }
}

/// Full home page: hero, about, projects, testimonials, contact.
pub fn render_home(locale: Locale, messages: &Messages, contact: ContactFormState) -> String {
    let m = messages.clone();
    render_document(
        PageHead {
            locale,
            title: m.meta.title.clone(),
            description: m.meta.description.clone(),
            path: format!("/{locale}"),
            print: false,
        },
        messages,
        view! {
            <main class="home">
                <Hero profile=m.profile hero=m.hero />
                <About about=m.about />
                <Projects projects=m.projects />
                <Testimonials testimonials=m.testimonials />
                <Contact locale=locale contact=m.contact state=contact />
            </main>
        },
    )
}

#[component]
fn Hero(profile: Profile, hero: HeroMessages) -> impl IntoView {
    view! {
        <section id="hero" class="hero">
            <p class="greeting">{hero.greeting}</p>
            <h1>{profile.headline}</h1>
            <p class="intro">{hero.intro}</p>
            <p class="location">{profile.location}</p>
            <div class="cta">
                <a class="button" href="#projects">{hero.cta_projects}</a>
                <a class="button secondary" href="#contact">{hero.cta_contact}</a>
            </div>
            <ul class="social">
                <li><a href=profile.github target="_blank" rel="noreferrer">"GitHub"</a></li>
                <li><a href=profile.linkedin target="_blank" rel="noreferrer">"LinkedIn"</a></li>
            </ul>
        </section>
    }
}

#[component]
fn About(about: AboutMessages) -> impl IntoView {
    let paragraphs = about
        .paragraphs
        .into_iter()
        .map(|p| view! { <p>{p}</p> })
        .collect_view();
    let toolbox = about
        .toolbox
        .into_iter()
        .map(|item| {
            view! {
                <li class="tool">
                    <span class="tool-name">{item.name}</span>
                    <span class="tool-category">{item.category}</span>
                </li>
            }
        })
        .collect_view();
    let hobbies = about
        .hobbies
        .into_iter()
        .map(|hobby| {
            view! {
                <li class="hobby">
                    <h4>{hobby.title}</h4>
                    <p>{hobby.description}</p>
                </li>
            }
        })
        .collect_view();

    view! {
        <section id="about" class="about">
            <h2>{about.title}</h2>
            {paragraphs}
            <h3>{about.toolbox_title}</h3>
            <ul class="toolbox">{toolbox}</ul>
            <h3>{about.hobbies_title}</h3>
            <ul class="hobbies">{hobbies}</ul>
        </section>
    }
}

#[component]
fn Projects(projects: ProjectsMessages) -> impl IntoView {
    let cards = projects
        .items
        .into_iter()
        .map(|project| {
            let tags = project
                .tags
                .into_iter()
                .map(|tag| view! { <li class="tag">{tag}</li> })
                .collect_view();
            let link = project
                .href
                .map(|href| view! { <a class="project-link" href=href target="_blank" rel="noreferrer">"↗"</a> });
            view! {
                <article class="project-card">
                    <header>
                        <h3>{project.title}</h3>
                        <span class="year">{project.year.to_string()}</span>
                        {link}
                    </header>
                    <p>{project.description}</p>
                    <ul class="tags">{tags}</ul>
                </article>
            }
        })
        .collect_view();

    view! {
        <section id="projects" class="projects">
            <h2>{projects.title}</h2>
            <div class="project-grid">{cards}</div>
        </section>
    }
}

fn testimonial_cards(items: Vec<Testimonial>) -> impl IntoView {
    items
        .into_iter()
        .map(|t| {
            view! {
                <figure class="testimonial">
                    <p class="stars">{t.stars()}</p>
                    <blockquote>{t.text}</blockquote>
                    <figcaption>{format!("{}, {}", t.name, t.company)}</figcaption>
                </figure>
            }
        })
        .collect_view()
}

#[component]
fn Testimonials(testimonials: TestimonialsMessages) -> impl IntoView {
    // The track holds the list twice so the CSS marquee loops seamlessly.
    let first = testimonial_cards(testimonials.items.clone());
    let second = testimonial_cards(testimonials.items);
    view! {
        <section id="testimonials" class="testimonials">
            <h2>{testimonials.title}</h2>
            <div class="marquee">
                <div class="marquee-track">
                    {first}
                    <div class="marquee-copy" aria-hidden="true">{second}</div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Contact(locale: Locale, contact: ContactMessages, state: ContactFormState) -> impl IntoView {
    let action = format!("/{locale}/contact");
    let banner = state.banner.map(|banner| {
        let (class, text) = match banner {
            ContactBanner::Sent => ("banner success", contact.success.clone()),
            ContactBanner::Failed => ("banner failure", contact.failure.clone()),
        };
        view! { <p class=class>{text}</p> }
    });
    let field_error = |field: &str| {
        state
            .error_for(field)
            .map(|message| view! { <span class="field-error">{message}</span> })
    };
    let name_error = field_error("name");
    let email_error = field_error("email");
    let message_error = field_error("message");
    let values = state.values.clone();

    view! {
        <section id="contact" class="contact">
            <h2>{contact.title}</h2>
            <p>{contact.intro}</p>
            {banner}
            <form class="contact-form" method="post" action=action>
                <label>
                    <span>{contact.name_label}</span>
                    <input type="text" name="name" value=values.name />
                    {name_error}
                </label>
                <label>
                    <span>{contact.email_label}</span>
                    <input type="email" name="email" value=values.email />
                    {email_error}
                </label>
                <label>
                    <span>{contact.message_label}</span>
                    <textarea name="message" rows="6">{values.message}</textarea>
                    {message_error}
                </label>
                <button type="submit" class="button">{contact.submit}</button>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::messages::load_messages;

    #[test]
    fn test_home_renders_every_section() {
        let messages = load_messages(Locale::En).unwrap();
        let html = render_home(Locale::En, &messages, ContactFormState::default());
        for id in ["hero", "about", "projects", "testimonials", "contact"] {
            assert!(html.contains(&format!("id=\"{id}\"")), "missing section {id}");
        }
        assert!(html.contains("Freight Tracker"));
        assert!(html.contains("action=\"/en/contact\""));
    }

    #[test]
    fn test_testimonials_are_duplicated_for_the_marquee() {
        let messages = load_messages(Locale::En).unwrap();
        let html = render_home(Locale::En, &messages, ContactFormState::default());
        assert_eq!(html.matches("Reliable, communicative and fast.").count(), 2);
    }

    #[test]
    fn test_german_home_is_translated() {
        let messages = load_messages(Locale::De).unwrap();
        let html = render_home(Locale::De, &messages, ContactFormState::default());
        assert!(html.contains("Ausgewählte Projekte"));
        assert!(html.contains("Nachricht senden"));
    }

    #[test]
    fn test_contact_errors_and_values_are_shown() {
        let messages = load_messages(Locale::En).unwrap();
        let state = ContactFormState {
            values: ContactForm {
                name: "Jane".to_string(),
                email: "nope".to_string(),
                message: "Hello there, I like it".to_string(),
            },
            errors: vec![FieldError {
                field: "email",
                message: messages.contact.errors.email_invalid.clone(),
            }],
            banner: None,
        };
        let html = render_home(Locale::En, &messages, state);
        assert!(html.contains("Please enter a valid email address."));
        assert!(html.contains("value=\"nope\""));
        assert!(html.contains("Hello there, I like it"));
    }

    #[test]
    fn test_success_banner() {
        let messages = load_messages(Locale::En).unwrap();
        let state = ContactFormState {
            banner: Some(ContactBanner::Sent),
            ..Default::default()
        };
        let html = render_home(Locale::En, &messages, state);
        assert!(html.contains(&messages.contact.success));
    }
}
