use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{
    SectionKind, ACTIVITIES, CONTACT, EDUCATION, EXPERIENCE, HERO_IMAGE, PAGE_SECTIONS, PROJECTS,
    SUMMARY,
};
use crate::scroll_spy::SECTION_SCROLL_MARGIN;

use super::contact_form::ContactForm;
use super::download_cv::DownloadCv;
use super::tech_logos::TechLogos;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <main id="home" class="container mx-auto px-4">
            <Hero />
            {PAGE_SECTIONS
                .iter()
                .map(|section| {
                    view! {
                        <Section id=section.kind.id() title=section.title>
                            {section_body(section.kind)}
                        </Section>
                    }
                })
                .collect_view()}
        </main>
        <Footer />
    }
}

fn section_body(kind: SectionKind) -> AnyView {
    match kind {
        SectionKind::Projects => view! {
            <div class="grid md:grid-cols-2 gap-6">
                {PROJECTS
                    .iter()
                    .map(|p| {
                        view! {
                            <article class="card-elevated p-6">
                                <header class="mb-3">
                                    <h3 class="text-xl font-semibold">{p.title}</h3>
                                    <p class="text-xs text-muted-foreground">{p.period}</p>
                                </header>
                                <BulletList items=p.bullets extra="mb-4" />
                                <a
                                    href=p.link
                                    class="inline-flex items-center gap-2 text-primary"
                                    target="_blank"
                                    rel="noreferrer"
                                >
                                    "Live demo ↗"
                                </a>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
        SectionKind::Experience => view! {
            <div class="space-y-6">
                {EXPERIENCE
                    .iter()
                    .map(|e| {
                        view! {
                            <article class="card-elevated p-6">
                                <header class="mb-2">
                                    <h3 class="text-xl font-semibold">
                                        {e.role}
                                        <span class="block text-muted-foreground">{e.company}</span>
                                    </h3>
                                    <p class="text-xs text-muted-foreground">{e.period}</p>
                                </header>
                                <BulletList items=e.bullets extra="" />
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
        SectionKind::Tech => view! { <TechLogos /> }.into_any(),
        SectionKind::Education => view! {
            <article class="card-elevated p-6">
                <h3 class="text-xl font-semibold">
                    {EDUCATION.degree}
                    <span class="block text-muted-foreground">{EDUCATION.institution}</span>
                </h3>
                <p class="text-sm text-muted-foreground mt-1">{EDUCATION.period}</p>
                <p class="text-sm text-muted-foreground mt-1">"CGPA: " {EDUCATION.cgpa}</p>
            </article>
        }
        .into_any(),
        SectionKind::Activities => view! {
            <div class="grid md:grid-cols-3 gap-6">
                <ActivityCard title="Languages" items=ACTIVITIES.languages />
                <ActivityCard title="Volunteer / Leadership" items=ACTIVITIES.volunteer />
                <ActivityCard title="Personal Projects & Interests" items=ACTIVITIES.interests />
            </div>
        }
        .into_any(),
        SectionKind::Contact => view! {
            <div class="grid md:grid-cols-2 gap-6">
                <article class="card-elevated p-6">
                    <h3 class="font-semibold mb-2">"Get in touch"</h3>
                    <ContactForm />
                </article>
                <Connect />
            </div>
        }
        .into_any(),
    }
}

#[component]
fn Section(id: &'static str, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section
            id=id
            class="py-12 md:py-16"
            style=format!("scroll-margin-top: {SECTION_SCROLL_MARGIN}px")
        >
            <h2 class="text-2xl md:text-3xl font-bold mb-6">{title}</h2>
            {children()}
        </section>
    }
}

#[component]
fn BulletList(items: &'static [&'static str], extra: &'static str) -> impl IntoView {
    view! {
        <ul class=format!("space-y-2 text-sm text-muted-foreground list-disc pl-5 {extra}")>
            {items.iter().map(|b| view! { <li>{*b}</li> }).collect_view()}
        </ul>
    }
}

#[component]
fn ActivityCard(title: &'static str, items: &'static [&'static str]) -> impl IntoView {
    view! {
        <article class="card-elevated p-6">
            <h3 class="font-semibold mb-2">{title}</h3>
            <ul class="text-sm text-muted-foreground list-disc pl-5 space-y-1">
                {items.iter().map(|l| view! { <li>{*l}</li> }).collect_view()}
            </ul>
        </article>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="py-16 md:py-24 grid grid-cols-1 md:grid-cols-2 items-center gap-8 md:gap-12">
            <div class="min-w-0 order-2 md:order-1">
                <h1 class="text-2xl md:text-3xl font-extrabold leading-tight mb-4">
                    <span class="block">{CONTACT.name}</span>
                    <span class="gradient-text">{CONTACT.title}</span>
                </h1>
                <p class="text-muted-foreground max-w-prose leading-relaxed mb-6">{SUMMARY}</p>
                <div class="flex flex-wrap items-center gap-x-4 gap-y-2 text-sm text-muted-foreground mb-6">
                    <span class="inline-flex items-center gap-2">
                        <span aria-hidden="true">"📍"</span>
                        {CONTACT.location}
                    </span>
                    <a
                        href=format!("tel:{}", CONTACT.phone)
                        class="inline-flex items-center gap-2 hover:text-primary"
                    >
                        <span aria-hidden="true">"📞"</span>
                        {CONTACT.phone}
                    </a>
                    <a
                        href=format!("mailto:{}", CONTACT.email)
                        class="inline-flex items-center gap-2 hover:text-primary break-all"
                    >
                        <span aria-hidden="true">"✉️"</span>
                        {CONTACT.email}
                    </a>
                </div>
                <div class="flex flex-col sm:flex-row flex-wrap items-stretch gap-3">
                    <a href="#projects" class="btn btn-hero w-full sm:w-auto">
                        "View Projects"
                    </a>
                    <a href="#contact" class="btn btn-outline w-full sm:w-auto">
                        "Contact Me"
                    </a>
                    <DownloadCv />
                </div>
            </div>
            <div class="min-w-0 order-1 md:order-2">
                <img
                    src=HERO_IMAGE
                    alt="Abstract tech hero with teal accents representing Java & Spring Boot development"
                    loading="lazy"
                    class="w-full rounded-xl border object-cover aspect-video shadow-glow"
                />
            </div>
        </section>
    }
}

#[component]
fn Connect() -> impl IntoView {
    view! {
        <article class="card-elevated p-6">
            <h3 class="font-semibold mb-2">"Connect"</h3>
            <ul class="text-sm text-muted-foreground space-y-2">
                <li class="flex items-center gap-2">
                    <span aria-hidden="true">"✉️"</span>
                    <a href=format!("mailto:{}", CONTACT.email) class="hover:text-primary">
                        {CONTACT.email}
                    </a>
                </li>
                <li class="flex items-center gap-2">
                    <span aria-hidden="true">"📞"</span>
                    <a href=format!("tel:{}", CONTACT.phone) class="hover:text-primary">
                        {CONTACT.phone}
                    </a>
                </li>
                <li class="flex items-center gap-2">
                    <i class="devicon-linkedin-plain"></i>
                    <a
                        href=CONTACT.linkedin
                        target="_blank"
                        rel="noreferrer"
                        class="hover:text-primary"
                    >
                        "LinkedIn"
                    </a>
                </li>
                <li class="flex items-center gap-2">
                    <i class="devicon-github-plain"></i>
                    <a
                        href=CONTACT.github
                        target="_blank"
                        rel="noreferrer"
                        class="hover:text-primary"
                    >
                        "GitHub"
                    </a>
                </li>
            </ul>
        </article>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t py-6 text-center text-sm text-muted-foreground">
            "© " {env!("BUILD_YEAR")} " " {CONTACT.name} ". Built with Rust & Leptos."
        </footer>
    }
}
