use std::rc::Rc;

use yew::prelude::*;

use crate::components::fade_up::FadeUpWhenVisible;
use crate::components::footer::SiteFooter;
use crate::content::{
    Achievements, Application, Feature, Hero, LiveProject, Newsletter, Partners, Section,
    Security, SiteContent, Stat, Testimonial,
};

#[function_component(Landing)]
pub fn landing() -> Html {
    let content = use_context::<Rc<SiteContent>>();
    let Some(content) = content else {
        return html! {};
    };

    html! {
        <main class="landing-page">
            { hero(&content.hero) }
            { stats(&content.stats) }
            { features(&content.features) }
            { security(&content.security) }
            { partners(&content.partners) }
            { testimonials(&content.testimonials) }
            { live_projects(&content.live_projects) }
            { application(&content.application) }
            { achievements(&content.achievements) }
            { newsletter(&content.newsletter) }
            <SiteFooter brand={content.brand.clone()} footer={content.footer.clone()} />
            <style>
                {r#"
                    .landing-page {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        padding: 0 1rem;
                        text-align: center;
                    }
                    .fade-up {
                        will-change: opacity, transform;
                    }
                    .section {
                        width: 100%;
                        max-width: 72rem;
                        margin: 0 auto 6rem;
                    }
                    .section-title {
                        font-size: 1.875rem;
                        font-weight: 700;
                        margin-bottom: 3rem;
                    }
                    .muted {
                        color: #9ca3af;
                    }
                    .grid {
                        display: grid;
                        gap: 2rem;
                        grid-template-columns: 1fr;
                    }
                    .card {
                        padding: 1.5rem;
                        border-radius: 0.75rem;
                        border: 1px solid #1f2937;
                        background: #0a0a0a;
                        text-align: left;
                        transition: border-color 0.2s;
                    }
                    .card:hover {
                        border-color: #374151;
                    }

                    .beta-badge {
                        display: inline-flex;
                        gap: 0.5rem;
                        margin: 2rem 0;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.1);
                        color: white;
                        text-decoration: none;
                    }
                    .beta-badge:hover {
                        background: rgba(255, 255, 255, 0.2);
                    }
                    .hero-title {
                        font-size: 3rem;
                        font-weight: 700;
                        max-width: 64rem;
                        margin: 0 auto 1.5rem;
                    }
                    .hero-subtitle {
                        font-size: 1.125rem;
                        max-width: 42rem;
                        margin: 0 auto 2rem;
                    }
                    .hero-cta-wrap {
                        position: relative;
                        display: inline-flex;
                        margin-bottom: 4rem;
                    }
                    .glow {
                        position: absolute;
                        inset: -1rem;
                        border-radius: 9999px;
                        background: linear-gradient(to right, rgba(168, 85, 247, 0.2), rgba(59, 130, 246, 0.2));
                        filter: blur(24px);
                    }
                    .pill-button {
                        position: relative;
                        padding: 0.75rem 2rem;
                        border: none;
                        border-radius: 9999px;
                        background: white;
                        color: black;
                        cursor: pointer;
                        transition: background 0.2s;
                    }
                    .pill-button:hover {
                        background: #e5e7eb;
                    }
                    .outline-button {
                        display: inline-block;
                        padding: 1rem 2rem;
                        border-radius: 9999px;
                        border: 2px solid white;
                        color: white;
                        font-weight: 600;
                        text-decoration: none;
                        transition: background 0.2s, color 0.2s;
                    }
                    .outline-button:hover {
                        background: white;
                        color: black;
                    }
                    .preview {
                        position: relative;
                        width: 100%;
                        max-width: 64rem;
                        margin: 0 auto;
                    }
                    .preview .glow {
                        inset: -2.5rem;
                        border-radius: 1rem;
                        filter: blur(64px);
                    }
                    .preview-frame {
                        position: relative;
                        height: 400px;
                        border-radius: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: #0a0a0a;
                    }

                    .stats {
                        display: flex;
                        justify-content: center;
                        gap: 4rem;
                        margin: 6rem 0 4rem;
                    }
                    .stat-value {
                        font-size: 2.25rem;
                        font-weight: 700;
                        margin-bottom: 0.5rem;
                    }
                    .feature-icon {
                        font-size: 2.25rem;
                        margin-bottom: 1rem;
                    }

                    .security-panel {
                        padding: 2rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: linear-gradient(to right, rgba(168, 85, 247, 0.1), rgba(59, 130, 246, 0.1));
                        text-align: left;
                    }
                    .security-header {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        margin-bottom: 2rem;
                    }
                    .security-icon {
                        padding: 0.75rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.1);
                    }
                    .check {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }
                    .check-mark {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 1.5rem;
                        height: 1.5rem;
                        border-radius: 9999px;
                        background: rgba(34, 197, 94, 0.2);
                        color: #22c55e;
                    }

                    .partner-tile {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        aspect-ratio: 16 / 9;
                        border-radius: 0.75rem;
                        background: rgba(255, 255, 255, 0.05);
                        transition: background 0.2s;
                    }
                    .partner-tile:hover {
                        background: rgba(255, 255, 255, 0.1);
                    }
                    .partner-logo {
                        width: 6rem;
                        height: 2rem;
                        border-radius: 0.25rem;
                        background: rgba(255, 255, 255, 0.1);
                    }

                    .stars {
                        color: #eab308;
                        margin-bottom: 1rem;
                    }
                    .author {
                        font-weight: 700;
                    }

                    .project-head {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        margin-bottom: 1rem;
                    }
                    .avatar {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 9999px;
                        background: #1f2937;
                        flex-shrink: 0;
                    }
                    .row {
                        display: flex;
                        justify-content: space-between;
                        font-size: 0.875rem;
                        margin-bottom: 0.75rem;
                    }
                    .progress-track {
                        width: 100%;
                        height: 0.5rem;
                        border-radius: 9999px;
                        background: #1f2937;
                        margin-bottom: 0.75rem;
                    }
                    .progress-fill {
                        height: 0.5rem;
                        border-radius: 9999px;
                        background: white;
                    }

                    .application {
                        text-align: left;
                    }
                    .application h2,
                    .achievements h2 {
                        font-size: 3rem;
                        font-weight: 700;
                    }
                    .application-head {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        margin: 4rem 0 1.5rem;
                    }
                    .application-body {
                        font-size: 1.125rem;
                        margin-bottom: 1.5rem;
                    }

                    .achievements {
                        display: grid;
                        gap: 4rem;
                        align-items: center;
                        text-align: left;
                    }
                    .achievement-cards {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1rem;
                    }
                    .achievement-cards .card {
                        padding: 1rem;
                    }
                    .achievement-gain {
                        color: #22c55e;
                        font-weight: 700;
                    }
                    .figure-value {
                        font-size: 2.25rem;
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                    }

                    .newsletter {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: space-between;
                        gap: 2rem;
                        padding: 3rem;
                        border-radius: 1.5rem;
                        background: linear-gradient(to right, rgba(255, 255, 255, 0.05), rgba(255, 255, 255, 0.1));
                        text-align: left;
                    }
                    .newsletter h2 {
                        font-size: 2.25rem;
                        font-weight: 700;
                    }
                    .newsletter-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .newsletter-form input {
                        padding: 0.75rem 1.5rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        background: rgba(255, 255, 255, 0.1);
                        color: white;
                    }
                    .newsletter-form input:focus {
                        outline: none;
                        border-color: rgba(255, 255, 255, 0.4);
                    }
                    .newsletter-note {
                        font-size: 0.875rem;
                        margin-top: 0.5rem;
                    }

                    .site-footer {
                        width: 100%;
                        background: #0a0a0a;
                        border-top: 1px solid #1f2937;
                        text-align: left;
                    }
                    .footer-inner {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 4rem 1rem;
                    }
                    .footer-grid {
                        display: grid;
                        gap: 3rem;
                    }
                    .footer-socials {
                        display: flex;
                        gap: 1rem;
                    }
                    .footer-social,
                    .footer-link {
                        color: #9ca3af;
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .footer-social:hover,
                    .footer-link:hover {
                        color: white;
                    }
                    .social-icon {
                        width: 1.5rem;
                        height: 1.5rem;
                    }
                    .footer-column h3 {
                        font-size: 1.125rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .footer-links .footer-link {
                        display: block;
                        margin-bottom: 0.75rem;
                    }
                    .footer-copyright {
                        margin-top: 4rem;
                        padding-top: 2rem;
                        border-top: 1px solid #1f2937;
                        text-align: center;
                        color: #9ca3af;
                    }

                    @media (min-width: 640px) {
                        .hero-title {
                            font-size: 4.5rem;
                        }
                        .newsletter-form {
                            flex-direction: row;
                        }
                    }

                    @media (min-width: 768px) {
                        .grid.cols-2 {
                            grid-template-columns: repeat(2, 1fr);
                        }
                        .grid.cols-3 {
                            grid-template-columns: repeat(3, 1fr);
                        }
                        .grid.cols-4 {
                            grid-template-columns: repeat(4, 1fr);
                        }
                        .achievements {
                            grid-template-columns: repeat(2, 1fr);
                        }
                        .newsletter {
                            flex-direction: row;
                        }
                        .footer-grid {
                            grid-template-columns: repeat(4, 1fr);
                        }
                    }

                    @media (max-width: 767px) {
                        .grid.cols-4 {
                            grid-template-columns: repeat(2, 1fr);
                        }
                        .stats {
                            flex-direction: column;
                            gap: 2rem;
                        }
                    }
                "#}
            </style>
        </main>
    }
}

/// Stagger for the `index`-th card of a list.
fn stagger(index: usize, step: f64) -> f64 {
    index as f64 * step
}

fn hero(hero: &Hero) -> Html {
    html! {
        <section class="hero">
            <FadeUpWhenVisible>
                <a href="#" class="beta-badge">
                    <span>{ &hero.badge_icon }</span>
                    <span>{ &hero.badge }</span>
                </a>
            </FadeUpWhenVisible>
            <FadeUpWhenVisible delay={0.2}>
                <h1 class="hero-title">{ &hero.title }</h1>
            </FadeUpWhenVisible>
            <FadeUpWhenVisible delay={0.3}>
                <p class="hero-subtitle muted">{ &hero.subtitle }</p>
            </FadeUpWhenVisible>
            <FadeUpWhenVisible delay={0.4}>
                <div class="hero-cta-wrap">
                    <div class="glow"></div>
                    <button class="pill-button">{ &hero.cta }</button>
                </div>
            </FadeUpWhenVisible>
            <FadeUpWhenVisible delay={0.5}>
                <div class="preview">
                    <div class="glow"></div>
                    <div class="preview-frame"></div>
                </div>
            </FadeUpWhenVisible>
        </section>
    }
}

fn stats(stats: &[Stat]) -> Html {
    html! {
        <div class="stats">
            { for stats.iter().enumerate().map(|(i, stat)| html! {
                <FadeUpWhenVisible delay={stagger(i, 0.2)}>
                    <div class="stat-value">{ &stat.value }</div>
                    <div class="muted">{ &stat.label }</div>
                </FadeUpWhenVisible>
            }) }
        </div>
    }
}

fn features(section: &Section<Feature>) -> Html {
    html! {
        <section class="section" id="how-it-works">
            <FadeUpWhenVisible>
                <h2 class="section-title">{ &section.title }</h2>
            </FadeUpWhenVisible>
            <div class="grid cols-3">
                { for section.items.iter().enumerate().map(|(i, feature)| html! {
                    <FadeUpWhenVisible delay={stagger(i, 0.1)}>
                        <div class="card">
                            <div class="feature-icon">{ &feature.icon }</div>
                            <h3>{ &feature.title }</h3>
                            <p class="muted">{ &feature.description }</p>
                        </div>
                    </FadeUpWhenVisible>
                }) }
            </div>
        </section>
    }
}

fn security(security: &Security) -> Html {
    html! {
        <section class="section">
            <div class="security-panel">
                <FadeUpWhenVisible>
                    <div class="security-header">
                        <div class="security-icon">{ &security.icon }</div>
                        <h2 class="section-title">{ &security.title }</h2>
                    </div>
                </FadeUpWhenVisible>
                <div class="grid cols-2">
                    { for security.checks.iter().enumerate().map(|(i, check)| html! {
                        <FadeUpWhenVisible delay={stagger(i, 0.1)}>
                            <div class="check">
                                <div class="check-mark">{"✓"}</div>
                                <span>{ check }</span>
                            </div>
                        </FadeUpWhenVisible>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn partners(partners: &Partners) -> Html {
    html! {
        <section class="section">
            <FadeUpWhenVisible>
                <h2 class="section-title">{ &partners.title }</h2>
            </FadeUpWhenVisible>
            <div class="grid cols-4">
                { for (1..=usize::from(partners.slots)).map(|slot| html! {
                    <FadeUpWhenVisible key={slot} delay={stagger(slot, 0.1)}>
                        <div class="partner-tile">
                            <div class="partner-logo"></div>
                        </div>
                    </FadeUpWhenVisible>
                }) }
            </div>
        </section>
    }
}

fn testimonials(section: &Section<Testimonial>) -> Html {
    html! {
        <section class="section">
            <FadeUpWhenVisible>
                <h2 class="section-title">{ &section.title }</h2>
            </FadeUpWhenVisible>
            <div class="grid cols-3">
                { for section.items.iter().enumerate().map(|(i, testimonial)| html! {
                    <FadeUpWhenVisible delay={stagger(i, 0.1)}>
                        <div class="card">
                            <div class="stars">{ star_row(testimonial.rating) }</div>
                            <p class="muted">{ format!("\"{}\"", testimonial.quote) }</p>
                            <div class="author">{ &testimonial.author }</div>
                            <div class="muted">{ &testimonial.role }</div>
                        </div>
                    </FadeUpWhenVisible>
                }) }
            </div>
        </section>
    }
}

fn star_row(rating: u8) -> String {
    "★".repeat(usize::from(rating))
}

fn live_projects(section: &Section<LiveProject>) -> Html {
    html! {
        <section class="section" id="projects">
            <FadeUpWhenVisible>
                <h2 class="section-title">{ &section.title }</h2>
            </FadeUpWhenVisible>
            <div class="grid cols-2">
                { for section.items.iter().enumerate().map(|(i, project)| html! {
                    <FadeUpWhenVisible delay={0.2 + stagger(i, 0.1)}>
                        { project_card(project) }
                    </FadeUpWhenVisible>
                }) }
            </div>
        </section>
    }
}

fn project_card(project: &LiveProject) -> Html {
    let progress = project.progress.min(100);

    html! {
        <div class="card">
            <div class="project-head">
                <div class="avatar"></div>
                <div>
                    <h3>{ &project.name }</h3>
                    <p class="muted">{ &project.launch }</p>
                </div>
            </div>
            <div class="row">
                <span class="muted">{"Raise Amount"}</span>
                <span>{ &project.raise }</span>
            </div>
            <div class="row">
                <span class="muted">{"Token Price"}</span>
                <span>{ &project.token_price }</span>
            </div>
            <div class="progress-track">
                <div class="progress-fill" style={format!("width: {}%;", progress)}></div>
            </div>
            <div class="row">
                <span class="muted">{"Progress"}</span>
                <span>{ format!("{}% Complete", progress) }</span>
            </div>
        </div>
    }
}

fn application(application: &Application) -> Html {
    html! {
        <section class="section application" id="apply">
            <h2>{ &application.title }</h2>
            <div class="application-head">
                <div class="avatar"></div>
                <h3>{ &application.heading }</h3>
            </div>
            <p class="application-body muted">{ &application.body }</p>
            <a href={application.cta.href.clone()} class="outline-button">{ &application.cta.label }</a>
        </section>
    }
}

fn achievements(achievements: &Achievements) -> Html {
    html! {
        <section class="section achievements">
            <div class="achievement-cards">
                { for achievements.projects.iter().map(|project| html! {
                    <div class="card">
                        <div class="avatar"></div>
                        <div class="author">{ &project.name }</div>
                        <div class="achievement-gain">{ &project.percentage }</div>
                    </div>
                }) }
            </div>
            <div>
                <h2>{ &achievements.title }</h2>
                <p class="muted">{ &achievements.body }</p>
                { for achievements.figures.iter().map(|figure| html! {
                    <div>
                        <div class="muted">{ &figure.label }</div>
                        <div class="figure-value">{ &figure.value }</div>
                    </div>
                }) }
                <a href={achievements.cta.href.clone()} class="outline-button">{ &achievements.cta.label }</a>
            </div>
        </section>
    }
}

fn newsletter(newsletter: &Newsletter) -> Html {
    let last = newsletter.heading.len().saturating_sub(1);

    html! {
        <section class="section newsletter">
            <h2>
                { for newsletter.heading.iter().enumerate().map(|(i, line)| html! {
                    <>
                        { line }
                        if i < last {
                            <br />
                        }
                    </>
                }) }
            </h2>
            <div>
                <div class="newsletter-form">
                    <input type="email" placeholder={newsletter.placeholder.clone()} />
                    <button class="pill-button">{ &newsletter.button }</button>
                </div>
                <p class="newsletter-note muted">{ &newsletter.note }</p>
            </div>
        </section>
    }
}
