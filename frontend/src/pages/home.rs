use log::error;
use yew::prelude::*;

use crate::components::{
    audience::Audience, features::Features, footer::Footer, hero::Hero,
    how_it_works::HowItWorks, team::Team, vision::Vision,
};
use crate::content;

#[function_component(Home)]
pub fn home() -> Html {
    let content = use_memo(
        |_| {
            let loaded = content::load();
            if let Err(err) = &loaded {
                error!("Failed to load site content: {}", err);
            }
            loaded
        },
        (),
    );

    let sections = match &*content {
        Ok(content) => html! {
            <>
                <Vision content={content.clone()} />
                <Features content={content.clone()} />
                <Audience content={content.clone()} />
                <HowItWorks content={content.clone()} />
                <Team content={content.clone()} />
            </>
        },
        Err(_) => html! {
            <section class="content-unavailable">
                <p>{"Something went wrong loading this page. Please refresh to try again."}</p>
            </section>
        },
    };

    html! {
        <main class="landing">
            <Hero />
            {sections}
            <Footer />

            <style>
                {r#"
                .landing {
                    min-height: 100vh;
                    background: #fff;
                    font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
                }

                .landing h1,
                .landing h2,
                .landing h3,
                .landing h4,
                .landing p {
                    margin: 0;
                }

                .section-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 2rem;
                }

                .section-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .section-heading h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #111827;
                    margin-bottom: 1.5rem;
                }

                .section-heading p {
                    font-size: 1.25rem;
                    color: #4b5563;
                    max-width: 48rem;
                    margin: 0 auto;
                    line-height: 1.6;
                }

                .icon-circle {
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto;
                    border-radius: 50%;
                    background: linear-gradient(to right, #9333ea, #a855f7);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                    transition: transform 0.3s;
                }

                .bullet-list {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }

                .bullet-list li {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 0.875rem;
                    color: #374151;
                }

                .bullet-list.centered li {
                    justify-content: center;
                    font-size: 0.75rem;
                }

                .bullet-list li::before {
                    content: "";
                    width: 0.375rem;
                    height: 0.375rem;
                    border-radius: 50%;
                    background: #9333ea;
                    flex-shrink: 0;
                }

                .purple-banner {
                    margin-top: 4rem;
                    padding: 2rem;
                    border-radius: 1.5rem;
                    background: linear-gradient(to right, #9333ea, #a855f7);
                    color: #fff;
                    text-align: center;
                }

                .purple-banner h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 2rem;
                }

                .banner-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }

                .banner-muted {
                    color: #f3e8ff;
                }

                .content-unavailable {
                    padding: 8rem 2rem;
                    text-align: center;
                    color: #4b5563;
                }

                @media (max-width: 768px) {
                    .section-heading h2 {
                        font-size: 1.875rem;
                    }

                    .banner-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </main>
    }
}
