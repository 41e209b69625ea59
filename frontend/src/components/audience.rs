use yew::prelude::*;

use crate::content::SectionProps;
use crate::nav::sections::SectionAnchor;

#[function_component(Audience)]
pub fn audience(props: &SectionProps) -> Html {
    let content = &props.content;

    html! {
        <section id={SectionAnchor::Audience.id()} class="audience">
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{"Who Can Use SnapClass.AI?"}</h2>
                    <p>{"Designed for learners and educators at every level, in every environment"}</p>
                </div>

                <div class="audience-grid">
                    { for content.audiences.iter().map(|group| html! {
                        <div class="audience-card" key={group.title.clone()}>
                            <div class="icon-circle">{&group.emoji}</div>
                            <div class="audience-body">
                                <h3>{&group.title}</h3>
                                <p>{&group.description}</p>
                                <ul class="bullet-list">
                                    { for group.benefits.iter().map(|benefit| html! {
                                        <li key={benefit.clone()}>{benefit}</li>
                                    }) }
                                </ul>
                            </div>
                        </div>
                    }) }
                </div>

                <div class="purple-banner">
                    <h3>{"Making Education Accessible Everywhere"}</h3>
                    <div class="banner-grid">
                        { for content.stats.iter().map(|stat| html! {
                            <div key={stat.label.clone()}>
                                <div class="stat-value">{&stat.value}</div>
                                <div class="banner-muted">{&stat.label}</div>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="requirements">
                    <div class="requirements-heading">
                        <h3>{"Minimum Requirements"}</h3>
                        <p>{"Ensure your device meets the baseline specifications for the best experience"}</p>
                    </div>
                    <div class="requirements-panel">
                        { for content.requirements.iter().map(|requirement| html! {
                            <div class="requirement" key={requirement.name.clone()}>
                                <div class="requirement-name">{&requirement.name}</div>
                                <div class="requirement-value">{&requirement.value}</div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .audience {
                    padding: 5rem 0;
                    background: #fff;
                }

                .audience-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                }

                .audience-card {
                    display: flex;
                    align-items: flex-start;
                    gap: 1.5rem;
                    padding: 2rem;
                    border-radius: 1rem;
                    border: 1px solid #f3e8ff;
                    background: linear-gradient(135deg, #faf5ff, #ffffff);
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    transition: box-shadow 0.3s;
                }

                .audience-card:hover {
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                }

                .audience-card .icon-circle {
                    flex-shrink: 0;
                    margin: 0;
                }

                .audience-body h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: #111827;
                    margin-bottom: 0.75rem;
                }

                .audience-body p {
                    color: #4b5563;
                    line-height: 1.6;
                    margin-bottom: 1rem;
                }

                .stat-value {
                    font-size: 1.875rem;
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }

                .requirements {
                    margin-top: 4rem;
                }

                .requirements-heading {
                    text-align: center;
                    margin-bottom: 2rem;
                }

                .requirements-heading h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #111827;
                    margin-bottom: 0.75rem;
                }

                .requirements-heading p {
                    color: #4b5563;
                }

                .requirements-panel {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    padding: 2rem;
                    border-radius: 1.5rem;
                    border: 1px solid #f3e8ff;
                    background: linear-gradient(135deg, #faf5ff, #ffffff);
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                }

                .requirement {
                    background: #fff;
                    border: 1px solid #f3e8ff;
                    border-radius: 1rem;
                    padding: 1.5rem;
                }

                .requirement-name {
                    font-size: 0.875rem;
                    color: #9333ea;
                    font-weight: 600;
                    margin-bottom: 0.25rem;
                }

                .requirement-value {
                    color: #111827;
                    font-weight: 500;
                }

                @media (max-width: 1024px) {
                    .requirements-panel {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (max-width: 768px) {
                    .audience-grid,
                    .requirements-panel {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
