use yew::prelude::*;

use crate::content::SectionProps;
use crate::nav::sections::SectionAnchor;

#[function_component(HowItWorks)]
pub fn how_it_works(props: &SectionProps) -> Html {
    let steps = &props.content.steps;

    html! {
        <section id={SectionAnchor::HowItWorks.id()} class="how-it-works">
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{"How to Use SnapClass"}</h2>
                    <p>{"Get started in minutes and transform your learning experience with just four simple steps"}</p>
                </div>

                // Wide screens: connected cards in a row
                <div class="steps-flow">
                    <div class="steps-line"></div>
                    <div class="steps-row">
                        { for steps.iter().enumerate().map(|(index, step)| html! {
                            <div class="step-column" key={step.title.clone()}>
                                <div class="step-card">
                                    <div class="icon-circle">{&step.emoji}</div>
                                    <h3>{&step.title}</h3>
                                    <p>{&step.description}</p>
                                    <ul class="bullet-list centered">
                                        { for step.details.iter().map(|detail| html! {
                                            <li key={detail.clone()}>{detail}</li>
                                        }) }
                                    </ul>
                                </div>
                                <div class="step-number">{(index + 1).to_string()}</div>
                            </div>
                        }) }
                    </div>
                </div>

                // Narrow screens: numbered list
                <div class="steps-stack">
                    { for steps.iter().enumerate().map(|(index, step)| html! {
                        <div class="stack-item" key={step.title.clone()}>
                            <div class="stack-number">{(index + 1).to_string()}</div>
                            <div class="step-card">
                                <div class="stack-title">
                                    <span>{&step.emoji}</span>
                                    <h3>{&step.title}</h3>
                                </div>
                                <p>{&step.description}</p>
                                <ul class="bullet-list">
                                    { for step.details.iter().map(|detail| html! {
                                        <li key={detail.clone()}>{detail}</li>
                                    }) }
                                </ul>
                            </div>
                        </div>
                    }) }
                </div>

                <div class="purple-banner cta">
                    <h3>{"Ready to Get Started?"}</h3>
                    <p class="banner-muted">
                        {"Join thousands of students and teachers who are already using SnapClass to enhance their learning experience."}
                    </p>
                    <button class="cta-button">{"Download SnapClass Now"}</button>
                </div>
            </div>

            <style>
                {r#"
                .how-it-works {
                    padding: 5rem 0;
                    background: linear-gradient(135deg, #ffffff, #faf5ff);
                }

                .steps-flow {
                    position: relative;
                }

                .steps-line {
                    position: absolute;
                    top: 50%;
                    left: 0;
                    right: 0;
                    height: 2px;
                    background: linear-gradient(to right, #d8b4fe, #a855f7, #d8b4fe);
                }

                .steps-row {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }

                .step-column {
                    position: relative;
                }

                .step-card {
                    position: relative;
                    z-index: 1;
                    background: #fff;
                    border: 1px solid #f3e8ff;
                    border-radius: 1rem;
                    padding: 1.5rem;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                }

                .step-column .step-card {
                    text-align: center;
                }

                .step-card h3 {
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: #111827;
                    margin: 1rem 0 0.75rem;
                }

                .step-card p {
                    color: #4b5563;
                    font-size: 0.875rem;
                    margin-bottom: 1rem;
                }

                .step-number {
                    position: absolute;
                    top: -0.75rem;
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 2;
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    background: #9333ea;
                    color: #fff;
                    font-weight: 700;
                    font-size: 0.875rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .steps-stack {
                    display: none;
                }

                .stack-item {
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                }

                .stack-item .step-card {
                    flex: 1;
                }

                .stack-number {
                    flex-shrink: 0;
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    background: linear-gradient(to right, #9333ea, #a855f7);
                    color: #fff;
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .stack-title {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    font-size: 1.5rem;
                }

                .stack-title h3 {
                    margin: 0;
                }

                .purple-banner.cta p {
                    max-width: 42rem;
                    margin: 0 auto 1.5rem;
                }

                .cta-button {
                    background: #fff;
                    color: #9333ea;
                    border: none;
                    padding: 0.75rem 2rem;
                    border-radius: 9999px;
                    font-weight: 600;
                    cursor: pointer;
                    transition: all 0.3s;
                }

                .cta-button:hover {
                    transform: scale(1.05);
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                }

                @media (max-width: 1024px) {
                    .steps-flow {
                        display: none;
                    }

                    .steps-stack {
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
