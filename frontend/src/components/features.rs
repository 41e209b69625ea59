use yew::prelude::*;

use crate::content::SectionProps;
use crate::nav::sections::SectionAnchor;

#[function_component(Features)]
pub fn features(props: &SectionProps) -> Html {
    let content = &props.content;

    html! {
        <section id={SectionAnchor::Features.id()} class="features">
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{"What SnapClass Can Do"}</h2>
                    <p>{"Powerful AI features that transform how you learn and teach, all working seamlessly offline"}</p>
                </div>

                <div class="features-grid">
                    { for content.features.iter().map(|feature| html! {
                        <div class="feature-card" key={feature.title.clone()}>
                            <div class="icon-circle">{&feature.emoji}</div>
                            <h3>{&feature.title}</h3>
                            <p>{&feature.description}</p>
                        </div>
                    }) }
                </div>

                // Demo panel
                <div class="feature-demo">
                    <div class="demo-copy">
                        <h3>{"See SnapClass in Action"}</h3>
                        <p>
                            {"SnapClass focuses on understanding how well they were learned. By combining automated content generation and offline connectivity, SnapClass gives teachers what really matters: a clear picture of each student's comprehension."}
                        </p>
                        <ol class="demo-steps">
                            { for content.demo_steps.iter().enumerate().map(|(index, step)| html! {
                                <li key={step.clone()}>
                                    <span class="step-badge">{(index + 1).to_string()}</span>
                                    <span>{step}</span>
                                </li>
                            }) }
                        </ol>
                    </div>

                    <div class="demo-visual">
                        <div class="demo-card">
                            <div class="demo-card-header">
                                <div class="demo-camera">{"📷"}</div>
                                <h4>{"Upload pdf and audio"}</h4>
                            </div>
                            <div class="demo-answer">
                                <div class="demo-label">{"Student Understanding"}</div>
                                <div class="demo-quote">
                                    {"\"Photosynthesis happens in the chloroplast of plant cells...\""}
                                </div>
                            </div>
                            <div class="demo-insight">
                                <div class="demo-label accent">{"AI Insight"}</div>
                                <div>
                                    {"Student misunderstood the role of chloroplasts. Summary: Photosynthesis converts light energy into chemical energy stored in glucose, and occurs in the chloroplast."}
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .features {
                    padding: 5rem 0;
                    background: linear-gradient(135deg, #faf5ff, #ffffff);
                }

                .features-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }

                .feature-card {
                    background: #fff;
                    border: 1px solid #f3e8ff;
                    border-radius: 1rem;
                    padding: 1.5rem;
                    text-align: center;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    transition: all 0.3s;
                }

                .feature-card:hover {
                    transform: translateY(-0.5rem);
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                }

                .feature-card h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: #111827;
                    margin: 1rem 0 0.75rem;
                }

                .feature-card p {
                    color: #4b5563;
                    line-height: 1.6;
                }

                .feature-demo {
                    margin-top: 4rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    background: #fff;
                    border-radius: 1.5rem;
                    overflow: hidden;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }

                .demo-copy {
                    padding: 3rem;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                }

                .demo-copy h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #111827;
                    margin-bottom: 1rem;
                }

                .demo-copy p {
                    color: #4b5563;
                    margin-bottom: 1.5rem;
                }

                .demo-steps {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .demo-steps li {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    color: #374151;
                }

                .step-badge {
                    flex-shrink: 0;
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    background: #f3e8ff;
                    color: #9333ea;
                    font-weight: 700;
                    font-size: 0.875rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .demo-visual {
                    background: linear-gradient(135deg, #f3e8ff, #faf5ff);
                    padding: 3rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .demo-card {
                    background: #fff;
                    border-radius: 1rem;
                    padding: 1.5rem;
                    max-width: 24rem;
                    width: 100%;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                }

                .demo-card-header {
                    text-align: center;
                    margin-bottom: 1rem;
                }

                .demo-camera {
                    width: 3rem;
                    height: 3rem;
                    margin: 0 auto 0.75rem;
                    border-radius: 50%;
                    background: #9333ea;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .demo-answer {
                    background: #f3f4f6;
                    border-radius: 0.5rem;
                    padding: 0.75rem;
                    margin-bottom: 1rem;
                }

                .demo-quote {
                    background: #fff;
                    border-radius: 0.25rem;
                    padding: 0.5rem;
                    font-size: 0.875rem;
                }

                .demo-insight {
                    background: #faf5ff;
                    border-radius: 0.5rem;
                    padding: 0.75rem;
                    font-size: 0.875rem;
                    color: #374151;
                }

                .demo-label {
                    font-size: 0.75rem;
                    color: #6b7280;
                    margin-bottom: 0.25rem;
                }

                .demo-label.accent {
                    color: #9333ea;
                    font-weight: 600;
                }

                @media (max-width: 1024px) {
                    .features-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }

                    .feature-demo {
                        grid-template-columns: 1fr;
                    }
                }

                @media (max-width: 768px) {
                    .features-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
