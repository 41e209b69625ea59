use yew::prelude::*;

use crate::content::SectionProps;
use crate::nav::sections::SectionAnchor;

#[function_component(Vision)]
pub fn vision(props: &SectionProps) -> Html {
    html! {
        <section id={SectionAnchor::Vision.id()} class="vision">
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{"Our Vision"}</h2>
                    <p>{"Making AI accessible to every student, everywhere – even without internet."}</p>
                </div>

                <div class="vision-grid">
                    { for props.content.vision.iter().map(|pillar| html! {
                        <div class="vision-pillar" key={pillar.title.clone()}>
                            <div class="icon-circle">{&pillar.icon}</div>
                            <h3>{&pillar.title}</h3>
                            <p>{&pillar.description}</p>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .vision {
                    padding: 5rem 0;
                    background: #fff;
                }

                .vision-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }

                .vision-pillar {
                    text-align: center;
                }

                .vision-pillar:hover .icon-circle {
                    transform: scale(1.1);
                }

                .vision-pillar h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: #111827;
                    margin: 1.5rem 0 1rem;
                }

                .vision-pillar p {
                    color: #4b5563;
                }

                @media (max-width: 768px) {
                    .vision-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
