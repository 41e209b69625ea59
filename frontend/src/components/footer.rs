use yew::prelude::*;

use crate::nav::sections::SectionAnchor;

#[function_component(Footer)]
pub fn footer() -> Html {
    let product_links = [
        SectionAnchor::Features,
        SectionAnchor::HowItWorks,
        SectionAnchor::Audience,
    ];

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="brand">
                            <div class="brand-mark">{"S"}</div>
                            <span class="footer-brand-name">{"SnapClass"}</span>
                        </div>
                        <p class="footer-muted">
                            {"An offline AI-powered classroom assistant that makes learning accessible everywhere. Built with ❤️ for students and teachers worldwide."}
                        </p>

                        <div class="hackathon-credit">
                            <div class="credit-title">
                                <span>{"🏆"}</span>
                                <span>{"Qualcomm Edge AI Hackathon"}</span>
                            </div>
                            <p class="footer-muted">
                                {"Developed during the Qualcomm Edge AI Hackathon 2024, showcasing the power of on-device AI for education."}
                            </p>
                        </div>

                        <div class="footer-contacts">
                            <a href="mailto:team@snapclass.ai">{"✉ Contact Us"}</a>
                            <a href="https://github.com/snapclass">{"GitHub"}</a>
                        </div>
                    </div>

                    <div>
                        <h3>{"Product"}</h3>
                        <ul class="footer-links">
                            { for product_links.iter().map(|anchor| html! {
                                <li key={anchor.id()}><a href={anchor.href()}>{anchor.label()}</a></li>
                            }) }
                            <li><a href="#">{"Download App ↗"}</a></li>
                        </ul>
                    </div>

                    <div>
                        <h3>{"Company"}</h3>
                        <ul class="footer-links">
                            <li><a href={SectionAnchor::Team.href()}>{"Our Team"}</a></li>
                            <li><a href="#">{"Privacy Policy"}</a></li>
                            <li><a href="#">{"Terms of Service"}</a></li>
                            <li><a href="mailto:support@snapclass.ai">{"Support"}</a></li>
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom">
                    <div class="footer-muted small">
                        {"© 2024 SnapClass. All rights reserved. Built with "}
                        <span class="heart">{"♥"}</span>
                        {" for education."}
                    </div>
                    <div class="footer-status">
                        <span class="status-dot"></span>
                        <span>{"Status: Active Development"}</span>
                    </div>
                </div>

                <div class="footer-note">
                    <p>
                        {"This project demonstrates edge AI capabilities for educational applications. All AI processing occurs on-device to ensure privacy and offline functionality."}
                        <br />
                        <span class="powered-by">{"Powered by Qualcomm Edge AI Technology"}</span>
                    </p>
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    background: #111827;
                    color: #fff;
                }

                .footer-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 3rem 2rem;
                }

                .footer-grid {
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr;
                    gap: 2rem;
                }

                .footer-brand .brand {
                    margin-bottom: 1rem;
                }

                .footer-brand-name {
                    font-size: 1.25rem;
                    font-weight: 700;
                }

                .footer-muted {
                    color: #9ca3af;
                    max-width: 28rem;
                    margin-bottom: 1.5rem;
                }

                .footer-muted.small {
                    font-size: 0.875rem;
                    margin: 0;
                }

                .hackathon-credit {
                    background: #1f2937;
                    border-radius: 0.5rem;
                    padding: 1rem;
                    margin-bottom: 1.5rem;
                }

                .hackathon-credit .footer-muted {
                    font-size: 0.875rem;
                    margin: 0;
                }

                .credit-title {
                    display: flex;
                    gap: 0.5rem;
                    font-weight: 600;
                    font-size: 0.875rem;
                    margin-bottom: 0.5rem;
                }

                .footer-contacts {
                    display: flex;
                    gap: 1rem;
                }

                .footer-contacts a {
                    background: #1f2937;
                    color: #fff;
                    padding: 0.75rem;
                    border-radius: 0.5rem;
                    font-size: 0.875rem;
                    text-decoration: none;
                    transition: background 0.2s;
                }

                .footer-contacts a:hover {
                    background: #374151;
                }

                .site-footer h3 {
                    font-weight: 600;
                    margin-bottom: 1rem;
                }

                .footer-links {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }

                .footer-links a {
                    color: #9ca3af;
                    text-decoration: none;
                    transition: color 0.2s;
                }

                .footer-links a:hover {
                    color: #fff;
                }

                .footer-bottom {
                    border-top: 1px solid #1f2937;
                    margin-top: 2rem;
                    padding-top: 2rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .heart {
                    color: #ef4444;
                }

                .footer-status {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 0.875rem;
                    color: #9ca3af;
                }

                .status-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 50%;
                    background: #22c55e;
                    animation: pulse 2s infinite;
                }

                .footer-note {
                    margin-top: 1rem;
                    padding-top: 1rem;
                    border-top: 1px solid #1f2937;
                    text-align: center;
                    font-size: 0.75rem;
                    color: #6b7280;
                }

                .powered-by {
                    color: #c084fc;
                }

                @media (max-width: 768px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }

                    .footer-bottom {
                        flex-direction: column;
                        gap: 1rem;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
