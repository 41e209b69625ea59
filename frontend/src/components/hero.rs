use yew::prelude::*;

use crate::nav::sections::SectionAnchor;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-blobs">
                <div class="blob blob-one"></div>
                <div class="blob blob-two"></div>
                <div class="blob blob-three"></div>
            </div>

            <div class="hero-grid">
                <div class="hero-copy">
                    <div class="hero-eyebrow">
                        <span>{"✨"}</span>
                        <span>{"AI-Powered Learning"}</span>
                    </div>
                    <h1>
                        {"SnapClass – "}
                        <span class="gradient-text">{"Bridge Learning Gap, Without Internet."}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"A tool which bridges the learning gap by generating offline diagnostic tests from classroom materials and analyzing student comprehension, all without needing an internet connection."}
                    </p>
                    <div class="hero-actions">
                        <button class="hero-download">
                            <span>{"⬇"}</span>
                            {"Download App"}
                        </button>
                        <a href={SectionAnchor::Vision.href()} class="hero-learn-more">
                            {"Learn More"}
                        </a>
                    </div>
                </div>

                <div class="hero-illustration">
                    <div class="mock-window">
                        <div class="mock-inner">
                            <div class="window-dots">
                                <span class="dot red"></span>
                                <span class="dot yellow"></span>
                                <span class="dot green"></span>
                            </div>
                            <div class="mock-card">
                                <div class="mock-card-title">
                                    <span class="mock-icon">{"📸"}</span>
                                    <span>{"Create test"}</span>
                                </div>
                                <div class="mock-topic">{"\"Unit 2: Human Circulatory System\""}</div>
                                <div class="mock-evaluation">
                                    <p class="mock-evaluation-label">{"AI Evaluation:"}</p>
                                    <p>{"This topic shows varied understanding among students. Conceptual gaps found in blood flow, valves, and oxygenation…"}</p>
                                </div>
                            </div>
                            <div class="mock-footer">
                                <span>{"🚫 No Internet Required"}</span>
                                <span>{"⚡ Smart Evaluation"}</span>
                            </div>
                        </div>
                    </div>
                    <div class="floating floating-top">{"🧠"}</div>
                    <div class="floating floating-bottom">{"📚"}</div>
                </div>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    background: linear-gradient(135deg, #faf5ff, #ffffff, #f3e8ff);
                }

                .hero-blobs .blob {
                    position: absolute;
                    width: 18rem;
                    height: 18rem;
                    border-radius: 50%;
                    filter: blur(24px);
                    opacity: 0.7;
                    animation: pulse 4s ease-in-out infinite;
                }

                .blob-one { top: 5rem; left: 2.5rem; background: #e9d5ff; }
                .blob-two { top: 10rem; right: 2.5rem; background: #d8b4fe; animation-delay: 2s; }
                .blob-three { bottom: -2rem; left: 5rem; background: #f3e8ff; animation-delay: 4s; }

                @keyframes pulse {
                    0%, 100% { opacity: 0.7; }
                    50% { opacity: 0.4; }
                }

                .hero-grid {
                    position: relative;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 8rem 2rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }

                .hero-eyebrow {
                    display: flex;
                    gap: 0.5rem;
                    color: #9333ea;
                    font-weight: 600;
                    margin-bottom: 1.5rem;
                }

                .hero h1 {
                    font-size: 3.75rem;
                    font-weight: 700;
                    line-height: 1.1;
                    color: #111827;
                    margin-bottom: 1.5rem;
                }

                .gradient-text {
                    background: linear-gradient(to right, #9333ea, #a855f7);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #4b5563;
                    margin-bottom: 2rem;
                    max-width: 42rem;
                }

                .hero-actions {
                    display: flex;
                    gap: 1rem;
                }

                .hero-download,
                .hero-learn-more {
                    padding: 1rem 2rem;
                    border-radius: 9999px;
                    font-weight: 600;
                    font-size: 1.125rem;
                    cursor: pointer;
                    transition: all 0.3s;
                    text-decoration: none;
                }

                .hero-download {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: linear-gradient(to right, #9333ea, #a855f7);
                    color: #fff;
                    border: none;
                }

                .hero-download:hover {
                    transform: scale(1.05);
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                }

                .hero-learn-more {
                    border: 2px solid #9333ea;
                    color: #9333ea;
                }

                .hero-learn-more:hover {
                    background: #9333ea;
                    color: #fff;
                }

                .hero-illustration {
                    position: relative;
                }

                .mock-window {
                    background: #fff;
                    border-radius: 1.5rem;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    padding: 2rem;
                    transform: rotate(3deg);
                    transition: transform 0.5s;
                }

                .mock-window:hover {
                    transform: rotate(0deg);
                }

                .mock-inner {
                    background: linear-gradient(135deg, #f3e8ff, #faf5ff);
                    border-radius: 1rem;
                    padding: 1.5rem;
                }

                .window-dots {
                    display: flex;
                    gap: 0.5rem;
                    margin-bottom: 1rem;
                }

                .dot { width: 1rem; height: 1rem; border-radius: 50%; }
                .dot.red { background: #ef4444; }
                .dot.yellow { background: #eab308; }
                .dot.green { background: #22c55e; }

                .mock-card {
                    background: #fff;
                    border-radius: 0.5rem;
                    padding: 1rem;
                    margin-bottom: 1rem;
                }

                .mock-card-title {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    font-weight: 600;
                    color: #1f2937;
                    margin-bottom: 0.5rem;
                }

                .mock-topic {
                    background: #f3f4f6;
                    border-radius: 0.25rem;
                    padding: 0.5rem;
                    font-size: 0.875rem;
                    color: #4b5563;
                    margin-bottom: 0.5rem;
                }

                .mock-evaluation {
                    background: #faf5ff;
                    border-radius: 0.25rem;
                    padding: 0.75rem;
                    font-size: 0.875rem;
                    color: #374151;
                }

                .mock-evaluation-label {
                    color: #6b21a8;
                    font-weight: 500;
                }

                .mock-footer {
                    display: flex;
                    justify-content: space-between;
                    font-size: 0.875rem;
                    color: #6b7280;
                }

                .floating {
                    position: absolute;
                    padding: 0.75rem;
                    border-radius: 50%;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                }

                .floating-top {
                    top: -1rem;
                    right: -1rem;
                    background: #9333ea;
                    animation: bounce 1s infinite;
                }

                .floating-bottom {
                    bottom: -1rem;
                    left: -1rem;
                    background: #fff;
                }

                @keyframes bounce {
                    0%, 100% { transform: translateY(-25%); }
                    50% { transform: translateY(0); }
                }

                @media (max-width: 1024px) {
                    .hero-grid {
                        grid-template-columns: 1fr;
                        text-align: center;
                    }

                    .hero h1 {
                        font-size: 2.5rem;
                    }

                    .hero-eyebrow,
                    .hero-actions {
                        justify-content: center;
                    }
                }

                @media (max-width: 640px) {
                    .hero-actions {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </section>
    }
}
