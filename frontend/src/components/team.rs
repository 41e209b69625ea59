use yew::prelude::*;

use crate::content::SectionProps;
use crate::nav::sections::SectionAnchor;

#[function_component(Team)]
pub fn team(props: &SectionProps) -> Html {
    let content = &props.content;

    html! {
        <section id={SectionAnchor::Team.id()} class="team">
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{"Meet Our Team"}</h2>
                    <p>{"A passionate creators, engineers, and designers working together to democratize AI-powered learning"}</p>
                    <div class="hackathon-badge">
                        <span>{"🏅"}</span>
                        <span>{"Built during the Qualcomm Edge AI Hackathon"}</span>
                    </div>
                </div>

                <div class="team-grid">
                    { for content.team.iter().map(|member| html! {
                        <div class="member-card" key={member.name.clone()}>
                            <div class="avatar-wrap">
                                <img class="avatar" src={member.avatar.clone()} alt={member.name.clone()} />
                                <div class="avatar-spark">{"✨"}</div>
                            </div>
                            <h3>{&member.name}</h3>
                            <div class="member-role">{&member.role}</div>
                            <p>{&member.bio}</p>
                            <div class="member-links">
                                <a href={member.github.clone()} target="_blank" rel="noopener noreferrer">{"GitHub"}</a>
                                <a href={member.linkedin.clone()} target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                            </div>
                        </div>
                    }) }
                </div>

                <div class="purple-banner">
                    <h3>{"Our Mission"}</h3>
                    <div class="banner-grid">
                        { for content.mission.iter().map(|value| html! {
                            <div key={value.title.clone()}>
                                <div class="mission-icon">{&value.icon}</div>
                                <h4>{&value.title}</h4>
                                <p class="banner-muted">{&value.description}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .team {
                    padding: 5rem 0;
                    background: #fff;
                }

                .hackathon-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-top: 2rem;
                    padding: 0.75rem 1.5rem;
                    border-radius: 9999px;
                    background: linear-gradient(to right, #9333ea, #a855f7);
                    color: #fff;
                    font-weight: 600;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                }

                .team-grid {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 2rem;
                }

                .member-card {
                    width: 16rem;
                    padding: 1.5rem;
                    text-align: center;
                    border-radius: 1rem;
                    border: 1px solid #f3e8ff;
                    background: linear-gradient(135deg, #faf5ff, #ffffff);
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    transition: all 0.3s;
                }

                .member-card:hover {
                    transform: translateY(-0.5rem);
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                }

                .avatar-wrap {
                    position: relative;
                    width: 6rem;
                    margin: 0 auto 1.5rem;
                }

                .avatar {
                    width: 6rem;
                    height: 6rem;
                    border-radius: 50%;
                    object-fit: cover;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                }

                .avatar-spark {
                    position: absolute;
                    bottom: -0.5rem;
                    right: -0.5rem;
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    background: #9333ea;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 0.875rem;
                }

                .member-card h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: #111827;
                    margin-bottom: 0.5rem;
                }

                .member-role {
                    color: #9333ea;
                    font-weight: 500;
                    margin-bottom: 0.75rem;
                }

                .member-card p {
                    color: #4b5563;
                    font-size: 0.875rem;
                    line-height: 1.6;
                    margin-bottom: 1rem;
                }

                .member-links {
                    display: flex;
                    justify-content: center;
                    gap: 0.75rem;
                }

                .member-links a {
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    background: #f3f4f6;
                    color: #4b5563;
                    font-size: 0.75rem;
                    text-decoration: none;
                    transition: all 0.2s;
                }

                .member-links a:hover {
                    background: #f3e8ff;
                    color: #9333ea;
                }

                .mission-icon {
                    font-size: 2.25rem;
                    margin-bottom: 0.75rem;
                }

                .team .purple-banner h4 {
                    font-weight: 600;
                    margin-bottom: 0.5rem;
                }

                .team .purple-banner p {
                    font-size: 0.875rem;
                }
                "#}
            </style>
        </section>
    }
}
