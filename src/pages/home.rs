use gloo_console::log;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::hero_slider::{HeroSlider, Slide};
use crate::components::lazy_image::LazyImage;
use crate::components::reveal::Reveal;
use crate::components::stat_counter::StatCounter;

const SLIDES: &[Slide] = &[
    Slide {
        image: "/assets/hero-counselling.jpg",
        title: "Shape Your Career with Confidence",
        tagline: "One-on-one guidance from experienced career counsellors.",
    },
    Slide {
        image: "/assets/hero-students.jpg",
        title: "Find the Right Course, the First Time",
        tagline: "Psychometric assessments matched to real admission data.",
    },
    Slide {
        image: "/assets/hero-campus.jpg",
        title: "From Classroom to Career",
        tagline: "Admission support for universities in India and abroad.",
    },
];

const COURSES: &[(&str, &str)] = &[
    (
        "Career Counselling",
        "Structured sessions that map your strengths and interests to concrete career paths.",
    ),
    (
        "Psychometric Assessment",
        "Standardised aptitude and personality testing with a counsellor-led debrief.",
    ),
    (
        "Admission Guidance",
        "Shortlisting, applications and interview preparation for Indian and overseas universities.",
    ),
    (
        "Scholarship Support",
        "Identify scholarships you qualify for and build applications that stand out.",
    ),
];

const STATS: &[(u32, &str, &str)] = &[
    (5_000, "Students Guided", "+"),
    (120, "Partner Institutions", "+"),
    (15, "Years of Experience", "+"),
    (98, "Satisfaction Rate", "%"),
];

#[derive(Properties, PartialEq)]
struct CourseCardProps {
    title: String,
    description: String,
}

#[function_component(CourseCard)]
fn course_card(props: &CourseCardProps) -> Html {
    let hovered = use_state(|| false);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let style = if *hovered {
        "transform: translateY(-6px);"
    } else {
        "transform: translateY(0);"
    };

    html! {
        <div class="course-card" {style} {onmouseenter} {onmouseleave}>
            <h3>{ props.title.clone() }</h3>
            <p>{ props.description.clone() }</p>
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let on_whatsapp_click = Callback::from(|_: MouseEvent| {
        log!("CTA click: whatsapp");
    });
    let on_phone_click = Callback::from(|_: MouseEvent| {
        log!("CTA click: phone");
    });

    html! {
        <>
            <style>
                {r#"
                    .section {
                        padding: 5rem 2rem;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .section h2 {
                        font-size: 2.2rem;
                        text-align: center;
                        margin-bottom: 2.5rem;
                        color: #1a1a2e;
                    }
                    .reveal {
                        opacity: 0;
                        transform: translateY(24px);
                        transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                    }
                    .reveal.visible {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .course-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 1.5rem;
                    }
                    .course-card {
                        background: #fff;
                        border: 1px solid rgba(26, 26, 46, 0.08);
                        border-radius: 12px;
                        padding: 2rem 1.5rem;
                        box-shadow: 0 4px 16px rgba(26, 26, 46, 0.08);
                        transition: transform 0.2s ease-out;
                    }
                    .course-card h3 {
                        margin-bottom: 0.75rem;
                        color: #1a1a2e;
                    }
                    .course-card p {
                        color: #555;
                        line-height: 1.5;
                    }
                    .stats-band {
                        background: #1a1a2e;
                        color: #fff;
                    }
                    .stats-band .section {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-around;
                        gap: 2rem;
                        padding-top: 3.5rem;
                        padding-bottom: 3.5rem;
                    }
                    .stat {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        min-width: 140px;
                    }
                    .stat-value {
                        font-size: 2.6rem;
                        font-weight: bold;
                        color: #C9A961;
                    }
                    .stat-label {
                        color: #ccc;
                        margin-top: 0.25rem;
                    }
                    .about-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .about-grid img {
                        width: 100%;
                        border-radius: 12px;
                        min-height: 260px;
                        background: #eee;
                    }
                    .about-grid p {
                        color: #444;
                        line-height: 1.7;
                        margin-bottom: 1rem;
                    }
                    .contact-section {
                        background: #f6f4ef;
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        max-width: 540px;
                        margin: 0 auto;
                    }
                    .contact-form input,
                    .contact-form textarea {
                        padding: 0.9rem 1rem;
                        border: 1px solid rgba(26, 26, 46, 0.2);
                        border-radius: 8px;
                        font-size: 1rem;
                        font-family: inherit;
                    }
                    .contact-form button {
                        background: #C9A961;
                        color: #1a1a2e;
                        font-weight: bold;
                        font-size: 1.05rem;
                        border: none;
                        border-radius: 8px;
                        padding: 0.9rem;
                        cursor: pointer;
                    }
                    .form-message {
                        padding: 0.75rem 1rem;
                        border-radius: 8px;
                    }
                    .error-message {
                        background: rgba(220, 60, 60, 0.1);
                        color: #b32d2d;
                    }
                    .success-message {
                        background: rgba(60, 160, 90, 0.12);
                        color: #247a43;
                    }
                    .site-footer {
                        background: #12121f;
                        color: #bbb;
                        padding: 3rem 2rem;
                        text-align: center;
                    }
                    .site-footer a {
                        color: #C9A961;
                        text-decoration: none;
                        margin: 0 0.75rem;
                    }
                    .scroll-top {
                        position: fixed;
                        right: 1.5rem;
                        bottom: 1.5rem;
                        z-index: 50;
                        width: 48px;
                        height: 48px;
                        border: none;
                        border-radius: 50%;
                        background: #C9A961;
                        color: #1a1a2e;
                        font-size: 1.4rem;
                        cursor: pointer;
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.25);
                        transition: opacity 0.3s ease;
                    }
                    .scroll-top.hidden {
                        opacity: 0;
                        pointer-events: none;
                    }
                    @media (max-width: 768px) {
                        .about-grid {
                            grid-template-columns: 1fr;
                        }
                        .section {
                            padding: 3rem 1.25rem;
                        }
                    }
                "#}
            </style>

            <HeroSlider slides={SLIDES.to_vec()} />

            <Reveal>
                <section id="courses" class="section">
                    <h2>{"What We Offer"}</h2>
                    <div class="course-grid">
                        {
                            for COURSES.iter().map(|(title, description)| html! {
                                <CourseCard
                                    title={title.to_string()}
                                    description={description.to_string()}
                                />
                            })
                        }
                    </div>
                </section>
            </Reveal>

            <div class="stats-band">
                <Reveal>
                    <div class="section">
                        {
                            for STATS.iter().map(|(target, label, suffix)| html! {
                                <StatCounter
                                    target={*target}
                                    label={label.to_string()}
                                    suffix={suffix.to_string()}
                                />
                            })
                        }
                    </div>
                </Reveal>
            </div>

            <Reveal>
                <section id="about" class="section">
                    <h2>{"Why CCA"}</h2>
                    <div class="about-grid">
                        <LazyImage
                            src="/assets/counsellor-session.jpg"
                            alt="Counselling session in progress"
                        />
                        <div>
                            <p>
                                {"Career Counselling Advisor has helped students and working \
                                  professionals make informed education choices since 2010. Every \
                                  plan starts with an assessment, not a sales pitch."}
                            </p>
                            <p>
                                {"Our counsellors are certified, our recommendations are backed by \
                                  admission data, and our support continues until you are enrolled."}
                            </p>
                        </div>
                    </div>
                </section>
            </Reveal>

            <div class="contact-section">
                <Reveal>
                    <section id="contact" class="section">
                        <h2>{"Book a Free Session"}</h2>
                        <ContactForm />
                    </section>
                </Reveal>
            </div>

            <footer class="site-footer">
                <p>{"© 2026 CCA — Career Counselling Advisor"}</p>
                <p>
                    <a
                        href="https://wa.me/919876543210"
                        target="_blank"
                        rel="noopener"
                        onclick={on_whatsapp_click}
                    >
                        {"WhatsApp"}
                    </a>
                    <a href="tel:+919876543210" onclick={on_phone_click}>
                        {"Call Us"}
                    </a>
                </p>
            </footer>
        </>
    }
}
