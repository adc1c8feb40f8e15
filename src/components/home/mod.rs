//! Marketing landing page.
//!
//! Static sections only: hero, features, about, contact, footer. The navbar
//! is mounted by the router and shared with the other pages.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::APP_NAME;

stylance::import_crate_style!(css, "src/components/home/home.module.css");

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class=css::page>
            <Hero />
            <Features />
            <About />
            <Contact />
            <footer class=css::footer>
                <p>
                    {format!(
                        "© 2025 {}. All rights reserved. Built with passion and purpose.",
                        APP_NAME
                    )}
                </p>
            </footer>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section id="home" class=css::hero>
            <div class=css::heroContainer>
                <div class=css::heroContent>
                    <h1>"Launch Your Dreams Into Reality"</h1>
                    <p>
                        "Transform your innovative ideas into successful products with our \
                         comprehensive platform designed for modern entrepreneurs and creators."
                    </p>
                    <div class=css::heroButtons>
                        <a href="#features" class=css::btnPrimary>
                            <Icon icon=ic::PLAY />
                            "Explore Features"
                        </a>
                        <a href="#about" class=css::btnSecondary>
                            <Icon icon=ic::CHEVRON_RIGHT />
                            "Learn More"
                        </a>
                    </div>
                </div>
                <div class=css::heroGraphic>
                    <Icon icon=ic::ROCKET />
                </div>
            </div>
        </section>
    }
}

#[component]
fn Features() -> impl IntoView {
    view! {
        <section id="features" class=css::features>
            <div class=css::sectionHeader>
                <h2>"Powerful Features"</h2>
                <p>
                    "Everything you need to bring your vision to life, all in one \
                     comprehensive platform"
                </p>
            </div>
            <div class=css::featuresGrid>
                <FeatureCard
                    icon=ic::ZAP
                    title="Lightning Fast"
                    body="Experience blazing-fast performance with our optimized \
                          infrastructure designed for speed and reliability."
                />
                <FeatureCard
                    icon=ic::SHIELD
                    title="Secure & Safe"
                    body="Your data is protected with enterprise-grade security measures \
                          and advanced encryption protocols."
                />
                <FeatureCard
                    icon=ic::USERS
                    title="Team Collaboration"
                    body="Work seamlessly with your team using our advanced collaboration \
                          tools and real-time synchronization."
                />
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(
    icon: icondata::Icon,
    title: &'static str,
    body: &'static str,
) -> impl IntoView {
    view! {
        <div class=css::featureCard>
            <div class=css::featureIcon>
                <Icon icon=icon />
            </div>
            <h3>{title}</h3>
            <p>{body}</p>
        </div>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class=css::about>
            <div class=css::aboutContainer>
                <div class=css::aboutContent>
                    <h2>"Built for Innovators"</h2>
                    <p>
                        "We understand the challenges of turning ideas into reality. That's \
                         why we've created a platform that combines powerful tools, intuitive \
                         design, and reliable performance to help you succeed."
                    </p>
                    <p>
                        "Whether you're a startup founder, creative professional, or \
                         established business, our platform adapts to your needs and grows \
                         with your ambitions."
                    </p>
                    <a href="#contact" class=css::btnPrimary>
                        <Icon icon=ic::TARGET />
                        "Start Your Journey"
                    </a>
                </div>
                <div class=css::aboutGraphic>
                    <Icon icon=ic::HEART />
                </div>
            </div>
        </section>
    }
}

#[component]
fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class=css::contact>
            <h2>"Ready to Get Started?"</h2>
            <p>"Join thousands of innovators who have transformed their ideas into success stories"</p>
            // Email capture is presentational; submission is not wired to a backend
            <form class=css::contactForm on:submit=|ev| ev.prevent_default()>
                <input type="email" placeholder="Enter your email address" required />
                <button type="submit">
                    <Icon icon=ic::MAIL />
                    "Get Started"
                </button>
            </form>
        </section>
    }
}
