//! Landing page component
//!
//! A scroll-driven landing page:
//! - SEO meta tags for search engine optimization
//! - Full-viewport colored sections
//! - Pinned planet section whose orbit, icons and copy follow scroll progress

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::sections::LANDING_SECTIONS;
use crate::ui::sections::SectionRenderer;

/// Landing page component with scroll-based animations
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        // SEO Meta Tags
        <SeoMeta />

        <SectionRenderer sections=LANDING_SECTIONS />

        // Page styles
        <LandingStyles />
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Ecosystem - Brands, shoppers and employers growing together" />

        <Meta name="description" content="One ecosystem connecting independent brands, social shoppers and employers with a conscience." />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="Ecosystem - Brands, shoppers and employers growing together" />
        <Meta property="og:description" content="One ecosystem connecting independent brands, social shoppers and employers with a conscience." />
        <Meta property="og:image" content="/images/ecosystem.svg" />

        <Link rel="icon" type_="image/svg+xml" href="/images/ecosystem.svg" />
    }
}

/// CSS styles for the landing page
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            html, body {
                margin: 0;
                font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
            }

            /* Full-viewport sections */
            .landing-section {
                min-height: 100vh;
                display: flex;
                align-items: center;
                justify-content: center;
                box-sizing: border-box;
            }

            .landing-section-heading {
                font-size: 2.5rem;
                font-weight: 700;
                margin: 0;
            }

            /* Planet section: tall track with a pinned stage */
            .landing-planet-section {
                display: block;
                position: relative;
            }

            .landing-planet-stage {
                position: sticky;
                top: 0;
                height: 100vh;
                display: grid;
                grid-template-columns: 1fr 1fr;
                align-items: center;
                justify-items: center;
                padding: 0 5vw;
                overflow: hidden;
                box-sizing: border-box;
            }

            .landing-planet-container {
                position: relative;
                width: 463px;
                height: 505px;
            }

            .landing-planet-background {
                width: 100%;
                height: 100%;
            }

            .landing-orbit {
                position: absolute;
                top: 0;
                left: 0;
                transform-style: preserve-3d;
                will-change: transform;
            }

            .landing-orbit-icon {
                position: absolute;
                transform-origin: center center;
                will-change: transform;
            }

            /* Text blocks share one grid cell and crossfade */
            .landing-text-panel {
                position: relative;
                display: grid;
                max-width: 28rem;
                overflow: hidden;
                color: #fff;
            }

            .landing-text-block {
                grid-area: 1 / 1;
                will-change: transform, opacity;
            }

            .landing-text-absolute {
                position: absolute;
                inset: 0;
            }

            .landing-text-heading {
                font-size: 2rem;
                margin: 0 0 1rem;
            }

            .landing-text-body {
                font-size: 1.125rem;
                line-height: 1.6;
                margin: 0 0 2rem;
            }

            /* Not found */
            .landing-not-found-body {
                text-align: center;
                padding: 2rem;
            }

            .landing-not-found-icon {
                width: 6rem;
                height: 6rem;
            }

            .landing-not-found-code {
                font-size: 4rem;
                margin: 1rem 0;
            }

            .landing-btn-primary {
                display: inline-block;
                padding: 1rem 2rem;
                font-weight: 600;
                color: #1d1d1b;
                background-color: #e2b238;
                border-radius: 0.75rem;
                text-decoration: none;
                transition: transform 0.3s;
            }
            .landing-btn-primary:hover {
                transform: scale(1.05);
            }

            @media (max-width: 900px) {
                .landing-planet-stage {
                    grid-template-columns: 1fr;
                    align-content: center;
                }
                .landing-planet-container {
                    transform: scale(0.6);
                    margin: -100px 0;
                }
            }
            "#
        </style>
    }
}
