//! Landing-page hero: copy, kicker, and the status panel mock.

use leptos::prelude::*;

use crate::auth::facade::{SignInButton, SignedIn, SignedOut};

/// Pill-shaped kicker above the hero headline.
#[component]
pub fn HeroKicker(children: Children) -> impl IntoView {
    view! { <span class="hero-kicker">{children()}</span> }
}

/// Headline and subcopy for the landing hero.
#[component]
pub fn HeroCopy() -> impl IntoView {
    view! {
        <div class="hero-copy">
            <HeroKicker>"Mission Control"</HeroKicker>
            <h1 class="hero-copy__headline">
                "Orchestrate work without" <br/> "the daily status chase."
            </h1>
            <p class="hero-copy__sub">
                "OpenClaw keeps every task, agent, and delivery signal in one place \
                 so teams can spot momentum shifts fast."
            </p>
        </div>
    }
}

/// Full hero section with the sign-in call to action and a status panel
/// mock on the right.
#[component]
pub fn LandingHero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__copy">
                <HeroCopy/>
                <div class="hero__cta">
                    <SignedOut>
                        <SignInButton
                            redirect_url="/boards".to_owned()
                            label="Sign in to open mission control".to_owned()
                        />
                    </SignedOut>
                    <SignedIn>
                        <p class="hero__signed-in">
                            "You're signed in. "
                            <a href="/boards">"Open your boards"</a>
                            " when you're ready."
                        </p>
                    </SignedIn>
                </div>
                <p class="hero__tagline">"One login · clear ownership · faster decisions"</p>
            </div>

            <div class="hero__panel glass-panel">
                <div class="hero__panel-head">
                    <span>"Status"</span>
                    <span class="hero__panel-live">"Live"</span>
                </div>
                <p class="hero__panel-title">"Tasks claimed automatically"</p>
                <p class="hero__panel-sub">
                    "Agents pick the next task in queue, report progress, and ship \
                     deliverables back to you."
                </p>
                <div class="hero__panel-grid">
                    <span class="hero__panel-cell">"Assignments"</span>
                    <span class="hero__panel-cell">"In review"</span>
                    <span class="hero__panel-cell">"Delivered"</span>
                    <span class="hero__panel-cell">"Signals"</span>
                </div>
            </div>
        </section>
    }
}
