//! Portfolio page: the single route of the site.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the loaded content and composes hero, skills, projects, experience,
//! and footer. Projects are split into a featured grid and a standard grid,
//! each keeping document order. The footer year is read from the clock here
//! and nowhere else.

#[cfg(test)]
#[path = "portfolio_test.rs"]
mod portfolio_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_meta::{Meta, Title};

use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::project_card::ProjectCard;
use crate::components::section::Section;
use crate::components::skill_card::SkillCard;
use crate::components::timeline::Timeline;
use crate::content::{self, Content, Project};
use crate::util::clock::current_year;

/// Page title shown in the browser tab.
#[must_use]
pub fn page_title(owner: &str) -> String {
    format!("{owner} · Portfolio")
}

/// Route-level page backed by the embedded content document.
#[component]
pub fn PortfolioPage() -> impl IntoView {
    match content::embedded() {
        Ok(content) => view! {
            <Title text=page_title(&content.profile.name)/>
            <Meta name="description" content=content.profile.summary.clone()/>
            <Portfolio content=content.clone() year=current_year()/>
        }
        .into_any(),
        Err(err) => {
            let message = format!("Portfolio content is unavailable: {err}");
            view! { <p class="content-error">{message}</p> }.into_any()
        }
    }
}

/// Page body for `content`, with `year` in the footer.
#[component]
pub fn Portfolio(content: Content, year: i32) -> impl IntoView {
    let (featured, standard) = {
        let (featured, standard) = content.partition_projects();
        (project_cards(&featured, true), project_cards(&standard, false))
    };
    let Content { profile, skills, timeline, .. } = content;
    let owner = profile.name.clone();
    let credit = profile.credit.clone();

    view! {
        <div class="page">
            <Hero profile=profile/>
            <main class="page__body">
                <Section id="skills" title="Technical Expertise">
                    <div class="grid grid--skills">
                        {skills
                            .into_iter()
                            .map(|g| view! { <SkillCard title=g.title icon=g.icon items=g.items/> })
                            .collect_view()}
                    </div>
                </Section>
                <Section id="projects" title="Featured Projects">
                    <div class="grid grid--featured">{featured}</div>
                    <h3 class="section__subtitle">"Other Projects"</h3>
                    <div class="grid grid--projects">{standard}</div>
                </Section>
                <Section id="experience" title="Professional Journey">
                    <Timeline entries=timeline/>
                </Section>
                <Footer year=year owner=owner credit=credit/>
            </main>
        </div>
    }
}

/// Cards for one grid tier; indices restart at zero per tier.
fn project_cards(projects: &[&Project], featured: bool) -> impl IntoView + use<> {
    projects
        .iter()
        .enumerate()
        .map(|(index, project)| {
            view! { <ProjectCard project=(*project).clone() index=index featured=featured/> }
        })
        .collect_view()
}
