use std::rc::Rc;

use dioxus::prelude::*;

use folio_common::{catalog::Project, config::Site, section::Section};

use crate::components::{modal::PROJECT_MODAL, section::RevealSection};

#[derive(Clone, PartialEq, Props)]
struct ProjectCardProps {
    project: Project,
}

#[component]
fn ProjectCard(props: ProjectCardProps) -> Element {
    let project = props.project;

    rsx! {
        div { class: "project-card",
            div { class: "project-cover",
                if let Some(cover) = project.cover() {
                    img { src: cover.src.clone(), alt: project.title.clone() }
                }
            }
            div { class: "project-body",
                h3 { class: "project-title", "{project.title}" }
                p { class: "project-description", "{project.description}" }
                button {
                    class: "btn-outline",
                    onclick: {
                        let project = project.clone();
                        move |_| PROJECT_MODAL.with_mut(|modal| modal.open(&project))
                    },
                    "View More"
                }
            }
        }
    }
}

#[component]
pub fn Work() -> Element {
    let site = use_context::<Rc<Site>>();

    rsx! {
        RevealSection { section: Section::Work, title: "Work",
            if !site.catalog.is_empty() {
                div { class: "project-grid",
                    for project in site.catalog.iter() {
                        ProjectCard { key: "{project.id}", project: project.clone() }
                    }
                }
            }
            if !site.config.work_links.is_empty() {
                div { class: "work-links",
                    for link in site.config.work_links.iter() {
                        a {
                            key: "{link.href}",
                            class: "btn-pill",
                            href: link.href.clone(),
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{link.label}"
                        }
                    }
                }
            }
        }
    }
}
