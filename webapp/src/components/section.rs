use dioxus::prelude::*;

use folio_common::section::Section;

use crate::common::ViewController;

#[derive(Clone, PartialEq, Props)]
pub struct RevealSectionProps {
    section: Section,
    title: String,
    children: Element,
}

// a page section that fades in once its reveal flag is set
#[component]
pub fn RevealSection(props: RevealSectionProps) -> Element {
    let section = props.section;

    let view = use_context::<Signal<ViewController>>();
    let revealed = view.read().is_revealed(section);

    rsx! {
        section {
            id: section.id(),
            class: if revealed { "page-section reveal revealed" } else { "page-section reveal" },
            h2 { class: "section-title", "{props.title}" }
            {props.children}
        }
    }
}
