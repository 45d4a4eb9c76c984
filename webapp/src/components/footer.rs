use dioxus::prelude::*;

use crate::common::current_year;

#[derive(Clone, PartialEq, Props)]
pub struct FooterProps {
    owner: String,
}

#[component]
pub fn Footer(props: FooterProps) -> Element {
    let year = current_year();

    rsx! {
        footer { class: "site-footer",
            p { "© {year} {props.owner}. All rights reserved." }
        }
    }
}
