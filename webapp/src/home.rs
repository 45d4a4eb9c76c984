use std::rc::Rc;

use dioxus::prelude::*;

use folio_common::{config::Site, section::Section};

#[component]
pub fn Hero() -> Element {
    let site = use_context::<Rc<Site>>();
    let config = &site.config;

    rsx! {
        section { id: Section::Home.id(), class: "hero",
            img {
                class: "profile-picture",
                src: config.profile_image.clone(),
                alt: "Profile Picture",
            }
            div {
                h2 { class: "hero-headline", "{config.headline}" }
                if !config.tagline.is_empty() {
                    p { class: "hero-tagline", "{config.tagline}" }
                }
            }
        }
    }
}
