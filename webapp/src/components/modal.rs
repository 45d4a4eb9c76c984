use dioxus::prelude::*;

use folio_common::{
    hit::{ClickRegion, Point},
    modal::GalleryModal,
};

use crate::common::dom::element_rect;

pub static PROJECT_MODAL: GlobalSignal<GalleryModal> = Signal::global(GalleryModal::default);

const PANEL_ID: &str = "project-modal-panel";

// ProjectModal
//
// renders whatever project PROJECT_MODAL holds while it is open.  the
// overlay decides backdrop vs panel by hit testing the panel rectangle, so
// the panel itself needs no propagation handling
#[component]
pub fn ProjectModal() -> Element {
    let Some((title, description, images)) = PROJECT_MODAL.read().view().map(|view| {
        (
            view.title.to_owned(),
            view.description.to_owned(),
            view.images.to_vec(),
        )
    }) else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |evt: MouseEvent| {
                let coords = evt.client_coordinates();
                let region = ClickRegion::classify(
                    element_rect(PANEL_ID),
                    Point { x: coords.x, y: coords.y },
                );

                PROJECT_MODAL.with_mut(|modal| modal.on_click(region));
            },
            div { id: PANEL_ID, class: "modal-content",
                button {
                    class: "icon-button modal-close",
                    aria_label: "Close",
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        PROJECT_MODAL.with_mut(|modal| modal.close());
                    },
                    "×"
                }
                div { class: "modal-body",
                    h2 { class: "modal-title", "{title}" }
                    p { class: "modal-description", "{description}" }
                    div { class: "modal-gallery",
                        for (idx, image) in images.into_iter().enumerate() {
                            figure { key: "{idx}",
                                img { src: image.src, alt: image.caption.clone() }
                                figcaption { "{image.caption}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
