use tracing::debug;

use crate::{
    catalog::{Project, ProjectImage},
    hit::ClickRegion,
};

// GalleryModal
//
// the project detail overlay: closed, or open on exactly one project.  the
// selection is left in place on close since nothing reads it while closed
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GalleryModal {
    selected: Option<Project>,
    open: bool,
}

// what the overlay renders while open
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModalView<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub images: &'a [ProjectImage],
}

impl GalleryModal {
    pub fn open(&mut self, project: &Project) {
        debug!({ project = %project.id }, "opening project modal");

        self.selected = Some(project.clone());
        self.open = true;
    }

    pub fn close(&mut self) {
        if self.open {
            debug!("closing project modal");
        }
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open && self.selected.is_some()
    }

    pub fn current(&self) -> Option<&Project> {
        match self.open {
            true => self.selected.as_ref(),
            false => None,
        }
    }

    pub fn view(&self) -> Option<ModalView<'_>> {
        self.current().map(|project| ModalView {
            title: &project.title,
            description: &project.description,
            images: &project.images,
        })
    }

    // clicks on the backdrop close, clicks inside the content panel never do;
    // returns whether the modal closed
    pub fn on_click(&mut self, region: ClickRegion) -> bool {
        match region {
            ClickRegion::Outside if self.is_open() => {
                self.close();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProjectId;

    fn project(id: &str) -> Project {
        Project {
            id: ProjectId::new(id),
            title: format!("{id} title"),
            description: format!("{id} description"),
            images: vec![
                ProjectImage {
                    src: format!("{id}/hero.png"),
                    caption: "hero".to_owned(),
                },
                ProjectImage {
                    src: format!("{id}/footer.png"),
                    caption: "footer".to_owned(),
                },
            ],
        }
    }

    #[test]
    fn starts_closed() {
        let modal = GalleryModal::default();

        assert!(!modal.is_open());
        assert!(modal.view().is_none());
    }

    #[test]
    fn view_exposes_ordered_images() {
        let mut modal = GalleryModal::default();
        modal.open(&project("hype"));

        let view = modal.view().unwrap();
        assert_eq!(view.title, "hype title");
        assert_eq!(view.description, "hype description");
        let captions: Vec<&str> = view.images.iter().map(|i| i.caption.as_str()).collect();
        assert_eq!(captions, vec!["hero", "footer"]);
    }

    #[test]
    fn close_hides_but_reopen_replaces() {
        let mut modal = GalleryModal::default();

        modal.open(&project("a"));
        modal.close();
        assert!(modal.current().is_none());

        modal.open(&project("b"));
        assert_eq!(modal.current().unwrap().id, ProjectId::new("b"));
        assert_eq!(modal.view().unwrap().images[0].src, "b/hero.png");
    }

    #[test]
    fn only_backdrop_clicks_close() {
        let mut modal = GalleryModal::default();
        modal.open(&project("a"));

        assert!(!modal.on_click(ClickRegion::Inside));
        assert!(modal.is_open());

        assert!(modal.on_click(ClickRegion::Outside));
        assert!(!modal.is_open());

        assert!(!modal.on_click(ClickRegion::Outside));
    }
}
