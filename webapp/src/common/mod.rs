pub mod dom;
pub mod storage;
pub mod style;

use std::rc::Rc;

use chrono::{Datelike, Local};
use tracing::error;

use folio_common::{
    config::{Site, read_config},
    view::ViewStateController,
};

use dom::DocumentRoot;
use storage::LocalPreferenceStore;

pub type ViewController = ViewStateController<LocalPreferenceStore, DocumentRoot>;

const SITE_TOML: &str = include_str!("../../site.toml");

pub fn load_site() -> Option<Rc<Site>> {
    match read_config(SITE_TOML) {
        Ok(site) => Some(Rc::new(site)),
        Err(err) => {
            error!("failed to load site content: {err}");
            None
        }
    }
}

pub fn current_year() -> i32 {
    Local::now().year()
}
