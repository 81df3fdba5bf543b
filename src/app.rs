use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::dom;
use crate::storage::BrowserStorage;
use crate::suggest;
use crate::theme::ThemeManager;

/// Page entry point: logging, config, then the theme and suggestion bindings.
pub fn start() {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let loaded = Config::from_page(&doc);
    let config = loaded.clone().unwrap_or_default();
    crate::logging::init(&config.log_level);
    if let Err(e) = loaded {
        warn!("Ignoring #{}: {}", crate::config::CONFIG_ELEMENT_ID, e);
    }

    attach_theme_controls(&doc, &config.selectors.theme_control);
    suggest::attach(&doc, &config.selectors, config.suggest.clone());
}

fn attach_theme_controls(doc: &web_sys::Document, selector: &str) {
    let Some(root) = doc.document_element() else {
        return;
    };

    let manager = Rc::new(RefCell::new(ThemeManager::init(BrowserStorage::open(), root)));
    info!("Theme: {}", manager.borrow().current());

    let controls = dom::query_all(doc, selector);
    debug!("Found {} theme controls", controls.len());

    for control in controls {
        let manager = Rc::clone(&manager);
        let el = control.clone();
        dom::listen(&control, "click", move |_| {
            let identifier = el.get_attribute("data-theme").unwrap_or_default();
            let theme = manager.borrow_mut().select(&identifier);
            debug!("Theme switched to {}", theme);
        });
    }
}
