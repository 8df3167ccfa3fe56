//! Browser bindings: `document.cookie`, real DOM containers, console logging, and the
//! exported `start()` entry point.

use hrms_business::{BusinessConfig, CookieStore, UserListError, UserListResult};
use log::{Level, error};
use wasm_bindgen::prelude::*;

use crate::config::UiConfig;
use crate::dom::{Container, Document, Node};

/// Reads `document.cookie`.
#[derive(Debug, Clone)]
pub struct BrowserCookies {
    document: web_sys::HtmlDocument,
}

impl BrowserCookies {
    pub fn new(document: &web_sys::Document) -> Option<Self> {
        document
            .clone()
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()
            .map(|document| Self { document })
    }
}

impl CookieStore for BrowserCookies {
    fn cookie_string(&self) -> Option<String> {
        self.document.cookie().ok()
    }
}

/// [`Document`] backed by `window.document`.
#[derive(Debug, Clone)]
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }
}

impl Document for WebDocument {
    type Container<'a> = WebContainer;

    fn container_by_id(&mut self, id: &str) -> Option<Self::Container<'_>> {
        self.document
            .get_element_by_id(id)
            .map(|element| WebContainer {
                element,
                document: self.document.clone(),
            })
    }
}

pub struct WebContainer {
    element: web_sys::Element,
    document: web_sys::Document,
}

impl Container for WebContainer {
    fn clear(&mut self) {
        self.element.set_inner_html("");
    }

    fn append(&mut self, node: &Node) -> UserListResult<()> {
        let built = build_node(&self.document, node).map_err(js_error)?;
        self.element.append_child(&built).map_err(js_error)?;
        Ok(())
    }
}

fn build_node(document: &web_sys::Document, node: &Node) -> Result<web_sys::Node, JsValue> {
    match node {
        Node::Text(text) => Ok(document.create_text_node(text).into()),
        Node::Element(el) => {
            let element = document.create_element(el.tag)?;
            if let Some(class) = el.class {
                element.set_class_name(class);
            }
            for child in &el.children {
                element.append_child(&build_node(document, child)?)?;
            }
            Ok(element.into())
        }
    }
}

fn js_error(value: JsValue) -> UserListError {
    let message = value
        .dyn_ref::<web_sys::js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"));
    UserListError::Render(message)
}

/// Renders the user list into `#user-list` of the current page.
///
/// Call once the DOM is ready (for example from a `DOMContentLoaded` listener or a module
/// script at the end of `<body>`).
#[wasm_bindgen]
pub fn start() {
    if let Err(err) = console_log::init_with_level(Level::Info) {
        log::debug!("Console logger already installed: {err}");
    }

    let Some(window) = web_sys::window() else {
        error!("Error fetching users: no window");
        return;
    };
    let Some(document) = window.document() else {
        error!("Error fetching users: no document");
        return;
    };

    // The endpoint is same-origin; reqwest needs an absolute URL.
    let origin = window.location().origin().unwrap_or_default();
    let config = UiConfig::new(BusinessConfig::new(origin));

    let Some(cookies) = BrowserCookies::new(&document) else {
        error!("Error fetching users: document has no cookie access");
        return;
    };

    wasm_bindgen_futures::spawn_local(async move {
        let mut document = WebDocument::new(document);
        if let Err(err) = crate::run_user_list(&config, cookies, &mut document).await {
            error!("User list not rendered: {err}");
        }
    });
}
