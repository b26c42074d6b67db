//! Locating the container the page mounts into.

use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MountError {
    #[error("no global `window`")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element with id `{0}`")]
    MissingRoot(String),
    #[error("element `{0}` is not an HTML element")]
    NotHtmlElement(String),
}

/// The host document's element with the given id.
pub fn root_element(id: &str) -> Result<HtmlElement, MountError> {
    let document = web_sys::window()
        .ok_or(MountError::NoWindow)?
        .document()
        .ok_or(MountError::NoDocument)?;
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| MountError::MissingRoot(id.to_string()))?;
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| MountError::NotHtmlElement(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_id() {
        assert_eq!(
            MountError::MissingRoot("root".into()).to_string(),
            "no element with id `root`"
        );
        assert_eq!(
            MountError::NotHtmlElement("root".into()).to_string(),
            "element `root` is not an HTML element"
        );
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn missing_root_is_reported() {
        assert_eq!(
            root_element("no-such-root").unwrap_err(),
            MountError::MissingRoot("no-such-root".into())
        );
    }

    #[wasm_bindgen_test]
    fn finds_existing_root() {
        let document = web_sys::window().unwrap().document().unwrap();
        let div = document.create_element("div").unwrap();
        div.set_id("mount-test-root");
        document.body().unwrap().append_child(&div).unwrap();

        assert!(root_element("mount-test-root").is_ok());
    }
}
