use super::*;

pub(super) fn document() -> Result<Document, String> {
    web_sys::window()
        .ok_or_else(|| "window is unavailable".to_string())?
        .document()
        .ok_or_else(|| "document is unavailable".to_string())
}

pub(super) fn node_list_elements(list: web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub(super) fn query_document(document: &Document, selector: &str) -> Vec<Element> {
    match document.query_selector_all(selector) {
        Ok(list) => node_list_elements(list),
        Err(_) => {
            log::warn!("ignoring invalid selector `{selector}`");
            Vec::new()
        }
    }
}

pub(super) fn query_within(root: &Element, selector: &str) -> Vec<Element> {
    match root.query_selector_all(selector) {
        Ok(list) => node_list_elements(list),
        Err(_) => {
            log::warn!("ignoring invalid selector `{selector}`");
            Vec::new()
        }
    }
}

pub(super) fn first_within(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

pub(super) fn create_html_element(document: &Document, tag: &str) -> Result<HtmlElement, String> {
    document
        .create_element(tag)
        .map_err(|_| format!("failed to create {tag} element"))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| format!("{tag} element is not HtmlElement"))
}

pub(super) fn apply_style(element: &HtmlElement, style: &[(&str, &str)]) -> Result<(), String> {
    let declaration = element.style();
    for (property, value) in style {
        declaration
            .set_property(property, value)
            .map_err(|_| format!("failed to set style {property}"))?;
    }
    Ok(())
}

/// Runs `callback` once after `delay_ms`. The timer is never cancelled.
pub(super) fn run_later(delay_ms: u32, callback: impl FnOnce() + 'static) {
    Timeout::new(delay_ms, callback).forget();
}

/// Looks up a constructor on `window.bootstrap`, if the page loaded it.
pub(super) fn bootstrap_constructor(name: &str) -> Option<js_sys::Function> {
    let window = web_sys::window()?;
    let bootstrap = js_sys::Reflect::get(&window, &JsValue::from_str(BOOTSTRAP_GLOBAL)).ok()?;
    if bootstrap.is_undefined() || bootstrap.is_null() {
        return None;
    }
    js_sys::Reflect::get(&bootstrap, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()
}

pub(super) fn construct_with_element(
    constructor: &js_sys::Function,
    element: &Element,
) -> Result<JsValue, String> {
    js_sys::Reflect::construct(constructor, &js_sys::Array::of1(element))
        .map(JsValue::from)
        .map_err(|error| format!("bootstrap constructor failed: {error:?}"))
}
