use newsboard_client::api::Navigation;
use wasm_bindgen::JsValue;
use yew::Html;

fn window() -> web_sys::Window {
    web_sys::window().expect("running outside of a browser window")
}

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{e:?}")
}

pub fn origin() -> String {
    window().location().origin().unwrap_or_default()
}

/// Current page, in the form login redirects expect as their `goto`
pub fn current_goto() -> String {
    let location = window().location();
    let path = location.pathname().unwrap_or_default();
    let search = location.search().unwrap_or_default();
    format!("{}{}", path.trim_start_matches('/'), search)
}

pub fn query_param(name: &str) -> Option<String> {
    let search = window().location().search().ok()?;
    web_sys::UrlSearchParams::new_with_str(&search)
        .ok()?
        .get(name)
}

pub fn navigate(nav: &Navigation) {
    let url = nav.to_url();
    tracing::debug!(%url, "navigating away");
    if let Err(err) = window().location().set_href(&url).map_err(js_err) {
        tracing::error!(?err, %url, "failed to navigate");
    }
}

/// Inserts server-rendered markup as-is
pub fn raw_html(markup: &str) -> Html {
    let span = window()
        .document()
        .expect("window without a document")
        .create_element("span")
        .expect("failed creating span element");
    span.set_inner_html(markup);
    Html::VRef(span.into())
}
