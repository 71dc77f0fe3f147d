use newsboard_client::HttpApi;

mod ui;
mod util;

lazy_static::lazy_static! {
    // The API lives on the same origin as the pages, so session cookies come along
    static ref API: HttpApi = HttpApi::new(util::origin());
}

fn main() {
    tracing_wasm::set_as_global_default();
    yew::Renderer::<ui::CommentPage>::new().render();
}
