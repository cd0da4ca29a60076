// src/main.rs — Static to Yew (Rust + Yew + WASM)
// One page: hero, benefit cards, a step-by-step migration tutorial and a
// before/after code comparison. State is local to the page (step index and
// dark/light preference) and is never persisted.

mod app;
mod components;
mod content;
mod dom;
mod theme;
mod wizard;

fn main() {
    yew::Renderer::<app::App>::new().render();
}
