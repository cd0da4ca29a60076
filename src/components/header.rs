// src/components/header.rs
use yew::prelude::*;

use crate::content::Icon;
use crate::theme::DisplayModePreference;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: AttrValue,
    pub tagline: AttrValue,
    pub theme: DisplayModePreference,
    pub on_toggle_theme: Callback<MouseEvent>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="topbar">
          <div class="container toprow">
            <div class="brand">
              <div class="brand-mark">{ Icon::Rocket.glyph() }</div>
              <div>
                <h1 class="brand-title gradient-text">{ props.title.clone() }</h1>
                <p class="muted small">{ props.tagline.clone() }</p>
              </div>
            </div>
            <button
              class="theme-toggle"
              title={props.theme.toggle_label()}
              onclick={props.on_toggle_theme.clone()}
            >
              { props.theme.toggle_glyph() }
            </button>
          </div>
        </header>
    }
}
