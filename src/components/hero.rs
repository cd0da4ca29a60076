// src/components/hero.rs
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub headline: AttrValue,
    pub lead: AttrValue,
    pub on_start: Callback<MouseEvent>,
    pub on_examples: Callback<MouseEvent>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    html! {
        <section class="hero">
          <div class="hero-glow" aria-hidden="true"></div>
          <div class="container hero-body">
            <h2 class="hero-title gradient-text">{ props.headline.clone() }</h2>
            <p class="hero-lead muted">{ props.lead.clone() }</p>
            <div class="btn-row center">
              <button class="btn primary" onclick={props.on_start.clone()}>{ "Start Tutorial" }</button>
              <button class="btn ghost" onclick={props.on_examples.clone()}>{ "View Examples" }</button>
            </div>
          </div>
        </section>
    }
}
