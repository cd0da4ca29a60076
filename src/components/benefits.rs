// src/components/benefits.rs
use std::rc::Rc;

use yew::prelude::*;

use crate::content::Benefit;

#[derive(Properties, PartialEq)]
pub struct BenefitsProps {
    pub benefits: Rc<[Benefit]>,
}

#[function_component(Benefits)]
pub fn benefits(props: &BenefitsProps) -> Html {
    html! {
        <section class="section alt">
          <div class="container">
            <h3 class="section-title">{ "Why Convert to Components?" }</h3>
            <div class="grid three">
              { for props.benefits.iter().map(|b| html!{
                  <div class="card benefit">
                    <div class={classes!("benefit-icon", b.icon.accent_class())}>{ b.icon.glyph() }</div>
                    <h4 class="card-title">{ b.title.clone() }</h4>
                    <p class="muted">{ b.description.clone() }</p>
                  </div>
              })}
            </div>
          </div>
        </section>
    }
}
