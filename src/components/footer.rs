// src/components/footer.rs
use yew::prelude::*;

use crate::content::Icon;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub title: AttrValue,
    pub tagline: AttrValue,
    pub credits: AttrValue,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="footer">
          <div class="container center">
            <div class="brand center">
              <div class="brand-mark small-mark">{ Icon::Rocket.glyph() }</div>
              <h5 class="footer-title">{ props.title.clone() }</h5>
            </div>
            <p class="muted">{ props.tagline.clone() }</p>
            <p class="faint small">{ props.credits.clone() }</p>
          </div>
        </footer>
    }
}
