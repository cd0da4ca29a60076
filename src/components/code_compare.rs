// src/components/code_compare.rs
use std::rc::Rc;

use yew::prelude::*;

use crate::content::{CodeSample, Verdict};
use crate::dom::EXAMPLES_SECTION_ID;

#[derive(Properties, PartialEq)]
pub struct CodeCompareProps {
    pub samples: Rc<[CodeSample]>,
}

#[function_component(CodeCompare)]
pub fn code_compare(props: &CodeCompareProps) -> Html {
    html! {
        <section id={EXAMPLES_SECTION_ID} class="section alt">
          <div class="container">
            <h3 class="section-title">{ "Before & After Example" }</h3>
            <div class="grid two">
              { for props.samples.iter().map(|s| {
                  let tone = match s.verdict {
                      Verdict::Before => "bad",
                      Verdict::After => "good",
                  };
                  html!{
                    <div class="card">
                      <h4 class={classes!("card-title", tone)}>
                        { format!("{} {}", s.verdict.mark(), s.heading) }
                      </h4>
                      <pre class="code"><code class={format!("language-{}", s.language)}>{ s.code.clone() }</code></pre>
                    </div>
                  }
              })}
            </div>
          </div>
        </section>
    }
}
