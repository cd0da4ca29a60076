// src/components/tutorial.rs
use yew::prelude::*;

use crate::content::Icon;
use crate::dom::TUTORIAL_SECTION_ID;
use crate::wizard::StepWizard;

#[derive(Properties, PartialEq)]
pub struct TutorialProps {
    pub wizard: StepWizard,
    pub on_go_to: Callback<usize>,
    pub on_previous: Callback<MouseEvent>,
    pub on_next: Callback<MouseEvent>,
}

#[function_component(Tutorial)]
pub fn tutorial(props: &TutorialProps) -> Html {
    let wizard = &props.wizard;
    let step = wizard.current();

    // One selector button per step, labeled "Step N".
    let selectors = wizard.steps().iter().enumerate().map(|(i, _)| {
        let on_go_to = props.on_go_to.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_go_to.emit(i));
        let active = i == wizard.index();
        html! {
            <button class={classes!("step-chip", active.then_some("active"))} {onclick}>
              { format!("Step {}", i + 1) }
            </button>
        }
    });

    html! {
        <section id={TUTORIAL_SECTION_ID} class="section">
          <div class="container">
            <h3 class="section-title">{ "Step-by-Step Tutorial" }</h3>

            <div class="step-nav">
              { for selectors }
            </div>

            <div class="card step-card">
              <div class="step-head">
                <div class="step-icon">{ step.icon.glyph() }</div>
                <div>
                  <div class="faint small">{ wizard.progress_label() }</div>
                  <h4 class="step-title">{ step.title.clone() }</h4>
                  <p class="muted">{ step.description.clone() }</p>
                </div>
              </div>

              <ul class="checklist">
                { for step.details.iter().map(|d| html!{
                    <li>
                      <span class="check">{ Icon::CheckCircle.glyph() }</span>
                      <span>{ d.clone() }</span>
                    </li>
                })}
              </ul>

              <div class="btn-row spread">
                <button
                  class="btn ghost"
                  disabled={wizard.is_first()}
                  onclick={props.on_previous.clone()}
                >
                  { "Previous" }
                </button>
                <button
                  class="btn primary"
                  disabled={wizard.is_last()}
                  onclick={props.on_next.clone()}
                >
                  <span>{ "Next" }</span>
                  <span class="arrow">{ Icon::ArrowRight.glyph() }</span>
                </button>
              </div>
            </div>
          </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    async fn render_at(index: usize) -> String {
        ServerRenderer::<Tutorial>::with_props(move || {
            let mut wizard = StepWizard::default();
            wizard.go_to(index);
            TutorialProps {
                wizard,
                on_go_to: Callback::noop(),
                on_previous: Callback::noop(),
                on_next: Callback::noop(),
            }
        })
        .hydratable(false)
        .render()
        .await
    }

    /// Opening `<button ...>` tag of the button whose content starts with `content`.
    fn button_tag<'a>(html: &'a str, content: &str) -> &'a str {
        let at = html
            .find(content)
            .unwrap_or_else(|| panic!("{content:?} not rendered"));
        let start = html[..at].rfind("<button").expect("no button before content");
        let end = start + html[start..].find('>').expect("unterminated tag");
        &html[start..=end]
    }

    #[tokio::test]
    async fn one_selector_per_step() {
        let html = render_at(0).await;
        for n in 1..=6 {
            button_tag(&html, &format!(">Step {n}</button>"));
        }
        assert!(!html.contains(">Step 7</button>"));
    }

    #[tokio::test]
    async fn first_step_disables_previous_only() {
        let html = render_at(0).await;
        assert!(button_tag(&html, ">Previous<").contains("disabled"));
        assert!(!button_tag(&html, "<span>Next</span>").contains("disabled"));
        assert!(button_tag(&html, ">Step 1</button>").contains("active"));
        assert!(!button_tag(&html, ">Step 2</button>").contains("active"));
        assert!(html.contains("Analyze Your Static Project"));
    }

    #[tokio::test]
    async fn last_step_disables_next_only() {
        let html = render_at(5).await;
        assert!(!button_tag(&html, ">Previous<").contains("disabled"));
        assert!(button_tag(&html, "<span>Next</span>").contains("disabled"));
        assert!(button_tag(&html, ">Step 6</button>").contains("active"));
        assert!(!button_tag(&html, ">Step 1</button>").contains("active"));
        assert!(html.contains("Step 6 of 6"));
    }

    #[tokio::test]
    async fn middle_step_enables_both() {
        let html = render_at(3).await;
        assert!(!button_tag(&html, ">Previous<").contains("disabled"));
        assert!(!button_tag(&html, "<span>Next</span>").contains("disabled"));
        assert!(button_tag(&html, ">Step 4</button>").contains("active"));
    }
}
