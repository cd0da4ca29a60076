// src/app.rs
use std::rc::Rc;

use gloo::console::error;
use yew::prelude::*;

use crate::components::{Benefits, CodeCompare, Footer, Header, Hero, Tutorial};
use crate::content::{Benefit, CodeSample, PageCopy, TutorialStep};
use crate::dom::{self, EXAMPLES_SECTION_ID, TUTORIAL_SECTION_ID};
use crate::theme::DisplayModePreference;
use crate::wizard::StepWizard;

/// Content split into shared slices so section props compare cheaply.
struct LoadedPage {
    copy: PageCopy,
    steps: Rc<[TutorialStep]>,
    benefits: Rc<[Benefit]>,
    samples: Rc<[CodeSample]>,
}

fn load_page() -> LoadedPage {
    let content = dom::load_page_content();
    LoadedPage {
        copy: content.copy,
        steps: content.steps.into(),
        benefits: content.benefits.into(),
        samples: content.samples.into(),
    }
}

fn scroll_callback(id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_| {
        if let Err(e) = dom::scroll_to_section(id) {
            error!(e);
        }
    })
}

#[function_component(App)]
pub fn app() -> Html {
    let page = use_memo((), |_| load_page());

    let theme = use_state(DisplayModePreference::default);
    let wizard = {
        let steps = page.steps.clone();
        use_state(move || {
            StepWizard::new(steps).unwrap_or_else(|e| {
                error!(format!("{e}; falling back to built-in steps"));
                StepWizard::default()
            })
        })
    };

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *theme;
            next.toggle();
            theme.set(next);
        })
    };

    let on_go_to = {
        let wizard = wizard.clone();
        Callback::from(move |index: usize| {
            let mut next = (*wizard).clone();
            next.go_to(index);
            wizard.set(next);
        })
    };

    let on_next = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*wizard).clone();
            next.next();
            wizard.set(next);
        })
    };

    let on_previous = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*wizard).clone();
            next.previous();
            wizard.set(next);
        })
    };

    let copy = &page.copy;

    html! {
        <div class={classes!("page", theme.theme_class())}>
          <Header
            title={copy.title.clone()}
            tagline={copy.tagline.clone()}
            theme={*theme}
            {on_toggle_theme}
          />
          <Hero
            headline={copy.headline.clone()}
            lead={copy.lead.clone()}
            on_start={scroll_callback(TUTORIAL_SECTION_ID)}
            on_examples={scroll_callback(EXAMPLES_SECTION_ID)}
          />
          <Benefits benefits={page.benefits.clone()} />
          <Tutorial
            wizard={(*wizard).clone()}
            {on_go_to}
            {on_previous}
            {on_next}
          />
          <CodeCompare samples={page.samples.clone()} />
          <Footer
            title={copy.footer_title.clone()}
            tagline={copy.footer_tagline.clone()}
            credits={copy.credits.clone()}
          />
        </div>
    }
}
