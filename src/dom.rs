// src/dom.rs
use gloo::console::{error, log};
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};

use crate::content::{parse_content, PageContent};

/// `<script id="page-content" type="application/json">` in index.html, if any.
pub const CONTENT_SCRIPT_ID: &str = "page-content";

pub const TUTORIAL_SECTION_ID: &str = "tutorial";
pub const EXAMPLES_SECTION_ID: &str = "examples";

fn document() -> Result<web_sys::Document, String> {
    window()
        .ok_or("no window")?
        .document()
        .ok_or_else(|| "no document".to_string())
}

pub fn scroll_to_section(id: &str) -> Result<(), String> {
    let el = document()?
        .get_element_by_id(id)
        .ok_or_else(|| format!("missing section #{id}"))?;
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
    Ok(())
}

/// Text of the embedded content script. `Ok(None)` when the page doesn't carry one.
pub fn embedded_content_json() -> Result<Option<String>, String> {
    let Some(el) = document()?.get_element_by_id(CONTENT_SCRIPT_ID) else {
        return Ok(None);
    };
    let text = el.text_content().unwrap_or_default();
    if text.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(text))
}

/// Built-in content unless index.html embeds a valid override.
pub fn load_page_content() -> PageContent {
    match embedded_content_json() {
        Ok(Some(json)) => match parse_content(&json) {
            Ok(content) => {
                log!(format!(
                    "Loaded embedded page content: {} steps",
                    content.steps.len()
                ));
                content
            }
            Err(e) => {
                error!(format!("{e}; using built-in content"));
                PageContent::default()
            }
        },
        Ok(None) => PageContent::default(),
        Err(e) => {
            error!(format!("Could not read embedded content: {e}"));
            PageContent::default()
        }
    }
}
