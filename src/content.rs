// src/content.rs
//! Page content: tutorial steps, benefit cards and the before/after snippets.
//!
//! Everything here is immutable once loaded. The built-in copy can be replaced
//! at build time by embedding a `PageContent` JSON document in `index.html`
//! (see [`crate::dom::embedded_content_json`]).

use serde::{Deserialize, Serialize};

/// Symbolic icon reference. Rendered as a glyph, so no icon font is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    FileText,
    Rocket,
    Code,
    Palette,
    Zap,
    Globe,
    Smartphone,
    CheckCircle,
    ArrowRight,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::FileText => "📄",
            Icon::Rocket => "🚀",
            Icon::Code => "💻",
            Icon::Palette => "🎨",
            Icon::Zap => "⚡",
            Icon::Globe => "🌐",
            Icon::Smartphone => "📱",
            Icon::CheckCircle => "✅",
            Icon::ArrowRight => "→",
        }
    }

    /// Accent color class used by benefit cards.
    pub fn accent_class(self) -> &'static str {
        match self {
            Icon::Zap => "accent-yellow",
            Icon::Smartphone | Icon::CheckCircle => "accent-green",
            Icon::Code | Icon::FileText => "accent-blue",
            Icon::Palette | Icon::Rocket | Icon::Globe | Icon::ArrowRight => "accent-purple",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutorialStep {
    pub title: String,
    pub description: String,
    pub icon: Icon,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Benefit {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Before,
    After,
}

impl Verdict {
    pub fn mark(self) -> &'static str {
        match self {
            Verdict::Before => "❌",
            Verdict::After => "✅",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeSample {
    pub heading: String,
    pub language: String,
    pub verdict: Verdict,
    pub code: String,
}

/// Free-standing page copy (header, hero, footer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageCopy {
    pub title: String,
    pub tagline: String,
    pub headline: String,
    pub lead: String,
    pub footer_title: String,
    pub footer_tagline: String,
    pub credits: String,
}

impl Default for PageCopy {
    fn default() -> Self {
        Self {
            title: "Static to Yew".into(),
            tagline: "Transform your static website into a modern component app".into(),
            headline: "Modernize Your Website".into(),
            lead: "Learn how to convert your static HTML/CSS website into a powerful, interactive \
                   component application with Rust, Yew and WebAssembly, using modern tooling and \
                   best practices."
                .into(),
            footer_title: "Static to Yew Tutorial".into(),
            footer_tagline: "Transform your static websites into modern component applications".into(),
            credits: "Built with Rust, Yew and WebAssembly".into(),
        }
    }
}

/// Everything the page renders. Missing fields in an override fall back to the built-in copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageContent {
    pub copy: PageCopy,
    pub steps: Vec<TutorialStep>,
    pub benefits: Vec<Benefit>,
    pub samples: Vec<CodeSample>,
}

impl Default for PageContent {
    fn default() -> Self {
        Self {
            copy: PageCopy::default(),
            steps: builtin_steps(),
            benefits: builtin_benefits(),
            samples: builtin_samples(),
        }
    }
}

/// Parse and validate an embedded content document.
pub fn parse_content(json: &str) -> Result<PageContent, String> {
    let content = serde_json::from_str::<PageContent>(json)
        .map_err(|e| format!("page content JSON parse error: {e}"))?;
    if content.steps.is_empty() {
        return Err("page content must contain at least one tutorial step".to_string());
    }
    Ok(content)
}

fn step(title: &str, description: &str, icon: Icon, details: &[&str]) -> TutorialStep {
    TutorialStep {
        title: title.to_string(),
        description: description.to_string(),
        icon,
        details: details.iter().map(|d| d.to_string()).collect(),
    }
}

fn builtin_steps() -> Vec<TutorialStep> {
    vec![
        step(
            "Analyze Your Static Project",
            "Examine your HTML structure, CSS styles, and JavaScript functionality",
            Icon::FileText,
            &[
                "Identify reusable components (header, footer, navigation)",
                "Map out page structure and routing needs",
                "List external dependencies and libraries",
                "Note interactive elements and JavaScript functionality",
            ],
        ),
        step(
            "Set Up Your Yew Environment",
            "Create a new Rust + Yew project with modern tooling",
            Icon::Rocket,
            &[
                "Run: rustup target add wasm32-unknown-unknown && cargo install trunk",
                "Add dependencies (yew with the csr feature, yew-router, gloo, web-sys)",
                "Create index.html as the Trunk entry point and run trunk serve",
                "Set up a folder structure for components and assets",
            ],
        ),
        step(
            "Convert HTML to html! Markup",
            "Transform your static HTML into Yew function components",
            Icon::Code,
            &[
                "Create a module for each major section of the page",
                "Move markup into html! and wrap text nodes in braces",
                "Split large pages into smaller, reusable components",
                "Describe component inputs with #[derive(Properties, PartialEq)] structs",
            ],
        ),
        step(
            "Migrate CSS Styles",
            "Adapt your styling approach for components",
            Icon::Palette,
            &[
                "Choose a styling method (plain stylesheet, stylist, Tailwind)",
                "Convert global styles to component-scoped class names",
                "Implement responsive design with modern CSS",
                "Add dark mode support with CSS variables",
            ],
        ),
        step(
            "Add Interactivity",
            "Enhance the page with component state and hooks",
            Icon::Zap,
            &[
                "Convert jQuery/vanilla JS handlers to Callbacks",
                "Implement state management (use_state, use_reducer, contexts)",
                "Add form handling and validation",
                "Create smooth animations and transitions",
            ],
        ),
        step(
            "Optimize & Deploy",
            "Polish your app and make it production-ready",
            Icon::Globe,
            &[
                "Optimize images and assets for web",
                "Build with trunk build --release and shrink the wasm bundle",
                "Add SEO meta tags and accessibility features",
                "Deploy the dist/ folder to any static host",
            ],
        ),
    ]
}

fn builtin_benefits() -> Vec<Benefit> {
    vec![
        Benefit {
            icon: Icon::Zap,
            title: "Better Performance".into(),
            description: "Virtual DOM diffing and compiled WebAssembly for lightning-fast user experiences"
                .into(),
        },
        Benefit {
            icon: Icon::Smartphone,
            title: "Mobile-First".into(),
            description: "Responsive design patterns and mobile optimization built-in".into(),
        },
        Benefit {
            icon: Icon::Code,
            title: "Maintainable Code".into(),
            description: "Component-based architecture makes your code easier to maintain and scale"
                .into(),
        },
    ]
}

const BEFORE_SNIPPET: &str = r##"<div class="header">
  <nav class="navbar">
    <ul>
      <li><a href="index.html">Home</a></li>
      <li><a href="about.html">About</a></li>
      <li><a href="contact.html">Contact</a></li>
    </ul>
  </nav>
</div>

<script>
  $('.menu-toggle').click(function() {
    $('.navbar').toggleClass('active');
  });
</script>"##;

const AFTER_SNIPPET: &str = r##"use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Navbar)]
fn navbar() -> Html {
    let open = use_state(|| false);
    let toggle = {
        let open = open.clone();
        Callback::from(move |_| open.set(!*open))
    };

    html! {
        <header class="header">
            <nav class="navbar">
                <button class="menu-toggle" onclick={toggle}>
                    { "Menu" }
                </button>
                <ul class={classes!("nav-list", open.then_some("active"))}>
                    <li><Link<Route> to={Route::Home}>{ "Home" }</Link<Route>></li>
                    <li><Link<Route> to={Route::About}>{ "About" }</Link<Route>></li>
                    <li><Link<Route> to={Route::Contact}>{ "Contact" }</Link<Route>></li>
                </ul>
            </nav>
        </header>
    }
}"##;

fn builtin_samples() -> Vec<CodeSample> {
    vec![
        CodeSample {
            heading: "Static HTML".into(),
            language: "html".into(),
            verdict: Verdict::Before,
            code: BEFORE_SNIPPET.into(),
        },
        CodeSample {
            heading: "Yew Component".into(),
            language: "rust".into(),
            verdict: Verdict::After,
            code: AFTER_SNIPPET.into(),
        },
    ]
}
