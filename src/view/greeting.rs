use serde::Serialize;

use super::Gradient;
use crate::pointer::PointerPosition;
use crate::theme::{class, stylesheet};

pub const HEADLINE: &str = "Hello, Henry";
pub const TAGLINE: &str = "This is your cool landing page.";

/// Presentational unit of the landing page. Holds no state of its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreetingView;

impl GreetingView {
    /// Render the page for the given pointer position.
    pub fn render(&self, position: PointerPosition) -> RenderedSurface {
        let gradient = Gradient::at(position);
        RenderedSurface {
            center: gradient.center(),
            background: gradient.css(),
            headline: HEADLINE,
            tagline: TAGLINE,
        }
    }
}

/// Output of a single render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedSurface {
    /// Centre of the glow layer.
    pub center: PointerPosition,
    /// CSS background of the glow layer.
    pub background: String,
    pub headline: &'static str,
    pub tagline: &'static str,
}

impl RenderedSurface {
    pub fn gradient(&self) -> Gradient {
        Gradient::at(self.center)
    }

    /// Self-contained HTML document of this surface.
    pub fn to_html(&self) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{headline}</title>
<style>
{css}</style>
</head>
<body>
<main class="{surface}">
<div class="{glow}" style="background: {background}"></div>
<div class="{content}">
<h1 class="{headline_class}"><span class="{headline_text}">{headline}</span></h1>
<p class="{tagline_class}">{tagline}</p>
</div>
</main>
</body>
</html>
"#,
            css = stylesheet(),
            surface = class::SURFACE,
            glow = class::GLOW,
            content = class::CONTENT,
            headline_class = class::HEADLINE,
            headline_text = class::HEADLINE_TEXT,
            tagline_class = class::TAGLINE,
            background = self.background,
            headline = self.headline,
            tagline = self.tagline,
        )
    }
}
