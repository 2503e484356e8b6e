//! Presentation constants for the landing page.
//!
//! Colors, sizes and class names are fixed; the generated stylesheet is shared
//! by the browser build and the static snapshots written by the CLI.

/// Color palette of the landing page.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub subtext: &'static str,
    pub headline_from: &'static str,
    pub headline_via: &'static str,
    pub headline_to: &'static str,
    pub headline_glow: &'static str,
    pub glow: &'static str,
}

impl Palette {
    /// Slate night palette - the only one the page ships with
    pub const NIGHT: Palette = Palette {
        background: "#0f172a",
        text: "#ffffff",
        subtext: "#94a3b8",
        headline_from: "#d946ef",
        headline_via: "#ef4444",
        headline_to: "#fb923c",
        headline_glow: "0 0 10px rgba(255,255,255,0.1), 0 0 20px rgba(255,255,255,0.1)",
        glow: "rgba(29, 78, 216, 0.25)",
    };
}

/// Radius of the pointer glow.
pub const GLOW_RADIUS_PX: u32 = 400;

/// Outer stop of the pointer glow.
pub const GLOW_FADE: &str = "transparent 80%";

/// Duration of the glow layer's transition.
pub const GLOW_TRANSITION_MS: u32 = 300;

/// Headline font sizes: base, >=640px, >=768px.
pub const HEADLINE_SIZES_REM: [f32; 3] = [4.5, 6.0, 8.0];

/// Class names used by the page markup.
pub mod class {
    pub const SURFACE: &str = "landing-surface";
    pub const GLOW: &str = "landing-glow";
    pub const CONTENT: &str = "landing-content";
    pub const HEADLINE: &str = "landing-headline";
    pub const HEADLINE_TEXT: &str = "landing-headline-text";
    pub const TAGLINE: &str = "landing-tagline";
}

/// Build the page stylesheet from the palette.
pub fn stylesheet() -> String {
    let p = Palette::NIGHT;
    let [base, sm, md] = HEADLINE_SIZES_REM;

    format!(
        "html, body {{ margin: 0; }}
.{surface} {{
  position: relative;
  min-height: 100vh;
  width: 100%;
  display: flex;
  align-items: center;
  justify-content: center;
  background-color: {background};
  color: {text};
  overflow: hidden;
  padding: 0 1rem;
  box-sizing: border-box;
}}
.{glow} {{
  pointer-events: none;
  position: fixed;
  inset: 0;
  z-index: 0;
  transition-property: all;
  transition-duration: {transition}ms;
}}
.{content} {{
  position: relative;
  z-index: 10;
  display: flex;
  flex-direction: column;
  align-items: center;
}}
.{headline} {{
  margin: 0;
  font-size: {base}rem;
  line-height: 1;
  font-weight: 800;
  letter-spacing: -0.05em;
  text-align: center;
  text-shadow: {headline_glow};
}}
.{headline_text} {{
  background-image: linear-gradient(to right, {from}, {via}, {to});
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}}
.{tagline} {{
  margin: 1rem 0 0;
  color: {subtext};
  font-size: 1.125rem;
}}
@media (min-width: 640px) {{ .{headline} {{ font-size: {sm}rem; }} }}
@media (min-width: 768px) {{ .{headline} {{ font-size: {md}rem; }} }}
",
        surface = class::SURFACE,
        glow = class::GLOW,
        content = class::CONTENT,
        headline = class::HEADLINE,
        headline_text = class::HEADLINE_TEXT,
        tagline = class::TAGLINE,
        background = p.background,
        text = p.text,
        subtext = p.subtext,
        transition = GLOW_TRANSITION_MS,
        headline_glow = p.headline_glow,
        from = p.headline_from,
        via = p.headline_via,
        to = p.headline_to,
    )
}

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;
