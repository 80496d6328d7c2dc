// Static page shell: navigation bar with the slide-out chat panel, hero,
// simulation link grid, about section with the orbital decoration, and
// footer. Built once at mount, torn down by removing the root element.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

pub const STYLESHEET_ID: &str = "worldsim-stylesheet";
pub const ASSISTANT_BUTTON_ID: &str = "assistant-toggle";
pub const CHAT_PANEL_ID: &str = "chat-panel";

pub struct SimulationLink {
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
}

/// The three externally hosted simulation applications. This page only
/// opens them in a new browsing context; their behavior is out of scope.
pub const SIMULATIONS: [SimulationLink; 3] = [
    SimulationLink {
        title: "Global Simulations",
        description: "Watch AI agents representing major world powers compete and cooperate on the global stage.",
        url: "https://world-mappo.vercel.app/",
    },
    SimulationLink {
        title: "India Simulations",
        description: "Explore India's strategic position with AI-driven regional and domestic scenario modeling.",
        url: "https://sitnovate-2-0.vercel.app/",
    },
    SimulationLink {
        title: "Agentic Recent Simulations",
        description: "Experience our latest breakthrough in autonomous agent behavior and conflict resolution.",
        url: "https://worldweave-conflicts.lovable.app/",
    },
];

const FEATURE_CHIPS: [&str; 4] = [
    "Multi-Agent Systems",
    "Real-Time Decisions",
    "Neural Networks",
    "Global Scale",
];

const ABOUT_BULLETS: [&str; 4] = [
    "Deep Q-Networks for strategic decision making",
    "Multi-agent reinforcement learning frameworks",
    "Real-time policy adaptation and evolution",
    "Complex geopolitical scenario modeling",
];

pub struct PageShell {
    root: Element,
    assistant_button: Element,
    toggle: Option<Closure<dyn FnMut()>>,
}

impl PageShell {
    /// Builds the whole shell under `parent` and wires the chat panel
    /// toggle. The stylesheet is injected once per document.
    pub fn build(document: &Document, parent: &Element) -> Result<PageShell, JsValue> {
        ensure_stylesheet(document)?;

        let root = el(document, "div", "worldsim-app")?;
        let (nav, panel, assistant_button) = build_nav(document)?;
        root.append_child(&nav)?;
        root.append_child(&panel)?;

        let main = el(document, "main", "")?;
        let hero = build_hero(document)?;
        main.append_child(&hero)?;
        let simulations = build_simulations(document)?;
        main.append_child(&simulations)?;
        let about = build_about(document)?;
        main.append_child(&about)?;
        root.append_child(&main)?;
        let footer = build_footer(document)?;
        root.append_child(&footer)?;

        parent.append_child(&root)?;

        let toggle = {
            let panel = panel.clone();
            Closure::wrap(Box::new(move || {
                let _ = panel.class_list().toggle("open");
            }) as Box<dyn FnMut()>)
        };
        assistant_button
            .add_event_listener_with_callback("click", toggle.as_ref().unchecked_ref())?;

        Ok(PageShell {
            root,
            assistant_button,
            toggle: Some(toggle),
        })
    }

    /// Unhooks the panel toggle and removes the whole shell from the DOM.
    pub fn detach(&mut self) {
        if let Some(toggle) = self.toggle.take() {
            let _ = self
                .assistant_button
                .remove_event_listener_with_callback("click", toggle.as_ref().unchecked_ref());
        }
        self.root.remove();
    }
}

impl Drop for PageShell {
    fn drop(&mut self) {
        self.detach();
    }
}

fn build_nav(document: &Document) -> Result<(Element, Element, Element), JsValue> {
    let nav = el(document, "nav", "nav glass")?;

    let brand = el(document, "div", "brand")?;
    let brand_mark = text_el(document, "span", "brand-mark", "\u{25C9}")?;
    brand.append_child(&brand_mark)?;
    let brand_name = text_el(document, "span", "brand-name", "WORLDSIM")?;
    brand.append_child(&brand_name)?;
    nav.append_child(&brand)?;

    let links = el(document, "div", "nav-links")?;
    let about = text_el(document, "a", "nav-link", "About")?;
    about.set_attribute("href", "#about")?;
    links.append_child(&about)?;
    let simulations = text_el(document, "a", "nav-link", "Simulations")?;
    simulations.set_attribute("href", "#simulations")?;
    links.append_child(&simulations)?;

    let button = text_el(document, "button", "assistant-toggle", "AI Assistant")?;
    button.set_id(ASSISTANT_BUTTON_ID);
    button.set_attribute("type", "button")?;
    links.append_child(&button)?;
    nav.append_child(&links)?;

    let panel = el(document, "aside", "chat-panel")?;
    panel.set_id(CHAT_PANEL_ID);
    let header = el(document, "div", "chat-panel-header")?;
    let heading = text_el(document, "h3", "", "AI Assistant")?;
    header.append_child(&heading)?;
    let sub = text_el(document, "p", "chat-panel-sub", "Powered by Voiceflow")?;
    header.append_child(&sub)?;
    panel.append_child(&header)?;
    let placeholder = el(document, "div", "chat-placeholder")?;
    let loading = text_el(document, "p", "", "Chat widget loading...")?;
    placeholder.append_child(&loading)?;
    let prompt = text_el(
        document,
        "p",
        "chat-placeholder-sub",
        "Ask me anything about WORLDSIM!",
    )?;
    placeholder.append_child(&prompt)?;
    panel.append_child(&placeholder)?;

    Ok((nav, panel, button))
}

fn build_hero(document: &Document) -> Result<Element, JsValue> {
    let hero = el(document, "section", "hero")?;
    let badge = text_el(
        document,
        "div",
        "hero-badge",
        "AI-Powered Global Simulations",
    )?;
    hero.append_child(&badge)?;
    let title = text_el(document, "h1", "hero-title", "WORLDSIM")?;
    hero.append_child(&title)?;
    let subtitle = text_el(
        document,
        "p",
        "hero-subtitle",
        "Where AI Agents Become Nations",
    )?;
    hero.append_child(&subtitle)?;
    let description = text_el(
        document,
        "p",
        "hero-description",
        "Experience the future of geopolitical simulation. Our advanced AI agents, \
         powered by Reinforcement Learning, act as sovereign nations, making strategic \
         decisions, forming alliances, and shaping the world order in real-time.",
    )?;
    hero.append_child(&description)?;

    let features = el(document, "div", "feature-chips")?;
    for label in FEATURE_CHIPS.iter() {
        let chip = text_el(document, "span", "feature-chip", label)?;
        features.append_child(&chip)?;
    }
    hero.append_child(&features)?;
    Ok(hero)
}

fn build_simulations(document: &Document) -> Result<Element, JsValue> {
    let section = el(document, "section", "simulations")?;
    section.set_id("simulations");
    let title = text_el(document, "h2", "section-title", "Choose Your Simulation")?;
    section.append_child(&title)?;
    let intro = text_el(
        document,
        "p",
        "section-intro",
        "Select from our suite of AI-powered simulation environments",
    )?;
    section.append_child(&intro)?;

    let grid = el(document, "div", "simulation-grid")?;
    for sim in SIMULATIONS.iter() {
        let card = el(document, "a", "simulation-card")?;
        card.set_attribute("href", sim.url)?;
        card.set_attribute("target", "_blank")?;
        card.set_attribute("rel", "noopener noreferrer")?;
        let card_title = text_el(document, "h3", "", sim.title)?;
        card.append_child(&card_title)?;
        let card_body = text_el(document, "p", "", sim.description)?;
        card.append_child(&card_body)?;
        let launch = text_el(document, "span", "launch", "Launch Simulation")?;
        card.append_child(&launch)?;
        grid.append_child(&card)?;
    }
    section.append_child(&grid)?;
    Ok(section)
}

fn build_about(document: &Document) -> Result<Element, JsValue> {
    let section = el(document, "section", "about")?;
    section.set_id("about");

    let copy = el(document, "div", "about-copy")?;
    let heading = text_el(document, "h2", "section-title", "The Future of Simulation")?;
    copy.append_child(&heading)?;
    let body = text_el(
        document,
        "p",
        "",
        "WORLDSIM leverages cutting-edge reinforcement learning algorithms to create \
         autonomous AI agents that behave like real-world nations. Each agent learns, \
         adapts, and evolves its strategies based on complex reward systems and \
         environmental feedback.",
    )?;
    copy.append_child(&body)?;
    let bullets = el(document, "ul", "about-bullets")?;
    for item in ABOUT_BULLETS.iter() {
        let bullet = text_el(document, "li", "", item)?;
        bullets.append_child(&bullet)?;
    }
    copy.append_child(&bullets)?;
    section.append_child(&copy)?;

    // Purely decorative, animated from the stylesheet.
    let orbital = el(document, "div", "orbital")?;
    for ring in &["ring ring-outer", "ring ring-middle", "ring ring-inner"] {
        let ring = el(document, "div", ring)?;
        orbital.append_child(&ring)?;
    }
    let globe = el(document, "div", "orbital-globe")?;
    orbital.append_child(&globe)?;
    for dot in &["orbit-dot dot-cyan", "orbit-dot dot-purple", "orbit-dot dot-amber"] {
        let dot = el(document, "div", dot)?;
        orbital.append_child(&dot)?;
    }
    section.append_child(&orbital)?;
    Ok(section)
}

fn build_footer(document: &Document) -> Result<Element, JsValue> {
    let footer = el(document, "footer", "footer")?;
    let brand = text_el(document, "span", "brand-name", "WORLDSIM")?;
    footer.append_child(&brand)?;
    let copyright = text_el(
        document,
        "p",
        "copyright",
        "\u{00A9} 2025 WORLDSIM. AI Agents powered by Reinforcement Learning.",
    )?;
    footer.append_child(&copyright)?;
    let links = el(document, "div", "footer-links")?;
    for label in &["Privacy", "Terms"] {
        let link = text_el(document, "a", "footer-link", label)?;
        link.set_attribute("href", "#")?;
        links.append_child(&link)?;
    }
    footer.append_child(&links)?;
    Ok(footer)
}

// The page carries its own stylesheet so the module is self-contained.
// Injection is id-guarded: a re-mount reuses the sheet already in <head>.
fn ensure_stylesheet(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id(STYLESHEET_ID).is_some() {
        return Ok(());
    }
    let style = document.create_element("style")?;
    style.set_id(STYLESHEET_ID);
    style.set_text_content(Some(STYLESHEET));
    match document.head() {
        Some(head) => head.append_child(&style).map(|_| ())?,
        None => {
            document
                .body()
                .ok_or_else(|| JsValue::from_str("document has no body"))?
                .append_child(&style)
                .map(|_| ())?;
        }
    }
    Ok(())
}

fn el(document: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let element = document.create_element(tag)?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    Ok(element)
}

fn text_el(document: &Document, tag: &str, class: &str, text: &str) -> Result<Element, JsValue> {
    let element = el(document, tag, class)?;
    element.set_text_content(Some(text));
    Ok(element)
}

const STYLESHEET: &str = r#"
html, body {
    margin: 0;
    background: #0a0a0f;
    color: #d1d5db;
    font-family: 'Inter', 'Segoe UI', sans-serif;
}
.animated-background {
    position: fixed;
    inset: 0;
    z-index: 0;
    background: linear-gradient(135deg, #0a0a0f 0%, #12121a 50%, #0f0f15 100%);
}
.worldsim-app {
    position: relative;
    z-index: 1;
    min-height: 100vh;
}
.nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    display: flex;
    align-items: center;
    justify-content: space-between;
    height: 4rem;
    padding: 0 2rem;
}
.glass {
    background: rgba(10, 10, 15, 0.6);
    backdrop-filter: blur(12px);
    border-bottom: 1px solid rgba(255, 255, 255, 0.08);
}
.brand-name {
    font-weight: 700;
    letter-spacing: 0.05em;
    background: linear-gradient(90deg, #00d4ff, #7c3aed, #f59e0b);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}
.brand-mark { color: #00d4ff; margin-right: 0.5rem; }
.nav-links { display: flex; align-items: center; gap: 1.5rem; }
.nav-link { color: #d1d5db; text-decoration: none; font-size: 0.875rem; }
.nav-link:hover { color: #00d4ff; }
.assistant-toggle {
    border: 1px solid rgba(0, 212, 255, 0.5);
    background: transparent;
    color: #00d4ff;
    border-radius: 0.5rem;
    padding: 0.5rem 1rem;
    cursor: pointer;
}
.assistant-toggle:hover { background: rgba(0, 212, 255, 0.1); }
.chat-panel {
    position: fixed;
    top: 0;
    right: 0;
    bottom: 0;
    width: 400px;
    max-width: 90vw;
    z-index: 60;
    background: #0f0f15;
    border-left: 1px solid #2a2a3a;
    padding: 1.5rem;
    transform: translateX(100%);
    transition: transform 0.3s ease;
}
.chat-panel.open { transform: translateX(0); }
.chat-panel-sub { color: #9ca3af; font-size: 0.75rem; }
.chat-placeholder {
    margin-top: 1.5rem;
    background: #1a1a25;
    border-radius: 0.75rem;
    padding: 1rem;
    text-align: center;
    color: #9ca3af;
}
.chat-placeholder-sub { font-size: 0.75rem; }
.hero {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    text-align: center;
    padding: 6rem 1.5rem 4rem;
}
.hero-badge {
    border: 1px solid rgba(0, 212, 255, 0.3);
    border-radius: 9999px;
    padding: 0.5rem 1rem;
    font-size: 0.875rem;
    color: #67e8f9;
    margin-bottom: 2rem;
}
.hero-title {
    font-size: clamp(3rem, 10vw, 6rem);
    margin: 0 0 1rem;
    background: linear-gradient(90deg, #00d4ff, #7c3aed, #f59e0b);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}
.hero-subtitle { font-size: 1.5rem; font-weight: 300; margin: 0 0 1rem; }
.hero-description { max-width: 48rem; color: #9ca3af; line-height: 1.7; }
.feature-chips {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 1rem;
    margin-top: 3rem;
}
.feature-chip {
    padding: 0.5rem 1rem;
    border-radius: 0.5rem;
    background: rgba(255, 255, 255, 0.05);
    border: 1px solid rgba(255, 255, 255, 0.1);
    font-size: 0.875rem;
}
.simulations, .about { padding: 5rem 1.5rem; max-width: 72rem; margin: 0 auto; }
.section-title { font-size: 2.25rem; text-align: center; color: #f9fafb; }
.section-intro { text-align: center; color: #9ca3af; margin-bottom: 3rem; }
.simulation-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
    gap: 1.5rem;
}
.simulation-card {
    display: block;
    background: linear-gradient(160deg, #1a1a25, #12121a);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 1rem;
    padding: 2rem;
    color: inherit;
    text-decoration: none;
    transition: transform 0.3s ease, border-color 0.3s ease;
}
.simulation-card:hover { transform: scale(1.03); border-color: rgba(255, 255, 255, 0.2); }
.simulation-card h3 { color: #f9fafb; margin-top: 0; }
.simulation-card p { color: #9ca3af; font-size: 0.875rem; line-height: 1.6; }
.launch { color: #00d4ff; font-weight: 600; font-size: 0.875rem; }
.about { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; align-items: center; }
.about-bullets { list-style: none; padding: 0; }
.about-bullets li { margin: 0.75rem 0; padding-left: 1.25rem; position: relative; }
.about-bullets li::before {
    content: '';
    position: absolute;
    left: 0;
    top: 0.5em;
    width: 0.5rem;
    height: 0.5rem;
    border-radius: 9999px;
    background: #00d4ff;
}
.orbital { position: relative; aspect-ratio: 1; max-width: 24rem; margin: 0 auto; width: 100%; }
.ring { position: absolute; border-radius: 9999px; }
.ring-outer { inset: 0; border: 2px solid rgba(0, 212, 255, 0.2); animation: rotate-slow 20s linear infinite; }
.ring-middle { inset: 2rem; border: 2px solid rgba(124, 58, 237, 0.2); animation: rotate-slow 30s linear infinite reverse; }
.ring-inner { inset: 4rem; border: 2px solid rgba(245, 158, 11, 0.2); animation: rotate-slow 25s linear infinite; }
.orbital-globe {
    position: absolute;
    inset: 0;
    margin: auto;
    width: 8rem;
    height: 8rem;
    border-radius: 9999px;
    background: linear-gradient(135deg, #00d4ff, #7c3aed, #f59e0b);
}
.orbit-dot { position: absolute; width: 1rem; height: 1rem; border-radius: 9999px; top: 50%; }
.dot-cyan { left: 0; background: #22d3ee; animation: rotate-slow 15s linear infinite; }
.dot-purple { right: 0; background: #a78bfa; animation: rotate-slow 20s linear infinite; }
.dot-amber { left: 50%; background: #fbbf24; animation: rotate-slow 25s linear infinite; }
@keyframes rotate-slow {
    from { transform: rotate(0deg); }
    to { transform: rotate(360deg); }
}
.footer {
    border-top: 1px solid rgba(255, 255, 255, 0.1);
    padding: 3rem 1.5rem;
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    justify-content: space-between;
    gap: 1.5rem;
    max-width: 72rem;
    margin: 0 auto;
}
.copyright { color: #6b7280; font-size: 0.875rem; }
.footer-links { display: flex; gap: 1.5rem; }
.footer-link { color: #9ca3af; text-decoration: none; font-size: 0.875rem; }
.footer-link:hover { color: #00d4ff; }
@media (max-width: 64rem) {
    .about { grid-template-columns: 1fr; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_simulation_links_with_fixed_urls() {
        assert_eq!(SIMULATIONS.len(), 3);
        let urls: Vec<&str> = SIMULATIONS.iter().map(|s| s.url).collect();
        assert_eq!(
            urls,
            vec![
                "https://world-mappo.vercel.app/",
                "https://sitnovate-2-0.vercel.app/",
                "https://worldweave-conflicts.lovable.app/",
            ]
        );
    }

    #[test]
    fn simulation_links_open_externally() {
        for sim in SIMULATIONS.iter() {
            assert!(sim.url.starts_with("https://"));
            assert!(!sim.title.is_empty());
            assert!(!sim.description.is_empty());
        }
    }
}
