//! HTML renderer: turns the page content and a `PageView` into markup.
//!
//! The markup carries `data-*` hooks so a host can patch the interactive
//! parts (nav elevation, current link, mobile panel) in place without
//! re-rendering the page.

use royale_protocol::{NavLink, PageView, ThemeToken};

use crate::content::{Card, Content, Heading};

/// Id of the element the page is mounted into.
pub const ROOT_ID: &str = "royale-root";
pub const MOBILE_PANEL_ID: &str = "mobile-panel";

pub const NAV_SELECTOR: &str = "[data-nav]";
pub const NAV_LINK_ATTR: &str = "data-nav-link";
pub const NAV_LINK_SELECTOR: &str = "[data-nav-link]";
pub const MOBILE_PANEL_SELECTOR: &str = "[data-mobile-panel]";
pub const MENU_TOGGLE_SELECTOR: &str = "[data-action=\"toggle-menu\"]";
pub const ACTION_ATTR: &str = "data-action";
/// Attribute on the root element holding the site config as JSON.
pub const CONFIG_ATTR: &str = "data-config";

pub const NAV_ELEVATED_CLASS: &str = "nav--elevated";
pub const LINK_ACTIVE_CLASS: &str = "is-active";

/// Actions a clickable element can request from the host.
pub mod action {
    pub const TOGGLE_MENU: &str = "toggle-menu";
    pub const SELECT_NAV: &str = "select-nav";
    pub const ENTER: &str = "enter";
}

const MENU_GLYPH_OPEN: &str = "☰";
const MENU_GLYPH_CLOSE: &str = "✕";

/// Glyph on the menu button for the given panel state.
pub fn menu_glyph(menu_open: bool) -> &'static str {
    if menu_open {
        MENU_GLYPH_CLOSE
    } else {
        MENU_GLYPH_OPEN
    }
}

/// Render a standalone HTML5 document.
///
/// `wasm_module` is the path of the generated JS glue for the browser
/// host; when set, a module script imports and initializes it.
/// `config_json` is stored on the root element for the host to mount with.
pub fn render_document(
    view: &PageView,
    content: &Content,
    wasm_module: Option<&str>,
    config_json: Option<&str>,
) -> String {
    let body = render_body(view, content);
    let mut html = String::with_capacity(body.len() + 4096);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
    );
    html.push_str(&format!(
        "<title>{} {}</title>\n",
        escape_html(content.brand_primary),
        escape_html(content.brand_secondary),
    ));
    html.push_str("<style>\n");
    html.push_str(&render_theme_vars());
    html.push_str(STYLES);
    html.push_str("</style>\n</head>\n<body>\n");
    match config_json {
        Some(config) => html.push_str(&format!(
            "<div id=\"{ROOT_ID}\" {CONFIG_ATTR}=\"{}\">\n",
            escape_html(config)
        )),
        None => html.push_str(&format!("<div id=\"{ROOT_ID}\">\n")),
    }
    html.push_str(&body);
    html.push_str("</div>\n");
    if let Some(module) = wasm_module {
        html.push_str(&format!(
            "<script type=\"module\">import init from \"{}\"; init();</script>\n",
            escape_html(module),
        ));
    }
    html.push_str("</body>\n</html>\n");
    html
}

/// Render the page body (navigation, sections, footer) without the
/// document wrapper.
pub fn render_body(view: &PageView, content: &Content) -> String {
    let mut html = String::with_capacity(32 * 1024);
    render_nav(&mut html, view, content);
    html.push_str("<main>\n");
    render_hero(&mut html, content);
    render_key_phrase(&mut html, content);
    render_mission(&mut html, content);
    render_genesis(&mut html, content);
    render_intelligence(&mut html, content);
    render_threats(&mut html, content);
    render_roadmap(&mut html, content);
    render_vision(&mut html, content);
    render_academic(&mut html, content);
    html.push_str("</main>\n");
    render_footer(&mut html, content);
    html
}

/// `:root { --token: #hex; ... }` for every theme token.
pub fn render_theme_vars() -> String {
    let mut css = String::from(":root{");
    for token in ThemeToken::ALL {
        css.push_str(&format!("--{}:{};", token.css_name(), resolve_color(token)));
    }
    css.push_str("}\n");
    css
}

fn render_nav(html: &mut String, view: &PageView, content: &Content) {
    let class = if view.elevated {
        format!("nav {NAV_ELEVATED_CLASS}")
    } else {
        "nav".to_string()
    };
    html.push_str(&format!("<nav class=\"{class}\" data-nav>\n<div class=\"nav__inner\">\n"));
    html.push_str(&format!(
        "<a class=\"brand\" href=\"#\"><span class=\"brand__ball\" aria-hidden=\"true\"></span><span class=\"brand__primary\">{}</span> <span class=\"brand__secondary\">{}</span></a>\n",
        escape_html(content.brand_primary),
        escape_html(content.brand_secondary),
    ));

    html.push_str("<div class=\"nav__links\">\n");
    for link in &view.nav {
        render_nav_link(html, link, "nav__link", None);
    }
    html.push_str(&format!(
        "<button class=\"cta\" type=\"button\" {ACTION_ATTR}=\"{}\">{}</button>\n",
        action::ENTER,
        escape_html(content.cta),
    ));
    html.push_str("</div>\n");

    html.push_str(&format!(
        "<button class=\"nav__toggle\" type=\"button\" {ACTION_ATTR}=\"{}\" aria-controls=\"{MOBILE_PANEL_ID}\" aria-expanded=\"{}\" aria-label=\"{}\">{}</button>\n",
        action::TOGGLE_MENU,
        view.menu_open,
        escape_html(&view.menu_button_label),
        menu_glyph(view.menu_open),
    ));
    html.push_str("</div>\n");

    let hidden = if view.menu_open { "" } else { " hidden" };
    html.push_str(&format!(
        "<div id=\"{MOBILE_PANEL_ID}\" class=\"mobile-panel\" data-mobile-panel{hidden}>\n<div class=\"mobile-panel__sheet\">\n<nav class=\"mobile-panel__links\">\n",
    ));
    for link in &view.nav {
        render_nav_link(html, link, "mobile-panel__link", Some(action::SELECT_NAV));
    }
    html.push_str(&format!(
        "<div class=\"mobile-panel__cta\"><button class=\"cta cta--block\" type=\"button\" {ACTION_ATTR}=\"{}\">{}</button></div>\n",
        action::ENTER,
        escape_html(content.cta),
    ));
    html.push_str("</nav>\n</div>\n</div>\n</nav>\n");
}

fn render_nav_link(html: &mut String, link: &NavLink, class: &str, action: Option<&str>) {
    let (class, current) = if link.current {
        (
            format!("{class} {LINK_ACTIVE_CLASS}"),
            " aria-current=\"page\"",
        )
    } else {
        (class.to_string(), "")
    };
    let action = action
        .map(|a| format!(" {ACTION_ATTR}=\"{a}\""))
        .unwrap_or_default();
    html.push_str(&format!(
        "<a class=\"{class}\" href=\"{}\" {NAV_LINK_ATTR}=\"{}\"{action}{current}>{}</a>\n",
        escape_html(&link.href),
        link.id,
        escape_html(&link.label),
    ));
}

fn open_section(html: &mut String, heading: &Heading, class: &str) {
    match heading.anchor {
        Some(id) => html.push_str(&format!("<section id=\"{id}\" class=\"{class}\">\n")),
        None => html.push_str(&format!("<section class=\"{class}\">\n")),
    }
    html.push_str("<div class=\"container\">\n<header class=\"section-heading\">\n");
    html.push_str(&format!(
        "<span class=\"section-heading__marker\">{}</span>\n<h2>{}</h2>\n",
        escape_html(heading.marker),
        escape_html(heading.title),
    ));
    if let Some(kicker) = heading.kicker {
        html.push_str(&format!(
            "<p class=\"section-heading__kicker\">{}</p>\n",
            escape_html(kicker)
        ));
    }
    html.push_str("</header>\n");
}

fn close_section(html: &mut String) {
    html.push_str("</div>\n</section>\n");
}

fn render_cards(html: &mut String, cards: &[Card], class: &str) {
    html.push_str(&format!("<div class=\"grid {class}\">\n"));
    for card in cards {
        html.push_str(&format!(
            "<article class=\"card\"><h3>{}</h3><p>{}</p></article>\n",
            escape_html(card.title),
            escape_html(card.body),
        ));
    }
    html.push_str("</div>\n");
}

fn render_list(html: &mut String, items: &[&str], class: &str) {
    html.push_str(&format!("<ul class=\"{class}\">\n"));
    for item in items {
        html.push_str(&format!("<li>{}</li>\n", escape_html(item)));
    }
    html.push_str("</ul>\n");
}

fn render_hero(html: &mut String, content: &Content) {
    let hero = &content.hero;
    html.push_str("<section class=\"hero\">\n<div class=\"hero__content\">\n");
    html.push_str(&format!(
        "<h1><span class=\"hero__primary\">{}</span><br><span class=\"hero__secondary\">{}</span></h1>\n",
        escape_html(hero.title_primary),
        escape_html(hero.title_secondary),
    ));
    html.push_str("<div class=\"rule\" aria-hidden=\"true\"></div>\n");
    html.push_str(&format!(
        "<p class=\"hero__tagline\">{}</p>\n<p class=\"hero__tagline-ar\" lang=\"ar\" dir=\"rtl\">{}</p>\n<p class=\"hero__subject\">{}</p>\n",
        escape_html(hero.tagline),
        escape_html(hero.tagline_ar),
        escape_html(hero.subject),
    ));
    html.push_str(&format!(
        "<button class=\"cta cta--hero\" type=\"button\" {ACTION_ATTR}=\"{}\">{}</button>\n",
        action::ENTER,
        escape_html(hero.cta),
    ));
    html.push_str("</div>\n</section>\n");
}

fn render_key_phrase(html: &mut String, content: &Content) {
    html.push_str(&format!(
        "<section class=\"key-phrase\">\n<div class=\"container\">\n<p class=\"key-phrase__ar\" lang=\"ar\" dir=\"rtl\">{}</p>\n<div class=\"rule\" aria-hidden=\"true\"></div>\n<p class=\"key-phrase__en\">{}</p>\n</div>\n</section>\n",
        escape_html(content.key_phrase.arabic),
        escape_html(content.key_phrase.translation),
    ));
}

fn render_mission(html: &mut String, content: &Content) {
    let mission = &content.mission;
    open_section(html, &mission.heading, "section");
    html.push_str("<div class=\"split\">\n<div>\n");
    for paragraph in mission.paragraphs {
        html.push_str(&format!("<p class=\"lead\">{}</p>\n", escape_html(paragraph)));
    }
    html.push_str("</div>\n");
    html.push_str(&format!(
        "<aside class=\"card card--framed\"><h3>{}</h3><p>{}</p></aside>\n",
        escape_html(mission.framework.title),
        escape_html(mission.framework.body),
    ));
    html.push_str("</div>\n");
    close_section(html);
}

fn render_genesis(html: &mut String, content: &Content) {
    let genesis = &content.genesis;
    open_section(html, &genesis.heading, "section");
    render_cards(html, genesis.questions, "grid--3");
    html.push_str(&format!(
        "<blockquote class=\"quote\"><p>{}</p><p lang=\"ar\" dir=\"rtl\">{}</p></blockquote>\n",
        escape_html(genesis.quote),
        escape_html(genesis.quote_ar),
    ));
    close_section(html);
}

fn render_intelligence(html: &mut String, content: &Content) {
    let intel = &content.intelligence;
    open_section(html, &intel.heading, "section section--tinted");
    html.push_str("<div class=\"grid grid--3\">\n");
    for stat in intel.stats {
        html.push_str(&format!(
            "<div class=\"stat\"><p class=\"stat__label\">{}</p><p class=\"stat__value\">{}</p><p class=\"stat__desc\">{}</p></div>\n",
            escape_html(stat.label),
            escape_html(stat.value),
            escape_html(stat.description),
        ));
    }
    html.push_str("</div>\n");
    render_cards(html, intel.insights, "grid--2");
    close_section(html);
}

fn render_threats(html: &mut String, content: &Content) {
    let threats = &content.threats;
    open_section(html, &threats.heading, "section");
    html.push_str("<div class=\"split\">\n");
    render_cards(html, threats.threats, "grid--2");
    html.push_str(&format!(
        "<aside class=\"card card--framed\"><h3>{}</h3>\n",
        escape_html(threats.responses_title)
    ));
    render_list(html, threats.responses, "checklist");
    html.push_str("</aside>\n</div>\n");
    close_section(html);
}

fn render_roadmap(html: &mut String, content: &Content) {
    let roadmap = &content.roadmap;
    open_section(html, &roadmap.heading, "section section--tinted");
    html.push_str("<ol class=\"grid grid--4 roadmap\">\n");
    for (idx, phase) in roadmap.phases.iter().enumerate() {
        html.push_str(&format!(
            "<li class=\"card phase\"><span class=\"phase__number\">{:02}</span><p class=\"phase__label\">{}</p><h3>{}</h3>\n",
            idx + 1,
            escape_html(phase.phase),
            escape_html(phase.title),
        ));
        render_list(html, phase.items, "phase__items");
        html.push_str("</li>\n");
    }
    html.push_str("</ol>\n");
    close_section(html);
}

fn render_vision(html: &mut String, content: &Content) {
    let vision = &content.vision;
    open_section(html, &vision.heading, "section");
    html.push_str("<div class=\"split\">\n");
    html.push_str(&format!(
        "<div class=\"card card--framed\"><h3>{}</h3>\n<div class=\"metrics\">\n",
        escape_html(vision.metrics_title)
    ));
    for metric in vision.metrics {
        html.push_str(&format!(
            "<div><p class=\"metric__value\">{}</p><p class=\"metric__label\">{}</p></div>\n",
            escape_html(metric.value),
            escape_html(metric.label),
        ));
    }
    html.push_str("</div>\n</div>\n");
    html.push_str(&format!(
        "<div class=\"card card--framed\"><h3>{}</h3>\n",
        escape_html(vision.pillars_title)
    ));
    render_list(html, vision.pillars, "pillars");
    html.push_str("</div>\n</div>\n");
    close_section(html);
}

fn render_academic(html: &mut String, content: &Content) {
    let academic = &content.academic;
    open_section(html, &academic.heading, "section section--tinted");
    html.push_str(&format!("<p class=\"lead\">{}</p>\n", escape_html(academic.intro)));
    render_list(html, academic.objectives, "grid grid--2 checklist");
    html.push_str(&format!(
        "<div class=\"badge\"><p class=\"badge__label\">{}</p><p class=\"badge__value\">{}</p></div>\n",
        escape_html(academic.project_type_label),
        escape_html(academic.project_type),
    ));
    close_section(html);
}

fn render_footer(html: &mut String, content: &Content) {
    let footer = &content.footer;
    html.push_str("<footer class=\"footer\">\n<div class=\"container\">\n<div class=\"grid grid--3\">\n");
    html.push_str(&format!(
        "<div><p class=\"footer__brand\"><span class=\"footer__monogram\">{}</span> {}</p>\n",
        escape_html(footer.monogram),
        escape_html(footer.brand),
    ));
    for line in footer.about {
        html.push_str(&format!("<p>{}</p>\n", escape_html(line)));
    }
    html.push_str("</div>\n");
    for column in footer.columns {
        html.push_str(&format!("<div><h4>{}</h4>\n", escape_html(column.heading)));
        for line in column.lines {
            html.push_str(&format!("<p>{}</p>\n", escape_html(line)));
        }
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n");
    html.push_str(&format!(
        "<div class=\"footer__legal\"><p>{}</p><p>{}</p></div>\n",
        escape_html(footer.copyright),
        escape_html(footer.disclaimer),
    ));
    html.push_str("</div>\n</footer>\n");
}

/// Brand palette: deep reds over black with gold accents.
pub fn resolve_color(token: ThemeToken) -> &'static str {
    match token {
        ThemeToken::Crimson => "#F21313",
        ThemeToken::Ember | ThemeToken::CtaBackground => "#BF3111",
        ThemeToken::Oxblood => "#590505",
        ThemeToken::Amber | ThemeToken::NavLinkActive | ThemeToken::Border => "#D98D30",
        ThemeToken::Champagne => "#F2DEA2",
        ThemeToken::Background => "#000000",
        ThemeToken::Surface => "#0a0000",
        ThemeToken::TextPrimary | ThemeToken::NavLink => "#ffffff",
        ThemeToken::TextSecondary => "#d1d5db",
        ThemeToken::TextMuted => "#9ca3af",
        ThemeToken::NavBackground => "transparent",
        ThemeToken::NavElevatedBackground => "rgba(89,5,5,0.95)",
        ThemeToken::CtaHover => "#F21313",
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const STYLES: &str = r#"*{box-sizing:border-box}
html{scroll-behavior:smooth}
body{margin:0;background:var(--background);color:var(--text-primary);font-family:system-ui,-apple-system,sans-serif;overflow-x:hidden}
a{color:inherit;text-decoration:none}
.container{max-width:80rem;margin:0 auto;padding:0 1.5rem}
.nav{position:fixed;top:0;left:0;right:0;z-index:50;background:var(--nav-background);transition:background .3s,border-color .3s;border-bottom:1px solid transparent}
.nav--elevated{background:var(--nav-elevated-background);backdrop-filter:blur(4px);border-bottom-color:rgba(217,141,48,.3)}
.nav__inner{max-width:80rem;margin:0 auto;padding:.75rem 1rem;display:flex;align-items:center;justify-content:space-between}
.brand{display:flex;align-items:center;gap:.75rem;font-weight:700;font-size:1.4rem;letter-spacing:.3em}
.brand__ball{width:3rem;height:3rem;border-radius:50%;background:radial-gradient(circle at 35% 30%,#fff 0 8%,var(--crimson) 20%,var(--ember) 60%,var(--oxblood));box-shadow:0 0 18px rgba(242,19,19,.5)}
.brand__primary{color:var(--champagne)}
.nav__links{display:none;align-items:center;gap:2rem}
.nav__link{text-transform:uppercase;letter-spacing:.1em;font-size:.875rem;color:var(--nav-link);transition:color .2s}
.nav__link:hover,.nav__link.is-active,.mobile-panel__link.is-active{color:var(--nav-link-active)}
.nav__toggle{display:inline-flex;align-items:center;justify-content:center;width:2.5rem;height:2.5rem;background:none;border:1px solid rgba(217,141,48,.4);color:var(--champagne);font-size:1.25rem;cursor:pointer}
.cta{background:var(--cta-background);border:1px solid var(--border);color:var(--text-primary);padding:.5rem 1.5rem;text-transform:uppercase;letter-spacing:.2em;font-size:.875rem;cursor:pointer;transition:background .2s,transform .2s}
.cta:hover{background:var(--cta-hover);transform:scale(1.05)}
.cta--block{width:100%;padding:.75rem 1.5rem}
.cta--hero{padding:1.25rem 4rem;font-size:1.1rem;font-weight:700;border-width:2px}
.mobile-panel{position:fixed;inset:0;z-index:40;background:rgba(0,0,0,.8);backdrop-filter:blur(4px)}
.mobile-panel[hidden]{display:none}
.mobile-panel__sheet{position:absolute;top:4rem;left:1rem;right:1rem;border:1px solid rgba(217,141,48,.3);background:var(--surface)}
.mobile-panel__links{display:flex;flex-direction:column}
.mobile-panel__link{padding:1rem 1.25rem;text-transform:uppercase;letter-spacing:.1em;border-bottom:1px solid rgba(217,141,48,.2)}
.mobile-panel__cta{padding:1rem 1.25rem}
@media (min-width:768px){.nav__links{display:flex}.nav__toggle{display:none}.mobile-panel{display:none}}
.hero{min-height:100vh;display:flex;align-items:center;justify-content:center;text-align:center;padding:7rem 1.5rem 4rem;background:linear-gradient(135deg,var(--oxblood),var(--background) 50%,var(--oxblood))}
.hero h1{font-size:clamp(3rem,12vw,8rem);letter-spacing:.1em;margin:0 0 2rem;line-height:1.1}
.hero__primary{color:var(--champagne)}
.hero__secondary{color:var(--crimson)}
.hero__tagline{font-size:clamp(1.5rem,4vw,2.25rem);color:var(--champagne);letter-spacing:.05em}
.hero__tagline-ar{font-size:1.5rem;color:var(--amber)}
.hero__subject{color:var(--text-secondary);letter-spacing:.05em;margin-bottom:3rem}
.rule{height:4px;width:16rem;margin:0 auto 2rem;background:linear-gradient(90deg,transparent,var(--amber),transparent)}
.key-phrase{padding:6rem 0;text-align:center;background:linear-gradient(90deg,var(--oxblood),var(--ember),var(--oxblood));border-top:4px solid var(--amber);border-bottom:4px solid var(--amber)}
.key-phrase__ar{font-size:clamp(2.5rem,6vw,3.75rem);font-weight:700;color:var(--champagne)}
.key-phrase__en{font-size:1.5rem;text-transform:uppercase;letter-spacing:.2em}
.section{padding:8rem 0;scroll-margin-top:6rem}
.section--tinted{background:linear-gradient(180deg,var(--background),rgba(89,5,5,.2),var(--background))}
.section-heading{border-left:4px solid var(--crimson);padding-left:1rem;margin-bottom:4rem}
.section-heading__marker{color:var(--amber);font-size:.875rem;letter-spacing:.3em;text-transform:uppercase}
.section-heading h2{font-size:3rem;margin:.25rem 0;color:var(--champagne);text-transform:uppercase;letter-spacing:.05em}
.section-heading__kicker{color:var(--amber);text-transform:uppercase;letter-spacing:.2em}
.lead{font-size:1.25rem;line-height:1.7;color:var(--text-secondary)}
.split{display:grid;gap:3rem}
.grid{display:grid;gap:2rem;padding:0;list-style:none}
@media (min-width:768px){.split{grid-template-columns:1fr 1fr}.grid--2{grid-template-columns:repeat(2,1fr)}.grid--3{grid-template-columns:repeat(3,1fr)}.grid--4{grid-template-columns:repeat(4,1fr)}}
.card{background:rgba(89,5,5,.2);border:2px solid rgba(217,141,48,.4);padding:2rem}
.card h3{color:var(--champagne);letter-spacing:.1em;text-transform:uppercase}
.card p{color:var(--text-muted);line-height:1.6}
.card--framed{border-color:var(--border)}
.stat{border:2px solid var(--border);padding:2rem;text-align:center}
.stat__label{color:var(--amber);letter-spacing:.2em;font-size:.875rem}
.stat__value{font-size:3.75rem;font-weight:700;color:var(--crimson);margin:.5rem 0}
.stat__desc{color:var(--text-muted);font-size:.875rem}
.quote{margin:4rem 0 0;text-align:center;font-size:1.75rem;color:var(--champagne)}
.checklist li,.pillars li,.phase__items li{padding:.5rem 0;color:var(--text-secondary)}
.checklist li::before{content:"✓ ";color:var(--amber)}
.phase__items li::before{content:"▸ ";color:var(--crimson)}
.phase__number{font-size:3rem;font-weight:700;color:var(--crimson)}
.phase__label{color:var(--amber);text-transform:uppercase;letter-spacing:.2em}
.metrics{display:grid;gap:1.5rem}
.metric__value{font-size:3rem;font-weight:700;color:var(--crimson);margin:0}
.metric__label{color:var(--text-secondary);margin:0}
.badge{margin-top:3rem;border:2px solid var(--border);padding:1.5rem;text-align:center}
.badge__label{color:var(--amber);letter-spacing:.3em}
.badge__value{font-size:1.5rem;font-weight:700;color:var(--champagne)}
.footer{border-top:2px solid var(--border);padding:4rem 0 2rem;background:var(--surface)}
.footer h4{color:var(--amber);text-transform:uppercase;letter-spacing:.2em}
.footer p{color:var(--text-muted)}
.footer__brand{font-size:1.25rem;font-weight:700;color:var(--champagne)!important;letter-spacing:.2em}
.footer__monogram{display:inline-flex;width:2.5rem;height:2.5rem;align-items:center;justify-content:center;border-radius:50%;background:var(--ember);color:var(--champagne)}
.footer__legal{margin-top:3rem;padding-top:2rem;border-top:1px solid rgba(217,141,48,.3);text-align:center;font-size:.875rem}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PAGE;
    use royale_protocol::SectionId;

    fn view(active: Option<SectionId>, elevated: bool, menu_open: bool) -> PageView {
        PageView::new(elevated, menu_open, active)
    }

    #[test]
    fn document_is_complete() {
        let html = render_document(&view(None, false, false), &PAGE, None, None);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>\n"));
        assert!(html.contains("<title>7AMRA ROYALE</title>"));
        assert!(html.contains("--crimson:#F21313;"));
        assert!(!html.contains("<script"));
        for id in SectionId::ALL {
            assert!(html.contains(&format!("<section id=\"{id}\"")), "missing {id}");
        }
    }

    #[test]
    fn active_section_is_current_in_both_navs() {
        let html = render_body(&view(Some(SectionId::Intelligence), false, false), &PAGE);
        assert_eq!(html.matches("aria-current=\"page\"").count(), 2);
        assert!(html.contains(
            "<a class=\"nav__link is-active\" href=\"#intelligence\" data-nav-link=\"intelligence\" aria-current=\"page\">Intelligence</a>"
        ));
    }

    #[test]
    fn no_active_section_marks_nothing() {
        let html = render_body(&view(None, false, false), &PAGE);
        assert!(!html.contains("aria-current"));
        assert!(!html.contains(LINK_ACTIVE_CLASS));
    }

    #[test]
    fn elevation_and_menu_state_are_reflected() {
        let closed = render_body(&view(None, false, false), &PAGE);
        assert!(closed.contains("<nav class=\"nav\" data-nav>"));
        assert!(closed.contains("data-mobile-panel hidden>"));
        assert!(closed.contains("aria-label=\"Open menu\""));

        let open = render_body(&view(None, true, true), &PAGE);
        assert!(open.contains("<nav class=\"nav nav--elevated\" data-nav>"));
        assert!(open.contains("data-mobile-panel>"));
        assert!(open.contains("aria-expanded=\"true\""));
        assert!(open.contains("aria-label=\"Close menu\""));
    }

    #[test]
    fn escapes_html_entities() {
        assert_eq!(escape_html("<a href=\"x\">&'"), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
        let html = render_body(&view(None, false, false), &PAGE);
        assert!(html.contains("TUNISIA&#39;S ENTERTAINMENT SECTOR"));
    }

    #[test]
    fn wasm_module_script_is_optional() {
        let html = render_document(&view(None, false, false), &PAGE, Some("./pkg/royale_wasm.js"), None);
        assert!(html.contains("import init from \"./pkg/royale_wasm.js\"; init();"));
        assert!(html.contains("<div id=\"royale-root\">"));
    }

    #[test]
    fn config_is_attached_to_root() {
        let html = render_document(
            &view(None, false, false),
            &PAGE,
            None,
            Some(r#"{"header_offset":64.0}"#),
        );
        assert!(html.contains(
            "<div id=\"royale-root\" data-config=\"{&quot;header_offset&quot;:64.0}\">"
        ));
    }

    #[test]
    fn roadmap_phases_are_numbered() {
        let html = render_body(&view(None, false, false), &PAGE);
        for n in ["01", "02", "03", "04"] {
            assert!(html.contains(&format!("<span class=\"phase__number\">{n}</span>")));
        }
    }
}
