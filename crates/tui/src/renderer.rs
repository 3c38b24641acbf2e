use std::io::{Stdout, stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use royale_core::SiteConfig;
use royale_core::content::PAGE;
use royale_core::html::menu_glyph;
use royale_protocol::{PageView, ThemeToken};
use tracing::{debug, info};

use crate::preview::{Command, Preview, key_command};

/// Rows taken by the nav bar and the status line.
const CHROME_ROWS: u16 = 2;
const WHEEL_ROWS: isize = 3;

fn theme_to_color(token: ThemeToken) -> Color {
    match token {
        ThemeToken::Crimson | ThemeToken::CtaHover => Color::Rgb(0xF2, 0x13, 0x13),
        ThemeToken::Ember | ThemeToken::CtaBackground => Color::Rgb(0xBF, 0x31, 0x11),
        ThemeToken::Oxblood | ThemeToken::NavElevatedBackground => Color::Rgb(0x59, 0x05, 0x05),
        ThemeToken::Amber | ThemeToken::NavLinkActive | ThemeToken::Border => {
            Color::Rgb(0xD9, 0x8D, 0x30)
        }
        ThemeToken::Champagne => Color::Rgb(0xF2, 0xDE, 0xA2),
        ThemeToken::Background => Color::Black,
        ThemeToken::Surface => Color::Rgb(0x0a, 0x00, 0x00),
        ThemeToken::TextPrimary | ThemeToken::NavLink => Color::White,
        ThemeToken::TextSecondary => Color::Rgb(0xd1, 0xd5, 0xdb),
        ThemeToken::TextMuted => Color::Rgb(0x9c, 0xa3, 0xaf),
        ThemeToken::NavBackground => Color::Reset,
    }
}

fn page_rows(terminal_height: u16) -> u16 {
    terminal_height.saturating_sub(CHROME_ROWS)
}

pub fn run_preview(config: &SiteConfig) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, config);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, config: &SiteConfig) -> Result<()> {
    let size = terminal.size()?;
    let mut preview = Preview::new(config, size.width, page_rows(size.height));

    loop {
        terminal.draw(|frame| draw(frame, &preview))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let command = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key_command(key.code),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => Some(Command::Scroll(WHEEL_ROWS)),
                MouseEventKind::ScrollUp => Some(Command::Scroll(-WHEEL_ROWS)),
                _ => None,
            },
            Event::Resize(width, height) => {
                preview.resize(width, page_rows(height));
                None
            }
            _ => None,
        };

        match command {
            Some(Command::Quit) => break,
            Some(command) => {
                let update = preview.apply(command);
                if !update.is_empty() {
                    debug!(?command, ?update, "view changed");
                }
            }
            None => {}
        }
    }

    preview.close();
    info!(fragment = preview.fragment(), "preview closed");
    Ok(())
}

fn draw(frame: &mut Frame, preview: &Preview) {
    let [nav_area, page_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());
    let view = preview.view();

    frame.render_widget(nav_bar(&view), nav_area);

    let lines: Vec<Line> = preview
        .visible_lines()
        .iter()
        .map(|line| {
            Line::styled(
                line.text.as_str(),
                Style::default().fg(theme_to_color(line.token)),
            )
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(theme_to_color(ThemeToken::Background))),
        page_area,
    );

    frame.render_widget(status_line(preview), status_area);

    if view.menu_open {
        draw_menu(frame, page_area, &view);
    }
}

fn nav_bar(view: &PageView) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!(" {} {} ", PAGE.brand_primary, PAGE.brand_secondary),
        Style::default()
            .fg(theme_to_color(ThemeToken::Crimson))
            .add_modifier(Modifier::BOLD),
    )];
    for (idx, link) in view.nav.iter().enumerate() {
        let mut style = Style::default().fg(theme_to_color(view.link_color(link.id)));
        if link.current {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        spans.push(Span::styled(format!(" {}:{} ", idx + 1, link.label), style));
    }
    spans.push(Span::styled(
        format!(" {} ", menu_glyph(view.menu_open)),
        Style::default().fg(theme_to_color(ThemeToken::TextPrimary)),
    ));
    Line::from(spans).style(Style::default().bg(theme_to_color(view.nav_background())))
}

fn status_line(preview: &Preview) -> Line<'static> {
    let fragment = match preview.fragment() {
        "" => "(no fragment)".to_string(),
        fragment => format!("#{fragment}"),
    };
    let lock = if preview.scroll_locked() {
        "scroll locked"
    } else {
        "scroll free"
    };
    Line::from(format!(
        " {fragment} · row {}/{} · {lock} · ↑↓ scroll  m menu  1-4 jump  e enter  q quit ",
        preview.scroll(),
        preview.layout().height(),
    ))
    .style(
        Style::default()
            .fg(theme_to_color(ThemeToken::TextMuted))
            .bg(theme_to_color(ThemeToken::Surface)),
    )
}

fn draw_menu(frame: &mut Frame, area: Rect, view: &PageView) {
    let width = 30.min(area.width);
    let height = (view.nav.len() as u16 + 4).min(area.height);
    let panel = Rect::new(area.right().saturating_sub(width), area.y, width, height);

    let mut lines: Vec<Line> = view
        .nav
        .iter()
        .enumerate()
        .map(|(idx, link)| {
            Line::styled(
                format!("{} {}", idx + 1, link.label),
                Style::default().fg(theme_to_color(view.link_color(link.id))),
            )
        })
        .collect();
    lines.push(Line::default());
    lines.push(Line::styled(
        format!("e {}", PAGE.cta),
        Style::default()
            .fg(theme_to_color(ThemeToken::Champagne))
            .add_modifier(Modifier::BOLD),
    ));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", view.menu_button_label))
        .border_style(Style::default().fg(theme_to_color(ThemeToken::Border)))
        .style(Style::default().bg(theme_to_color(ThemeToken::Oxblood)));

    frame.render_widget(Clear, panel);
    frame.render_widget(Paragraph::new(lines).block(block), panel);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use royale_protocol::SectionId;

    fn screen(preview: &Preview) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        terminal.draw(|frame| draw(frame, preview)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn nav_shows_brand_and_numbered_links() {
        let preview = Preview::new(&SiteConfig::default(), 80, 10);
        let screen = screen(&preview);
        assert!(screen.contains("7AMRA ROYALE"));
        assert!(screen.contains("1:Mission"));
        assert!(screen.contains("4:Vision"));
        assert!(screen.contains("(no fragment)"));
    }

    #[test]
    fn menu_panel_is_drawn_when_open() {
        let mut preview = Preview::new(&SiteConfig::default(), 80, 10);
        assert!(!screen(&preview).contains("Close menu"));
        preview.apply(Command::ToggleMenu);
        let screen = screen(&preview);
        assert!(screen.contains("Close menu"));
        assert!(screen.contains("scroll locked"));
    }

    #[test]
    fn status_line_shows_fragment() {
        let mut preview = Preview::new(&SiteConfig::default(), 80, 10);
        preview.apply(Command::Select(SectionId::Strategy));
        assert!(screen(&preview).contains("#strategy"));
    }

    #[test]
    fn elevated_nav_uses_oxblood() {
        assert_eq!(
            theme_to_color(ThemeToken::NavElevatedBackground),
            Color::Rgb(0x59, 0x05, 0x05)
        );
        assert_eq!(theme_to_color(ThemeToken::NavBackground), Color::Reset);
    }
}
