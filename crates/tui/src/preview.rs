//! Interactive state of the terminal preview.

use crossterm::event::KeyCode;
use royale_core::content::PAGE;
use royale_core::text::{TextBlock, render_blocks};
use royale_core::{
    MemoryFragmentStore, PageShell, SharedScrollLock, ShellUpdate, SiteConfig, ViewportObserver,
};
use royale_protocol::{PageView, SectionId};
use tracing::info;

use crate::layout::{PageLayout, StyledLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// Scroll by rows.
    Scroll(isize),
    /// Scroll by screens.
    Page(isize),
    Top,
    Bottom,
    ToggleMenu,
    CloseMenu,
    Enter,
    Select(SectionId),
}

pub fn key_command(code: KeyCode) -> Option<Command> {
    let command = match code {
        KeyCode::Char('q') => Command::Quit,
        KeyCode::Esc => Command::CloseMenu,
        KeyCode::Up | KeyCode::Char('k') => Command::Scroll(-1),
        KeyCode::Down | KeyCode::Char('j') => Command::Scroll(1),
        KeyCode::PageUp => Command::Page(-1),
        KeyCode::PageDown | KeyCode::Char(' ') => Command::Page(1),
        KeyCode::Home | KeyCode::Char('g') => Command::Top,
        KeyCode::End | KeyCode::Char('G') => Command::Bottom,
        KeyCode::Char('m') => Command::ToggleMenu,
        KeyCode::Char('e') | KeyCode::Enter => Command::Enter,
        KeyCode::Char(c @ '1'..='4') => {
            let idx = c.to_digit(10)? as usize - 1;
            Command::Select(*SectionId::ALL.get(idx)?)
        }
        _ => return None,
    };
    Some(command)
}

/// The page as seen through a terminal window of `rows` page rows.
pub struct Preview {
    blocks: Vec<TextBlock>,
    layout: PageLayout,
    observer: ViewportObserver,
    shell: PageShell<SharedScrollLock, MemoryFragmentStore>,
    scroll: usize,
    rows: u16,
}

impl Preview {
    pub fn new(config: &SiteConfig, width: u16, rows: u16) -> Self {
        let blocks = render_blocks(&PAGE);
        let layout = PageLayout::new(&blocks, width);
        let mut observer = ViewportObserver::new(config.observer.clone());
        for (id, rect) in layout.regions() {
            observer.observe(id, rect);
        }
        let located: Vec<SectionId> = layout.sections.iter().map(|(id, _)| *id).collect();
        let shell = PageShell::new(
            config,
            &located,
            SharedScrollLock::new(),
            MemoryFragmentStore::default(),
        );
        info!(width, rows, sections = located.len(), "preview started");

        let mut preview = Self {
            blocks,
            layout,
            observer,
            shell,
            scroll: 0,
            rows,
        };
        preview.sync();
        preview
    }

    pub fn view(&self) -> PageView {
        self.shell.view()
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn fragment(&self) -> &str {
        self.shell.fragments().fragment()
    }

    pub fn scroll_locked(&self) -> bool {
        self.shell.scroll_lock().is_locked()
    }

    pub fn visible_lines(&self) -> &[StyledLine] {
        let end = (self.scroll + usize::from(self.rows)).min(self.layout.height());
        &self.layout.lines[self.scroll.min(end)..end]
    }

    fn max_scroll(&self) -> usize {
        self.layout.height().saturating_sub(usize::from(self.rows))
    }

    pub fn apply(&mut self, command: Command) -> ShellUpdate {
        match command {
            Command::Quit => ShellUpdate::default(),
            Command::Scroll(delta) => self.scroll_by(delta),
            Command::Page(pages) => self.scroll_by(pages * self.rows.max(1) as isize),
            Command::Top => self.scroll_by(-(self.scroll as isize)),
            Command::Bottom => self.scroll_by(self.max_scroll() as isize),
            Command::ToggleMenu => self.shell.toggle_menu(),
            Command::CloseMenu => self.shell.close_menu(),
            Command::Enter => self.shell.enter(),
            Command::Select(id) => {
                // Following a nav link adds a history entry and jumps there.
                let update = self.shell.select_nav(id);
                self.shell.fragments_mut().push(id.as_str());
                match self.layout.section_start(id) {
                    Some(row) => update.merge(self.jump_to(row)),
                    None => update,
                }
            }
        }
    }

    /// User scrolling; ignored while the menu holds the scroll lock.
    fn scroll_by(&mut self, delta: isize) -> ShellUpdate {
        if self.scroll_locked() {
            return ShellUpdate::default();
        }
        self.jump_to(self.scroll.saturating_add_signed(delta))
    }

    fn jump_to(&mut self, row: usize) -> ShellUpdate {
        self.scroll = row.min(self.max_scroll());
        self.sync()
    }

    pub fn resize(&mut self, width: u16, rows: u16) -> ShellUpdate {
        if width != self.layout.width() {
            self.layout = PageLayout::new(&self.blocks, width);
            for (id, rect) in self.layout.regions() {
                self.observer.observe(id, rect);
            }
        }
        self.rows = rows;
        self.jump_to(self.scroll)
    }

    fn sync(&mut self) -> ShellUpdate {
        let viewport = self.layout.viewport(self.scroll, self.rows);
        let update = self.shell.on_scroll(viewport.y);
        match self.observer.sample(&viewport) {
            Some(batch) => update.merge(self.shell.on_observations(&batch)),
            None => update,
        }
    }

    /// Stop tracking and release the scroll lock.
    pub fn close(&mut self) {
        self.shell.teardown();
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preview() -> Preview {
        Preview::new(&SiteConfig::default(), 80, 10)
    }

    #[test]
    fn starts_idle_at_the_top() {
        let preview = preview();
        let view = preview.view();
        assert_eq!(preview.scroll(), 0);
        assert!(!view.elevated);
        assert_eq!(view.active, None);
        assert_eq!(preview.fragment(), "");
        assert_eq!(preview.visible_lines().len(), 10);
    }

    #[test]
    fn scrolling_past_threshold_elevates_nav() {
        let mut preview = preview();
        // Two rows are 40px, three are 60px.
        assert!(preview.apply(Command::Scroll(2)).is_empty());
        assert!(preview.apply(Command::Scroll(1)).elevation);
        assert!(preview.view().elevated);
        assert!(preview.apply(Command::Top).elevation);
        assert!(!preview.view().elevated);
    }

    #[test]
    fn selecting_a_section_jumps_and_activates_it() {
        let mut preview = preview();
        let update = preview.apply(Command::Select(SectionId::Vision));
        assert!(update.active);
        assert_eq!(
            Some(preview.scroll()),
            preview.layout().section_start(SectionId::Vision)
        );
        assert_eq!(preview.view().active, Some(SectionId::Vision));
        assert_eq!(preview.fragment(), "vision");
    }

    #[test]
    fn open_menu_blocks_scrolling() {
        let mut preview = preview();
        preview.apply(Command::ToggleMenu);
        assert!(preview.scroll_locked());
        preview.apply(Command::Scroll(5));
        preview.apply(Command::Page(1));
        assert_eq!(preview.scroll(), 0);

        preview.apply(Command::CloseMenu);
        assert!(!preview.scroll_locked());
        preview.apply(Command::Scroll(5));
        assert_eq!(preview.scroll(), 5);
    }

    #[test]
    fn nav_selection_from_menu_releases_lock() {
        let mut preview = preview();
        preview.apply(Command::ToggleMenu);
        let update = preview.apply(Command::Select(SectionId::Strategy));
        assert!(update.menu);
        assert!(!preview.scroll_locked());
        assert!(!preview.view().menu_open);
    }

    #[test]
    fn reading_the_page_visits_every_section() {
        let mut preview = preview();
        let mut seen = Vec::new();
        loop {
            let before = preview.scroll();
            if preview.apply(Command::Scroll(1)).active {
                seen.extend(preview.view().active);
            }
            if preview.scroll() == before {
                break;
            }
        }
        assert_eq!(seen.first(), Some(&SectionId::Mission));
        for id in SectionId::ALL {
            assert!(seen.contains(&id), "never activated {id}");
        }
    }

    #[test]
    fn resize_relays_out_and_clamps_scroll() {
        let mut preview = preview();
        preview.apply(Command::Bottom);
        let bottom = preview.scroll();
        preview.resize(120, 10);
        assert!(preview.scroll() <= bottom);
        assert_eq!(preview.layout().width(), 120);
        assert_eq!(preview.visible_lines().len(), 10);
    }

    #[test]
    fn close_releases_lock() {
        let mut preview = preview();
        preview.apply(Command::ToggleMenu);
        preview.close();
        assert!(!preview.scroll_locked());
    }

    #[test]
    fn key_bindings() {
        assert_eq!(key_command(KeyCode::Char('q')), Some(Command::Quit));
        assert_eq!(key_command(KeyCode::Char('m')), Some(Command::ToggleMenu));
        assert_eq!(
            key_command(KeyCode::Char('2')),
            Some(Command::Select(SectionId::Intelligence))
        );
        assert_eq!(key_command(KeyCode::Char('5')), None);
        assert_eq!(key_command(KeyCode::Down), Some(Command::Scroll(1)));
    }
}
