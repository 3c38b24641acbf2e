//! Lays the page text out in terminal rows and maps rows to page pixels.

use std::ops::Range;

use royale_core::text::TextBlock;
use royale_protocol::{Rect, SectionId, ThemeToken, Viewport};

/// Height of one terminal row in page pixels.
pub const ROW_PX: f64 = 20.0;
/// Width of one terminal column in page pixels.
pub const COL_PX: f64 = 10.0;

const MIN_WIDTH: u16 = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledLine {
    pub text: String,
    pub token: ThemeToken,
}

#[derive(Debug, Clone)]
pub struct PageLayout {
    width: u16,
    pub lines: Vec<StyledLine>,
    /// Row ranges of the anchored sections, in page order.
    pub sections: Vec<(SectionId, Range<usize>)>,
}

impl PageLayout {
    pub fn new(blocks: &[TextBlock], width: u16) -> Self {
        let width = width.max(MIN_WIDTH);
        let mut layout = Self {
            width,
            lines: Vec::new(),
            sections: Vec::new(),
        };
        for block in blocks {
            let start = layout.lines.len();
            if let Some(marker) = &block.marker {
                layout.push(marker, ThemeToken::Amber);
            }
            layout.push(&block.title, ThemeToken::Crimson);
            layout.blank();
            for line in &block.lines {
                if line.is_empty() {
                    layout.blank();
                } else {
                    layout.push(line, ThemeToken::TextSecondary);
                }
            }
            layout.blank();
            if let Some(id) = block.anchor {
                layout.sections.push((id, start..layout.lines.len()));
            }
        }
        layout
    }

    fn push(&mut self, text: &str, token: ThemeToken) {
        for row in wrap(text, usize::from(self.width)) {
            self.lines.push(StyledLine { text: row, token });
        }
    }

    fn blank(&mut self) {
        self.lines.push(StyledLine {
            text: String::new(),
            token: ThemeToken::TextSecondary,
        });
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn section_start(&self, id: SectionId) -> Option<usize> {
        self.sections
            .iter()
            .find(|(section, _)| *section == id)
            .map(|(_, rows)| rows.start)
    }

    /// Page-space bounds of every anchored section.
    pub fn regions(&self) -> impl Iterator<Item = (SectionId, Rect)> + '_ {
        let width = f64::from(self.width) * COL_PX;
        self.sections.iter().map(move |(id, rows)| {
            let top = rows.start as f64 * ROW_PX;
            let height = rows.len() as f64 * ROW_PX;
            (*id, Rect::new(0.0, top, width, height))
        })
    }

    /// The page viewport when `rows` rows are visible starting at `scroll`.
    pub fn viewport(&self, scroll: usize, rows: u16) -> Viewport {
        Viewport::new(
            0.0,
            scroll as f64 * ROW_PX,
            f64::from(self.width) * COL_PX,
            f64::from(rows) * ROW_PX,
        )
    }
}

/// Greedy word wrap on character counts. Leading indentation is kept on the
/// first row; words longer than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let indent_len = text
        .chars()
        .take_while(|c| c.is_whitespace())
        .count()
        .min(width - 1);

    let mut rows = Vec::new();
    let mut row: String = text.chars().take(indent_len).collect();
    let mut row_len = indent_len;
    let mut has_words = false;

    for word in text.split_whitespace() {
        let chars: Vec<char> = word.chars().collect();
        for piece in chars.chunks(width) {
            if has_words && row_len + 1 + piece.len() > width {
                rows.push(std::mem::take(&mut row));
                row_len = 0;
                has_words = false;
            }
            if has_words {
                row.push(' ');
                row_len += 1;
            }
            row.extend(piece.iter());
            row_len += piece.len();
            has_words = true;
        }
    }
    if has_words || rows.is_empty() {
        rows.push(row);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use royale_core::content::PAGE;
    use royale_core::text::render_blocks;

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(wrap("a bb ccc", 4), vec!["a bb", "ccc"]);
        assert_eq!(wrap("a bb ccc", 80), vec!["a bb ccc"]);
    }

    #[test]
    fn splits_long_words() {
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn keeps_leading_indent() {
        assert_eq!(wrap("  ▸ item one", 8), vec!["  ▸ item", "one"]);
    }

    #[test]
    fn empty_text_is_one_blank_row() {
        assert_eq!(wrap("", 10), vec![String::new()]);
    }

    #[test]
    fn sections_are_laid_out_in_order() {
        let layout = PageLayout::new(&render_blocks(&PAGE), 80);
        let ids: Vec<_> = layout.sections.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, SectionId::ALL.to_vec());
        let starts: Vec<_> = layout.sections.iter().map(|(_, rows)| rows.start).collect();
        assert!(starts.windows(2).all(|w| w[0] < w[1]));
        assert!(layout.lines.iter().all(|l| l.text.chars().count() <= 80));
    }

    #[test]
    fn narrower_terminal_makes_a_taller_page() {
        let blocks = render_blocks(&PAGE);
        let wide = PageLayout::new(&blocks, 120);
        let narrow = PageLayout::new(&blocks, 40);
        assert!(narrow.height() > wide.height());
    }

    #[test]
    fn regions_use_row_pixels() {
        let layout = PageLayout::new(&render_blocks(&PAGE), 80);
        let (id, rect) = layout.regions().next().unwrap();
        assert_eq!(id, SectionId::Mission);
        let start = layout.section_start(SectionId::Mission).unwrap();
        assert_eq!(rect.y, start as f64 * ROW_PX);
        assert_eq!(rect.w, 800.0);
        assert_eq!(layout.viewport(3, 10).y, 60.0);
    }
}
