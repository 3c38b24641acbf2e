//! Plain-text rendering of the page, one block per page section.

use royale_protocol::SectionId;

use crate::content::{Card, Content, Heading};

/// A page section as plain text. `lines` are unwrapped paragraphs; an
/// empty string is a paragraph break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    pub anchor: Option<SectionId>,
    pub marker: Option<String>,
    pub title: String,
    pub lines: Vec<String>,
}

impl TextBlock {
    fn new(heading: &Heading) -> Self {
        let title = match heading.kicker {
            Some(kicker) => format!("{} · {}", heading.title, kicker),
            None => heading.title.to_string(),
        };
        Self {
            anchor: heading.anchor,
            marker: Some(heading.marker.to_string()),
            title,
            lines: Vec::new(),
        }
    }

    fn untitled(title: String) -> Self {
        Self {
            anchor: None,
            marker: None,
            title,
            lines: Vec::new(),
        }
    }

    fn line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    fn gap(&mut self) -> &mut Self {
        self.line("")
    }

    fn cards(&mut self, cards: &[Card]) -> &mut Self {
        for card in cards {
            self.line(format!("■ {}", card.title)).line(card.body).gap();
        }
        self
    }

    fn bullets(&mut self, marker: &str, items: &[&str]) -> &mut Self {
        for item in items {
            self.line(format!("{marker} {item}"));
        }
        self
    }
}

pub fn render_blocks(content: &Content) -> Vec<TextBlock> {
    let mut blocks = Vec::with_capacity(10);

    let hero = &content.hero;
    let mut block = TextBlock::untitled(format!("{} {}", hero.title_primary, hero.title_secondary));
    block
        .line(hero.tagline)
        .line(hero.tagline_ar)
        .gap()
        .line(hero.subject)
        .gap()
        .line(format!("[ {} ]", hero.cta));
    blocks.push(block);

    let mut block = TextBlock::untitled(content.key_phrase.arabic.to_string());
    block.line(content.key_phrase.translation);
    blocks.push(block);

    let mission = &content.mission;
    let mut block = TextBlock::new(&mission.heading);
    for paragraph in mission.paragraphs {
        block.line(*paragraph).gap();
    }
    block.cards(&[mission.framework]);
    blocks.push(block);

    let genesis = &content.genesis;
    let mut block = TextBlock::new(&genesis.heading);
    block
        .cards(genesis.questions)
        .line(genesis.quote)
        .line(genesis.quote_ar);
    blocks.push(block);

    let intel = &content.intelligence;
    let mut block = TextBlock::new(&intel.heading);
    for stat in intel.stats {
        block.line(format!("{:>6}  {} · {}", stat.value, stat.label, stat.description));
    }
    block.gap().cards(intel.insights);
    blocks.push(block);

    let threats = &content.threats;
    let mut block = TextBlock::new(&threats.heading);
    block
        .cards(threats.threats)
        .line(threats.responses_title)
        .bullets("•", threats.responses);
    blocks.push(block);

    let roadmap = &content.roadmap;
    let mut block = TextBlock::new(&roadmap.heading);
    for (idx, phase) in roadmap.phases.iter().enumerate() {
        block
            .line(format!("{:02}  {} · {}", idx + 1, phase.phase, phase.title))
            .bullets("  ▸", phase.items)
            .gap();
    }
    blocks.push(block);

    let vision = &content.vision;
    let mut block = TextBlock::new(&vision.heading);
    block.line(vision.metrics_title);
    for metric in vision.metrics {
        block.line(format!("{:>6}  {}", metric.value, metric.label));
    }
    block
        .gap()
        .line(vision.pillars_title)
        .bullets("◆", vision.pillars);
    blocks.push(block);

    let academic = &content.academic;
    let mut block = TextBlock::new(&academic.heading);
    block
        .line(academic.intro)
        .gap()
        .bullets("✓", academic.objectives)
        .gap()
        .line(format!("{}: {}", academic.project_type_label, academic.project_type));
    blocks.push(block);

    let footer = &content.footer;
    let mut block = TextBlock::untitled(footer.brand.to_string());
    for line in footer.about {
        block.line(*line);
    }
    for column in footer.columns {
        block.gap().line(column.heading.to_uppercase());
        for line in column.lines {
            block.line(*line);
        }
    }
    block.gap().line(footer.copyright).line(footer.disclaimer);
    blocks.push(block);

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PAGE;

    #[test]
    fn blocks_follow_page_order() {
        let blocks = render_blocks(&PAGE);
        assert_eq!(blocks.len(), 10);
        let anchors: Vec<_> = blocks.iter().filter_map(|b| b.anchor).collect();
        assert_eq!(anchors, SectionId::ALL.to_vec());
        assert_eq!(blocks[0].title, "7AMRA ROYALE");
        assert_eq!(blocks[2].marker.as_deref(), Some("Section 01"));
    }

    #[test]
    fn kicker_joins_title() {
        let blocks = render_blocks(&PAGE);
        let intel = blocks
            .iter()
            .find(|b| b.anchor == Some(SectionId::Intelligence))
            .unwrap();
        assert_eq!(intel.title, "INTELLIGENCE REPORT · Market Reconnaissance");
        assert!(intel.lines.iter().any(|l| l.contains("$15M")));
    }

    #[test]
    fn roadmap_lists_every_item() {
        let blocks = render_blocks(&PAGE);
        let roadmap = blocks
            .iter()
            .find(|b| b.anchor == Some(SectionId::Strategy))
            .unwrap();
        assert_eq!(roadmap.lines.iter().filter(|l| l.starts_with("  ▸")).count(), 12);
        assert!(roadmap.lines.iter().any(|l| l == "01  Phase 1 · Foundation"));
    }
}
