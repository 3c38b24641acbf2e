//! Static page copy.

use royale_protocol::SectionId;

/// Marker, heading and optional kicker shown above each content section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading {
    /// Navigable anchor, if the section is part of the nav.
    pub anchor: Option<SectionId>,
    pub marker: &'static str,
    pub title: &'static str,
    pub kicker: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase {
    pub phase: &'static str,
    pub title: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hero {
    pub title_primary: &'static str,
    pub title_secondary: &'static str,
    pub tagline: &'static str,
    pub tagline_ar: &'static str,
    pub subject: &'static str,
    pub cta: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPhrase {
    pub arabic: &'static str,
    pub translation: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mission {
    pub heading: Heading,
    pub paragraphs: &'static [&'static str],
    pub framework: Card,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Genesis {
    pub heading: Heading,
    pub questions: &'static [Card],
    pub quote: &'static str,
    pub quote_ar: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intelligence {
    pub heading: Heading,
    pub stats: &'static [Stat],
    pub insights: &'static [Card],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threats {
    pub heading: Heading,
    pub threats: &'static [Card],
    pub responses_title: &'static str,
    pub responses: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roadmap {
    pub heading: Heading,
    pub phases: &'static [Phase],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vision {
    pub heading: Heading,
    pub metrics_title: &'static str,
    pub metrics: &'static [Metric],
    pub pillars_title: &'static str,
    pub pillars: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Academic {
    pub heading: Heading,
    pub intro: &'static str,
    pub objectives: &'static [&'static str],
    pub project_type_label: &'static str,
    pub project_type: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub lines: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footer {
    pub monogram: &'static str,
    pub brand: &'static str,
    pub about: &'static [&'static str],
    pub columns: &'static [FooterColumn],
    pub copyright: &'static str,
    pub disclaimer: &'static str,
}

/// The whole landing page in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Content {
    pub brand_primary: &'static str,
    pub brand_secondary: &'static str,
    pub cta: &'static str,
    pub hero: Hero,
    pub key_phrase: KeyPhrase,
    pub mission: Mission,
    pub genesis: Genesis,
    pub intelligence: Intelligence,
    pub threats: Threats,
    pub roadmap: Roadmap,
    pub vision: Vision,
    pub academic: Academic,
    pub footer: Footer,
}

pub const PAGE: Content = Content {
    brand_primary: "7AMRA",
    brand_secondary: "ROYALE",
    cta: "Enter",
    hero: Hero {
        title_primary: "7AMRA",
        title_secondary: "ROYALE",
        tagline: "WHERE FORTUNE MEETS FIRE",
        tagline_ar: "بلعب الحظ مع الحمرا",
        subject: "STRATEGIC MANAGEMENT ANALYSIS • TUNISIA ENTERTAINMENT SECTOR",
        cta: "Enter Casino",
    },
    key_phrase: KeyPhrase {
        arabic: "الحمرا مش برّا، الحمرا هنا",
        translation: "The opportunity is not outside, the opportunity is here.",
    },
    mission: Mission {
        heading: Heading {
            anchor: Some(SectionId::Mission),
            marker: "Section 01",
            title: "MISSION BRIEFING",
            kicker: None,
        },
        paragraphs: &[
            "THIS STRATEGIC MANAGEMENT CASE STUDY EXAMINES THE HYPOTHETICAL MARKET ENTRY STRATEGY FOR '7AMRA ROYALE', A CONCEPTUAL VENTURE INTO TUNISIA'S ENTERTAINMENT SECTOR.",
            "THIS ANALYSIS EXPLORES MARKET DYNAMICS, COMPETITIVE CHALLENGES, AND STRATEGIC POSITIONING IN A COMPLEX REGULATORY ENVIRONMENT.",
        ],
        framework: Card {
            title: "Framework",
            body: "THE PROJECT EMPLOYS MILITARY-STYLE OPERATIONAL TERMINOLOGY TO FRAME STRATEGIC BUSINESS CONCEPTS, MAKING THIS AN ENGAGING FRAMEWORK FOR UNDERSTANDING MARKET RECONNAISSANCE, COMPETITIVE ANALYSIS, AND STRATEGIC PLANNING METHODOLOGIES.",
        },
    },
    genesis: Genesis {
        heading: Heading {
            anchor: None,
            marker: "Section 10",
            title: "PHASE ALPHA: THE GENESIS",
            kicker: None,
        },
        questions: &[
            Card {
                title: "MARKET ANALYSIS",
                body: "WHAT DRIVES CONSUMER BEHAVIOR IN HIGHLY REGULATED ENTERTAINMENT MARKETS?",
            },
            Card {
                title: "COMPETITIVE POSITIONING",
                body: "HOW CAN A NEW ENTRANT DIFFERENTIATE AGAINST ESTABLISHED INTERNATIONAL COMPETITORS?",
            },
            Card {
                title: "CULTURAL ADAPTATION",
                body: "WHAT ROLE DOES CULTURAL SENSITIVITY PLAY IN MARKET PENETRATION STRATEGY?",
            },
        ],
        quote: "\"IT'S TIME TO WIN. TIME TO BUILD SOMETHING THAT CHANGES THE GAME ENTIRELY.\"",
        quote_ar: "حان وقت الفوز",
    },
    intelligence: Intelligence {
        heading: Heading {
            anchor: Some(SectionId::Intelligence),
            marker: "Section 11",
            title: "INTELLIGENCE REPORT",
            kicker: Some("Market Reconnaissance"),
        },
        stats: &[
            Stat {
                label: "ANNUAL GROWTH RATE",
                value: "12%",
                description: "YEAR-OVER-YEAR MARKET EXPANSION",
            },
            Stat {
                label: "CAPITAL OUTFLOW",
                value: "$15M",
                description: "ANNUAL SPENDING ON FOREIGN PLATFORMS",
            },
            Stat {
                label: "YOUTH DEMOGRAPHICS",
                value: "42%",
                description: "POPULATION AGED 18-35",
            },
        ],
        insights: &[
            Card {
                title: "UNMET DEMAND",
                body: "THE STEADY ANNUAL GROWTH RATE AND SIGNIFICANT CAPITAL OUTFLOW TO FOREIGN PLATFORMS CONFIRM A ROBUST, UNMET DOMESTIC DEMAND. CONSUMERS ACTIVELY SEEK ALTERNATIVES, INDICATING A RIPE OPPORTUNITY FOR LOCAL MARKET SOLUTIONS.",
            },
            Card {
                title: "DIGITAL NATIVE AUDIENCE",
                body: "THE SUBSTANTIAL YOUTH DEMOGRAPHIC (42% IN THE 18-35 AGE BRACKET) REPRESENTS A DIGITALLY-NATIVE AUDIENCE RECEPTIVE TO MODERN, SOPHISTICATED ONLINE ENTERTAINMENT EXPERIENCES WITH MOBILE-FIRST DESIGN.",
            },
            Card {
                title: "INNOVATION IMPERATIVE",
                body: "CURRENT MARKET CONDITIONS NECESSITATE AN APPROACH THAT IS BOTH INNOVATIVE AND COMPLIANT, OFFERING A SUPERIOR ALTERNATIVE TO EXISTING OFFSHORE OPTIONS WHILE RESPECTING LOCAL REGULATIONS AND CULTURAL NORMS.",
            },
            Card {
                title: "MARKET GAP",
                body: "THE $15M ANNUAL CAPITAL OUTFLOW REPRESENTS REVENUE LEAKAGE TO INTERNATIONAL COMPETITORS, HIGHLIGHTING A SIGNIFICANT MARKET GAP THAT A WELL-POSITIONED LOCAL PLAYER COULD CAPTURE.",
            },
        ],
    },
    threats: Threats {
        heading: Heading {
            anchor: None,
            marker: "Section 12",
            title: "ASSESSING THREATS",
            kicker: Some("Hostile Territory: Market Challenges"),
        },
        threats: &[
            Card {
                title: "Regulatory Uncertainty",
                body: "The legal framework remains complex and ambiguous, requiring careful navigation, expert legal counsel, and adaptive strategic planning to ensure compliance.",
            },
            Card {
                title: "Banking Hesitance",
                body: "Financial institutions exhibit significant caution regarding payment processing, necessitating innovative fintech solutions and alternative payment methods for secure transactions.",
            },
            Card {
                title: "Cultural Sensitivities",
                body: "Respect for local traditions, values, and social norms is paramount, demanding a nuanced and culturally relevant approach to all aspects of business operations.",
            },
            Card {
                title: "International Competition",
                body: "Established offshore players with significant resources pose a formidable threat, requiring a highly differentiated and competitive market positioning strategy.",
            },
        ],
        responses_title: "Strategic Responses",
        responses: &[
            "Build Local Trust",
            "Cultural Relevance",
            "Community Investment",
            "Innovation Leadership",
        ],
    },
    roadmap: Roadmap {
        heading: Heading {
            anchor: Some(SectionId::Strategy),
            marker: "Section 15",
            title: "Operation Build",
            kicker: Some("Strategic Framework"),
        },
        phases: &[
            Phase {
                phase: "Phase 1",
                title: "Foundation",
                items: &[
                    "Legal Compliance",
                    "Technology Infrastructure",
                    "Partnership Development",
                ],
            },
            Phase {
                phase: "Phase 2",
                title: "Launch",
                items: &["Soft Launch", "Brand Building", "Customer Acquisition"],
            },
            Phase {
                phase: "Phase 3",
                title: "Growth",
                items: &[
                    "Market Expansion",
                    "Feature Enhancement",
                    "Community Building",
                ],
            },
            Phase {
                phase: "Phase 4",
                title: "Leadership",
                items: &[
                    "Market Dominance",
                    "Strategic Partnerships",
                    "Innovation Lab",
                ],
            },
        ],
    },
    vision: Vision {
        heading: Heading {
            anchor: Some(SectionId::Vision),
            marker: "Section 16",
            title: "Mission Complete",
            kicker: Some("Phase Foxtrot: The Vision"),
        },
        metrics_title: "Success Metrics",
        metrics: &[
            Metric {
                value: "35%",
                label: "Market Share Target (Within 3 years)",
            },
            Metric {
                value: "4.5+",
                label: "Customer Satisfaction Rating",
            },
            Metric {
                value: "200+",
                label: "Jobs Created Directly",
            },
        ],
        pillars_title: "Vision Pillars",
        pillars: &[
            "Business Excellence",
            "Social Responsibility",
            "Regional Expansion",
            "Technology Leadership",
        ],
    },
    academic: Academic {
        heading: Heading {
            anchor: None,
            marker: "Section 20",
            title: "Academic Learning Objectives",
            kicker: None,
        },
        intro: "This case study serves as a comprehensive example of strategic management principles in action.",
        objectives: &[
            "Market analysis and competitive intelligence gathering",
            "Strategic positioning in complex regulatory environments",
            "Cultural adaptation and localization strategies",
            "Risk assessment and mitigation planning",
            "Multi-phase implementation roadmaps",
            "Measuring success across financial and non-financial metrics",
        ],
        project_type_label: "PROJECT TYPE",
        project_type: "ACADEMIC PROJECT",
    },
    footer: Footer {
        monogram: "7R",
        brand: "7AMRA ROYALE",
        about: &[
            "Strategic Management Analysis",
            "Tunisia's Entertainment Sector",
        ],
        columns: &[
            FooterColumn {
                heading: "Location",
                lines: &["Tunis, Tunisia", "Entertainment Sector"],
            },
            FooterColumn {
                heading: "Framework",
                lines: &["Military-style Operational Terminology", "Date: 11/23"],
            },
        ],
        copyright: "© 2023 7amra Royale. Academic Case Study. All rights reserved.",
        disclaimer: "Hypothetical Market Entry Strategy for Educational Purposes",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_nav_section_has_an_anchor() {
        let anchors: Vec<SectionId> = [
            PAGE.mission.heading,
            PAGE.genesis.heading,
            PAGE.intelligence.heading,
            PAGE.threats.heading,
            PAGE.roadmap.heading,
            PAGE.vision.heading,
            PAGE.academic.heading,
        ]
        .iter()
        .filter_map(|h| h.anchor)
        .collect();
        assert_eq!(anchors, SectionId::ALL.to_vec());
    }

    #[test]
    fn roadmap_has_four_phases_of_three_items() {
        assert_eq!(PAGE.roadmap.phases.len(), 4);
        assert!(PAGE.roadmap.phases.iter().all(|p| p.items.len() == 3));
    }

    #[test]
    fn stats_match_insights() {
        let values: Vec<_> = PAGE.intelligence.stats.iter().map(|s| s.value).collect();
        assert_eq!(values, ["12%", "$15M", "42%"]);
        assert_eq!(PAGE.intelligence.insights.len(), 4);
    }
}
