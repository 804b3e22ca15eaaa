//! Scripted chat content and breakout research cards
//!
//! The Business AI dock is a mock: conversation content is hard-coded per
//! business category, and the breakout cards carry static market-research
//! copy. Nothing here touches the network.

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    Assistant,
    Applicant,
}

/// A single message in the dock transcript
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub body: String,
}

/// A business category selectable from the landing flow
#[derive(Debug, Clone, Copy)]
pub struct BusinessCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const DEFAULT_CATEGORY: &str = "general";

pub fn business_categories() -> &'static [BusinessCategory] {
    &[
        BusinessCategory {
            id: "restaurants",
            title: "Restaurants",
            subtitle: "Licensing guidance",
        },
        BusinessCategory {
            id: "retail",
            title: "Retail",
            subtitle: "Storefront setup",
        },
        BusinessCategory {
            id: "professional-services",
            title: "Professional Services",
            subtitle: "Advisory licensing",
        },
    ]
}

/// Resolve a requested category id to a known one, falling back to the
/// general category when unmatched.
pub fn resolve_category(requested: &str) -> &'static str {
    business_categories()
        .iter()
        .find(|category| category.id == requested)
        .map(|category| category.id)
        .unwrap_or(DEFAULT_CATEGORY)
}

/// Opening assistant message for a category
pub fn initial_message(category: &str) -> &'static str {
    match category {
        "restaurants" => {
            "Before initiating the licensing process, we need to identify the most suitable \
             legal structure, business activities, and physical space requirements. While \
             certain aspects may already be predefined, others require some more clarification \
             to ensure the right decisions are made."
        }
        "retail" => {
            "Let's map out your storefront concept. I can walk you through trade name \
             reservation, premises requirements, and the approvals your retail activities need."
        }
        "professional-services" => {
            "Advisory firms follow a lighter licensing track. I can outline the professional \
             license requirements and the documents you will need to prepare."
        }
        _ => {
            "Welcome to the AI Business assistant. Tell me about the business you want to \
             start in Abu Dhabi and I will map the licensing journey for you."
        }
    }
}

/// Canned assistant replies, cycled in order for each applicant message
pub fn scripted_replies(category: &str) -> &'static [&'static str] {
    match category {
        "restaurants" => &[
            "Based on your responses, a full-service restaurant with charcoal BBQ services \
             fits a Commercial License on the Abu Dhabi mainland. I have prefilled the \
             business activities accordingly.",
            "I pulled the market research for Corniche-area dining. Open the breakout cards \
             to review cuisine popularity, the competitor landscape, and the gap analysis.",
            "Your licensing stage has two items waiting on you: the revised financial \
             projections and the AED 2,500 licensing fee. Settling the fee first keeps the \
             compliance review moving.",
            "Once licensing is approved I will propose inspection windows automatically. \
             Nothing else is needed from you at this stage.",
        ],
        _ => &[
            "I have noted that. Let me line up the licensing requirements that apply to your \
             case.",
            "You can track every step from the journey timeline. I will flag anything that \
             needs your input.",
        ],
    }
}

/// One static market-research breakout card
#[derive(Debug, Clone)]
pub struct BreakoutCard {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub rows: &'static [(&'static str, &'static str)],
    pub footnote: &'static str,
}

/// The fixed breakout deck: cuisine popularity, competitor landscape,
/// gap analysis.
pub fn breakout_cards() -> &'static [BreakoutCard] {
    &[
        BreakoutCard {
            id: "cuisine-popularity",
            title: "Cuisine popularity",
            subtitle: "Dining demand across Abu Dhabi mainland, trailing 12 months",
            rows: &[
                ("Emirati fusion", "32% of searches, up 9 pts year over year"),
                ("Levantine grill", "24% of searches, steady"),
                ("Japanese", "17% of searches, up 4 pts"),
                ("Italian", "14% of searches, down 2 pts"),
                ("Indian", "13% of searches, steady"),
            ],
            footnote: "Aggregated from tourism-board dining surveys and delivery platform trends.",
        },
        BreakoutCard {
            id: "competitor-landscape",
            title: "Competitor landscape",
            subtitle: "Licensed full-service restaurants within 3 km of the Corniche",
            rows: &[
                ("Al Meylas", "Emirati fusion, 4.6 rating, premium pricing"),
                ("Beit El Khetyar", "Levantine, 4.4 rating, family positioning"),
                ("Zuma Abu Dhabi", "Japanese, 4.7 rating, destination dining"),
                ("Villa Toscana", "Italian, 4.3 rating, hotel anchored"),
            ],
            footnote: "Six additional applications are pending in this corridor this quarter.",
        },
        BreakoutCard {
            id: "gap-analysis",
            title: "Gap analysis",
            subtitle: "Where demand outpaces licensed supply",
            rows: &[
                ("Charcoal BBQ", "High search volume, two licensed operators"),
                ("Late-night dining", "Demand peaks 11pm-1am, limited coverage"),
                ("Waterfront family seating", "Strong weekend demand, waitlists common"),
            ],
            footnote: "A charcoal BBQ concept with late service addresses the widest gap.",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_category() {
        assert_eq!(resolve_category("restaurants"), "restaurants");
        assert_eq!(resolve_category("unknown"), DEFAULT_CATEGORY);
        assert_eq!(resolve_category(""), DEFAULT_CATEGORY);
    }

    #[test]
    fn test_scripted_replies_nonempty() {
        assert!(!scripted_replies("restaurants").is_empty());
        assert!(!scripted_replies("general").is_empty());
    }

    #[test]
    fn test_breakout_deck() {
        let cards = breakout_cards();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].id, "cuisine-popularity");
        assert_eq!(cards[2].id, "gap-analysis");
        assert!(cards.iter().all(|card| !card.rows.is_empty()));
    }
}
