//! Frontend Models
//!
//! Card data structures and the finite icon/colour sets they draw from.

use std::fmt;

use chrono::NaiveDateTime;
use ulid::Ulid;

use crate::clock;

/// Stable card identifier, unique within the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardId(pub Ulid);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Icon shown next to the card title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardIcon {
    #[default]
    Listening,
    Document,
    Image,
    Star,
    Bolt,
}

/// Icon options offered by the add form
pub const CARD_ICONS: &[(CardIcon, &str)] = &[
    (CardIcon::Listening, "Listening"),
    (CardIcon::Document, "Document"),
    (CardIcon::Image, "Image"),
    (CardIcon::Star, "Star"),
    (CardIcon::Bolt, "Bolt"),
];

impl CardIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            CardIcon::Listening => "🎧",
            CardIcon::Document => "📄",
            CardIcon::Image => "🖼",
            CardIcon::Star => "★",
            CardIcon::Bolt => "⚡",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TitleColor {
    #[default]
    White,
    Purple,
    Amber,
}

pub const TITLE_COLORS: &[(TitleColor, &str)] = &[
    (TitleColor::White, "White"),
    (TitleColor::Purple, "Purple"),
    (TitleColor::Amber, "Amber"),
];

impl TitleColor {
    pub fn class(self) -> &'static str {
        match self {
            TitleColor::White => "title-white",
            TitleColor::Purple => "title-purple",
            TitleColor::Amber => "title-amber",
        }
    }
}

/// Footer colour; `Gray` is the fallback for anything unrecognised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagColor {
    #[default]
    Green,
    Blue,
    Red,
    Gray,
}

/// Tag colour options offered by the add form
pub const TAG_COLORS: &[(TagColor, &str)] = &[
    (TagColor::Green, "Green"),
    (TagColor::Blue, "Blue"),
    (TagColor::Red, "Red"),
];

impl TagColor {
    pub fn value(self) -> &'static str {
        match self {
            TagColor::Green => "green",
            TagColor::Blue => "blue",
            TagColor::Red => "red",
            TagColor::Gray => "gray",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "green" => TagColor::Green,
            "blue" => TagColor::Blue,
            "red" => TagColor::Red,
            _ => TagColor::Gray,
        }
    }

    pub fn footer_class(self) -> &'static str {
        match self {
            TagColor::Green => "footer-green",
            TagColor::Blue => "footer-blue",
            TagColor::Red => "footer-red",
            TagColor::Gray => "footer-gray",
        }
    }

    pub fn download_button_class(self) -> &'static str {
        match self {
            TagColor::Green => "download-btn text-green",
            TagColor::Blue => "download-btn text-blue",
            TagColor::Red => "download-btn text-red",
            TagColor::Gray => "download-btn text-gray",
        }
    }
}

/// Attached file shown in the card footer
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Download {
    pub file_name: Option<String>,
    /// Human-readable size, e.g. "1.50 MB"
    pub file_size: Option<String>,
    /// Object URL for image previews
    pub preview: Option<String>,
}

/// Footer annotation: detail lines plus an optional timestamp
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FooterTag {
    pub details: Vec<String>,
    pub timestamp: Option<NaiveDateTime>,
}

/// Card contents before the store assigns an id
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewCard {
    pub title: String,
    pub description: String,
    pub icon: CardIcon,
    pub title_color: TitleColor,
    pub tag_color: TagColor,
    pub download: Option<Download>,
    pub tag: Option<FooterTag>,
    pub download_open: bool,
    pub tag_open: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    pub description: String,
    pub icon: CardIcon,
    pub title_color: TitleColor,
    pub tag_color: TagColor,
    pub download: Option<Download>,
    pub tag: Option<FooterTag>,
    pub download_open: bool,
    pub tag_open: bool,
}

impl Card {
    pub fn from_new(id: CardId, card: NewCard) -> Self {
        Self {
            id,
            title: card.title,
            description: card.description,
            icon: card.icon,
            title_color: card.title_color,
            tag_color: card.tag_color,
            download: card.download,
            tag: card.tag,
            download_open: card.download_open,
            tag_open: card.tag_open,
        }
    }

    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() { "Untitled" } else { &self.title }
    }

    pub fn display_description(&self) -> &str {
        if self.description.trim().is_empty() {
            "No description provided"
        } else {
            &self.description
        }
    }

    /// Download block is visible
    pub fn shows_download(&self) -> bool {
        self.download_open && self.download.is_some()
    }

    /// Tag block is visible (open and has at least one detail line)
    pub fn shows_tag(&self) -> bool {
        self.tag_open && self.tag.as_ref().is_some_and(|t| !t.details.is_empty())
    }

    pub fn tag_timestamp_label(&self) -> Option<String> {
        self.tag
            .as_ref()
            .and_then(|t| t.timestamp.as_ref())
            .map(clock::format_timestamp)
    }
}

/// Per-card guard so repeated delete clicks schedule removal only once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeleteLatch {
    triggered: bool,
}

impl DeleteLatch {
    /// Returns true only on the first call
    pub fn trigger(&mut self) -> bool {
        !std::mem::replace(&mut self.triggered, true)
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered
    }
}

/// Demonstration cards shown on first load
pub fn sample_cards() -> Vec<NewCard> {
    let tag = || FooterTag {
        details: vec![
            "Created by: Manab Biswas".to_string(),
            "Last updated: 28/03/2025".to_string(),
        ],
        timestamp: None,
    };

    let download = || Download {
        file_size: Some("1.5MB".to_string()),
        ..Default::default()
    };

    vec![
        NewCard {
            title: "Card 1".to_string(),
            description: "This is My first card. Lorem ipsum dolor sit ametit. Nostrum, soluta?".to_string(),
            tag_color: TagColor::Green,
            download: Some(download()),
            tag: Some(tag()),
            download_open: true,
            ..Default::default()
        },
        NewCard {
            title: "Card 2".to_string(),
            description: "This is My second card. Lorem ipsum dolor sit ametit. Nostrum, soluta?".to_string(),
            tag_color: TagColor::Green,
            download: Some(download()),
            tag: Some(tag()),
            download_open: true,
            ..Default::default()
        },
        NewCard {
            title: "Card 3".to_string(),
            description: "A comprehensive overview of the project with extended description showcasing multiple features and capabilities.".to_string(),
            tag_color: TagColor::Green,
            download: Some(download()),
            tag: Some(tag()),
            download_open: true,
            ..Default::default()
        },
        NewCard {
            title: "Card 4".to_string(),
            description: "Exploring the intricacies of modern web development and design principles.".to_string(),
            tag_color: TagColor::Red,
            download: Some(download()),
            tag: Some(tag()),
            tag_open: true,
            ..Default::default()
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_card(new: NewCard) -> Card {
        Card::from_new(CardId(Ulid::from_parts(1, 1)), new)
    }

    #[test]
    fn test_card_id_displays_as_ulid_text() {
        let id = CardId(Ulid::from_parts(1, 1));
        assert_eq!(id.to_string(), "00000000010000000000000001");
    }

    #[test]
    fn test_blank_text_falls_back() {
        let card = make_card(NewCard {
            title: "   ".to_string(),
            ..Default::default()
        });
        assert_eq!(card.display_title(), "Untitled");
        assert_eq!(card.display_description(), "No description provided");
    }

    #[test]
    fn test_tag_block_needs_open_flag_and_details() {
        let mut card = make_card(NewCard {
            tag: Some(FooterTag::default()),
            tag_open: true,
            ..Default::default()
        });
        assert!(!card.shows_tag());

        card.tag = Some(FooterTag { details: vec!["ready".into()], timestamp: None });
        assert!(card.shows_tag());

        card.tag_open = false;
        assert!(!card.shows_tag());
    }

    #[test]
    fn test_download_block_needs_open_flag() {
        let card = make_card(NewCard {
            download: Some(Download::default()),
            download_open: false,
            ..Default::default()
        });
        assert!(!card.shows_download());
    }

    #[test]
    fn test_unknown_tag_color_is_gray() {
        assert_eq!(TagColor::from_value("blue"), TagColor::Blue);
        assert_eq!(TagColor::from_value("purple"), TagColor::Gray);
        assert_eq!(TagColor::Gray.footer_class(), "footer-gray");
    }

    #[test]
    fn test_delete_latch_fires_once() {
        let mut latch = DeleteLatch::default();
        assert!(latch.trigger());
        assert!(!latch.trigger());
        assert!(latch.is_triggered());
    }

    #[test]
    fn test_sample_cards() {
        let samples = sample_cards();
        assert_eq!(samples.len(), 4);
        assert!(samples[3].tag_open && !samples[3].download_open);
        assert_eq!(samples[3].tag_color, TagColor::Red);
    }
}
