use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Destination used by link blocks that carry no `href`.
pub const LINK_FALLBACK_HREF: &str = "#";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Author {
    pub avatar_url: String,
    pub name: String,
    pub role: String,
}

/// One unit of a post body.
///
/// Unknown `kind` values deserialize into [`ContentBlock::Unsupported`] and are skipped when rendering.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum::EnumIs, strum::IntoStaticStr,
)]
#[serde(tag = "kind", rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContentBlock {
    Paragraph {
        text: String,
    },
    Link {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        href: Option<String>,
    },
    #[serde(other)]
    Unsupported,
}

impl ContentBlock {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph { text: text.into() }
    }

    pub fn link(text: impl Into<String>) -> Self {
        Self::Link {
            text: text.into(),
            href: None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Paragraph { text } | Self::Link { text, .. } => Some(text),
            Self::Unsupported => None,
        }
    }

    /// Anchor destination for link blocks, `None` for everything else.
    pub fn href(&self) -> Option<&str> {
        match self {
            Self::Link { href, .. } => Some(href.as_deref().unwrap_or(LINK_FALLBACK_HREF)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub author: Author,
    pub published_at: Timestamp,
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

#[cfg(test)]
mod post_tests {
    use super::{ContentBlock, LINK_FALLBACK_HREF};
    use pretty_assertions::assert_eq;
    use test_log::test;

    #[test]
    fn test_content_block_text_and_href() {
        let paragraph = ContentBlock::paragraph("Hello");
        assert_eq!(paragraph.text(), Some("Hello"));
        assert_eq!(paragraph.href(), None);
        assert!(paragraph.is_paragraph());

        let link = ContentBlock::link("See more");
        assert_eq!(link.text(), Some("See more"));
        assert_eq!(link.href(), Some(LINK_FALLBACK_HREF));

        let link = ContentBlock::Link {
            text: "jane.design/doctorcare".to_string(),
            href: Some("https://jane.design/doctorcare".to_string()),
        };
        assert_eq!(link.href(), Some("https://jane.design/doctorcare"));

        assert_eq!(ContentBlock::Unsupported.text(), None);
        assert_eq!(ContentBlock::Unsupported.href(), None);
    }

    #[test]
    fn test_content_block_kind_name() {
        let kind: &'static str = (&ContentBlock::paragraph("a")).into();
        assert_eq!(kind, "paragraph");
        let kind: &'static str = (&ContentBlock::link("a")).into();
        assert_eq!(kind, "link");
    }
}
