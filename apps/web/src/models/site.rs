use serde::{Deserialize, Serialize};

/// The site owner's contact card, shown in the hero and on printed documents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub email: String,
    pub location: String,
    pub github: String,
    pub linkedin: String,
}

impl Profile {
    /// Lowercase ASCII slug of the owner's name, e.g. `"Jürgen Meyer"` → `"juergen-meyer"`.
    pub fn file_slug(&self) -> String {
        let mut slug = String::with_capacity(self.name.len());
        for c in self.name.chars() {
            let mapped = match c {
                'ä' | 'Ä' => Some("ae"),
                'ö' | 'Ö' => Some("oe"),
                'ü' | 'Ü' => Some("ue"),
                'ß' => Some("ss"),
                _ => None,
            };
            if let Some(m) = mapped {
                slug.push_str(m);
            } else if c.is_ascii_alphanumeric() {
                slug.push(c.to_ascii_lowercase());
            } else if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        }
        let trimmed = slug.trim_end_matches('-');
        if trimmed.is_empty() {
            "document".to_string()
        } else {
            trimmed.to_string()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavItem {
    pub label: String,
    pub href: String, // "#section" anchors or locale-relative paths
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolboxItem {
    pub name: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hobby {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub href: Option<String>,
    pub year: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Testimonial {
    pub rating: u8, // 1 – 5
    pub text: String,
    pub name: String,
    pub company: String,
}

impl Testimonial {
    /// Star glyphs for the rating, clamped to 0–5.
    pub fn stars(&self) -> String {
        let filled = usize::from(self.rating.min(5));
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }
}
