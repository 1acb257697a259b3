use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of resume/cover-letter presentations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeType {
    Frontend,
    Backend,
    Fullstack,
}

impl ResumeType {
    pub const ALL: [ResumeType; 3] = [
        ResumeType::Frontend,
        ResumeType::Backend,
        ResumeType::Fullstack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResumeType::Frontend => "frontend",
            ResumeType::Backend => "backend",
            ResumeType::Fullstack => "fullstack",
        }
    }
}

impl fmt::Display for ResumeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownResumeType(pub String);

impl fmt::Display for UnknownResumeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' is not one of: frontend, backend, fullstack",
            self.0
        )
    }
}

impl std::error::Error for UnknownResumeType {}

impl FromStr for ResumeType {
    type Err = UnknownResumeType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "frontend" => Ok(ResumeType::Frontend),
            "backend" => Ok(ResumeType::Backend),
            "fullstack" => Ok(ResumeType::Fullstack),
            other => Err(UnknownResumeType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub skill: String,
    pub level: u8, // 1 – 5
    pub years: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<Skill>,
}

/// One resume variant in one language.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResumeConfig {
    pub title: String,
    pub position: String,
    pub profile: String,
    pub skill_categories: Vec<SkillCategory>,
    pub key_highlights: Vec<String>,
}

/// One cover-letter variant in one language.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterConfig {
    pub title: String,
    pub position: String,
    pub recipient: String,
    pub greeting: String,
    pub paragraphs: Vec<String>,
    pub closing: String,
}

/// Which printable document a page or export refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Resume,
    CoverLetter,
}

impl DocumentKind {
    /// Path segment of the rendered page, e.g. `/en/cover-letter/backend`.
    pub fn page_segment(&self) -> &'static str {
        match self {
            DocumentKind::Resume => "resume",
            DocumentKind::CoverLetter => "cover-letter",
        }
    }
}
