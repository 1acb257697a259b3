// Static content records. Built once from the message bundles, never mutated.

pub mod resume;
pub mod site;

pub use resume::{CoverLetterConfig, DocumentKind, ResumeConfig, ResumeType, SkillCategory};
pub use site::{Hobby, NavItem, Profile, Project, Testimonial, ToolboxItem};
