//! Faculty record data structures.
//!
//! The wire shape follows the server's JSON: camelCase field names and the
//! server-assigned identifier under `_id`.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// One faculty member's persisted profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FacultyRecord {
    /// Server-assigned identifier, absent until the record is persisted
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Full name (required)
    #[serde(default)]
    pub name: String,

    /// Academic position (e.g., "Professor")
    #[serde(default)]
    pub position: String,

    /// Primary field of specialization
    #[serde(default)]
    pub specialization: String,

    /// Education summary
    #[serde(default)]
    pub education: String,

    /// Experience summary
    #[serde(default)]
    pub experience: String,

    /// Contact email (required)
    #[serde(default)]
    pub email: String,

    /// Contact phone
    #[serde(default)]
    pub phone: String,

    /// Office location
    #[serde(default)]
    pub office: String,

    /// Department name
    #[serde(default)]
    pub department: String,

    /// Profile image URL
    #[serde(default)]
    pub image: String,

    /// Short research topic tags, display order preserved
    #[serde(default)]
    pub research_interests: Vec<String>,

    /// Free-text publication entries
    #[serde(default)]
    pub publications: Vec<String>,

    /// Social profile links
    #[serde(default)]
    pub social_links: SocialLinks,

    /// Structured research paper entries
    #[serde(default)]
    pub research_papers: Vec<ResearchPaper>,
}

impl FacultyRecord {
    /// Check the fields required before a create or update is sent.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() {
            return Err(AppError::validation("Name and Email are required"));
        }
        Ok(())
    }
}

/// Fixed-shape social link mapping.
///
/// All three keys are always present; an unset link is the empty string. A
/// partial mapping on the wire deserializes with the missing keys filled in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SocialLinks {
    #[serde(default)]
    pub linkedin: String,

    #[serde(default)]
    pub twitter: String,

    #[serde(default)]
    pub website: String,
}

/// A published research paper entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResearchPaper {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub authors: String,

    #[serde(default)]
    pub journal: String,

    #[serde(default)]
    pub link: String,
}
