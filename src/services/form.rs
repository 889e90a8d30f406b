// src/services/form.rs

//! Edit-buffer reconciliation between records and flat form fields.
//!
//! The buffer is a transient working copy of one record while the create or
//! edit form is open. Multi-value text fields are entered as comma-delimited
//! strings and re-split on every edit; duplicate and empty segments are not
//! preserved.

use crate::models::{FacultyRecord, ResearchPaper, SocialLinks};

/// Addressable fields of the edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Position,
    Specialization,
    Education,
    Experience,
    Email,
    Phone,
    Office,
    Department,
    Image,
    Linkedin,
    Twitter,
    Website,
    /// Comma-delimited tag list
    ResearchInterests,
    /// Comma-delimited publication list
    Publications,
}

/// Fields of one research-paper entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaperField {
    Title,
    Authors,
    Journal,
    Link,
}

/// Transient working copy of a record during create/edit.
///
/// Discarded on close or successful submit; never aliased with the store's
/// list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    pub id: Option<String>,
    pub name: String,
    pub position: String,
    pub specialization: String,
    pub education: String,
    pub experience: String,
    pub email: String,
    pub phone: String,
    pub office: String,
    pub department: String,
    pub image: String,
    pub research_interests: Vec<String>,
    pub publications: Vec<String>,
    pub social_links: SocialLinks,
    pub research_papers: Vec<ResearchPaper>,
}

impl EditBuffer {
    /// Empty buffer for the create form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deep copy of an existing record for the edit form.
    ///
    /// The record's social links already carry all three keys (missing keys
    /// normalize to empty strings at deserialization), and every sequence is
    /// copied, so mutating the buffer never touches the source record.
    pub fn from_record(record: &FacultyRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            position: record.position.clone(),
            specialization: record.specialization.clone(),
            education: record.education.clone(),
            experience: record.experience.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            office: record.office.clone(),
            department: record.department.clone(),
            image: record.image.clone(),
            research_interests: record.research_interests.clone(),
            publications: record.publications.clone(),
            social_links: record.social_links.clone(),
            research_papers: record.research_papers.clone(),
        }
    }

    /// Set one form field from its text input value.
    ///
    /// `ResearchInterests` and `Publications` take the whole delimited
    /// string and re-derive the sequence.
    pub fn set_field(&mut self, field: FormField, value: &str) {
        match field {
            FormField::Name => self.name = value.to_string(),
            FormField::Position => self.position = value.to_string(),
            FormField::Specialization => self.specialization = value.to_string(),
            FormField::Education => self.education = value.to_string(),
            FormField::Experience => self.experience = value.to_string(),
            FormField::Email => self.email = value.to_string(),
            FormField::Phone => self.phone = value.to_string(),
            FormField::Office => self.office = value.to_string(),
            FormField::Department => self.department = value.to_string(),
            FormField::Image => self.image = value.to_string(),
            FormField::Linkedin => self.social_links.linkedin = value.to_string(),
            FormField::Twitter => self.social_links.twitter = value.to_string(),
            FormField::Website => self.social_links.website = value.to_string(),
            FormField::ResearchInterests => self.research_interests = split_list(value),
            FormField::Publications => self.publications = split_list(value),
        }
    }

    /// Append an empty research-paper entry.
    pub fn add_paper(&mut self) {
        self.research_papers.push(ResearchPaper::default());
    }

    /// Set one field of the paper at `index`.
    ///
    /// The entry must already exist; append with `add_paper` first. An
    /// out-of-bounds index leaves the buffer unchanged.
    pub fn set_paper_field(&mut self, index: usize, field: PaperField, value: &str) {
        if let Some(paper) = self.research_papers.get_mut(index) {
            match field {
                PaperField::Title => paper.title = value.to_string(),
                PaperField::Authors => paper.authors = value.to_string(),
                PaperField::Journal => paper.journal = value.to_string(),
                PaperField::Link => paper.link = value.to_string(),
            }
        }
    }

    /// Remove the paper at `index`, shifting later entries left.
    ///
    /// An out-of-range index is a no-op.
    pub fn remove_paper(&mut self, index: usize) {
        if index < self.research_papers.len() {
            self.research_papers.remove(index);
        }
    }

    /// Interests rendered back to the comma-delimited input text.
    pub fn interests_text(&self) -> String {
        self.research_interests.join(", ")
    }

    /// Publications rendered back to the textarea input text.
    pub fn publications_text(&self) -> String {
        self.publications.join(",\n")
    }

    /// Record to hand to the store at submit time.
    ///
    /// No validation happens here; the store checks required fields before
    /// sending.
    pub fn to_record(&self) -> FacultyRecord {
        FacultyRecord {
            id: self.id.clone(),
            name: self.name.clone(),
            position: self.position.clone(),
            specialization: self.specialization.clone(),
            education: self.education.clone(),
            experience: self.experience.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            office: self.office.clone(),
            department: self.department.clone(),
            image: self.image.clone(),
            research_interests: self.research_interests.clone(),
            publications: self.publications.clone(),
            social_links: self.social_links.clone(),
            research_papers: self.research_papers.clone(),
        }
    }
}

/// Split comma-delimited input into trimmed, non-empty entries.
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}
