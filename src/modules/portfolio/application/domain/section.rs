use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::portfolio::application::domain::portfolio::{
    Achievement, Activity, Certification, Education, Experience, PersonalInfo, PortfolioDocument,
    Project, Skills,
};

/// Editable top-level keys of the portfolio document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortfolioSection {
    PersonalInfo,
    Experiences,
    Projects,
    Education,
    Certifications,
    Achievements,
    Activities,
    Skills,
}

impl PortfolioSection {
    pub const ALL: [PortfolioSection; 8] = [
        PortfolioSection::PersonalInfo,
        PortfolioSection::Experiences,
        PortfolioSection::Projects,
        PortfolioSection::Education,
        PortfolioSection::Certifications,
        PortfolioSection::Achievements,
        PortfolioSection::Activities,
        PortfolioSection::Skills,
    ];

    /// Key under `portfolio/` in the store.
    pub fn key(&self) -> &'static str {
        match self {
            PortfolioSection::PersonalInfo => "personalInfo",
            PortfolioSection::Experiences => "experiences",
            PortfolioSection::Projects => "projects",
            PortfolioSection::Education => "education",
            PortfolioSection::Certifications => "certifications",
            PortfolioSection::Achievements => "achievements",
            PortfolioSection::Activities => "activities",
            PortfolioSection::Skills => "skills",
        }
    }

    pub fn is_list(&self) -> bool {
        !matches!(
            self,
            PortfolioSection::PersonalInfo | PortfolioSection::Skills
        )
    }
}

impl fmt::Display for PortfolioSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown portfolio section '{0}'")]
pub struct UnknownSection(pub String);

impl FromStr for PortfolioSection {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.key() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

//
// ──────────────────────────────────────────────────────────
// Validation
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SectionValidationError {
    #[error("{section} is malformed: {message}")]
    Malformed {
        section: PortfolioSection,
        message: String,
    },

    #[error("{field} is required in {section}{}", index_suffix(.index))]
    MissingField {
        section: PortfolioSection,
        index: Option<usize>,
        field: &'static str,
    },

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    #[error("Duplicate id '{id}' in {section}")]
    DuplicateId {
        section: PortfolioSection,
        id: String,
    },
}

fn index_suffix(index: &Option<usize>) -> String {
    index.map(|i| format!("[{}]", i)).unwrap_or_default()
}

/// A child record of a list section.
trait SectionRecord {
    fn id_mut(&mut self) -> &mut String;
    fn required(&self) -> Vec<(&'static str, &str)>;
    fn image_mut(&mut self) -> Option<&mut Option<String>>;
}

macro_rules! section_record {
    ($ty:ty, image: $image:ident, required: [$($field:ident => $name:literal),+]) => {
        impl SectionRecord for $ty {
            fn id_mut(&mut self) -> &mut String {
                &mut self.id
            }

            fn required(&self) -> Vec<(&'static str, &str)> {
                vec![$(($name, self.$field.as_str())),+]
            }

            fn image_mut(&mut self) -> Option<&mut Option<String>> {
                Some(&mut self.$image)
            }
        }
    };
}

section_record!(Experience, image: logo, required: [title => "title", company => "company", start_date => "startDate"]);
section_record!(Project, image: image, required: [title => "title", description => "description"]);
section_record!(Education, image: logo, required: [institution => "institution", degree => "degree", start_date => "startDate"]);
section_record!(Certification, image: image, required: [name => "name", issuer => "issuer"]);
section_record!(Achievement, image: image, required: [title => "title"]);
section_record!(Activity, image: image, required: [title => "title"]);

fn validate_records<T: SectionRecord>(
    section: PortfolioSection,
    records: &mut [T],
) -> Result<(), SectionValidationError> {
    let mut seen = HashSet::new();

    for (index, record) in records.iter_mut().enumerate() {
        for (field, value) in record.required() {
            if value.trim().is_empty() {
                return Err(SectionValidationError::MissingField {
                    section,
                    index: Some(index),
                    field,
                });
            }
        }

        let id = record.id_mut();
        *id = id.trim().to_string();
        if id.is_empty() {
            *id = uuid::Uuid::new_v4().simple().to_string();
        }
        if !seen.insert(id.clone()) {
            return Err(SectionValidationError::DuplicateId {
                section,
                id: id.clone(),
            });
        }
    }

    Ok(())
}

fn images_of<T: SectionRecord>(records: &mut [T]) -> Vec<&mut Option<String>> {
    records.iter_mut().filter_map(|r| r.image_mut()).collect()
}

//
// ──────────────────────────────────────────────────────────
// Typed section payload
// ──────────────────────────────────────────────────────────
//

/// The value of one section, typed by which section it is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SectionData {
    PersonalInfo(PersonalInfo),
    Experiences(Vec<Experience>),
    Projects(Vec<Project>),
    Education(Vec<Education>),
    Certifications(Vec<Certification>),
    Achievements(Vec<Achievement>),
    Activities(Vec<Activity>),
    Skills(Skills),
}

impl SectionData {
    pub fn from_json(section: PortfolioSection, value: Value) -> Result<Self, SectionValidationError> {
        let malformed = |e: serde_json::Error| SectionValidationError::Malformed {
            section,
            message: e.to_string(),
        };

        Ok(match section {
            PortfolioSection::PersonalInfo => {
                SectionData::PersonalInfo(serde_json::from_value(value).map_err(malformed)?)
            }
            PortfolioSection::Experiences => {
                SectionData::Experiences(serde_json::from_value(value).map_err(malformed)?)
            }
            PortfolioSection::Projects => {
                SectionData::Projects(serde_json::from_value(value).map_err(malformed)?)
            }
            PortfolioSection::Education => {
                SectionData::Education(serde_json::from_value(value).map_err(malformed)?)
            }
            PortfolioSection::Certifications => {
                SectionData::Certifications(serde_json::from_value(value).map_err(malformed)?)
            }
            PortfolioSection::Achievements => {
                SectionData::Achievements(serde_json::from_value(value).map_err(malformed)?)
            }
            PortfolioSection::Activities => {
                SectionData::Activities(serde_json::from_value(value).map_err(malformed)?)
            }
            PortfolioSection::Skills => {
                SectionData::Skills(serde_json::from_value(value).map_err(malformed)?)
            }
        })
    }

    /// The section as currently held by a whole document.
    pub fn from_document(section: PortfolioSection, doc: &PortfolioDocument) -> Self {
        match section {
            PortfolioSection::PersonalInfo => SectionData::PersonalInfo(doc.personal_info.clone()),
            PortfolioSection::Experiences => SectionData::Experiences(doc.experiences.clone()),
            PortfolioSection::Projects => SectionData::Projects(doc.projects.clone()),
            PortfolioSection::Education => SectionData::Education(doc.education.clone()),
            PortfolioSection::Certifications => {
                SectionData::Certifications(doc.certifications.clone())
            }
            PortfolioSection::Achievements => SectionData::Achievements(doc.achievements.clone()),
            PortfolioSection::Activities => SectionData::Activities(doc.activities.clone()),
            PortfolioSection::Skills => SectionData::Skills(doc.skills.clone()),
        }
    }

    pub fn section(&self) -> PortfolioSection {
        match self {
            SectionData::PersonalInfo(_) => PortfolioSection::PersonalInfo,
            SectionData::Experiences(_) => PortfolioSection::Experiences,
            SectionData::Projects(_) => PortfolioSection::Projects,
            SectionData::Education(_) => PortfolioSection::Education,
            SectionData::Certifications(_) => PortfolioSection::Certifications,
            SectionData::Achievements(_) => PortfolioSection::Achievements,
            SectionData::Activities(_) => PortfolioSection::Activities,
            SectionData::Skills(_) => PortfolioSection::Skills,
        }
    }

    /// Checks required fields and id uniqueness, trimming ids and assigning
    /// fresh ones where missing.
    pub fn validate(&mut self) -> Result<(), SectionValidationError> {
        let section = self.section();

        match self {
            SectionData::PersonalInfo(info) => {
                for (field, value) in [
                    ("name", info.name.as_str()),
                    ("title", info.title.as_str()),
                    ("email", info.email.as_str()),
                ] {
                    if value.trim().is_empty() {
                        return Err(SectionValidationError::MissingField {
                            section,
                            index: None,
                            field,
                        });
                    }
                }

                info.email = info.email.trim().to_string();
                if !email_address::EmailAddress::is_valid(&info.email) {
                    return Err(SectionValidationError::InvalidEmail(info.email.clone()));
                }
                Ok(())
            }
            SectionData::Experiences(items) => validate_records(section, items),
            SectionData::Projects(items) => validate_records(section, items),
            SectionData::Education(items) => validate_records(section, items),
            SectionData::Certifications(items) => validate_records(section, items),
            SectionData::Achievements(items) => validate_records(section, items),
            SectionData::Activities(items) => validate_records(section, items),
            SectionData::Skills(skills) => {
                match skills.categories.iter().position(|c| c.name.trim().is_empty()) {
                    Some(index) => Err(SectionValidationError::MissingField {
                        section,
                        index: Some(index),
                        field: "name",
                    }),
                    None => Ok(()),
                }
            }
        }
    }

    /// Every image-bearing field, in document order.
    pub fn image_fields_mut(&mut self) -> Vec<&mut Option<String>> {
        match self {
            SectionData::PersonalInfo(info) => vec![&mut info.avatar],
            SectionData::Experiences(items) => images_of(items),
            SectionData::Projects(items) => images_of(items),
            SectionData::Education(items) => images_of(items),
            SectionData::Certifications(items) => images_of(items),
            SectionData::Achievements(items) => images_of(items),
            SectionData::Activities(items) => images_of(items),
            SectionData::Skills(_) => Vec::new(),
        }
    }

    /// Number of child records for list sections.
    pub fn len(&self) -> Option<usize> {
        match self {
            SectionData::PersonalInfo(_) | SectionData::Skills(_) => None,
            SectionData::Experiences(items) => Some(items.len()),
            SectionData::Projects(items) => Some(items.len()),
            SectionData::Education(items) => Some(items.len()),
            SectionData::Certifications(items) => Some(items.len()),
            SectionData::Achievements(items) => Some(items.len()),
            SectionData::Activities(items) => Some(items.len()),
        }
    }

    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
