use serde::{Deserialize, Serialize};

use crate::pipeline::sanitize::{defaults, text_or, Sanitize};
use crate::pipeline::{FacetOrder, ListRecord};

/// An alumni row as stored in the `alumni` table.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAlumniRecord {
    pub id: i64,
    pub name: String,
    pub image_url: Option<String>,
    pub company: Option<String>,
    pub linkedin_url: Option<String>,
    pub graduation_batch: Option<u16>,
}

/// A render-ready alumni profile; every field the card needs is populated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlumniProfile {
    pub id: i64,
    pub name: String,
    pub image_url: String,
    pub company: String,
    pub linkedin_url: String,
    /// Facet field; profiles without a batch only show under "all".
    pub graduation_batch: Option<u16>,
}

impl Sanitize for RawAlumniRecord {
    type Clean = AlumniProfile;

    fn sanitize(&self) -> AlumniProfile {
        AlumniProfile {
            id: self.id,
            name: self.name.clone(),
            image_url: text_or(&self.image_url, defaults::PORTRAIT_IMAGE),
            company: text_or(&self.company, defaults::COMPANY),
            linkedin_url: text_or(&self.linkedin_url, defaults::LINK),
            graduation_batch: self.graduation_batch,
        }
    }
}

impl ListRecord for AlumniProfile {
    type Facet = u16;

    const FACET_ORDER: FacetOrder = FacetOrder::NewestFirst;

    fn facet(&self) -> Option<u16> {
        self.graduation_batch
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.company]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_row_sanitizes_to_defaults() {
        let raw = RawAlumniRecord {
            id: 7,
            name: "C".to_string(),
            image_url: None,
            company: None,
            linkedin_url: None,
            graduation_batch: None,
        };
        let profile = raw.sanitize();
        assert_eq!(profile.company, "Freelancer");
        assert_eq!(profile.linkedin_url, "#");
        assert_eq!(profile.image_url, defaults::PORTRAIT_IMAGE);
        assert_eq!(profile.graduation_batch, None);
    }

    #[test]
    fn sanitization_is_idempotent() {
        let raw = RawAlumniRecord {
            id: 1,
            name: "Priya Sharma".to_string(),
            image_url: None,
            company: Some("Google".to_string()),
            linkedin_url: None,
            graduation_batch: Some(2020),
        };
        let once = raw.sanitize();
        let rebuilt = RawAlumniRecord {
            id: once.id,
            name: once.name.clone(),
            image_url: Some(once.image_url.clone()),
            company: Some(once.company.clone()),
            linkedin_url: Some(once.linkedin_url.clone()),
            graduation_batch: once.graduation_batch,
        };
        assert_eq!(rebuilt.sanitize(), once);
    }

    #[test]
    fn present_fields_pass_through_unchanged() {
        let raw = RawAlumniRecord {
            id: 2,
            name: "Rohan Verma".to_string(),
            image_url: Some("https://cdn.example/rohan.jpg".to_string()),
            company: Some("Microsoft".to_string()),
            linkedin_url: Some("https://linkedin.com/in/rohan".to_string()),
            graduation_batch: Some(2021),
        };
        let profile = raw.sanitize();
        assert_eq!(profile.image_url, "https://cdn.example/rohan.jpg");
        assert_eq!(profile.company, "Microsoft");
        assert_eq!(profile.linkedin_url, "https://linkedin.com/in/rohan");
    }
}
