//! Normalization of raw store rows into total display models.
//!
//! Sanitization happens once, at the store boundary: every `Option` field
//! a view requires is resolved to a documented fallback, so downstream
//! code never sees a missing value. It has no failure path — absent data
//! degrades to defaults.

/// Fallback values substituted for absent or empty fields.
pub mod defaults {
    /// Portrait shown when a profile has no uploaded photo.
    pub const PORTRAIT_IMAGE: &str = "/images/placeholder-portrait.jpg";

    /// Banners shown when an event or album has no photos yet.
    pub const BANNER_IMAGES: [&str; 3] = [
        "https://placehold.co/1280x720/F97316/FFFFFF?text=Event+Image+1",
        "https://placehold.co/1280x720/FBBF24/FFFFFF?text=Event+Image+2",
        "https://placehold.co/1280x720/EF4444/FFFFFF?text=Event+Image+3",
    ];

    /// Company label for alumni who have not listed an employer.
    pub const COMPANY: &str = "Freelancer";

    /// Neutral href for profiles without a LinkedIn page.
    pub const LINK: &str = "#";

    /// Body text for events without a write-up.
    pub const DESCRIPTION: &str = "No description available.";

    /// Role label for team members without one.
    pub const ROLE: &str = "Volunteer";
}

/// Conversion from a raw store row to its total display model.
///
/// Takes `&self` and never fails: missing or empty fields resolve to the
/// constants in [`defaults`], everything else passes through unchanged.
/// Sanitizing a row rebuilt from an already-sanitized model yields the
/// same model.
pub trait Sanitize {
    type Clean;

    fn sanitize(&self) -> Self::Clean;
}

/// The raw text if present and non-empty, otherwise `fallback`.
pub(crate) fn text_or(value: &Option<String>, fallback: &str) -> String {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

/// The raw sequence if present and non-empty, otherwise `fallback`.
pub(crate) fn images_or(value: &Option<Vec<String>>, fallback: &[&str]) -> Vec<String> {
    match value {
        Some(images) if !images.is_empty() => images.clone(),
        _ => fallback.iter().map(|s| s.to_string()).collect(),
    }
}
