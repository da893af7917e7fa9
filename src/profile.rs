use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const PROFILE_FILE: &str = "profile.json";

static PROFILE: LazyLock<Profile> = LazyLock::new(|| {
    load().unwrap_or_else(|e| {
        log::error!("Couldn't load site profile: {e}");
        Profile::default()
    })
});

#[derive(Embed)]
#[folder = "content"]
struct Content;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Profile content not found")]
    Missing,
    #[error("Couldn't parse profile content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid profile content: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub initials: String,
    pub role: String,
    pub tagline: String,
    /// Hero headlines, typed out in order.
    pub phrases: Vec<String>,
    pub about: Vec<String>,
    pub stats: Vec<Stat>,
    pub skills: Vec<Skill>,
    pub experience: Vec<Role>,
    pub timeline: Vec<Milestone>,
    pub contact: Contact,
    pub resume: Resume,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: u64,
    #[serde(default)]
    pub suffix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency, 0 to 100.
    pub level: u8,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub year: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub location: String,
    pub form_endpoint: String,
    #[serde(default)]
    pub socials: Vec<Social>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Social {
    pub label: String,
    pub href: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    pub href: String,
    pub download_name: String,
}

/// The embedded site profile. Falls back to an empty profile (and logs) if
/// the embedded content is broken.
pub fn profile() -> &'static Profile {
    &PROFILE
}

pub fn load() -> Result<Profile, ProfileError> {
    let file = Content::get(PROFILE_FILE).ok_or(ProfileError::Missing)?;
    parse(&file.data)
}

pub fn parse(data: &[u8]) -> Result<Profile, ProfileError> {
    let profile = serde_json::from_slice::<Profile>(data)?;
    profile.validate()?;
    Ok(profile)
}

impl Profile {
    fn validate(&self) -> Result<(), ProfileError> {
        if self.phrases.is_empty() {
            return Err(ProfileError::Invalid("at least one phrase is required".into()));
        }
        if let Some(skill) = self.skills.iter().find(|s| s.level > 100) {
            return Err(ProfileError::Invalid(format!(
                "skill level for {} is above 100",
                skill.name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "name": "Sam",
        "initials": "S",
        "role": "Developer",
        "tagline": "Hello",
        "phrases": ["Hi"],
        "about": [],
        "stats": [{"label": "Coffees", "value": 12}],
        "skills": [{"name": "Rust", "level": 90, "icon": "devicon-rust-plain"}],
        "experience": [],
        "timeline": [],
        "contact": {"email": "sam@example.com", "location": "Earth", "form_endpoint": "https://relay.example.com/f/abc"},
        "resume": {"href": "/resume.pdf", "download_name": "Sam_Resume.pdf"}
    }"#;

    #[test]
    fn test_embedded_profile_loads() {
        let loaded = load().expect("embedded profile should be valid");
        assert!(!loaded.phrases.is_empty());
        assert!(!loaded.name.is_empty());
        assert!(loaded.skills.iter().all(|s| s.level <= 100));
        assert!(loaded.contact.form_endpoint.starts_with("https://"));
        assert_eq!(profile(), &loaded);
    }

    #[test]
    fn test_parse_defaults() {
        let profile = parse(MINIMAL.as_bytes()).unwrap();
        assert_eq!(profile.stats[0].suffix, "");
        assert!(profile.contact.socials.is_empty());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse(b"{not json"), Err(ProfileError::Parse(_))));

        let no_phrases = MINIMAL.replace(r#"["Hi"]"#, "[]");
        assert!(matches!(
            parse(no_phrases.as_bytes()),
            Err(ProfileError::Invalid(_))
        ));

        let too_skilled = MINIMAL.replace(r#""level": 90"#, r#""level": 120"#);
        let err = parse(too_skilled.as_bytes()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid profile content: skill level for Rust is above 100"
        );
    }
}
