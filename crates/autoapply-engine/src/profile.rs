//! Applicant profile construction: merge entities inferred from the
//! resume with user-supplied contact details.

use autoapply_core::collab::{EntityLabel, EntityRecognizer};
use autoapply_core::model::ApplicantProfile;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Contact details supplied directly by the user. Ground truth: any
/// non-empty field here overrides whatever the resume suggests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserDetails {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

/// Profile plus the derived context string used for answer generation.
#[derive(Debug, Clone)]
pub struct BuiltProfile {
    pub profile: ApplicantProfile,
    pub context: String,
}

pub struct ProfileBuilder<'a, R: EntityRecognizer + ?Sized> {
    recognizer: &'a R,
}

impl<'a, R: EntityRecognizer + ?Sized> ProfileBuilder<'a, R> {
    pub fn new(recognizer: &'a R) -> Self {
        Self { recognizer }
    }

    /// Build the profile for this run.
    ///
    /// Entity recognition yielding nothing is not an error; the profile
    /// then falls back entirely to the user-supplied values.
    pub fn build(&self, resume_text: &str, user: &UserDetails) -> BuiltProfile {
        let mut inferred_name = None;
        let mut inferred_location = None;
        let mut inferred_email = None;
        let mut inferred_phone = None;

        for entity in self.recognizer.entities(resume_text) {
            match entity.label {
                EntityLabel::Person => inferred_name.get_or_insert(entity.text),
                EntityLabel::Location => inferred_location.get_or_insert(entity.text),
                EntityLabel::Email => inferred_email.get_or_insert(entity.text),
                EntityLabel::Phone => inferred_phone.get_or_insert(entity.text),
                // Organization is recognized but has no profile slot.
                EntityLabel::Organization => continue,
            };
        }

        let projects = self.project_details(resume_text);
        debug!(
            projects = projects.len(),
            "Collected project sentences from resume"
        );

        let profile = ApplicantProfile {
            name: pick(&user.name, inferred_name),
            address: pick(&user.address, inferred_location),
            phone: pick(&user.phone, inferred_phone),
            email: pick(&user.email, inferred_email),
            projects,
        };
        let context = profile.context_string();
        BuiltProfile { profile, context }
    }

    /// Every sentence containing "project" (case-insensitive), in original
    /// order, duplicates included.
    fn project_details(&self, resume_text: &str) -> Vec<String> {
        self.recognizer
            .sentences(resume_text)
            .into_iter()
            .filter(|sentence| sentence.to_lowercase().contains("project"))
            .collect()
    }
}

/// User-supplied value wins whenever it is non-empty.
fn pick(user: &str, inferred: Option<String>) -> String {
    if user.is_empty() {
        inferred.unwrap_or_default()
    } else {
        user.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoapply_core::collab::Entity;

    struct FixedRecognizer {
        entities: Vec<Entity>,
        sentences: Vec<String>,
    }

    impl EntityRecognizer for FixedRecognizer {
        fn entities(&self, _text: &str) -> Vec<Entity> {
            self.entities.clone()
        }
        fn sentences(&self, _text: &str) -> Vec<String> {
            self.sentences.clone()
        }
    }

    #[test]
    fn user_supplied_fields_override_inferred() {
        let recognizer = FixedRecognizer {
            entities: vec![
                Entity {
                    label: EntityLabel::Person,
                    text: "Resume Name".into(),
                },
                Entity {
                    label: EntityLabel::Email,
                    text: "resume@example.com".into(),
                },
            ],
            sentences: vec![],
        };
        let user = UserDetails {
            name: "User Name".into(),
            address: "User Town".into(),
            phone: "555-0100".into(),
            email: "user@example.com".into(),
        };
        let built = ProfileBuilder::new(&recognizer).build("whatever", &user);
        assert_eq!(built.profile.name, "User Name");
        assert_eq!(built.profile.email, "user@example.com");
        assert_eq!(built.profile.address, "User Town");
        assert_eq!(built.profile.phone, "555-0100");
    }

    #[test]
    fn inferred_values_fill_blank_user_fields() {
        let recognizer = FixedRecognizer {
            entities: vec![
                Entity {
                    label: EntityLabel::Person,
                    text: "Resume Name".into(),
                },
                Entity {
                    label: EntityLabel::Location,
                    text: "Springfield".into(),
                },
            ],
            sentences: vec![],
        };
        let user = UserDetails {
            email: "user@example.com".into(),
            ..Default::default()
        };
        let built = ProfileBuilder::new(&recognizer).build("whatever", &user);
        assert_eq!(built.profile.name, "Resume Name");
        assert_eq!(built.profile.address, "Springfield");
        assert_eq!(built.profile.email, "user@example.com");
        assert_eq!(built.profile.phone, "");
    }

    #[test]
    fn project_sentences_keep_order_and_duplicates() {
        let recognizer = FixedRecognizer {
            entities: vec![],
            sentences: vec![
                "I led the Project Phoenix initiative.".into(),
                "Unrelated sentence.".into(),
                "Another PROJECT here.".into(),
                "I led the Project Phoenix initiative.".into(),
            ],
        };
        let built = ProfileBuilder::new(&recognizer).build("whatever", &UserDetails::default());
        assert_eq!(
            built.profile.projects,
            vec![
                "I led the Project Phoenix initiative.".to_string(),
                "Another PROJECT here.".to_string(),
                "I led the Project Phoenix initiative.".to_string(),
            ]
        );
        assert!(built.context.contains("I led the Project Phoenix initiative."));
    }
}
