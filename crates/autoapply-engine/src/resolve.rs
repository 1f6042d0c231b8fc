//! Field answering: deterministic rules first, generative fallback
//! otherwise.

use autoapply_core::collab::{GenerationError, Generator};
use autoapply_core::model::{AnswerResolution, AnswerSource, ApplicantProfile, FormField};
use tracing::debug;

/// Marker the prompt ends with; completions that echo the prompt are cut
/// at this marker.
const ANSWER_MARKER: &str = "Answer:";

/// Resolves one form field to an answer string.
///
/// Label matching is case-insensitive substring, checked in fixed priority
/// order name → email → phone; anything else (including an empty label)
/// goes to the generative collaborator, invoked at most once per field.
pub struct FieldAnswerResolver<'a, G: Generator + ?Sized> {
    generator: &'a G,
}

impl<'a, G: Generator + ?Sized> FieldAnswerResolver<'a, G> {
    pub fn new(generator: &'a G) -> Self {
        Self { generator }
    }

    pub async fn resolve(
        &self,
        field: FormField,
        profile: &ApplicantProfile,
        context: &str,
    ) -> Result<AnswerResolution, GenerationError> {
        let label = field.label.to_lowercase();

        let rule_answer = if label.contains("name") {
            Some(profile.name.clone())
        } else if label.contains("email") {
            Some(profile.email.clone())
        } else if label.contains("phone") {
            Some(profile.phone.clone())
        } else {
            None
        };

        if let Some(answer) = rule_answer {
            debug!(label = %field.label, "Resolved field by rule");
            return Ok(AnswerResolution {
                field,
                answer,
                source: AnswerSource::Rule,
            });
        }

        let prompt = build_prompt(&field.label, context);
        let completion = self.generator.complete(&prompt).await?;
        let answer = extract_answer(&completion);
        debug!(label = %field.label, "Resolved field by generation");
        Ok(AnswerResolution {
            field,
            answer,
            source: AnswerSource::Generated,
        })
    }
}

pub(crate) fn build_prompt(question: &str, context: &str) -> String {
    format!(
        "Question: {}\nContext: {}\n{}",
        question, context, ANSWER_MARKER
    )
}

/// Take the text after the last `Answer:` marker when the completion
/// echoes the prompt, otherwise the whole completion; trimmed either way.
/// The last occurrence is used so a completion that restates the marker
/// inside a draft still yields only the final answer.
fn extract_answer(completion: &str) -> String {
    match completion.rsplit_once(ANSWER_MARKER) {
        Some((_, tail)) => tail.trim().to_string(),
        None => completion.trim().to_string(),
    }
}
