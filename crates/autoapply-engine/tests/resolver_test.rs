mod common;

use autoapply_core::driver::ElementHandle;
use autoapply_core::model::{AnswerSource, ApplicantProfile, FormField};
use autoapply_engine::resolve::FieldAnswerResolver;
use common::MockGenerator;

fn profile() -> ApplicantProfile {
    ApplicantProfile {
        name: "Ada Lovelace".into(),
        address: "London".into(),
        phone: "555-0100".into(),
        email: "ada@example.com".into(),
        projects: vec!["I led the Project Phoenix initiative.".into()],
    }
}

fn field(label: &str) -> FormField {
    FormField {
        label: label.into(),
        element: ElementHandle(1),
    }
}

#[tokio::test]
async fn name_labels_resolve_from_profile_without_generation() {
    let generator = MockGenerator::with_completion("should never be used");
    let resolver = FieldAnswerResolver::new(&generator);
    let p = profile();

    for label in ["Your name", "FULL NAME", "First name (legal)"] {
        let resolution = resolver.resolve(field(label), &p, "any context").await.unwrap();
        assert_eq!(resolution.answer, "Ada Lovelace");
        assert_eq!(resolution.source, AnswerSource::Rule);
    }
    assert!(generator.prompts().is_empty());
}

#[tokio::test]
async fn email_and_phone_labels_resolve_from_profile() {
    let generator = MockGenerator::with_completion("unused");
    let resolver = FieldAnswerResolver::new(&generator);
    let p = profile();

    let email = resolver.resolve(field("Email address"), &p, "").await.unwrap();
    assert_eq!(email.answer, "ada@example.com");

    let phone = resolver.resolve(field("Phone number"), &p, "").await.unwrap();
    assert_eq!(phone.answer, "555-0100");
    assert!(generator.prompts().is_empty());
}

#[tokio::test]
async fn priority_is_name_then_email_then_phone() {
    let generator = MockGenerator::with_completion("unused");
    let resolver = FieldAnswerResolver::new(&generator);
    let p = profile();

    // "name" wins over "email" when both keywords appear.
    let both = resolver.resolve(field("Name and email"), &p, "").await.unwrap();
    assert_eq!(both.answer, "Ada Lovelace");

    // Without "name", "email" wins over "phone".
    let ambiguous = resolver
        .resolve(field("Email or phone for employer"), &p, "")
        .await
        .unwrap();
    assert_eq!(ambiguous.answer, "ada@example.com");
}

#[tokio::test]
async fn unmatched_label_invokes_generator_exactly_once() {
    let generator = MockGenerator::with_completion("  A thoughtful answer.  ");
    let resolver = FieldAnswerResolver::new(&generator);
    let p = profile();
    let context = p.context_string();

    let resolution = resolver
        .resolve(field("Describe a project you led"), &p, &context)
        .await
        .unwrap();

    assert_eq!(resolution.source, AnswerSource::Generated);
    assert_eq!(resolution.answer, "A thoughtful answer.");

    let prompts = generator.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].starts_with("Question: Describe a project you led\n"));
    // The generation context carries the project sentence from the resume.
    assert!(prompts[0].contains("I led the Project Phoenix initiative."));
    assert!(prompts[0].ends_with("Answer:"));
}

#[tokio::test]
async fn empty_label_routes_to_generation_with_empty_question() {
    let generator = MockGenerator::with_completion("generated");
    let resolver = FieldAnswerResolver::new(&generator);
    let p = profile();

    let resolution = resolver.resolve(field(""), &p, "ctx").await.unwrap();
    assert_eq!(resolution.source, AnswerSource::Generated);
    assert_eq!(resolution.answer, "generated");

    let prompts = generator.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].starts_with("Question: \n"));
}

#[tokio::test]
async fn echoed_prompt_is_cut_at_answer_marker() {
    let generator =
        MockGenerator::with_completion("Question: q\nContext: c\nAnswer: Cut here please. ");
    let resolver = FieldAnswerResolver::new(&generator);
    let p = profile();

    let resolution = resolver.resolve(field("Why us?"), &p, "c").await.unwrap();
    assert_eq!(resolution.answer, "Cut here please.");
}
