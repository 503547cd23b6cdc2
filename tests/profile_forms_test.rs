use anyhow::Result;
use candidate_forms::app::forms::{
    CertificationsForm, ExperienceForm, FormationForm, GeneralInfoForm,
};
use candidate_forms::core::validators::{MSG_INVALID_CHOICE, MSG_INVALID_DATE, MSG_REQUIRED};
use candidate_forms::core::{process, Choice, SubmitAction};
use candidate_forms::domain::model::Mobility;
use candidate_forms::{ChoiceCatalog, FormContext, FormData, FormError, InMemoryUserStore};
use chrono::NaiveDate;

fn catalog() -> ChoiceCatalog {
    ChoiceCatalog::new(
        ["Allemand", "Anglais", "Français"].into_iter().map(Choice::same).collect(),
        ["A", "B", "C"].into_iter().map(Choice::same).collect(),
    )
}

fn general_info(extra: &[(&str, &str)]) -> FormData {
    let mut data = FormData::from_pairs([
        ("first_name", "Marie"),
        ("last_name", "Curie"),
        ("phone_number", "0601020304"),
        ("city", "Lyon"),
        ("mobility", "region"),
        ("languages-0-language", "Français"),
        ("languages-0-level", "Langue maternelle"),
        ("description", "Chimiste"),
    ]);
    for (k, v) in extra {
        data.push(*k, *v);
    }
    data
}

#[tokio::test]
async fn test_general_info_valid_submission() -> Result<()> {
    let catalog = catalog();
    let users = InMemoryUserStore::new();
    let ctx = FormContext::new(&catalog, &users);

    let submission =
        process::<GeneralInfoForm>(&general_info(&[("submit", "Valider et continuer")]), &ctx)
            .await?;

    assert!(submission.is_valid(), "{:?}", submission.errors);
    assert_eq!(submission.form.mobility(), Some(Mobility::Region));
    assert_eq!(submission.form.languages.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_general_info_reports_nested_errors() -> Result<()> {
    let catalog = catalog();
    let users = InMemoryUserStore::new();
    let ctx = FormContext::new(&catalog, &users);

    let data = FormData::from_pairs([
        ("first_name", "Marie"),
        ("last_name", ""),
        ("mobility", "world"),
        ("languages-0-language", "Français"),
        ("languages-0-level", "Expert"),
        ("languages-3-language", "Klingon"),
        ("languages-3-level", "Débutant"),
        ("submit", ""),
    ]);
    let submission = process::<GeneralInfoForm>(&data, &ctx).await?;
    let errors = submission.errors.as_ref().unwrap();

    assert_eq!(errors.get("last_name"), [MSG_REQUIRED.to_string()]);
    assert_eq!(errors.get("phone_number"), [MSG_REQUIRED.to_string()]);
    assert_eq!(errors.get("city"), [MSG_REQUIRED.to_string()]);
    assert_eq!(errors.get("mobility"), [MSG_INVALID_CHOICE.to_string()]);
    assert_eq!(errors.get("languages-0-level"), [MSG_INVALID_CHOICE.to_string()]);
    assert!(!errors.contains("languages-0-language"));
    assert_eq!(errors.get("languages-1-language"), [MSG_INVALID_CHOICE.to_string()]);
    assert!(!errors.contains("first_name"));
    Ok(())
}

#[tokio::test]
async fn test_general_info_always_has_one_language_row() -> Result<()> {
    let catalog = catalog();
    let users = InMemoryUserStore::new();
    let ctx = FormContext::new(&catalog, &users);

    let data = FormData::from_pairs([("first_name", "Marie"), ("submit", "")]);
    let submission = process::<GeneralInfoForm>(&data, &ctx).await?;

    assert_eq!(submission.form.languages.len(), 1);
    let errors = submission.errors.as_ref().unwrap();
    assert!(errors.contains("languages-0-language"));
    assert!(errors.contains("languages-0-level"));
    Ok(())
}

#[tokio::test]
async fn test_add_language_appends_without_validating() -> Result<()> {
    let catalog = catalog();
    let users = InMemoryUserStore::new();
    let ctx = FormContext::new(&catalog, &users);

    let submission =
        process::<GeneralInfoForm>(&general_info(&[("add_language", "Ajouter une langue")]), &ctx)
            .await?;

    assert_eq!(submission.action, SubmitAction::AddEntry("languages"));
    assert!(submission.errors.is_none());
    assert_eq!(submission.form.languages.len(), 2);
    assert_eq!(submission.form.languages.entries()[1].language, None);
    Ok(())
}

#[tokio::test]
async fn test_add_language_fails_when_list_is_full() -> Result<()> {
    let catalog = catalog();
    let users = InMemoryUserStore::new();
    let ctx = FormContext::new(&catalog, &users);

    let mut data = FormData::from_pairs([("add_language", "")]);
    for i in 0..12 {
        data.push(format!("languages-{}-language", i), "Anglais");
    }

    let err = process::<GeneralInfoForm>(&data, &ctx).await.unwrap_err();
    assert!(matches!(err, FormError::TooManyEntries { max: 10, .. }));
    Ok(())
}

#[tokio::test]
async fn test_certifications_lists() -> Result<()> {
    let catalog = catalog();
    let users = InMemoryUserStore::new();
    let ctx = FormContext::new(&catalog, &users);

    let data = FormData::from_urlencoded(
        "driver_licenses-0-driver_license=B&driver_licenses-1-driver_license=Z\
         &other_certifications-0-other_certif=TOEIC&submit=Valider",
    );
    let submission = process::<CertificationsForm>(&data, &ctx).await?;

    let errors = submission.errors.as_ref().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.get("driver_licenses-1-driver_license"),
        [MSG_INVALID_CHOICE.to_string()]
    );
    assert_eq!(
        submission.form.other_certifications.entries()[0]
            .other_certif
            .as_deref(),
        Some("TOEIC")
    );
    Ok(())
}

#[tokio::test]
async fn test_certifications_may_be_empty() -> Result<()> {
    let catalog = catalog();
    let users = InMemoryUserStore::new();
    let ctx = FormContext::new(&catalog, &users);

    let submission =
        process::<CertificationsForm>(&FormData::from_pairs([("submit", "")]), &ctx).await?;
    assert!(submission.is_valid());
    assert!(submission.form.driver_licenses.is_empty());

    let submission =
        process::<CertificationsForm>(&FormData::from_pairs([("add_other_certif", "")]), &ctx)
            .await?;
    assert_eq!(
        submission.action,
        SubmitAction::AddEntry("other_certifications")
    );
    assert_eq!(submission.form.other_certifications.len(), 1);
    assert!(submission.form.driver_licenses.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_formation_dates() -> Result<()> {
    let catalog = catalog();
    let users = InMemoryUserStore::new();
    let ctx = FormContext::new(&catalog, &users);

    let data = FormData::from_pairs([
        ("formation_entries-0-date_start", "2015-09-01"),
        ("formation_entries-0-date_end", "2018-06-30"),
        ("formation_entries-0-title", "Licence de chimie"),
        ("formation_entries-0-institution", "Université Lyon 1"),
        ("formation_entries-1-date_start", "septembre 2018"),
        ("formation_entries-1-title", "Master"),
        ("submit", ""),
    ]);
    let submission = process::<FormationForm>(&data, &ctx).await?;

    let errors = submission.errors.as_ref().unwrap();
    assert_eq!(
        errors.get("formation_entries-1-date_start"),
        [MSG_INVALID_DATE.to_string()]
    );
    assert!(!errors.contains("formation_entries-1-date_end"));
    assert!(!errors.contains("formation_entries-0-date_start"));

    let first = &submission.form.entries.entries()[0];
    assert_eq!(first.date_start.value(), NaiveDate::from_ymd_opt(2015, 9, 1));
    assert_eq!(first.date_end.value(), NaiveDate::from_ymd_opt(2018, 6, 30));
    Ok(())
}

#[tokio::test]
async fn test_experience_uses_its_own_list_name() -> Result<()> {
    let catalog = catalog();
    let users = InMemoryUserStore::new();
    let ctx = FormContext::new(&catalog, &users);

    let data = FormData::from_pairs([
        ("formation_entries-0-title", "ignored"),
        ("experience_entries-0-title", "Chercheuse"),
        ("add_experience", ""),
    ]);
    let submission = process::<ExperienceForm>(&data, &ctx).await?;

    assert_eq!(
        submission.action,
        SubmitAction::AddEntry("experience_entries")
    );
    assert_eq!(submission.form.entries.len(), 2);
    assert_eq!(
        submission.form.entries.entries()[0].title.as_deref(),
        Some("Chercheuse")
    );
    Ok(())
}
