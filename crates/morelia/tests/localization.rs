//! Behavioural coverage for localized diagnostics.

use i18n_embed::fluent::fluent_language_loader;
use morelia::localization::{message, message_with_args};
use morelia::{
    Fixture, Localizations, MethodCatalog, Options, ScopedLocalization, StepArgs, StepError,
    StepResult, current_languages, install_localization_loader, step, verify_with,
};
use serial_test::serial;
use unic_langid::langid;

struct Strict;

impl Strict {
    fn step_check(&mut self, _: &StepArgs) -> StepResult {
        Err(StepError::failed("2 != 3"))
    }
}

impl Fixture for Strict {
    fn catalog() -> MethodCatalog<Self> {
        MethodCatalog::new(vec![step!(Self::step_check)])
    }
}

fn failure_text(feature: &str) -> String {
    verify_with(feature, &mut Strict, Options::default())
        .err()
        .map(|error| error.to_string())
        .unwrap_or_else(|| panic!("feature should fail"))
}

#[test]
#[serial]
fn scoped_localization_translates_step_failures() {
    let english = failure_text("Feature: F\nScenario: S\n  Given check\n");
    assert!(english.starts_with("Step \"Given check\" failed: 2 != 3"));

    {
        let guard = ScopedLocalization::new(&[langid!("fr")])
            .unwrap_or_else(|error| panic!("failed to scope French locale: {error}"));
        let french = failure_text("Feature: F\nScenario: S\n  Given check\n");
        assert!(
            french.starts_with("L'étape « Given check » a échoué : 2 != 3"),
            "unexpected French message: {french}"
        );
        let _ = &guard;
    }

    let restored = failure_text("Feature: F\nScenario: S\n  Given check\n");
    assert_eq!(restored, english);
}

#[test]
fn syntax_errors_follow_the_active_locale() {
    let guard = ScopedLocalization::new(&[langid!("fr")])
        .unwrap_or_else(|error| panic!("failed to scope French locale: {error}"));
    let text = failure_text("Feature: F\n");
    assert!(
        text.starts_with("Fonctionnalité sans Scénario (<stdin>, ligne 1)"),
        "unexpected French syntax error: {text}"
    );
    let _ = &guard;
}

#[test]
fn missing_step_headers_are_translated() {
    let guard = ScopedLocalization::new(&[langid!("fr")])
        .unwrap_or_else(|error| panic!("failed to scope French locale: {error}"));
    assert_eq!(
        message("execution-error-unmatched-steps"),
        "Impossible de faire correspondre les étapes :"
    );
    let rendered = message_with_args("execution-error-missing-step", |args| {
        args.set("predicate", "a thing".to_owned());
    });
    assert_eq!(
        rendered,
        "Aucune méthode ne correspond à l'étape « a thing »"
    );
    let _ = &guard;
}

#[test]
fn current_languages_reports_thread_override() {
    let guard = ScopedLocalization::new(&[langid!("fr")])
        .unwrap_or_else(|error| panic!("failed to scope French locale: {error}"));
    let active = current_languages()
        .unwrap_or_else(|error| panic!("failed to query current languages: {error}"));
    assert_eq!(active.first(), Some(&langid!("fr")));
    let _ = &guard;
}

#[test]
#[serial]
fn installed_loader_applies_to_every_thread() {
    let loader = fluent_language_loader!();
    i18n_embed::select(&loader, &Localizations, &[langid!("fr")])
        .unwrap_or_else(|error| panic!("failed to load French resources: {error}"));
    install_localization_loader(loader)
        .unwrap_or_else(|error| panic!("failed to install French loader: {error}"));

    let french = std::thread::spawn(|| message("syntax-linefeed-in-comment"))
        .join()
        .unwrap_or_else(|_| panic!("worker thread panicked"));

    let english = fluent_language_loader!();
    i18n_embed::select(&english, &Localizations, &[langid!("en-US")])
        .unwrap_or_else(|error| panic!("failed to load English resources: {error}"));
    install_localization_loader(english)
        .unwrap_or_else(|error| panic!("failed to restore English loader: {error}"));

    assert_eq!(french, "saut de ligne dans un commentaire");
    assert_eq!(message("syntax-linefeed-in-comment"), "linefeed in comment");
}
