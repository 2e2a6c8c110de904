use primeorder::i18n::{Catalog, I18nError, Locale, Namespace, Translate};
use std::fs;
use tempfile::TempDir;

#[test]
fn each_locale_translates_the_title() {
    let catalog = Catalog::embedded(Locale::Pt).unwrap();
    let title = |locale| {
        catalog
            .translator(locale)
            .t(Namespace::Common, "challenge_response_text", &[])
    };
    assert_eq!(title(Locale::En), "2Logical challenge response");
    assert_eq!(title(Locale::Pt), "Resposta ao desafio 2Logical");
    assert_ne!(title(Locale::Es), title(Locale::En));
}

#[test]
fn footer_year_is_interpolated() {
    let catalog = Catalog::embedded(Locale::Pt).unwrap();
    let text = catalog
        .translator(Locale::En)
        .t(Namespace::Footer, "date_variable", &[("year", "2026")]);
    assert!(text.starts_with("© 2026 2Logical"));
}

#[test]
fn unknown_key_falls_back_to_the_key() {
    let catalog = Catalog::embedded(Locale::Pt).unwrap();
    let text = catalog
        .translator(Locale::Es)
        .t(Namespace::Toasts, "no_such_key", &[]);
    assert_eq!(text, "no_such_key");
}

#[test]
fn override_dir_replaces_single_bundles() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("en")).unwrap();
    fs::write(dir.path().join("en/toasts.json"), r#"{ "is_prime": "Prime!" }"#).unwrap();

    let catalog = Catalog::load(Some(dir.path()), Locale::Pt).unwrap();
    let en = catalog.translator(Locale::En);
    assert_eq!(en.t(Namespace::Toasts, "is_prime", &[]), "Prime!");
    // Keys the override lacks come from the default locale.
    assert_eq!(
        en.t(Namespace::Toasts, "isnt_prime", &[]),
        "O número não é primo."
    );
    // Other bundles stay built in.
    assert_eq!(en.t(Namespace::Common, "verify", &[]), "Verify");
}

#[test]
fn malformed_override_is_reported() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("es")).unwrap();
    fs::write(dir.path().join("es/common.json"), "{ not json").unwrap();

    let err = Catalog::load(Some(dir.path()), Locale::Pt).unwrap_err();
    match err {
        I18nError::ParseError {
            locale, namespace, ..
        } => {
            assert_eq!(locale, Locale::Es);
            assert_eq!(namespace, "common");
        }
        other => panic!("expected ParseError, got {other}"),
    }
}
