// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for injecting entries into localization files on disk

use l10n_inject::catalog::Catalog;
use l10n_inject::inject::{InjectOptions, Injector};
use l10n_inject::types::Outcome;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const EN_DART: &str = "const Map<String, String> en = {\n  'english': 'English',\n  'german': 'German',\n  'italian': 'Italian',\n};\n";

fn injector(dir: &Path) -> Injector {
    Injector::new(InjectOptions {
        base_dir: dir.to_path_buf(),
        ..InjectOptions::default()
    })
    .expect("default options are valid")
}

fn catalog(lang: &str, pairs: &[(&str, &str)]) -> Catalog {
    let mut catalog = Catalog::new();
    for &(key, value) in pairs {
        catalog.insert(lang, key, value);
    }
    catalog
}

fn updated(keys: &[&str]) -> Outcome {
    Outcome::Updated {
        inserted: keys.iter().map(|k| k.to_string()).collect(),
    }
}

#[test]
fn test_missing_file_is_not_found_and_not_created() {
    let dir = TempDir::new().unwrap();
    let injector = injector(dir.path());
    let catalog = catalog("it", &[("russian", "Russo")]);

    for _ in 0..2 {
        let report = injector.run(&catalog).expect("run succeeds");
        assert_eq!(report.outcome_for("it"), Some(&Outcome::NotFound));
    }
    assert!(!dir.path().join("it.dart").exists());
}

#[test]
fn test_inserts_after_anchor_then_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("en.dart");
    fs::write(&path, EN_DART).unwrap();
    let injector = injector(dir.path());
    let catalog = catalog("en", &[("russian", "Russian")]);

    let first = injector.run(&catalog).expect("run succeeds");
    assert_eq!(first.outcome_for("en"), Some(&updated(&["russian"])));
    let content = fs::read_to_string(&path).unwrap();
    assert!(
        content.contains("  'german': 'German',\n  'russian': 'Russian',\n  'italian': 'Italian',"),
        "unexpected content:\n{}",
        content
    );

    let second = injector.run(&catalog).expect("run succeeds");
    assert_eq!(second.outcome_for("en"), Some(&Outcome::NoChangesNeeded));
    assert_eq!(fs::read_to_string(&path).unwrap(), content);
}

#[test]
fn test_all_keys_present_leaves_bytes_unchanged() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("en.dart");
    fs::write(&path, EN_DART).unwrap();

    let report = injector(dir.path())
        .run(&catalog("en", &[("english", "English"), ("italian", "Italian")]))
        .expect("run succeeds");

    assert_eq!(report.outcome_for("en"), Some(&Outcome::NoChangesNeeded));
    assert_eq!(fs::read(&path).unwrap(), EN_DART.as_bytes());
}

#[test]
fn test_missing_anchor_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fr.dart");
    let original = "const fr = {\n  'english': 'Anglais',\n  'italian': 'Italien',\n};\n";
    fs::write(&path, original).unwrap();

    let report = injector(dir.path())
        .run(&catalog("fr", &[("russian", "Russe")]))
        .expect("run succeeds");

    assert_eq!(report.outcome_for("fr"), Some(&Outcome::AnchorNotFound));
    assert_eq!(fs::read(&path).unwrap(), original.as_bytes());
}

#[test]
fn test_multiple_missing_keys_keep_catalog_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("en.dart");
    fs::write(&path, EN_DART).unwrap();

    let report = injector(dir.path())
        .run(&catalog("en", &[("russian", "Russian"), ("chinese", "Chinese")]))
        .expect("run succeeds");

    assert_eq!(report.outcome_for("en"), Some(&updated(&["russian", "chinese"])));
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains(
        "  'german': 'German',\n  'russian': 'Russian',\n  'chinese': 'Chinese',\n  'italian': 'Italian',"
    ));
}

#[test]
fn test_quoted_key_anywhere_counts_as_present() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("en.dart");
    // 'russian' only appears inside a value, never as a key.
    let original = "const en = {\n  'german': 'German',\n  'note': 'see 'russian' later',\n};\n";
    fs::write(&path, original).unwrap();

    let report = injector(dir.path())
        .run(&catalog("en", &[("russian", "Russian"), ("chinese", "Chinese")]))
        .expect("run succeeds");

    assert_eq!(report.outcome_for("en"), Some(&updated(&["chinese"])));
    let content = fs::read_to_string(&path).unwrap();
    assert!(!content.contains("'russian': 'Russian'"));
    assert!(content.contains("  'german': 'German',\n  'chinese': 'Chinese',\n"));
}

#[test]
fn test_non_ascii_values_written_byte_identical() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("es.dart");
    let original = "const es = {\n  'english': 'Inglés',\n  'german': 'Alemán',\n};\n";
    fs::write(&path, original).unwrap();

    let report = injector(dir.path())
        .run(&catalog("es", &[("portuguese", "Portugués"), ("chinese", "中文")]))
        .expect("run succeeds");

    assert_eq!(report.outcome_for("es"), Some(&updated(&["portuguese", "chinese"])));
    let expected = "const es = {\n  'english': 'Inglés',\n  'german': 'Alemán',\n  'portuguese': 'Portugués',\n  'chinese': '中文',\n};\n";
    assert_eq!(fs::read(&path).unwrap(), expected.as_bytes());
}

#[test]
fn test_byte_order_mark_survives() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("de.dart");
    let original = "\u{feff}const de = {\n  'german': 'Deutsch',\n};\n";
    fs::write(&path, original).unwrap();

    injector(dir.path())
        .run(&catalog("de", &[("russian", "Russisch")]))
        .expect("run succeeds");

    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(&[0xEF, 0xBB, 0xBF]));
    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        "\u{feff}const de = {\n  'german': 'Deutsch',\n  'russian': 'Russisch',\n};\n"
    );
}

#[test]
fn test_crlf_file_stays_crlf() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("en.dart");
    fs::write(
        &path,
        "const en = {\r\n  'german': 'German',\r\n  'italian': 'Italian',\r\n};\r\n",
    )
    .unwrap();

    let report = injector(dir.path())
        .run(&catalog("en", &[("russian", "Russian"), ("chinese", "Chinese")]))
        .expect("run succeeds");

    assert_eq!(report.outcome_for("en"), Some(&updated(&["russian", "chinese"])));
    let expected = "const en = {\r\n  'german': 'German',\r\n  'russian': 'Russian',\r\n  'chinese': 'Chinese',\r\n  'italian': 'Italian',\r\n};\r\n";
    assert_eq!(fs::read(&path).unwrap(), expected.as_bytes());
}

#[test]
fn test_invalid_utf8_fails_without_stopping_the_batch() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("en.dart");
    fs::write(&bad, b"const en = {\n  'german': 'German\xff',\n};\n").unwrap();
    fs::write(dir.path().join("it.dart"), "  'german': 'Tedesco',\n").unwrap();

    let mut catalog = catalog("en", &[("russian", "Russian")]);
    catalog.insert("it", "russian", "Russo");
    let report = injector(dir.path()).run(&catalog).expect("run succeeds");

    assert!(matches!(report.outcome_for("en"), Some(Outcome::Failed { .. })));
    assert_eq!(report.outcome_for("it"), Some(&updated(&["russian"])));
    assert_eq!(report.failure_count(), 1);
}

#[test]
fn test_directory_in_place_of_file_fails() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("en.dart")).unwrap();

    let report = injector(dir.path())
        .run(&catalog("en", &[("russian", "Russian")]))
        .expect("run succeeds");

    match report.outcome_for("en") {
        Some(Outcome::Failed { error }) => assert!(error.contains("en.dart"), "{}", error),
        other => panic!("expected Failed, got {:?}", other),
    }
}

#[test]
fn test_dry_run_reports_without_writing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("en.dart");
    fs::write(&path, EN_DART).unwrap();

    let injector = Injector::new(InjectOptions {
        base_dir: dir.path().to_path_buf(),
        dry_run: true,
        ..InjectOptions::default()
    })
    .unwrap();
    let report = injector
        .run(&catalog("en", &[("russian", "Russian")]))
        .expect("run succeeds");

    assert!(report.dry_run);
    assert_eq!(report.outcome_for("en"), Some(&updated(&["russian"])));
    assert_eq!(fs::read(&path).unwrap(), EN_DART.as_bytes());
}

#[test]
fn test_custom_anchor_and_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("en.txt");
    fs::write(&path, "{\n  'french': 'French',\n  'german': 'German',\n}\n").unwrap();

    let injector = Injector::new(InjectOptions {
        base_dir: dir.path().to_path_buf(),
        extension: "txt".to_string(),
        anchor: "french".to_string(),
        ..InjectOptions::default()
    })
    .unwrap();
    injector
        .run(&catalog("en", &[("russian", "Russian")]))
        .expect("run succeeds");

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "{\n  'french': 'French',\n  'russian': 'Russian',\n  'german': 'German',\n}\n"
    );
}

#[test]
fn test_builtin_catalog_across_all_outcomes() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("en.dart"), EN_DART).unwrap();
    fs::write(
        dir.path().join("it.dart"),
        "  'german': 'Tedesco',\n  'russian': 'Russo',\n  'portuguese': 'Portoghese',\n  'chinese': 'Cinese',\n",
    )
    .unwrap();
    fs::write(dir.path().join("fr.dart"), "  'allemand': 'Allemand',\n").unwrap();
    // es and de are absent.

    let report = injector(dir.path())
        .run(&Catalog::builtin())
        .expect("run succeeds");

    let langs: Vec<&str> = report.results.iter().map(|r| r.lang.as_str()).collect();
    assert_eq!(langs, ["en", "it", "es", "fr", "de"]);
    assert_eq!(
        report.outcome_for("en"),
        Some(&updated(&["russian", "portuguese", "chinese"]))
    );
    assert_eq!(report.outcome_for("it"), Some(&Outcome::NoChangesNeeded));
    assert_eq!(report.outcome_for("es"), Some(&Outcome::NotFound));
    assert_eq!(report.outcome_for("fr"), Some(&Outcome::AnchorNotFound));
    assert_eq!(report.outcome_for("de"), Some(&Outcome::NotFound));
    assert_eq!(report.failure_count(), 0);
    assert_eq!(report.inserted_count(), 3);
}

#[test]
fn test_parallel_matches_sequential() {
    let seq_dir = TempDir::new().unwrap();
    let par_dir = TempDir::new().unwrap();
    for dir in [seq_dir.path(), par_dir.path()] {
        fs::write(dir.join("en.dart"), EN_DART).unwrap();
        fs::write(dir.join("de.dart"), "  'german': 'Deutsch',\n").unwrap();
        fs::write(dir.join("fr.dart"), "nothing to anchor on\n").unwrap();
    }

    let sequential = injector(seq_dir.path())
        .run(&Catalog::builtin())
        .expect("sequential run succeeds");
    let parallel = Injector::new(InjectOptions {
        base_dir: par_dir.path().to_path_buf(),
        parallel: true,
        ..InjectOptions::default()
    })
    .unwrap()
    .run(&Catalog::builtin())
    .expect("parallel run succeeds");

    let outcomes = |r: &l10n_inject::types::InjectReport| -> Vec<(String, Outcome)> {
        r.results
            .iter()
            .map(|res| (res.lang.clone(), res.outcome.clone()))
            .collect()
    };
    assert_eq!(outcomes(&sequential), outcomes(&parallel));
    for name in ["en.dart", "de.dart", "fr.dart"] {
        assert_eq!(
            fs::read(seq_dir.path().join(name)).unwrap(),
            fs::read(par_dir.path().join(name)).unwrap()
        );
    }
}

#[test]
fn test_empty_catalog_is_rejected() {
    let dir = TempDir::new().unwrap();
    assert!(injector(dir.path()).run(&Catalog::new()).is_err());
}
