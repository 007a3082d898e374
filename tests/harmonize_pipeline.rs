//! File-level label mapping, reduction and merging.

use legalner::config::{english_labels, german_labels, spanish_labels, PipelineConfig};
use legalner::document::AnnotatedDocument;
use legalner::harmonize::map_datasets;
use legalner::io::{read_documents, write_documents};
use legalner::merge::merge_datasets;
use legalner::pipeline::run_pipeline;
use legalner::reduce::reduce_datasets;
use legalner::{Error, LabelMap, Span};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::path::Path;
use uuid::Uuid;

fn doc(text: &str, labels: &[&str]) -> AnnotatedDocument {
    let spans = labels.iter().map(|label| Span {
        id: Uuid::new_v4(),
        start: 0,
        end: text.chars().count(),
        text: text.to_string(),
        label: label.to_string(),
    });
    AnnotatedDocument::new(text, spans)
}

fn dataset(prefix: &str, n: usize, labels: &[&str]) -> Vec<AnnotatedDocument> {
    (0..n).map(|i| doc(&format!("{} {}", prefix, i), labels)).collect()
}

#[test]
fn test_map_rewrites_every_label() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("de_train.json");
    let output = dir.path().join("de_train_mapped.json");
    write_documents(&input, &dataset("satz", 5, &["NRM", "PER", "RS"])).unwrap();

    let stats = map_datasets(&[&input], &[&output], &german_labels()).unwrap();
    assert_eq!(stats[0].documents, 5);
    assert_eq!(stats[0].labels.get("LEGAL"), Some(&10));
    assert_eq!(stats[0].labels.get("PER"), Some(&5));

    let mapped = read_documents(&output).unwrap();
    let original = read_documents(&input).unwrap();
    for (m, o) in mapped.iter().zip(&original) {
        assert_eq!(m.text(), o.text());
        assert_eq!(m.id, o.id);
        assert_eq!(m.span_count(), o.span_count());
    }
}

#[test]
fn test_map_unknown_label_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.json");
    let bad = dir.path().join("bad.json");
    write_documents(&good, &dataset("a", 2, &["per"])).unwrap();
    write_documents(&bad, &dataset("b", 2, &["misc"])).unwrap();
    let outs = [dir.path().join("good_out.json"), dir.path().join("bad_out.json")];

    let err = map_datasets(&[&good, &bad], &outs, &spanish_labels()).unwrap_err();
    match err {
        Error::LabelMap { label, path } => {
            assert_eq!(label, "misc");
            assert_eq!(path.as_deref(), Some(bad.as_path()));
        }
        other => panic!("unexpected error: {}", other),
    }
    assert!(outs.iter().all(|p| !p.exists()));
}

#[test]
fn test_preserves_foreign_fields() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("en.json");
    let output = dir.path().join("en_mapped.json");
    std::fs::write(
        &input,
        r#"[{
            "id": 17,
            "data": {"text": "Court held", "source": "judgement"},
            "meta": {"annotator": 3},
            "annotations": [{
                "completed_by": 1,
                "result": [{
                    "value": {"start": 0, "end": 5, "text": "Court", "labels": ["COURT"]},
                    "id": "r1",
                    "from_name": "label",
                    "to_name": "text",
                    "type": "labels"
                }]
            }]
        }]"#,
    )
    .unwrap();

    map_datasets(&[&input], &[&output], &english_labels()).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(raw[0]["id"], 17);
    assert_eq!(raw[0]["data"]["source"], "judgement");
    assert_eq!(raw[0]["meta"]["annotator"], 3);
    assert_eq!(raw[0]["annotations"][0]["completed_by"], 1);
    assert_eq!(
        raw[0]["annotations"][0]["result"][0]["value"]["labels"][0],
        "LEGAL"
    );
}

#[test]
fn test_reduce_then_merge() {
    let dir = tempfile::tempdir().unwrap();
    let p = |name: &str| dir.path().join(name);
    write_documents(p("de.json"), &dataset("de", 12, &["PER"])).unwrap();
    write_documents(p("en.json"), &dataset("en", 5, &["PER"])).unwrap();
    write_documents(p("es.json"), &dataset("es", 9, &["PER"])).unwrap();

    let size = reduce_datasets(
        &[p("de.json"), p("en.json"), p("es.json")],
        &[p("de_r.json"), p("en_r.json"), p("es_r.json")],
        &mut StdRng::seed_from_u64(42),
    )
    .unwrap();
    assert_eq!(size, 5);

    let de = read_documents(p("de_r.json")).unwrap();
    let de_all: HashSet<_> = read_documents(p("de.json"))
        .unwrap()
        .into_iter()
        .map(|d| d.text().to_string())
        .collect();
    assert!(de.iter().all(|d| de_all.contains(d.text())));
    let unique: HashSet<_> = de.iter().map(|d| d.text()).collect();
    assert_eq!(unique.len(), 5);

    let count = merge_datasets(
        &[p("de_r.json"), p("en_r.json"), p("es_r.json")],
        p("joined.json"),
    )
    .unwrap();
    assert_eq!(count, 15);

    let joined = read_documents(p("joined.json")).unwrap();
    assert!(joined[..5].iter().all(|d| d.text().starts_with("de ")));
    assert!(joined[5..10].iter().all(|d| d.text().starts_with("en ")));
    assert!(joined[10..].iter().all(|d| d.text().starts_with("es ")));
}

#[test]
fn test_seeded_reduce_is_reproducible() {
    let dir = tempfile::tempdir().unwrap();
    let p = |name: &str| dir.path().join(name);
    write_documents(p("a.json"), &dataset("a", 30, &[])).unwrap();
    write_documents(p("b.json"), &dataset("b", 10, &[])).unwrap();

    for out in ["first", "second"] {
        reduce_datasets(
            &[p("a.json"), p("b.json")],
            &[p(&format!("{}_a.json", out)), p(&format!("{}_b.json", out))],
            &mut StdRng::seed_from_u64(7),
        )
        .unwrap();
    }
    assert_eq!(
        read_documents(p("first_a.json")).unwrap(),
        read_documents(p("second_a.json")).unwrap()
    );
}

fn write_language(dir: &Path, lang: &str, train: usize, val: usize, labels: &[&str]) {
    let val_name = if lang == "de" { "validation" } else { "val" };
    write_documents(
        dir.join(format!("{}_train.json", lang)),
        &dataset(lang, train, labels),
    )
    .unwrap();
    write_documents(
        dir.join(format!("{}_{}.json", lang, val_name)),
        &dataset(lang, val, labels),
    )
    .unwrap();
}

#[test]
fn test_builtin_multilingual_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    write_language(dir.path(), "de", 20, 6, &["LIT", "ORG"]);
    write_language(dir.path(), "en", 8, 4, &["COURT", "JUDGE"]);
    write_language(dir.path(), "es", 11, 5, &["legal", "time"]);

    let report = run_pipeline(
        &PipelineConfig::multilingual(),
        dir.path(),
        &mut StdRng::seed_from_u64(42),
    )
    .unwrap();
    assert_eq!(report.reduced_sizes, vec![8, 4]);
    assert_eq!(report.merged[0].1, 24);
    assert_eq!(report.merged[1].1, 12);

    let train = read_documents(dir.path().join("train_joined.json")).unwrap();
    let labels: HashSet<_> = train.iter().flat_map(|d| d.labels()).collect();
    let expected: HashSet<_> = ["LEGAL", "ORG", "PER", "TIME"].into_iter().collect();
    assert_eq!(labels, expected);
}

#[test]
fn test_identity_map_is_idempotent() {
    let docs = dataset("x", 3, &["PER", "LOC"]);
    let identity = LabelMap::identity(["PER", "LOC"]);
    let once = identity.apply(&docs).unwrap();
    let twice = identity.apply(&once).unwrap();
    assert_eq!(once, docs);
    assert_eq!(twice, docs);
}
