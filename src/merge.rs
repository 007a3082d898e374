//! Concatenation of collections.

use std::path::Path;

use crate::io::{read_documents, write_documents};
use crate::{Error, Result};

/// Concatenate `collections` in order. No deduplication, no shuffling.
#[must_use]
pub fn merge<T: Clone>(collections: &[Vec<T>]) -> Vec<T> {
    collections.concat()
}

/// Merge the documents of every file in `inputs` into `output`.
///
/// Returns the number of documents written.
pub fn merge_datasets<P: AsRef<Path>>(inputs: &[P], output: impl AsRef<Path>) -> Result<usize> {
    if inputs.is_empty() {
        return Err(Error::config("merge: no input datasets"));
    }

    let mut collections = Vec::with_capacity(inputs.len());
    for input in inputs {
        collections.push(read_documents(input)?);
    }

    let merged = merge(&collections);
    write_documents(output.as_ref(), &merged)?;
    log::info!(
        "merged {} datasets into {} documents -> {}",
        inputs.len(),
        merged.len(),
        output.as_ref().display()
    );
    Ok(merged.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::AnnotatedDocument;

    #[test]
    fn test_merge_preserves_order_and_length() {
        let a = vec![1, 2, 3];
        let b = vec![4, 5];
        let merged = merge(&[a.clone(), b.clone()]);

        assert_eq!(merged.len(), a.len() + b.len());
        assert_eq!(&merged[..a.len()], &a[..]);
        assert_eq!(&merged[a.len()..], &b[..]);
    }

    #[test]
    fn test_merge_keeps_duplicates() {
        let a = vec!["x", "y"];
        assert_eq!(merge(&[a.clone(), a]), vec!["x", "y", "x", "y"]);
    }

    #[test]
    fn test_merge_datasets() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.json");
        let b = dir.path().join("b.json");
        let a_docs = vec![AnnotatedDocument::new("eins", []), AnnotatedDocument::new("zwei", [])];
        let b_docs = vec![AnnotatedDocument::new("one", [])];
        write_documents(&a, &a_docs).unwrap();
        write_documents(&b, &b_docs).unwrap();

        let out = dir.path().join("joined.json");
        assert_eq!(merge_datasets(&[&a, &b], &out).unwrap(), 3);

        let joined = read_documents(&out).unwrap();
        assert_eq!(&joined[..2], &a_docs[..]);
        assert_eq!(joined[2], b_docs[0]);
    }

    #[test]
    fn test_merge_datasets_accepts_tasks_without_id() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.json");
        std::fs::write(&a, r#"[{"data": {"text": "x"}, "annotations": []}]"#).unwrap();

        let out = dir.path().join("joined.json");
        assert_eq!(merge_datasets(&[&a, &a], &out).unwrap(), 2);
        let joined = read_documents(&out).unwrap();
        assert!(joined.iter().all(|d| d.id.is_none()));
    }

    #[test]
    fn test_merge_datasets_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("joined.json");
        let err = merge_datasets(&[dir.path().join("nope.json")], &out).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(!out.exists());
    }
}
