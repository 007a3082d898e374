//! Map → reduce → merge driver.

use std::path::{Path, PathBuf};

use rand::Rng;

use crate::config::PipelineConfig;
use crate::harmonize::map_datasets;
use crate::merge::merge_datasets;
use crate::reduce::reduce_datasets;
use crate::Result;

/// What a pipeline run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineReport {
    /// Files written by map jobs.
    pub mapped: Vec<PathBuf>,
    /// Common size of each reduce job.
    pub reduced_sizes: Vec<usize>,
    /// Merged files and their document counts.
    pub merged: Vec<(PathBuf, usize)>,
}

fn resolve_all(base: &Path, paths: &[PathBuf]) -> Vec<PathBuf> {
    paths.iter().map(|p| base.join(p)).collect()
}

/// Run every job of `config`, resolving relative paths against `base_dir`.
///
/// Jobs run in order: all map jobs, then all reduce jobs, then all merge
/// jobs. The first failure stops the run.
pub fn run_pipeline<R: Rng + ?Sized>(
    config: &PipelineConfig,
    base_dir: &Path,
    rng: &mut R,
) -> Result<PipelineReport> {
    config.validate()?;
    let mut report = PipelineReport::default();

    for (i, job) in config.map_jobs.iter().enumerate() {
        let name = job.name.clone().unwrap_or_else(|| format!("#{}", i));
        log::info!("map job {}: {} files", name, job.inputs.len());
        let outputs = resolve_all(base_dir, &job.outputs);
        map_datasets(&resolve_all(base_dir, &job.inputs), &outputs, &job.labels)?;
        report.mapped.extend(outputs);
    }

    for (i, job) in config.reduce_jobs.iter().enumerate() {
        log::info!("reduce job #{}: {} files", i, job.inputs.len());
        let size = reduce_datasets(
            &resolve_all(base_dir, &job.inputs),
            &resolve_all(base_dir, &job.outputs),
            rng,
        )?;
        report.reduced_sizes.push(size);
    }

    for (i, job) in config.merge_jobs.iter().enumerate() {
        log::info!("merge job #{}: {} files", i, job.inputs.len());
        let output = base_dir.join(&job.output);
        let count = merge_datasets(&resolve_all(base_dir, &job.inputs), &output)?;
        report.merged.push((output, count));
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MapJob, MergeJob, ReduceJob};
    use crate::document::AnnotatedDocument;
    use crate::harmonize::LabelMap;
    use crate::io::{read_documents, write_documents};
    use crate::span::Span;
    use crate::Error;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use uuid::Uuid;

    fn docs(n: usize, label: &str) -> Vec<AnnotatedDocument> {
        (0..n)
            .map(|i| {
                AnnotatedDocument::new(
                    format!("doc {}", i),
                    [Span {
                        id: Uuid::new_v4(),
                        start: 0,
                        end: 3,
                        text: "doc".to_string(),
                        label: label.to_string(),
                    }],
                )
            })
            .collect()
    }

    fn config() -> PipelineConfig {
        PipelineConfig {
            seed: Some(1),
            map_jobs: vec![
                MapJob {
                    name: Some("de".to_string()),
                    inputs: vec!["de.json".into()],
                    outputs: vec!["de_mapped.json".into()],
                    labels: LabelMap::new().with("NRM", "LEGAL"),
                },
                MapJob {
                    name: None,
                    inputs: vec!["es.json".into()],
                    outputs: vec!["es_mapped.json".into()],
                    labels: LabelMap::new().with("legal", "LEGAL"),
                },
            ],
            reduce_jobs: vec![ReduceJob {
                inputs: vec!["de_mapped.json".into(), "es_mapped.json".into()],
                outputs: vec!["de_reduced.json".into(), "es_reduced.json".into()],
            }],
            merge_jobs: vec![MergeJob {
                inputs: vec!["de_reduced.json".into(), "es_reduced.json".into()],
                output: "joined.json".into(),
            }],
        }
    }

    #[test]
    fn test_full_run() {
        let dir = tempfile::tempdir().unwrap();
        write_documents(dir.path().join("de.json"), &docs(10, "NRM")).unwrap();
        write_documents(dir.path().join("es.json"), &docs(4, "legal")).unwrap();

        let report = run_pipeline(&config(), dir.path(), &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(report.mapped.len(), 2);
        assert_eq!(report.reduced_sizes, vec![4]);
        assert_eq!(report.merged[0].1, 8);

        let joined = read_documents(dir.path().join("joined.json")).unwrap();
        assert_eq!(joined.len(), 8);
        assert!(joined.iter().flat_map(|d| d.labels()).all(|l| l == "LEGAL"));
    }

    #[test]
    fn test_stops_at_first_failure() {
        let dir = tempfile::tempdir().unwrap();
        write_documents(dir.path().join("de.json"), &docs(3, "NRM")).unwrap();
        write_documents(dir.path().join("es.json"), &docs(3, "unknown")).unwrap();

        let err = run_pipeline(&config(), dir.path(), &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert!(matches!(err, Error::LabelMap { .. }));
        assert!(!dir.path().join("es_mapped.json").exists());
        assert!(!dir.path().join("joined.json").exists());
    }
}
