use rustc_hash::FxHashMap;
use serde::Serialize;
use std::path::PathBuf;

use crate::placement::{Bucket, Placement, PlacementKind};

/// Final state of one track
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TrackOutcome {
    Relocated {
        from: PathBuf,
        to: PathBuf,
        bucket: Bucket,
    },
    Duplicated {
        from: PathBuf,
        to: PathBuf,
        bucket: Bucket,
    },
    Failed {
        path: Option<PathBuf>,
        reason: String,
    },
}

impl From<Placement> for TrackOutcome {
    fn from(placement: Placement) -> Self {
        match placement.kind {
            PlacementKind::Relocated => TrackOutcome::Relocated {
                from: placement.source,
                to: placement.destination,
                bucket: placement.bucket,
            },
            PlacementKind::Duplicated => TrackOutcome::Duplicated {
                from: placement.source,
                to: placement.destination,
                bucket: placement.bucket,
            },
        }
    }
}

/// Everything that happened during one run, in traversal order
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub outcomes: Vec<TrackOutcome>,
    /// Tracks placed per genre bucket folder, duplicates included
    pub per_bucket: FxHashMap<String, usize>,
    pub created_dirs: Vec<PathBuf>,
}

impl RunReport {
    pub fn record(&mut self, outcome: TrackOutcome) {
        if let TrackOutcome::Relocated { bucket, .. } | TrackOutcome::Duplicated { bucket, .. } =
            &outcome
        {
            *self
                .per_bucket
                .entry(bucket.folder_name().to_string())
                .or_default() += 1;
        }
        self.outcomes.push(outcome);
    }

    pub fn relocated(&self) -> usize {
        self.count(|o| matches!(o, TrackOutcome::Relocated { .. }))
    }

    pub fn duplicated(&self) -> usize {
        self.count(|o| matches!(o, TrackOutcome::Duplicated { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, TrackOutcome::Failed { .. }))
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    fn count(&self, pred: impl Fn(&TrackOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts() {
        let mut report = RunReport::default();
        report.record(TrackOutcome::Relocated {
            from: "a.mp3".into(),
            to: "Genres/Rock/a.mp3".into(),
            bucket: Bucket::Genre("Rock".into()),
        });
        report.record(TrackOutcome::Duplicated {
            from: "sub/a.mp3".into(),
            to: "Genres/Duplicate/a.mp3".into(),
            bucket: Bucket::Genre("Rock".into()),
        });
        report.record(TrackOutcome::Relocated {
            from: "b.flac".into(),
            to: "Genres/No Genre/b.flac".into(),
            bucket: Bucket::NoGenre,
        });
        report.record(TrackOutcome::Failed {
            path: Some("c.mp3".into()),
            reason: "corrupt".into(),
        });

        assert_eq!(report.relocated(), 2);
        assert_eq!(report.duplicated(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.per_bucket.get("Rock"), Some(&2));
        assert_eq!(report.per_bucket.get("No Genre"), Some(&1));
        assert!(!report.is_empty());
    }

    #[test]
    fn test_report_serializes_outcomes() -> anyhow::Result<()> {
        let mut report = RunReport::default();
        report.record(TrackOutcome::Relocated {
            from: "a.mp3".into(),
            to: "Genres/Rock/a.mp3".into(),
            bucket: Bucket::Genre("Rock".into()),
        });

        let json = serde_json::to_value(&report)?;

        assert_eq!(json["outcomes"][0]["status"], "relocated");
        assert_eq!(json["outcomes"][0]["bucket"]["kind"], "genre");
        assert_eq!(json["outcomes"][0]["bucket"]["name"], "Rock");
        assert_eq!(json["per_bucket"]["Rock"], 1);

        Ok(())
    }
}
