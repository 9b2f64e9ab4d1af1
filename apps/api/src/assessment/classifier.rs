//! Questionnaire scoring: counts answers into tech / design / management buckets
//! and picks a role recommendation from the totals.
//!
//! Pure and deterministic: no I/O, no shared state. Unknown answers are tolerated
//! and simply contribute to no bucket.

use serde::Serialize;

// ────────────────────────────────────────────────────────────────────────────
// Bucket tables
// ────────────────────────────────────────────────────────────────────────────

pub const TECH_ANSWERS: &[&str] = &[
    "Strongly Agree",
    "Excited",
    "Very Comfortable",
    "Coder",
    "[3, 2, 1]",
    "O(log n)",
    "matrix",
    "11",
    "JavaScript",
    "Building projects",
    "Weekly",
    "Yes",
    "4",
    "Debug patiently",
];

pub const DESIGN_ANSWERS: &[&str] = &[
    "Designer",
    "Apps/Web",
    "UI/UX",
    "Creative",
    "Reading docs/books",
    "Live classes",
    "Video tutorials",
];

pub const MANAGEMENT_ANSWERS: &[&str] = &[
    "Leader",
    "Tech Strategy",
    "Look for help",
    "Sometimes",
    "Neutral",
    "Only when required",
    "Overwhelmed",
];

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Tech,
    Design,
    Management,
}

/// Per-bucket answer counts. Each answer increments at most one counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    pub tech: u32,
    pub design: u32,
    pub management: u32,
}

impl Score {
    pub fn record(&mut self, bucket: Bucket) {
        match bucket {
            Bucket::Tech => self.tech += 1,
            Bucket::Design => self.design += 1,
            Bucket::Management => self.management += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.tech + self.design + self.management
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Recommendation {
    #[serde(rename = "Software Developer")]
    SoftwareDeveloper,
    #[serde(rename = "UI/UX Designer")]
    UiUxDesigner,
    #[serde(rename = "Project Manager")]
    ProjectManager,
}

impl Recommendation {
    /// Design wins only when it strictly beats both other buckets.
    /// Management wins when it beats tech, regardless of design.
    /// Everything else (ties included) falls through to Software Developer.
    pub fn from_score(score: &Score) -> Self {
        if score.design > score.tech && score.design > score.management {
            Recommendation::UiUxDesigner
        } else if score.management > score.tech {
            Recommendation::ProjectManager
        } else {
            Recommendation::SoftwareDeveloper
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::SoftwareDeveloper => "Software Developer",
            Recommendation::UiUxDesigner => "UI/UX Designer",
            Recommendation::ProjectManager => "Project Manager",
        }
    }
}

/// Result of classifying one questionnaire submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub recommendation: Recommendation,
    pub score: Score,
}

// ────────────────────────────────────────────────────────────────────────────
// Classification
// ────────────────────────────────────────────────────────────────────────────

/// Tech is checked first, then design, then management. First match wins.
pub fn bucket_for(answer: &str) -> Option<Bucket> {
    if TECH_ANSWERS.contains(&answer) {
        Some(Bucket::Tech)
    } else if DESIGN_ANSWERS.contains(&answer) {
        Some(Bucket::Design)
    } else if MANAGEMENT_ANSWERS.contains(&answer) {
        Some(Bucket::Management)
    } else {
        None
    }
}

pub fn classify<S: AsRef<str>>(answers: &[S]) -> Assessment {
    let mut score = Score::default();
    for answer in answers {
        if let Some(bucket) = bucket_for(answer.as_ref()) {
            score.record(bucket);
        }
    }

    Assessment {
        recommendation: Recommendation::from_score(&score),
        score,
    }
}
