//! Stage identifiers and the records the pipeline produces.

/// One of the six ordered pipeline stages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stage {
    /// Remove a leading `#`
    StripMarker,
    /// Replace characters outside `0-9a-fA-F` with `0`
    Sanitize,
    /// Pad with `0` to a positive multiple of three
    Pad,
    /// Split into red, green and blue
    Split,
    /// Bring each component down to two characters
    Reconcile,
    /// Concatenate the components
    Assemble,
}

impl Stage {
    /// All stages in pipeline order.
    pub const ALL: [Stage; 6] = [
        Stage::StripMarker,
        Stage::Sanitize,
        Stage::Pad,
        Stage::Split,
        Stage::Reconcile,
        Stage::Assemble,
    ];

    /// 1-based position in the pipeline.
    pub fn ordinal(self) -> usize {
        match self {
            Stage::StripMarker => 1,
            Stage::Sanitize => 2,
            Stage::Pad => 3,
            Stage::Split => 4,
            Stage::Reconcile => 5,
            Stage::Assemble => 6,
        }
    }

    /// Display name of the stage.
    pub fn name(self) -> &'static str {
        match self {
            Stage::StripMarker => "Initial Cleanup",
            Stage::Sanitize => "Replace Invalid Characters",
            Stage::Pad => "Standardise Length",
            Stage::Split => "Split into RGB Components",
            Stage::Reconcile => "Handle Length",
            Stage::Assemble => "Final Assembly",
        }
    }

    /// Ordinal and name, e.g. `"3. Standardise Length"`.
    pub fn title(self) -> String {
        format!("{}. {}", self.ordinal(), self.name())
    }
}

/// What one stage did to the value it was handed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StageRecord {
    /// Which pipeline stage produced this record
    pub stage: Stage,
    /// Ordinal and name of the stage
    pub title: String,
    /// Human-readable explanation with before/after values, or why it was skipped
    pub description: String,
    /// Output value; for `Split` and `Reconcile` the components joined by `,`
    pub value: String,
    /// `true` when the stage left its input untouched
    pub skipped: bool,
}

impl StageRecord {
    /// Record a stage that changed its input.
    pub fn applied(stage: Stage, description: String, value: String) -> Self {
        Self {
            stage,
            title: stage.title(),
            description,
            value,
            skipped: false,
        }
    }

    /// Record a stage that was a no-op.
    pub fn skipped(stage: Stage, description: String, value: String) -> Self {
        Self {
            stage,
            title: stage.title(),
            description,
            value,
            skipped: true,
        }
    }
}

/// Full output of one normalizer run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Normalization {
    /// One record per stage, in pipeline order
    pub stages: Vec<StageRecord>,
    /// Hex digits without the leading `#`
    pub final_color: String,
}

impl Normalization {
    /// The record for `stage`, if present.
    pub fn stage(&self, stage: Stage) -> Option<&StageRecord> {
        self.stages.iter().find(|r| r.stage == stage)
    }

    /// The final color prefixed with `#`, ready for CSS.
    pub fn css_color(&self) -> String {
        format!("#{}", self.final_color)
    }

    /// Stages that actually changed the value.
    pub fn applied_stages(&self) -> impl Iterator<Item = &StageRecord> {
        self.stages.iter().filter(|r| !r.skipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_in_order() {
        let ordinals: Vec<usize> = Stage::ALL.iter().map(|s| s.ordinal()).collect();
        assert_eq!(ordinals, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn stage_titles() {
        assert_eq!(Stage::StripMarker.title(), "1. Initial Cleanup");
        assert_eq!(Stage::Split.title(), "4. Split into RGB Components");
        assert_eq!(Stage::Assemble.title(), "6. Final Assembly");
    }

    #[test]
    fn record_constructors() {
        let rec = StageRecord::skipped(Stage::Pad, "nothing".into(), "abc".into());
        assert!(rec.skipped);
        assert_eq!(rec.title, "3. Standardise Length");

        let rec = StageRecord::applied(Stage::Pad, "padded".into(), "ab0".into());
        assert!(!rec.skipped);
        assert_eq!(rec.value, "ab0");
    }

    #[test]
    fn css_color_prefix() {
        let result = Normalization {
            stages: Vec::new(),
            final_color: "c00000".into(),
        };
        assert_eq!(result.css_color(), "#c00000");
        assert!(result.stage(Stage::StripMarker).is_none());
    }

    #[test]
    fn stage_lookup_by_tag() {
        let result = Normalization {
            stages: vec![StageRecord::applied(Stage::Assemble, "joined".into(), "abc".into())],
            final_color: "abc".into(),
        };
        assert_eq!(result.stage(Stage::Assemble).unwrap().value, "abc");
        assert!(result.stage(Stage::Split).is_none());
    }
}
