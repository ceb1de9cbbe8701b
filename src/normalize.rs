//! The six-stage pipeline that coerces any string into a hex color.
//!
//! Each stage takes the previous stage's output and returns its own output
//! together with a [`StageRecord`]. No stage can fail.

use tracing::{debug, trace};

use crate::color::{drop_first, keep_first, keep_last, Components};
use crate::stage::{Normalization, Stage, StageRecord};

/// Components longer than this are cut from the left in stage 5.
const MAX_COMPONENT_LEN: usize = 8;
/// Length the reconcile stage aims for.
const TARGET_COMPONENT_LEN: usize = 2;

/// Run the whole pipeline on `input`.
///
/// Total over every string, including the empty one. The result always has
/// six records, one per [`Stage`], in order.
///
/// Components shorter than two characters are never padded back up, so
/// very short inputs yield fewer than six hex digits:
///
/// ```rust
/// use legacy_color_core::normalize;
///
/// assert_eq!(normalize("chucknorris").final_color, "c00000");
/// assert_eq!(normalize("#ff0000").css_color(), "#ff0000");
/// assert_eq!(normalize("").final_color, "000");
/// ```
pub fn normalize(input: &str) -> Normalization {
    let (value, stripped) = strip_marker(input);
    let (value, sanitized) = sanitize(&value);
    let (value, padded) = pad(&value);
    let (parts, split_rec) = split(&value);
    let (parts, reconciled) = reconcile(parts);
    let (final_color, assembled) = assemble(&parts);

    debug!(input, final_color = %final_color, "normalized");

    Normalization {
        stages: vec![stripped, sanitized, padded, split_rec, reconciled, assembled],
        final_color,
    }
}

/// Stage 1: drop a `#` in first position. Only the first character is checked.
pub(crate) fn strip_marker(value: &str) -> (String, StageRecord) {
    match value.strip_prefix('#') {
        Some(rest) => {
            debug!(before = value, after = rest, "stripped octothorpe");
            let description = format!("Remove octothorpe: \"{value}\" → \"{rest}\"");
            (
                rest.to_string(),
                StageRecord::applied(Stage::StripMarker, description, rest.to_string()),
            )
        }
        None => (
            value.to_string(),
            StageRecord::skipped(
                Stage::StripMarker,
                "Step skipped: No octothorpe (#) found at start of value".to_string(),
                value.to_string(),
            ),
        ),
    }
}

/// Stage 2: replace every non-hex UTF-16 code unit with `0`, one for one.
pub(crate) fn sanitize(value: &str) -> (String, StageRecord) {
    if value.chars().all(|c| c.is_ascii_hexdigit()) {
        return (
            value.to_string(),
            StageRecord::skipped(
                Stage::Sanitize,
                "Step skipped: All characters are valid hexadecimal (0-9, A-F)".to_string(),
                value.to_string(),
            ),
        );
    }

    // Replaced per UTF-16 unit, so characters outside the BMP become two zeros.
    let replaced: String = value
        .encode_utf16()
        .map(|unit| match u8::try_from(unit) {
            Ok(byte) if byte.is_ascii_hexdigit() => char::from(byte),
            _ => '0',
        })
        .collect();
    debug!(before = value, after = %replaced, "replaced non-hex characters");
    let description = format!("Replace non-hex characters: \"{value}\" → \"{replaced}\"");
    (
        replaced.clone(),
        StageRecord::applied(Stage::Sanitize, description, replaced),
    )
}

/// Stage 3: append `0` until the length is a positive multiple of three.
pub(crate) fn pad(value: &str) -> (String, StageRecord) {
    let len = value.chars().count();
    if len != 0 && len % 3 == 0 {
        return (
            value.to_string(),
            StageRecord::skipped(
                Stage::Pad,
                format!("Step skipped: Length ({len}) is already a multiple of 3"),
                value.to_string(),
            ),
        );
    }

    let mut padded = value.to_string();
    let mut padded_len = len;
    while padded_len == 0 || padded_len % 3 != 0 {
        padded.push('0');
        padded_len += 1;
    }
    debug!(before_len = len, after_len = padded_len, "padded to multiple of 3");
    let description = format!("Pad to multiple of 3: \"{value}\" → \"{padded}\"");
    (
        padded.clone(),
        StageRecord::applied(Stage::Pad, description, padded),
    )
}

/// Stage 4: split into three equal components. Never skipped.
pub(crate) fn split(value: &str) -> (Components, StageRecord) {
    let parts = Components::split(value);
    debug!(part_len = parts.shared_len(), "split into components");
    let description = format!("Split into:\n{}", parts.describe());
    let record = StageRecord::applied(Stage::Split, description, parts.joined(","));
    (parts, record)
}

/// Stage 5: cut components down to two characters.
///
/// Sub-steps run in order, each re-checked against the current length:
/// keep the last eight characters, strip shared leading zeros while longer
/// than two, then keep the first two characters.
pub(crate) fn reconcile(parts: Components) -> (Components, StageRecord) {
    let mut current = parts;
    let mut notes: Vec<String> = Vec::new();

    if current.shared_len() > MAX_COMPONENT_LEN {
        let truncated = current.map(|c| keep_last(c, MAX_COMPONENT_LEN));
        debug!(from = current.shared_len(), to = MAX_COMPONENT_LEN, "truncated components from the left");
        notes.push(format!(
            "Truncate to {MAX_COMPONENT_LEN} characters:\n{}",
            Components::describe_change(&current, &truncated)
        ));
        current = truncated;
    }

    // Length strictly decreases each pass, so this terminates at 2 at the latest.
    while current.shared_len() > TARGET_COMPONENT_LEN && current.all_start_with('0') {
        let stripped = current.map(drop_first);
        trace!(len = stripped.shared_len(), "removed shared leading zero");
        notes.push(format!(
            "Remove leading zeros:\n{}",
            Components::describe_change(&current, &stripped)
        ));
        current = stripped;
    }

    if current.shared_len() > TARGET_COMPONENT_LEN {
        let truncated = current.map(|c| keep_first(c, TARGET_COMPONENT_LEN));
        debug!(from = current.shared_len(), "truncated components to first 2 characters");
        notes.push(format!(
            "Truncate to first {TARGET_COMPONENT_LEN} characters:\n{}",
            Components::describe_change(&current, &truncated)
        ));
        current = truncated;
    }

    let value = current.joined(",");
    let record = if notes.is_empty() {
        let description = format!(
            "Step skipped: Components already at correct length ({} characters)\n{}",
            current.shared_len(),
            current.describe()
        );
        StageRecord::skipped(Stage::Reconcile, description, value)
    } else {
        StageRecord::applied(Stage::Reconcile, notes.join("\n\n"), value)
    };
    (current, record)
}

/// Stage 6: concatenate red, green and blue. Never skipped.
pub(crate) fn assemble(parts: &Components) -> (String, StageRecord) {
    let color = parts.concat();
    let description = format!(
        "Combine RGB components: {} = {color}",
        parts.joined(" + ")
    );
    (
        color.clone(),
        StageRecord::applied(Stage::Assemble, description, color),
    )
}
