//! Normalization of raw conversation records into canonical chat form
//!
//! Every surviving record starts with a system turn and the remaining turns
//! pair up into complete user/assistant exchanges. Records that cannot be
//! repaired that way are dropped, not fixed up.

use tracing::debug;

use super::provider::{DatasetProvider, Split};
use super::record::{ConversationRecord, Role, Turn};
use anyhow::Result;

/// System instruction used when a record carries none of its own
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a helpful assistant. Answer the user's questions accurately and concisely.";

/// Prepend a system turn with `default_system_text` unless the record
/// already opens with one. Idempotent.
pub fn ensure_system_turn(
    mut record: ConversationRecord,
    default_system_text: &str,
) -> ConversationRecord {
    if record.messages.first().map(|t| t.role) != Some(Role::System) {
        record
            .messages
            .insert(0, Turn::system(default_system_text));
    }
    record
}

/// True iff the turns after the system turn pair up into complete
/// user/assistant exchanges (even count). Odd counts indicate a corrupted
/// record, e.g. a trailing unanswered user turn.
pub fn is_well_formed(record: &ConversationRecord) -> bool {
    (record.messages.len().saturating_sub(1)) % 2 == 0
}

/// Normalize one split: drop empty records, prepend missing system turns,
/// then filter through `is_well_formed`. Relative order is preserved.
///
/// Empty records are excluded up front because the leading-role check
/// presupposes at least one turn.
pub fn normalize_split(
    records: Vec<ConversationRecord>,
    default_system_text: &str,
) -> Vec<ConversationRecord> {
    let input_len = records.len();
    let normalized: Vec<ConversationRecord> = records
        .into_iter()
        .filter(|record| !record.messages.is_empty())
        .map(|record| ensure_system_turn(record, default_system_text))
        .filter(is_well_formed)
        .collect();

    if normalized.len() < input_len {
        debug!(
            kept = normalized.len(),
            dropped = input_len - normalized.len(),
            "dropped malformed records"
        );
    }

    normalized
}

/// Normalize both splits fetched from `provider`. The provider owns the
/// train/test partitioning; this step only transforms and filters.
pub fn normalize_dataset<P: DatasetProvider>(
    provider: &P,
    default_system_text: &str,
) -> Result<(Vec<ConversationRecord>, Vec<ConversationRecord>)> {
    let train = normalize_split(provider.fetch_split(Split::Train)?, default_system_text);
    let test = normalize_split(provider.fetch_split(Split::Test)?, default_system_text);
    Ok((train, test))
}
