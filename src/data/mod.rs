pub mod jsonl;
pub mod normalize;
pub mod provider;
pub mod record;

pub use jsonl::{load_jsonl, persist};
pub use normalize::{
    ensure_system_turn, is_well_formed, normalize_dataset, normalize_split, DEFAULT_SYSTEM_PROMPT,
};
pub use provider::{DatasetProvider, JsonlProvider, MemoryProvider, Split};
pub use record::{ConversationRecord, Role, Turn};
