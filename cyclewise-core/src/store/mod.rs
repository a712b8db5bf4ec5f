//! Key-value persistence for widget state.
//!
//! Each widget reads and writes its own keys through a [`KeyValueStore`], so
//! the state types never touch the filesystem directly.

mod file;
mod memory;

pub use file::{FileStore, STORE_FILE_NAME};
pub use memory::MemoryStore;

use crate::error::CycleWiseResult;

pub const LAST_PERIOD_KEY: &str = "lastPeriod";
pub const CYCLE_LENGTH_KEY: &str = "cycleLength";
pub const SYMPTOMS_KEY: &str = "symptoms";
pub const CHAT_MESSAGES_KEY: &str = "chatMessages";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> CycleWiseResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> CycleWiseResult<()>;
    fn remove(&mut self, key: &str) -> CycleWiseResult<()>;
}
