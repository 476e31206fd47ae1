pub mod jsonl;

pub use jsonl::flush_decay_log;
