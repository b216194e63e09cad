//! # Application State
//!
//! Everything the interactive session knows about itself. The REPL adapter
//! owns an `App` and only changes it through `update(state, action)` in
//! action.rs.
//!
//! ```text
//! App
//! ├── prompt: String        // text shown before each read
//! ├── show_banner: bool     // print the greeting line on start
//! ├── running: bool         // false once the exit sentinel or EOF is seen
//! └── stats: SessionStats   // lines handled, by outcome
//! ```

use crate::core::config::ResolvedConfig;

/// Counters for the lines handled in one session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub help: usize,
    pub encoded: usize,
    pub decoded: usize,
    pub invalid: usize,
}

impl SessionStats {
    pub fn total(&self) -> usize {
        self.help + self.encoded + self.decoded + self.invalid
    }
}

#[derive(Debug, Clone)]
pub struct App {
    pub prompt: String,
    pub show_banner: bool,
    pub running: bool,
    pub stats: SessionStats,
}

impl App {
    pub fn new(prompt: String) -> Self {
        Self {
            prompt,
            show_banner: true,
            running: true,
            stats: SessionStats::default(),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            show_banner: config.show_banner,
            ..Self::new(config.prompt.clone())
        }
    }
}
