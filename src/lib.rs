//! # trad - translate a word from the terminal
//!
//! `trad` sends one word to the DeepL API and prints the translation in
//! color.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate to French (the default)
//! trad hello
//!
//! # Translate to German
//! trad de hello
//!
//! # Read the key from ./.env instead of the temp-dir cache
//! trad --key-source env es hello
//! ```
//!
//! ## Configuration
//!
//! Optional defaults live in `~/.config/trad/config.toml`:
//!
//! ```toml
//! [trad]
//! to = "DE"
//! key_source = "env"
//! env_file = "/home/me/.config/trad/deepl.env"
//! endpoint = "https://api.deepl.com/v2/translate"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// API key resolution from the key cache or an env file.
pub mod credential;

/// File system utilities.
pub mod fs;

/// Diagnostic tracing setup.
pub mod logging;

/// Global output configuration and leveled log lines.
pub mod output;

/// Path utilities for configuration and the key cache.
pub mod paths;

/// DeepL request/response types and HTTP client.
pub mod translation;

/// Terminal UI components (spinner, colors, prompts).
pub mod ui;
