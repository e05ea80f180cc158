const COMMANDS: &[(&str, &str)] = &[
    (
        "trad [country] [word]",
        "Translate a word to a specific country (if not specified, it will be translated to French)",
    ),
    ("trad [--help, -h]", "Show this help message"),
    ("trad [--version, -v]", "Show the installed version"),
    ("trad [--languages, -l]", "List known target language codes"),
];

const OPTIONS: &[(&str, &str)] = &[
    (
        "--key-source <file|env>",
        "Read the API key from the temp-dir cache (default) or an env file",
    ),
    ("--env-file <path>", "Env file providing API_KEY (default: .env)"),
    ("--endpoint <url>", "Translate endpoint (default: DeepL free API)"),
];

/// Builds the usage text printed by `trad`, `trad -h` and `trad --help`.
pub fn usage_text() -> String {
    let mut text = String::from("\nUsage: trad [options]\n");
    for (cmd, desc) in COMMANDS {
        text.push_str(&format!("  {cmd:<24} {desc}\n"));
    }

    text.push_str("\nOptions:\n");
    for (opt, desc) in OPTIONS {
        text.push_str(&format!("  {opt:<24} {desc}\n"));
    }

    text.push_str("\nNotes:\n");
    text.push_str(
        "  - The country must be in ISO 3166-1 alpha-2 format (e.g. FR, DE, ES, etc.)\n",
    );
    text.push_str("  - Words starting with '-' go after '--' (e.g. trad -- -ish)\n");
    text
}

/// The line printed by `trad --version`.
pub fn version_line() -> String {
    format!("Latest version: v{}", env!("CARGO_PKG_VERSION"))
}

pub fn print_usage() {
    print!("{}", usage_text());
}

pub fn print_version() {
    println!("{}", version_line());
}
