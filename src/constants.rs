//! Central constants for the dirtools application

/// Defaults for the plain tree printer
pub mod tree {
    /// Depth limit used when `--max-depth` is not given
    pub const DEFAULT_MAX_DEPTH: usize = 4;

    /// Names skipped entirely, whether file or directory
    pub const EXCLUDED_NAMES: &[&str] = &[
        ".git",
        ".venv",
        "__pycache__",
        "node_modules",
        ".idea",
        ".mypy_cache",
        ".pytest_cache",
        ".next",
        "build",
        "dist",
    ];

    /// Hidden entries that are still listed
    pub const ALLOWED_HIDDEN: &[&str] = &[".env", ".env.local"];

    /// Line emitted in place of the children of an unreadable directory
    pub const PERMISSION_DENIED: &str = "[Permission Denied]";

    /// Header prefix printed before the diagram
    pub const HEADER_PREFIX: &str = "📂 Project Directory Tree from:";
}

/// Defaults for the annotated tree printer
pub mod annotate {
    /// Names skipped by the annotated printer, in addition to hidden entries
    pub const EXCLUDED_NAMES: &[&str] = &["node_modules"];

    /// Root used when no path is given
    pub const DEFAULT_ROOT: &str = ".";
}

/// Defaults for the contact exploder
pub mod contacts {
    /// Input file read when `--input` is not given
    pub const DEFAULT_INPUT: &str = "/mnt/data/New_Thesis_Driven_Capital_Stack.csv";

    /// Output file written when `--output` is not given
    pub const DEFAULT_OUTPUT: &str = "/mnt/data/Thesis_Driven_Cleaned_Output.csv";

    /// Column holding the contact names (after header normalization)
    pub const NAME_COLUMN: &str = "Contact Names";

    /// Column holding the contact emails (after header normalization)
    pub const EMAIL_COLUMN: &str = "Emails";

    /// Characters that separate values inside a contact cell
    pub const DELIMITERS: &[char] = &[';', ',', '\n'];
}
