//! Centralized naming and layout constants
//!
//! Every fixed literal the generator relies on lives here so the generated
//! output stays deterministic.

/// Names given to synthesized declarations
pub mod naming {
    /// Prefix of the generated mock type (`Mock` + interface name)
    pub const MOCK_TYPE_PREFIX: &str = "Mock";

    /// Marker appended to a method name to form its function field
    pub const FIELD_SUFFIX: &str = "_";

    /// Prefix of names synthesized for anonymous parameters (`v0`, `v1`, ...)
    pub const ANON_PARAM_PREFIX: &str = "v";

    /// Receiver names, tried in order until one is not taken by a parameter
    pub const RECEIVER_CANDIDATES: &[&str] = &["s", "m", "mock"];

    /// Go blank identifier
    pub const BLANK_IDENT: &str = "_";
}

/// Output file naming
pub mod output {
    /// Suffix inserted before the extension (`foo.go` -> `foo_mock.go`)
    pub const FILE_SUFFIX: &str = "_mock";

    /// Extension of Go source files
    pub const GO_EXTENSION: &str = "go";

    /// Output directory permissions on Unix
    pub const DIR_MODE: u32 = 0o700;
}

/// Command line defaults
pub mod defaults {
    /// Interface name suffix selected when no pattern is given
    pub const INTERFACE_SUFFIX: &str = "Service";

    /// Package name used by the import-path invocation shape
    pub const PACKAGE_NAME: &str = "svc";

    /// Output directory used by the import-path invocation shape
    pub const IMPORT_PATH_OUT_DIR: &str = "svc";

    /// Output directory used by the directory invocation shape
    pub const DIRECTORY_OUT_DIR: &str = ".";
}

/// Printer layout
pub mod layout {
    /// Functions whose header plus body fit in this many columns stay on one line
    pub const ONE_LINE_FUNC_MAX: usize = 100;
}
