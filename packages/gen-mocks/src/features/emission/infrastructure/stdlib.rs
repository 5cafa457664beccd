//! Standard library package table
//!
//! Maps the package name a qualifier refers to onto its import path, for
//! qualifiers the scanned package never imports itself.

use std::collections::HashMap;

use once_cell::sync::Lazy;

const PACKAGES: &[&str] = &[
    "archive/tar",
    "archive/zip",
    "bufio",
    "bytes",
    "cmp",
    "compress/gzip",
    "compress/zlib",
    "container/heap",
    "container/list",
    "context",
    "crypto",
    "crypto/aes",
    "crypto/cipher",
    "crypto/ecdsa",
    "crypto/ed25519",
    "crypto/hmac",
    "crypto/rand",
    "crypto/rsa",
    "crypto/sha1",
    "crypto/sha256",
    "crypto/sha512",
    "crypto/tls",
    "crypto/x509",
    "database/sql",
    "database/sql/driver",
    "embed",
    "encoding",
    "encoding/base64",
    "encoding/binary",
    "encoding/csv",
    "encoding/hex",
    "encoding/json",
    "encoding/pem",
    "encoding/xml",
    "errors",
    "expvar",
    "flag",
    "fmt",
    "go/ast",
    "go/token",
    "hash",
    "html",
    "html/template",
    "image",
    "io",
    "io/fs",
    "iter",
    "log",
    "log/slog",
    "maps",
    "math",
    "math/big",
    "math/rand",
    "mime",
    "mime/multipart",
    "net",
    "net/http",
    "net/http/httptest",
    "net/mail",
    "net/netip",
    "net/rpc",
    "net/smtp",
    "net/url",
    "os",
    "os/exec",
    "os/signal",
    "os/user",
    "path",
    "path/filepath",
    "reflect",
    "regexp",
    "runtime",
    "slices",
    "sort",
    "strconv",
    "strings",
    "sync",
    "sync/atomic",
    "syscall",
    "testing",
    "text/tabwriter",
    "text/template",
    "time",
    "unicode",
    "unicode/utf16",
    "unicode/utf8",
    "unsafe",
];

// Names shared by several packages resolve to the most commonly imported one
static BY_NAME: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for path in PACKAGES.iter().rev() {
        let name = path.rsplit('/').next().unwrap_or(path);
        table.insert(name, *path);
    }
    table.insert("rand", "math/rand");
    table.insert("template", "text/template");
    table
});

/// Import path of the standard library package named `qualifier`
pub fn stdlib_import_path(qualifier: &str) -> Option<&'static str> {
    BY_NAME.get(qualifier).copied()
}

/// Whether `path` belongs to the standard library group
///
/// Non-standard paths start with a domain, so their first element has a dot.
pub fn is_stdlib_path(path: &str) -> bool {
    let first = path.split('/').next().unwrap_or(path);
    !first.contains('.')
}
