//! Go package fixtures

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// `Fetcher` with one named parameter and two results
pub const FETCHER_GO: &str = "package svc

type Fetcher interface {
\tGet(id string) (string, error)
}
";

/// `Checker` with one anonymous parameter
pub const CHECKER_GO: &str = "package svc

type Checker interface {
\tCheck(bool) error
}
";

/// Two services in one file using an aliased third-party import
pub const USER_GO: &str = "package svc

import (
\t\"context\"
\t\"time\"

\tpb \"github.com/acme/proto/user\"
)

// UserService manages accounts.
type UserService interface {
\tGet(ctx context.Context, id string) (*pb.User, error)
\tList(context.Context, ...pb.Filter) ([]*pb.User, error)
\tTouch(ctx context.Context, at time.Time)
}

type AdminService interface {
\tBan(ctx context.Context, id string, _ string) error
}

type userStore struct{}
";

/// Temporary package directory
pub struct GoPackage {
    dir: TempDir,
}

impl GoPackage {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("temp dir"),
        }
    }

    /// Package made of `files` (name, contents)
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let pkg = Self::new();
        for (name, contents) in files {
            pkg.write(name, contents);
        }
        pkg
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture dir");
        }
        fs::write(&path, contents).expect("write fixture");
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn path_str(&self) -> String {
        self.dir.path().to_string_lossy().into_owned()
    }
}
