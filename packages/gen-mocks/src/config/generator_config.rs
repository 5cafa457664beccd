//! Typed generator configuration

use std::path::{Path, PathBuf};

use super::validation::Validatable;
use crate::features::emission::application::is_identifier;
use crate::features::interface_selection::NameMatcher;
use crate::shared::constants::defaults::{
    DIRECTORY_OUT_DIR, IMPORT_PATH_OUT_DIR, INTERFACE_SUFFIX, PACKAGE_NAME,
};
use crate::shared::models::{GenMocksError, Result};

/// Where the interfaces are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageLocation {
    /// `-p` names an existing directory
    Directory(PathBuf),

    /// `-p` is a Go import path, resolved through the module, GOPATH or GOROOT
    ImportPath(String),
}

impl PackageLocation {
    /// Directory when `package` exists as one, import path otherwise
    pub fn detect(package: &str) -> Self {
        let path = Path::new(package);
        if path.is_dir() {
            PackageLocation::Directory(path.to_path_buf())
        } else {
            PackageLocation::ImportPath(package.trim_end_matches('/').to_string())
        }
    }

    pub fn is_import_path(&self) -> bool {
        matches!(self, PackageLocation::ImportPath(_))
    }
}

/// Validated configuration of one generator run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub location: PackageLocation,

    /// Which interface names get a mock
    pub matcher: NameMatcher,

    /// Package to pick and package clause of the output files; `None` keeps
    /// each package's own name
    pub package_name: Option<String>,

    pub out_dir: PathBuf,

    /// Write files instead of previewing them
    pub write: bool,

    /// External goimports binary replacing the built-in import resolver
    pub goimports: Option<PathBuf>,
}

impl GeneratorConfig {
    pub fn builder(package: impl Into<String>) -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new(package)
    }
}

impl Validatable for GeneratorConfig {
    fn validate(&self) -> Result<()> {
        if let PackageLocation::ImportPath(path) = &self.location {
            if path.is_empty() || path.starts_with('/') || path.contains('\\') {
                return Err(GenMocksError::config(format!(
                    "{:?} is neither a directory nor an import path",
                    path
                )));
            }
        }
        if let Some(name) = &self.package_name {
            if !is_identifier(name) {
                return Err(GenMocksError::config(format!(
                    "invalid package name {:?}",
                    name
                )));
            }
        }
        if self.out_dir.as_os_str().is_empty() {
            return Err(GenMocksError::config("output directory must not be empty"));
        }
        if self.out_dir.exists() && !self.out_dir.is_dir() {
            return Err(GenMocksError::config(format!(
                "output path {} is not a directory",
                self.out_dir.display()
            )));
        }
        if let Some(bin) = &self.goimports {
            if bin.as_os_str().is_empty() {
                return Err(GenMocksError::config("goimports binary must not be empty"));
            }
        }
        Ok(())
    }
}

/// Builder applying the defaults of each invocation shape
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfigBuilder {
    package: String,
    pattern: Option<String>,
    package_name: Option<String>,
    out_dir: Option<PathBuf>,
    write: bool,
    goimports: Option<PathBuf>,
}

impl GeneratorConfigBuilder {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            ..Self::default()
        }
    }

    /// Interface name regex; a `Service` suffix match when unset
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn package_name(mut self, name: impl Into<String>) -> Self {
        self.package_name = Some(name.into());
        self
    }

    pub fn out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = Some(dir.into());
        self
    }

    pub fn write(mut self, write: bool) -> Self {
        self.write = write;
        self
    }

    pub fn goimports(mut self, bin: impl Into<PathBuf>) -> Self {
        self.goimports = Some(bin.into());
        self
    }

    pub fn build(self) -> Result<GeneratorConfig> {
        if self.package.trim().is_empty() {
            return Err(GenMocksError::config("import path must be set"));
        }

        let location = PackageLocation::detect(&self.package);
        let matcher = match &self.pattern {
            Some(pattern) => NameMatcher::regex(pattern)?,
            None => NameMatcher::suffix(INTERFACE_SUFFIX),
        };
        let (default_name, default_out) = if location.is_import_path() {
            (Some(PACKAGE_NAME.to_string()), IMPORT_PATH_OUT_DIR)
        } else {
            (None, DIRECTORY_OUT_DIR)
        };

        let config = GeneratorConfig {
            location,
            matcher,
            package_name: self.package_name.or(default_name),
            out_dir: self.out_dir.unwrap_or_else(|| PathBuf::from(default_out)),
            write: self.write,
            goimports: self.goimports,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_directory_shape_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = GeneratorConfig::builder(tmp.path().to_string_lossy())
            .build()
            .unwrap();
        assert_eq!(
            config.location,
            PackageLocation::Directory(tmp.path().to_path_buf())
        );
        assert_eq!(config.package_name, None);
        assert_eq!(config.out_dir, PathBuf::from("."));
        assert!(!config.write);
        assert!(config.matcher.matches("UserService"));
        assert!(!config.matcher.matches("UserStore"));
    }

    #[test]
    fn test_import_path_shape_defaults() {
        let config = GeneratorConfig::builder("github.com/acme/app/svc/")
            .build()
            .unwrap();
        assert_eq!(
            config.location,
            PackageLocation::ImportPath("github.com/acme/app/svc".into())
        );
        assert_eq!(config.package_name.as_deref(), Some("svc"));
        assert_eq!(config.out_dir, PathBuf::from("svc"));
    }

    #[test]
    fn test_explicit_values_win() {
        let config = GeneratorConfig::builder("github.com/acme/app/store")
            .pattern("Store$")
            .package_name("store")
            .out_dir("mocks")
            .write(true)
            .goimports("/usr/local/bin/goimports")
            .build()
            .unwrap();
        assert!(config.matcher.matches("UserStore"));
        assert_eq!(config.package_name.as_deref(), Some("store"));
        assert_eq!(config.out_dir, PathBuf::from("mocks"));
        assert!(config.write);
        assert!(config.goimports.is_some());
    }

    #[test]
    fn test_configuration_errors() {
        let err = GeneratorConfig::builder("").build().unwrap_err();
        assert!(matches!(err, GenMocksError::Config(_)));

        let err = GeneratorConfig::builder("github.com/acme/app")
            .pattern("(")
            .build()
            .unwrap_err();
        assert!(matches!(err, GenMocksError::Pattern(_)));

        let err = GeneratorConfig::builder("github.com/acme/app")
            .package_name("my-pkg")
            .build()
            .unwrap_err();
        assert!(matches!(err, GenMocksError::Config(_)));

        let err = GeneratorConfig::builder("/definitely/not/here")
            .build()
            .unwrap_err();
        assert!(matches!(err, GenMocksError::Config(_)));
    }

    #[test]
    fn test_out_dir_must_be_a_directory() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("taken");
        std::fs::write(&file, "").unwrap();
        let err = GeneratorConfig::builder("github.com/acme/app")
            .out_dir(&file)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }
}
