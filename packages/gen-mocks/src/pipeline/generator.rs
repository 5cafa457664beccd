//! Mock generator
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::report::RunReport;
use crate::config::{GeneratorConfig, ImportPathResolver, PackageLocation};
use crate::features::emission::{
    Emitter, GoimportsCommand, ImportProcessor, NativeImportResolver, OutputFile,
};
use crate::features::interface_selection::SelectInterfacesUseCase;
use crate::features::mock_synthesis::MockSynthesizer;
use crate::features::output::{output_path, OutputSink};
use crate::features::parsing::domain::ImportSpec;
use crate::features::parsing::{ParseDirUseCase, ParsedPackage, TreeSitterGoParser};
use crate::shared::models::{FileSet, GenMocksError, Result};

/// Runs one generation pass for a [`GeneratorConfig`]
pub struct MockGenerator {
    config: GeneratorConfig,
    resolver: Option<ImportPathResolver>,
    selector: SelectInterfacesUseCase,
    synthesizer: MockSynthesizer,
    emitter: Emitter,
}

impl MockGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        let selector = SelectInterfacesUseCase::new(config.matcher.clone());
        Self {
            config,
            resolver: None,
            selector,
            synthesizer: MockSynthesizer::new(),
            emitter: Emitter::new(),
        }
    }

    /// Resolver for import-path locations; built from the environment when unset
    pub fn with_import_path_resolver(mut self, resolver: ImportPathResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate mocks for every selected package and hand them to `sink`
    ///
    /// Packages without a matching interface are reported and skipped; any
    /// other failure aborts the run.
    pub fn run(&self, sink: &mut dyn OutputSink) -> Result<RunReport> {
        let (dir, seed) = self.locate()?;

        let mut fset = FileSet::new();
        let packages = ParseDirUseCase::new(TreeSitterGoParser::new()).execute(&dir, &mut fset)?;
        debug!("parsed {} files in {}", fset.len(), dir.display());

        let mut report = RunReport::default();
        for package in self.pick_packages(&dir, packages)? {
            report.packages_scanned += 1;
            let written = self.generate_package(&package, seed.as_ref(), &fset, sink)?;
            if written.is_empty() {
                report.empty_packages.push(package.name.clone());
            }
            report.written.extend(written);
        }
        Ok(report)
    }

    /// Package directory plus the import seeded into every output file
    fn locate(&self) -> Result<(PathBuf, Option<ImportSpec>)> {
        match &self.config.location {
            PackageLocation::Directory(dir) => Ok((dir.clone(), None)),
            PackageLocation::ImportPath(import_path) => {
                let resolver = match &self.resolver {
                    Some(resolver) => resolver.clone(),
                    None => ImportPathResolver::from_env()?,
                };
                debug!(
                    "resolving {} from {}",
                    import_path,
                    resolver.start_dir().display()
                );
                let dir = resolver.resolve(import_path)?;
                Ok((dir, Some(ImportSpec::new(import_path.as_str()))))
            }
        }
    }

    fn pick_packages(
        &self,
        dir: &Path,
        mut packages: BTreeMap<String, ParsedPackage>,
    ) -> Result<Vec<ParsedPackage>> {
        match &self.config.package_name {
            Some(name) => packages.remove(name).map(|pkg| vec![pkg]).ok_or_else(|| {
                GenMocksError::config(format!(
                    "no '{}' package found in {}",
                    name,
                    dir.display()
                ))
            }),
            None => Ok(packages
                .into_values()
                .filter(|pkg| {
                    if pkg.is_test_package() {
                        debug!("skipping test package {}", pkg.name);
                    }
                    !pkg.is_test_package()
                })
                .collect()),
        }
    }

    fn import_processor(
        &self,
        package: &ParsedPackage,
        source: &Path,
    ) -> Box<dyn ImportProcessor> {
        match &self.config.goimports {
            Some(bin) => Box::new(GoimportsCommand::new(bin)),
            None => Box::new(NativeImportResolver::for_source(package, source)),
        }
    }

    fn generate_package(
        &self,
        package: &ParsedPackage,
        seed: Option<&ImportSpec>,
        fset: &FileSet,
        sink: &mut dyn OutputSink,
    ) -> Result<Vec<PathBuf>> {
        let selection = self.selector.execute(package);
        if selection.is_empty() {
            warn!(
                "no interfaces matching {} in package {} ({})",
                self.selector.matcher().describe(),
                package.name,
                package.dir.display()
            );
            return Ok(Vec::new());
        }

        let output_package = self
            .config
            .package_name
            .clone()
            .unwrap_or_else(|| package.name.clone());

        // one output file per declaring source file, in first-appearance order
        let mut files: Vec<(PathBuf, OutputFile)> = Vec::new();
        for iface in &selection.interfaces {
            if let Some(pos) = fset.position(iface.file, &iface.span) {
                debug!("{}: mocking {}", pos, iface.name);
            }
            let mock = self.synthesizer.synthesize(iface);
            match files.iter_mut().find(|(source, _)| *source == iface.source_path) {
                Some((_, file)) => file.push(mock),
                None => {
                    let mut file = OutputFile::new(output_package.as_str());
                    if let Some(seed) = seed {
                        file = file.with_import(seed.clone());
                    }
                    file.push(mock);
                    files.push((iface.source_path.clone(), file));
                }
            }
        }

        let mut written = Vec::with_capacity(files.len());
        for (source, file) in &files {
            let path = output_path(&self.config.out_dir, source);
            let processor = self.import_processor(package, source);
            let bytes = self.emitter.emit(file, &path, processor.as_ref())?;
            info!("# {}", path.display());
            sink.write(&path, &bytes)?;
            written.push(path);
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::output::PreviewSink;
    use std::fs;
    use tempfile::TempDir;

    #[derive(Default)]
    struct MemorySink {
        files: Vec<(PathBuf, String)>,
    }

    impl OutputSink for MemorySink {
        fn write(&mut self, path: &Path, contents: &[u8]) -> Result<()> {
            self.files
                .push((path.to_path_buf(), String::from_utf8_lossy(contents).into_owned()));
            Ok(())
        }
    }

    fn dir_config(dir: &Path) -> GeneratorConfig {
        GeneratorConfig::builder(dir.to_string_lossy())
            .out_dir("out")
            .build()
            .unwrap()
    }

    #[test]
    fn test_groups_interfaces_by_source_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("user.go"),
            "package svc\n\ntype UserService interface { Get(id string) error }\n\ntype AdminService interface { Ban(id string) error }\n",
        )
        .unwrap();
        fs::write(
            tmp.path().join("billing.go"),
            "package svc\n\ntype BillingService interface { Charge(cents int64) error }\n",
        )
        .unwrap();

        let mut sink = MemorySink::default();
        let report = MockGenerator::new(dir_config(tmp.path()))
            .run(&mut sink)
            .unwrap();

        let paths: Vec<_> = sink.files.iter().map(|(p, _)| p.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("out/billing_mock.go"),
                PathBuf::from("out/user_mock.go")
            ]
        );
        let user = &sink.files[1].1;
        assert!(user.find("MockUserService").unwrap() < user.find("MockAdminService").unwrap());
        assert_eq!(report.packages_scanned, 1);
        assert_eq!(report.files_written(), 2);
    }

    #[test]
    fn test_qualifiers_resolve_against_the_declaring_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("a.go"),
            "package svc\n\nimport \"github.com/acme/errors\"\n\ntype AService interface {\n\tFail(code errors.Code) error\n}\n",
        )
        .unwrap();
        fs::write(
            tmp.path().join("b.go"),
            "package svc\n\nimport \"errors\"\n\ntype BService interface {\n\tWrap(err errors.Thing) error\n}\n",
        )
        .unwrap();

        let mut sink = MemorySink::default();
        MockGenerator::new(dir_config(tmp.path()))
            .run(&mut sink)
            .unwrap();

        let (a_path, a) = &sink.files[0];
        let (b_path, b) = &sink.files[1];
        assert_eq!(a_path, &PathBuf::from("out/a_mock.go"));
        assert!(a.contains("import \"github.com/acme/errors\"\n"));
        assert_eq!(b_path, &PathBuf::from("out/b_mock.go"));
        assert!(b.contains("import \"errors\"\n"));
        assert!(!b.contains("github.com/acme/errors"));
    }

    #[test]
    fn test_empty_package_is_skipped() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("store.go"),
            "package store\n\ntype Store interface { Put() }\n",
        )
        .unwrap();

        let mut sink = PreviewSink::new(Vec::new());
        let report = MockGenerator::new(dir_config(tmp.path()))
            .run(&mut sink)
            .unwrap();
        assert!(report.is_empty());
        assert_eq!(report.empty_packages, vec!["store".to_string()]);
        assert!(sink.into_inner().is_empty());
    }

    #[test]
    fn test_named_package_must_exist() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.go"), "package api\n").unwrap();
        let config = GeneratorConfig::builder(tmp.path().to_string_lossy())
            .package_name("svc")
            .build()
            .unwrap();
        let err = MockGenerator::new(config)
            .run(&mut MemorySink::default())
            .unwrap_err();
        assert!(err.to_string().contains("no 'svc' package found in"));
    }

    #[test]
    fn test_import_path_shape() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("go.mod"), "module github.com/acme/app\n").unwrap();
        let pkg = tmp.path().join("svc");
        fs::create_dir_all(&pkg).unwrap();
        fs::write(
            pkg.join("ping.go"),
            "package svc\n\nimport \"context\"\n\ntype PingService interface {\n\tPing(ctx context.Context) error\n}\n",
        )
        .unwrap();

        let config = GeneratorConfig::builder("github.com/acme/app/svc")
            .build()
            .unwrap();
        let mut sink = MemorySink::default();
        MockGenerator::new(config)
            .with_import_path_resolver(ImportPathResolver::new(tmp.path()))
            .run(&mut sink)
            .unwrap();

        assert_eq!(sink.files.len(), 1);
        let (path, contents) = &sink.files[0];
        assert_eq!(path, &PathBuf::from("svc/ping_mock.go"));
        assert!(contents.starts_with("package svc\n\nimport \"context\"\n\ntype MockPingService struct {"));
    }
}
