//! Prints generated files instead of writing them

use std::io::Write;
use std::path::Path;

use crate::features::output::ports::OutputSink;
use crate::shared::models::Result;

/// Sink used without `-w`: `# <path>` followed by the file contents
#[derive(Debug)]
pub struct PreviewSink<W: Write> {
    out: W,
}

impl<W: Write> PreviewSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputSink for PreviewSink<W> {
    fn write(&mut self, path: &Path, contents: &[u8]) -> Result<()> {
        writeln!(self.out, "# {}", path.display())?;
        self.out.write_all(contents)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_format() {
        let mut sink = PreviewSink::new(Vec::new());
        sink.write(Path::new("svc/a_mock.go"), b"package svc\n").unwrap();
        sink.write(Path::new("svc/b_mock.go"), b"package svc\n").unwrap();
        assert_eq!(
            String::from_utf8(sink.into_inner()).unwrap(),
            "# svc/a_mock.go\npackage svc\n# svc/b_mock.go\npackage svc\n"
        );
    }
}
