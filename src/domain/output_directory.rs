use super::candidate_file::CandidateFile;
use super::input_source::PathError;
use super::output_format::OutputFormat;
use std::fs;
use std::path::{Path, PathBuf};

/// 変換結果の書き込み先フォルダ。
///
/// `prepare` を通じてのみ生成され、その時点でフォルダが存在することが保証されます。
#[derive(Debug)]
pub struct OutputDirectory {
    path: PathBuf,
}

impl OutputDirectory {
    /// 出力フォルダを用意します。存在しない場合は中間のフォルダも含めて作成します。
    ///
    /// すでに存在する場合は何もしません。作成に失敗した場合はバッチ全体を中断するエラーとなります。
    pub fn prepare<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();
        fs::create_dir_all(path).map_err(PathError::IoError)?;
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// 変換対象ファイルの出力パスを求めます（例: `out/a.gif` → `out/a.jpg`）。
    ///
    /// UTF-8 でないファイル名もバイト列のまま扱い、最後の拡張子だけを置き換えます。
    pub fn target_for(&self, candidate: &CandidateFile, format: OutputFormat) -> PathBuf {
        let file_name = candidate.path().file_name().unwrap_or_default();
        self.path
            .join(file_name)
            .with_extension(format.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn prepare_creates_nested_directories() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("c");

        let output = OutputDirectory::prepare(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(output.as_path(), nested);
    }

    #[test]
    fn prepare_is_idempotent() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("keep.txt"), b"keep").unwrap();

        OutputDirectory::prepare(dir.path()).unwrap();
        OutputDirectory::prepare(dir.path()).unwrap();
        assert!(dir.path().join("keep.txt").exists());
    }

    #[test]
    fn prepare_fails_when_path_is_a_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("occupied");
        std::fs::write(&file, b"x").unwrap();

        let res = OutputDirectory::prepare(&file);
        assert!(matches!(res, Err(PathError::IoError(_))));
    }

    #[test]
    fn target_replaces_extension_with_format_extension() {
        let dir = tempdir().unwrap();
        let output = OutputDirectory::prepare(dir.path()).unwrap();
        let candidate = CandidateFile::new("/somewhere/Holiday.Photo.GIF");

        assert_eq!(
            output.target_for(&candidate, OutputFormat::Jpg),
            dir.path().join("Holiday.Photo.jpg")
        );
        assert_eq!(
            output.target_for(&candidate, OutputFormat::Png),
            dir.path().join("Holiday.Photo.png")
        );
    }

    #[cfg(unix)]
    #[test]
    fn target_keeps_non_utf8_bytes_distinct() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        let output = OutputDirectory::prepare(dir.path()).unwrap();
        let first = CandidateFile::new(Path::new("/in").join(OsStr::from_bytes(b"caf\xe9.png")));
        let second = CandidateFile::new(Path::new("/in").join(OsStr::from_bytes(b"caf\xe8.png")));

        let first_target = output.target_for(&first, OutputFormat::Jpg);
        let second_target = output.target_for(&second, OutputFormat::Jpg);
        assert_ne!(first_target, second_target);
        assert_eq!(
            first_target.file_name().unwrap().as_bytes(),
            b"caf\xe9.jpg"
        );
    }
}
