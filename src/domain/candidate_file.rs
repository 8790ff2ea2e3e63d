use std::path::{Path, PathBuf};

/// 入力フォルダ直下にある、変換対象と判定されたファイル。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    file_name: String,
    path: PathBuf,
}

impl CandidateFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { file_name, path }
    }

    /// 報告用のファイル名（ディレクトリ部分を含まない）。
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
