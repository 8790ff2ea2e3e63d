use super::path_error::PathError;
use crate::domain::candidate_file::CandidateFile;
use crate::domain::conversion_mode::ConversionMode;
use std::fmt;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// 構造体としてDirectoryPathを定義
#[derive(Debug)]
pub struct DirectoryPath {
    pub path: PathBuf,
}

impl DirectoryPath {
    // コンストラクタ: パスを受け取り、バリデーションを行う
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();

        // パスが存在し、かつディレクトリであることを検証
        if !path.exists() {
            return Err(PathError::InvalidPath(format!(
                "'{}' does not exist",
                path.display()
            )));
        }
        if !path.is_dir() {
            return Err(PathError::InvalidPath(format!(
                "'{}' is not a directory",
                path.display()
            )));
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    // 内部のPathBufへの参照を返す
    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// フォルダ直下から、モードが認識する拡張子を持つ通常ファイルを列挙します。
    ///
    /// サブフォルダは走査しません。順序はファイルシステムの列挙順のままで、ソートはしません。
    /// `photos.gif` という名前のディレクトリのように、拡張子が一致してもファイルでないものは除外します。
    ///
    /// # 戻り値
    /// * `Ok(Vec<CandidateFile>)`: 変換対象のファイル（0件の場合もある）。
    /// * `Err(PathError)`: フォルダの列挙に失敗した場合。
    pub fn candidate_files(&self, mode: ConversionMode) -> Result<Vec<CandidateFile>, PathError> {
        let mut candidates = Vec::new();
        for entry_result in WalkDir::new(&self.path).min_depth(1).max_depth(1) {
            let entry = entry_result.map_err(PathError::Walk)?;
            let path = entry.path();
            if is_candidate(path, mode) {
                candidates.push(CandidateFile::new(path));
            }
        }
        Ok(candidates)
    }
}

/// パスが変換対象のファイルであるか、拡張子で判定します。
fn is_candidate(path: &Path, mode: ConversionMode) -> bool {
    // シンボリックリンク先がファイルの場合も対象にするため `Path::is_file` を使う
    if !path.is_file() {
        return false;
    }
    // `.gif` のようなドットファイルは拡張子なしとして扱われる
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => mode.recognizes(ext),
        None => false,
    }
}

// Displayトレイトの実装（表示用）
impl fmt::Display for DirectoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
