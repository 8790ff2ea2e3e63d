use std::fmt;

/// 入力・出力フォルダのパスに関するエラー。
///
/// いずれもバッチ全体を中断する致命的なエラーとして扱われる。
#[derive(Debug)]
pub enum PathError {
    /// パスが存在しない、またはディレクトリではない場合。
    InvalidPath(String),
    /// フォルダの作成や読み取りでI/Oエラーが発生した場合。
    IoError(std::io::Error),
    /// フォルダ内のエントリ列挙中にエラーが発生した場合。
    Walk(walkdir::Error),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::InvalidPath(s) => write!(f, "invalid path: {}", s),
            PathError::IoError(e) => write!(f, "I/O error: {}", e),
            PathError::Walk(e) => write!(f, "failed to list folder: {}", e),
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PathError::InvalidPath(_) => None,
            PathError::IoError(e) => Some(e),
            PathError::Walk(e) => Some(e),
        }
    }
}
