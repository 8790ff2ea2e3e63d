//! 対話的な入力プロンプト。
//!
//! 入出力をジェネリックにしているため、テストでは `Cursor` と `Vec<u8>` で標準入出力を置き換えられる。

use crate::domain::output_format::OutputFormat;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use thiserror::Error;

const FORMAT_PROMPT: &str = "Enter the desired output format (JPG or PNG): ";
const INVALID_FORMAT_MESSAGE: &str = "Invalid format. Please enter 'JPG' or 'PNG'.";

#[derive(Debug, Error)]
pub enum PromptError {
    /// 回答を読む前に入力が閉じられた場合。
    #[error("input closed while waiting for an answer to: {question}")]
    UnexpectedEof { question: String },

    #[error("failed to read answer: {0}")]
    Io(#[from] std::io::Error),
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// 質問を表示して1行読み取り、前後の空白を除いて返します。
    fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(PromptError::UnexpectedEof {
                question: question.trim().to_string(),
            });
        }
        Ok(answer.trim().to_string())
    }

    pub fn ask_path(&mut self, question: &str) -> Result<PathBuf, PromptError> {
        self.ask(question).map(PathBuf::from)
    }

    /// `JPG` か `PNG`（大文字小文字は問わない）が入力されるまで繰り返し質問します。
    pub fn ask_output_format(&mut self) -> Result<OutputFormat, PromptError> {
        loop {
            let answer = self.ask(FORMAT_PROMPT)?;
            match answer.parse::<OutputFormat>() {
                Ok(format) => return Ok(format),
                Err(e) => {
                    log::debug!("rejected output format: {}", e);
                    writeln!(self.output, "{}", INVALID_FORMAT_MESSAGE)?;
                }
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn ask_path_trims_whitespace() {
        let mut p = prompter("   /tmp/my images  \n");
        let path = p.ask_path("Where? ").unwrap();
        assert_eq!(path, PathBuf::from("/tmp/my images"));
        assert_eq!(String::from_utf8(p.into_output()).unwrap(), "Where? ");
    }

    #[test]
    fn ask_output_format_reprompts_until_valid() {
        let mut p = prompter("bmp\n\njpeg\nJpg\n");
        assert_eq!(p.ask_output_format().unwrap(), OutputFormat::Jpg);

        let output = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(output.matches(FORMAT_PROMPT).count(), 4);
        assert_eq!(output.matches(INVALID_FORMAT_MESSAGE).count(), 3);
    }

    #[test]
    fn ask_output_format_normalizes_case() {
        for answer in ["JPG\n", "jpg\n", "Jpg\n"] {
            assert_eq!(prompter(answer).ask_output_format().unwrap(), OutputFormat::Jpg);
        }
        assert_eq!(prompter(" png \n").ask_output_format().unwrap(), OutputFormat::Png);
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut p = prompter("tiff\n");
        let err = p.ask_output_format().unwrap_err();
        assert!(matches!(err, PromptError::UnexpectedEof { .. }));
    }
}
