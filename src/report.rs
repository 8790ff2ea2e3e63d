use crate::domain::conversion_mode::ConversionMode;
use crate::domain::outcome::ConversionOutcome;
use std::io::Write;

const COMPLETED_MESSAGE: &str = "Conversion process completed!";

/// 変換の進行状況をユーザーに向けて1行ずつ出力する。
///
/// 出力先への書き込みに失敗しても処理の流れには影響させず、ログに残すだけにする。
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            log::warn!("failed to write report line: {}", e);
        }
    }

    pub fn no_candidates(&mut self, mode: ConversionMode) {
        self.line(mode.no_candidates_message());
    }

    pub fn outcome(&mut self, outcome: &ConversionOutcome) {
        self.line(&outcome.report_line());
    }

    pub fn completed(&mut self) {
        self.line(COMPLETED_MESSAGE);
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
