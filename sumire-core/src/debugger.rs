//! デバッガセッションのメインロジック

use crate::Result;
use sumire_target::{Process, StopReason};
use tracing::debug;

/// デバッガセッション
///
/// デバッグ対象のプログラムパスとプロセスを所有する。
/// セッションが管理する子プロセスは一つだけであり、構築後に差し替えられることはない。
/// セッション終了時に子プロセスの後始末は行わない。
pub struct Debugger {
    /// デバッグ対象のプログラムパス
    program: String,
    /// デバッグ対象プロセス
    process: Process,
}

impl Debugger {
    /// 実行可能ファイルを起動してセッションを構築する
    ///
    /// 子プロセスが最初のトレース停止に達してから返るため、
    /// 構築済みのセッションは常に停止中の子プロセスを指している。
    pub fn launch(program: &str, args: &[String]) -> Result<Self> {
        let process = Process::spawn(program, args)?;
        debug!(pid = process.pid(), program, "debuggee launched");

        Ok(Self {
            program: program.to_string(),
            process,
        })
    }

    /// デバッグ対象のプログラムパスを取得する
    pub fn program(&self) -> &str {
        &self.program
    }

    /// プロセスIDを取得する
    pub fn pid(&self) -> i32 {
        self.process.pid()
    }

    /// プロセスを実行継続して次の停止イベントを待機する
    ///
    /// 子プロセスが再び停止するか終了するまで戻らない。
    pub fn continue_and_wait(&self) -> Result<StopReason> {
        debug!(pid = self.pid(), "resuming debuggee");
        let reason = self.process.continue_and_wait()?;
        debug!(pid = self.pid(), ?reason, "debuggee stopped");

        Ok(reason)
    }
}
