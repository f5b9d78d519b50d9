//! トレース制御のエラー型

use nix::errno::Errno;
use thiserror::Error;

/// トレース制御呼び出しの失敗理由
///
/// ptrace/wait系のシステムコールは失敗を返すことがあるため、
/// 各呼び出しを結果型で包み、呼び出し元が報告するか無視するかを選べるようにする。
#[derive(Debug, Error)]
pub enum TraceError {
    /// プログラムパスがCStringに変換できない
    #[error("invalid program path: {0}")]
    InvalidPath(String),

    /// 引数がCStringに変換できない
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// 子プロセスの生成に失敗
    #[error("failed to fork debuggee: {0}")]
    Fork(#[source] Errno),

    /// 実行継続要求に失敗（プロセスが既に終了している場合など）
    #[error("failed to resume process {pid}: {source}")]
    Resume {
        pid: i32,
        #[source]
        source: Errno,
    },

    /// 停止イベントの待機に失敗
    #[error("failed to wait for process {pid}: {source}")]
    Wait {
        pid: i32,
        #[source]
        source: Errno,
    },

    /// 起動時に予期しない待機ステータスを観測した
    #[error("unexpected wait status while launching: {0}")]
    UnexpectedStatus(String),
}
