//! Sumire ターゲットプロセス制御
//!
//! このクレートは、デバッグ対象のプロセスを制御するための低レベル機能を提供します。
//! ptraceによる起動、実行継続、停止イベントの待機を行います。

pub mod error;
pub mod process;

pub use error::TraceError;
pub use process::{Process, StopReason};

/// ターゲット制御の結果型
pub type Result<T> = std::result::Result<T, TraceError>;
