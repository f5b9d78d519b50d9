//! Sumire デバッガのコア機能
//!
//! このクレートは、デバッガの中核となるロジックを提供します。
//! デバッグ対象プロセスの所有と、対話コマンドの解釈・ディスパッチを担います。

pub mod command;
pub mod debugger;
pub mod errors;
pub mod parse;

pub use command::Command;
pub use debugger::Debugger;

// 他のクレートから使用するために再エクスポート
pub use sumire_target::StopReason;

/// デバッガの結果型
pub type Result<T> = anyhow::Result<T>;
