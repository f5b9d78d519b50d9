//! エラーメッセージ定数

/// 未知のコマンドを受け取った場合のエラーメッセージ
pub const ERR_UNKNOWN_COMMAND: &str = "Unknown command";
