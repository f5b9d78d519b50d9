//! デバッガコマンド

use crate::parse::{is_prefix, split};

/// デバッガコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 実行継続
    Continue,
}

/// 正規コマンド名のテーブル
///
/// トークンが正規名の空でない接頭辞であれば、そのコマンドとして受理される。
/// コマンドを追加する場合はこのテーブルに行を足す。
const COMMAND_TABLE: &[(&str, Command)] = &[("continue", Command::Continue)];

impl Command {
    /// コマンド文字列をパースする
    ///
    /// 先頭トークンをコマンド名、残りのトークンを引数として扱う。
    /// コマンド名は正規名との完全一致ではなく接頭辞一致で受理される
    /// （"continue"に対して"cont"や"c"も有効）。引数は現状では使用されない。
    pub fn parse(input: &str) -> Option<Self> {
        let parts = split(input.trim(), ' ');
        let command = parts.first()?;

        COMMAND_TABLE
            .iter()
            .find(|(canonical, _)| !command.is_empty() && is_prefix(command, canonical))
            .map(|(_, cmd)| cmd.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_continue_prefixes() {
        assert_eq!(Command::parse("continue"), Some(Command::Continue));
        assert_eq!(Command::parse("cont"), Some(Command::Continue));
        assert_eq!(Command::parse("co"), Some(Command::Continue));
        assert_eq!(Command::parse("c"), Some(Command::Continue));
    }

    #[test]
    fn test_parse_ignores_arguments() {
        assert_eq!(Command::parse("c 0xDEAD"), Some(Command::Continue));
        assert_eq!(Command::parse("continue now"), Some(Command::Continue));
    }

    #[test]
    fn test_parse_unknown_commands() {
        assert_eq!(Command::parse("break"), None);
        assert_eq!(Command::parse("x"), None);
        assert_eq!(Command::parse("foobar"), None);
        assert_eq!(Command::parse("continuee"), None);
        assert_eq!(Command::parse("Continue"), None);
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("   "), None);
    }
}
