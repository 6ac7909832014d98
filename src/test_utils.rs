//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通の辞書を提供します。
#![cfg(test)]

use crate::input::dictionary::Dictionary;

/// テンプレートに渡された名前を取り出す
fn name_of(context: &serde_json::Value) -> &str {
    context.as_str().unwrap_or_default()
}

/// 英語の辞書
pub(crate) fn en() -> Dictionary {
    Dictionary::new()
        .literal("one", "one")
        .template("hello", |ctx| format!("Hello {}", name_of(ctx)))
        .branch(
            "contact",
            Dictionary::new().literal("email", "E-mail").branch(
                "address",
                Dictionary::new()
                    .literal("main", "Main address")
                    .literal("secondary", "Secondary address"),
            ),
        )
}

/// ジョージア語の辞書
pub(crate) fn ka() -> Dictionary {
    Dictionary::new()
        .literal("one", "ერთი")
        .template("hello", |ctx| format!("გამარჯობა {}", name_of(ctx)))
        .branch(
            "contact",
            Dictionary::new().literal("email", "ელ. ფოსტა").branch(
                "address",
                Dictionary::new()
                    .literal("main", "მთავარი მისამართი")
                    .literal("secondary", "დამატებითი მისამართი"),
            ),
        )
}
