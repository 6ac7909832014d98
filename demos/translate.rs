//! 英語とジョージア語の辞書を登録して翻訳するデモ
//!
//! 使用方法:
//! ```
//! RUST_LOG=debug cargo run --example translate
//! ```

#![allow(clippy::print_stdout)]

use locale_resolver::create_resolver;
use locale_resolver::input::dictionary::Dictionary;
use serde_json::json;

fn dictionary(
    one: &str,
    greeting: &'static str,
    email: &str,
    main: &str,
    secondary: &str,
) -> Dictionary {
    Dictionary::new()
        .literal("one", one)
        .template("hello", move |ctx| format!("{greeting} {}", ctx.as_str().unwrap_or_default()))
        .branch(
            "contact",
            Dictionary::new().literal("email", email).branch(
                "address",
                Dictionary::new().literal("main", main).literal("secondary", secondary),
            ),
        )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // tracing を初期化（デフォルトは INFO レベル）
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let en = dictionary("one", "Hello", "E-mail", "Main address", "Secondary address");
    let ka = dictionary(
        "ერთი",
        "გამარჯობა",
        "ელ. ფოსტა",
        "მთავარი მისამართი",
        "დამატებითი მისამართი",
    );

    let resolver = create_resolver([("en", en), ("ka", ka)], "ka")?;
    let trans_en = resolver.translator("en")?;
    let trans_ka = resolver.translator("ka")?;

    println!("{}", trans_en.translate_with("hello", &json!("john"))?);
    println!("{}", trans_ka.translate("contact.address.secondary")?);
    println!("{}", trans_ka.translate_in("hello", Some(&json!("john")), "en")?);
    println!("{}", resolver.translator("fr")?.translate("one")?);

    Ok(())
}
