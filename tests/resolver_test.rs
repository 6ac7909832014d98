//! End-to-end behaviour of the resolver through its public API.

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]
#![allow(clippy::indexing_slicing)]
#![allow(missing_docs)]

use std::sync::Arc;
use std::sync::atomic::{
    AtomicUsize,
    Ordering,
};
use std::thread;

use googletest::prelude::*;
use locale_resolver::input::dictionary::Dictionary;
use locale_resolver::key_path::NotFoundReason;
use locale_resolver::types::LeafKind;
use locale_resolver::{
    RegistrationError,
    Resolver,
    TranslateError,
    create_resolver,
};
use rstest::*;
use serde_json::json;

fn en() -> Dictionary {
    Dictionary::from_json(&json!({
        "one": "one",
        "contact": {
            "email": "E-mail",
            "address": {
                "main": "Main address",
                "secondary": "Secondary address"
            }
        }
    }))
    .unwrap()
    .template("hello", |ctx| format!("Hello {}", ctx.as_str().unwrap_or_default()))
}

fn ka() -> Dictionary {
    Dictionary::from_json(&json!({
        "one": "ერთი",
        "contact": {
            "email": "ელ. ფოსტა",
            "address": {
                "main": "მთავარი მისამართი",
                "secondary": "დამატებითი მისამართი"
            }
        }
    }))
    .unwrap()
    .template("hello", |ctx| format!("გამარჯობა {}", ctx.as_str().unwrap_or_default()))
}

#[fixture]
fn resolver() -> Resolver {
    create_resolver([("en", en()), ("ka", ka())], "ka").unwrap()
}

#[rstest]
fn translates_literals_per_locale(resolver: Resolver) {
    let en = resolver.translator("en").unwrap();
    let ka = resolver.translator("ka").unwrap();

    assert_that!(en.translate("contact.address.main"), ok(eq("Main address")));
    assert_that!(ka.translate("contact.address.secondary"), ok(eq("დამატებითი მისამართი")));
}

#[rstest]
fn translates_templates_with_context(resolver: Resolver) {
    let en = resolver.translator("en").unwrap();

    assert_that!(en.translate_with("hello", &json!("john")), ok(eq("Hello john")));
    assert_that!(en.translate("hello"), ok(eq("Hello ")));
}

#[rstest]
fn explicit_locale_override_wins(resolver: Resolver) {
    let ka = resolver.translator("ka").unwrap();

    assert_that!(
        ka.translate_in("hello", Some(&json!("john")), "en"),
        ok(eq("Hello john"))
    );
    assert_that!(ka.translate_in("one", None, "en"), ok(eq("one")));
    assert_that!(ka.translate_in("one", Some(&json!("ignored")), "en"), ok(eq("one")));
    assert_that!(ka.translate("one"), ok(eq("ერთი")));
}

#[rstest]
fn unregistered_locale_falls_back_to_base_locale(resolver: Resolver) {
    let fr = resolver.translator("fr").unwrap();

    assert_that!(fr.translate("one"), ok(eq("ერთი")));
    assert_that!(fr.translate("contact.address.main"), ok(eq("მთავარი მისამართი")));
    assert_that!(fr.translate_with("hello", &json!("john")), ok(eq("გამარჯობა john")));
}

#[rstest]
fn rejects_locale_missing_a_base_key() {
    let base = Dictionary::new()
        .literal("greeting", "Base greeting")
        .branch("nested", Dictionary::new().literal("only_base", "Base only"));
    let partial = Dictionary::new().literal("greeting", "Partial greeting");

    let result = create_resolver([("base", base), ("partial", partial)], "base");

    assert_that!(result, err(displays_as(contains_substring("'nested': key is missing"))));
}

#[rstest]
fn translator_identity_is_stable(resolver: Resolver) {
    let first = resolver.translator("ka").unwrap();
    let second = resolver.translator("ka").unwrap();

    assert!(Arc::ptr_eq(&first, &second));
}

#[rstest]
fn missing_keys_fail_without_corrupting_other_lookups(resolver: Resolver) {
    let en = resolver.translator("en").unwrap();

    let error = en.translate("contact.missing").unwrap_err();
    let TranslateError::KeyNotFound(not_found) = error else {
        panic!("expected a missing key error");
    };
    assert_that!(not_found.segment, eq("missing"));
    assert_that!(not_found.reason, eq(NotFoundReason::Missing));

    assert_that!(en.translate("contact.email"), ok(eq("E-mail")));
    assert_that!(en.translate("contact.missing"), err(anything()));
}

#[rstest]
fn key_too_deep_is_reported(resolver: Resolver) {
    let en = resolver.translator("en").unwrap();

    let result = en.translate("contact.email.value");

    assert_that!(
        result,
        err(displays_as(contains_substring("path continues past a leaf at segment 'value'")))
    );
}

#[rstest]
fn rejects_locale_with_mismatched_leaf_kind() {
    let broken = ka().template("one", |_| String::new());

    let result = create_resolver([("en", en()), ("ka", broken)], "en");

    let Err(RegistrationError::SchemaMismatch(mismatch)) = result else {
        panic!("expected a schema mismatch");
    };
    assert_that!(mismatch.to_string(), contains_substring("'one'"));
}

#[rstest]
fn lists_keys_by_kind(resolver: Resolver) {
    let en = resolver.translator("en").unwrap();

    assert_that!(en.keys(), len(eq(5)));
    assert_that!(en.keys_of_kind(LeafKind::Template), elements_are![eq("hello")]);
}

#[rstest]
fn concurrent_first_access_shares_one_translator() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counted = Arc::clone(&calls);
    let base = en().template("counted", move |_| {
        counted.fetch_add(1, Ordering::SeqCst);
        "counted".to_string()
    });
    let resolver = create_resolver([("en", base)], "en").unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let resolver = resolver.clone();
            thread::spawn(move || {
                let translator = resolver.translator("de").unwrap();
                assert_eq!(translator.translate("counted").unwrap(), "counted");
                translator
            })
        })
        .collect();
    let translators: Vec<_> =
        handles.into_iter().map(|handle| handle.join().unwrap()).collect();

    assert!(translators.iter().all(|translator| Arc::ptr_eq(translator, &translators[0])));
    assert_that!(translators[0].cached_keys(), eq(1));
    // The template itself still runs on every call.
    assert_that!(calls.load(Ordering::SeqCst), eq(8));
}
