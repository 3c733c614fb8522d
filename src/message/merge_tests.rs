//! Tests for deep merge.

use serde_json::json;

use super::merge::{deep_merge, merge_maps};

#[test]
fn scalar_overlay_replaces_base() {
    let mut base = json!({"color": "good", "text": "hi"});

    deep_merge(&mut base, json!({"color": "#ff0000"}));

    assert_eq!(base, json!({"color": "#ff0000", "text": "hi"}));
}

#[test]
fn new_keys_are_added() {
    let mut base = json!({"text": "hi"});

    deep_merge(&mut base, json!({"thumb_url": "http://example.com/thumb.png"}));

    assert_eq!(
        base,
        json!({"text": "hi", "thumb_url": "http://example.com/thumb.png"})
    );
}

#[test]
fn nested_objects_merge_recursively() {
    let mut base = json!({"author": {"name": "CI", "icon": "ci.png"}});

    deep_merge(&mut base, json!({"author": {"icon": "bot.png", "link": "https://ci"}}));

    assert_eq!(
        base,
        json!({"author": {"name": "CI", "icon": "bot.png", "link": "https://ci"}})
    );
}

#[test]
fn arrays_are_concatenated_not_replaced() {
    let mut base = json!({"fields": [{"title": "Lane", "value": "beta", "short": true}]});

    deep_merge(
        &mut base,
        json!({"fields": [{"title": "My Field", "value": "My Value", "short": true}]}),
    );

    assert_eq!(
        base["fields"],
        json!([
            {"title": "Lane", "value": "beta", "short": true},
            {"title": "My Field", "value": "My Value", "short": true},
        ])
    );
}

#[test]
fn array_entries_equal_to_base_entries_are_kept() {
    let result = json!({"title": "Result", "value": "Success", "short": true});
    let mut base = json!({"fields": [result.clone()], "mrkdwn_in": ["pretext", "text"]});

    deep_merge(
        &mut base,
        json!({"fields": [result.clone()], "mrkdwn_in": ["text", "fields"]}),
    );

    assert_eq!(base["fields"], json!([result.clone(), result]));
    assert_eq!(base["mrkdwn_in"], json!(["pretext", "text", "text", "fields"]));
}

#[test]
fn null_overlay_keeps_base() {
    let mut base = json!({"color": "good"});

    deep_merge(&mut base, json!({"color": null}));

    assert_eq!(base, json!({"color": "good"}));
}

#[test]
fn null_for_missing_key_is_inserted() {
    let mut base = json!({"color": "good"});

    deep_merge(&mut base, json!({"footer": null}));

    assert_eq!(base, json!({"color": "good", "footer": null}));
}

#[test]
fn mismatched_kinds_take_overlay() {
    let mut base = json!({"fields": [1, 2], "author": {"name": "CI"}});

    deep_merge(&mut base, json!({"fields": "none", "author": ["x"]}));

    assert_eq!(base, json!({"fields": "none", "author": ["x"]}));
}

#[test]
fn merge_maps_appends_new_keys_after_existing_ones() {
    let mut base = json!({"b": 1, "a": 2}).as_object().unwrap().clone();
    let overlay = json!({"c": 3, "a": 4}).as_object().unwrap().clone();

    merge_maps(&mut base, overlay);

    let keys: Vec<&str> = base.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["b", "a", "c"]);
    assert_eq!(base["a"], 4);
}
