//! Env file rendering.
//!
//! Pure string builders; nothing here touches the filesystem or dfx.

/// Text written wherever a value could not be resolved
pub const UNDEFINED: &str = "undefined";

/// Variable name for a canister: `<prefix><UPPERCASED NAME>`
pub fn canister_id_var(prefix: &str, canister: &str) -> String {
    format!("{}{}", prefix, canister.to_uppercase())
}

/// One `export` line per canister, in the order given.
///
/// Unresolved ids are written as `undefined`.
pub fn render_canister_ids(prefix: &str, ids: &[(String, Option<String>)]) -> String {
    let mut content = String::new();
    for (name, id) in ids {
        content.push_str(&format!(
            "export {}={}\n",
            canister_id_var(prefix, name),
            id.as_deref().unwrap_or(UNDEFINED)
        ));
    }
    content
}

/// A single export whose double-quoted value spans several lines:
///
/// ```text
/// export COMMON_PRINCIPAL_NAME_ADMIN="
/// # main node
/// <principal>
/// "
/// ```
pub fn render_principals(var: &str, comment: &str, principal: Option<&str>) -> String {
    format!(
        "export {}=\"\n{}\n{}\n\"\n",
        var,
        comment,
        principal.unwrap_or(UNDEFINED)
    )
}
