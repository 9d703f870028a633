// build.rs

use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::Path;

const FALLBACK_LANG: &str = "en";

/// Shape of a `locales/<lang>.toml` file.
#[derive(Deserialize)]
struct Catalog {
    meta: CatalogMeta,
    messages: toml::Table,
}

#[derive(Deserialize)]
struct CatalogMeta {
    name: String,
}

fn main() {
    let lang = select_language();
    println!("cargo:rustc-env=NSID_LANG_EFFECTIVE={}", lang);

    println!("cargo:rerun-if-env-changed=NSID_LANG");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=locales/");

    // English is always loaded first so every key has a value.
    let mut messages = load_catalog(FALLBACK_LANG)
        .unwrap_or_else(|e| panic!("Failed to load fallback catalog locales/en.toml: {}", e));

    if lang != FALLBACK_LANG {
        match load_catalog(&lang) {
            Ok(specific) => messages.extend(specific),
            Err(e) => println!(
                "cargo:warning=Could not load 'locales/{}.toml' ({}). Falling back to 'en'.",
                lang, e
            ),
        }
    }

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is always set by cargo");
    let dest_path = Path::new(&out_dir).join("translations.rs");
    fs::write(&dest_path, render_macro(&messages))
        .unwrap_or_else(|e| panic!("Failed to write {}: {}", dest_path.display(), e));
}

/// `lang_*` cargo features win over the `NSID_LANG` variable, which wins over English.
fn select_language() -> String {
    let mut requested: Vec<String> = env::vars()
        .filter_map(|(key, _)| {
            key.strip_prefix("CARGO_FEATURE_LANG_")
                .map(str::to_lowercase)
        })
        .collect();
    requested.sort();

    match requested.as_slice() {
        [] => env::var("NSID_LANG").unwrap_or_else(|_| FALLBACK_LANG.to_string()),
        [only] => only.clone(),
        [first, ..] => {
            println!(
                "cargo:warning=Multiple language features enabled ({:?}). Using '{}'.",
                requested, first
            );
            first.clone()
        }
    }
}

fn load_catalog(lang: &str) -> Result<BTreeMap<String, String>, String> {
    let path = format!("locales/{}.toml", lang);
    let content = fs::read_to_string(&path).map_err(|e| e.to_string())?;
    let catalog: Catalog = toml::from_str(&content).map_err(|e| e.to_string())?;

    let mut flat = BTreeMap::new();
    flatten("", &catalog.messages, &mut flat)?;
    flat.insert("meta.language".to_string(), catalog.meta.name);
    Ok(flat)
}

/// Turns nested tables into dotted keys: `[router.error] invalid_flag = ".."`
/// becomes `router.error.invalid_flag`.
fn flatten(
    prefix: &str,
    table: &toml::Table,
    out: &mut BTreeMap<String, String>,
) -> Result<(), String> {
    for (key, value) in table {
        let full_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match value {
            toml::Value::String(s) => {
                out.insert(full_key, s.clone());
            }
            toml::Value::Table(inner) => flatten(&full_key, inner, out)?,
            other => {
                return Err(format!(
                    "key '{}' must be a string or a table, found {}",
                    full_key,
                    other.type_str()
                ));
            }
        }
    }
    Ok(())
}

fn render_macro(messages: &BTreeMap<String, String>) -> String {
    let mut code = String::from("#[macro_export]\nmacro_rules! t {\n");
    for (key, value) in messages {
        let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
        code.push_str(&format!("    (\"{}\") => {{ \"{}\" }};\n", key, escaped));
    }
    // Unknown keys fail the build instead of printing nothing.
    code.push_str(
        "    ($key:expr) => {{ compile_error!(concat!(\"Missing translation key: \", $key)) }};\n",
    );
    code.push('}');
    code
}
