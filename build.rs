use std::{ fs, path::Path, path::PathBuf };
use serde_json::{ Value, Map };
use anyhow::{ Context, Result, bail };

fn main() -> Result<()> {
    let locales_dir = find_locales_directory()?;
    let out_path = Path::new(&std::env::var("OUT_DIR")?).join("all_translations.json");

    println!("cargo:rerun-if-changed=locales");

    // Always create the file, even if empty, so include_str! works
    if !locales_dir.exists() {
        println!("cargo:warning=No locales/ folder found, bundling an empty catalog");
        fs::write(out_path, "{}")?;
        return Ok(());
    }

    let translations = build_translations(&locales_dir)?;
    fs::write(out_path, serde_json::to_string_pretty(&translations)?)?;

    Ok(())
}

fn build_translations(locales_dir: &Path) -> Result<Value> {
    let mut translations = Map::new();

    for file_entry in fs::read_dir(locales_dir)? {
        let file = file_entry?;
        let file_path = file.path();

        if file_path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }

        let Some(lang_code) = file_path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        println!("cargo:rerun-if-changed={}", file_path.display());

        let content = fs::read_to_string(&file_path)?;
        let json: Value = serde_json
            ::from_str(&content)
            .with_context(|| format!("invalid JSON in {}", file_path.display()))?;

        if !json.is_object() {
            bail!("{} must contain a JSON object at the top level", file_path.display());
        }

        translations.insert(lang_code.to_ascii_lowercase(), json);
    }

    Ok(Value::Object(translations))
}

fn find_locales_directory() -> Result<PathBuf> {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")?;
    Ok(Path::new(&manifest_dir).join("locales"))
}
