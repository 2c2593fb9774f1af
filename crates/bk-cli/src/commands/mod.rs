pub mod build;
pub mod demo;

use bk_core::Entity;
use comfy_table::{ContentArrangement, Table};

/// Render an entity in one of the supported output formats.
fn render(entity: &Entity, format: &str) -> Result<String, String> {
    match format {
        "text" => render_text(entity),
        "table" => Ok(render_table(entity)),
        "json" => render_json(entity),
        _ => Err(format!(
            "unsupported format: \"{format}\". Use: text, table, json"
        )),
    }
}

fn render_text(entity: &Entity) -> Result<String, String> {
    let mut buf = Vec::new();
    entity
        .write_to(&mut buf)
        .map_err(|e| format!("cannot render entity: {e}"))?;
    String::from_utf8(buf).map_err(|e| format!("cannot render entity: {e}"))
}

fn render_table(entity: &Entity) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Slot", "Value"]);

    for kind in &Entity::SLOT_KINDS {
        let value = match entity.slot(kind) {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => "—".to_string(),
        };
        table.add_row(vec![kind.to_string(), value]);
    }

    format!("{table}\n")
}

fn render_json(entity: &Entity) -> Result<String, String> {
    serde_json::to_string_pretty(entity)
        .map(|s| s + "\n")
        .map_err(|e| format!("JSON serialization error: {e}"))
}
