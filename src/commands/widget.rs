use std::path::PathBuf;

use anyhow::Result;

use recipebook::presentation::factory;
use recipebook::WidgetResource;

pub fn cmd_widget(resource: WidgetResource, dist: Option<PathBuf>, json: bool) -> Result<()> {
    let config = super::load_config(json)?;
    let loader = factory::create_widget_loader(&config, dist.as_deref());
    let document = loader.load(resource)?;

    if json {
        crate::ui::json::emit(serde_json::json!({
            "event": "resource",
            "command": "widget",
            "uri": document.resource.uri(),
            "mime": document.mime,
            "path": document.path.display().to_string(),
            "html": document.html,
        }))?;
    } else {
        print!("{}", document.html);
    }
    Ok(())
}
