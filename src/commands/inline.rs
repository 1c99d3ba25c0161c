use std::path::PathBuf;

use anyhow::Result;

use recipebook::application::InlineOptions;
use recipebook::domain::ports::InlineEventSink;
use recipebook::infrastructure::{ConsoleEventSink, JsonEventSink};
use recipebook::presentation::{factory, ColorWhen};

use crate::ui::context::UiContext;

pub fn cmd_inline(
    dir: Option<PathBuf>,
    dry_run: bool,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let config = super::load_config(json)?;
    let ui = UiContext::new(json, verbose, color, &config);

    let dir = dir.unwrap_or_else(|| config.asset_dir().to_path_buf());
    let options = InlineOptions::new(dir).with_dry_run(dry_run);

    let sink: Box<dyn InlineEventSink> = if ui.json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::stdout(ui.verbosity, ui.color, ui.unicode))
    };

    let use_case = factory::create_inline_use_case(&config);
    use_case.execute(&options, sink.as_ref())?;

    Ok(())
}
