use clap::Parser;
use gpui::{App, Application};
use tracing::{debug, error, warn};

use tax_core::TaxCalculator;
use tax_ui::{
    cli::Cli, components::WindowPreferences, logging, open_main_window, settings::Settings,
    setup_app,
};

fn main() -> anyhow::Result<()> {
    logging::init_default_logging();

    let cli = Cli::parse();

    let settings_path = cli.settings.clone().or_else(Settings::default_path);
    let mut settings = match &settings_path {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    cli.apply_to(&mut settings);

    if let Err(error) = logging::apply_settings(&settings) {
        warn!(%error, "could not apply logging settings");
    }

    let locale = settings.resolve_locale();
    debug!(%locale, settings_path = ?settings_path, "settings resolved");
    let calculator = TaxCalculator::for_locale(&locale);

    if let Some(model) = cli.one_shot() {
        debug!(%model, "one-shot calculation");
        println!("{}", model.formatted_tax(&calculator));
        return Ok(());
    }

    let preferences = WindowPreferences::from(settings.window);

    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |cx: &mut App| {
            setup_app(cx);
            if let Err(error) = open_main_window(calculator, preferences, cx) {
                error!(?error, "failed to open main window");
                cx.quit();
            }
        });

    Ok(())
}
