use gpui::{
    AnyElement, AnyView, App, AppContext, Bounds, Context, IntoElement, KeyBinding, Menu,
    MenuItem, ParentElement, Styled, TitlebarOptions, Window, WindowBounds, WindowOptions,
};
use gpui_component::{Root, v_flex};
use tax_core::TaxCalculator;
use tracing::info;

use crate::{
    Quit,
    components::{AppWindow, TaxForm, WindowPreferences},
    quit,
};

pub const WINDOW_TITLE: &str = "Calculate Tax";

pub fn setup_app(app_cx: &mut App) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);

    app_cx.activate(true);

    #[cfg(target_os = "macos")]
    app_cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    app_cx.on_action(quit);

    app_cx.set_menus(vec![Menu {
        name: WINDOW_TITLE.into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);
}

/// Builds the primary window content.
///
/// Returns a closure suitable for passing to [`AppWindow::set_content`]; the
/// form entity is created once and shared by every frame.
pub fn build_main_content(
    calculator: TaxCalculator,
    window: &mut Window,
    app_cx: &mut App,
) -> impl Fn() -> AnyElement + 'static {
    let form = app_cx.new(|form_cx: &mut Context<TaxForm>| {
        TaxForm::new(calculator, window, form_cx)
    });

    move || {
        v_flex()
            .size_full()
            .child(form.clone())
            .into_any_element()
    }
}

/// Opens the calculator window centered on the primary display.
pub fn open_main_window(
    calculator: TaxCalculator,
    preferences: WindowPreferences,
    app_cx: &mut App,
) -> anyhow::Result<()> {
    let bounds = Bounds::centered(None, preferences.size, app_cx);
    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        titlebar: Some(TitlebarOptions {
            title: Some(WINDOW_TITLE.into()),
            ..Default::default()
        }),
        ..Default::default()
    };

    app_cx.open_window(options, |window, cx| {
        let content = build_main_content(calculator, window, cx);
        let app_window = cx.new(|cx| {
            let mut app_window = AppWindow::new(cx);
            app_window.set_content(content);
            app_window
        });
        cx.new(|cx| Root::new(AnyView::from(app_window), window, cx))
    })?;

    info!(width = ?preferences.size.width, height = ?preferences.size.height, "main window opened");
    Ok(())
}
