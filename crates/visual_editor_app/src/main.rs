mod demo;
mod logging;
mod settings;
mod workbench;

use anyhow::Result;
use gpui::*;

use settings::AppSettings;
use workbench::Workbench;

fn main() -> Result<()> {
    let (settings, settings_issue) = AppSettings::load_or_default();
    logging::init(&settings)?;
    if let Some(err) = settings_issue {
        tracing::warn!("Settings not applied, using defaults: {err:#}");
    }
    logging::log_settings(&settings);

    let model = settings.initial_model()?;
    let window_size = size(px(settings.window.width), px(settings.window.height));

    Application::new().run(move |cx: &mut App| {
        let bounds = Bounds::centered(None, window_size, cx);
        let opened = cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some("Visual Editor".into()),
                    ..Default::default()
                }),
                ..Default::default()
            },
            move |window, cx| cx.new(|cx| Workbench::new(model.clone(), window, cx)),
        );

        if let Err(err) = opened {
            tracing::error!(%err, "failed to open editor window");
            cx.quit();
            return;
        }
        cx.activate(true);
    });

    Ok(())
}
