use anyhow::Result;
use gpui::*;
use gpui_component::Root;
use pagegrid::app::{self, PageGridApp};
use pagegrid::constants::{FALLBACK_SCREEN_SIZE, WINDOW_TITLE};
use pagegrid::pdf::{PdfiumBackend, PdfiumLoader};
use pagegrid::settings::Settings;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pagegrid=info")),
        )
        .init();

    let settings = Settings::load();
    // The binding must outlive every document, so it lives for the whole process.
    let pdfium = Box::leak(Box::new(PdfiumLoader::load()?));
    let backend = PdfiumBackend::new(pdfium);
    let initial_path = std::env::args_os().nth(1).map(PathBuf::from);

    Application::new().run(move |cx: &mut App| {
        gpui_component::init(cx);
        app::init(cx);

        let screen = cx
            .primary_display()
            .map(|display| display.bounds().size)
            .map(|size| (f32::from(size.width), f32::from(size.height)))
            .unwrap_or(FALLBACK_SCREEN_SIZE);
        let fraction = settings.window_fraction();
        let bounds = Bounds::centered(
            None,
            size(px(screen.0 * fraction), px(screen.1 * fraction)),
            cx,
        );

        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(WINDOW_TITLE.into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(options, |window, cx| {
            let view = cx.new(|cx| PageGridApp::new(backend, settings, screen.0, cx));
            let focus_handle = view.read(cx).focus_handle.clone();
            window.focus(&focus_handle);
            if let Some(path) = initial_path {
                view.update(cx, |this, cx| this.load_document(path, window, cx));
            }
            cx.new(|cx| Root::new(AnyView::from(view), window, cx))
        });

        if let Err(e) = opened {
            tracing::error!("Failed to open window: {}", e);
            cx.quit();
        }
    });

    Ok(())
}
