#![cfg_attr(all(not(test), target_os = "windows"), windows_subsystem = "windows")]

use kiosk_doc::{DocumentSurface, DocumentSurfaceConfig, OFFLINE_DOCUMENT_URL};
use kiosk_net::Provider;
use kiosk_shell::{
    KioskApplication, KioskShellCallback, OfflineFallback, SoftbufferRenderer, SurfaceHost,
    WindowConfig, create_default_event_loop,
};
use url::Url;
use winit::dpi::LogicalSize;
use winit::window::WindowAttributes;

/// The bundled offline document, compiled into the binary
const OFFLINE_DOCUMENT: &str = include_str!("../assets/offline.html");

/// Remote application loaded when no URL is configured
const DEFAULT_APP_URL: &str = "https://example.com";

const WINDOW_TITLE: &str = "Kiosk";

/// Backdrop behind the document while it loads (matches the splash background
/// of the web application)
const BACKGROUND_COLOR: u32 = 0x00FF_FFFF;

fn app_url() -> Url {
    let raw_url = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("KIOSK_URL").ok())
        .unwrap_or_else(|| DEFAULT_APP_URL.to_string());

    match Url::parse(&raw_url) {
        Ok(url) => url,
        Err(err) => {
            eprintln!("Invalid URL {raw_url}: {err}");
            std::process::exit(1);
        }
    }
}

fn launch() {
    tracing_subscriber::fmt::init();

    let url = app_url();

    // Turn on the runtime and enter it
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .unwrap();
    let _guard = rt.enter();

    let event_loop = create_default_event_loop();
    let proxy = event_loop.create_proxy();

    let surface = DocumentSurface::new(DocumentSurfaceConfig {
        fetcher: Provider::shared(),
        callback: KioskShellCallback::shared(proxy),
        offline_document: OFFLINE_DOCUMENT,
        background_color: BACKGROUND_COLOR,
    });

    let policy = OfflineFallback::shared(Url::parse(OFFLINE_DOCUMENT_URL).unwrap());
    let host = SurfaceHost::new(Box::new(surface), policy, url);

    let attrs = WindowAttributes::default()
        .with_title(WINDOW_TITLE)
        .with_inner_size(LogicalSize::new(480, 800));
    let window = WindowConfig::with_attributes(host, SoftbufferRenderer::new(), attrs);

    // Create application
    let mut application = KioskApplication::new();
    application.add_window(window);

    // Run event loop
    event_loop.run_app(&mut application).unwrap()
}

fn main() {
    launch()
}

#[unsafe(no_mangle)]
#[cfg(target_os = "android")]
pub fn android_main(android_app: kiosk_shell::AndroidApp) {
    kiosk_shell::set_android_app(android_app);
    launch()
}
