use fractalview_compute::{subdivision_triangles, MandelbrotRenderer, PixelBuffer, Surface};
use fractalview_core::{FractalKind, Pixel, RenderSettings, Triangle, BLACK, WHITE};
use fractalview_ui::{go_back_region, save_png, to_image, Control, Screen, Session, UiEvent};

fn settings_from_json(value: serde_json::Value) -> RenderSettings {
    RenderSettings::from_json_str(&value.to_string()).unwrap()
}

#[test]
fn test_menu_to_mandelbrot_and_back() {
    let settings = settings_from_json(serde_json::json!({
        "max_iterations": 60
    }));
    let mut session = Session::new(settings.clone()).unwrap();
    let mut surface = PixelBuffer::new(session.grid(), WHITE);
    session.show_menu(&mut surface);

    // Mandelbrot is the bottom button
    let mandelbrot = session.buttons()[2];
    assert_eq!(mandelbrot.kind(), FractalKind::Mandelbrot);
    session
        .handle(UiEvent::Press(mandelbrot.region.center()), &mut surface)
        .unwrap();
    assert_eq!(session.screen().kind(), Some(FractalKind::Mandelbrot));

    // Outside the go-back region the frame matches a plain render
    let reference = MandelbrotRenderer::from_settings(&settings)
        .unwrap()
        .render_buffer()
        .unwrap();
    let probe = Pixel::new(450, 450);
    assert_eq!(surface.get(&probe), reference.get(&probe));

    session
        .handle(UiEvent::Press(go_back_region().center()), &mut surface)
        .unwrap();
    assert!(session.screen().kind().is_none());
}

#[test]
fn test_repeated_zooms_keep_clicked_point_centered() {
    let settings = settings_from_json(serde_json::json!({
        "width": 120,
        "height": 120,
        "max_iterations": 30,
        "zoom_factor": 0.5
    }));
    let mut session = Session::new(settings).unwrap();
    let mut surface = PixelBuffer::new(session.grid(), WHITE);
    session
        .handle(UiEvent::Select(FractalKind::Mandelbrot), &mut surface)
        .unwrap();

    for click in [Pixel::new(70, 60), Pixel::new(80, 90), Pixel::new(55, 75)] {
        let target = match session.screen() {
            Screen::Mandelbrot(r) => fractalview_core::pixel_to_plane(&click, r.viewport()),
            _ => panic!("expected Mandelbrot screen"),
        };
        session.handle(UiEvent::Press(click), &mut surface).unwrap();
        match session.screen() {
            Screen::Mandelbrot(r) => {
                let center = fractalview_core::pixel_to_plane(&Pixel::new(60, 60), r.viewport());
                assert!((center.x() - target.x()).abs() < 1e-9);
                assert!((center.y() - target.y()).abs() < 1e-9);
            }
            _ => panic!("expected Mandelbrot screen"),
        }
    }
}

#[test]
fn test_recursive_screen_outlines_inset_triangle() {
    let settings = RenderSettings {
        width: 300,
        height: 300,
        ..Default::default()
    };
    let mut session = Session::new(settings).unwrap();
    let mut surface = PixelBuffer::new(session.grid(), BLACK);
    session
        .handle(UiEvent::Select(FractalKind::RecursiveTriangle), &mut surface)
        .unwrap();

    let outer = Triangle::inset(300, 300);
    assert_eq!(surface.get(&outer.left), Some(BLACK));
    assert_eq!(surface.get(&outer.right), Some(BLACK));
    // The cleared background shows through the inverted middle triangle
    assert_eq!(surface.get(&Pixel::new(150, 200)), Some(WHITE));

    let expected = subdivision_triangles(&outer.to_f64()).unwrap();
    assert!(expected.len() > 1);
}

#[test]
fn test_chaos_session_is_reproducible_with_seed() {
    let run = || {
        let settings = RenderSettings {
            chaos_repetitions: 5_000,
            seed: Some(2024),
            ..Default::default()
        };
        let mut session = Session::new(settings).unwrap();
        let mut surface = PixelBuffer::new(session.grid(), WHITE);
        session
            .handle(UiEvent::Select(FractalKind::ChaosGame), &mut surface)
            .unwrap();
        session
            .handle(UiEvent::Press(Pixel::new(300, 550)), &mut surface)
            .unwrap();
        surface
    };
    let (a, b) = (run(), run());
    assert_eq!(a.pixels(), b.pixels());
    // 5000 points refreshed every 100, plus the screen open
    assert!(a.frames_presented() >= 50);
}

#[test]
fn test_quit_and_export() {
    let settings = RenderSettings {
        width: 160,
        height: 120,
        max_iterations: 20,
        ..Default::default()
    };
    let mut session = Session::new(settings).unwrap();
    let mut surface = PixelBuffer::new(session.grid(), WHITE);
    session
        .handle(UiEvent::Select(FractalKind::Mandelbrot), &mut surface)
        .unwrap();
    assert_eq!(
        session.handle(UiEvent::Quit, &mut surface).unwrap(),
        Control::Quit
    );

    let img = to_image(&surface).unwrap();
    assert_eq!(img.dimensions(), (160, 120));
    assert_eq!(surface.size().area(), 160 * 120);

    let path = std::env::temp_dir().join(format!("fractalview-flow-{}.png", std::process::id()));
    save_png(&surface, &path).unwrap();
    assert!(path.exists());
    std::fs::remove_file(&path).unwrap();
}
