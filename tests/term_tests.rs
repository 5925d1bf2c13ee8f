//! Rendered frames through the terminal presentation path, without a tty.

use voxel_space::assets::{terrain_palette, GeneratedLoader, ResourceLoader};
use voxel_space::core::{render_frame, CameraState, RenderTuning, Surface};
use voxel_space::term::{encode_diff_into, encode_full_into, LayerView, Rgb, Viewport};
use voxel_space::types::{LAYER_HEIGHT, LAYER_WIDTH, PALETTE_SIZE, SKY_INDEX};

fn rendered_frame() -> (Surface, LayerView) {
    let store = GeneratedLoader::new(5, 64).load_store().unwrap();
    let mut surface = Surface::new(LAYER_WIDTH, LAYER_HEIGHT);
    render_frame(
        &CameraState::at(10.0, 10.0, 200.0, 0.3),
        &RenderTuning::default(),
        &store,
        &mut surface,
    );
    let mut view = LayerView::new();
    view.set_palette(store.current_palette(), 0..PALETTE_SIZE);
    (surface, view)
}

#[test]
fn layer_is_centered_and_packs_two_rows_per_cell() {
    let (surface, view) = rendered_frame();
    let viewport = Viewport::new(240, 80);
    let fb = view.render(&surface, viewport);

    assert_eq!(LayerView::cell_size(&surface), (200, 60));
    assert_eq!(LayerView::origin(&surface, viewport), (20, 10));

    for (cx, cy) in [(0u16, 0u16), (57, 13), (199, 59)] {
        let cell = fb.get(20 + cx, 10 + cy).unwrap();
        assert_eq!(cell.ch, '▀');
        let top = surface.get(cx, cy * 2).unwrap();
        let bottom = surface.get(cx, cy * 2 + 1).unwrap();
        assert_eq!(cell.style.fg, view.color(top));
        assert_eq!(cell.style.bg, view.color(bottom));
    }

    // Outside the layer only the backdrop shows.
    assert_eq!(fb.get(0, 0).unwrap().ch, ' ');
    assert_eq!(fb.get(239, 79).unwrap().ch, ' ');
}

#[test]
fn sky_cells_use_the_sky_color() {
    let (surface, view) = rendered_frame();
    let fb = view.render(&surface, Viewport::new(200, 60));
    let sky = Rgb::from_argb(terrain_palette()[SKY_INDEX as usize]);
    // Tilt keeps the top rows of every column free of terrain.
    for x in 0..200 {
        assert_eq!(fb.get(x, 0).unwrap().style.fg, sky);
    }
}

#[test]
fn small_viewport_crops_the_layer() {
    let (surface, view) = rendered_frame();
    let fb = view.render(&surface, Viewport::new(50, 20));
    assert_eq!((fb.width(), fb.height()), (50, 20));
    assert!(fb.cells().iter().all(|c| c.ch == '▀'));
}

#[test]
fn unchanged_frame_encodes_to_nothing() {
    let (surface, view) = rendered_frame();
    let fb = view.render(&surface, Viewport::new(200, 60));

    let mut full = Vec::new();
    encode_full_into(&fb, &mut full).unwrap();
    assert!(!full.is_empty());

    let mut diff = Vec::new();
    encode_diff_into(&fb, &fb, &mut diff).unwrap();
    assert!(diff.len() < full.len());
    assert!(!String::from_utf8_lossy(&diff).contains('▀'));
}
