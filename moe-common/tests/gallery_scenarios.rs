use moe_common::{
    Catalog, FocusScope, GalleryConfig, Manifest, OverlayCommand, OverlayControl, OverlayRegion,
    OverlayView, TileInput, ViewerController, ViewerState,
};

fn catalog_of(files: &[&str]) -> Catalog {
    Catalog::from_manifest(&Manifest {
        base_path: "/images".to_string(),
        files: files.iter().map(|f| f.to_string()).collect(),
        config: GalleryConfig::default(),
    })
}

fn abc() -> Catalog {
    catalog_of(&["A.jpg", "B.jpg", "C.jpg"])
}

#[test]
fn test_open_any_valid_index() {
    let catalog = catalog_of(&["1.jpg", "2.jpg", "3.jpg", "4.jpg", "5.jpg"]);
    for i in 0..catalog.len() {
        let mut viewer = ViewerController::new(catalog.len());
        viewer.open(i);
        assert_eq!(viewer.state(), ViewerState::open_at(i));
    }
}

#[test]
fn test_close_from_any_state() {
    let mut viewer = ViewerController::new(3);
    viewer.close();
    assert_eq!(viewer.state(), ViewerState::closed());

    viewer.open(2);
    viewer.previous();
    viewer.close();
    assert_eq!(viewer.state(), ViewerState::closed());
}

#[test]
fn test_walk_to_last_image_and_stop() {
    let m = 7;
    let mut viewer = ViewerController::new(m);
    viewer.open(0);
    for _ in 0..m - 1 {
        assert!(viewer.next());
    }
    assert_eq!(viewer.selected_index(), Some(m - 1));
    assert!(!viewer.next());
    assert_eq!(viewer.selected_index(), Some(m - 1));
}

#[test]
fn test_go_to_out_of_range_leaves_state() {
    let mut viewer = ViewerController::new(3);
    viewer.open(1);
    let before = viewer.state();
    viewer.go_to(3);
    viewer.go_to(usize::MAX);
    assert_eq!(viewer.state(), before);
}

#[test]
fn test_keyboard_and_pointer_activation_are_equivalent() {
    for j in 0..3 {
        let mut by_pointer = ViewerController::new(3);
        by_pointer.activate(j, TileInput::Pointer);

        for key in ["Enter", " "] {
            let mut by_key = ViewerController::new(3);
            by_key.activate(j, TileInput::from_key(key));
            assert_eq!(by_key.state(), by_pointer.state());
            assert_eq!(by_key.state(), ViewerState::open_at(j));
        }
    }
}

#[test]
fn test_three_image_walkthrough() {
    let catalog = abc();
    let mut viewer = ViewerController::new(catalog.len());

    viewer.open(1);
    let view = OverlayView::project(&catalog, viewer.state()).unwrap();
    assert_eq!(view.image.filename, "B.jpg");
    assert!(view.has_previous);
    assert!(view.has_next);
    assert_eq!(view.position_label(), "Image 2 of 3");

    viewer.previous();
    let view = OverlayView::project(&catalog, viewer.state()).unwrap();
    assert_eq!(view.image.filename, "A.jpg");
    assert!(!view.has_previous);
    assert!(view.has_next);

    viewer.next();
    viewer.next();
    let view = OverlayView::project(&catalog, viewer.state()).unwrap();
    assert_eq!(view.image.filename, "C.jpg");
    assert!(view.has_previous);
    assert!(!view.has_next);
}

#[test]
fn test_empty_catalog_cannot_open() {
    let catalog = catalog_of(&[]);
    let mut viewer = ViewerController::new(catalog.len());
    assert!(catalog.is_empty());
    assert!(!viewer.activate(0, TileInput::Pointer));
    assert!(OverlayView::project(&catalog, viewer.state()).is_none());
}

#[test]
fn test_close_restores_origin_across_cycles() {
    let mut viewer = ViewerController::new(6);
    for (tile, wander) in [(4, 1), (0, 3), (2, 2)] {
        viewer.open(tile);
        for _ in 0..wander {
            viewer.next();
        }
        viewer.previous();
        assert_eq!(viewer.close(), Some(tile));
    }
}

#[test]
fn test_keys_drive_viewer_and_trap_focus() {
    let catalog = abc();
    let mut viewer = ViewerController::new(catalog.len());
    viewer.open(0);

    let mut focused = OverlayControl::Close;
    for (key, shift) in [("ArrowRight", false), ("Tab", true), ("Tab", false)] {
        let view = OverlayView::project(&catalog, viewer.state()).unwrap();
        let scope = FocusScope::new(view.focus_order());
        match OverlayCommand::from_key(key, shift) {
            Some(OverlayCommand::Next) => {
                viewer.next();
                focused = OverlayControl::Close;
            }
            Some(OverlayCommand::FocusBackward) => {
                if let Some(target) = scope.on_tab(Some(&focused), true) {
                    focused = target;
                }
            }
            Some(OverlayCommand::FocusForward) => {
                if let Some(target) = scope.on_tab(Some(&focused), false) {
                    focused = target;
                }
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    // At B: [Close, Previous, Next]; Shift+Tab from Close wraps to Next,
    // then Tab from Next wraps back to Close.
    assert_eq!(viewer.selected_index(), Some(1));
    assert_eq!(focused, OverlayControl::Close);
}

#[test]
fn test_focus_order_matches_boundaries() {
    let catalog = abc();
    let first = OverlayView::project(&catalog, ViewerState::open_at(0)).unwrap();
    assert_eq!(first.focus_order(), vec![OverlayControl::Close, OverlayControl::Next]);

    let last = OverlayView::project(&catalog, ViewerState::open_at(2)).unwrap();
    assert_eq!(last.focus_order(), vec![OverlayControl::Close, OverlayControl::Previous]);

    let single = catalog_of(&["only.jpg"]);
    let only = OverlayView::project(&single, ViewerState::open_at(0)).unwrap();
    assert_eq!(only.focus_order(), vec![OverlayControl::Close]);
    assert_eq!(only.position_label(), "Image 1 of 1");
}

#[test]
fn test_clicks_on_caption_and_hint_keep_viewer_open() {
    let mut viewer = ViewerController::new(3);
    viewer.activate(1, TileInput::Pointer);

    for region in [
        OverlayRegion::Image,
        OverlayRegion::Caption,
        OverlayRegion::KeyboardHint,
    ] {
        if region.dismisses() {
            viewer.close();
        }
        assert_eq!(viewer.state(), ViewerState::open_at(1), "{:?}", region);
    }

    if OverlayRegion::Backdrop.dismisses() {
        assert_eq!(viewer.close(), Some(1));
    }
    assert_eq!(viewer.state(), ViewerState::closed());
}
