// Host-side tests for follow options and reference sizing.

use folio_core::presets::LAMP_REFERENCE_SIZE;
use folio_core::{ContainerRect, FollowOptions, MotionError, Sizing};

const RATIO_PART: &str =
    r#"{"name": "moon", "moveFactor": 2, "maxDisplacementRatio": 0.5, "smoothing": 0.5}"#;

#[test]
fn ratio_parts_without_a_size_are_rejected() {
    let opts = FollowOptions::from_json(&format!(r#"{{"parts": [{RATIO_PART}]}}"#)).unwrap();
    assert_eq!(opts.sizing(), Sizing::Unsized);
    assert!(matches!(
        opts.validate(),
        Err(MotionError::MissingReferenceSize(name)) if name == "moon"
    ));
}

#[test]
fn ratio_parts_accept_explicit_or_container_size() {
    let pinned =
        FollowOptions::from_json(&format!(r#"{{"parts": [{RATIO_PART}], "referenceSize": 80}}"#))
            .unwrap();
    assert_eq!(pinned.sizing(), Sizing::Fixed(80.0));
    let specs = pinned.validate().unwrap();
    assert_eq!(specs[0].resolve(80.0).unwrap().max_displacement(), 40.0);

    let fitted =
        FollowOptions::from_json(&format!(r#"{{"parts": [{RATIO_PART}], "fitContainer": true}}"#))
            .unwrap();
    assert_eq!(fitted.sizing(), Sizing::Container { initial: 0.0 });
    assert!(fitted.validate().is_ok());
}

#[test]
fn pixel_parts_need_no_size() {
    let opts = FollowOptions::for_assembly("hooded-reaper");
    assert_eq!(opts.sizing(), Sizing::Unsized);
    assert_eq!(opts.validate().unwrap().len(), 4);
}

#[test]
fn sized_lamp_tracks_its_container_from_the_tuned_size() {
    let opts = FollowOptions::for_assembly("sized-lamp");
    assert_eq!(
        opts.sizing(),
        Sizing::Container {
            initial: LAMP_REFERENCE_SIZE
        }
    );
    assert_eq!(opts.reference_size(), LAMP_REFERENCE_SIZE);

    let pinned = FollowOptions {
        reference_size: Some(120.0),
        ..FollowOptions::for_assembly("sized-lamp")
    };
    assert_eq!(pinned.sizing(), Sizing::Fixed(120.0));
}

#[test]
fn container_sizing_follows_measured_width() {
    let sizing = Sizing::Container { initial: 200.0 };
    assert_eq!(
        sizing.measure(&ContainerRect::new(0.0, 0.0, 320.0, 180.0)),
        Some(320.0)
    );
    // not laid out yet: keep the current size
    assert_eq!(sizing.measure(&ContainerRect::default()), None);

    let rect = ContainerRect::new(0.0, 0.0, 320.0, 180.0);
    assert_eq!(Sizing::Fixed(120.0).measure(&rect), None);
    assert_eq!(Sizing::Unsized.measure(&rect), None);
}

#[test]
fn invalid_explicit_size_is_rejected() {
    let opts = FollowOptions {
        reference_size: Some(-4.0),
        ..FollowOptions::for_assembly("lamp")
    };
    assert!(matches!(
        opts.validate(),
        Err(MotionError::InvalidReferenceSize(_))
    ));
}
