// Host-side tests for multi-part assemblies and the built-in presets.

use folio_core::presets::{self, ASSEMBLY_NAMES, LAMP_REFERENCE_SIZE};
use folio_core::{step, Displacement, MotionError, MultiPartComposer, PartSpec, PartState};
use glam::Vec2;

fn composer(specs: Vec<PartSpec>, reference_size: f32) -> MultiPartComposer<String> {
    MultiPartComposer::new(
        specs.into_iter().map(|s| {
            let name = s.name.clone();
            (s, name)
        }),
        reference_size,
    )
    .expect("valid assembly")
}

fn x_of(c: &MultiPartComposer<String>, name: &str) -> f32 {
    c.state(name).unwrap().x
}

fn max_of<T>(c: &MultiPartComposer<T>, name: &str) -> f32 {
    c.part(name).unwrap().config().max_displacement()
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn skull_settles_before_back_cape() {
    let mut c = composer(
        vec![
            PartSpec::fixed("skull", 9.0, 70.0, 0.3),
            PartSpec::fixed("cape-back", 15.0, 55.0, 0.15),
        ],
        0.0,
    );
    let offset = Vec2::new(300.0, 0.0);
    let skull_target = 300.0 / 9.0;
    let cape_target = 300.0 / 15.0;

    let mut skull_at = None;
    let mut cape_at = None;
    for tick in 1..=60 {
        c.tick(offset, |_, _| {});
        if skull_at.is_none() && x_of(&c, "skull") >= 0.95 * skull_target {
            skull_at = Some(tick);
        }
        if cape_at.is_none() && x_of(&c, "cape-back") >= 0.95 * cape_target {
            cape_at = Some(tick);
        }
    }
    let skull_at = skull_at.expect("skull converges");
    let cape_at = cape_at.expect("cape converges");
    assert!(skull_at <= 10, "skull took {skull_at} ticks");
    assert!(cape_at > 10 && cape_at <= 20, "cape took {cape_at} ticks");

    assert!((x_of(&c, "skull") - skull_target).abs() < 0.01);
    assert!((x_of(&c, "cape-back") - cape_target).abs() < 0.01);
    assert_eq!(c.state("skull").unwrap().y, 0.0);
}

#[test]
fn every_part_sees_the_same_offset() {
    let specs = presets::hooded_reaper();
    let mut c = composer(specs.clone(), 0.0);
    let mut expected: Vec<PartState> = vec![PartState::ORIGIN; specs.len()];
    let configs: Vec<_> = specs.iter().map(|s| s.resolve(0.0).unwrap()).collect();

    for offset in [
        Vec2::new(120.0, -40.0),
        Vec2::new(-800.0, 300.0),
        Vec2::ZERO,
    ] {
        let mut applied = Vec::new();
        c.tick(offset, |name, transform| {
            applied.push((name.clone(), transform.to_css()))
        });
        for (i, spec) in specs.iter().enumerate() {
            expected[i] = step(offset, &configs[i], expected[i]);
            assert_eq!(c.state(&spec.name).unwrap(), expected[i]);
            assert_eq!(applied[i].0, spec.name);
            assert_eq!(applied[i].1, expected[i].transform().to_css());
        }
    }
}

#[test]
fn parts_stay_clamped_for_extreme_offsets() {
    let mut c = composer(presets::hooded_reaper(), 0.0);
    for i in 0..100 {
        let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
        c.tick(Vec2::new(sign * 1.0e7, -sign * 1.0e7), |_, _| {});
        for part in c.parts() {
            let max = part.config().max_displacement();
            let p = part.state().position();
            assert!(p.x.abs() <= max && p.y.abs() <= max, "{}", part.name());
        }
    }
}

#[test]
fn sized_lamp_follows_reference_size() {
    let mut c = composer(presets::sized_lamp(), LAMP_REFERENCE_SIZE);
    assert!(approx(max_of(&c, "body"), 60.0));
    assert!(approx(max_of(&c, "flame"), 80.0));

    for _ in 0..200 {
        c.tick(Vec2::splat(1.0e5), |_, _| {});
    }
    assert!((x_of(&c, "body") - 60.0).abs() < 1e-3);

    c.set_reference_size(100.0).unwrap();
    assert_eq!(c.reference_size(), 100.0);
    assert!(approx(max_of(&c, "body"), 30.0));
    assert!(approx(max_of(&c, "flame"), 40.0));
    // shrinking pulls positions inside the new clamp right away
    assert!(x_of(&c, "body") <= max_of(&c, "body"));
    assert!(x_of(&c, "flame") <= max_of(&c, "flame"));
    assert!(approx(x_of(&c, "body"), 30.0));

    c.set_reference_size(400.0).unwrap();
    assert!(approx(max_of(&c, "body"), 120.0));
    assert!(matches!(
        c.set_reference_size(f32::NAN),
        Err(MotionError::InvalidReferenceSize(_))
    ));
    assert_eq!(c.reference_size(), 400.0);
}

#[test]
fn fixed_parts_ignore_reference_size() {
    let mut c = composer(presets::lamp(), 0.0);
    c.set_reference_size(50.0).unwrap();
    assert_eq!(max_of(&c, "body"), 60.0);
}

#[test]
fn reset_returns_parts_to_rest() {
    let mut c = composer(presets::reaper(), 0.0);
    c.tick(Vec2::new(500.0, 500.0), |_, _| {});
    assert_ne!(c.state("skull").unwrap(), PartState::ORIGIN);
    c.reset();
    assert!(c.parts().all(|p| p.state() == PartState::ORIGIN));
}

#[test]
fn rejects_bad_assemblies() {
    let dup = MultiPartComposer::new(
        vec![
            (PartSpec::fixed("skull", 9.0, 70.0, 0.3), ()),
            (PartSpec::fixed("skull", 7.0, 78.0, 0.38), ()),
        ],
        0.0,
    );
    assert!(matches!(dup, Err(MotionError::DuplicatePart(name)) if name == "skull"));

    let empty = MultiPartComposer::<()>::new(Vec::new(), 0.0);
    assert!(matches!(empty, Err(MotionError::EmptyAssembly)));

    let bad = MultiPartComposer::new(vec![(PartSpec::fixed("eyes", 0.0, 10.0, 0.5), ())], 0.0);
    assert!(matches!(bad, Err(MotionError::InvalidMoveFactor(_))));

    let negative = MultiPartComposer::new(vec![(presets::sized_lamp()[0].clone(), ())], -1.0);
    assert!(matches!(
        negative,
        Err(MotionError::InvalidReferenceSize(_))
    ));
}

#[test]
fn unknown_part_lookup_fails() {
    let c = composer(presets::lamp(), 0.0);
    assert!(c.part("wick").is_none());
    assert!(matches!(c.state("wick"), Err(MotionError::UnknownPart(n)) if n == "wick"));
}

#[test]
fn presets_are_valid_and_named() {
    for name in ASSEMBLY_NAMES {
        let specs = presets::assembly(name).unwrap();
        let size = if *name == "sized-lamp" {
            LAMP_REFERENCE_SIZE
        } else {
            0.0
        };
        let c = composer(specs, size);
        assert!(!c.is_empty(), "{name}");
    }
    assert!(matches!(
        presets::assembly("ghost"),
        Err(MotionError::UnknownAssembly(n)) if n == "ghost"
    ));
}

#[test]
fn sized_lamp_matches_fixed_lamp_at_reference_size() {
    let fixed = presets::lamp();
    let sized = presets::sized_lamp();
    for (f, s) in fixed.iter().zip(&sized) {
        assert_eq!(f.name, s.name);
        let (f, s) = (f.resolve(0.0).unwrap(), s.resolve(LAMP_REFERENCE_SIZE).unwrap());
        assert_eq!(f.move_factor(), s.move_factor());
        assert_eq!(f.smoothing(), s.smoothing());
        assert!(approx(f.max_displacement(), s.max_displacement()));
    }
}

#[test]
fn part_specs_parse_from_json() {
    let parts: Vec<PartSpec> = serde_json::from_str(
        r#"[
            {"name": "skull", "moveFactor": 9, "maxDisplacement": 70, "smoothing": 0.3},
            {"name": "flame", "moveFactor": 7, "maxDisplacementRatio": 0.4, "smoothing": 0.4}
        ]"#,
    )
    .unwrap();
    assert_eq!(parts[0], PartSpec::fixed("skull", 9.0, 70.0, 0.3));
    assert_eq!(parts[1].displacement, Displacement::Relative(0.4));

    let both = serde_json::from_str::<PartSpec>(
        r#"{"name": "x", "moveFactor": 1, "maxDisplacement": 1, "maxDisplacementRatio": 1, "smoothing": 1}"#,
    );
    assert!(both.is_err());
    let neither =
        serde_json::from_str::<PartSpec>(r#"{"name": "x", "moveFactor": 1, "smoothing": 1}"#);
    assert!(neither.is_err());
    let unknown = serde_json::from_str::<PartSpec>(
        r#"{"name": "x", "moveFactor": 1, "maxDisplacement": 1, "smoothing": 1, "lag": 2}"#,
    );
    assert!(unknown.is_err());
}

#[test]
fn hooded_reaper_layers_step_evenly_front_to_back() {
    let layers = presets::hooded_reaper();
    let names: Vec<_> = layers.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["cape-back", "hoodie-front", "skull", "eyes"]);
    for pair in layers.windows(2) {
        let (back, front) = (pair[0].resolve(0.0).unwrap(), pair[1].resolve(0.0).unwrap());
        assert!((back.move_factor() - front.move_factor() - 3.0).abs() < 1e-6);
        assert!((front.max_displacement() - back.max_displacement() - 7.5).abs() < 1e-4);
        assert!((front.smoothing() - back.smoothing() - 0.075).abs() < 1e-6);
    }
}
