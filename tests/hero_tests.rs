// Host-side tests for the scroll-driven hero fade.

use folio_core::HeroFade;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn top_of_page_is_fully_visible() {
    let fade = HeroFade::from_scroll(0.0, 1000.0);
    assert_eq!(fade.progress, 0.0);
    assert_eq!(fade.content_opacity, 1.0);
    assert_eq!(fade.indicator_opacity, 1.0);
    assert_eq!(fade.overlay_opacity, 0.0);
    assert!(fade.content_visible());
    assert!(fade.indicator_interactive());
}

#[test]
fn fade_progresses_over_most_of_the_viewport() {
    // full progress after 70% of the viewport height
    let half = HeroFade::from_scroll(350.0, 1000.0);
    assert!(close(half.progress, 0.5));
    assert!(close(half.content_opacity, 0.3));
    assert_eq!(half.indicator_opacity, 0.0);
    assert!(close(half.overlay_opacity, 0.45));

    let done = HeroFade::from_scroll(700.0, 1000.0);
    assert_eq!(done.progress, 1.0);
    assert!(close(done.overlay_opacity, 0.9));
    assert!(!done.content_visible());

    let past = HeroFade::from_scroll(5000.0, 1000.0);
    assert_eq!(past, done);
}

#[test]
fn indicator_fades_first() {
    let early = HeroFade::from_scroll(100.0, 1000.0);
    assert!(early.indicator_opacity > 0.0 && early.indicator_opacity < 1.0);
    assert!(early.indicator_interactive());
    assert!(early.content_opacity > early.indicator_opacity);

    let gone = HeroFade::from_scroll(175.0, 1000.0);
    assert_eq!(gone.indicator_opacity, 0.0);
    assert!(!gone.indicator_interactive());
    assert!(gone.content_visible());
}

#[test]
fn degenerate_inputs_stay_at_rest() {
    let rest = HeroFade::from_scroll(0.0, 1000.0);
    assert_eq!(HeroFade::from_scroll(-300.0, 1000.0), rest);
    assert_eq!(HeroFade::from_scroll(400.0, 0.0), rest);
    assert_eq!(HeroFade::from_scroll(f32::NAN, 1000.0), rest);
}

#[test]
fn small_content_changes_are_ignored() {
    assert!(!HeroFade::content_changed(0.5, 0.505));
    assert!(HeroFade::content_changed(0.5, 0.52));
    assert!(HeroFade::content_changed(0.0, -0.4));
}
