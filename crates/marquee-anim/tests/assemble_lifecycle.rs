//! Assemble effect lifecycle against the recording mock surface.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use marquee_anim::{
    AnimationError, AssembleAnimation, AssembleConfig, AssembleState, EffectContext,
};
use marquee_core::{Dimensions, ElementId, IdSequence};
use marquee_surface::{
    Declaration, ElementSpec, MockSurface, Pose, StyleRule, Surface, SurfaceCall, Visibility,
};
use marquee_text::{
    FitOutcome, FontDescriptor, FontSize, HeuristicMeasurer, TextError, TextMeasurement,
    TextMeasurer, TextResult,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

const DESKTOP: Dimensions = Dimensions::new(1280.0, 720.0);
const PHONE: Dimensions = Dimensions::new(390.0, 844.0);

fn setup(viewport: Dimensions) -> (Arc<MockSurface>, EffectContext) {
    let ids = Arc::new(IdSequence::new());
    let surface = Arc::new(MockSurface::new(viewport, Arc::clone(&ids)));
    let ctx = EffectContext::new(surface.clone(), Arc::new(HeuristicMeasurer::new()), ids);
    (surface, ctx)
}

fn jonas() -> AssembleConfig {
    AssembleConfig::new("Jonas")
        .base_font_size(FontSize::rem(8.0))
        .part_count(49)
        .duration(10.0)
        .start_delay(1.0)
}

fn init(ctx: &EffectContext, config: AssembleConfig) -> AssembleAnimation {
    AssembleAnimation::init(ctx, config, &mut StdRng::seed_from_u64(42)).unwrap()
}

/// Once armed, fails to measure any font size it has already measured.
#[derive(Default)]
struct RemeasureFails {
    inner: HeuristicMeasurer,
    armed: AtomicBool,
    seen: Mutex<Vec<FontSize>>,
}

impl RemeasureFails {
    fn arm(&self, armed: bool) {
        self.seen.lock().unwrap().clear();
        self.armed.store(armed, Ordering::SeqCst);
    }
}

impl TextMeasurer for RemeasureFails {
    fn measure(&self, text: &str, font: &FontDescriptor) -> TextResult<TextMeasurement> {
        if self.armed.load(Ordering::SeqCst) {
            let mut seen = self.seen.lock().unwrap();
            if seen.contains(&font.size) {
                return Err(TextError::MeasurementUnavailable(format!(
                    "{} measured twice",
                    font.size
                )));
            }
            seen.push(font.size);
        }
        self.inner.measure(text, font)
    }
}

fn visibilities(surface: &MockSurface, parts: &[ElementId]) -> Vec<Visibility> {
    parts
        .iter()
        .map(|&part| surface.visibility(part).unwrap())
        .collect()
}

#[test]
fn test_play_then_settle() {
    let (surface, ctx) = setup(DESKTOP);
    let mut anim = init(&ctx, jonas());

    anim.play();
    assert_eq!(anim.state(), AssembleState::Playing);
    assert_eq!(anim.parts().len(), 49);
    assert!(
        visibilities(&surface, anim.parts())
            .iter()
            .all(|v| *v == Visibility::Visible)
    );
    assert_eq!(surface.visibility(anim.ghost()), Some(Visibility::Hidden));

    anim.update(11.0);
    assert_eq!(anim.state(), AssembleState::Settled);
    assert!(
        visibilities(&surface, anim.parts())
            .iter()
            .all(|v| *v == Visibility::Hidden)
    );
    assert_eq!(surface.visibility(anim.ghost()), Some(Visibility::Visible));
}

#[test]
fn test_settles_only_after_delay_and_duration() {
    let (surface, ctx) = setup(DESKTOP);
    let mut anim = init(&ctx, jonas());
    anim.play();

    for _ in 0..21 {
        anim.update(0.5);
    }
    assert_eq!(anim.state(), AssembleState::Playing);
    assert_eq!(surface.visibility(anim.ghost()), Some(Visibility::Hidden));

    anim.update(0.5);
    assert_eq!(anim.state(), AssembleState::Settled);
}

#[test]
fn test_init_builds_hidden_parts_and_transparent_ghost() {
    let (surface, ctx) = setup(DESKTOP);
    let anim = init(&ctx, jonas());

    assert_eq!(anim.state(), AssembleState::Initialized);
    // Container, ghost and one element per part.
    assert_eq!(surface.count_element_creates(), 51);
    assert_eq!(surface.children(anim.container()).len(), 50);
    assert_eq!(
        surface.visibility(anim.ghost()),
        Some(Visibility::Transparent)
    );
    assert!(
        visibilities(&surface, anim.parts())
            .iter()
            .all(|v| v.is_hidden())
    );
    assert_eq!(surface.resize_subscribers(), vec![anim.container()]);

    for part in anim.parts() {
        let el = surface.element(*part).unwrap();
        assert_eq!(el.text.as_deref(), Some("Jonas"));
    }
}

#[test]
fn test_init_emits_font_clip_and_keyframe_rules() {
    let (surface, ctx) = setup(DESKTOP);
    let anim = init(&ctx, jonas());
    let scope = anim.scope().to_string();

    let container_rule = surface.style_rule(&format!(".{}", scope)).unwrap();
    assert!(
        container_rule
            .declarations()
            .contains(&Declaration::FontSize(FontSize::rem(8.0)))
    );

    for i in 0..49 {
        let keyframes = surface
            .style_rule(&format!("@keyframes {}-fly-{}", scope, i))
            .unwrap();
        let StyleRule::Keyframes { from, to, .. } = keyframes else {
            panic!("expected keyframes for part {}", i);
        };
        assert_eq!(from, anim.keyframes()[i].start_pose());
        assert_eq!(to, Pose::REST);

        let part_rule = surface
            .style_rule(&format!(".{}-part-{}", scope, i))
            .unwrap();
        assert!(matches!(
            part_rule.declarations()[0],
            Declaration::Clip { .. }
        ));
        assert!(part_rule.to_css().contains("ease-out"));
    }

    let css = surface.stylesheet_css();
    assert!(css.contains("clip-path: inset("));
    assert!(css.contains(&format!("@keyframes {}-fly-48", scope)));
}

#[test]
fn test_regions_tile_the_fitted_box() {
    let (_surface, ctx) = setup(DESKTOP);
    let anim = init(&ctx, jonas());

    // 8rem = 128px: 0.6 * 128 * 5 chars wide, 1.15 * 128 tall.
    let bounds = anim.bounds();
    assert!((bounds.width - 384.0).abs() < 1e-3);
    assert!((bounds.height - 147.2).abs() < 1e-3);

    let regions = anim.regions();
    assert_eq!(regions.len(), 49);
    let last = regions[48];
    assert!((last.position.x + last.size.width - bounds.width).abs() < 1e-3);
    assert!((last.position.y + last.size.height - bounds.height).abs() < 1e-3);
}

#[test]
fn test_invalid_part_count_creates_nothing() {
    let (surface, ctx) = setup(DESKTOP);
    let result = AssembleAnimation::init(
        &ctx,
        jonas().part_count(50),
        &mut StdRng::seed_from_u64(1),
    );

    assert!(matches!(result, Err(AnimationError::InvalidPartCount(50))));
    assert_eq!(surface.count_element_creates(), 0);
    assert!(surface.calls().is_empty());
}

#[test]
fn test_zero_part_count_is_rejected() {
    let (surface, ctx) = setup(DESKTOP);
    let result =
        AssembleAnimation::init(&ctx, jonas().part_count(0), &mut StdRng::seed_from_u64(1));
    assert!(matches!(result, Err(AnimationError::InvalidPartCount(0))));
    assert_eq!(surface.count_element_creates(), 0);
}

#[test]
fn test_unresolvable_font_fails_init() {
    let ids = Arc::new(IdSequence::new());
    let surface = Arc::new(MockSurface::new(DESKTOP, Arc::clone(&ids)).without_fonts());
    let ctx = EffectContext::new(surface.clone(), Arc::new(HeuristicMeasurer::new()), ids);

    let result = AssembleAnimation::init(&ctx, jonas(), &mut StdRng::seed_from_u64(1));
    assert!(matches!(
        result,
        Err(AnimationError::Text(TextError::MeasurementUnavailable(_)))
    ));
    assert_eq!(surface.count_element_creates(), 0);
    assert!(surface.elements().is_empty());
    assert!(surface.stylesheet_css().is_empty());
}

#[test]
fn test_zero_font_size_is_rejected() {
    let (surface, ctx) = setup(DESKTOP);
    let result = AssembleAnimation::init(
        &ctx,
        jonas().base_font_size(FontSize::px(0.0)),
        &mut StdRng::seed_from_u64(1),
    );
    assert!(matches!(result, Err(AnimationError::InvalidConfig(_))));
    assert!(surface.calls().is_empty());
}

#[test]
fn test_plan_touches_nothing_until_built() {
    let (surface, ctx) = setup(PHONE);
    let plan = AssembleAnimation::plan(&ctx, jonas(), &mut StdRng::seed_from_u64(42)).unwrap();
    assert_eq!(plan.font().size, FontSize::rem(7.0));
    assert_eq!(plan.config().part_count, 49);
    assert!(surface.calls().is_empty());

    let anim = plan.build();
    assert_eq!(surface.count_element_creates(), 51);
    assert_eq!(anim.fit().size, FontSize::rem(7.0));
}

#[test]
fn test_resize_shrinks_font_and_keeps_keyframes() {
    let (surface, ctx) = setup(DESKTOP);
    let mut anim = init(&ctx, jonas());
    let keyframes = anim.keyframes().to_vec();
    assert_eq!(anim.fit().outcome, FitOutcome::Unchanged);

    surface.set_viewport(PHONE);
    anim.on_resize();

    // 351px available: 7rem is 336px wide, 8rem would be 384px.
    assert_eq!(anim.fit().size, FontSize::rem(7.0));
    assert_eq!(anim.fit().outcome, FitOutcome::Shrunk);
    assert_eq!(anim.keyframes(), keyframes.as_slice());

    let container_rule = surface
        .style_rule(&format!(".{}", anim.scope()))
        .unwrap();
    assert!(
        container_rule
            .declarations()
            .contains(&Declaration::FontSize(FontSize::rem(7.0)))
    );
    assert!((anim.regions()[1].position.x - 48.0).abs() < 1e-3);
}

#[test]
fn test_resize_without_size_change_emits_nothing() {
    let (surface, ctx) = setup(DESKTOP);
    let mut anim = init(&ctx, jonas());

    surface.clear_calls();
    surface.set_viewport(Dimensions::new(1920.0, 1080.0));
    anim.on_resize();
    assert!(surface.calls().is_empty());
}

#[test]
fn test_failed_relayout_keeps_previous_fit() {
    let ids = Arc::new(IdSequence::new());
    let surface = Arc::new(MockSurface::new(DESKTOP, Arc::clone(&ids)));
    let measurer = Arc::new(RemeasureFails::default());
    let ctx = EffectContext::new(surface.clone(), measurer.clone(), ids);
    let mut anim = init(&ctx, jonas());

    // The fit search measures 7rem once; measuring it again for the new
    // cells fails.
    surface.set_viewport(PHONE);
    surface.clear_calls();
    measurer.arm(true);
    anim.on_resize();

    assert_eq!(anim.fit().size, FontSize::rem(8.0));
    assert!((anim.bounds().width - 384.0).abs() < 1e-3);
    assert!(surface.calls().is_empty());

    // Nothing was committed, so the same viewport is tried again.
    measurer.arm(false);
    anim.on_resize();
    assert_eq!(anim.fit().size, FontSize::rem(7.0));
    assert!((anim.bounds().width - 336.0).abs() < 1e-3);
    let container_rule = surface
        .style_rule(&format!(".{}", anim.scope()))
        .unwrap();
    assert!(
        container_rule
            .declarations()
            .contains(&Declaration::FontSize(FontSize::rem(7.0)))
    );
}

#[test]
fn test_resize_back_restores_base_size() {
    let (surface, ctx) = setup(DESKTOP);
    let mut anim = init(&ctx, jonas());

    surface.set_viewport(PHONE);
    anim.on_resize();
    surface.set_viewport(DESKTOP);
    anim.on_resize();

    assert_eq!(anim.fit().size, FontSize::rem(8.0));
    assert_eq!(anim.fit().outcome, FitOutcome::Unchanged);
}

#[test]
fn test_replay_restarts_parts() {
    let (surface, ctx) = setup(DESKTOP);
    let mut anim = init(&ctx, jonas());

    anim.play();
    anim.update(5.0);
    let midway = anim.part_pose(0).unwrap();
    assert_ne!(midway, anim.keyframes()[0].start_pose());

    anim.play();
    assert_eq!(anim.state(), AssembleState::Playing);
    assert_eq!(surface.count_restarts(anim.parts()[0]), 2);
    // Back inside the start delay, so the part sits at its start pose.
    assert_eq!(anim.part_pose(0), Some(anim.keyframes()[0].start_pose()));
}

#[test]
fn test_superseded_settle_is_ignored() {
    let (surface, ctx) = setup(DESKTOP);
    let mut anim = init(&ctx, jonas());

    anim.play();
    anim.update(5.0);
    anim.play();

    // The first play's settle comes due here.
    anim.update(6.5);
    assert_eq!(anim.state(), AssembleState::Playing);
    assert_eq!(surface.visibility(anim.ghost()), Some(Visibility::Hidden));

    anim.update(4.5);
    assert_eq!(anim.state(), AssembleState::Settled);
    assert_eq!(surface.visibility(anim.ghost()), Some(Visibility::Visible));
}

#[test]
fn test_play_after_settle_plays_again() {
    let (surface, ctx) = setup(DESKTOP);
    let mut anim = init(&ctx, jonas());

    anim.play();
    anim.update(11.0);
    assert_eq!(anim.state(), AssembleState::Settled);

    anim.play();
    assert_eq!(anim.state(), AssembleState::Playing);
    assert_eq!(surface.visibility(anim.parts()[10]), Some(Visibility::Visible));
    assert_eq!(surface.visibility(anim.ghost()), Some(Visibility::Hidden));
}

#[test]
fn test_parts_reach_rest_pose() {
    let (_surface, ctx) = setup(DESKTOP);
    let mut anim = init(&ctx, jonas());

    assert_eq!(anim.part_pose(0), None);
    anim.play();
    anim.update(11.0);
    for i in 0..49 {
        assert_eq!(anim.part_pose(i), Some(Pose::REST));
    }
    assert_eq!(anim.part_pose(49), None);
}

#[test]
fn test_same_seed_same_scatter() {
    let (_a_surface, a_ctx) = setup(DESKTOP);
    let (_b_surface, b_ctx) = setup(DESKTOP);
    let a = init(&a_ctx, jonas());
    let b = init(&b_ctx, jonas());
    assert_eq!(a.keyframes(), b.keyframes());
}

#[test]
fn test_mounts_inside_host_container() {
    let (surface, ctx) = setup(DESKTOP);
    let host = surface.create_element(None, ElementSpec::container("host"));
    let ctx = ctx.in_container(host);

    let anim = init(&ctx, jonas());
    assert_eq!(surface.element(anim.container()).unwrap().parent, Some(host));
    assert!(surface.calls().contains(&SurfaceCall::CreateElement {
        id: anim.container(),
        parent: Some(host),
        class: anim.scope().to_string(),
    }));
}
