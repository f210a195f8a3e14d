//! Move effect lifecycle against the recording mock surface.

use std::sync::Arc;

use marquee_anim::{AnimationError, Direction, EffectContext, MoveAnimation, MoveConfig, MoveState};
use marquee_core::{Dimensions, IdSequence};
use marquee_surface::{Declaration, MockSurface, Pose, StyleRule, Visibility};
use marquee_text::{FitOutcome, FontSize, HeuristicMeasurer, TextError};

const DESKTOP: Dimensions = Dimensions::new(1280.0, 720.0);
const PHONE: Dimensions = Dimensions::new(390.0, 844.0);

fn setup(viewport: Dimensions) -> (Arc<MockSurface>, EffectContext) {
    let ids = Arc::new(IdSequence::new());
    let surface = Arc::new(MockSurface::new(viewport, Arc::clone(&ids)));
    let ctx = EffectContext::new(surface.clone(), Arc::new(HeuristicMeasurer::new()), ids);
    (surface, ctx)
}

fn kahnwald(direction: Direction) -> MoveConfig {
    MoveConfig::new("Kahnwald")
        .base_font_size(FontSize::rem(7.0))
        .duration(3.0)
        .start_delay(0.0)
        .direction(direction)
}

#[test]
fn test_left_slides_from_negative_offset_to_rest() {
    let (surface, ctx) = setup(DESKTOP);
    let mut anim = MoveAnimation::init(&ctx, kahnwald(Direction::Left)).unwrap();

    anim.play();
    assert_eq!(anim.state(), MoveState::Playing);
    assert_eq!(surface.visibility(anim.element()), Some(Visibility::Visible));
    assert!(anim.current_offset() < 0.0);
    assert_eq!(anim.current_offset(), -200.0);
    assert_eq!(anim.current_pose().opacity, 0.0);

    anim.update(1.5);
    let midway = anim.current_offset();
    assert!(midway > -200.0 && midway < 0.0, "offset {}", midway);
    assert!(!anim.is_finished());

    anim.update(1.5);
    assert_eq!(anim.current_pose(), Pose::REST);
    assert_eq!(anim.current_offset(), 0.0);
    assert!(anim.is_finished());
}

#[test]
fn test_right_starts_from_positive_offset() {
    let (_surface, ctx) = setup(DESKTOP);
    let mut anim = MoveAnimation::init(&ctx, kahnwald(Direction::Right)).unwrap();
    anim.play();
    assert_eq!(anim.current_offset(), 200.0);
}

#[test]
fn test_init_leaves_element_hidden() {
    let (surface, ctx) = setup(DESKTOP);
    let anim = MoveAnimation::init(&ctx, kahnwald(Direction::Left)).unwrap();

    assert_eq!(anim.state(), MoveState::Initialized);
    assert_eq!(surface.count_element_creates(), 1);
    assert_eq!(surface.visibility(anim.element()), Some(Visibility::Hidden));
    assert_eq!(surface.resize_subscribers(), vec![anim.element()]);
    assert_eq!(anim.current_offset(), -200.0);
    assert!(!anim.is_finished());
    assert_eq!(anim.fit().outcome, FitOutcome::Unchanged);
}

#[test]
fn test_init_emits_slide_keyframes() {
    let (surface, ctx) = setup(DESKTOP);
    let anim = MoveAnimation::init(&ctx, kahnwald(Direction::Left)).unwrap();

    let rule = surface
        .style_rule(&format!("@keyframes {}-slide", anim.scope()))
        .unwrap();
    let StyleRule::Keyframes { from, to, .. } = rule else {
        panic!("expected a keyframes rule");
    };
    assert_eq!(from, Pose::shifted(-200.0, 0.0));
    assert_eq!(to, Pose::REST);

    let element_rule = surface
        .style_rule(&format!(".{}", anim.scope()))
        .unwrap();
    assert!(element_rule.to_css().contains("ease-in-out"));
    assert!(
        element_rule
            .declarations()
            .contains(&Declaration::FontSize(FontSize::rem(7.0)))
    );
}

#[test]
fn test_resize_refits_without_restarting() {
    let (surface, ctx) = setup(DESKTOP);
    let mut anim = MoveAnimation::init(&ctx, kahnwald(Direction::Left)).unwrap();
    anim.play();
    anim.update(1.0);
    let pose = anim.current_pose();

    surface.set_viewport(PHONE);
    anim.on_resize();

    // 351px available at 76.8px per rem.
    assert_eq!(anim.fit().size, FontSize::rem(4.0));
    assert_eq!(anim.font().size, FontSize::rem(4.0));
    assert_eq!(surface.count_restarts(anim.element()), 1);
    assert_eq!(anim.current_pose(), pose);

    let element_rule = surface
        .style_rule(&format!(".{}", anim.scope()))
        .unwrap();
    assert!(
        element_rule
            .declarations()
            .contains(&Declaration::FontSize(FontSize::rem(4.0)))
    );
}

#[test]
fn test_replay_restarts_from_offscreen() {
    let (surface, ctx) = setup(DESKTOP);
    let mut anim = MoveAnimation::init(&ctx, kahnwald(Direction::Left)).unwrap();

    anim.play();
    anim.update(3.0);
    assert!(anim.is_finished());

    anim.play();
    assert_eq!(anim.current_offset(), -200.0);
    assert!(!anim.is_finished());
    assert_eq!(surface.count_restarts(anim.element()), 2);
}

#[test]
fn test_start_delay_holds_offscreen_pose() {
    let (_surface, ctx) = setup(DESKTOP);
    let mut anim =
        MoveAnimation::init(&ctx, kahnwald(Direction::Left).start_delay(2.0)).unwrap();

    anim.play();
    anim.update(1.5);
    assert_eq!(anim.current_offset(), -200.0);
    anim.update(3.5);
    assert_eq!(anim.current_offset(), 0.0);
}

#[test]
fn test_negative_duration_creates_nothing() {
    let (surface, ctx) = setup(DESKTOP);
    let result = MoveAnimation::init(&ctx, kahnwald(Direction::Left).duration(-1.0));
    assert!(matches!(result, Err(AnimationError::InvalidConfig(_))));
    assert_eq!(surface.count_element_creates(), 0);
}

#[test]
fn test_unresolvable_font_fails_init() {
    let ids = Arc::new(IdSequence::new());
    let surface = Arc::new(MockSurface::new(DESKTOP, Arc::clone(&ids)).without_fonts());
    let ctx = EffectContext::new(surface.clone(), Arc::new(HeuristicMeasurer::new()), ids);

    let result = MoveAnimation::init(&ctx, kahnwald(Direction::Left));
    assert!(matches!(
        result,
        Err(AnimationError::Text(TextError::MeasurementUnavailable(_)))
    ));
    assert_eq!(surface.count_element_creates(), 0);
    assert!(surface.stylesheet_css().is_empty());
}

#[test]
fn test_zero_font_size_creates_nothing() {
    let (surface, ctx) = setup(DESKTOP);
    let result = MoveAnimation::init(
        &ctx,
        kahnwald(Direction::Left).base_font_size(FontSize::px(0.0)),
    );
    assert!(matches!(result, Err(AnimationError::InvalidConfig(_))));
    assert!(surface.calls().is_empty());
}

#[test]
fn test_plan_then_build() {
    let (surface, ctx) = setup(PHONE);
    let plan = MoveAnimation::plan(&ctx, kahnwald(Direction::Right)).unwrap();
    assert_eq!(plan.font().size, FontSize::rem(4.0));
    assert_eq!(plan.config().direction, Direction::Right);
    assert!(surface.calls().is_empty());

    let anim = plan.build();
    assert_eq!(surface.count_element_creates(), 1);
    assert_eq!(anim.fit().size, FontSize::rem(4.0));
}
