// Host-side tests for the per-object interpolation driver.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tree_core::*;

fn approx(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-5
}

fn sample_object() -> RenderableObject {
    RenderableObject::new(
        Vec3::ZERO,
        Vec3::new(10.0, 0.0, 0.0),
        Vec3::new(0.1, 0.2, 0.3),
        0.4,
    )
}

#[test]
fn neutral_weight_blends_linearly() {
    let p = blend_position(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), WeightClass::Neutral, 0.5);
    assert!(approx(p, Vec3::new(5.0, 0.0, 0.0)), "{p:?}");

    let mut obj = sample_object();
    obj.update(WeightClass::Neutral, 0.5, 1.0 / 60.0);
    assert!(approx(obj.current_position(), Vec3::new(5.0, 0.0, 0.0)));
}

#[test]
fn endpoints_are_hit_exactly() {
    for w in [WeightClass::Heavy, WeightClass::Neutral, WeightClass::Light] {
        let mut obj = sample_object();
        obj.update(w, 0.0, 0.0);
        assert!(approx(obj.current_position(), obj.chaos_position()));
        obj.update(w, 1.0, 0.0);
        assert!(approx(obj.current_position(), obj.target_position()));
    }
}

#[test]
fn effective_progress_is_power_curve() {
    let p = 0.5_f32;
    assert!((WeightClass::Heavy.effective_progress(p) - p.powf(0.8)).abs() < 1e-6);
    assert!((WeightClass::Neutral.effective_progress(p) - p).abs() < 1e-6);
    assert!((WeightClass::Light.effective_progress(p) - p.powf(1.2)).abs() < 1e-6);
}

#[test]
fn heavy_objects_arrive_before_light_ones() {
    // Known quirk of the power curve: the smaller "heavy" exponent lifts the
    // curve, so heavy ornaments are always ahead of neutral and light ones.
    for i in 1..10 {
        let p = i as f32 / 10.0;
        let heavy = WeightClass::Heavy.effective_progress(p);
        let neutral = WeightClass::Neutral.effective_progress(p);
        let light = WeightClass::Light.effective_progress(p);
        assert!(heavy > neutral && neutral > light, "p={p}: {heavy} {neutral} {light}");
    }
}

#[test]
fn effective_progress_clamps_out_of_range_input() {
    assert_eq!(WeightClass::Heavy.effective_progress(1.5), 1.0);
    assert_eq!(WeightClass::Light.effective_progress(-0.5), 0.0);
}

#[test]
fn tumbling_stops_exactly_at_formed_threshold() {
    let mut obj = sample_object();
    let rest = obj.rest_rotation();

    obj.update(WeightClass::Neutral, 0.5, 0.5);
    let tumbled = obj.current_rotation();
    assert!(approx(tumbled, rest + Vec3::new(0.5 * TUMBLE_RATE_X, 0.5 * TUMBLE_RATE_Y, 0.0)));

    obj.update(WeightClass::Neutral, FORMED_THRESHOLD, 0.5);
    assert_eq!(obj.current_rotation(), rest);

    obj.update(WeightClass::Neutral, 1.0, 0.5);
    assert_eq!(obj.current_rotation(), rest);

    let just_below = FORMED_THRESHOLD - 1e-4;
    obj.update(WeightClass::Neutral, just_below, 0.1);
    assert!(approx(
        obj.current_rotation(),
        rest + Vec3::new(0.1 * TUMBLE_RATE_X, 0.1 * TUMBLE_RATE_Y, 0.0)
    ));
}

#[test]
fn tumbling_accumulates_while_chaotic() {
    let mut obj = sample_object();
    for _ in 0..10 {
        obj.update(WeightClass::Light, 0.2, 0.1);
    }
    let expected = obj.rest_rotation() + Vec3::new(TUMBLE_RATE_X, TUMBLE_RATE_Y, 0.0);
    assert!(approx(obj.current_rotation(), expected));
    assert!(!is_formed(0.2));
    assert!(is_formed(0.95));
}

#[test]
fn transform_uses_rest_scale_and_current_position() {
    let mut obj = sample_object();
    obj.update(WeightClass::Neutral, 1.0, 0.0);
    let t = obj.transform();
    assert!(approx(t.position, Vec3::new(10.0, 0.0, 0.0)));
    assert_eq!(t.scale, Vec3::splat(0.4));
    let m = t.matrix();
    assert!(approx(m.transform_point3(Vec3::ZERO), t.position));
}

#[test]
fn new_objects_start_at_target() {
    let obj = sample_object();
    assert_eq!(obj.current_position(), obj.target_position());
    assert_eq!(obj.current_rotation(), obj.rest_rotation());
}

#[test]
fn built_batch_respects_spec_shapes() {
    let mut rng = StdRng::seed_from_u64(21);
    let spec = OrnamentSpec::light();
    let batch = OrnamentBatch::build(&mut rng, &spec);
    assert_eq!(batch.len(), LIGHT_ORNAMENT_COUNT);
    assert_eq!(batch.weight, WeightClass::Light);
    for o in batch.objects() {
        assert!(o.chaos_position().length() <= ORNAMENT_CHAOS_RADIUS + 1e-3);
        assert!(o.target_position().y.abs() <= ORNAMENT_CONE_HEIGHT / 2.0 + 1e-4);
        assert!(o.rest_scale() >= ORNAMENT_SCALE_MIN);
        assert!(o.rest_scale() < ORNAMENT_SCALE_MIN + ORNAMENT_SCALE_SPAN);
        let r = o.rest_rotation();
        for a in [r.x, r.y, r.z] {
            assert!((0.0..std::f32::consts::PI).contains(&a));
        }
    }
}

#[test]
fn batch_update_moves_every_object_and_keeps_endpoints() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut batch = OrnamentBatch::build(&mut rng, &OrnamentSpec::heavy());
    let before: Vec<_> = batch
        .objects()
        .iter()
        .map(|o| (o.chaos_position(), o.target_position()))
        .collect();
    batch.update(0.3, 1.0 / 60.0);
    for (o, (chaos, target)) in batch.objects().iter().zip(&before) {
        assert_eq!(o.chaos_position(), *chaos);
        assert_eq!(o.target_position(), *target);
        let expected = chaos.lerp(*target, 0.3_f32.powf(WEIGHT_HEAVY));
        assert!(approx(o.current_position(), expected));
    }
}

#[test]
fn batch_writes_one_instance_per_object() {
    let objects = vec![sample_object(), sample_object()];
    let batch = OrnamentBatch::from_objects("test", WeightClass::Neutral, objects);
    let mut out = Vec::new();
    batch.write_instances(glam::Mat4::IDENTITY, &mut out);
    assert_eq!(out.len(), 2);
    // translation lives in the fourth column
    assert!((out[0].model[3][0] - 10.0).abs() < 1e-5);
    assert_eq!(out[0].color, [1.0, 1.0, 1.0, 1.0]);
}

#[test]
fn instance_layout_is_gpu_friendly() {
    assert_eq!(std::mem::size_of::<InstanceRaw>(), 80);
    let raw = InstanceRaw::billboard(Vec3::new(1.0, 2.0, 3.0), 0.5, [0.1, 0.2, 0.3]);
    let bytes: &[u8] = bytemuck::bytes_of(&raw);
    assert_eq!(bytes.len(), 80);
    assert_eq!(raw.model[0][0], 0.5);
    assert_eq!([raw.model[3][0], raw.model[3][1], raw.model[3][2]], [1.0, 2.0, 3.0]);
}
