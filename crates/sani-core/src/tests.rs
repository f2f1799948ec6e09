#[cfg(test)]
mod tests {
    use crate::Color;
    use crate::Transform;
    use crate::animation::*;
    use crate::locals::*;
    use crate::scale::*;
    use web_time::{Duration, Instant};

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#FF5733");
        assert_eq!(c, Color(255, 87, 51, 255));

        let c_alpha = Color::from_hex("#FF5733AA");
        assert_eq!(c_alpha, Color(255, 87, 51, 170));

        assert_eq!(Color::from_hex("#888"), Color(0x88, 0x88, 0x88, 255));
        assert_eq!(Color::from_hex("#fff"), Color::WHITE);
        assert_eq!(Color::from_hex("nonsense"), Color::BLACK);
    }

    #[test]
    fn test_color_lerp_endpoints() {
        let grey = Color::from_hex("#888");
        assert_eq!(grey.lerp(Color::WHITE, 0.0), grey);
        assert_eq!(grey.lerp(Color::WHITE, 1.0), Color::WHITE);
        let mid = grey.lerp(Color::WHITE, 0.5);
        assert!(mid.0 > grey.0 && mid.0 < 255);
        assert_eq!(Color::WHITE.to_hex(), "#FFFFFF");
    }

    #[test]
    fn test_easing_endpoints_and_monotonic() {
        for e in [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
            assert!(approx(e.interpolate(0.0), 0.0), "{e:?}");
            assert!(approx(e.interpolate(1.0), 1.0), "{e:?}");
            let mut prev = 0.0;
            for i in 1..=20 {
                let v = e.interpolate(i as f32 / 20.0);
                assert!(v >= prev, "{e:?} not monotonic at step {i}");
                prev = v;
            }
        }
        assert!(approx(Easing::EaseInOut.interpolate(1.5), 1.0));
    }

    #[test]
    fn test_animation_deterministic() {
        let t0 = Instant::now();
        let clock = ManualClock::new(t0);

        let mut a = AnimatedValue::new(
            0.0f32,
            AnimationSpec::tween(Duration::from_millis(1000), Easing::Linear),
        );
        a.set_target(10.0, clock.now());

        clock.advance(Duration::from_millis(250));
        assert!(a.update(clock.now()));
        assert!((*a.get() - 2.5).abs() < 0.01);

        clock.advance(Duration::from_millis(750));
        let cont = a.update(clock.now());
        assert!(!cont);
        assert!((*a.get() - 10.0).abs() < 0.001);
        assert!(!a.is_animating());
    }

    #[test]
    fn test_system_clock_drives_tween() {
        let clock = SystemClock;
        let before = Instant::now();
        let mut a = AnimatedValue::new(0.0f32, AnimationSpec::linear(Duration::from_millis(1)));
        a.set_target(1.0, clock.now());
        assert!(clock.now() >= before);

        std::thread::sleep(Duration::from_millis(5));
        assert!(!a.update(clock.now()));
        assert_eq!(*a.get(), 1.0);
    }

    #[test]
    fn test_animation_retarget_starts_from_current() {
        let clock = ManualClock::default();
        let mut a = AnimatedValue::new(0.0f32, AnimationSpec::linear(Duration::from_millis(100)));
        a.set_target(1.0, clock.now());

        clock.advance(Duration::from_millis(50));
        a.set_target(0.0, clock.now());
        // No jump at the moment of interruption.
        assert!((*a.get() - 0.5).abs() < 0.01);

        clock.advance(Duration::from_millis(50));
        a.update(clock.now());
        assert!((*a.get() - 0.25).abs() < 0.01);

        clock.advance(Duration::from_millis(50));
        assert!(!a.update(clock.now()));
        assert_eq!(*a.get(), 0.0);
    }

    #[test]
    fn test_animation_delay_holds_value() {
        let clock = ManualClock::default();
        let spec = AnimationSpec::linear(Duration::from_millis(100))
            .with_delay(Duration::from_millis(40));
        let mut a = AnimatedValue::new(0.0f32, spec);
        a.set_target(1.0, clock.now());

        clock.advance(Duration::from_millis(30));
        assert!(a.update(clock.now()));
        assert_eq!(*a.get(), 0.0);

        clock.advance(Duration::from_millis(60));
        a.update(clock.now());
        assert!((*a.get() - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_animated_color() {
        let clock = ManualClock::default();
        let mut c = AnimatedValue::new(
            Color::from_hex("#888"),
            AnimationSpec::linear(Duration::from_millis(240)),
        );
        c.set_target(Color::WHITE, clock.now());
        clock.advance(Duration::from_millis(240));
        c.update(clock.now());
        assert_eq!(*c.get(), Color::WHITE);
    }

    #[test]
    fn test_transform_combine() {
        let t = Transform::scale(1.08).combine(&Transform::translate(4.0, -2.0));
        assert!(approx(t.scale_x, 1.08) && approx(t.scale_y, 1.08));
        assert_eq!((t.translate_x, t.translate_y), (4.0, -2.0));
        assert_eq!(Transform::default(), Transform::identity());
    }

    #[test]
    fn test_viewport_base_is_identity() {
        let vp = Viewport::base();
        for size in [-8.0, 0.0, 1.0, 14.0, 42.0] {
            assert!(approx(vp.scale_by_width(size), size));
            assert!(approx(vp.scale_by_height(size), size));
            assert!(approx(vp.moderate(size), size));
        }
        assert!(approx(vp.width_percent(10.0), 37.5));
        assert!(approx(vp.height_percent(50.0), 406.0));
    }

    #[test]
    fn test_moderate_scale_factor_bounds() {
        let vp = Viewport::new(428.0, 926.0);
        for size in [-3.0, 0.0, 12.0, 16.5, 42.0, 143.0] {
            assert!(approx(vp.moderate_scale(size, 0.0), size));
            assert!(approx(vp.moderate_scale(size, 1.0), vp.scale_by_width(size)));
        }
        // Default factor lands halfway between the two.
        let s = 20.0;
        assert!(approx(vp.moderate(s), (s + vp.scale_by_width(s)) / 2.0));
    }

    #[test]
    fn test_viewport_percentages() {
        let vp = Viewport::new(390.0, 844.0);
        assert!(approx(vp.width_percent(100.0), 390.0));
        assert!(approx(vp.height_percent(18.0), 151.92));
        assert!(approx(vp.scale_by_height(812.0), 844.0));
        assert!(approx(vp.width_percent(-10.0), -39.0));
    }

    #[test]
    fn test_locals_nest_and_restore() {
        assert_eq!(viewport(), Viewport::base());
        with_viewport(Viewport::new(400.0, 900.0), || {
            assert_eq!(viewport().width, 400.0);
            with_viewport(Viewport::new(320.0, 640.0), || {
                assert_eq!(viewport().width, 320.0);
            });
            assert_eq!(viewport().width, 400.0);
        });
        assert_eq!(viewport(), Viewport::base());
        assert_eq!(theme().nav_inactive, Color::from_hex("#888"));
    }
}
