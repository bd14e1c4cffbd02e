#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::engine::animation::{AnimationEngine, RenderCommand};
    use crate::engine::config::EngineConfig;
    use crate::engine::points::{Point, PointSet};
    use crate::engine::renderable::{self, RecordingRenderer, Renderable};

    /// Power-of-two frame delta so synthetic timestamps and their deltas are
    /// exact in f64 and the FPS estimate comes out at exactly 64.
    const FRAME: f64 = 1.0 / 64.0;

    fn point(latitude: f64, longitude: f64, label: &str) -> Point {
        Point {
            latitude,
            longitude,
            label: label.to_string(),
        }
    }

    fn engine(points: Vec<Point>, config: EngineConfig) -> AnimationEngine {
        AnimationEngine::new(PointSet::new(points).unwrap(), config)
    }

    /// Ticks `n` frames at the fixed delta, starting the timestamp sequence
    /// at `start_frame * FRAME`, and returns every command in order.
    fn run_ticks(engine: &mut AnimationEngine, start_frame: u64, n: u64) -> Vec<RenderCommand> {
        (start_frame..start_frame + n)
            .map(|i| engine.tick(i as f64 * FRAME))
            .collect()
    }

    #[test]
    fn cyclic_traversal_returns_to_start() {
        let config = EngineConfig {
            initial_total_steps: 4,
            // Keeps the recomputed transition length at 4 frames as well.
            seconds_per_transition: 4.0 * FRAME,
            ..EngineConfig::default()
        };
        let mut e = engine(
            vec![
                point(0.0, 0.0, "a"),
                point(30.0, 60.0, "b"),
                point(-45.0, 90.0, "c"),
            ],
            config,
        );

        run_ticks(&mut e, 0, 4);
        assert_eq!(e.state().point_index, 1);

        run_ticks(&mut e, 4, 4);
        assert_eq!(e.state().point_index, 2);

        run_ticks(&mut e, 8, 4);
        assert_eq!(e.state().point_index, 0);
    }

    #[test]
    fn rotation_is_continuous_across_rollover() {
        let config = EngineConfig {
            initial_total_steps: 4,
            seconds_per_transition: 4.0 * FRAME,
            ..EngineConfig::default()
        };
        let mut e = engine(
            vec![
                point(0.0, 0.0, "a"),
                point(30.0, 60.0, "b"),
                point(-45.0, 90.0, "c"),
            ],
            config,
        );

        // Tick 4 completes the first transition (step 3, k = 1); tick 5 is
        // the first frame of the next one (step 0, k = 0). Both must show
        // point "a" fully centered.
        let commands = run_ticks(&mut e, 0, 5);
        let last_of_first = commands[3];
        let first_of_second = commands[4];

        assert_relative_eq!(
            last_of_first.rotation_x,
            first_of_second.rotation_x,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            last_of_first.rotation_y,
            first_of_second.rotation_y,
            epsilon = 1e-9
        );
        assert_relative_eq!(last_of_first.rotation_x, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn frame_rate_adaptation_resizes_transitions() {
        let config = EngineConfig {
            initial_total_steps: 10,
            seconds_per_transition: 0.5,
            ..EngineConfig::default()
        };
        let mut e = engine(vec![point(0.0, 0.0, "a"), point(1.0, 1.0, "b")], config);

        // 10 ticks at 64 fps finish the initial transition; the next one is
        // sized so 0.5 s of wall clock fits: ceil(64 * 0.5) = 32 frames.
        run_ticks(&mut e, 0, 10);

        assert_eq!(e.state().point_index, 1);
        assert_eq!(e.state().total_steps, 32);
        assert_relative_eq!(e.state().measured_fps, 64.0);
    }

    #[test]
    fn first_tick_has_no_frame_rate_history() {
        let mut e = engine(
            vec![point(0.0, 0.0, "a"), point(1.0, 1.0, "b")],
            EngineConfig::default(),
        );

        e.tick(0.0);
        assert_eq!(e.state().measured_fps, 0.0);
        assert_eq!(e.state().last_timestamp, Some(0.0));

        e.tick(FRAME);
        assert_relative_eq!(e.state().measured_fps, 64.0);
    }

    #[test]
    fn single_point_degenerates_to_static_pose() {
        let config = EngineConfig {
            initial_total_steps: 3,
            seconds_per_transition: 3.0 * FRAME,
            ..EngineConfig::default()
        };
        let mut e = engine(vec![point(12.0, -34.0, "only")], config);

        // Rolls over repeatedly, but prev == next throughout, so the pose
        // never moves.
        for command in run_ticks(&mut e, 0, 20) {
            assert_relative_eq!(command.rotation_x, 12.0_f64.to_radians());
            assert_relative_eq!(command.rotation_y, 34.0_f64.to_radians());
        }

        assert_eq!(e.state().point_index, 0);
    }

    #[test]
    fn zero_fps_clamps_transition_to_one_frame() {
        let config = EngineConfig {
            initial_total_steps: 0,
            seconds_per_transition: 0.0,
            ..EngineConfig::default()
        };
        let mut e = engine(vec![point(0.0, 0.0, "a"), point(5.0, 5.0, "b")], config);

        // total_steps is clamped up to 1 at construction and stays there
        // when the recomputed length would be zero; k reads as 1.
        for _ in 0..6 {
            e.tick(0.0);
            assert_eq!(e.state().total_steps, 1);
        }
    }

    #[test]
    fn end_to_end_two_point_tour() {
        let config = EngineConfig {
            initial_total_steps: 100,
            seconds_per_transition: 4.0,
            ..EngineConfig::default()
        };
        let mut e = engine(
            vec![point(0.0, 0.0, "origin"), point(10.0, 20.0, "target")],
            config,
        );

        // First transition: from "target" (cyclic predecessor) toward
        // "origin".
        let commands = run_ticks(&mut e, 0, 100);
        assert_relative_eq!(commands[0].rotation_x, 10.0_f64.to_radians(), epsilon = 1e-9);
        assert_relative_eq!(commands[0].rotation_y, -20.0_f64.to_radians(), epsilon = 1e-9);
        assert_relative_eq!(commands[99].rotation_x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(commands[99].rotation_y, 0.0, epsilon = 1e-9);

        // Rollover after exactly 100 ticks: next pair, transition resized to
        // ceil(64 fps * 4 s).
        assert_eq!(e.state().point_index, 1);
        assert_eq!(e.state().step, 0);
        assert_eq!(e.state().total_steps, 256);

        // First frame toward "target" still shows "origin"; no visual jump.
        let next = e.tick(100.0 * FRAME);
        assert_relative_eq!(next.rotation_x, commands[99].rotation_x, epsilon = 1e-9);
        assert_relative_eq!(next.rotation_y, commands[99].rotation_y, epsilon = 1e-9);
    }

    #[test]
    fn camera_arc_is_closest_at_endpoints() {
        let config = EngineConfig {
            initial_total_steps: 100,
            ..EngineConfig::default()
        };
        let mut e = engine(vec![point(0.0, 0.0, "a"), point(1.0, 1.0, "b")], config);

        let commands = run_ticks(&mut e, 0, 100);

        // step 0: normalized = -1 -> base - amplitude.
        assert_relative_eq!(commands[0].camera_distance, 130.0 - 15.0);
        // step 50: normalized = 0 -> base distance.
        assert_relative_eq!(commands[50].camera_distance, 130.0);
        // Interior frames never exceed the base distance.
        for command in &commands {
            assert!(command.camera_distance <= 130.0);
            assert!(command.camera_distance >= 115.0);
        }
    }

    #[test]
    fn viewport_width_picks_base_distance() {
        let mut wide = engine(vec![point(0.0, 0.0, "a")], EngineConfig::default());
        wide.set_viewport_width(1920.0);
        assert_relative_eq!(wide.tick(0.0).camera_distance, 130.0 - 15.0);

        let mut narrow = engine(vec![point(0.0, 0.0, "a")], EngineConfig::default());
        narrow.set_viewport_width(800.0);
        assert_relative_eq!(narrow.tick(0.0).camera_distance, 110.0 - 15.0);
    }

    #[test]
    fn cycle_end_hold_freezes_the_pose() {
        let config = EngineConfig {
            initial_total_steps: 2,
            seconds_per_transition: 2.0 * FRAME,
            hold_frames_at_cycle_end: 3,
            ..EngineConfig::default()
        };
        let mut e = engine(vec![point(0.0, 0.0, "a"), point(10.0, 20.0, "b")], config);

        // Two 2-frame transitions finish the cycle: a -> b, then b -> a.
        run_ticks(&mut e, 0, 4);
        assert_eq!(e.state().point_index, 0);
        assert_eq!(e.state().step, 0);

        // Three held frames re-emit the step-0 pose without advancing.
        let held = run_ticks(&mut e, 4, 3);
        for command in &held {
            assert_relative_eq!(command.rotation_x, 10.0_f64.to_radians(), epsilon = 1e-9);
            assert_relative_eq!(command.rotation_y, -20.0_f64.to_radians(), epsilon = 1e-9);
        }
        assert_eq!(e.state().step, 0);

        // Then the scheduler resumes normally.
        let resumed = e.tick(7.0 * FRAME);
        assert_eq!(resumed, held[0]);
        assert_eq!(e.state().step, 1);
    }

    #[test]
    fn apply_command_pushes_state_then_draws() {
        let mut e = engine(
            vec![point(0.0, 0.0, "a"), point(10.0, 20.0, "b")],
            EngineConfig::default(),
        );
        let mut target = RecordingRenderer::default();

        let command = e.tick(0.0);
        renderable::apply_command(&mut target, &command).unwrap();

        assert_eq!(target.frames_rendered, 1);
        assert_eq!(target.rotations.len(), 1);
        assert_eq!(target.distances.len(), 1);

        let (x, y, z) = target.rotations[0];
        assert_relative_eq!(x, command.rotation_x);
        assert_relative_eq!(y, command.rotation_y);
        assert_relative_eq!(z, 0.0);
        assert_relative_eq!(target.distances[0], command.camera_distance);
    }

    #[test]
    fn recording_renderer_tracks_resizes() {
        let mut target = RecordingRenderer::default();

        target.resize(1024.0, 768.0);
        target.resize(800.0, 600.0);

        assert_eq!(target.resizes, vec![(1024.0, 768.0), (800.0, 600.0)]);
    }
}
