//! Unit tests for haunt-behavior.

#[cfg(test)]
mod fixtures {
    use haunt_agent::Ghost;
    use haunt_core::{AgentId, Direction, GhostKind, Position, Tick};
    use haunt_maze::{Grid, GridBuilder, MazeSpec};

    use crate::{BehaviorConfig, HouseConfig, PeerView, Pursued, TickContext};

    pub fn open_grid(cols: i32, rows: i32) -> Grid {
        GridBuilder::new(MazeSpec::new(8, cols, rows).unwrap()).build()
    }

    pub fn ascii(lines: &[&str]) -> Grid {
        GridBuilder::from_ascii(lines.iter().copied(), 8).unwrap().build()
    }

    /// Default timings with the house moved onto a 10 × 10 grid.
    pub fn config() -> BehaviorConfig {
        BehaviorConfig {
            house: HouseConfig { exit: Position::new(40, 8), entry: Position::new(40, 40) },
            ..BehaviorConfig::default()
        }
    }

    pub fn ghost(kind: GhostKind, x: i32, y: i32, facing: Direction) -> Ghost {
        Ghost::new(AgentId(0), kind, Position::new(x, y), facing)
    }

    pub fn pursued(x: i32, y: i32, facing: Direction) -> Pursued {
        Pursued { position: Position::new(x, y), facing }
    }

    pub fn ctx<'a>(
        grid:    &'a Grid,
        config:  &'a BehaviorConfig,
        peers:   &'a [PeerView],
        pursued: Pursued,
    ) -> TickContext<'a> {
        TickContext {
            tick: Tick(0),
            grid,
            pursued,
            peers,
            playfield: grid.spec().playfield(),
            started: true,
            config,
        }
    }
}

#[cfg(test)]
mod config {
    use crate::{BehaviorConfig, BehaviorError};

    #[test]
    fn defaults_match_arcade_timings() {
        let cfg = BehaviorConfig::default();
        assert_eq!(cfg.frightened_ticks(), 420);
        assert_eq!(cfg.chase_ticks(), 1200);
        assert_eq!(cfg.scatter_ticks(), 300);
        assert_eq!((cfg.bfs_cap, cfg.astar_cap), (500, 1000));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_values() {
        let cfg = BehaviorConfig { tick_rate: 0, ..BehaviorConfig::default() };
        assert!(matches!(cfg.validate(), Err(BehaviorError::Config(_))));
        let cfg = BehaviorConfig { astar_cap: 0, ..BehaviorConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = BehaviorConfig { flank_lead_tiles: -1, ..BehaviorConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_timers_that_overflow_ticks() {
        let cfg = BehaviorConfig { frightened_secs: u32::MAX / 2, ..BehaviorConfig::default() };
        let Err(BehaviorError::Config(msg)) = cfg.validate() else {
            panic!("expected a config error");
        };
        assert!(msg.contains("frightened_secs"), "{msg}");

        let cfg = BehaviorConfig { tick_rate: u32::MAX, ..BehaviorConfig::default() };
        assert!(cfg.validate().is_err());

        // The largest duration that still fits is accepted.
        let cfg = BehaviorConfig { scatter_secs: u32::MAX / 60, ..BehaviorConfig::default() };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn unvalidated_timers_saturate() {
        let cfg = BehaviorConfig { chase_secs: u32::MAX, ..BehaviorConfig::default() };
        assert_eq!(cfg.chase_ticks(), u32::MAX);
        assert_eq!(cfg.scatter_ticks(), 300);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_fills_defaults() {
        let cfg: BehaviorConfig =
            serde_json::from_str(r#"{ "frightened_secs": 3, "tunnel_wrap": true }"#).unwrap();
        assert_eq!(cfg.frightened_ticks(), 180);
        assert!(cfg.tunnel_wrap);
        assert_eq!(cfg.chase_secs, 20);
    }
}

#[cfg(test)]
mod strategy {
    use haunt_agent::StateKind;
    use haunt_core::{AgentId, Direction, GhostKind, Position};
    use haunt_maze::{Algorithm, EdgeMode};

    use super::fixtures::*;
    use crate::{BehaviorConfig, Corner, PeerView, Strategy, TargetRule};

    fn peer_at(id: u32, x: i32, y: i32) -> PeerView {
        PeerView {
            id:       AgentId(id),
            kind:     GhostKind::Chaser,
            position: Position::new(x, y),
            facing:   Direction::Left,
            state:    StateKind::Chase,
        }
    }

    #[test]
    fn default_algorithms_and_corners() {
        let cfg = BehaviorConfig::default();
        let algo = |k| Strategy::for_kind(k, &cfg, None).search.algorithm;
        assert_eq!(algo(GhostKind::Chaser), Algorithm::Bfs);
        assert_eq!(algo(GhostKind::Ambusher), Algorithm::AStar);
        assert_eq!(algo(GhostKind::Flanker), Algorithm::Bfs);
        assert_eq!(algo(GhostKind::Shy), Algorithm::AStar);
        assert_eq!(Strategy::for_kind(GhostKind::Shy, &cfg, None).search.iteration_cap, 1000);
        assert_eq!(Corner::for_kind(GhostKind::Chaser), Corner::TopRight);
        assert_eq!(Corner::for_kind(GhostKind::Shy), Corner::BottomLeft);
    }

    #[test]
    fn tunnel_wrap_flag_selects_edge_mode() {
        let cfg = BehaviorConfig { tunnel_wrap: true, ..BehaviorConfig::default() };
        let s = Strategy::for_kind(GhostKind::Chaser, &cfg, None);
        assert_eq!(s.search.edges, EdgeMode::TunnelWrap);
    }

    #[test]
    fn scatter_targets_are_corners() {
        let grid = open_grid(10, 10);
        let cfg = config();
        let c = ctx(&grid, &cfg, &[], pursued(0, 0, Direction::Left));
        let corner = |k| Strategy::for_kind(k, &cfg, None).scatter_target(&c);
        assert_eq!(corner(GhostKind::Chaser), Position::new(80, 0));
        assert_eq!(corner(GhostKind::Ambusher), Position::new(0, 0));
        assert_eq!(corner(GhostKind::Flanker), Position::new(80, 80));
        assert_eq!(corner(GhostKind::Shy), Position::new(0, 80));
    }

    #[test]
    fn direct_pursuit() {
        let grid = open_grid(10, 10);
        let cfg = config();
        let c = ctx(&grid, &cfg, &[], pursued(48, 56, Direction::Up));
        let s = Strategy::for_kind(GhostKind::Chaser, &cfg, None);
        assert_eq!(s.chase_target(Position::ORIGIN, &c), Position::new(48, 56));
    }

    #[test]
    fn ambush_projects_along_facing() {
        let grid = open_grid(10, 10);
        let cfg = config();
        let s = Strategy::for_kind(GhostKind::Ambusher, &cfg, None);
        let c = ctx(&grid, &cfg, &[], pursued(80, 80, Direction::Left));
        assert_eq!(s.chase_target(Position::ORIGIN, &c), Position::new(48, 80));
        let c = ctx(&grid, &cfg, &[], pursued(80, 80, Direction::Down));
        assert_eq!(s.chase_target(Position::ORIGIN, &c), Position::new(80, 112));
    }

    #[test]
    fn flanking_reflects_peer_through_pivot() {
        let grid = open_grid(10, 10);
        let cfg = config();
        let peers = [peer_at(0, 40, 40)];
        let c = ctx(&grid, &cfg, &peers, pursued(80, 80, Direction::Up));
        let s = Strategy::for_kind(GhostKind::Flanker, &cfg, Some(AgentId(0)));
        // Pivot is 2 tiles above the pursued agent: (80, 64).
        assert_eq!(s.chase_target(Position::ORIGIN, &c), Position::new(120, 88));
    }

    #[test]
    fn flanking_without_peer_is_direct_pursuit() {
        let grid = open_grid(10, 10);
        let cfg = config();
        let peers = [peer_at(0, 40, 40)];
        let p = pursued(24, 56, Direction::Right);
        let c = ctx(&grid, &cfg, &peers, p);
        let direct = Strategy::for_kind(GhostKind::Chaser, &cfg, None);

        for me in [Position::ORIGIN, Position::new(72, 8), Position::new(13, 61)] {
            let expected = direct.chase_target(me, &c);
            let none = Strategy {
                rule: TargetRule::Flanking { lead: 2, peer: None },
                ..direct
            };
            let missing = Strategy {
                rule: TargetRule::Flanking { lead: 2, peer: Some(AgentId(9)) },
                ..direct
            };
            assert_eq!(none.chase_target(me, &c), expected);
            assert_eq!(missing.chase_target(me, &c), expected);
        }
    }

    #[test]
    fn threshold_switch_retreats_within_radius() {
        let grid = open_grid(20, 20);
        let cfg = config();
        let s = Strategy::for_kind(GhostKind::Shy, &cfg, None);
        let c = ctx(&grid, &cfg, &[], pursued(100, 100, Direction::Left));
        let corner = Position::new(0, 160);

        // Exactly 8 tiles (64 px) away is not beyond the radius.
        assert_eq!(s.chase_target(Position::new(100, 36), &c), corner);
        assert_eq!(s.chase_target(Position::new(100, 35), &c), Position::new(100, 100));
        assert_eq!(s.chase_target(Position::new(100, 100), &c), corner);
    }

    #[test]
    fn far_out_targets_saturate() {
        let grid = open_grid(10, 10);
        let cfg = config();
        let edge = i32::MAX - 4;

        let ambush = Strategy::for_kind(GhostKind::Ambusher, &cfg, None);
        let c = ctx(&grid, &cfg, &[], pursued(edge, 0, Direction::Right));
        assert_eq!(ambush.chase_target(Position::ORIGIN, &c), Position::new(i32::MAX, 0));

        let long = Strategy { rule: TargetRule::Ambush { lead: i32::MAX }, ..ambush };
        let c = ctx(&grid, &cfg, &[], pursued(0, 0, Direction::Up));
        assert_eq!(long.chase_target(Position::ORIGIN, &c), Position::new(0, -i32::MAX));

        let peers = [peer_at(0, i32::MIN, i32::MIN)];
        let c = ctx(&grid, &cfg, &peers, pursued(edge, edge, Direction::Down));
        let flank = Strategy::for_kind(GhostKind::Flanker, &cfg, Some(AgentId(0)));
        assert_eq!(flank.chase_target(Position::ORIGIN, &c), Position::new(i32::MAX, i32::MAX));
    }

    #[test]
    fn threshold_switch_at_extreme_range() {
        let grid = open_grid(10, 10);
        let cfg = config();
        let shy = Strategy::for_kind(GhostKind::Shy, &cfg, None);
        let corner = shy.scatter_target(&ctx(&grid, &cfg, &[], pursued(0, 0, Direction::Left)));
        let far = Position::new(i32::MIN, i32::MIN);
        let c = ctx(&grid, &cfg, &[], pursued(i32::MAX, i32::MAX, Direction::Left));

        assert_eq!(shy.chase_target(far, &c), Position::new(i32::MAX, i32::MAX));
        // Both squares saturate; an unbounded radius never counts as exceeded.
        let wide = Strategy { rule: TargetRule::ThresholdSwitch { radius: i32::MAX }, ..shy };
        assert_eq!(wide.chase_target(far, &c), corner);
    }

    #[test]
    fn same_snapshot_same_target() {
        let grid = open_grid(10, 10);
        let cfg = config();
        let peers = [peer_at(0, 8, 16)];
        let c = ctx(&grid, &cfg, &peers, pursued(40, 40, Direction::Right));
        for kind in GhostKind::ALL {
            let s = Strategy::for_kind(kind, &cfg, Some(AgentId(0)));
            let me = Position::new(64, 64);
            assert_eq!(s.chase_target(me, &c), s.chase_target(me, &c));
        }
    }
}

#[cfg(test)]
mod navigate {
    use haunt_core::{AgentId, AgentRng, Direction, GhostKind, Position};
    use haunt_maze::{EdgeMode, SearchSpec};

    use super::fixtures::*;
    use crate::navigate::{greedy_direction, head_toward, wander};
    use crate::Intent;

    #[test]
    fn found_path_gives_first_step_direction() {
        let grid = open_grid(10, 10);
        let g = ghost(GhostKind::Chaser, 0, 0, Direction::Left);
        let intent = head_toward(&g, Position::new(72, 72), &SearchSpec::bfs(500), &grid);
        assert_eq!(
            intent,
            Intent::Move { direction: Direction::Down, next: Position::new(0, 8), target: Position::new(72, 72) }
        );
    }

    #[test]
    fn off_grid_keeps_facing_and_raw_target() {
        let grid = open_grid(10, 10);
        let g = ghost(GhostKind::Chaser, 3, 8, Direction::Right);
        let target = Position::new(72, 72);
        let intent = head_toward(&g, target, &SearchSpec::bfs(500), &grid);
        assert_eq!(intent, Intent::Move { direction: Direction::Right, next: target, target });
    }

    #[test]
    fn blocked_target_falls_back_to_greedy() {
        let grid = ascii(&[".....", ".....", "....#", ".....", "....."]);
        let g = ghost(GhostKind::Chaser, 16, 16, Direction::Right);
        let target = Position::new(32, 16);
        let intent = head_toward(&g, target, &SearchSpec::astar(1000), &grid);
        assert_eq!(intent, Intent::Move { direction: Direction::Right, next: target, target });
    }

    #[test]
    fn greedy_never_reverses_unless_dead_end() {
        let grid = open_grid(5, 5);
        // Target is straight behind; the reverse is excluded so a side step wins.
        let here = grid.tile_of(Position::new(16, 16));
        let d = greedy_direction(&grid, here, Direction::Right, Position::new(0, 16), EdgeMode::Bounded);
        assert_eq!(d, Some(Direction::Up));

        let corridor = ascii(&["#####", "#...#", "#####"]);
        let end = corridor.tile_of(Position::new(24, 8));
        let d = greedy_direction(&corridor, end, Direction::Right, Position::new(200, 8), EdgeMode::Bounded);
        assert_eq!(d, Some(Direction::Left));
    }

    #[test]
    fn enclosed_tile_holds() {
        let grid = ascii(&["###", "#.#", "###"]);
        let g = ghost(GhostKind::Chaser, 8, 8, Direction::Left);
        assert_eq!(head_toward(&g, Position::new(0, 0), &SearchSpec::bfs(500), &grid), Intent::Hold);
        let mut rng = AgentRng::new(1, AgentId(0));
        assert_eq!(wander(&g, &grid, EdgeMode::Bounded, &mut rng), Intent::Hold);
    }

    #[test]
    fn tunnel_wrap_steers_across_the_seam() {
        let grid = ascii(&["#####", ".#...", "#####"]);
        let g = ghost(GhostKind::Chaser, 0, 8, Direction::Left);
        let spec = SearchSpec::bfs(500).with_edges(EdgeMode::TunnelWrap);
        let intent = head_toward(&g, Position::new(24, 8), &spec, &grid);
        assert_eq!(intent.direction(), Some(Direction::Left));
        assert!(matches!(intent, Intent::Move { next, .. } if next == Position::new(32, 8)));
    }

    #[test]
    fn wander_never_reverses_in_the_open() {
        let grid = open_grid(5, 5);
        let g = ghost(GhostKind::Shy, 16, 16, Direction::Up);
        for seed in 0..64 {
            let mut rng = AgentRng::new(seed, AgentId(0));
            let d = wander(&g, &grid, EdgeMode::Bounded, &mut rng).direction();
            assert!(d.is_some());
            assert_ne!(d, Some(Direction::Down));
        }
    }

    #[test]
    fn wander_reverses_at_dead_end() {
        let corridor = ascii(&["#####", "#...#", "#####"]);
        let g = ghost(GhostKind::Shy, 24, 8, Direction::Right);
        let mut rng = AgentRng::new(3, AgentId(0));
        assert_eq!(
            wander(&g, &corridor, EdgeMode::Bounded, &mut rng),
            Intent::Move { direction: Direction::Left, next: Position::new(16, 8), target: Position::new(16, 8) }
        );
    }

    #[test]
    fn wander_is_deterministic_per_seed() {
        let grid = open_grid(5, 5);
        let g = ghost(GhostKind::Shy, 16, 16, Direction::Up);
        let run = |seed| {
            let mut rng = AgentRng::new(seed, AgentId(0));
            (0..10).map(|_| wander(&g, &grid, EdgeMode::Bounded, &mut rng)).collect::<Vec<_>>()
        };
        assert_eq!(run(11), run(11));
    }
}

#[cfg(test)]
mod machine {
    use haunt_agent::{BehaviorState, StateKind};
    use haunt_core::{AgentId, AgentRng, Direction, GhostKind, Position};

    use super::fixtures::*;
    use crate::{on_signal, step, Intent, Signal, Strategy, TransitionCause};

    fn rng() -> AgentRng {
        AgentRng::new(7, AgentId(0))
    }

    #[test]
    fn gate_blocks_everything_before_first_input() {
        let grid = open_grid(10, 10);
        let cfg = config();
        let mut c = ctx(&grid, &cfg, &[], pursued(72, 72, Direction::Left));
        c.started = false;
        let s = Strategy::for_kind(GhostKind::Chaser, &cfg, None);
        let mut g = ghost(GhostKind::Chaser, 16, 16, Direction::Left);
        g.state = BehaviorState::Frightened { elapsed: 5 };
        g.mode.elapsed = 3;

        let out = step(&mut g, &s, &c, &mut rng());
        assert_eq!(out.intent, Intent::Hold);
        assert!(out.transitions.is_empty());
        assert_eq!(g.state, BehaviorState::Frightened { elapsed: 5 });
        assert_eq!(g.mode.elapsed, 3);
    }

    #[test]
    fn frozen_ghost_does_nothing() {
        let grid = open_grid(10, 10);
        let cfg = config();
        let c = ctx(&grid, &cfg, &[], pursued(72, 72, Direction::Left));
        let s = Strategy::for_kind(GhostKind::Chaser, &cfg, None);
        let mut g = ghost(GhostKind::Chaser, 16, 16, Direction::Left);
        g.state = BehaviorState::Scatter;
        g.frozen = true;
        for _ in 0..1000 {
            assert_eq!(step(&mut g, &s, &c, &mut rng()).intent, Intent::Hold);
        }
        assert_eq!(g.state, BehaviorState::Scatter);
        assert_eq!(g.mode.elapsed, 0);
    }

    #[test]
    fn chase_toward_far_off_target_still_moves() {
        let grid = open_grid(10, 10);
        let cfg = config();
        let c = ctx(&grid, &cfg, &[], pursued(i32::MAX - 4, 0, Direction::Right));
        let s = Strategy::for_kind(GhostKind::Ambusher, &cfg, None);
        let mut g = ghost(GhostKind::Ambusher, 16, 16, Direction::Left);
        g.state = BehaviorState::Chase;
        g.mode.chasing = true;

        let out = step(&mut g, &s, &c, &mut rng());
        assert!(out.transitions.is_empty());
        let Intent::Move { target, .. } = out.intent else {
            panic!("expected a move, got {:?}", out.intent);
        };
        assert_eq!(target, Position::new(i32::MAX, 0));
    }

    #[test]
    fn house_releases_only_at_exit() {
        let grid = open_grid(10, 10);
        let cfg = config();
        let c = ctx(&grid, &cfg, &[], pursued(72, 72, Direction::Left));
        let s = Strategy::for_kind(GhostKind::Chaser, &cfg, None);
        let mut g = ghost(GhostKind::Chaser, 40, 40, Direction::Up);
        let mut r = rng();

        for _ in 0..2000 {
            let out = step(&mut g, &s, &c, &mut r);
            assert!(out.transitions.is_empty());
            assert_eq!(g.state, BehaviorState::House);
        }
        // House navigation heads for the exit.
        assert_eq!(step(&mut g, &s, &c, &mut r).intent.direction(), Some(Direction::Up));

        g.position = cfg.house.exit;
        let out = step(&mut g, &s, &c, &mut r);
        assert_eq!(g.state, BehaviorState::Scatter);
        assert_eq!(out.transitions.len(), 1);
        assert_eq!(out.transitions[0].cause, TransitionCause::LeftHouse);
        assert_eq!(out.transitions[0].from, StateKind::House);
    }

    #[test]
    fn house_release_follows_persisted_mode() {
        let grid = open_grid(10, 10);
        let cfg = config();
        let c = ctx(&grid, &cfg, &[], pursued(72, 72, Direction::Left));
        let s = Strategy::for_kind(GhostKind::Chaser, &cfg, None);
        let mut g = ghost(GhostKind::Chaser, 40, 8, Direction::Up);
        g.mode.chasing = true;
        step(&mut g, &s, &c, &mut rng());
        assert_eq!(g.state, BehaviorState::Chase);
    }

    #[test]
    fn mode_timer_alternates_scatter_and_chase() {
        let grid = open_grid(10, 10);
        let cfg = config();
        let c = ctx(&grid, &cfg, &[], pursued(72, 72, Direction::Left));
        let s = Strategy::for_kind(GhostKind::Chaser, &cfg, None);
        let mut g = ghost(GhostKind::Chaser, 16, 16, Direction::Left);
        g.state = BehaviorState::Scatter;
        let mut r = rng();

        for _ in 0..299 {
            assert!(step(&mut g, &s, &c, &mut r).transitions.is_empty());
        }
        let out = step(&mut g, &s, &c, &mut r);
        assert_eq!(g.state, BehaviorState::Chase);
        assert_eq!(out.transitions[0].cause, TransitionCause::ModeTimer);

        for _ in 0..1199 {
            step(&mut g, &s, &c, &mut r);
            assert_eq!(g.state, BehaviorState::Chase);
        }
        step(&mut g, &s, &c, &mut r);
        assert_eq!(g.state, BehaviorState::Scatter);
    }

    #[test]
    fn frightened_expires_exactly_at_420() {
        let grid = open_grid(10, 10);
        let cfg = config();
        let c = ctx(&grid, &cfg, &[], pursued(72, 72, Direction::Left));
        let s = Strategy::for_kind(GhostKind::Ambusher, &cfg, None);
        let mut g = ghost(GhostKind::Ambusher, 16, 16, Direction::Left);
        g.state = BehaviorState::Chase;
        g.mode.chasing = true;
        let mut r = rng();

        let t = on_signal(&mut g, Signal::PowerPelletConsumed).unwrap();
        assert_eq!((t.from, t.to, t.cause), (StateKind::Chase, StateKind::Frightened, TransitionCause::PowerPellet));

        for _ in 0..419 {
            let out = step(&mut g, &s, &c, &mut r);
            assert!(out.transitions.is_empty());
        }
        assert_eq!(g.state, BehaviorState::Frightened { elapsed: 419 });

        let out = step(&mut g, &s, &c, &mut r);
        assert_eq!(g.state, BehaviorState::Chase);
        assert_eq!(out.transitions[0].cause, TransitionCause::FrightenedTimer);
    }

    #[test]
    fn pellet_restarts_frightened_timer() {
        let grid = open_grid(10, 10);
        let cfg = config();
        let c = ctx(&grid, &cfg, &[], pursued(72, 72, Direction::Left));
        let s = Strategy::for_kind(GhostKind::Chaser, &cfg, None);
        let mut g = ghost(GhostKind::Chaser, 16, 16, Direction::Left);
        g.state = BehaviorState::Frightened { elapsed: 400 };

        assert!(on_signal(&mut g, Signal::PowerPelletConsumed).is_none());
        assert_eq!(g.state, BehaviorState::Frightened { elapsed: 0 });
        for _ in 0..100 {
            step(&mut g, &s, &c, &mut rng());
        }
        assert_eq!(g.state.kind(), StateKind::Frightened);
    }

    #[test]
    fn pellet_ignored_in_house_and_eaten() {
        let mut g = ghost(GhostKind::Chaser, 16, 16, Direction::Left);
        assert!(on_signal(&mut g, Signal::PowerPelletConsumed).is_none());
        assert_eq!(g.state, BehaviorState::House);
        g.state = BehaviorState::Eaten;
        assert!(on_signal(&mut g, Signal::PowerPelletConsumed).is_none());
        assert_eq!(g.state, BehaviorState::Eaten);
    }

    #[test]
    fn capture_only_when_frightened_and_addressed() {
        let mut g = ghost(GhostKind::Flanker, 16, 16, Direction::Left);
        g.state = BehaviorState::Chase;
        assert!(on_signal(&mut g, Signal::GhostCaptured(AgentId(0))).is_none());

        g.state = BehaviorState::frightened();
        assert!(on_signal(&mut g, Signal::GhostCaptured(AgentId(1))).is_none());
        let t = on_signal(&mut g, Signal::GhostCaptured(AgentId(0))).unwrap();
        assert_eq!(t.to, StateKind::Eaten);
        assert_eq!(g.state, BehaviorState::Eaten);
    }

    #[test]
    fn first_input_changes_no_state() {
        let mut g = ghost(GhostKind::Chaser, 16, 16, Direction::Left);
        assert!(on_signal(&mut g, Signal::FirstInput).is_none());
        assert_eq!(g.state, BehaviorState::House);
    }

    #[test]
    fn eaten_returns_home_then_leaves_again() {
        let grid = open_grid(10, 10);
        let cfg = config();
        let c = ctx(&grid, &cfg, &[], pursued(72, 72, Direction::Left));
        let s = Strategy::for_kind(GhostKind::Chaser, &cfg, None);
        let mut g = ghost(GhostKind::Chaser, 40, 56, Direction::Left);
        g.state = BehaviorState::Eaten;
        let mut r = rng();

        // Eaten heads for the entry, two tiles up.
        let out = step(&mut g, &s, &c, &mut r);
        assert_eq!(out.intent.direction(), Some(Direction::Up));
        assert_eq!(g.state, BehaviorState::Eaten);

        g.position = cfg.house.entry;
        let out = step(&mut g, &s, &c, &mut r);
        assert_eq!(g.state, BehaviorState::House);
        assert_eq!(out.transitions[0].cause, TransitionCause::ReachedHouse);

        g.position = cfg.house.exit;
        step(&mut g, &s, &c, &mut r);
        assert_eq!(g.state, BehaviorState::Scatter);
    }

    #[test]
    fn chase_steers_toward_strategy_target() {
        let grid = open_grid(10, 10);
        let cfg = config();
        let c = ctx(&grid, &cfg, &[], pursued(16, 72, Direction::Left));
        let s = Strategy::for_kind(GhostKind::Chaser, &cfg, None);
        let mut g = ghost(GhostKind::Chaser, 16, 16, Direction::Left);
        g.state = BehaviorState::Chase;
        g.mode.chasing = true;
        let out = step(&mut g, &s, &c, &mut rng());
        assert_eq!(
            out.intent,
            Intent::Move { direction: Direction::Down, next: Position::new(16, 24), target: Position::new(16, 72) }
        );
    }

    #[test]
    fn scatter_steers_toward_corner() {
        let grid = open_grid(10, 10);
        let cfg = config();
        let c = ctx(&grid, &cfg, &[], pursued(16, 72, Direction::Left));
        let s = Strategy::for_kind(GhostKind::Ambusher, &cfg, None);
        let mut g = ghost(GhostKind::Ambusher, 16, 16, Direction::Down);
        g.state = BehaviorState::Scatter;
        let out = step(&mut g, &s, &c, &mut rng());
        assert!(matches!(out.intent, Intent::Move { target, .. } if target == Position::new(0, 0)));
    }
}
