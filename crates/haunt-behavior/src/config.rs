//! Tunable behavior parameters.
//!
//! Durations are in seconds and converted to ticks with `tick_rate`, so the
//! defaults reproduce the arcade timings at 60 ticks per second:
//!
//! | Timer      | Seconds | Ticks |
//! |------------|---------|-------|
//! | frightened | 7       | 420   |
//! | chase      | 20      | 1200  |
//! | scatter    | 5       | 300   |
//!
//! Distances are in tiles and converted with the grid's tile size when used.

use haunt_core::{LogicClock, Position};
use haunt_maze::{EdgeMode, DEFAULT_ASTAR_CAP, DEFAULT_BFS_CAP};

use crate::{BehaviorError, BehaviorResult};

// ── HouseConfig ───────────────────────────────────────────────────────────────

/// Exact world positions that trigger house transitions.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HouseConfig {
    /// Reaching this position in `House` releases the ghost.
    pub exit:  Position,
    /// Reaching this position in `Eaten` puts the ghost back in `House`.
    pub entry: Position,
}

impl Default for HouseConfig {
    fn default() -> Self {
        Self {
            exit:  Position::new(208, 168),
            entry: Position::new(208, 200),
        }
    }
}

// ── BehaviorConfig ────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BehaviorConfig {
    /// Logic ticks per second.
    pub tick_rate:            u32,
    pub frightened_secs:      u32,
    pub chase_secs:           u32,
    pub scatter_secs:         u32,
    pub house:                HouseConfig,
    /// How far ahead of the pursued agent the ambusher aims.
    pub ambush_lead_tiles:    i32,
    /// How far ahead of the pursued agent the flanker's pivot sits.
    pub flank_lead_tiles:     i32,
    /// Within this distance the shy ghost retreats to its corner.
    pub retreat_radius_tiles: i32,
    pub bfs_cap:              u32,
    pub astar_cap:            u32,
    /// Treat the left and right maze edges as a connected tunnel.
    pub tunnel_wrap:          bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            tick_rate:            60,
            frightened_secs:      7,
            chase_secs:           20,
            scatter_secs:         5,
            house:                HouseConfig::default(),
            ambush_lead_tiles:    4,
            flank_lead_tiles:     2,
            retreat_radius_tiles: 8,
            bfs_cap:              DEFAULT_BFS_CAP,
            astar_cap:            DEFAULT_ASTAR_CAP,
            tunnel_wrap:          false,
        }
    }
}

impl BehaviorConfig {
    pub fn validate(&self) -> BehaviorResult<()> {
        let positive = [
            ("tick_rate", self.tick_rate),
            ("frightened_secs", self.frightened_secs),
            ("chase_secs", self.chase_secs),
            ("scatter_secs", self.scatter_secs),
            ("bfs_cap", self.bfs_cap),
            ("astar_cap", self.astar_cap),
        ];
        for (name, value) in positive {
            if value == 0 {
                return Err(BehaviorError::Config(format!("{name} must be positive")));
            }
        }
        let timers = [
            ("frightened_secs", self.frightened_secs),
            ("chase_secs", self.chase_secs),
            ("scatter_secs", self.scatter_secs),
        ];
        for (name, secs) in timers {
            if secs.checked_mul(self.tick_rate).is_none() {
                return Err(BehaviorError::Config(format!(
                    "{name} = {secs} overflows the tick counter at {} Hz",
                    self.tick_rate
                )));
            }
        }
        if self.ambush_lead_tiles < 0 || self.flank_lead_tiles < 0 || self.retreat_radius_tiles < 0 {
            return Err(BehaviorError::Config("tile distances must not be negative".into()));
        }
        if self.house.exit == self.house.entry {
            return Err(BehaviorError::Config(format!(
                "house exit and entry must differ, both are {}",
                self.house.exit
            )));
        }
        Ok(())
    }

    /// A fresh clock running at `tick_rate`.
    #[inline]
    pub fn clock(&self) -> LogicClock {
        LogicClock::new(self.tick_rate)
    }

    #[inline]
    pub fn frightened_ticks(&self) -> u32 {
        self.clock().ticks_for_secs(self.frightened_secs)
    }

    #[inline]
    pub fn chase_ticks(&self) -> u32 {
        self.clock().ticks_for_secs(self.chase_secs)
    }

    #[inline]
    pub fn scatter_ticks(&self) -> u32 {
        self.clock().ticks_for_secs(self.scatter_secs)
    }

    #[inline]
    pub fn edge_mode(&self) -> EdgeMode {
        if self.tunnel_wrap { EdgeMode::TunnelWrap } else { EdgeMode::Bounded }
    }
}
