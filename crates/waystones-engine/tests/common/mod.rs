//! Shared fakes for engine integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use waystones_core::{BlockPos, Hand, PlayerId, Vec3, WarpItem};
use waystones_engine::config::WaystonesConfig;
use waystones_engine::world::{
    Actor, EventSink, InMemoryDirectory, ManualClock, Notice, WaystoneActivatedEvent,
};
use waystones_engine::WaystonesRuntime;

/// Clock start for every test: far from zero so "never used" (0) cooldowns read as elapsed.
pub const T0: i64 = 1_700_000_000_000;

pub struct TestActor {
    pub id: PlayerId,
    pub elevated: bool,
    pub pos: Vec3,
    pub levels: i32,
    pub main: Option<(WarpItem, u32)>,
    pub off: Option<(WarpItem, u32)>,
}

impl TestActor {
    pub fn new(id: &str) -> Self {
        Self {
            id: PlayerId::new(id),
            elevated: false,
            pos: Vec3::default(),
            levels: 0,
            main: None,
            off: None,
        }
    }

    pub fn at(mut self, x: f64, y: f64, z: f64) -> Self {
        self.pos = Vec3::new(x, y, z);
        self
    }

    pub fn with_levels(mut self, levels: i32) -> Self {
        self.levels = levels;
        self
    }

    pub fn creative(mut self) -> Self {
        self.elevated = true;
        self
    }

    pub fn holding(mut self, hand: Hand, item: WarpItem, count: u32) -> Self {
        match hand {
            Hand::Main => self.main = Some((item, count)),
            Hand::Off => self.off = Some((item, count)),
        }
        self
    }

    pub fn count_in(&self, hand: Hand) -> u32 {
        let slot = match hand {
            Hand::Main => self.main,
            Hand::Off => self.off,
        };
        slot.map(|(_, n)| n).unwrap_or(0)
    }
}

impl Actor for TestActor {
    fn id(&self) -> &PlayerId {
        &self.id
    }
    fn has_elevated_privilege(&self) -> bool {
        self.elevated
    }
    fn position(&self) -> Vec3 {
        self.pos
    }
    fn experience_level(&self) -> i32 {
        self.levels
    }
    fn add_experience_levels(&mut self, delta: i32) {
        self.levels += delta;
    }
    fn held_item(&self, hand: Hand) -> Option<WarpItem> {
        let slot = match hand {
            Hand::Main => self.main,
            Hand::Off => self.off,
        };
        slot.filter(|(_, n)| *n > 0).map(|(item, _)| item)
    }
    fn consume_one(&mut self, hand: Hand) {
        let slot = match hand {
            Hand::Main => &mut self.main,
            Hand::Off => &mut self.off,
        };
        if let Some((_, n)) = slot {
            *n = n.saturating_sub(1);
        }
    }
    fn set_position(&mut self, pos: Vec3) {
        self.pos = pos;
    }
}

#[derive(Default)]
pub struct RecordingEvents {
    pub notices: Mutex<Vec<(PlayerId, Notice)>>,
    pub activations: Mutex<Vec<WaystoneActivatedEvent>>,
    pub effects: Mutex<Vec<BlockPos>>,
}

impl RecordingEvents {
    pub fn notice_count(&self) -> usize {
        self.notices.lock().unwrap().len()
    }
    pub fn activation_count(&self) -> usize {
        self.activations.lock().unwrap().len()
    }
    pub fn effects(&self) -> Vec<BlockPos> {
        self.effects.lock().unwrap().clone()
    }
}

impl EventSink for RecordingEvents {
    fn notify(&self, player: &PlayerId, notice: Notice) {
        self.notices.lock().unwrap().push((player.clone(), notice));
    }
    fn publish(&self, event: WaystoneActivatedEvent) {
        self.activations.lock().unwrap().push(event);
    }
    fn trigger_visual_effect(&self, pos: BlockPos) {
        self.effects.lock().unwrap().push(pos);
    }
}

pub struct Harness {
    pub runtime: WaystonesRuntime,
    pub directory: Arc<InMemoryDirectory>,
    pub events: Arc<RecordingEvents>,
    pub clock: Arc<ManualClock>,
}

pub fn harness(cfg: WaystonesConfig) -> Harness {
    let directory = Arc::new(InMemoryDirectory::new());
    let events = Arc::new(RecordingEvents::default());
    let clock = Arc::new(ManualClock::new(T0));
    let runtime = WaystonesRuntime::with_clock(
        cfg,
        directory.clone(),
        events.clone(),
        clock.clone(),
    )
    .expect("runtime");
    Harness {
        runtime,
        directory,
        events,
        clock,
    }
}

pub fn config(yaml: &str) -> WaystonesConfig {
    waystones_engine::config::load_from_str(yaml).expect("config")
}
