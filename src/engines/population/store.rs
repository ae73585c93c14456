use super::robot::Robot;
use super::robot_info::RobotInfo;
use crate::types::RobotName;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

/// Storage the breeder reads candidates from and writes robots back to.
///
/// All methods take `&self`: implementations synchronize internally, so the
/// store can be handed to parallel fill workers.
pub trait Population: Sync {
    fn size(&self) -> usize;

    fn desired_size(&self) -> usize;

    fn has_space_to_breed(&self) -> bool {
        self.size() < self.desired_size()
    }

    /// Insert or replace. Unnamed robots get a fresh name.
    fn save_robot(&self, robot: Robot) -> RobotName;

    fn get_robot(&self, name: RobotName) -> Option<Robot>;
}

pub struct InMemoryPopulation {
    robots: RwLock<BTreeMap<RobotName, Robot>>,
    next_name: AtomicU64,
    desired_size: usize,
}

impl InMemoryPopulation {
    pub fn new(desired_size: usize) -> Self {
        Self {
            robots: RwLock::new(BTreeMap::new()),
            next_name: AtomicU64::new(1),
            desired_size,
        }
    }

    pub fn set_desired_size(&mut self, desired_size: usize) {
        self.desired_size = desired_size;
    }

    pub fn remove_robot(&self, name: RobotName) -> Option<Robot> {
        self.robots
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&name)
    }

    /// Snapshot of every robot, in name order
    pub fn robot_infos(&self) -> Vec<RobotInfo> {
        self.robots
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .values()
            .filter_map(RobotInfo::from_robot)
            .collect()
    }

    pub fn names(&self) -> Vec<RobotName> {
        self.robots
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .keys()
            .copied()
            .collect()
    }
}

impl Population for InMemoryPopulation {
    fn size(&self) -> usize {
        self.robots.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    fn desired_size(&self) -> usize {
        self.desired_size
    }

    fn save_robot(&self, mut robot: Robot) -> RobotName {
        let name = match robot.name() {
            Some(name) => name,
            None => {
                let name = RobotName(self.next_name.fetch_add(1, Ordering::Relaxed));
                robot.set_name(name);
                name
            }
        };
        self.robots
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(name, robot);
        name
    }

    fn get_robot(&self, name: RobotName) -> Option<Robot> {
        self.robots
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&name)
            .cloned()
    }
}
