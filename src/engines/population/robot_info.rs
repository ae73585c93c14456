use super::robot::Robot;
use crate::types::RobotName;

/// Selection-time snapshot of a robot
#[derive(Debug, Clone, PartialEq)]
pub struct RobotInfo {
    name: RobotName,
    weight: f64,
    score: f64,
    total_outcomes: u64,
    outcomes_at_last_child: u64,
    children: u32,
}

impl RobotInfo {
    /// Score defaults to the weight's magnitude
    pub fn new(name: RobotName, weight: f64, total_outcomes: u64, outcomes_at_last_child: u64) -> Self {
        Self {
            name,
            weight,
            score: weight.abs(),
            total_outcomes,
            outcomes_at_last_child,
            children: 0,
        }
    }

    /// `None` for a robot that was never saved
    pub fn from_robot(robot: &Robot) -> Option<Self> {
        let name = robot.name()?;
        let mut info = Self::new(
            name,
            robot.weight(),
            robot.total_outcomes(),
            robot.outcomes_at_last_child(),
        );
        info.children = robot.children();
        Some(info)
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = score.max(0.0);
        self
    }

    pub fn name(&self) -> RobotName {
        self.name
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn total_outcomes(&self) -> u64 {
        self.total_outcomes
    }

    pub fn children(&self) -> u32 {
        self.children
    }

    pub fn can_be_parent(&self, minimum_outcomes_to_allow: u64, minimum_outcomes_between: u64) -> bool {
        self.total_outcomes >= minimum_outcomes_to_allow
            && self.total_outcomes.saturating_sub(self.outcomes_at_last_child) >= minimum_outcomes_between
    }
}
