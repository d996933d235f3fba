//! Savings goal model

use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::ids::{GoalId, GroupId};

/// A target savings amount for a group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,
    pub group_id: GroupId,
    pub amount: Amount,
    /// Free-text deadline; usually `YYYY-MM-DD` but never parsed
    pub deadline: String,
}

impl Goal {
    /// How far a balance has progressed toward this goal, as a percentage
    pub fn progress(&self, balance: Amount) -> Option<f64> {
        balance.percent_of(self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress() {
        let goal = Goal {
            id: GoalId::new(1),
            group_id: GroupId::new(1),
            amount: Amount::new(500.0),
            deadline: "2025-12-31".into(),
        };

        assert_eq!(goal.progress(Amount::new(125.0)), Some(25.0));
        assert_eq!(goal.progress(Amount::new(-50.0)), Some(-10.0));
    }
}
