//! Main menu choices

use std::fmt;

/// One entry of the numbered main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateGroup,
    AddMember,
    RecordContribution,
    RecordPayout,
    ViewSummary,
    SetGoal,
    ListMembers,
    Exit,
}

impl MenuChoice {
    /// All choices in menu order
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::CreateGroup,
        MenuChoice::AddMember,
        MenuChoice::RecordContribution,
        MenuChoice::RecordPayout,
        MenuChoice::ViewSummary,
        MenuChoice::SetGoal,
        MenuChoice::ListMembers,
        MenuChoice::Exit,
    ];

    /// Parse the user's selection, exactly "1" through "8"
    pub fn parse(input: &str) -> Option<Self> {
        let choice = match input.trim() {
            "1" => MenuChoice::CreateGroup,
            "2" => MenuChoice::AddMember,
            "3" => MenuChoice::RecordContribution,
            "4" => MenuChoice::RecordPayout,
            "5" => MenuChoice::ViewSummary,
            "6" => MenuChoice::SetGoal,
            "7" => MenuChoice::ListMembers,
            "8" => MenuChoice::Exit,
            _ => return None,
        };
        Some(choice)
    }

    /// Menu number shown to the user
    pub fn number(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).map_or(0, |i| i + 1)
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::CreateGroup => "Create Group",
            MenuChoice::AddMember => "Add Member",
            MenuChoice::RecordContribution => "Record Contribution",
            MenuChoice::RecordPayout => "Record Payout",
            MenuChoice::ViewSummary => "View Summary",
            MenuChoice::SetGoal => "Set Savings Goal",
            MenuChoice::ListMembers => "List Group Members",
            MenuChoice::Exit => "EXIT",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}) {}", self.number(), self.label())
    }
}
