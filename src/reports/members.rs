//! Member listing for a group

use crate::error::StokvelResult;
use crate::models::{Group, Member};
use crate::services::MemberService;
use crate::storage::Storage;

/// The members of one group
#[derive(Debug, Clone)]
pub struct MemberListReport {
    pub group: Group,
    pub members: Vec<Member>,
}

impl MemberListReport {
    /// Generate the member list for a group by name
    pub fn generate(storage: &Storage, group_name: &str) -> StokvelResult<Self> {
        let (group, members) = MemberService::new(storage).list_for_group(group_name)?;
        Ok(Self { group, members })
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    fn lines(&self) -> Vec<String> {
        self.members.iter().map(|m| format!("   • {}", m)).collect()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = format!("\nMembers in '{}':\n", self.group.name);

        if self.members.is_empty() {
            output.push_str("   No members yet.\n");
            return output;
        }

        for line in self.lines() {
            output.push_str(&line);
            output.push('\n');
        }
        output
    }

    /// Plain-text body for an SMS
    pub fn format_sms(&self) -> String {
        format!(
            "Group: {}\nMembers:\n{}",
            self.group.name,
            self.lines().join("\n")
        )
    }
}
