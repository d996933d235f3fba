//! Group Summary Report
//!
//! Totals every contribution made by the group's members and every payout
//! made by the group, and derives the balance:
//!
//! `balance = total_contributions - total_payouts`

use std::collections::HashMap;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::error::StokvelResult;
use crate::models::{Amount, Contribution, Goal, Group, Payout};
use crate::services::{GoalService, GroupService};
use crate::storage::Storage;

/// A contribution together with the name of the member who made it
#[derive(Debug, Clone)]
pub struct ContributionLine {
    pub member_name: String,
    pub contribution: Contribution,
}

/// Summary of a group's ledger
#[derive(Debug, Clone)]
pub struct GroupSummary {
    pub group: Group,
    /// Contributions in recording order
    pub contributions: Vec<ContributionLine>,
    /// Payouts in recording order
    pub payouts: Vec<Payout>,
    pub goals: Vec<Goal>,
    pub total_contributions: Amount,
    pub total_payouts: Amount,
    pub balance: Amount,
}

#[derive(Tabled)]
struct ContributionRow {
    #[tabled(rename = "Group")]
    group: String,
    #[tabled(rename = "Member")]
    member: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Date")]
    date: String,
}

#[derive(Tabled)]
struct PayoutRow {
    #[tabled(rename = "Group")]
    group: String,
    #[tabled(rename = "Recipient")]
    recipient: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Reason")]
    reason: String,
    #[tabled(rename = "Date")]
    date: String,
}

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Deadline")]
    deadline: String,
    #[tabled(rename = "Progress")]
    progress: String,
}

impl GroupSummary {
    /// Generate the summary for a group by name
    pub fn generate(storage: &Storage, group_name: &str) -> StokvelResult<Self> {
        let group = GroupService::new(storage).require(group_name)?;

        let member_names: HashMap<_, _> = storage
            .members()
            .list_by_group(group.id)?
            .into_iter()
            .map(|m| (m.id, m.name))
            .collect();

        let contributions: Vec<ContributionLine> = storage
            .contributions()
            .list_by_group(group.id)?
            .into_iter()
            .map(|contribution| ContributionLine {
                member_name: member_names
                    .get(&contribution.member_id)
                    .cloned()
                    .unwrap_or_else(|| "Unknown".to_string()),
                contribution,
            })
            .collect();

        let payouts = storage.payouts().list_by_group(group.id)?;
        let goals = GoalService::new(storage).list_for(&group)?;

        let total_contributions: Amount = contributions.iter().map(|c| c.contribution.amount).sum();
        let total_payouts: Amount = payouts.iter().map(|p| p.amount).sum();

        Ok(Self {
            group,
            contributions,
            payouts,
            goals,
            total_contributions,
            total_payouts,
            balance: total_contributions - total_payouts,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let money = |a: Amount| a.format_with_symbol(&settings.currency_symbol);
        let mut output = String::new();

        output.push_str(&format!("\nContributions for '{}'\n", self.group.name));
        if self.contributions.is_empty() {
            output.push_str("   No contributions yet.\n");
        } else {
            let rows = self.contributions.iter().map(|line| ContributionRow {
                group: self.group.name.clone(),
                member: line.member_name.clone(),
                amount: money(line.contribution.amount),
                date: line.contribution.date.format(&settings.date_format).to_string(),
            });
            output.push_str(&Table::new(rows).with(Style::ascii()).to_string());
            output.push('\n');
            output.push_str(&format!(
                "Total Contributions: {}\n",
                money(self.total_contributions)
            ));
        }

        output.push_str(&format!("\nPayouts for '{}'\n", self.group.name));
        if self.payouts.is_empty() {
            output.push_str("   No payouts yet.\n");
        } else {
            let rows = self.payouts.iter().map(|p| PayoutRow {
                group: self.group.name.clone(),
                recipient: p.recipient.clone(),
                amount: money(p.amount),
                reason: p.reason.clone(),
                date: p.date.format(&settings.date_format).to_string(),
            });
            output.push_str(&Table::new(rows).with(Style::ascii()).to_string());
            output.push('\n');
            output.push_str(&format!("Total Payouts: {}\n", money(self.total_payouts)));
        }

        if !self.goals.is_empty() {
            output.push_str(&format!("\nGoals for '{}'\n", self.group.name));
            let rows = self.goals.iter().map(|g| GoalRow {
                target: money(g.amount),
                deadline: g.deadline.clone(),
                progress: g
                    .progress(self.balance)
                    .map(|p| format!("{:.1}%", p))
                    .unwrap_or_else(|| "-".to_string()),
            });
            output.push_str(&Table::new(rows).with(Style::ascii()).to_string());
            output.push('\n');
        }

        output.push_str(&format!("\nTOTAL BALANCE: {}\n", money(self.balance)));
        output
    }

    /// Plain-text body for an SMS
    pub fn format_sms(&self, settings: &Settings) -> String {
        let money = |a: Amount| a.format_with_symbol(&settings.currency_symbol);
        format!(
            "Group: {}\nTotal Contributions: {}\nTotal Payouts: {}\nBalance: {}",
            self.group.name,
            money(self.total_contributions),
            money(self.total_payouts),
            money(self.balance)
        )
    }
}
