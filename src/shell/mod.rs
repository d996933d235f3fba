//! Interactive menu shell
//!
//! Reads free-text answers from any `BufRead` and writes prompts and results
//! to any `Write`, so a whole session can be scripted in tests. Not-found,
//! duplicate, invalid-input, and SMS errors are printed and the menu carries
//! on; storage and file system errors end the session.

mod menu;

pub use menu::MenuChoice;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::Settings;
use crate::error::{StokvelError, StokvelResult};
use crate::export::{export_all_csv, ExportedTable};
use crate::models::Amount;
use crate::notify::{send_sms, SmsSender};
use crate::reports::{GroupSummary, MemberListReport};
use crate::services::{ContributionService, GoalService, GroupService, MemberService, PayoutService};
use crate::storage::Storage;

const INVALID_AMOUNT: &str = "Invalid amount. Please enter a number.";

/// What the loop should do after a menu action
enum Flow {
    Continue,
    EndOfInput,
}

/// The interactive ledger session
pub struct Shell<'a, R, W> {
    storage: &'a Storage,
    settings: &'a Settings,
    sms: Option<&'a dyn SmsSender>,
    export_dir: PathBuf,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Create a shell over a store
    ///
    /// Exports go to the store's data directory, or the current directory
    /// for in-memory stores.
    pub fn new(storage: &'a Storage, settings: &'a Settings, input: R, output: W) -> Self {
        let export_dir = storage
            .paths()
            .map(|p| p.export_dir())
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            storage,
            settings,
            sms: None,
            export_dir,
            input,
            output,
        }
    }

    /// Enable SMS forwarding of summaries and member lists
    pub fn with_sms(mut self, sender: &'a dyn SmsSender) -> Self {
        self.sms = Some(sender);
        self
    }

    /// Write CSV exports somewhere other than the data directory
    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = dir.into();
        self
    }

    /// Give back the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu until the user exits or input ends
    ///
    /// Returns the tables exported on the way out.
    pub fn run(&mut self) -> StokvelResult<Vec<ExportedTable>> {
        loop {
            self.print_menu()?;

            let Some(answer) = self.ask("Select an option (1–8): ")? else {
                writeln!(self.output)?;
                return self.finish();
            };

            let choice = match MenuChoice::parse(&answer) {
                Some(MenuChoice::Exit) => return self.finish(),
                Some(choice) => choice,
                None => {
                    writeln!(self.output, "Please enter a valid option (1–8).")?;
                    continue;
                }
            };

            match self.dispatch(choice) {
                Ok(Flow::Continue) => {}
                Ok(Flow::EndOfInput) => {
                    writeln!(self.output)?;
                    return self.finish();
                }
                Err(e) if e.is_recoverable() => {
                    tracing::debug!(error = %e, ?choice, "Menu action failed");
                    writeln!(self.output, "{}", e)?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn print_menu(&mut self) -> StokvelResult<()> {
        writeln!(self.output, "\n===== HI, WELCOME TO STOKVEL MANAGER =====")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}", choice)?;
        }
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> StokvelResult<Flow> {
        match choice {
            MenuChoice::CreateGroup => self.create_group(),
            MenuChoice::AddMember => self.add_member(),
            MenuChoice::RecordContribution => self.record_contribution(),
            MenuChoice::RecordPayout => self.record_payout(),
            MenuChoice::ViewSummary => self.view_summary(),
            MenuChoice::SetGoal => self.set_goal(),
            MenuChoice::ListMembers => self.list_members(),
            MenuChoice::Exit => Ok(Flow::EndOfInput),
        }
    }

    fn create_group(&mut self) -> StokvelResult<Flow> {
        let Some(name) = self.ask("Enter group name: ")? else {
            return Ok(Flow::EndOfInput);
        };

        let group = GroupService::new(self.storage).create(&name)?;
        writeln!(self.output, "Group '{}' created.", group.name)?;
        Ok(Flow::Continue)
    }

    fn add_member(&mut self) -> StokvelResult<Flow> {
        let Some(group_name) = self.ask("Enter group name: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(name) = self.ask("Enter member name: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(role) = self.ask("Enter member role (Chairperson, member etc.): ")? else {
            return Ok(Flow::EndOfInput);
        };

        let member = MemberService::new(self.storage).add(&group_name, &name, &role)?;
        writeln!(
            self.output,
            "Member '{}' added to group '{}' as {}.",
            member.name,
            group_name.trim(),
            member.role
        )?;
        Ok(Flow::Continue)
    }

    fn record_contribution(&mut self) -> StokvelResult<Flow> {
        let Some(group_name) = self.ask("Enter group name: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(member_name) = self.ask("Who is contributing? ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(amount) = self.ask_amount("How much is the contribution? R")? else {
            return Ok(Flow::EndOfInput);
        };

        let contribution =
            ContributionService::new(self.storage).record(&group_name, &member_name, amount)?;
        writeln!(
            self.output,
            "{} contributed by '{}' in '{}'.",
            self.money(contribution.amount),
            member_name.trim(),
            group_name.trim()
        )?;
        Ok(Flow::Continue)
    }

    fn record_payout(&mut self) -> StokvelResult<Flow> {
        let Some(group_name) = self.ask("Enter group name: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(recipient) = self.ask("Who is being paid? ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(amount) = self.ask_amount("How much is the payout? R")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(reason) = self.ask("Reason for Payout? ")? else {
            return Ok(Flow::EndOfInput);
        };

        let payout =
            PayoutService::new(self.storage).record(&group_name, &recipient, amount, &reason)?;
        writeln!(
            self.output,
            "{} payout to '{}' for '{}' in '{}'.",
            self.money(payout.amount),
            payout.recipient,
            payout.reason,
            group_name.trim()
        )?;
        Ok(Flow::Continue)
    }

    fn view_summary(&mut self) -> StokvelResult<Flow> {
        let Some(group_name) = self.ask("Enter the group name to view summary: ")? else {
            return Ok(Flow::EndOfInput);
        };

        let summary = GroupSummary::generate(self.storage, &group_name)?;
        write!(self.output, "{}", summary.format_terminal(self.settings))?;

        let body = summary.format_sms(self.settings);
        self.offer_sms("Would you like to send this summary via SMS? (y/n): ", &body)
    }

    fn set_goal(&mut self) -> StokvelResult<Flow> {
        let Some(group_name) = self.ask("Enter group name: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(amount) = self.ask_amount("Enter savings goal amount: R")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(deadline) = self.ask("Enter deadline (YYYY-MM-DD): ")? else {
            return Ok(Flow::EndOfInput);
        };

        let goal = GoalService::new(self.storage).set(&group_name, amount, &deadline)?;
        writeln!(
            self.output,
            "Goal of {} set for group '{}' by {}.",
            self.money(goal.amount),
            group_name.trim(),
            goal.deadline
        )?;
        Ok(Flow::Continue)
    }

    fn list_members(&mut self) -> StokvelResult<Flow> {
        let Some(group_name) = self.ask("Enter the group name to view members: ")? else {
            return Ok(Flow::EndOfInput);
        };

        let report = MemberListReport::generate(self.storage, &group_name)?;
        write!(self.output, "{}", report.format_terminal())?;

        if report.is_empty() {
            return Ok(Flow::Continue);
        }
        self.offer_sms("Would you like to send this list via SMS? (y/n): ", &report.format_sms())
    }

    /// Ask whether to forward `body` by SMS and send it if so
    ///
    /// Delivery failures are reported here and do not fail the menu action.
    fn offer_sms(&mut self, question: &str, body: &str) -> StokvelResult<Flow> {
        let Some(answer) = self.ask(question)? else {
            return Ok(Flow::EndOfInput);
        };
        if !answer.trim().eq_ignore_ascii_case("y") {
            return Ok(Flow::Continue);
        }

        let Some(number) = self.ask("Enter the recipient's phone number (e.g., +2783xxxxxxx): ")?
        else {
            return Ok(Flow::EndOfInput);
        };

        match send_sms(self.sms, &number, body) {
            Ok(()) => writeln!(self.output, "SMS sent successfully!")?,
            Err(e) => {
                tracing::warn!(error = %e, "SMS delivery failed");
                writeln!(self.output, "{}", e)?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Export every table and say goodbye
    fn finish(&mut self) -> StokvelResult<Vec<ExportedTable>> {
        writeln!(self.output, "\nExporting database to CSV before exiting...")?;
        let exported = export_all_csv(self.storage, &self.export_dir)?;
        writeln!(self.output, "Database exported to CSV files.")?;
        writeln!(self.output, "Goodbye, Thanks for coming!")?;
        self.output.flush()?;
        Ok(exported)
    }

    /// Prompt for one line; `None` once input is exhausted
    fn ask(&mut self, prompt: &str) -> StokvelResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt for an amount, rejecting anything that is not a number
    fn ask_amount(&mut self, prompt: &str) -> StokvelResult<Option<Amount>> {
        let Some(answer) = self.ask(prompt)? else {
            return Ok(None);
        };

        Amount::parse(&answer)
            .map(Some)
            .map_err(|_| StokvelError::Validation(INVALID_AMOUNT.into()))
    }

    fn money(&self, amount: Amount) -> String {
        amount.format_with_symbol(&self.settings.currency_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StokvelPaths;
    use crate::notify::testing::RecordingSender;
    use std::io::Cursor;
    use tempfile::TempDir;

    /// Run a scripted session and return (output, exported tables)
    fn run_script(
        storage: &Storage,
        script: &str,
        sms: Option<&dyn SmsSender>,
        export_dir: &std::path::Path,
    ) -> (String, Vec<ExportedTable>) {
        let settings = Settings::default();
        let mut shell = Shell::new(storage, &settings, Cursor::new(script.as_bytes()), Vec::new())
            .with_export_dir(export_dir);
        if let Some(sender) = sms {
            shell = shell.with_sms(sender);
        }

        let exported = shell.run().unwrap();
        let output = String::from_utf8(shell.into_output()).unwrap();
        (output, exported)
    }

    #[test]
    fn test_worked_example_session() {
        let storage = Storage::in_memory().unwrap();
        let dir = TempDir::new().unwrap();
        let script = "1\nSavers\n\
                      2\nSavers\nThabo\nChairperson\n\
                      3\nSavers\nThabo\n100\n\
                      4\nSavers\nThabo\n40\nemergency\n\
                      5\nSavers\nn\n\
                      8\n";

        let (output, exported) = run_script(&storage, script, None, dir.path());

        assert!(output.contains("Group 'Savers' created."));
        assert!(output.contains("Member 'Thabo' added to group 'Savers' as Chairperson."));
        assert!(output.contains("R100.00 contributed by 'Thabo' in 'Savers'."));
        assert!(output.contains("R40.00 payout to 'Thabo' for 'emergency' in 'Savers'."));
        assert!(output.contains("Total Contributions: R100.00"));
        assert!(output.contains("Total Payouts: R40.00"));
        assert!(output.contains("TOTAL BALANCE: R60.00"));
        assert!(output.ends_with("Goodbye, Thanks for coming!\n"));

        assert_eq!(exported.len(), 4);
        assert!(dir.path().join("payouts.csv").exists());
        assert!(!dir.path().join("goals.csv").exists());
    }

    #[test]
    fn test_errors_are_reported_and_loop_continues() {
        let storage = Storage::in_memory().unwrap();
        let dir = TempDir::new().unwrap();
        let script = "1\nSavers\n\
                      1\nSavers\n\
                      2\nNowhere\nThabo\nmember\n\
                      3\nSavers\nThabo\nabc\n\
                      9\n\
                      8\n";

        let (output, _) = run_script(&storage, script, None, dir.path());

        assert!(output.contains("Group 'Savers' already exists."));
        assert!(output.contains("Group 'Nowhere' not found."));
        assert!(output.contains(INVALID_AMOUNT));
        assert!(output.contains("Please enter a valid option (1–8)."));
        assert_eq!(storage.row_count("groups").unwrap(), 1);
        assert_eq!(storage.row_count("members").unwrap(), 0);
    }

    #[test]
    fn test_invalid_payout_amount_skips_reason() {
        let storage = Storage::in_memory().unwrap();
        let dir = TempDir::new().unwrap();
        let script = "1\nSavers\n4\nSavers\nThabo\nlots\n8\n";

        let (output, _) = run_script(&storage, script, None, dir.path());

        assert!(output.contains(INVALID_AMOUNT));
        assert!(!output.contains("Reason for Payout?"));
        assert_eq!(storage.row_count("payouts").unwrap(), 0);
    }

    #[test]
    fn test_goal_and_member_list() {
        let storage = Storage::in_memory().unwrap();
        let dir = TempDir::new().unwrap();
        let script = "1\nSavers\n\
                      7\nSavers\n\
                      2\nSavers\nThabo\nChairperson\n\
                      6\nSavers\n5000\n2025-12-31\n\
                      7\nSavers\nn\n\
                      8\n";

        let (output, exported) = run_script(&storage, script, None, dir.path());

        assert!(output.contains("No members yet."));
        assert!(output.contains("Goal of R5000.00 set for group 'Savers' by 2025-12-31."));
        assert!(output.contains("   • Thabo (Chairperson)"));
        assert!(exported.iter().any(|e| e.table == "goals" && e.rows == 1));
    }

    #[test]
    fn test_summary_sent_by_sms() {
        let storage = Storage::in_memory().unwrap();
        let dir = TempDir::new().unwrap();
        let sender = RecordingSender::default();
        let script = "1\nSavers\n5\nSavers\ny\n+27830000000\n8\n";

        let (output, _) = run_script(&storage, script, Some(&sender), dir.path());

        assert!(output.contains("SMS sent successfully!"));
        let sent = sender.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "+27830000000");
        assert_eq!(
            sent[0].1,
            "Group: Savers\nTotal Contributions: R0.00\nTotal Payouts: R0.00\nBalance: R0.00"
        );
    }

    #[test]
    fn test_sms_failure_does_not_undo_writes() {
        let storage = Storage::in_memory().unwrap();
        let dir = TempDir::new().unwrap();
        let sender = RecordingSender::failing("provider down");
        let script = "1\nSavers\n2\nSavers\nThabo\nmember\n7\nSavers\ny\n+27830000000\n8\n";

        let (output, _) = run_script(&storage, script, Some(&sender), dir.path());

        assert!(output.contains("Failed to send SMS: provider down"));
        assert_eq!(storage.row_count("members").unwrap(), 1);
    }

    #[test]
    fn test_sms_not_configured() {
        let storage = Storage::in_memory().unwrap();
        let dir = TempDir::new().unwrap();
        let script = "1\nSavers\n5\nSavers\ny\n+27830000000\n8\n";

        let (output, _) = run_script(&storage, script, None, dir.path());
        assert!(output.contains("SMS is not configured"));
    }

    #[test]
    fn test_payouts_exceeding_contributions() {
        let storage = Storage::in_memory().unwrap();
        let dir = TempDir::new().unwrap();
        let script = "1\nSavers\n4\nSavers\nX\n20\nloan\n5\nSavers\nn\n8\n";

        let (output, _) = run_script(&storage, script, None, dir.path());

        assert!(output.contains("Total Payouts: R20.00"));
        assert!(output.contains("\nTOTAL BALANCE: R-20.00\n"));
    }

    #[test]
    fn test_negative_amount_confirmation() {
        let storage = Storage::in_memory().unwrap();
        let dir = TempDir::new().unwrap();
        let script = "1\nSavers\n2\nSavers\nThabo\nmember\n3\nSavers\nThabo\n-5\n8\n";

        let (output, _) = run_script(&storage, script, None, dir.path());
        assert!(output.contains("R-5.00 contributed by 'Thabo' in 'Savers'."));
    }

    #[test]
    fn test_padded_menu_numbers_rejected() {
        let storage = Storage::in_memory().unwrap();
        let dir = TempDir::new().unwrap();

        let (output, _) = run_script(&storage, "+1\n01\n8\n", None, dir.path());

        assert_eq!(output.matches("Please enter a valid option (1–8).").count(), 2);
        assert!(!output.contains("Enter group name: "));
        assert_eq!(storage.row_count("groups").unwrap(), 0);
    }

    #[test]
    fn test_broken_audit_log_keeps_session_alive() {
        let data_dir = TempDir::new().unwrap();
        std::fs::create_dir(data_dir.path().join("audit.log")).unwrap();
        let storage = Storage::open(StokvelPaths::with_base_dir(data_dir.path())).unwrap();

        let (output, exported) = run_script(&storage, "1\nSavers\n1\nOther\n8\n", None, data_dir.path());

        assert!(output.contains("Group 'Savers' created."));
        assert!(output.contains("Group 'Other' created."));
        assert!(output.ends_with("Goodbye, Thanks for coming!\n"));
        assert_eq!(exported.len(), 1);

        let csv = std::fs::read_to_string(data_dir.path().join("groups.csv")).unwrap();
        assert_eq!(csv.lines().count(), 3);
    }

    #[test]
    fn test_end_of_input_exports_and_exits() {
        let storage = Storage::in_memory().unwrap();
        let dir = TempDir::new().unwrap();

        let (output, exported) = run_script(&storage, "1\nSavers\n2\nSavers\n", None, dir.path());

        assert!(output.contains("Exporting database to CSV before exiting..."));
        assert_eq!(exported.len(), 1);
        assert_eq!(storage.row_count("members").unwrap(), 0);
    }
}
