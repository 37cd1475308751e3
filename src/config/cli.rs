use crate::core::commands::{
    AddMeeting, AddPerson, DeleteMeeting, DeletePerson, FindPerson, ListPeople, SetEnabled,
    ShowPerson, UpNext,
};
use crate::core::Command;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "onexone")]
#[command(about = "Keep track of recurring one-on-one meetings")]
#[command(version)]
pub struct CliConfig {
    /// Use this datastore file instead of the configured one
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Record and rank meetings
    Meeting(MeetingCommand),
    /// Manage the roster
    Person(PersonCommand),
}

#[derive(Debug, Args)]
pub struct MeetingCommand {
    #[command(subcommand)]
    pub command: MeetingSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum MeetingSubcommand {
    /// Record a meeting
    Add {
        /// Part of the person's name
        person: String,
        /// Meeting date, YYYY-MM-DD
        date: String,
    },
    /// Remove a recorded meeting
    Delete {
        /// Part of the person's name
        person: String,
        /// Meeting date, YYYY-MM-DD
        date: String,
    },
    /// Show who is most overdue for a meeting
    UpNext,
}

#[derive(Debug, Args)]
pub struct PersonCommand {
    #[command(subcommand)]
    pub command: PersonSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum PersonSubcommand {
    /// Add a person to the roster
    Add { name: String },
    /// Remove a person and all of their meetings
    Delete { person: String },
    /// List everybody on the roster
    List,
    /// Find people whose name contains the fragment
    Find { fragment: String },
    /// Include a person in the up-next report
    Enable { person: String },
    /// Leave a person out of the up-next report
    Disable { person: String },
    /// Show a person's meetings, newest first
    Show { person: String },
}

impl Commands {
    pub fn into_command(self) -> Box<dyn Command> {
        match self {
            Commands::Meeting(cmd) => match cmd.command {
                MeetingSubcommand::Add { person, date } => Box::new(AddMeeting { person, date }),
                MeetingSubcommand::Delete { person, date } => {
                    Box::new(DeleteMeeting { person, date })
                }
                MeetingSubcommand::UpNext => Box::new(UpNext),
            },
            Commands::Person(cmd) => match cmd.command {
                PersonSubcommand::Add { name } => Box::new(AddPerson { name }),
                PersonSubcommand::Delete { person } => Box::new(DeletePerson { person }),
                PersonSubcommand::List => Box::new(ListPeople),
                PersonSubcommand::Find { fragment } => Box::new(FindPerson { fragment }),
                PersonSubcommand::Enable { person } => Box::new(SetEnabled {
                    person,
                    enabled: true,
                }),
                PersonSubcommand::Disable { person } => Box::new(SetEnabled {
                    person,
                    enabled: false,
                }),
                PersonSubcommand::Show { person } => Box::new(ShowPerson { person }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn command_name(args: &[&str]) -> &'static str {
        let cli = CliConfig::try_parse_from(args).unwrap();
        cli.command.unwrap().into_command().name()
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        CliConfig::command().debug_assert();
    }

    #[test]
    fn test_meeting_subcommands() {
        assert_eq!(
            command_name(&["onexone", "meeting", "add", "alice", "2020-01-01"]),
            "meeting add"
        );
        assert_eq!(
            command_name(&["onexone", "meeting", "delete", "alice", "2020-01-01"]),
            "meeting delete"
        );
        assert_eq!(command_name(&["onexone", "meeting", "up-next"]), "meeting up-next");
    }

    #[test]
    fn test_person_subcommands() {
        assert_eq!(command_name(&["onexone", "person", "add", "Alice Smith"]), "person add");
        assert_eq!(command_name(&["onexone", "person", "disable", "bob"]), "person disable");
        assert_eq!(command_name(&["onexone", "person", "enable", "bob"]), "person enable");
        assert_eq!(command_name(&["onexone", "person", "show", "bob"]), "person show");
    }

    #[test]
    fn test_global_flags() {
        let cli = CliConfig::try_parse_from([
            "onexone",
            "meeting",
            "up-next",
            "--data-file",
            "/tmp/data.json",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.data_file, Some(PathBuf::from("/tmp/data.json")));
    }

    #[test]
    fn test_add_requires_two_arguments() {
        assert!(CliConfig::try_parse_from(["onexone", "meeting", "add", "alice"]).is_err());
    }
}
