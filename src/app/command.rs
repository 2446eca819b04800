use crate::app::action::Action;
use crate::domain::nav::SectionId;
use crate::theme::ThemeMode;
use std::time::Duration;

/// Side effects requested by the reducer and carried out by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Set the location fragment. A changed fragment comes back as
    /// `Action::FragmentChanged`.
    WriteFragment(SectionId),
    LoadView(SectionId),
    PersistTheme(ThemeMode),
    /// Dispatch `Action` once after `Duration`.
    Delay(Duration, Box<Action>),
    Batch(Vec<Command>),
}

impl Command {
    #[must_use]
    pub fn delay(after: Duration, action: Action) -> Self {
        Command::Delay(after, Box::new(action))
    }

    /// Joins two optional commands.
    #[must_use]
    pub fn merge(a: Option<Command>, b: Option<Command>) -> Option<Command> {
        match (a, b) {
            (None, None) => None,
            (Some(c), None) | (None, Some(c)) => Some(c),
            (Some(Command::Batch(mut cmds)), Some(c)) => {
                cmds.push(c);
                Some(Command::Batch(cmds))
            }
            (Some(a), Some(b)) => Some(Command::Batch(vec![a, b])),
        }
    }
}
