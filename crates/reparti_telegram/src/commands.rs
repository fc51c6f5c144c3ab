//! Command parsing.
//!
//! Commands have the form `/name[@bot] [argument ...]`. Only the first
//! argument is used; it is lower-cased so department names compare
//! case-insensitively.

/// Leading character of every department name.
pub const TAG_MARKER: char = '@';

/// The commands the bot answers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum CommandKind {
    /// `/crea_reparto @name`
    #[display("crea_reparto")]
    CreateDepartment,
    /// `/aggiungi_membro @name`, sent as a reply
    #[display("aggiungi_membro")]
    AddMember,
    /// `/rimuovi_membro @name`, sent as a reply
    #[display("rimuovi_membro")]
    RemoveMember,
    /// `/lista_reparto @name`
    #[display("lista_reparto")]
    ListMembers,
}

impl CommandKind {
    /// Every command, in menu order.
    pub const ALL: [CommandKind; 4] = [
        CommandKind::CreateDepartment,
        CommandKind::AddMember,
        CommandKind::RemoveMember,
        CommandKind::ListMembers,
    ];

    /// Command name without the leading slash.
    pub fn name(self) -> &'static str {
        match self {
            Self::CreateDepartment => "crea_reparto",
            Self::AddMember => "aggiungi_membro",
            Self::RemoveMember => "rimuovi_membro",
            Self::ListMembers => "lista_reparto",
        }
    }

    /// Look up a command by name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    /// Whether only chat administrators may run the command.
    pub fn requires_admin(self) -> bool {
        !matches!(self, Self::ListMembers)
    }

    /// Whether the command must be sent as a reply to the target user.
    pub fn requires_reply(self) -> bool {
        matches!(self, Self::AddMember | Self::RemoveMember)
    }

    /// Short description shown in the Telegram command menu.
    pub fn description(self) -> &'static str {
        match self {
            Self::CreateDepartment => "(Admin) Crea un reparto, es: /crea_reparto @aero",
            Self::AddMember => "(Admin) Rispondi a un utente per aggiungerlo a un reparto",
            Self::RemoveMember => "(Admin) Rispondi a un utente per rimuoverlo da un reparto",
            Self::ListMembers => "Elenca i membri di un reparto",
        }
    }
}

/// The department argument of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandArgument {
    /// First argument, lower-cased.
    Department(String),
    /// No argument was given.
    Missing,
}

impl CommandArgument {
    fn from_args<'a>(mut args: impl Iterator<Item = &'a str>) -> Self {
        match args.next() {
            Some(first) => Self::Department(first.to_lowercase()),
            None => Self::Missing,
        }
    }
}

/// A parsed bot command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatCommand {
    kind: CommandKind,
    argument: CommandArgument,
}

impl ChatCommand {
    /// Create a command.
    pub fn new(kind: CommandKind, argument: CommandArgument) -> Self {
        Self { kind, argument }
    }

    /// Which command this is.
    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    /// The department argument.
    pub fn argument(&self) -> &CommandArgument {
        &self.argument
    }

    /// Parse message text into one of the bot's commands.
    ///
    /// Returns `None` for unknown commands and for commands addressed to a
    /// different bot (`/cmd@OtherBot`). When `bot_username` is unknown any
    /// addressee is accepted.
    ///
    /// ```
    /// use reparti_telegram::{ChatCommand, CommandArgument, CommandKind};
    ///
    /// let cmd = ChatCommand::parse("/crea_reparto @AERO extra", None).unwrap();
    /// assert_eq!(cmd.kind(), CommandKind::CreateDepartment);
    /// assert_eq!(cmd.argument(), &CommandArgument::Department("@aero".into()));
    /// ```
    pub fn parse(text: &str, bot_username: Option<&str>) -> Option<Self> {
        let mut tokens = text.split_whitespace();
        let head = tokens.next()?.strip_prefix('/')?;

        let (name, addressee) = match head.split_once('@') {
            Some((name, addressee)) => (name, Some(addressee)),
            None => (head, None),
        };

        if let (Some(addressee), Some(username)) = (addressee, bot_username) {
            if !addressee.eq_ignore_ascii_case(username) {
                return None;
            }
        }

        let kind = CommandKind::from_name(name)?;
        Some(Self::new(kind, CommandArgument::from_args(tokens)))
    }
}

/// Whether text starts with a bot command (`/` followed by a name).
pub fn is_command(text: &str) -> bool {
    text.strip_prefix('/')
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| !c.is_whitespace())
}
