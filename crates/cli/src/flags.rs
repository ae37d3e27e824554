use action_shrink_catalog::AccessLevel;
use clap::ValueEnum;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum LevelFlag {
    List,
    Read,
    Tagging,
    Write,
    PermissionsManagement,
}

impl LevelFlag {
    pub(crate) const fn as_domain(self) -> AccessLevel {
        match self {
            LevelFlag::List => AccessLevel::List,
            LevelFlag::Read => AccessLevel::Read,
            LevelFlag::Tagging => AccessLevel::Tagging,
            LevelFlag::Write => AccessLevel::Write,
            LevelFlag::PermissionsManagement => AccessLevel::PermissionsManagement,
        }
    }
}
