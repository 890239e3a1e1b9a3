//! Main menu

/// Top-level menu entries, numbered as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Encrypt = 1,
    ViewAlgorithms = 2,
    Help = 3,
    Exit = 4,
}

impl MenuOption {
    pub const ALL: [MenuOption; 4] = [
        MenuOption::Encrypt,
        MenuOption::ViewAlgorithms,
        MenuOption::Help,
        MenuOption::Exit,
    ];

    pub fn value(self) -> i64 {
        self as i64
    }

    pub fn description(self) -> &'static str {
        match self {
            MenuOption::Encrypt => "Encrypt a message",
            MenuOption::ViewAlgorithms => "View available algorithms",
            MenuOption::Help => "Show help information",
            MenuOption::Exit => "Exit application",
        }
    }

    pub fn from_value(value: i64) -> Option<MenuOption> {
        Self::ALL.into_iter().find(|option| option.value() == value)
    }
}
