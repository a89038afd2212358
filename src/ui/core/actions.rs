use crate::ui::screens::tasks::ContentEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    SelectNext,
    SelectPrevious,
    Back,

    // Intents forwarded to the screen content
    Content(ContentEvent),

    // Row action menu
    OpenTaskOptions(String),
    NextOption,
    PreviousOption,
    ChooseOption,
    CloseTaskOptions,

    // App control
    Quit,
    None,
}
