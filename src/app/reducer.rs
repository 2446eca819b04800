use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};

/// Single mutation entry point. Each feature gets a look at the action in
/// turn; the first one that handles it wins.
pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    if let Action::Quit = action {
        state.should_quit = true;
        return None;
    }

    if let UpdateResult::Handled(cmd) = features::palette::update(state, &action) {
        return cmd;
    }
    if let UpdateResult::Handled(cmd) = features::navigation::update(state, &action) {
        return cmd;
    }
    if let UpdateResult::Handled(cmd) = features::ui::update(state, &action) {
        return cmd;
    }
    if let UpdateResult::Handled(cmd) = features::pages::update(state, &action) {
        return cmd;
    }
    None
}
