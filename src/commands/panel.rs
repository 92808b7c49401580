use crate::error::AppError;
use crate::panels::{Panel, UiState};

pub struct PanelOptions {
    /// `None` means every panel.
    pub panel: Option<Panel>,
    pub toggle: bool,
}

pub fn execute_panel(options: PanelOptions) -> Result<(), AppError> {
    let mut state = UiState::load()?;
    let panels = match options.panel {
        Some(panel) => vec![panel],
        None => Panel::ALL.to_vec(),
    };

    if options.toggle {
        for panel in &panels {
            state.toggle(*panel);
        }
        state.save()?;
    }

    print_states(&state, &panels);
    Ok(())
}

fn print_states(state: &UiState, panels: &[Panel]) {
    for panel in panels {
        let label = if state.is_collapsed(*panel) { "collapsed" } else { "expanded" };
        println!("{:<8} {}", panel.as_str(), label);
    }
}
