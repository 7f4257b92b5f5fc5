//! Main TUI runner - the synchronous event loop

use ratatui::DefaultTerminal;
use tuxmate_app::Engine;
use tuxmate_core::prelude::*;

use crate::actions::{ActionRunner, SystemClipboard};
use crate::{event, render, terminal};

/// Run the TUI until the user quits
///
/// Restores the terminal and shuts the engine down on every exit path.
pub fn run(mut engine: Engine) -> Result<()> {
    terminal::install_panic_hook();
    let mut term = ratatui::try_init().map_err(|e| Error::terminal(e.to_string()))?;

    engine.start();
    let mut actions = ActionRunner::<SystemClipboard>::new();
    let result = run_loop(&mut term, &mut engine, &mut actions);

    ratatui::restore();
    engine.shutdown();

    if let Err(e) = &result {
        error!("TUI loop failed: {}", e);
    }
    result
}

fn run_loop(
    term: &mut DefaultTerminal,
    engine: &mut Engine,
    actions: &mut ActionRunner,
) -> Result<()> {
    while !engine.should_quit() {
        term.draw(|frame| render::view(frame, engine.state()))
            .map_err(|e| Error::terminal(e.to_string()))?;

        let Some(message) = event::poll()? else {
            continue;
        };

        for action in engine.process_message(message) {
            let outcome = actions.perform(action);
            let follow_up = engine.process_message(outcome);
            debug_assert!(follow_up.is_empty(), "outcome messages carry no actions");
        }
    }

    info!("Leaving TUI");
    Ok(())
}
