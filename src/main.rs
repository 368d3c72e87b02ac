//! Score sheet demo (default binary).
//!
//! Plays three scripted games on one lane - a finished game with a
//! handicap, a game still in progress and a perfect game - and prints
//! each player's sheet.

use std::io;

use anyhow::Result;

use tui_bowling::game::Game;
use tui_bowling::term::SheetView;
use tui_bowling::GameError;

const DUDE: &str = "The Dude";
const DONNY: &str = "Donny";
const SOBCHAK: &str = "Sobchak";

fn main() -> Result<()> {
    let mut game = Game::new();
    game.add_player(DUDE, 8)?;
    game.add_player(DONNY, 0)?;
    game.add_player(SOBCHAK, 0)?;

    // A 122 game, strike and spare bonuses included.
    for pins in [8, 1, 0, 9, 2, 8, 10, 6, 3, 7, 0, 5, 2, 10, 0, 6, 2, 8, 10] {
        game.roll(DUDE, pins)?;
    }

    // Donny never finishes his game.
    for pins in [8, 1, 0, 9, 2, 8, 10, 6, 3, 7, 0] {
        game.roll(DONNY, pins)?;
    }

    // Twelve strikes.
    for _ in 0..12 {
        game.roll(SOBCHAK, 10)?;
    }

    // The sheet is closed now; one more ball changes nothing.
    match game.roll(SOBCHAK, 10) {
        Err(GameError::NoMoreFramesAvailable) => {}
        other => anyhow::bail!("expected a closed sheet, got {other:?}"),
    }

    let view = SheetView::default();
    let mut stdout = io::stdout();
    for name in [DUDE, DONNY, SOBCHAK] {
        let sheet = game.scoring_sheet(name)?;
        view.render(&mut stdout, name, &sheet)?;
        println!();
    }

    Ok(())
}
