//! WebAssembly bindings for the tic-tac-toe engine.
//!
//! This module exposes the game engine to JavaScript through wasm-bindgen.
//! The page owns the DOM; it forwards cell clicks and button presses here
//! and renders whatever JSON comes back.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use crate::actions::GameAction;
#[cfg(feature = "wasm")]
use crate::board::Board;
#[cfg(feature = "wasm")]
use crate::game::GameState;
#[cfg(feature = "wasm")]
use crate::overlay::{OverlayStyle, REVEAL_DELAY_MS};

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// WASM-exposed game wrapper
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub struct WasmGame {
    state: GameState,
}

#[cfg(feature = "wasm")]
impl Default for WasmGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
impl WasmGame {
    /// Start a new session
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmGame {
        WasmGame {
            state: GameState::new(),
        }
    }

    /// Place a mark, returns the round outcome as JSON.
    /// Throws if the index is not a whole number in 0-8.
    pub fn place(&mut self, index: f64) -> Result<String, JsValue> {
        let index = Board::parse_number(index)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let outcome = self.state.place(index);
        Ok(serde_json::to_string(&outcome).unwrap_or_else(|_| "{}".to_string()))
    }

    /// Apply an action from JSON, returns events JSON or error
    #[wasm_bindgen(js_name = applyAction)]
    pub fn apply_action(&mut self, action_json: &str) -> Result<String, JsValue> {
        let action: GameAction = serde_json::from_str(action_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid action JSON: {}", e)))?;

        match self.state.apply_action(action) {
            Ok(events) => {
                Ok(serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string()))
            }
            Err(e) => Err(JsValue::from_str(&format!("Action failed: {}", e))),
        }
    }

    /// Clear the board, keep the score ("new round" button)
    #[wasm_bindgen(js_name = resetRound)]
    pub fn reset_round(&mut self) {
        self.state.init_round();
    }

    /// Zero the score and clear the board ("reset all" button)
    #[wasm_bindgen(js_name = resetSession)]
    pub fn reset_session(&mut self) {
        self.state.reset_session();
    }

    /// Get the whole engine state as JSON
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> String {
        serde_json::to_string(&self.state.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Get the board as a JSON array of 9 entries ("X", "O" or null)
    #[wasm_bindgen(js_name = getBoard)]
    pub fn get_board(&self) -> String {
        serde_json::to_string(&self.state.board().to_json_friendly())
            .unwrap_or_else(|_| "[]".to_string())
    }

    /// Get the score as `{winsX, winsO, draws}` JSON
    #[wasm_bindgen(js_name = getScore)]
    pub fn get_score(&self) -> String {
        serde_json::to_string(&self.state.score()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Get the mark of the player to move ("X" or "O")
    #[wasm_bindgen(js_name = getCurrentPlayer)]
    pub fn get_current_player(&self) -> String {
        self.state.current_player().to_string()
    }

    /// Check if the round is over
    #[wasm_bindgen(js_name = isFinished)]
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Get the winner's mark (if the round was won)
    #[wasm_bindgen(js_name = getWinner)]
    pub fn get_winner(&self) -> Option<String> {
        self.state.outcome().winner.map(|p| p.to_string())
    }

    /// Get inline style values for the win-line overlay, or "null"
    #[wasm_bindgen(js_name = getLineStyle)]
    pub fn get_line_style(&self) -> String {
        match self.state.outcome().descriptor {
            Some(descriptor) => {
                serde_json::to_string(&OverlayStyle::for_descriptor(&descriptor))
                    .unwrap_or_else(|_| "null".to_string())
            }
            None => "null".to_string(),
        }
    }

    /// How long to wait before showing the win-line overlay
    #[wasm_bindgen(js_name = getRevealDelayMs)]
    pub fn get_reveal_delay_ms(&self) -> u32 {
        REVEAL_DELAY_MS
    }
}
