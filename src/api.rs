//! Browser-facing entry points. The running game lives in one process-wide
//! slot; every call locks it, acts, and hands back plain JS values.

use std::sync::Mutex;

use once_cell::sync::Lazy;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::{ConfigError, SessionError};
use crate::game::{GameSession, SessionConfig};
use crate::types::Position;

static GAME: Lazy<Mutex<Option<GameSession>>> = Lazy::new(|| Mutex::new(None));

/// Starts a new game. `config` may be `undefined` for the defaults
/// (`{ difficulty: "expert", ai_side: "first" }`).
#[wasm_bindgen]
pub fn new_game(config: JsValue) -> Result<JsValue, JsValue> {
    let config = if config.is_undefined() || config.is_null() {
        SessionConfig::default()
    } else {
        serde_wasm_bindgen::from_value::<SessionConfig>(config)
            .map_err(|err| js_error(ConfigError::Invalid(err.to_string())))?
    };

    let session = GameSession::new(config);
    let snapshot = session.to_snapshot();
    *lock()? = Some(session);
    to_js(&snapshot)
}

#[wasm_bindgen]
pub fn reset_game() -> Result<JsValue, JsValue> {
    with_session(|session| {
        session.reset();
        Ok(session.to_snapshot())
    })
}

/// Plays the human's move and returns the new state.
#[wasm_bindgen]
pub fn play_move(from_row: u8, from_col: u8, to_row: u8, to_col: u8) -> Result<JsValue, JsValue> {
    with_session(|session| {
        session.play(
            Position::new(from_row, from_col),
            Position::new(to_row, to_col),
        )?;
        Ok(session.to_snapshot())
    })
}

/// Runs the engine for its turn and returns the new state. Blocks for the
/// duration of the search.
#[wasm_bindgen]
pub fn ai_move() -> Result<JsValue, JsValue> {
    with_session(|session| {
        session.do_ai_move()?;
        Ok(session.to_snapshot())
    })
}

#[wasm_bindgen]
pub fn get_state() -> Result<JsValue, JsValue> {
    with_session(|session| Ok(session.to_snapshot()))
}

#[wasm_bindgen]
pub fn get_legal_moves() -> Result<JsValue, JsValue> {
    with_session(|session| Ok(session.legal_moves()))
}

/// Final scores, or `null` while the game is running.
#[wasm_bindgen]
pub fn get_result() -> Result<JsValue, JsValue> {
    with_session(|session| Ok(session.to_game_result()))
}

fn with_session<T, F>(f: F) -> Result<JsValue, JsValue>
where
    T: Serialize,
    F: FnOnce(&mut GameSession) -> Result<T, SessionError>,
{
    let mut slot = lock()?;
    let session = slot.as_mut().ok_or_else(|| js_error(SessionError::NoGame))?;
    let value = f(session).map_err(js_error)?;
    to_js(&value)
}

fn lock() -> Result<std::sync::MutexGuard<'static, Option<GameSession>>, JsValue> {
    GAME.lock()
        .map_err(|_| JsValue::from_str("game state lock poisoned"))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).map_err(JsValue::from)
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
