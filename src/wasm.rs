//! Bindings for driving the search from a web page board editor.

use js_sys::Array;
use wasm_bindgen::prelude::*;

use crate::board::Board;
use crate::solver::{find_longest_path, SearchOptions};

fn parse(board: &str) -> Result<Board, JsError> {
    board.parse::<Board>().map_err(|e| JsError::new(&e.to_string()))
}

/// Search a board given in the text format and return the path as an array of `[row, column]` pairs.
#[wasm_bindgen(js_name = longestPath)]
pub fn longest_path(board: &str) -> Result<Array, JsError> {
    let path = find_longest_path(&parse(board)?).map_err(|e| JsError::new(&e.to_string()))?;

    Ok(path.iter()
        .map(|location| Array::of2(&JsValue::from(location.0 as u32), &JsValue::from(location.1 as u32)))
        .collect())
}

/// Search a board given in the text format and return it drawn with the path on top.
#[wasm_bindgen(js_name = renderLongestPath)]
pub fn render_longest_path(board: &str) -> Result<String, JsError> {
    let board = parse(board)?;
    let solution = board.solve(&SearchOptions::default()).map_err(|e| JsError::new(&e.to_string()))?;

    Ok(solution.to_string())
}
