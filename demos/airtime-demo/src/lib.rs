use wasm_bindgen::prelude::*;
use airtime_engine::*;

mod game;
use game::AirtimeGame;

airtime_web::export_game!(AirtimeGame, "airtime-demo");
