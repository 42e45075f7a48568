//! Browser bindings
//!
//! A page creates a `PentagonField`, calls `tick()` from its
//! `requestAnimationFrame` callback and draws the returned instances.

use wasm_bindgen::prelude::*;

use crate::consts::MAX_RADIUS;
use crate::platform::time::SystemClock;
use crate::renderer::instances;
use crate::settings::Settings;
use crate::sim::Population;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Logger already installed by the host page
        return;
    }
    log::info!("Pentagons ready");
}

/// A population of pentagons on the browser's wall clock
#[wasm_bindgen]
pub struct PentagonField {
    population: Population<SystemClock>,
}

#[wasm_bindgen]
impl PentagonField {
    #[wasm_bindgen(constructor)]
    pub fn new(count: usize) -> PentagonField {
        Self {
            population: Population::generate(count),
        }
    }

    /// Build from a JSON settings string
    #[wasm_bindgen(js_name = fromSettings)]
    pub fn from_settings(json: &str) -> Result<PentagonField, JsError> {
        let settings = Settings::from_json(json)?;
        Ok(Self {
            population: Population::with_clock(settings, SystemClock),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn len(&self) -> usize {
        self.population.len()
    }

    /// Frame every pentagon; 5 floats per pentagon: x, y, radius, rotation, opacity
    pub fn tick(&mut self) -> Vec<f32> {
        let frames = self.population.tick();
        bytemuck::cast_slice(&instances(&frames)).to_vec()
    }

    /// Advisory maximum radius, for sizing the canvas margin
    #[wasm_bindgen(js_name = maxRadius)]
    pub fn max_radius() -> f64 {
        MAX_RADIUS
    }
}
