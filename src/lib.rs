use wasm_bindgen::prelude::*;
use js_sys::Float32Array;

pub mod animation;
pub mod config;
pub mod math;
pub mod ornament;
pub mod placement;
pub mod population;
pub mod render;
pub mod scene;

pub use animation::{Mode, FrameInput, FrameStats, InstanceAnimator};
pub use config::SceneConfig;
pub use ornament::OrnamentKind;
pub use placement::PlacementGenerator;
pub use population::{InstanceRecord, Population, TypeGroup};
pub use render::{BatchSet, RenderBatch, Transform};
pub use scene::OrnamentScene;

/// Initialize panic hook and browser logging
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Safe to call more than once; later calls keep the first logger
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Ornament scene exposed to JavaScript.
///
/// The host calls `update` once per animation frame, then uploads every
/// batch whose `take_batch_dirty` returns true.
#[wasm_bindgen]
pub struct OrnamentTree {
    scene: OrnamentScene,
}

#[wasm_bindgen]
impl OrnamentTree {
    /// Create a scene with `count` ornaments and default parameters
    #[wasm_bindgen(constructor)]
    pub fn new(count: i32) -> Result<OrnamentTree, JsValue> {
        let count = usize::try_from(count).map_err(|_| {
            log::warn!("rejected negative ornament count {}", count);
            JsValue::from_str(&format!("ornament count must not be negative, got {}", count))
        })?;

        let scene = OrnamentScene::new(SceneConfig {
            count,
            ..Default::default()
        })
        .map_err(|e| JsValue::from_str(&e))?;

        Ok(Self { scene })
    }

    /// Create a scene from a YAML configuration
    #[wasm_bindgen]
    pub fn from_yaml(yaml: &str) -> Result<OrnamentTree, JsValue> {
        let scene = OrnamentScene::from_yaml(yaml).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { scene })
    }

    /// Advance one frame
    #[wasm_bindgen]
    pub fn update(&mut self, dt: f32) -> Result<(), JsValue> {
        self.scene.tick(dt).map(|_| ()).map_err(|e| JsValue::from_str(&e))
    }

    /// Select the formed (true) or chaos (false) layout
    #[wasm_bindgen]
    pub fn set_formed(&mut self, formed: bool) {
        self.scene.set_mode(Mode::from_formed(formed));
    }

    /// Flip the layout, returning true when now formed
    #[wasm_bindgen]
    pub fn toggle_mode(&mut self) -> bool {
        self.scene.toggle_mode().is_formed()
    }

    #[wasm_bindgen]
    pub fn is_formed(&self) -> bool {
        self.scene.mode().is_formed()
    }

    /// Resize the population; regenerates only when the size changes
    #[wasm_bindgen]
    pub fn set_count(&mut self, count: i32) -> Result<bool, JsValue> {
        self.scene
            .set_count_checked(i64::from(count))
            .map_err(|e| JsValue::from_str(&e))
    }

    #[wasm_bindgen]
    pub fn total_count(&self) -> usize {
        self.scene.population().total()
    }

    #[wasm_bindgen]
    pub fn batch_count(&self) -> usize {
        self.scene.batches().len()
    }

    /// Instance count of batch `index`, 0 when out of range
    #[wasm_bindgen]
    pub fn batch_len(&self, index: usize) -> usize {
        self.scene.batches().get(index).map(|b| b.len()).unwrap_or(0)
    }

    /// Kind name of batch `index`
    #[wasm_bindgen]
    pub fn batch_kind(&self, index: usize) -> Option<String> {
        OrnamentKind::from_index(index).map(|k| k.name().to_string())
    }

    /// Column-major instance matrices, 16 floats per instance
    #[wasm_bindgen]
    pub fn batch_matrices(&self, index: usize) -> Result<Float32Array, JsValue> {
        let batch = self.batch(index)?;
        Ok(Float32Array::from(&batch.matrix_data()[..]))
    }

    /// Instance colors, 3 floats per instance
    #[wasm_bindgen]
    pub fn batch_colors(&self, index: usize) -> Result<Float32Array, JsValue> {
        let batch = self.batch(index)?;
        Ok(Float32Array::from(&batch.color_data()[..]))
    }

    /// Read and clear the re-upload flag of batch `index`
    #[wasm_bindgen]
    pub fn take_batch_dirty(&mut self, index: usize) -> bool {
        self.scene
            .batches_mut()
            .get_mut(index)
            .map(|b| b.take_dirty())
            .unwrap_or(false)
    }
}

impl OrnamentTree {
    fn batch(&self, index: usize) -> Result<&RenderBatch, JsValue> {
        self.scene
            .batches()
            .get(index)
            .ok_or_else(|| JsValue::from_str(&format!("no batch at index {}", index)))
    }
}
