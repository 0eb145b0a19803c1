use js_sys::Float32Array;
use morsewave_core::{Decoder, ToneEncoder, Waveform};
use wasm_bindgen::prelude::*;

fn to_js_error(e: morsewave_core::MorseError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct WasmDecoded {
    morse: String,
    text: String,
}

#[wasm_bindgen]
impl WasmDecoded {
    #[wasm_bindgen(getter)]
    pub fn morse(&self) -> String {
        self.morse.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }
}

#[wasm_bindgen]
pub struct WasmDecoder {
    inner: Decoder,
}

#[wasm_bindgen]
impl WasmDecoder {
    /// Decoder assuming the given keying speed (words per minute)
    #[wasm_bindgen(constructor)]
    pub fn new(wpm: f64) -> Result<WasmDecoder, JsValue> {
        Decoder::new(wpm)
            .map(|decoder| WasmDecoder { inner: decoder })
            .map_err(to_js_error)
    }

    /// Decode mono audio samples (e.g. from an AudioBuffer channel)
    #[wasm_bindgen]
    pub fn decode(&self, samples: &[f32], sample_rate: u32) -> Result<WasmDecoded, JsValue> {
        let waveform = Waveform::new(samples.to_vec(), sample_rate).map_err(to_js_error)?;
        let decoded = self.inner.decode(&waveform).map_err(to_js_error)?;
        Ok(WasmDecoded {
            morse: decoded.morse,
            text: decoded.text,
        })
    }
}

#[wasm_bindgen]
pub struct WasmEncoder {
    inner: ToneEncoder,
}

#[wasm_bindgen]
impl WasmEncoder {
    #[wasm_bindgen(constructor)]
    pub fn new(wpm: f64, sample_rate: u32, frequency: f32) -> Result<WasmEncoder, JsValue> {
        ToneEncoder::new(wpm, sample_rate, frequency)
            .map(|encoder| WasmEncoder { inner: encoder })
            .map_err(to_js_error)
    }

    /// Render text as keyed audio samples for an AudioBuffer
    #[wasm_bindgen]
    pub fn encode(&self, text: &str) -> Result<Float32Array, JsValue> {
        let waveform = self.inner.encode(text).map_err(to_js_error)?;
        Ok(Float32Array::from(waveform.samples()))
    }
}

#[wasm_bindgen]
pub fn text_to_morse(text: &str) -> Result<String, JsValue> {
    morsewave_core::text_to_morse(text).map_err(to_js_error)
}

#[wasm_bindgen]
pub fn morse_to_text(morse: &str) -> Result<String, JsValue> {
    morsewave_core::morse_to_text(morse).map_err(to_js_error)
}
