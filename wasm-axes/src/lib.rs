use wasm_bindgen::prelude::*;

use axislib::describe::Axes;
use axislib::ordering::{self, AxisOrdering};

#[wasm_bindgen(js_name = AxisOrdering)]
pub struct JsAxisOrdering {
    inner: AxisOrdering
}

impl From<AxisOrdering> for JsAxisOrdering {
    fn from(value: AxisOrdering) -> Self { JsAxisOrdering { inner: value } }
}

#[wasm_bindgen(js_class = AxisOrdering)]
impl JsAxisOrdering {
    #[wasm_bindgen(getter)]
    pub fn ndim(&self) -> usize {
        self.inner.ndim()
    }

    pub fn values(&self) -> Vec<isize> {
        self.inner.as_slice().to_vec()
    }

    /// `[axis, reversed]` pairs, one per output position.
    pub fn axes(&self) -> js_sys::Array {
        self.inner.axes()
            .map(|(ax, reversed)| js_sys::Array::of2(&JsValue::from_f64(ax as f64), &JsValue::from_bool(reversed)))
            .collect()
    }

    pub fn inverse(&self) -> JsAxisOrdering {
        self.inner.inverse().into()
    }

    #[wasm_bindgen(js_name = toJSON)]
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.inner)?)
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_string(&self) -> String {
        self.inner.to_string()
    }
}

#[wasm_bindgen(js_name = parseAxes)]
pub fn parse_axes(ndim: usize, specifier: &str) -> Result<JsAxisOrdering, String> {
    ordering::parse(ndim, specifier)
        .map(Into::into)
        .map_err(|e| e.to_string())
}

#[wasm_bindgen(js_name = checkAxes)]
pub fn check_axes(values: Box<[isize]>, ndim: usize) -> Result<(), String> {
    ordering::check(&values, ndim).map_err(|e| e.to_string())
}

#[wasm_bindgen(js_name = describeAxes)]
pub fn describe_axes(dims: Box<[usize]>, vox: Box<[f64]>, ordering: &JsAxisOrdering) -> Result<String, String> {
    Axes::with_default_labels(&dims, &vox, ordering.inner.clone())
        .map(|axes| axes.to_string())
        .map_err(|e| e.to_string())
}

pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

#[wasm_bindgen(start)]
fn main() -> Result<(), JsValue> {
    set_panic_hook();
    Ok(())
}
