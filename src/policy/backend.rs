//! Backend type alias and device management
//!
//! The policy network is tiny (11 inputs, 3 outputs), so the CPU NdArray
//! backend is sufficient for serving. Inference never needs autodiff;
//! training happens in an external pipeline that produces the weight
//! artifact this crate loads.

use burn::backend::ndarray::{NdArray, NdArrayDevice};

/// Backend used for serving the trained policy (no autodiff)
pub type InferenceBackend = NdArray<f32>;

/// Get the default device for computation
pub fn default_device() -> NdArrayDevice {
    NdArrayDevice::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_device() {
        let device = default_device();
        let _device_copy = device.clone();
    }
}
