use image::Rgba;

pub struct Colours {
    pub background: Rgba<u8>,
    pub header: Rgba<u8>,
    pub text: Rgba<u8>,
    pub moisture: Rgba<u8>,
    pub dry: Rgba<u8>,
    pub active: Rgba<u8>,
    pub inactive: Rgba<u8>,
    pub unknown: Rgba<u8>,
}

impl Default for Colours {
    fn default() -> Self {
        Self {
            background: Rgba([0, 0, 0, 255]),
            header: Rgba([114, 159, 207, 255]),   // Steel blue - for headers
            text: Rgba([238, 238, 236, 255]),     // Off-white - for general text
            moisture: Rgba([52, 101, 164, 255]),  // Royal blue - for the moisture bar
            dry: Rgba([245, 121, 0, 255]),        // Burnt orange - moisture below threshold
            active: Rgba([87, 174, 36, 255]),     // Vibrant green - irrigating
            inactive: Rgba([186, 189, 182, 255]), // Silver gray - idle
            unknown: Rgba([60, 60, 60, 255]),
        }
    }
}
