//! Map selection geometry and size-bound validation.
//!
//! A selection is the rectangle the user draws on the map plus the map zoom
//! at draw time. Before any analysis request is issued the selection must
//! pass the configured physical size bounds; rejections carry a
//! user-displayable message and never reach the network.

use serde::{Deserialize, Serialize};

/// Kilometres per degree of latitude.
const KM_PER_DEG_LAT: f64 = 110.574;
/// Kilometres per degree of longitude at the equator.
const KM_PER_DEG_LON: f64 = 111.320;

/// Geographic bounding box in degrees.
///
/// Serialized on the wire as the 4-array `[west, south, east, north]`,
/// matching the `/analyze-bbox/` request body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "[f64; 4]", from = "[f64; 4]")]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl From<BoundingBox> for [f64; 4] {
    fn from(b: BoundingBox) -> Self {
        [b.west, b.south, b.east, b.north]
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from(v: [f64; 4]) -> Self {
        BoundingBox {
            west: v[0],
            south: v[1],
            east: v[2],
            north: v[3],
        }
    }
}

impl BoundingBox {
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        BoundingBox {
            west,
            south,
            east,
            north,
        }
    }

    /// Build a box of the given physical size centred on a point.
    pub fn from_center_km(lat: f64, lon: f64, width_km: f64, height_km: f64) -> Self {
        let half_h_deg = height_km / KM_PER_DEG_LAT / 2.0;
        let half_w_deg = width_km / (KM_PER_DEG_LON * lat.to_radians().cos()) / 2.0;
        BoundingBox {
            west: lon - half_w_deg,
            south: lat - half_h_deg,
            east: lon + half_w_deg,
            north: lat + half_h_deg,
        }
    }

    /// Physical width at the box's mid-latitude (equirectangular).
    pub fn width_km(&self) -> f64 {
        let mid_lat = (self.south + self.north) / 2.0;
        (self.east - self.west) * KM_PER_DEG_LON * mid_lat.to_radians().cos()
    }

    pub fn height_km(&self) -> f64 {
        (self.north - self.south) * KM_PER_DEG_LAT
    }

    pub fn area_km2(&self) -> f64 {
        self.width_km() * self.height_km()
    }

    /// True when the box spans a positive extent in both axes.
    pub fn has_extent(&self) -> bool {
        self.east > self.west && self.north > self.south
    }
}

/// A drawn map selection: bounding box plus the map zoom at draw time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub bbox: BoundingBox,
    pub zoom: u8,
}

impl Selection {
    pub fn new(bbox: BoundingBox, zoom: u8) -> Self {
        Selection { bbox, zoom }
    }
}

/// Validation failure for a drawn selection.
///
/// The `Display` text is what the UI shows next to the map; none of these
/// variants correspond to a network attempt.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SelectionError {
    #[error("selection has no extent: east must exceed west and north must exceed south")]
    InvalidExtent,
    #[error(
        "selection too small: {width_km:.2} km x {height_km:.2} km ({area_km2:.2} km2); \
         minimum is {min_side_km} km per side and {min_area_km2} km2"
    )]
    TooSmall {
        width_km: f64,
        height_km: f64,
        area_km2: f64,
        min_side_km: f64,
        min_area_km2: f64,
    },
    #[error(
        "selection too large: {width_km:.2} km x {height_km:.2} km ({area_km2:.2} km2); \
         maximum is {max_side_km} km per side and {max_area_km2} km2"
    )]
    TooLarge {
        width_km: f64,
        height_km: f64,
        area_km2: f64,
        max_side_km: f64,
        max_area_km2: f64,
    },
    #[error("zoom {zoom} outside supported range {min_zoom}..={max_zoom}")]
    ZoomOutOfRange { zoom: u8, min_zoom: u8, max_zoom: u8 },
}

/// Physical size bounds a selection must satisfy before analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeBounds {
    pub min_side_km: f64,
    pub max_side_km: f64,
    pub min_area_km2: f64,
    pub max_area_km2: f64,
    pub min_zoom: u8,
    pub max_zoom: u8,
}

impl Default for SizeBounds {
    fn default() -> Self {
        SizeBounds {
            min_side_km: 0.5,
            max_side_km: 50.0,
            min_area_km2: 0.25,
            max_area_km2: 500.0,
            min_zoom: 6,
            max_zoom: 13,
        }
    }
}

impl SizeBounds {
    /// Check a selection against the bounds.
    pub fn validate(&self, selection: &Selection) -> Result<(), SelectionError> {
        let bbox = &selection.bbox;
        if !bbox.has_extent() {
            return Err(SelectionError::InvalidExtent);
        }

        let width_km = bbox.width_km();
        let height_km = bbox.height_km();
        let area_km2 = bbox.area_km2();

        if width_km < self.min_side_km || height_km < self.min_side_km || area_km2 < self.min_area_km2
        {
            return Err(SelectionError::TooSmall {
                width_km,
                height_km,
                area_km2,
                min_side_km: self.min_side_km,
                min_area_km2: self.min_area_km2,
            });
        }
        if width_km > self.max_side_km || height_km > self.max_side_km || area_km2 > self.max_area_km2
        {
            return Err(SelectionError::TooLarge {
                width_km,
                height_km,
                area_km2,
                max_side_km: self.max_side_km,
                max_area_km2: self.max_area_km2,
            });
        }
        if selection.zoom < self.min_zoom || selection.zoom > self.max_zoom {
            return Err(SelectionError::ZoomOutOfRange {
                zoom: selection.zoom,
                min_zoom: self.min_zoom,
                max_zoom: self.max_zoom,
            });
        }
        Ok(())
    }
}
